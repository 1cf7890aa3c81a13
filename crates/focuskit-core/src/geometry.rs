#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }
}

/// Edge insets in whole pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Paddings {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Paddings {
    pub const ZERO: Paddings = Paddings {
        top: 0,
        right: 0,
        bottom: 0,
        left: 0,
    };

    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn all(v: i32) -> Self {
        Self::new(v, v, v, v)
    }

    pub const fn symmetric(vertical: i32, horizontal: i32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub const fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    pub const fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalAlignment {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Alignment along a single axis; `Start` is left/top, `End` is right/bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisAlignment {
    Start,
    Center,
    End,
}

impl From<HorizontalAlignment> for AxisAlignment {
    fn from(a: HorizontalAlignment) -> Self {
        match a {
            HorizontalAlignment::Left => AxisAlignment::Start,
            HorizontalAlignment::Center => AxisAlignment::Center,
            HorizontalAlignment::Right => AxisAlignment::End,
        }
    }
}

impl From<VerticalAlignment> for AxisAlignment {
    fn from(a: VerticalAlignment) -> Self {
        match a {
            VerticalAlignment::Top => AxisAlignment::Start,
            VerticalAlignment::Center => AxisAlignment::Center,
            VerticalAlignment::Bottom => AxisAlignment::End,
        }
    }
}

/// Cached output of a renderer's last measure/draw pass. Always replaced
/// wholesale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coordinates {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Coordinates {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Box of `width`×`height` whose top-left corner sits at `(left, top)`.
    pub const fn from_origin(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self::new(left, top, left + width, top + height)
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    pub fn to_rect(self) -> Rect {
        Rect {
            x: self.left as f32,
            y: self.top as f32,
            w: self.width() as f32,
            h: self.height() as f32,
        }
    }
}

/// Size a renderer or widget reports after measuring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MeasuredSize {
    pub width: i32,
    pub height: i32,
}

impl MeasuredSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}
