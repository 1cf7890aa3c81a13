//! Dimensions, colors and resource names shared by the widgets.

use focuskit_core::{AnimationSpec, Color, ColorToken, DimenToken, DrawableId, Easing, ResourceProvider};
use focuskit_render::RectangleColors;

/// Dimension tokens resolved by [`WidgetConfig::from_resources`].
pub mod dimens {
    use focuskit_core::DimenToken;

    pub const PC_CORNER_RADIUS: DimenToken = DimenToken("pc_corner_radius");
    pub const PC_VERTICAL_PADDING: DimenToken = DimenToken("pc_vertical_padding");
    pub const PC_HORIZONTAL_PADDING: DimenToken = DimenToken("pc_horizontal_padding");
    pub const PC_TITLE_SPACING: DimenToken = DimenToken("pc_title_spacing");
    pub const PC_TOGGLE_TITLE_WIDTH: DimenToken = DimenToken("pc_toggle_title_width");
    pub const PC_TOGGLE_TITLE_PADDING_RIGHT: DimenToken = DimenToken("pc_toggle_title_padding_right");
    pub const PC_TOGGLE_VIEW_WIDTH: DimenToken = DimenToken("pc_toggle_view_width");
    pub const PC_TOGGLE_VIEW_HEIGHT: DimenToken = DimenToken("pc_toggle_view_height");
    pub const PC_TOGGLE_ICON_WIDTH: DimenToken = DimenToken("pc_toggle_icon_width");
    pub const PC_TOGGLE_ICON_HEIGHT: DimenToken = DimenToken("pc_toggle_icon_height");
    pub const PC_MIN_CONTENT_WIDTH: DimenToken = DimenToken("pc_min_content_width");
    pub const PC_NAVIGATION_TITLE_WIDTH: DimenToken = DimenToken("pc_navigation_title_width");
    pub const PC_NAVIGATION_ICON_WIDTH: DimenToken = DimenToken("pc_navigation_icon_width");
    pub const PC_NAVIGATION_ICON_HEIGHT: DimenToken = DimenToken("pc_navigation_icon_height");
    pub const PC_CARD_WIDTH: DimenToken = DimenToken("pc_card_width");
}

pub mod colors {
    use focuskit_core::ColorToken;

    pub const PC_CARD_FOCUSED: ColorToken = ColorToken("pc_card_focused");
    pub const PC_CARD_UNFOCUSED: ColorToken = ColorToken("pc_card_unfocused");
}

pub mod drawables {
    use focuskit_core::DrawableId;

    pub const IMG_TOGGLE_ON: DrawableId = DrawableId("img_toggle_on");
    pub const IMG_TOGGLE_OFF: DrawableId = DrawableId("img_toggle_off");
    pub const IMG_RIGHT_ARROW_FOCUSED: DrawableId = DrawableId("img_right_arrow_focused");
    pub const IMG_RIGHT_ARROW_UNFOCUSED: DrawableId = DrawableId("img_right_arrow_unfocused");
}

/// Everything the widgets size and paint themselves with.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WidgetConfig {
    pub corner_radius_px: f32,
    pub focus_scale_percent: f32,
    pub focus_animation: AnimationSpec,
    pub focused_color: Color,
    pub unfocused_color: Color,

    pub vertical_padding: i32,
    pub horizontal_padding: i32,
    pub title_spacing: i32,
    pub max_title_lines: usize,
    pub max_subtitle_lines: usize,

    pub toggle_title_width: i32,
    pub toggle_title_padding_right: i32,
    pub toggle_view_width: i32,
    pub toggle_view_height: i32,
    pub toggle_icon_width: i32,
    pub toggle_icon_height: i32,

    pub navigation_width: i32,
    pub navigation_title_width: i32,
    pub navigation_icon_width: i32,
    pub navigation_icon_height: i32,

    pub card_width: i32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        let colors = RectangleColors::default();
        Self {
            corner_radius_px: 16.0,
            focus_scale_percent: 0.03,
            focus_animation: AnimationSpec::tween(
                std::time::Duration::from_millis(150),
                Easing::EaseInOut,
            ),
            focused_color: colors.focused,
            unfocused_color: colors.unfocused,

            vertical_padding: 24,
            horizontal_padding: 32,
            title_spacing: 4,
            max_title_lines: 1,
            max_subtitle_lines: 2,

            toggle_title_width: 360,
            toggle_title_padding_right: 24,
            toggle_view_width: 500,
            toggle_view_height: 120,
            toggle_icon_width: 64,
            toggle_icon_height: 36,

            navigation_width: 500,
            navigation_title_width: 360,
            navigation_icon_width: 32,
            navigation_icon_height: 32,

            card_width: 500,
        }
    }
}

impl WidgetConfig {
    /// Defaults overridden by whatever tokens `resources` defines.
    pub fn from_resources(resources: &dyn ResourceProvider) -> Self {
        let mut cfg = Self::default();
        let dimen = |token: DimenToken, slot: &mut i32| {
            if let Some(px) = resources.dimension(token) {
                *slot = px;
            }
        };

        let mut radius = cfg.corner_radius_px.round() as i32;
        dimen(dimens::PC_CORNER_RADIUS, &mut radius);
        cfg.corner_radius_px = radius as f32;

        dimen(dimens::PC_VERTICAL_PADDING, &mut cfg.vertical_padding);
        dimen(dimens::PC_HORIZONTAL_PADDING, &mut cfg.horizontal_padding);
        dimen(dimens::PC_TITLE_SPACING, &mut cfg.title_spacing);
        dimen(dimens::PC_TOGGLE_TITLE_WIDTH, &mut cfg.toggle_title_width);
        dimen(
            dimens::PC_TOGGLE_TITLE_PADDING_RIGHT,
            &mut cfg.toggle_title_padding_right,
        );
        dimen(dimens::PC_TOGGLE_VIEW_WIDTH, &mut cfg.toggle_view_width);
        dimen(dimens::PC_TOGGLE_VIEW_HEIGHT, &mut cfg.toggle_view_height);
        dimen(dimens::PC_TOGGLE_ICON_WIDTH, &mut cfg.toggle_icon_width);
        dimen(dimens::PC_TOGGLE_ICON_HEIGHT, &mut cfg.toggle_icon_height);
        dimen(dimens::PC_MIN_CONTENT_WIDTH, &mut cfg.navigation_width);
        dimen(dimens::PC_NAVIGATION_TITLE_WIDTH, &mut cfg.navigation_title_width);
        dimen(dimens::PC_NAVIGATION_ICON_WIDTH, &mut cfg.navigation_icon_width);
        dimen(dimens::PC_NAVIGATION_ICON_HEIGHT, &mut cfg.navigation_icon_height);
        dimen(dimens::PC_CARD_WIDTH, &mut cfg.card_width);

        let color = |token: ColorToken, fallback: Color| resources.color(token).unwrap_or(fallback);
        cfg.focused_color = color(colors::PC_CARD_FOCUSED, cfg.focused_color);
        cfg.unfocused_color = color(colors::PC_CARD_UNFOCUSED, cfg.unfocused_color);
        cfg
    }

    pub fn rectangle_colors(&self) -> RectangleColors {
        RectangleColors {
            focused: self.focused_color,
            unfocused: self.unfocused_color,
        }
    }
}

/// The four toggle icons, keyed by checked state then focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ToggleIcons {
    pub focused_checked: DrawableId,
    pub unfocused_checked: DrawableId,
    pub focused_unchecked: DrawableId,
    pub unfocused_unchecked: DrawableId,
}

impl Default for ToggleIcons {
    fn default() -> Self {
        Self {
            focused_checked: drawables::IMG_TOGGLE_ON,
            unfocused_checked: drawables::IMG_TOGGLE_ON,
            focused_unchecked: drawables::IMG_TOGGLE_OFF,
            unfocused_unchecked: drawables::IMG_TOGGLE_OFF,
        }
    }
}

impl ToggleIcons {
    /// `(focused, unfocused)` ids for the given checked state.
    pub fn pair(&self, checked: bool) -> (DrawableId, DrawableId) {
        if checked {
            (self.focused_checked, self.unfocused_checked)
        } else {
            (self.focused_unchecked, self.unfocused_unchecked)
        }
    }
}
