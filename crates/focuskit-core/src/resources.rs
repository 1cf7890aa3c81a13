//! Opaque resource tokens and the provider that resolves them.
//!
//! Tokens are names; the core compares and hashes them but never looks inside.

use std::cell::RefCell;
use std::fmt;

use ahash::AHashMap;

use crate::{Color, MeasuredSize, ResourceError, TextPaint};

macro_rules! token {
    ($(#[$m:meta])* $name:ident) => {
        $(#[$m])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub &'static str);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.0)
            }
        }
    };
}

token!(
    /// Named text appearance (color, size, typeface).
    StyleToken
);
token!(ColorToken);
token!(DimenToken);
token!(DrawableId);

/// A loaded icon. Hosts map it back to their own bitmap/vector by `id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Drawable {
    pub id: DrawableId,
    /// Natural size, when the resource has one.
    pub intrinsic: Option<MeasuredSize>,
}

pub trait ResourceProvider {
    fn text_appearance(&self, style: StyleToken) -> Option<TextPaint>;
    fn color(&self, token: ColorToken) -> Option<Color>;
    fn dimension(&self, token: DimenToken) -> Option<i32>;
    fn load_drawable(&self, id: DrawableId) -> Result<Drawable, ResourceError>;
}

/// In-memory provider for demos and tests.
#[derive(Default)]
pub struct StaticResources {
    styles: AHashMap<StyleToken, TextPaint>,
    colors: AHashMap<ColorToken, Color>,
    dimens: AHashMap<DimenToken, i32>,
    drawables: AHashMap<DrawableId, Result<Drawable, String>>,
    loads: RefCell<AHashMap<DrawableId, u32>>,
}

impl StaticResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, token: StyleToken, paint: TextPaint) -> Self {
        self.styles.insert(token, paint);
        self
    }

    pub fn with_color(mut self, token: ColorToken, color: Color) -> Self {
        self.colors.insert(token, color);
        self
    }

    pub fn with_dimen(mut self, token: DimenToken, px: i32) -> Self {
        self.dimens.insert(token, px);
        self
    }

    pub fn with_drawable(mut self, id: DrawableId, intrinsic: Option<MeasuredSize>) -> Self {
        self.drawables.insert(id, Ok(Drawable { id, intrinsic }));
        self
    }

    /// Registers a drawable whose every load fails with a decode error.
    pub fn with_broken_drawable(mut self, id: DrawableId, reason: impl Into<String>) -> Self {
        self.drawables.insert(id, Err(reason.into()));
        self
    }

    /// How many times `id` was requested through `load_drawable`.
    pub fn load_count(&self, id: DrawableId) -> u32 {
        self.loads.borrow().get(&id).copied().unwrap_or(0)
    }

    pub fn total_loads(&self) -> u32 {
        self.loads.borrow().values().sum()
    }
}

impl ResourceProvider for StaticResources {
    fn text_appearance(&self, style: StyleToken) -> Option<TextPaint> {
        self.styles.get(&style).copied()
    }

    fn color(&self, token: ColorToken) -> Option<Color> {
        self.colors.get(&token).copied()
    }

    fn dimension(&self, token: DimenToken) -> Option<i32> {
        self.dimens.get(&token).copied()
    }

    fn load_drawable(&self, id: DrawableId) -> Result<Drawable, ResourceError> {
        *self.loads.borrow_mut().entry(id).or_insert(0) += 1;
        match self.drawables.get(&id) {
            Some(Ok(d)) => Ok(*d),
            Some(Err(reason)) => Err(ResourceError::DrawableDecode {
                id,
                reason: reason.clone(),
            }),
            None => Err(ResourceError::DrawableNotFound(id)),
        }
    }
}
