//! # Renderers
//!
//! A renderer owns one visual layer of a widget: the card background
//! ([`RectangleRenderer`]), the title/subtitle pair ([`TextBlockRenderer`]) or
//! an icon ([`ImageRenderer`]). Each one
//!
//! - holds an immutable state value, replaced only through `update_state`,
//!   which is a no-op when the new value equals the old one;
//! - computes its own size in `measure` and caches the resulting
//!   [`Coordinates`](focuskit_core::Coordinates);
//! - paints itself in `draw` from those cached coordinates.
//!
//! ```rust
//! use std::rc::Rc;
//! use focuskit_core::*;
//! use focuskit_render::*;
//!
//! let host = Rc::new(PollingHost::new());
//! let ctx = RenderContext::new(host.clone());
//! let animator = Rc::new(FrameAnimator::with_system_clock());
//! let mut card = RectangleRenderer::new(ctx, animator, AnimationSpec::fast(), RectangleState::default());
//!
//! let size = card.measure(500, 120, 500, 120).unwrap();
//! assert_eq!(size, MeasuredSize::new(500, 120));
//!
//! card.update_state(|s| s);
//! assert!(host.take_requests().is_empty());
//! ```

mod image;
pub mod position;
mod rectangle;
mod renderer;
mod text_block;

pub use image::{ImageRenderer, ImageState, ScaleType};
pub use rectangle::{RectangleColors, RectangleRenderer, RectangleState, scale_padding};
pub use renderer::{LayoutInputs, LayoutRenderer, RenderContext};
pub use text_block::{TextBlockRenderer, TextBlockState, TextStyle, TextStyles};
