//! # Widgets
//!
//! Focusable rows and cards for a D-pad driven UI, each composed from the
//! renderers in `focuskit-render`:
//!
//! | widget | layers (back to front) |
//! |---|---|
//! | [`ToggleRow`] | background, title/subtitle, switch icon |
//! | [`NavigationRow`] | background, vertically centered title/subtitle, arrow icon |
//! | [`Card`] | background, title/subtitle |
//!
//! A widget owns a small state value (title, subtitle, focus, and for the
//! toggle the checked flag). `update_state` replaces it, returns early when
//! nothing changed, and otherwise projects it into the renderers, which in
//! turn ask the host for a redraw or relayout.
//!
//! The host drives everything else through [`CanvasWidget`]:
//!
//! ```rust
//! use std::rc::Rc;
//! use focuskit_core::*;
//! use focuskit_text::ApproxMeasurer;
//! use focuskit_widgets::*;
//!
//! let host = Rc::new(PollingHost::new());
//! let ctx = WidgetContext::new(
//!     host.clone(),
//!     Rc::new(StaticResources::new()),
//!     Rc::new(ApproxMeasurer::default()),
//!     Rc::new(FrameAnimator::with_system_clock()),
//! );
//! let mut row = ToggleRow::new(ctx, ToggleState {
//!     title: "Wi-Fi".into(),
//!     ..ToggleState::default()
//! });
//!
//! row.on_click();
//! assert!(row.is_checked());
//!
//! let size = row.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified).unwrap();
//! assert_eq!(size.width, 500);
//! ```

pub mod card;
pub mod config;
pub mod navigation;
pub mod tests;
pub mod toggle;
mod widget;

pub use card::{Card, CardState};
pub use config::{ToggleIcons, WidgetConfig};
pub use navigation::{NavigationRow, NavigationState};
pub use toggle::{ToggleRow, ToggleState};
pub use widget::{CanvasWidget, WidgetContext};
