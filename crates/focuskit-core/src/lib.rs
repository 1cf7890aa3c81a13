//! # focuskit core
//!
//! Shared vocabulary for the focuskit renderers and widgets. Nothing here
//! draws pixels or owns a window; the pieces are:
//!
//! - geometry value types (`Paddings`, alignments, `Coordinates`, `MeasuredSize`)
//! - `Canvas`, the drawing surface renderers paint into, plus `RecordingCanvas`
//! - `Host`, the narrow slice of the hosting view a renderer may talk to
//! - `ResourceProvider`, resolving opaque style/color/dimension/drawable tokens
//! - `AnimationDriver`, a cancelable tween primitive, and `FrameAnimator`
//! - `Tracer`, an optional injected observability hook
//!
//! Everything runs on the host's UI thread. Shared handles are `Rc`, never
//! `Arc`, and no type here is `Send`.
//!
//! ```rust
//! use focuskit_core::*;
//!
//! let host = PollingHost::new();
//! host.request_redraw();
//! assert!(host.take_requests().contains(HostRequests::REDRAW));
//! assert!(host.take_requests().is_empty());
//! ```

pub mod animation;
pub mod canvas;
pub mod color;
pub mod error;
pub mod geometry;
pub mod host;
pub mod resources;
pub mod tests;
pub mod trace;

pub use animation::{
    AnimatedValue, AnimationDriver, AnimationSpec, Clock, Easing, FrameAnimator, Interpolate,
    ManualClock, SystemClock, TweenHandle, TweenListener,
};
pub use canvas::*;
pub use color::*;
pub use error::*;
pub use geometry::*;
pub use host::*;
pub use resources::*;
pub use trace::*;
