use thiserror::Error;

use crate::DrawableId;

/// Precondition failures raised while measuring. Not recovered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("no title provided")]
    MissingTitle,
}

/// Failures of the resource provider. `ImageRenderer` recovers from these by
/// treating the icon as absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    #[error("drawable `{0}` not found")]
    DrawableNotFound(DrawableId),
    #[error("drawable `{id}` could not be decoded: {reason}")]
    DrawableDecode { id: DrawableId, reason: String },
}
