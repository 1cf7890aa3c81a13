//! Anchor offsets for content inside a parent box.
//!
//! Offsets may be negative; clipping is left to the canvas.

use focuskit_core::{AxisAlignment, HorizontalAlignment, Paddings, VerticalAlignment};

/// Offset of `content_extent` inside `parent_extent` along one axis.
///
/// A non-positive `parent_extent` (a parent that has not been laid out yet)
/// keeps the start padding as the origin for `Center` and `End`.
pub fn axis_position(
    parent_extent: i32,
    content_extent: i32,
    alignment: AxisAlignment,
    pad_start: i32,
    pad_end: i32,
) -> i32 {
    let pos = match alignment {
        AxisAlignment::Start => pad_start,
        AxisAlignment::Center => {
            if parent_extent > 0 {
                (parent_extent - content_extent) / 2
            } else {
                pad_start + (parent_extent - content_extent) / 2
            }
        }
        AxisAlignment::End => {
            if parent_extent > 0 {
                parent_extent - content_extent - pad_end
            } else {
                pad_start + (parent_extent - content_extent)
            }
        }
    };
    log::trace!(
        "axis_position: parent={parent_extent} content={content_extent} {alignment:?} -> {pos}"
    );
    pos
}

pub fn horizontal_position(
    parent_width: i32,
    view_width: i32,
    alignment: HorizontalAlignment,
    paddings: &Paddings,
) -> i32 {
    axis_position(
        parent_width,
        view_width,
        alignment.into(),
        paddings.left,
        paddings.right,
    )
}

pub fn vertical_position(
    parent_height: i32,
    view_height: i32,
    alignment: VerticalAlignment,
    paddings: &Paddings,
) -> i32 {
    axis_position(
        parent_height,
        view_height,
        alignment.into(),
        paddings.top,
        paddings.bottom,
    )
}
