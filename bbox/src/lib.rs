//! Bounding box types in normalized or pixel units.
//!
//! Boxes are laid out x-first. [CxCyWH] is the center form emitted by YOLO
//! heads, [XYWH] is the corner form used by labels, and [XYXY] is the
//! two-corner form used to address pixel ranges.

mod common;

pub use transform::*;
mod transform;

pub use rect::*;
pub mod rect;

pub use cxcywh::*;
pub mod cxcywh;

pub use xywh::*;
pub mod xywh;

pub use xyxy::*;
pub mod xyxy;

pub mod prelude {
    pub use crate::rect::{Rect, RectNum};
}
