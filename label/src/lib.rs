//! Label containers for detections, instance masks, polylines and keypoints.
//!
//! All spatial coordinates are normalized to `[0, 1]` relative to the image
//! size, except instance masks whose grids span only their own box.

mod common;

pub mod detection;
pub use detection::*;

pub mod polyline;
pub use polyline::*;

pub mod keypoint;
pub use keypoint::*;

use serde::{Deserialize, Serialize};

/// Label collection produced for a single image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_cls")]
pub enum Labels {
    Detections(Detections),
    Polylines(Polylines),
    Keypoints(Keypoints),
}

impl Labels {
    pub fn len(&self) -> usize {
        match self {
            Self::Detections(labels) => labels.len(),
            Self::Polylines(labels) => labels.len(),
            Self::Keypoints(labels) => labels.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_detections(&self) -> Option<&Detections> {
        match self {
            Self::Detections(labels) => Some(labels),
            _ => None,
        }
    }

    pub fn as_polylines(&self) -> Option<&Polylines> {
        match self {
            Self::Polylines(labels) => Some(labels),
            _ => None,
        }
    }

    pub fn as_keypoints(&self) -> Option<&Keypoints> {
        match self {
            Self::Keypoints(labels) => Some(labels),
            _ => None,
        }
    }
}

impl From<Detections> for Labels {
    fn from(from: Detections) -> Self {
        Self::Detections(from)
    }
}

impl From<Polylines> for Labels {
    fn from(from: Polylines) -> Self {
        Self::Polylines(from)
    }
}

impl From<Keypoints> for Labels {
    fn from(from: Keypoints) -> Self {
        Self::Keypoints(from)
    }
}
