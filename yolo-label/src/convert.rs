//! Converters from [RawResult](crate::RawResult) to label collections.
//!
//! Each converter yields one collection per result, or `None` when the
//! result lacks the field the converter consumes.

use crate::{batch::Batch, common::*, result::RawResult};

pub mod detections;
pub mod instances;
pub mod keypoints;
pub mod polylines;

/// Converts boxes to detections with corner-form bounding boxes.
pub fn to_detections<'a, R>(
    results: R,
    confidence_thresh: Option<f64>,
) -> Result<Batch<Option<Detections>>>
where
    R: Into<Batch<&'a RawResult>>,
{
    results
        .into()
        .try_map(|result| detections::convert(result, confidence_thresh))
}

/// Converts instance segmentations to detections carrying cropped masks.
pub fn to_instances<'a, R>(
    results: R,
    confidence_thresh: Option<f64>,
) -> Result<Batch<Option<Detections>>>
where
    R: Into<Batch<&'a RawResult>>,
{
    results
        .into()
        .try_map(|result| instances::convert(result, confidence_thresh))
}

/// Converts instance segmentations to closed polylines.
///
/// A `tolerance` above 1 pixel traces the masks and simplifies the traced
/// rings by that distance; otherwise the model's own polygons are used.
pub fn to_polylines<'a, R>(
    results: R,
    confidence_thresh: Option<f64>,
    tolerance: f64,
    filled: bool,
) -> Result<Batch<Option<Polylines>>>
where
    R: Into<Batch<&'a RawResult>>,
{
    results
        .into()
        .try_map(|result| polylines::convert(result, confidence_thresh, tolerance, filled))
}

/// Converts keypoints, blanking out points below the threshold with NaN.
pub fn to_keypoints<'a, R>(
    results: R,
    confidence_thresh: Option<f64>,
) -> Result<Batch<Option<Keypoints>>>
where
    R: Into<Batch<&'a RawResult>>,
{
    results
        .into()
        .try_map(|result| keypoints::convert(result, confidence_thresh))
}

/// An entry is dropped only if both the threshold and its confidence are
/// defined and the confidence falls below the threshold.
pub(crate) fn is_confident(confidence: f64, confidence_thresh: Option<f64>) -> bool {
    match confidence_thresh {
        Some(thresh) if confidence < thresh => false,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_confidence_is_kept() {
        assert!(is_confident(0.1, None));
        assert!(is_confident(f64::NAN, Some(0.5)));
        assert!(is_confident(0.5, Some(0.5)));
        assert!(!is_confident(0.49, Some(0.5)));
    }
}
