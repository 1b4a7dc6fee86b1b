use crate::{common::*, result::RawResult};

pub fn convert(result: &RawResult, confidence_thresh: Option<f64>) -> Result<Option<Keypoints>> {
    let raw = match &result.keypoints {
        Some(raw) => raw,
        None => return Ok(None),
    };
    let boxes = result.require_boxes()?;
    ensure!(
        raw.len() == boxes.len(),
        "expect {} keypoint sets, but get {}",
        boxes.len(),
        raw.len()
    );

    let keypoints: Keypoints = boxes
        .classes()?
        .into_iter()
        .enumerate()
        .map(|(index, class)| -> Result<_> {
            let mut points = raw.points(index);
            let confidence = raw.confidences(index);

            if let (Some(thresh), Some(confidence)) = (confidence_thresh, &confidence) {
                for (point, &conf) in points.iter_mut().zip(confidence) {
                    if conf < thresh {
                        *point = [f64::NAN, f64::NAN];
                    }
                }
            }

            Ok(Keypoint {
                label: result.label_of(class)?.to_string(),
                points,
                confidence,
            })
        })
        .collect::<Result<_>>()?;

    debug!(
        "converted {} keypoint sets of {} points",
        keypoints.len(),
        raw.num_points()
    );

    Ok(Some(keypoints))
}
