use super::is_confident;
use crate::{common::*, result::RawResult};

pub fn convert(result: &RawResult, confidence_thresh: Option<f64>) -> Result<Option<Detections>> {
    let boxes = match &result.boxes {
        Some(boxes) => boxes,
        None => return Ok(None),
    };

    let detections: Detections = izip!(boxes.classes()?, boxes.rects()?, boxes.confidences())
        .filter(|(_, _, confidence)| is_confident(*confidence, confidence_thresh))
        .map(|(class, rect, confidence)| -> Result<_> {
            let label = result.label_of(class)?;
            let detection = Detection::new(label, &XYWH::from(&rect)).with_confidence(confidence);
            Ok(detection)
        })
        .collect::<Result<_>>()?;

    debug!("kept {} out of {} boxes", detections.len(), boxes.len());

    Ok(Some(detections))
}
