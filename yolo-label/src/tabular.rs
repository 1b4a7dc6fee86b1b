//! Conversion of row-based detector output.
//!
//! Older hub-style YOLO models report one table per image, with one row per
//! detection in normalized center form.

use crate::common::*;

/// One detection row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabularDetection {
    pub xcenter: f64,
    pub ycenter: f64,
    pub width: f64,
    pub height: f64,
    pub confidence: f64,
    pub class: usize,
    pub name: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TabularOutputProcessor;

impl TabularOutputProcessor {
    /// Converts the tables of a batch, keeping rows whose confidence is at
    /// least `confidence_thresh`.
    pub fn process(
        &self,
        batch: &[Vec<TabularDetection>],
        confidence_thresh: Option<f64>,
    ) -> Result<Vec<Detections>> {
        batch
            .iter()
            .map(|rows| self.to_detections(rows, confidence_thresh))
            .collect()
    }

    fn to_detections(
        &self,
        rows: &[TabularDetection],
        confidence_thresh: Option<f64>,
    ) -> Result<Detections> {
        let detections: Detections = rows
            .iter()
            .filter(|row| match confidence_thresh {
                Some(thresh) => row.confidence >= thresh,
                None => true,
            })
            .map(|row| -> Result<_> {
                let rect =
                    XYWH::try_from_cxcywh([row.xcenter, row.ycenter, row.width, row.height])?;
                Ok(Detection::new(&row.name, &rect).with_confidence(row.confidence))
            })
            .collect::<Result<_>>()?;

        trace!("kept {} out of {} rows", detections.len(), rows.len());
        Ok(detections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn row(name: &str, confidence: f64) -> TabularDetection {
        TabularDetection {
            xcenter: 0.5,
            ycenter: 0.5,
            width: 0.2,
            height: 0.4,
            confidence,
            class: 0,
            name: name.to_string(),
        }
    }

    #[test]
    fn rows_become_corner_boxes() {
        let processor = TabularOutputProcessor;
        let batch = vec![vec![row("cat", 0.9)], vec![]];
        let output = processor.process(&batch, None).unwrap();

        assert_eq!(output.len(), 2);
        assert!(output[1].is_empty());

        let detection = &output[0].detections[0];
        assert_eq!(detection.label, "cat");
        assert_abs_diff_eq!(detection.bounding_box[0], 0.4);
        assert_abs_diff_eq!(detection.bounding_box[1], 0.3);
        assert_eq!(detection.confidence, Some(0.9));
    }

    #[test]
    fn threshold_is_inclusive() {
        let processor = TabularOutputProcessor;
        let batch = vec![vec![row("a", 0.5), row("b", 0.49), row("c", f64::NAN)]];
        let output = processor.process(&batch, Some(0.5)).unwrap();
        let labels: Vec<_> = output[0].iter().map(|det| det.label.as_str()).collect();
        assert_eq!(labels, vec!["a"]);
    }

    #[test]
    fn rows_deserialize_from_records() {
        let text = r#"[{"xcenter":0.5,"ycenter":0.5,"width":0.1,"height":0.1,"confidence":0.8,"class":2,"name":"car"}]"#;
        let rows: Vec<TabularDetection> = serde_json::from_str(text).unwrap();
        assert_eq!(rows[0].class, 2);
        assert_eq!(rows[0].name, "car");
    }
}
