use crate::common::*;

/// Boolean membership grid spanning a detection's own bounding box.
pub type Mask = Array2<bool>;

/// An object detection, optionally carrying an instance mask.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub label: String,
    /// `[x_min, y_min, width, height]` in normalized coordinates.
    pub bounding_box: [f64; 4],
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask: Option<Mask>,
}

impl Detection {
    pub fn new(label: impl Into<String>, rect: &XYWH<f64>) -> Self {
        Self {
            label: label.into(),
            bounding_box: rect.xywh(),
            confidence: None,
            mask: None,
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn with_mask(mut self, mask: Mask) -> Self {
        self.mask = Some(mask);
        self
    }

    pub fn rect(&self) -> Result<XYWH<f64>> {
        XYWH::try_from_xywh(self.bounding_box)
    }
}

/// The detections found on one image, in insertion order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Detections {
    pub detections: Vec<Detection>,
}

impl Detections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, detection: Detection) {
        self.detections.push(detection);
    }

    pub fn len(&self) -> usize {
        self.detections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Detection> {
        self.detections.iter()
    }
}

impl FromIterator<Detection> for Detections {
    fn from_iter<I: IntoIterator<Item = Detection>>(iter: I) -> Self {
        Self {
            detections: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Detections {
    type Item = Detection;
    type IntoIter = std::vec::IntoIter<Detection>;

    fn into_iter(self) -> Self::IntoIter {
        self.detections.into_iter()
    }
}

impl<'a> IntoIterator for &'a Detections {
    type Item = &'a Detection;
    type IntoIter = std::slice::Iter<'a, Detection>;

    fn into_iter(self) -> Self::IntoIter {
        self.detections.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn detection_keeps_corner_box() {
        let rect = XYWH::try_from_cxcywh([0.5, 0.5, 0.2, 0.4]).unwrap();
        let detection = Detection::new("cat", &rect).with_confidence(0.9);
        let [x, y, w, h] = detection.bounding_box;
        assert_abs_diff_eq!(x, 0.4);
        assert_abs_diff_eq!(y, 0.3);
        assert_abs_diff_eq!(w, 0.2);
        assert_abs_diff_eq!(h, 0.4);
        assert_eq!(detection.rect().unwrap(), rect);
    }

    #[test]
    fn detection_serializes_mask_only_when_present() {
        let rect = XYWH::try_from_xywh([0.0, 0.0, 1.0, 1.0]).unwrap();
        let plain = Detection::new("dog", &rect);
        let text = serde_json::to_string(&plain).unwrap();
        assert!(!text.contains("mask"));

        let masked = plain.with_mask(array![[true, false], [false, true]]);
        let text = serde_json::to_string(&masked).unwrap();
        let parsed: Detection = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, masked);
    }
}
