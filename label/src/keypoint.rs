use crate::common::*;

/// An ordered set of keypoints for one instance.
///
/// A point whose coordinates are NaN is absent; it keeps its slot so that
/// indices stay aligned with the skeleton definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    pub label: String,
    pub points: Vec<[f64; 2]>,
    pub confidence: Option<Vec<f64>>,
}

impl Keypoint {
    pub fn is_visible(&self, index: usize) -> bool {
        self.points
            .get(index)
            .map(|[x, y]| !x.is_nan() && !y.is_nan())
            .unwrap_or(false)
    }

    /// Iterates over `(index, point)` pairs that are not marked absent.
    pub fn visible_points(&self) -> impl Iterator<Item = (usize, [f64; 2])> + '_ {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, [x, y])| !x.is_nan() && !y.is_nan())
            .map(|(index, &point)| (index, point))
    }

    pub fn apply(&self, transform: &Transform<f64>) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|&point| transform.apply(point))
                .collect(),
            ..self.clone()
        }
    }
}

/// The keypoint sets found on one image, in insertion order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Keypoints {
    pub keypoints: Vec<Keypoint>,
}

impl Keypoints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, keypoint: Keypoint) {
        self.keypoints.push(keypoint);
    }

    pub fn len(&self) -> usize {
        self.keypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keypoints.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Keypoint> {
        self.keypoints.iter()
    }
}

impl FromIterator<Keypoint> for Keypoints {
    fn from_iter<I: IntoIterator<Item = Keypoint>>(iter: I) -> Self {
        Self {
            keypoints: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Keypoints {
    type Item = Keypoint;
    type IntoIter = std::vec::IntoIter<Keypoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.keypoints.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sample() -> Keypoint {
        Keypoint {
            label: "person".into(),
            points: vec![[0.1, 0.2], [f64::NAN, f64::NAN], [0.5, 0.5]],
            confidence: Some(vec![0.9, 0.1, 0.7]),
        }
    }

    #[test]
    fn nan_points_are_absent() {
        let keypoint = sample();
        assert!(keypoint.is_visible(0));
        assert!(!keypoint.is_visible(1));
        assert!(!keypoint.is_visible(3));

        let indices: Vec<_> = keypoint.visible_points().map(|(index, _)| index).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn transform_keeps_absent_points_absent() {
        let pixel = sample().apply(&Transform::denormalize(100.0, 50.0));
        assert_abs_diff_eq!(pixel.points[0][0], 10.0);
        assert_abs_diff_eq!(pixel.points[0][1], 10.0);
        assert!(!pixel.is_visible(1));
        assert_eq!(pixel.points.len(), 3);
    }
}
