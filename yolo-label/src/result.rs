//! The raw inference output of a YOLO model for one image.

use crate::common::*;

/// Parallel per-instance arrays produced by a YOLO model for one image.
///
/// Each optional field is present only when the model's task produces it.
#[derive(Debug, Clone)]
pub struct RawResult {
    /// Class index to label name.
    pub names: IndexMap<usize, String>,
    /// `[height, width]` of the source image.
    pub orig_shape: [usize; 2],
    pub boxes: Option<Boxes>,
    pub masks: Option<Masks>,
    pub keypoints: Option<RawKeypoints>,
}

impl RawResult {
    pub fn new<I, S>(names: I, orig_shape: [usize; 2]) -> Self
    where
        I: IntoIterator<Item = (usize, S)>,
        S: Into<String>,
    {
        Self {
            names: names
                .into_iter()
                .map(|(index, name)| (index, name.into()))
                .collect(),
            orig_shape,
            boxes: None,
            masks: None,
            keypoints: None,
        }
    }

    pub fn with_boxes(mut self, boxes: Boxes) -> Self {
        self.boxes = Some(boxes);
        self
    }

    pub fn with_masks(mut self, masks: Masks) -> Self {
        self.masks = Some(masks);
        self
    }

    pub fn with_keypoints(mut self, keypoints: RawKeypoints) -> Self {
        self.keypoints = Some(keypoints);
        self
    }

    pub fn label_of(&self, class: usize) -> Result<&str> {
        self.names
            .get(&class)
            .map(|name| name.as_str())
            .ok_or_else(|| format_err!("class index {} has no name", class))
    }

    /// Boxes are required by every converter that consumes masks or keypoints.
    pub(crate) fn require_boxes(&self) -> Result<&Boxes> {
        self.boxes
            .as_ref()
            .ok_or_else(|| format_err!("the result carries no boxes to label its instances"))
    }
}

/// Box geometry of every detected instance.
#[derive(Debug, Clone)]
pub struct Boxes {
    cls: Array1<f32>,
    conf: Array1<f32>,
    xywhn: Array2<f32>,
}

impl Boxes {
    /// Builds the box table from class indices, confidences and normalized
    /// center-form boxes of shape `[n, 4]`.
    pub fn new(cls: Array1<f32>, conf: Array1<f32>, xywhn: Array2<f32>) -> Result<Self> {
        let num = cls.len();
        ensure!(
            conf.len() == num,
            "expect {} confidences, but get {}",
            num,
            conf.len()
        );
        ensure!(
            xywhn.dim() == (num, 4),
            "expect box array of shape [{}, 4], but get {:?}",
            num,
            xywhn.shape()
        );

        Ok(Self { cls, conf, xywhn })
    }

    pub fn empty() -> Self {
        Self {
            cls: Array1::zeros(0),
            conf: Array1::zeros(0),
            xywhn: Array2::zeros((0, 4)),
        }
    }

    pub fn len(&self) -> usize {
        self.cls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cls.is_empty()
    }

    /// Class indices, rounded half to even.
    pub fn classes(&self) -> Result<Vec<usize>> {
        self.cls
            .iter()
            .map(|&class| {
                let rounded = class.round_ties_even();
                ensure!(
                    rounded.is_finite() && rounded >= 0.0,
                    "invalid class index {}",
                    class
                );
                Ok(rounded as usize)
            })
            .collect()
    }

    pub fn confidences(&self) -> Vec<f64> {
        self.conf.iter().map(|&conf| conf as f64).collect()
    }

    /// Normalized center-form boxes.
    pub fn rects(&self) -> Result<Vec<CxCyWH<f64>>> {
        self.xywhn
            .outer_iter()
            .map(|row| {
                let [cx, cy, w, h] = [row[0], row[1], row[2], row[3]].map(|value| value as f64);
                CxCyWH::try_from_cxcywh([cx, cy, w, h])
            })
            .collect()
    }
}

/// Per-instance segmentation masks.
#[derive(Debug, Clone)]
pub struct Masks {
    data: Array3<f32>,
    xyn: Option<Vec<Array2<f32>>>,
}

impl Masks {
    /// Builds masks from mask probabilities of shape `[n, height, width]`.
    pub fn new(data: Array3<f32>) -> Self {
        Self { data, xyn: None }
    }

    /// Attaches the model's own normalized polygon of each instance, one
    /// `[m, 2]` vertex array per mask.
    pub fn with_xyn(mut self, xyn: Vec<Array2<f32>>) -> Result<Self> {
        ensure!(
            xyn.len() == self.len(),
            "expect {} polygons, but get {}",
            self.len(),
            xyn.len()
        );
        if let Some(polygon) = xyn.iter().find(|polygon| polygon.ncols() != 2) {
            bail!(
                "polygon vertices must have 2 columns, but get shape {:?}",
                polygon.shape()
            );
        }

        self.xyn = Some(xyn);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.data.len_of(Axis(0))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `[height, width]` of every mask.
    pub fn shape(&self) -> [usize; 2] {
        let (_, height, width) = self.data.dim();
        [height, width]
    }

    pub fn data(&self) -> &Array3<f32> {
        &self.data
    }

    /// Membership grids, set where the probability exceeds 0.5.
    pub fn binarize(&self) -> Array3<bool> {
        self.data.mapv(|prob| prob > 0.5)
    }

    pub fn xyn(&self) -> Option<&[Array2<f32>]> {
        self.xyn.as_deref()
    }
}

/// Per-instance keypoints.
#[derive(Debug, Clone)]
pub struct RawKeypoints {
    xyn: Array3<f32>,
    conf: Option<Array2<f32>>,
}

impl RawKeypoints {
    /// Builds keypoints from normalized coordinates of shape `[n, k, 2]` and
    /// optional per-point confidences of shape `[n, k]`.
    pub fn new(xyn: Array3<f32>, conf: Option<Array2<f32>>) -> Result<Self> {
        let (num, num_points, num_coords) = xyn.dim();
        ensure!(
            num_coords == 2,
            "expect keypoints of shape [n, k, 2], but get {:?}",
            xyn.shape()
        );
        if let Some(conf) = &conf {
            ensure!(
                conf.dim() == (num, num_points),
                "expect keypoint confidences of shape [{}, {}], but get {:?}",
                num,
                num_points,
                conf.shape()
            );
        }

        Ok(Self { xyn, conf })
    }

    pub fn len(&self) -> usize {
        self.xyn.len_of(Axis(0))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn num_points(&self) -> usize {
        self.xyn.len_of(Axis(1))
    }

    pub(crate) fn points(&self, index: usize) -> Vec<[f64; 2]> {
        self.xyn
            .index_axis(Axis(0), index)
            .outer_iter()
            .map(|point| [point[0] as f64, point[1] as f64])
            .collect()
    }

    pub(crate) fn confidences(&self, index: usize) -> Option<Vec<f64>> {
        self.conf.as_ref().map(|conf| {
            conf.index_axis(Axis(0), index)
                .iter()
                .map(|&conf| conf as f64)
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn classes_round_half_to_even() {
        let boxes = Boxes::new(
            array![0.0, 1.5, 2.5, 2.9],
            array![0.1, 0.2, 0.3, 0.4],
            Array2::zeros((4, 4)),
        )
        .unwrap();
        assert_eq!(boxes.classes().unwrap(), vec![0, 2, 2, 3]);
    }

    #[test]
    fn negative_class_is_rejected() {
        let boxes = Boxes::new(array![-1.0], array![0.5], Array2::zeros((1, 4))).unwrap();
        assert!(boxes.classes().is_err());
    }

    #[test]
    fn mismatched_box_arrays_are_rejected() {
        assert!(Boxes::new(array![0.0, 1.0], array![0.5], Array2::zeros((2, 4))).is_err());
        assert!(Boxes::new(array![0.0], array![0.5], Array2::zeros((1, 3))).is_err());
    }

    #[test]
    fn keypoint_confidence_shape_is_checked() {
        let xyn = Array3::zeros((2, 17, 2));
        assert!(RawKeypoints::new(xyn.clone(), Some(Array2::zeros((2, 17)))).is_ok());
        assert!(RawKeypoints::new(xyn.clone(), Some(Array2::zeros((2, 16)))).is_err());
        assert!(RawKeypoints::new(Array3::zeros((2, 17, 3)), None).is_err());
    }

    #[test]
    fn masks_binarize_above_half() {
        let masks = Masks::new(array![[[0.2, 0.5], [0.51, 1.0]]]);
        assert_eq!(masks.shape(), [2, 2]);
        assert_eq!(masks.binarize(), array![[[false, false], [true, true]]]);
        assert!(masks.clone().with_xyn(vec![]).is_err());
        assert!(masks.with_xyn(vec![Array2::zeros((3, 2))]).is_ok());
    }

    #[test]
    fn missing_name_is_an_error() {
        let result = RawResult::new([(0, "cat")], [480, 640]);
        assert_eq!(result.label_of(0).unwrap(), "cat");
        assert!(result.label_of(1).is_err());
    }
}
