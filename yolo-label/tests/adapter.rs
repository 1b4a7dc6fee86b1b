use anyhow::Result;
use image::RgbImage;
use ndarray::{array, Array3};
use std::cell::RefCell;
use yolo_label::{
    convert_model, AdapterConfig, AdapterError, Boxes, ConvertConfig, LabelModel, Masks,
    ModelAdapter, ModelKind, PredictOptions, RawKeypoints, RawResult, YoloModel,
};

/// A detector replaying a canned result and recording its calls.
#[derive(Debug)]
struct FakeModel {
    kind: ModelKind,
    calls: RefCell<Vec<((u32, u32), PredictOptions)>>,
}

impl FakeModel {
    fn new(kind: ModelKind) -> Self {
        Self {
            kind,
            calls: RefCell::new(vec![]),
        }
    }
}

impl YoloModel for FakeModel {
    fn kind(&self) -> ModelKind {
        self.kind
    }

    fn predict(&self, image: &RgbImage, options: &PredictOptions) -> Result<Vec<RawResult>> {
        self.calls
            .borrow_mut()
            .push((image.dimensions(), options.clone()));

        let boxes = Boxes::new(
            array![0.0, 0.0],
            array![0.9, 0.2],
            array![[0.25, 0.5, 0.25, 0.5], [0.75, 0.5, 0.25, 0.5]],
        )?;
        let mut data = Array3::<f32>::zeros((2, 8, 16));
        data.fill(1.0);
        let keypoints = RawKeypoints::new(
            array![[[0.1, 0.1], [0.2, 0.2]], [[0.7, 0.7], [0.8, 0.8]]],
            Some(array![[0.9, 0.1], [0.9, 0.9]]),
        )?;

        let result = RawResult::new([(0, "person")], [8, 16])
            .with_boxes(boxes)
            .with_masks(Masks::new(data))
            .with_keypoints(keypoints);
        Ok(vec![result])
    }
}

fn image() -> Array3<u8> {
    Array3::zeros((8, 16, 3))
}

#[test]
fn adapter_follows_model_kind() {
    let _ = pretty_env_logger::try_init();

    for kind in [ModelKind::Detection, ModelKind::Segmentation, ModelKind::Pose] {
        let adapter = convert_model(FakeModel::new(kind)).unwrap();
        assert_eq!(adapter.kind(), kind);
    }
}

#[test]
fn unsupported_model_fails_immediately() {
    for kind in [ModelKind::Classification, ModelKind::OrientedDetection] {
        let err = convert_model(FakeModel::new(kind)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AdapterError>(),
            Some(AdapterError::UnsupportedModel(found)) if *found == kind
        ));
    }
}

#[test]
fn detection_adapter_predicts_boxes() {
    let adapter = convert_model(FakeModel::new(ModelKind::Detection)).unwrap();
    let labels = adapter.predict(image().view()).unwrap().unwrap();
    let detections = labels.as_detections().unwrap();
    assert_eq!(detections.len(), 2);
    assert!(detections.iter().all(|detection| detection.mask.is_none()));

    let model = match &adapter {
        ModelAdapter::Detection(adapter) => adapter.model(),
        _ => unreachable!(),
    };
    let calls = model.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, (16, 8));
    assert!(!calls[0].1.verbose);
}

#[test]
fn segmentation_adapter_predicts_instances() {
    let adapter = convert_model(FakeModel::new(ModelKind::Segmentation)).unwrap();
    let labels = adapter.predict(image().view()).unwrap().unwrap();
    let detections = labels.as_detections().unwrap();
    assert_eq!(detections.len(), 2);

    let mask = detections.detections[0].mask.as_ref().unwrap();
    assert_eq!(mask.dim(), (4, 4));
}

#[test]
fn pose_adapter_predicts_keypoints() {
    let adapter = convert_model(FakeModel::new(ModelKind::Pose)).unwrap();
    let labels = adapter.predict(image().view()).unwrap().unwrap();
    let keypoints = labels.as_keypoints().unwrap();
    assert_eq!(keypoints.len(), 2);
    assert_eq!(keypoints.keypoints[0].points.len(), 2);
}

#[test]
fn adapter_options_apply_threshold() {
    let options: ConvertConfig = "{ confidence_thresh: 0.5 }".parse().unwrap();
    let config = AdapterConfig::new(FakeModel::new(ModelKind::Detection)).with_options(options);
    let adapter = ModelAdapter::new(config).unwrap();

    let labels = adapter.predict(image().view()).unwrap().unwrap();
    assert_eq!(labels.len(), 1);
}

#[test]
fn predict_all_iterates_images() {
    let adapter = convert_model(FakeModel::new(ModelKind::Pose)).unwrap();
    let small = Array3::<u8>::zeros((4, 4, 3));
    let large = image();

    let outputs = adapter
        .predict_all(&[small.view(), large.view()])
        .unwrap();
    assert_eq!(outputs.len(), 2);
    assert!(outputs.iter().all(|labels| labels.is_some()));
    assert!(adapter.ragged_batches());
    assert!(!adapter.preprocess());
}
