//! Conversion of YOLO inference results into dataset labels.
//!
//! The converters in [convert] take one [RawResult] or a list of them and
//! emit [label] collections with normalized coordinates. The adapters in
//! [model] wrap a detector behind a uniform `predict(image) -> labels` call.

mod common;

pub mod batch;
pub mod config;
pub mod convert;
pub mod model;
pub mod polygon;
pub mod result;
pub mod tabular;

pub use batch::Batch;
pub use config::ConvertConfig;
pub use convert::{to_detections, to_instances, to_keypoints, to_polylines};
pub use model::{
    convert_model, AdapterConfig, AdapterError, DetectionAdapter, LabelModel, MediaType,
    ModelAdapter, ModelKind, PoseAdapter, PredictOptions, SegmentationAdapter, YoloModel,
};
pub use result::{Boxes, Masks, RawKeypoints, RawResult};
pub use tabular::{TabularDetection, TabularOutputProcessor};
