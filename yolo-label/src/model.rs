//! Label models wrapping a YOLO detector.

use crate::{common::*, config::ConvertConfig, result::RawResult};

/// The task a YOLO network was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum ModelKind {
    Detection,
    Segmentation,
    Pose,
    Classification,
    OrientedDetection,
}

/// Options passed to the detector on every inference call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictOptions {
    pub verbose: bool,
}

impl PredictOptions {
    pub fn quiet() -> Self {
        Self { verbose: false }
    }
}

impl Default for PredictOptions {
    fn default() -> Self {
        Self { verbose: true }
    }
}

/// The narrow contract required from a YOLO detector.
pub trait YoloModel {
    fn kind(&self) -> ModelKind;

    fn predict(&self, image: &RgbImage, options: &PredictOptions) -> Result<Vec<RawResult>>;
}

#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    #[error("unsupported model type '{0}', cannot convert to a label model")]
    UnsupportedModel(ModelKind),
    #[error("`{0}` has no default implementation for this model")]
    NotImplemented(&'static str),
    #[error("the model returned no result")]
    EmptyPrediction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum MediaType {
    Image,
}

pub type ImageTransform = fn(&RgbImage) -> RgbImage;

/// A model producing labels from `[height, width, channels]` pixel arrays.
pub trait LabelModel {
    fn media_type(&self) -> MediaType {
        MediaType::Image
    }

    /// Whether images in one batch may differ in size.
    fn ragged_batches(&self) -> bool {
        true
    }

    fn transforms(&self) -> Option<ImageTransform> {
        None
    }

    /// Whether the caller must apply [LabelModel::transforms] before
    /// calling [LabelModel::predict].
    fn preprocess(&self) -> bool {
        false
    }

    fn predict(&self, _image: ArrayView3<'_, u8>) -> Result<Option<Labels>> {
        Err(AdapterError::NotImplemented("predict").into())
    }

    fn predict_all(&self, images: &[ArrayView3<'_, u8>]) -> Result<Vec<Option<Labels>>> {
        images.iter().map(|image| self.predict(image.view())).collect()
    }
}

/// Configuration of a label model. The detector lives under `model`.
#[derive(Debug, Clone)]
pub struct AdapterConfig<M> {
    pub model: M,
    pub options: ConvertConfig,
}

impl<M> AdapterConfig<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            options: ConvertConfig::default(),
        }
    }

    pub fn with_options(mut self, options: ConvertConfig) -> Self {
        self.options = options;
        self
    }
}

macro_rules! declare_adapter {
    ($(#[$attr:meta])* $name:ident, $convert:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone)]
        pub struct $name<M> {
            model: M,
            options: ConvertConfig,
        }

        impl<M> $name<M> {
            pub fn new(config: AdapterConfig<M>) -> Self {
                let AdapterConfig { model, options } = config;
                Self { model, options }
            }

            pub fn model(&self) -> &M {
                &self.model
            }

            pub fn options(&self) -> &ConvertConfig {
                &self.options
            }
        }

        impl<M> LabelModel for $name<M>
        where
            M: YoloModel,
        {
            fn predict(&self, image: ArrayView3<'_, u8>) -> Result<Option<Labels>> {
                let result = infer_first(&self.model, image)?;
                let labels = self.options.$convert(&result)?;
                Ok(labels.map(Labels::from))
            }
        }
    };
}

declare_adapter!(
    /// Emits box detections.
    DetectionAdapter,
    detections
);
declare_adapter!(
    /// Emits detections carrying instance masks.
    SegmentationAdapter,
    instances
);
declare_adapter!(
    /// Emits keypoints.
    PoseAdapter,
    keypoints
);

/// A label model selected by the detector's task.
#[derive(Debug, Clone)]
pub enum ModelAdapter<M> {
    Detection(DetectionAdapter<M>),
    Segmentation(SegmentationAdapter<M>),
    Pose(PoseAdapter<M>),
}

impl<M> ModelAdapter<M>
where
    M: YoloModel,
{
    pub fn new(config: AdapterConfig<M>) -> Result<Self> {
        let kind = config.model.kind();
        let adapter = match kind {
            ModelKind::Segmentation => Self::Segmentation(SegmentationAdapter::new(config)),
            ModelKind::Pose => Self::Pose(PoseAdapter::new(config)),
            ModelKind::Detection => Self::Detection(DetectionAdapter::new(config)),
            ModelKind::Classification | ModelKind::OrientedDetection => {
                return Err(AdapterError::UnsupportedModel(kind).into());
            }
        };
        info!("wrap a {} model", kind);
        Ok(adapter)
    }

    pub fn kind(&self) -> ModelKind {
        match self {
            Self::Detection(_) => ModelKind::Detection,
            Self::Segmentation(_) => ModelKind::Segmentation,
            Self::Pose(_) => ModelKind::Pose,
        }
    }
}

impl<M> LabelModel for ModelAdapter<M>
where
    M: YoloModel,
{
    fn predict(&self, image: ArrayView3<'_, u8>) -> Result<Option<Labels>> {
        match self {
            Self::Detection(adapter) => adapter.predict(image),
            Self::Segmentation(adapter) => adapter.predict(image),
            Self::Pose(adapter) => adapter.predict(image),
        }
    }
}

/// Wraps a detector into the label model matching its task.
pub fn convert_model<M>(model: M) -> Result<ModelAdapter<M>>
where
    M: YoloModel,
{
    ModelAdapter::new(AdapterConfig::new(model))
}

/// Converts a `[height, width, channels]` array with 1, 3 or 4 channels to
/// an RGB image.
pub fn array_to_image(array: ArrayView3<'_, u8>) -> Result<RgbImage> {
    let (height, width, channels) = array.dim();
    let width = u32::try_from(width)?;
    let height = u32::try_from(height)?;
    let pixels: Vec<u8> = array.iter().copied().collect();

    let image = match channels {
        1 => GrayImage::from_raw(width, height, pixels)
            .map(|gray| DynamicImage::ImageLuma8(gray).to_rgb8()),
        3 => RgbImage::from_raw(width, height, pixels),
        4 => RgbaImage::from_raw(width, height, pixels)
            .map(|rgba| DynamicImage::ImageRgba8(rgba).to_rgb8()),
        _ => bail!("expect 1, 3 or 4 channels, but get {}", channels),
    };
    image.ok_or_else(|| format_err!("pixel buffer does not fit a {}x{} image", width, height))
}

fn infer_first<M>(model: &M, image: ArrayView3<'_, u8>) -> Result<RawResult>
where
    M: YoloModel,
{
    let image = array_to_image(image)?;
    let results = model.predict(&image, &PredictOptions::quiet())?;
    let result = results
        .into_iter()
        .next()
        .ok_or(AdapterError::EmptyPrediction)?;
    Ok(result)
}
