pub use anyhow::{bail, ensure, format_err, Context as _, Result};
pub use bbox::{prelude::*, CxCyWH, Transform, XYWH, XYXY};
pub use image::{DynamicImage, GrayImage, Luma, RgbImage, RgbaImage};
pub use indexmap::IndexMap;
pub use itertools::izip;
pub use label::{Detection, Detections, Keypoint, Keypoints, Labels, Mask, Polyline, Polylines};
pub use log::{debug, info, trace, warn};
pub use ndarray::{s, Array1, Array2, Array3, ArrayView2, ArrayView3, Axis};
pub use serde::{Deserialize, Serialize};
pub use std::{fs, path::Path, str::FromStr};
pub use strum::{Display, EnumString};
