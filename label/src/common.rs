pub use anyhow::Result;
pub use bbox::{prelude::*, Transform, XYWH};
pub use ndarray::Array2;
pub use serde::{Deserialize, Serialize};
