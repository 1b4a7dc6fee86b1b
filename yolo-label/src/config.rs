use crate::{
    common::*,
    convert::{detections, instances, keypoints, polylines},
    result::RawResult,
};

/// Conversion options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Entries with lower confidence are dropped. Nothing is dropped if unset.
    #[serde(default)]
    pub confidence_thresh: Option<f64>,
    /// Polygon simplification distance in pixels. Values not above 1 use the
    /// model's own polygons instead of tracing masks.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Whether emitted polylines are filled.
    #[serde(default = "default_filled")]
    pub filled: bool,
}

impl ConvertConfig {
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        let config = text.parse()?;
        Ok(config)
    }

    pub fn detections(&self, result: &RawResult) -> Result<Option<Detections>> {
        detections::convert(result, self.confidence_thresh)
    }

    pub fn instances(&self, result: &RawResult) -> Result<Option<Detections>> {
        instances::convert(result, self.confidence_thresh)
    }

    pub fn polylines(&self, result: &RawResult) -> Result<Option<Polylines>> {
        polylines::convert(result, self.confidence_thresh, self.tolerance, self.filled)
    }

    pub fn keypoints(&self, result: &RawResult) -> Result<Option<Keypoints>> {
        keypoints::convert(result, self.confidence_thresh)
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            confidence_thresh: None,
            tolerance: default_tolerance(),
            filled: default_filled(),
        }
    }
}

impl FromStr for ConvertConfig {
    type Err = anyhow::Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let config: Self = json5::from_str(text)?;
        ensure!(
            config.tolerance.is_finite() && config.tolerance >= 0.0,
            "tolerance must be a non-negative number, but get {}",
            config.tolerance
        );
        Ok(config)
    }
}

fn default_tolerance() -> f64 {
    2.0
}

fn default_filled() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: ConvertConfig = "{}".parse().unwrap();
        assert_eq!(config, ConvertConfig::default());
        assert_eq!(config.tolerance, 2.0);
        assert!(config.filled);
        assert!(config.confidence_thresh.is_none());
    }

    #[test]
    fn json5_config_is_parsed() {
        let text = r#"
        {
            // drop low-confidence entries
            confidence_thresh: 0.25,
            tolerance: 1.0,
            filled: false,
        }
        "#;
        let config: ConvertConfig = text.parse().unwrap();
        assert_eq!(config.confidence_thresh, Some(0.25));
        assert_eq!(config.tolerance, 1.0);
        assert!(!config.filled);
    }

    #[test]
    fn negative_tolerance_is_rejected() {
        assert!("{ tolerance: -1.0 }".parse::<ConvertConfig>().is_err());
    }
}
