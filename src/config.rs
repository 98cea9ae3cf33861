//! Classifier configuration
//!
//! The pad and the (out-of-scope) training pipeline share one JSON file
//! describing the label set and the tensor geometry. Loading validates it
//! up front so every later stage can trust the label list.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::constants::TENSOR_SIDE;
use crate::error::{SketchError, SketchResult};

/// Read-only configuration shared with the classifier's training setup.
#[derive(Debug, Clone, Deserialize)]
pub struct PadConfig {
    /// Ordered class labels; index `i` names the classifier's output `i`
    pub classes: Vec<String>,

    /// Side length of the square input tensor the classifier expects
    pub image_size: usize,
}

impl PadConfig {
    /// Loads and validates a configuration from a JSON file.
    ///
    /// Any failure here is fatal at startup; there is no sensible default
    /// label set to fall back to.
    pub fn load(path: &Path) -> SketchResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: PadConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Number of classes the classifier distinguishes.
    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    fn validate(&self) -> SketchResult<()> {
        if self.classes.len() < 2 {
            return Err(SketchError::Config(format!(
                "need at least 2 class labels, got {}",
                self.classes.len()
            )));
        }
        if self.classes.iter().any(|label| label.trim().is_empty()) {
            return Err(SketchError::Config(
                "class labels must not be blank".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for label in &self.classes {
            if !seen.insert(label.as_str()) {
                return Err(SketchError::Config(format!(
                    "duplicate class label: {label}"
                )));
            }
        }
        if self.image_size != TENSOR_SIDE {
            return Err(SketchError::Config(format!(
                "image_size must be {TENSOR_SIDE}, got {}",
                self.image_size
            )));
        }
        Ok(())
    }
}
