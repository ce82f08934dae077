use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{ResampleFilter, TargetSize};

/// File-name suffix selecting which inputs are resized. Case-sensitive.
pub const PNG_SUFFIX: &str = ".png";

/// Resize parameters suitable for config files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeParams {
    /// Exact output dimensions
    pub size: TargetSize,
    pub filter: ResampleFilter,
}

impl Default for ResizeParams {
    fn default() -> Self {
        Self {
            size: TargetSize::DEFAULT,
            filter: ResampleFilter::Lanczos3,
        }
    }
}

impl ResizeParams {
    pub fn with_size(size: TargetSize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Load parameters from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let params: ResizeParams = serde_json::from_str(&text)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        TargetSize::new(self.size.width, self.size.height).map(|_| ())
    }
}
