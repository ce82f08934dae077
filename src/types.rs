//! Shared value types used across icon-resizer.
//! Includes `TargetSize` (exact output dimensions) and `ResampleFilter`
//! (the convolution kernel used when resizing).
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Exact output dimensions in pixels. Aspect ratio is not preserved.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl TargetSize {
    pub const DEFAULT: TargetSize = TargetSize {
        width: 180,
        height: 180,
    };

    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::ZeroSize { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn square(side: u32) -> Result<Self> {
        Self::new(side, side)
    }
}

impl Default for TargetSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for TargetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Accepts `WxH` (e.g. `180x180`) or a single side `N` meaning `NxN`.
impl FromStr for TargetSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidArgument {
            arg: "size",
            value: s.to_string(),
        };
        let trimmed = s.trim();
        match trimmed.split_once(['x', 'X']) {
            Some((w, h)) => {
                let width = w.trim().parse::<u32>().map_err(|_| invalid())?;
                let height = h.trim().parse::<u32>().map_err(|_| invalid())?;
                Self::new(width, height)
            }
            None => {
                let side = trimmed.parse::<u32>().map_err(|_| invalid())?;
                Self::square(side)
            }
        }
    }
}

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ResampleFilter {
    Nearest,
    Bilinear,
    CatmullRom,
    Mitchell,
    #[default]
    Lanczos3,
}

impl std::fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ResampleFilter::Nearest => "Nearest",
            ResampleFilter::Bilinear => "Bilinear",
            ResampleFilter::CatmullRom => "CatmullRom",
            ResampleFilter::Mitchell => "Mitchell",
            ResampleFilter::Lanczos3 => "Lanczos3",
        };
        write!(f, "{}", s)
    }
}
