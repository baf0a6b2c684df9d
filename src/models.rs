use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};

pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];
pub const MAX_ICON_SIZE: u32 = 16384;

/// Edge length of a square icon, in `1..=MAX_ICON_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct IconSize(u32);

impl IconSize {
    pub fn new(px: u32) -> Result<Self> {
        if px == 0 {
            return Err(IconError::InvalidSize("size must be greater than zero".into()));
        }
        if px > MAX_ICON_SIZE {
            return Err(IconError::InvalidSize(format!(
                "{} exceeds the maximum of {}",
                px, MAX_ICON_SIZE
            )));
        }
        Ok(Self(px))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for IconSize {
    type Error = IconError;
    fn try_from(px: u32) -> Result<Self, Self::Error> {
        IconSize::new(px)
    }
}

impl From<IconSize> for u32 {
    fn from(size: IconSize) -> u32 {
        size.0
    }
}

impl FromStr for IconSize {
    type Err = IconError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let px = s
            .trim()
            .parse::<u32>()
            .map_err(|_| IconError::InvalidSize(format!("'{}' is not a positive integer", s.trim())))?;
        IconSize::new(px)
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn default_sizes() -> Vec<IconSize> {
    DEFAULT_SIZES.iter().map(|&px| IconSize(px)).collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl ResizeFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResizeFilter::Nearest => "nearest",
            ResizeFilter::Triangle => "triangle",
            ResizeFilter::CatmullRom => "catmullrom",
            ResizeFilter::Gaussian => "gaussian",
            ResizeFilter::Lanczos3 => "lanczos3",
        }
    }

    pub fn filter_type(&self) -> FilterType {
        match self {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl FromStr for ResizeFilter {
    type Err = IconError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" => Ok(ResizeFilter::Nearest),
            "triangle" | "linear" => Ok(ResizeFilter::Triangle),
            "catmullrom" | "cubic" => Ok(ResizeFilter::CatmullRom),
            "gaussian" => Ok(ResizeFilter::Gaussian),
            "lanczos3" | "lanczos" => Ok(ResizeFilter::Lanczos3),
            other => Err(IconError::Config(format!("unknown resize filter '{}'", other))),
        }
    }
}

impl fmt::Display for ResizeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconConfig {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    #[serde(default = "default_sizes")]
    pub sizes: Vec<IconSize>,
    #[serde(default)]
    pub filter: ResizeFilter,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::new(),
            output_dir: PathBuf::new(),
            sizes: default_sizes(),
            filter: ResizeFilter::default(),
            log_file: None,
        }
    }
}

impl IconConfig {
    pub fn new(source: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    pub fn with_sizes(mut self, sizes: Vec<IconSize>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_filter(mut self, filter: ResizeFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Both paths must be set before a run.
    pub fn validate(&self) -> Result<()> {
        if self.source.as_os_str().is_empty() {
            return Err(IconError::Config("no source image configured".into()));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(IconError::Config("no output directory configured".into()));
        }
        Ok(())
    }
}

/// One PNG written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedIcon {
    pub size: IconSize,
    pub path: PathBuf,
    pub bytes: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IconReport {
    pub icons: Vec<GeneratedIcon>,
}

impl IconReport {
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn total_bytes(&self) -> u64 {
        self.icons.iter().map(|i| i.bytes).sum()
    }
}
