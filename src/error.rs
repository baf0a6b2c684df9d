use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop an icon run. Each variant keeps the path or size
/// it was working on so callers can branch on it.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("failed to encode {size}x{size} icon as PNG: {source}")]
    Encode {
        size: u32,
        source: image::ImageError,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("invalid icon size: {0}")]
    InvalidSize(String),

    #[error("config error: {0}")]
    Config(String),
}

impl IconError {
    /// Path the failing step touched, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            IconError::CreateDir { path, .. }
            | IconError::Open { path, .. }
            | IconError::Decode { path, .. }
            | IconError::Write { path, .. } => Some(path),
            _ => None,
        }
    }
}

pub type Result<T, E = IconError> = std::result::Result<T, E>;
