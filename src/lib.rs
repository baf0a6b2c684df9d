pub mod config;
pub mod error;
pub mod helpers;
pub mod icons;
pub mod logger;
pub mod manifest;
pub mod models;

pub use error::IconError;
pub use icons::{ensure_output_directory, generate_icons, icon_file_name, resize_square, run};
pub use models::{GeneratedIcon, IconConfig, IconReport, IconSize, ResizeFilter};
