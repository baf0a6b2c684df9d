use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::io::Reader as ImageReader;
use image::{DynamicImage, GenericImageView, ImageFormat};

use crate::error::{IconError, Result};
use crate::helpers::format_file_size;
use crate::logger::{log_error, log_line};
use crate::models::{GeneratedIcon, IconConfig, IconReport, IconSize, ResizeFilter};

pub fn icon_file_name(size: IconSize) -> String {
    format!("icon{}.png", size)
}

pub fn icon_path(output_dir: &Path, size: IconSize) -> PathBuf {
    output_dir.join(icon_file_name(size))
}

/// Create `path` (and parents) unless it is already a directory.
pub fn ensure_output_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|source| IconError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode the source once. Missing files surface as `Open`, bad content as `Decode`.
pub fn open_source(path: &Path) -> Result<DynamicImage> {
    let open_err = |source| IconError::Open {
        path: path.to_path_buf(),
        source,
    };
    ImageReader::open(path)
        .map_err(open_err)?
        .with_guessed_format()
        .map_err(open_err)?
        .decode()
        .map_err(|source| IconError::Decode {
            path: path.to_path_buf(),
            source,
        })
}

/// Force-scale to size x size. The source aspect ratio is not kept.
pub fn resize_square(img: &DynamicImage, size: IconSize, filter: ResizeFilter) -> DynamicImage {
    let px = size.get();
    if img.dimensions() == (px, px) {
        return img.clone();
    }
    img.resize_exact(px, px, filter.filter_type())
}

pub fn encode_png(img: &DynamicImage, size: IconSize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|source| IconError::Encode {
            size: size.get(),
            source,
        })?;
    Ok(buf)
}

/// Resize `source_path` into one `icon{size}.png` per entry of `sizes`, in order.
///
/// The output directory is ensured first, even when `sizes` is empty. The first
/// failing step aborts the run; icons written before it stay on disk.
/// `on_saved` fires once per written file.
pub fn generate_icons<F>(
    source_path: &Path,
    output_dir: &Path,
    sizes: &[IconSize],
    filter: ResizeFilter,
    mut on_saved: F,
) -> Result<IconReport>
where
    F: FnMut(&GeneratedIcon),
{
    ensure_output_directory(output_dir)?;

    let img = open_source(source_path)?;
    let (w, h) = img.dimensions();
    if w != h {
        log_line(&format!(
            "source {} is {}x{}, icons will be stretched to square",
            source_path.display(),
            w,
            h
        ));
    }

    let mut report = IconReport::default();
    for &size in sizes {
        let resized = resize_square(&img, size, filter);
        let png = encode_png(&resized, size)?;
        let path = icon_path(output_dir, size);
        fs::write(&path, &png).map_err(|source| IconError::Write {
            path: path.clone(),
            source,
        })?;

        let icon = GeneratedIcon {
            size,
            path,
            bytes: png.len() as u64,
        };
        log_line(&format!(
            "saved {} ({}x{}, {})",
            icon.path.display(),
            size,
            size,
            format_file_size(icon.bytes)
        ));
        on_saved(&icon);
        report.icons.push(icon);
    }

    Ok(report)
}

/// Validate `cfg`, then run `generate_icons` with its settings, logging the outcome.
pub fn run<F>(cfg: &IconConfig, on_saved: F) -> Result<IconReport>
where
    F: FnMut(&GeneratedIcon),
{
    cfg.validate()?;
    log_line(&format!(
        "generating {} icon(s) from {} into {} ({})",
        cfg.sizes.len(),
        cfg.source.display(),
        cfg.output_dir.display(),
        cfg.filter
    ));

    match generate_icons(&cfg.source, &cfg.output_dir, &cfg.sizes, cfg.filter, on_saved) {
        Ok(report) => {
            log_line(&format!(
                "done: {} file(s), {}",
                report.len(),
                format_file_size(report.total_bytes())
            ));
            Ok(report)
        }
        Err(e) => {
            log_error("icon generation failed", &e);
            Err(e)
        }
    }
}
