use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{IconError, Result};
use crate::helpers::{join_sizes, parse_sizes};
use crate::models::IconConfig;

const CONFIG_FILE_NAME: &str = "icongen.txt";

/// `<config dir>/icongen.txt`, if the platform has a home directory.
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("org", "icongen", "icongen")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

pub fn read_config(path: &Path) -> Result<IconConfig> {
    let content = fs::read_to_string(path).map_err(|source| IconError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

/// Parse `key=value` lines. Unknown keys are ignored, `#` starts a comment line.
pub fn parse_config(content: &str) -> Result<IconConfig> {
    let mut cfg = IconConfig::default();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((k, v)) = line.split_once('=') else {
            return Err(IconError::Config(format!("expected key=value, got '{}'", line)));
        };
        let v = v.trim();
        match k.trim() {
            "source" => cfg.source = PathBuf::from(v),
            "output_dir" => cfg.output_dir = PathBuf::from(v),
            "sizes" => cfg.sizes = parse_sizes(v)?,
            "filter" => cfg.filter = v.parse()?,
            "log_file" => cfg.log_file = (!v.is_empty()).then(|| PathBuf::from(v)),
            _ => {}
        }
    }
    Ok(cfg)
}

pub fn save_config(path: &Path, cfg: &IconConfig) -> Result<()> {
    let write_err = |source| IconError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
    }
    let mut f = fs::File::create(path).map_err(write_err)?;
    writeln!(f, "source={}", cfg.source.display()).map_err(write_err)?;
    writeln!(f, "output_dir={}", cfg.output_dir.display()).map_err(write_err)?;
    writeln!(f, "sizes={}", join_sizes(&cfg.sizes)).map_err(write_err)?;
    writeln!(f, "filter={}", cfg.filter).map_err(write_err)?;
    if let Some(log) = &cfg.log_file {
        writeln!(f, "log_file={}", log.display()).map_err(write_err)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{default_sizes, IconSize, ResizeFilter};

    #[test]
    fn test_parse_config() {
        let cfg = parse_config(
            "# icons for the extension\nsource = logo.jpg\noutput_dir=public/icons\nsizes=32, 64\nfilter=triangle\ntheme=dark\n",
        )
        .unwrap();
        assert_eq!(cfg.source, PathBuf::from("logo.jpg"));
        assert_eq!(cfg.output_dir, PathBuf::from("public/icons"));
        assert_eq!(cfg.sizes, vec![IconSize::new(32).unwrap(), IconSize::new(64).unwrap()]);
        assert_eq!(cfg.filter, ResizeFilter::Triangle);
        assert_eq!(cfg.log_file, None);
    }

    #[test]
    fn test_defaults_when_missing() {
        let cfg = parse_config("source=a.png\noutput_dir=out\n").unwrap();
        assert_eq!(cfg.sizes, default_sizes());
        assert_eq!(cfg.filter, ResizeFilter::Lanczos3);
    }

    #[test]
    fn test_bad_values_rejected() {
        assert!(matches!(parse_config("sizes=16,abc"), Err(IconError::InvalidSize(_))));
        assert!(matches!(parse_config("sizes=0"), Err(IconError::InvalidSize(_))));
        assert!(matches!(parse_config("filter=bogus"), Err(IconError::Config(_))));
        assert!(matches!(parse_config("just some words"), Err(IconError::Config(_))));
    }

    #[test]
    fn test_save_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("icongen.txt");
        let mut cfg = IconConfig::new("src/logo.jpg", "public/icons")
            .with_sizes(vec![IconSize::new(16).unwrap(), IconSize::new(256).unwrap()])
            .with_filter(ResizeFilter::CatmullRom);
        cfg.log_file = Some(PathBuf::from("icongen.log"));
        save_config(&path, &cfg).unwrap();
        assert_eq!(read_config(&path).unwrap(), cfg);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_config(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, IconError::Open { .. }));
    }
}
