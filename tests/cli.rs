use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use image::{GenericImageView, Rgb, RgbImage};

fn icongen(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_icongen"))
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .output()
        .unwrap()
}

fn write_jpeg(dir: &Path) -> PathBuf {
    let path = dir.join("logo.jpg");
    RgbImage::from_fn(512, 512, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 90]))
        .save(&path)
        .unwrap();
    path
}

#[test]
fn prints_saved_lines_and_exits_zero() {
    let tmp = tempfile::tempdir().unwrap();
    let source = write_jpeg(tmp.path());
    let out = tmp.path().join("public").join("icons");

    let output = icongen(
        tmp.path(),
        &["--source", source.to_str().unwrap(), "--output-dir", out.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let expected: Vec<String> = [16, 48, 128]
        .iter()
        .map(|px| format!("Saved {}", out.join(format!("icon{}.png", px)).display()))
        .collect();
    assert_eq!(stdout.lines().collect::<Vec<_>>(), expected);
    assert!(output.stderr.is_empty());
    for px in [16u32, 48, 128] {
        let img = image::open(out.join(format!("icon{}.png", px))).unwrap();
        assert_eq!(img.dimensions(), (px, px));
    }
}

#[test]
fn missing_source_prints_error_and_exits_one() {
    let tmp = tempfile::tempdir().unwrap();
    let source = tmp.path().join("nope.jpg");
    let out = tmp.path().join("icons");

    let output = icongen(
        tmp.path(),
        &["--source", source.to_str().unwrap(), "--output-dir", out.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    let lines: Vec<&str> = stderr.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Error: failed to open "));
    assert!(lines[0].contains("nope.jpg"));
}

#[test]
fn no_source_configured_exits_one() {
    let tmp = tempfile::tempdir().unwrap();

    let output = icongen(tmp.path(), &["--output-dir", tmp.path().join("icons").to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Error: config error: no source image configured"));
}

#[test]
fn manifest_block_follows_saved_lines() {
    let tmp = tempfile::tempdir().unwrap();
    let source = write_jpeg(tmp.path());
    let out = tmp.path().join("icons");

    let output = icongen(
        tmp.path(),
        &[
            "--source",
            source.to_str().unwrap(),
            "--output-dir",
            out.to_str().unwrap(),
            "--sizes",
            "48,16",
            "--manifest",
            "icons",
        ],
    );

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let json_start = stdout.find('{').unwrap();
    let manifest: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();
    assert_eq!(manifest["icons"]["16"], "icons/icon16.png");
    assert_eq!(manifest["icons"]["48"], "icons/icon48.png");
    assert_eq!(stdout[..json_start].lines().count(), 2);
}
