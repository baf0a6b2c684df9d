//! The `icons` block of a WebExtension `manifest.json`.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::icons::icon_file_name;
use crate::models::IconReport;

/// Map each written size to `<base>/icon{size}.png`, smallest first. Duplicate
/// sizes collapse to one entry. A root base (`/`) keeps its leading slash.
pub fn manifest_icons(report: &IconReport, base: &str) -> Value {
    let trimmed = base.trim_end_matches('/');
    let by_size: BTreeMap<u32, String> = report
        .icons
        .iter()
        .map(|icon| {
            let name = icon_file_name(icon.size);
            let path = match (base.is_empty(), trimmed.is_empty()) {
                (true, _) => name,
                (false, true) => format!("/{}", name),
                (false, false) => format!("{}/{}", trimmed, name),
            };
            (icon.size.get(), path)
        })
        .collect();

    let mut icons = Map::new();
    for (size, path) in by_size {
        icons.insert(size.to_string(), Value::String(path));
    }
    Value::Object(icons)
}

pub fn manifest_icons_json(report: &IconReport, base: &str) -> String {
    let mut root = Map::new();
    root.insert("icons".into(), manifest_icons(report, base));
    serde_json::to_string_pretty(&Value::Object(root)).unwrap_or_else(|_| "{}".into())
}
