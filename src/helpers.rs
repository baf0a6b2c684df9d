use crate::error::Result;
use crate::models::IconSize;

/// Parse a comma separated size list such as `16, 48,128`. Blank input gives an empty list.
pub fn parse_sizes(s: &str) -> Result<Vec<IconSize>> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::parse::<IconSize>)
        .collect()
}

pub fn join_sizes(sizes: &[IconSize]) -> String {
    sizes
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Format file size in human-readable format
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
