//! Console formatting helpers shared by the batch runner and the binary.
use crate::constants::{ARROW, BYTES_PER_KB, PROGRESS_SPINNER_TEMPLATE, SUCCESS_PREFIX};
use crate::logger;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;

/// Whole kilobytes, rounded down.
pub fn size_in_kb(bytes: u64) -> u64 {
    bytes / BYTES_PER_KB
}

/// Formats the per-file confirmation line, e.g.
/// `✔ photo.png → pillow/photo.webp (76 KB)`.
pub fn format_report_line(file_name: &str, output_path: &Path, size_bytes: u64) -> String {
    format!(
        "{} {} {} {} ({} KB)",
        SUCCESS_PREFIX,
        file_name,
        ARROW,
        output_path.display(),
        size_in_kb(size_bytes)
    )
}

/// `512 B`, `1.5 KB`, `3.2 MB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    const THRESHOLD: f64 = 1024.0;

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

/// Spinner on stderr, hidden in quiet mode.
pub fn create_progress_spinner(message: &str) -> ProgressBar {
    let pb = if logger::is_quiet() {
        ProgressBar::with_draw_target(None, ProgressDrawTarget::hidden())
    } else {
        ProgressBar::new_spinner()
    };
    if let Ok(style) = ProgressStyle::default_spinner().template(PROGRESS_SPINNER_TEMPLATE) {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_in_kb_floors() {
        assert_eq!(size_in_kb(0), 0);
        assert_eq!(size_in_kb(1023), 0);
        assert_eq!(size_in_kb(1024), 1);
        assert_eq!(size_in_kb(78 * 1024 - 1), 77);
        assert_eq!(size_in_kb(81920), 80);
    }

    #[test]
    fn test_format_report_line() {
        let line = format_report_line("photo.png", Path::new("pillow/photo.webp"), 76 * 1024 + 500);
        assert_eq!(line, "✔ photo.png → pillow/photo.webp (76 KB)");
    }

    #[test]
    fn test_format_report_line_small_file() {
        let line = format_report_line("tiny.PNG", Path::new("out/tiny.webp"), 300);
        assert_eq!(line, "✔ tiny.PNG → out/tiny.webp (0 KB)");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1024), "1.0 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1024 * 1024), "1.0 MB");
    }

    #[test]
    fn test_progress_spinner_carries_message() {
        let pb = create_progress_spinner("encoding photo.png");
        assert_eq!(pb.message(), "encoding photo.png");
        pb.finish_and_clear();
    }
}
