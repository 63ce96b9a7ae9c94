//! Display and validation helpers shared by the client views

use crate::types::RecordStatus;
use chrono::{DateTime, NaiveDateTime};

/// Maximum accepted upload size: 50MB
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// Audio MIME types accepted by the upload flow
pub const ALLOWED_AUDIO_TYPES: [&str; 4] =
    ["audio/mp3", "audio/wav", "audio/m4a", "audio/ogg"];

/// Mark at or above which a mark counts as "good"
pub const GOOD_MARK_THRESHOLD: f64 = 5.0;

/// Whether a MIME type is accepted for upload
#[must_use]
pub fn is_allowed_audio_type(mime: &str) -> bool {
    ALLOWED_AUDIO_TYPES.contains(&mime)
}

/// Whether a file size exceeds the upload limit
#[must_use]
pub fn exceeds_upload_limit(size_bytes: f64) -> bool {
    size_bytes > MAX_UPLOAD_BYTES as f64
}

/// File size in megabytes with two decimals, e.g. "60.00"
#[must_use]
pub fn format_size_mb(size_bytes: f64) -> String {
    format!("{:.2}", size_bytes / (1024.0 * 1024.0))
}

/// Average mark with two-decimal rounding
#[must_use]
pub fn format_average_mark(mark: f64) -> String {
    format!("{mark:.2}")
}

/// CSS class for a mark: "good" at or above the threshold, "poor" below,
/// unstyled when the mark is missing (represented as 0)
#[must_use]
pub fn mark_class(mark: f64) -> &'static str {
    if mark == 0.0 {
        ""
    } else if mark >= GOOD_MARK_THRESHOLD {
        "mark-good"
    } else {
        "mark-poor"
    }
}

/// Localized label for a record status
#[must_use]
pub const fn status_label(status: RecordStatus) -> &'static str {
    match status {
        RecordStatus::Completed => "Завершено",
        RecordStatus::Processing => "В обробці",
        RecordStatus::Error => "Помилка",
        RecordStatus::Pending | RecordStatus::Unknown => "Обробка...",
    }
}

/// CSS class for a record status badge
#[must_use]
pub const fn status_class(status: RecordStatus) -> &'static str {
    match status {
        RecordStatus::Completed => "status-completed",
        RecordStatus::Processing => "status-processing",
        RecordStatus::Error => "status-error",
        RecordStatus::Pending | RecordStatus::Unknown => "",
    }
}

/// Number of pages for a list, never less than 1
#[must_use]
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// Pin a 1-based page index into `[1, total_pages]`
#[must_use]
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// The slice of `items` shown on a 1-based page
#[must_use]
pub fn page_items<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = (page.saturating_sub(1) * page_size).min(items.len());
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Render a backend timestamp the way `uk-UA` locales do,
/// e.g. "01.03.2025, 10:05:00". Unparseable input is passed through.
#[must_use]
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d.%m.%Y, %H:%M:%S").to_string();
    }
    // The backend emits naive ISO timestamps without an offset
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%d.%m.%Y, %H:%M:%S").to_string();
    }
    raw.to_string()
}
