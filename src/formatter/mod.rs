//! Display formatting utilities: byte humanization, JSON pretty-printing
//! with graceful fallback, and status classification.

use serde_json::Value;

/// Units for [`humanize_bytes`], scaled by powers of 1024.
const BYTE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Renders a byte count with the largest unit whose scaled value is >= 1.
///
/// Plain bytes render as integers; KB and above carry two decimal places.
///
/// # Examples
///
/// ```
/// use api_workbench::formatter::humanize_bytes;
///
/// assert_eq!(humanize_bytes(0), "0 B");
/// assert_eq!(humanize_bytes(512), "512 B");
/// assert_eq!(humanize_bytes(1536), "1.50 KB");
/// ```
pub fn humanize_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut unit = 0;
    let mut scaled = bytes as f64;
    while unit < BYTE_UNITS.len() - 1 && scaled >= 1024.0 {
        scaled /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, BYTE_UNITS[unit])
    } else {
        format!("{:.2} {}", scaled, BYTE_UNITS[unit])
    }
}

/// Pretty-prints `text` with 2-space indentation when it parses as JSON;
/// returns it unchanged otherwise. Never fails.
pub fn pretty_print_if_json(text: &str) -> String {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| text.to_string()),
        Err(_) => text.to_string(),
    }
}

/// Checks whether `text` parses as JSON.
pub fn is_valid_json(text: &str) -> bool {
    serde_json::from_str::<Value>(text).is_ok()
}

/// Category of an HTTP status code, including the synthetic `0` used for
/// transport failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    /// Status `0`: the transport failed before any response was received.
    TransportFailure,
    /// 2xx.
    Success,
    /// 3xx.
    Redirect,
    /// 4xx.
    ClientError,
    /// Everything else, including 5xx and non-standard codes.
    ServerError,
}

/// Classifies a status code into its display category.
pub fn classify_status(status: u16) -> StatusCategory {
    match status {
        0 => StatusCategory::TransportFailure,
        200..=299 => StatusCategory::Success,
        300..=399 => StatusCategory::Redirect,
        400..=499 => StatusCategory::ClientError,
        _ => StatusCategory::ServerError,
    }
}
