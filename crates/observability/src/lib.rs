//! Tracing / logging setup shared by the quotedesk binaries.

/// Initialize process-wide logging with the format taken from
/// `QUOTEDESK_LOG_FORMAT` (`json`, the default, or `pretty`).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    let format: LogFormat = std::env::var("QUOTEDESK_LOG_FORMAT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or_default();
    tracing::init(format);
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::LogFormat;
