//! Tracing and logging (shared setup).

/// Initialize process-wide tracing with the format named by `GROCER_LOG_FORMAT`.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::LogFormat::from_env());
}

/// Tracing configuration (filters, formatters).
pub mod tracing;

pub use tracing::LogFormat;
