use crate::logging::LogFormat;

/// Default log filter expression used by the binary.
///
/// Query results go to standard output, so diagnostics stay quiet unless
/// something needs attention.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Default log filter expression used by the binary.
#[must_use]
pub const fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Default logging format for the binary.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Compact
}
