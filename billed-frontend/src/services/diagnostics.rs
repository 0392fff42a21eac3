use std::fmt::Display;

/// Sink for recoverable conditions worth noting (corrupted field, failed
/// upload, failed commit). Implementations must not panic or block.
pub trait Diagnostics: Send + Sync {
    fn warn(&self, message: &str, details: &dyn Display);
    fn error(&self, message: &str, details: &dyn Display);
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&self, message: &str, details: &dyn Display) {
        tracing::warn!(details = %details, "{}", message);
    }

    fn error(&self, message: &str, details: &dyn Display) {
        tracing::error!(details = %details, "{}", message);
    }
}
