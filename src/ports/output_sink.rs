use crate::Severity;

/// Destination for every observable side effect of a product.
///
/// Calls are append-only; each call is atomic with respect to other callers.
#[cfg_attr(test, mockall::automock)]
pub trait OutputSink: Send + Sync {
    fn render(&self, text: &str);

    fn log(&self, severity: Severity, text: &str);
}
