/// A diagnostics handle scoped to one component.
///
/// Created once at startup and passed by non-owning reference into handlers,
/// a scope carries a subsystem/category pair and delegates to the global
/// [`log`] facade. Logging through it is observational only; it never alters
/// control flow and is not required for correctness.
#[derive(Debug, Clone)]
pub struct LogScope {
    target: String,
}

impl LogScope {
    /// Create a scope for `subsystem` and `category`.
    #[must_use]
    pub fn new(subsystem: &str, category: &str) -> Self {
        Self {
            target: format!("{subsystem}::{category}"),
        }
    }

    /// Log target used for records emitted through this scope.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Record an informational event.
    pub fn info(&self, message: &str) {
        log::info!(target: &self.target, "{message}");
    }

    /// Record an error event.
    pub fn error(&self, message: &str) {
        log::error!(target: &self.target, "{message}");
    }
}
