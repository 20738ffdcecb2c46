/// Logging port. The storefront core never talks to a logging backend
/// directly; adapters such as `logger::TracingLogger` implement this.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}

/// Logger that drops everything. Handy for tools and tests that do not
/// care about diagnostics.
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}
