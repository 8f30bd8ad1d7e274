/// For best-effort operations whose failure should be noted in the log but
/// not propagated
pub trait OrLog {
    /// Warn level, for failures the caller can smooth over
    fn or_log_warn(&self, context: &str);
    /// Error level, for failures that indicate a bug
    fn or_log_error(&self, context: &str);
}

impl<T, E: std::fmt::Display> OrLog for Result<T, E> {
    fn or_log_warn(&self, context: &str) {
        if let Err(e) = self {
            warn!("{}: {}", context, e);
        }
    }

    fn or_log_error(&self, context: &str) {
        if let Err(e) = self {
            error!("{}: {}", context, e);
        }
    }
}
