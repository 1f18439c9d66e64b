//! Error-reporting capability handed to views.
//!
//! Remote failures never reach the page model; they go here instead. The
//! default implementation writes to the `log` facade.

use crate::error::ApiError;

pub trait Reporter {
    /// A remote operation failed. `context` says which one.
    fn failure(&self, context: &str, error: &ApiError);

    /// A remote operation completed.
    fn success(&self, message: &str) {
        log::info!("{message}");
    }
}

/// Reports through `log`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn failure(&self, context: &str, error: &ApiError) {
        log::error!("{context}: {error}");
    }
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn failure(&self, context: &str, error: &ApiError) {
        (**self).failure(context, error)
    }

    fn success(&self, message: &str) {
        (**self).success(message)
    }
}
