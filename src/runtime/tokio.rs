//! Tokio timer integration.
//!
//! Works with `#[tokio::test(start_paused = true)]`: while the test is idle
//! the paused clock jumps straight to the next sleep deadline, so a render
//! wait window costs no wall-clock time.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use super::TimeSource;

/// Tokio-based time source.
///
/// This is a thin wrapper around [`tokio::time::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTime;

impl TokioTime {
    /// Create a new Tokio time source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TimeSource for TokioTime {
    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(::tokio::time::sleep(duration))
    }
}
