//! Render stream configuration.

use std::time::Duration;

/// How long [`RenderStream::wait_for_render`](super::RenderStream::wait_for_render)
/// waits before failing with [`Error::WaitForRenderTimeout`](crate::Error::WaitForRenderTimeout).
pub const DEFAULT_TAKE_TIMEOUT: Duration = Duration::from_secs(1);

/// Configuration for a [`RenderStream`](super::RenderStream).
#[derive(Debug, Clone)]
pub struct RenderStreamConfig {
    /// Timeout used by `wait_for_render`.
    pub take_timeout: Duration,
    /// Keep every render in the stream's history.
    pub record_history: bool,
}

impl Default for RenderStreamConfig {
    fn default() -> Self {
        Self {
            take_timeout: DEFAULT_TAKE_TIMEOUT,
            record_history: true,
        }
    }
}

impl RenderStreamConfig {
    /// Create a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timeout used by `wait_for_render`.
    #[must_use]
    pub fn take_timeout(mut self, timeout: Duration) -> Self {
        self.take_timeout = timeout;
        self
    }

    /// Stop recording render history.
    #[must_use]
    pub fn without_history(mut self) -> Self {
        self.record_history = false;
        self
    }
}
