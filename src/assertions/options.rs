//! Matcher options.

use std::time::Duration;

/// How long a render assertion waits for a render before concluding that
/// none is coming.
///
/// Long enough to absorb a few scheduler hops between a stimulus and the
/// render it causes, short enough that every passing "did not rerender"
/// assertion stays cheap. Under a paused tokio clock the wait is free.
pub const DEFAULT_RENDER_TIMEOUT: Duration = Duration::from_millis(100);

/// Per-call options for render matchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatcherOptions {
    /// Wait window for each observed render.
    pub timeout: Duration,
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_RENDER_TIMEOUT,
        }
    }
}

impl MatcherOptions {
    /// Create options with the default wait window.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wait window.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = MatcherOptions::new().timeout(Duration::from_millis(5));
        assert_eq!(options.timeout, Duration::from_millis(5));
    }

    #[test]
    fn test_options_default() {
        assert_eq!(MatcherOptions::default().timeout, DEFAULT_RENDER_TIMEOUT);
    }
}
