//! Timer abstraction for the render wait window.
//!
//! Render assertions decide "no render happened" by racing the render source
//! against a timer. This module provides the [`TimeSource`] seam so that race
//! is not coupled to a specific runtime.
//!
//! - [`TokioTime`] - real `tokio::time` sleeps (honours a paused test clock)
//! - [`ImmediateTime`] - a timer that has always already fired
//!
//! # Example
//!
//! ```rust,ignore
//! use render_stream_assert::runtime::{TimeSource, TokioTime};
//!
//! let time = TokioTime::new();
//! time.sleep(Duration::from_millis(100)).await;
//! ```

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

mod tokio;

pub use self::tokio::TokioTime;

/// A source of timers for async operations.
///
/// # Implementations
///
/// - [`TokioTime`] - Real tokio time
/// - [`ImmediateTime`] - Sleeps that complete on first poll
pub trait TimeSource: Send + Sync {
    /// Create a future that completes after the given duration.
    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>>;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        (**self).sleep(duration)
    }
}

/// A time source whose sleeps are ready immediately.
///
/// With this timer an observation only sees renders that are already queued
/// (or that the taker can produce without suspending).
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateTime;

impl TimeSource for ImmediateTime {
    fn sleep(&self, _duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(std::future::ready(()))
    }
}
