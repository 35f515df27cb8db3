//! Wait-and-classify engine.
//!
//! [`observe_once`] invokes a taker and races its future against a timer:
//! whichever settles first decides between [`Observation::Occurred`] and
//! [`Observation::TimedOut`]. [`drain`] repeats that until the first timeout.
//!
//! A timed-out take future is dropped, never polled again. Render sources
//! whose take futures are cancel-safe (like
//! [`RenderStream::take_render`](crate::stream::RenderStream::take_render))
//! therefore keep a render that arrives after the window for the next taker.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;

use futures::future::{self, Either};

use super::taker::{RenderOf, RenderTaker, TakeOutput};
use crate::error::{Error, Result};
use crate::runtime::TimeSource;

/// Outcome of one observation attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Observation<R> {
    /// A render was consumed within the window.
    Occurred(R),
    /// No render arrived within the window.
    TimedOut,
}

impl<R> Observation<R> {
    /// Whether a render was consumed.
    #[must_use]
    pub fn occurred(&self) -> bool {
        matches!(self, Self::Occurred(_))
    }

    /// The consumed render, if any.
    pub fn into_render(self) -> Option<R> {
        match self {
            Self::Occurred(render) => Some(render),
            Self::TimedOut => None,
        }
    }
}

/// Invoke `taker` once and wait at most `window` for its render.
///
/// A render that is ready at the same moment the timer fires counts as
/// occurred. A source that gives up on its own
/// ([`Error::WaitForRenderTimeout`]) counts as timed out. Every other source
/// error propagates unchanged.
///
/// # Errors
///
/// - [`Error::TakerPanicked`] if invoking the taker panics
/// - any other error the taker's future resolves to
pub async fn observe_once<T, S>(
    taker: &mut T,
    window: Duration,
    time: &S,
) -> Result<Observation<RenderOf<T>>>
where
    T: RenderTaker,
    S: TimeSource + ?Sized,
{
    let take = invoke(taker)?;
    futures::pin_mut!(take);
    let timer = time.sleep(window);

    match future::select(take, timer).await {
        Either::Left((output, _)) => match output.into_render() {
            Ok(render) => {
                tracing::trace!(?window, "render occurred");
                Ok(Observation::Occurred(render))
            }
            Err(Error::WaitForRenderTimeout(source_timeout)) => {
                tracing::trace!(?source_timeout, "render source gave up waiting");
                Ok(Observation::TimedOut)
            }
            Err(err) => Err(err),
        },
        Either::Right(((), _)) => {
            tracing::trace!(?window, "no render within window");
            Ok(Observation::TimedOut)
        }
    }
}

/// Consume renders until one observation times out.
///
/// Returns the number of renders consumed.
///
/// # Errors
///
/// Same as [`observe_once`]; the first error stops the drain.
pub async fn drain<T, S>(taker: &mut T, window: Duration, time: &S) -> Result<usize>
where
    T: RenderTaker,
    S: TimeSource + ?Sized,
{
    let mut count = 0;
    while observe_once(taker, window, time).await?.occurred() {
        count += 1;
    }
    tracing::debug!(count, "render queue drained");
    Ok(count)
}

fn invoke<T: RenderTaker>(taker: &mut T) -> Result<T::Take> {
    panic::catch_unwind(AssertUnwindSafe(|| taker.take_render()))
        .map_err(|payload| Error::TakerPanicked(panic_message(payload.as_ref())))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{ImmediateTime, TokioTime};
    use crate::stream::RenderStream;

    const WINDOW: Duration = Duration::from_millis(100);

    #[tokio::test]
    async fn test_queued_render_occurs() {
        let stream = RenderStream::<u32>::new();
        stream.renderer().render(3);

        let observation = observe_once(&mut || stream.take_render(), WINDOW, &ImmediateTime)
            .await
            .unwrap();

        assert_eq!(observation.into_render().map(|r| r.snapshot), Some(3));
        assert_eq!(stream.pending_renders(), 0);
    }

    #[tokio::test]
    async fn test_empty_queue_times_out() {
        let stream = RenderStream::<u32>::new();

        let observation = observe_once(&mut || stream.take_render(), WINDOW, &ImmediateTime)
            .await
            .unwrap();

        assert_eq!(observation, Observation::TimedOut);
    }

    #[tokio::test(start_paused = true)]
    async fn test_render_inside_window_occurs() {
        let stream = RenderStream::<u32>::new();
        let renderer = stream.renderer();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(40)).await;
            renderer.render(1);
        });

        let observation = observe_once(&mut || stream.take_render(), WINDOW, &TokioTime)
            .await
            .unwrap();

        assert!(observation.occurred());
    }

    #[tokio::test(start_paused = true)]
    async fn test_render_after_window_is_kept() {
        let stream = RenderStream::<u32>::new();
        let renderer = stream.renderer();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(150)).await;
            renderer.render(1);
        });

        let observation = observe_once(&mut || stream.take_render(), WINDOW, &TokioTime)
            .await
            .unwrap();
        assert_eq!(observation, Observation::TimedOut);

        // The late render is still there for the next consumer.
        let render = stream.take_render().await;
        assert_eq!(render.index, 1);
    }

    #[tokio::test]
    async fn test_drain_counts_until_timeout() {
        let stream = RenderStream::<u32>::new();
        let renderer = stream.renderer();
        for i in 0..4 {
            renderer.render(i);
        }

        let count = drain(&mut || stream.take_render(), WINDOW, &ImmediateTime)
            .await
            .unwrap();

        assert_eq!(count, 4);
        assert_eq!(stream.pending_renders(), 0);
    }

    #[tokio::test]
    async fn test_source_error_propagates() {
        let mut taker = || async { Err::<u32, _>(Error::render_source("unmounted")) };

        let result = observe_once(&mut taker, WINDOW, &ImmediateTime).await;

        assert_eq!(result, Err(Error::render_source("unmounted")));
    }

    #[tokio::test]
    async fn test_source_timeout_counts_as_no_render() {
        let mut taker =
            || async { Err::<u32, _>(Error::WaitForRenderTimeout(Duration::from_millis(1))) };

        let observation = observe_once(&mut taker, WINDOW, &TokioTime).await.unwrap();
        assert_eq!(observation, Observation::TimedOut);

        let count = drain(&mut taker, WINDOW, &TokioTime).await.unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_source_timeout_shorter_than_window_times_out() {
        let stream = RenderStream::<u32>::new();

        let observation = observe_once(
            &mut || stream.take_render_within(Duration::from_millis(10)),
            WINDOW,
            &TokioTime,
        )
        .await
        .unwrap();

        assert_eq!(observation, Observation::TimedOut);
    }

    #[tokio::test]
    async fn test_panicking_taker_is_usage_error() {
        let mut taker = || -> std::future::Ready<Result<u32>> { panic!("taker exploded") };

        let result = observe_once(&mut taker, WINDOW, &ImmediateTime).await;

        assert_eq!(result, Err(Error::TakerPanicked("taker exploded".to_string())));
    }
}
