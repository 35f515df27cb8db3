//! Render stream: an ordered, consumable queue of render events.
//!
//! A [`RenderStream`] mounts a [`Component`] and hands it a [`Renderer`].
//! Every call to [`Renderer::render`] records one [`Render`] which the test
//! consumes with [`RenderStream::take_render`].
//!
//! # Example
//!
//! ```rust
//! use render_stream_assert::stream::{RenderStream, Renderer};
//!
//! # tokio_test_block_on(async {
//! let stream = RenderStream::<u32>::new();
//! stream.render(|renderer: Renderer<u32>| {
//!     renderer.render(0);
//! });
//!
//! let first = stream.take_render().await;
//! assert!(first.is_mount());
//! assert_eq!(stream.total_render_count(), 1);
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(f)
//! # }
//! ```

use std::collections::VecDeque;
use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::task::{Context, Waker};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;

mod config;
mod render;
mod take;

pub use config::{RenderStreamConfig, DEFAULT_TAKE_TIMEOUT};
pub use render::{Render, RenderPhase};
pub use take::{PeekRender, TakeRender, TakeRenderWithin};

/// Something that can be mounted into a [`RenderStream`].
///
/// Closures taking a [`Renderer`] are components.
pub trait Component<T> {
    /// Mount the component. It renders through `renderer` for as long as it
    /// keeps the handle.
    fn mount(self, renderer: Renderer<T>);
}

impl<T, F> Component<T> for F
where
    F: FnOnce(Renderer<T>),
{
    fn mount(self, renderer: Renderer<T>) {
        self(renderer);
    }
}

/// Create a render stream with the given configuration.
#[must_use]
pub fn create_render_stream<T: Clone>(config: RenderStreamConfig) -> RenderStream<T> {
    RenderStream::with_config(config)
}

pub(crate) struct StreamInner<T> {
    /// Renders not yet taken.
    queue: Mutex<VecDeque<Render<T>>>,
    /// Every render, taken or not.
    history: Mutex<Vec<Render<T>>>,
    /// Tasks waiting for the next render.
    waiters: Mutex<Vec<Waker>>,
    total: AtomicUsize,
    created_at: Instant,
    config: RenderStreamConfig,
}

impl<T> StreamInner<T> {
    fn register_waker(&self, cx: &Context<'_>) {
        let mut waiters = self.waiters.lock();
        if !waiters.iter().any(|w| w.will_wake(cx.waker())) {
            waiters.push(cx.waker().clone());
        }
    }

    fn wake_all(&self) {
        let waiters = std::mem::take(&mut *self.waiters.lock());
        for waker in waiters {
            waker.wake();
        }
    }
}

/// The consuming side of a render stream.
///
/// Cloning a stream yields another handle onto the same queue.
pub struct RenderStream<T> {
    inner: Arc<StreamInner<T>>,
}

impl<T: Clone> RenderStream<T> {
    /// Create a render stream with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RenderStreamConfig::default())
    }

    /// Create a render stream with the given configuration.
    #[must_use]
    pub fn with_config(config: RenderStreamConfig) -> Self {
        Self {
            inner: Arc::new(StreamInner {
                queue: Mutex::new(VecDeque::new()),
                history: Mutex::new(Vec::new()),
                waiters: Mutex::new(Vec::new()),
                total: AtomicUsize::new(0),
                created_at: Instant::now(),
                config,
            }),
        }
    }

    /// Mount a component, handing it a [`Renderer`] for this stream.
    pub fn render(&self, component: impl Component<T>) {
        tracing::debug!("mounting component into render stream");
        component.mount(self.renderer());
    }

    /// A handle that records renders into this stream.
    #[must_use]
    pub fn renderer(&self) -> Renderer<T> {
        Renderer {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Peek at the next render without consuming it.
    ///
    /// Waits until a render is available.
    pub fn peek_render(&self) -> PeekRender<'_, T> {
        PeekRender { inner: &self.inner }
    }

    /// Get all renders recorded so far, taken or not.
    ///
    /// Empty when history recording is disabled.
    #[must_use]
    pub fn renders(&self) -> Vec<Render<T>> {
        self.inner.history.lock().clone()
    }
}

impl<T> RenderStream<T> {
    /// Take the next render.
    ///
    /// The future stays pending until a render is available. Dropping it
    /// before it completes leaves the queue untouched.
    pub fn take_render(&self) -> TakeRender<'_, T> {
        TakeRender { inner: &self.inner }
    }

    /// Take the next render, failing with
    /// [`Error::WaitForRenderTimeout`](crate::Error::WaitForRenderTimeout)
    /// if none arrives within `timeout`.
    pub fn take_render_within(&self, timeout: Duration) -> TakeRenderWithin<'_, T> {
        TakeRenderWithin::new(self.take_render(), timeout)
    }

    /// Take the next render using the configured timeout.
    pub fn wait_for_render(&self) -> TakeRenderWithin<'_, T> {
        self.take_render_within(self.inner.config.take_timeout)
    }

    /// Take the next render if one is already queued.
    pub fn try_take_render(&self) -> Option<Render<T>> {
        self.inner.queue.lock().pop_front()
    }

    /// Number of renders recorded since the stream was created.
    #[must_use]
    pub fn total_render_count(&self) -> usize {
        self.inner.total.load(Ordering::SeqCst)
    }

    /// Number of renders waiting to be taken.
    #[must_use]
    pub fn pending_renders(&self) -> usize {
        self.inner.queue.lock().len()
    }

    /// The stream's configuration.
    #[must_use]
    pub fn config(&self) -> &RenderStreamConfig {
        &self.inner.config
    }
}

impl<T: Clone> Default for RenderStream<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for RenderStream<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Debug for RenderStream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderStream")
            .field("total_render_count", &self.total_render_count())
            .field("pending_renders", &self.pending_renders())
            .finish()
    }
}

/// The producing side of a render stream, held by a mounted component.
pub struct Renderer<T> {
    inner: Arc<StreamInner<T>>,
}

impl<T: Clone> Renderer<T> {
    /// Record one completed render.
    ///
    /// Returns the render's 1-based index.
    pub fn render(&self, snapshot: T) -> usize {
        let inner = &self.inner;
        let index = {
            let mut queue = inner.queue.lock();
            let index = inner.total.fetch_add(1, Ordering::SeqCst) + 1;
            let phase = if index == 1 {
                RenderPhase::Mount
            } else {
                RenderPhase::Update
            };
            let render = Render {
                index,
                phase,
                snapshot,
                elapsed: inner.created_at.elapsed(),
            };
            if inner.config.record_history {
                inner.history.lock().push(render.clone());
            }
            queue.push_back(render);
            index
        };

        tracing::trace!(index, "render recorded");
        inner.wake_all();
        index
    }
}

impl<T> Renderer<T> {
    /// Number of renders recorded through any handle of this stream.
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.inner.total.load(Ordering::SeqCst)
    }
}

impl<T> Clone for Renderer<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Debug for Renderer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("render_count", &self.render_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_render_records_in_order() {
        let stream = RenderStream::<&str>::new();
        let renderer = stream.renderer();

        assert_eq!(renderer.render("a"), 1);
        assert_eq!(renderer.render("b"), 2);

        let first = stream.try_take_render().unwrap();
        assert_eq!(first.index, 1);
        assert_eq!(first.phase, RenderPhase::Mount);
        assert_eq!(first.snapshot, "a");

        let second = stream.try_take_render().unwrap();
        assert_eq!(second.phase, RenderPhase::Update);
        assert_eq!(second.into_snapshot(), "b");

        assert!(stream.try_take_render().is_none());
    }

    #[test]
    fn test_create_render_stream_applies_config() {
        let config = RenderStreamConfig::new().without_history();
        let stream: RenderStream<u8> = create_render_stream(config);
        stream.renderer().render(1);

        assert_eq!(stream.pending_renders(), 1);
        assert!(stream.renders().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_elapsed_follows_tokio_clock() {
        let stream = RenderStream::<u8>::new();
        let renderer = stream.renderer();

        renderer.render(0);
        tokio::time::sleep(Duration::from_millis(60)).await;
        renderer.render(1);

        let first = stream.try_take_render().unwrap();
        let second = stream.try_take_render().unwrap();
        assert_eq!(first.elapsed, Duration::ZERO);
        assert!(second.elapsed >= Duration::from_millis(60));
    }

    #[test]
    fn test_mount_hands_out_renderer() {
        let stream = RenderStream::<u8>::new();
        stream.render(|renderer: Renderer<u8>| {
            renderer.render(7);
        });

        assert_eq!(stream.total_render_count(), 1);
        assert_eq!(stream.pending_renders(), 1);
    }

    #[test]
    fn test_history_keeps_taken_renders() {
        let stream = RenderStream::<u8>::new();
        let renderer = stream.renderer();
        renderer.render(1);
        renderer.render(2);
        stream.try_take_render();

        let history: Vec<_> = stream.renders().into_iter().map(Render::into_snapshot).collect();
        assert_eq!(history, vec![1, 2]);
        assert_eq!(stream.pending_renders(), 1);
    }

    #[test]
    fn test_history_can_be_disabled() {
        let stream = create_render_stream::<u8>(RenderStreamConfig::new().without_history());
        stream.renderer().render(1);

        assert!(stream.renders().is_empty());
        assert_eq!(stream.total_render_count(), 1);
    }

    #[tokio::test]
    async fn test_take_render_waits_for_render() {
        let stream = RenderStream::<u32>::new();
        let renderer = stream.renderer();

        let handle = tokio::spawn(async move {
            tokio::task::yield_now().await;
            renderer.render(42);
        });

        let render = stream.take_render().await;
        assert_eq!(render.snapshot, 42);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_peek_does_not_consume() {
        let stream = RenderStream::<u32>::new();
        stream.renderer().render(5);

        assert_eq!(stream.peek_render().await.snapshot, 5);
        assert_eq!(stream.pending_renders(), 1);
        assert_eq!(stream.take_render().await.snapshot, 5);
        assert_eq!(stream.pending_renders(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_take_render_within_times_out() {
        let stream = RenderStream::<u32>::new();

        let result = stream.take_render_within(Duration::from_millis(50)).await;

        assert_eq!(
            result,
            Err(Error::WaitForRenderTimeout(Duration::from_millis(50)))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_for_render_uses_configured_timeout() {
        let stream = RenderStream::<u32>::with_config(
            RenderStreamConfig::new().take_timeout(Duration::from_millis(10)),
        );
        stream.renderer().render(1);

        assert_eq!(stream.wait_for_render().await.unwrap().snapshot, 1);
        assert_eq!(
            stream.wait_for_render().await,
            Err(Error::WaitForRenderTimeout(Duration::from_millis(10)))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_take_does_not_swallow_render() {
        let stream = RenderStream::<u32>::new();

        // Abandon a pending take, then render.
        let abandoned = tokio::time::timeout(Duration::from_millis(10), stream.take_render()).await;
        assert!(abandoned.is_err());
        stream.renderer().render(9);

        assert_eq!(stream.take_render().await.snapshot, 9);
    }

    #[test]
    fn test_debug_impls() {
        let stream = RenderStream::<u32>::new();
        let renderer = stream.renderer();
        renderer.render(1);

        assert!(format!("{stream:?}").contains("RenderStream"));
        assert!(format!("{renderer:?}").contains("render_count: 1"));
    }
}
