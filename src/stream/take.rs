//! Futures returned by [`RenderStream`](super::RenderStream).
//!
//! All of them are cancel-safe: a render is only dequeued in the poll that
//! returns it, so dropping a pending future never loses a render.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use pin_project_lite::pin_project;

use super::{Render, StreamInner};
use crate::error::{Error, Result};

/// Future for [`RenderStream::take_render`](super::RenderStream::take_render).
///
/// Stays pending until a render is available.
#[must_use = "futures do nothing unless polled"]
pub struct TakeRender<'a, T> {
    pub(super) inner: &'a StreamInner<T>,
}

impl<T> Future for TakeRender<'_, T> {
    type Output = Render<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut queue = self.inner.queue.lock();
        if let Some(render) = queue.pop_front() {
            Poll::Ready(render)
        } else {
            self.inner.register_waker(cx);
            Poll::Pending
        }
    }
}

/// Future for [`RenderStream::peek_render`](super::RenderStream::peek_render).
#[must_use = "futures do nothing unless polled"]
pub struct PeekRender<'a, T> {
    pub(super) inner: &'a StreamInner<T>,
}

impl<T: Clone> Future for PeekRender<'_, T> {
    type Output = Render<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let queue = self.inner.queue.lock();
        if let Some(render) = queue.front() {
            Poll::Ready(render.clone())
        } else {
            self.inner.register_waker(cx);
            Poll::Pending
        }
    }
}

pin_project! {
    /// Future for [`RenderStream::take_render_within`](super::RenderStream::take_render_within).
    #[must_use = "futures do nothing unless polled"]
    pub struct TakeRenderWithin<'a, T> {
        take: TakeRender<'a, T>,
        #[pin]
        deadline: tokio::time::Sleep,
        timeout: Duration,
    }
}

impl<'a, T> TakeRenderWithin<'a, T> {
    pub(super) fn new(take: TakeRender<'a, T>, timeout: Duration) -> Self {
        Self {
            take,
            deadline: tokio::time::sleep(timeout),
            timeout,
        }
    }
}

impl<T> Future for TakeRenderWithin<'_, T> {
    type Output = Result<Render<T>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        if let Poll::Ready(render) = Pin::new(this.take).poll(cx) {
            return Poll::Ready(Ok(render));
        }

        match this.deadline.poll(cx) {
            Poll::Ready(()) => Poll::Ready(Err(Error::WaitForRenderTimeout(*this.timeout))),
            Poll::Pending => Poll::Pending,
        }
    }
}
