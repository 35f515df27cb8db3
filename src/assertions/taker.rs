//! The "take next render" seam between assertions and a render source.

use std::future::Future;

use crate::error::{Error, Result};
use crate::stream::Render;

/// What a render taker's future may resolve to.
///
/// A bare [`Render`] is a render that cannot fail to arrive. A `Result` lets
/// the source report its own errors. Assertions read
/// [`Error::WaitForRenderTimeout`](crate::Error::WaitForRenderTimeout) as "no
/// render" and propagate every other error unchanged.
pub trait TakeOutput {
    /// The render value handed back to the caller.
    type Render;

    /// Convert into the render or the source's error.
    fn into_render(self) -> Result<Self::Render>;
}

impl<T> TakeOutput for Render<T> {
    type Render = Self;

    fn into_render(self) -> Result<Self> {
        Ok(self)
    }
}

impl<R, E> TakeOutput for std::result::Result<R, E>
where
    E: Into<Error>,
{
    type Render = R;

    fn into_render(self) -> Result<R> {
        self.map_err(Into::into)
    }
}

/// An operation that consumes the next render when invoked.
///
/// Assertions receive the taker uninvoked and decide themselves when (and how
/// often) to call it. Every call consumes exactly one render once its future
/// completes.
///
/// Implemented for any `FnMut() -> impl Future` whose output is a
/// [`TakeOutput`], so `|| stream.take_render()` is a taker.
pub trait RenderTaker {
    /// Output of the take future.
    type Output: TakeOutput;

    /// The take future.
    type Take: Future<Output = Self::Output>;

    /// Start taking the next render.
    fn take_render(&mut self) -> Self::Take;
}

impl<F, Fut> RenderTaker for F
where
    F: FnMut() -> Fut,
    Fut: Future,
    Fut::Output: TakeOutput,
{
    type Output = Fut::Output;
    type Take = Fut;

    fn take_render(&mut self) -> Fut {
        self()
    }
}

/// The render type produced by a taker.
pub type RenderOf<T> = <<T as RenderTaker>::Output as TakeOutput>::Render;
