//! Fluent front-end for render assertions.
//!
//! [`expect`] wraps an uninvoked render taker. The terminal methods evaluate a
//! [`RenderMatcher`], apply negation, and turn a failed assertion into
//! [`Error::AssertionFailed`] carrying the full report.
//!
//! # Example
//!
//! ```rust,ignore
//! use render_stream_assert::assertions::expect;
//!
//! expect(|| stream.take_render()).to_rerender().await?;
//! expect(|| stream.take_render()).not().to_rerender().await?;
//! expect(|| stream.take_render()).to_render_exactly_times(2).await?;
//! ```

use super::matcher::{ExpectedCount, RenderMatcher, ToRenderExactlyTimes, ToRerender};
use super::options::MatcherOptions;
use super::taker::RenderTaker;
use super::verdict::MatchContext;
use crate::error::{Error, Result};
use crate::runtime::{TimeSource, TokioTime};

/// Start a render assertion on `taker`.
///
/// The taker is not invoked until a terminal method runs.
#[must_use]
pub fn expect<T: RenderTaker>(taker: T) -> Expect<T> {
    Expect {
        taker,
        time: TokioTime,
        is_not: false,
    }
}

/// Render assertion builder.
///
/// Created by [`expect`].
#[derive(Debug)]
pub struct Expect<T, S = TokioTime> {
    taker: T,
    time: S,
    is_not: bool,
}

impl<T, S> Expect<T, S>
where
    T: RenderTaker,
    S: TimeSource,
{
    /// Negate the assertion.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(mut self) -> Self {
        self.is_not = !self.is_not;
        self
    }

    /// Use a different timer for the wait window.
    #[must_use]
    pub fn with_time_source<S2: TimeSource>(self, time: S2) -> Expect<T, S2> {
        Expect {
            taker: self.taker,
            time,
            is_not: self.is_not,
        }
    }

    /// Evaluate `matcher` and apply negation.
    ///
    /// # Errors
    ///
    /// - [`Error::AssertionFailed`] with the matcher's report if the
    ///   (possibly negated) expectation does not hold
    /// - usage and render source errors from the matcher, unchanged
    pub async fn to<M: RenderMatcher>(mut self, matcher: M) -> Result<()> {
        let ctx = MatchContext {
            is_not: self.is_not,
        };
        let verdict = matcher.evaluate(&mut self.taker, ctx, &self.time).await?;
        let holds = verdict.holds(ctx);

        tracing::debug!(
            matcher = matcher.name(),
            is_not = ctx.is_not,
            pass = verdict.pass,
            holds,
            "render assertion evaluated"
        );

        if holds {
            Ok(())
        } else {
            Err(Error::AssertionFailed(verdict.message()))
        }
    }

    /// Assert a render happens within the default wait window.
    ///
    /// # Errors
    ///
    /// See [`Expect::to`].
    pub async fn to_rerender(self) -> Result<()> {
        self.to_rerender_with(MatcherOptions::default()).await
    }

    /// Assert a render happens within `options.timeout`.
    ///
    /// # Errors
    ///
    /// See [`Expect::to`].
    pub async fn to_rerender_with(self, options: MatcherOptions) -> Result<()> {
        self.to(ToRerender::new(options)).await
    }

    /// Assert the taker yields exactly `expected` renders before going quiet.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidExpectedCount`] for a negative or fractional count,
    /// otherwise see [`Expect::to`].
    pub async fn to_render_exactly_times<N>(self, expected: N) -> Result<()>
    where
        N: TryInto<ExpectedCount, Error = Error>,
    {
        self.to_render_exactly_times_with(expected, MatcherOptions::default())
            .await
    }

    /// Like [`Expect::to_render_exactly_times`] with a custom wait window.
    ///
    /// # Errors
    ///
    /// See [`Expect::to_render_exactly_times`].
    pub async fn to_render_exactly_times_with<N>(
        self,
        expected: N,
        options: MatcherOptions,
    ) -> Result<()>
    where
        N: TryInto<ExpectedCount, Error = Error>,
    {
        let expected = expected.try_into()?;
        self.to(ToRenderExactlyTimes::new(expected, options)).await
    }
}
