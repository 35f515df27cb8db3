// Range and precision of the float conversions are checked before casting.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

//! Render matchers.
//!
//! This module provides the two render assertions and the trait they share:
//!
//! - [`RenderMatcher`] trait for matchers over a [`RenderTaker`]
//! - [`ToRerender`] / [`to_rerender`] - at least one more render happened
//! - [`ToRenderExactlyTimes`] / [`to_render_exactly_times`] - total render count
//!
//! Matchers always compute the unnegated truth. Negation is applied by the
//! caller (see [`Expect`](super::Expect)).
//!
//! # Example
//!
//! ```rust,ignore
//! use render_stream_assert::assertions::{to_rerender, MatchContext, MatcherOptions};
//!
//! let verdict = to_rerender(
//!     &mut || stream.take_render(),
//!     MatchContext::default(),
//!     MatcherOptions::new(),
//! )
//! .await?;
//! assert!(verdict.pass);
//! ```

use std::fmt;
use std::future::Future;

use super::format;
use super::observe::{drain, observe_once};
use super::options::MatcherOptions;
use super::taker::RenderTaker;
use super::verdict::{MatchContext, Verdict};
use crate::error::{Error, Result};
use crate::runtime::{TimeSource, TokioTime};

/// A matcher evaluated against a render taker.
///
/// # Implementing Custom Matchers
///
/// ```rust,ignore
/// struct RendersAtLeastOnce;
///
/// impl RenderMatcher for RendersAtLeastOnce {
///     fn name(&self) -> &'static str {
///         "toRenderAtLeastOnce"
///     }
///
///     fn evaluate<T, S>(&self, taker: &mut T, _ctx: MatchContext, time: &S)
///         -> impl Future<Output = Result<Verdict>>
///     where
///         T: RenderTaker,
///         S: TimeSource + ?Sized,
///     {
///         async move {
///             let count = drain(taker, DEFAULT_RENDER_TIMEOUT, time).await?;
///             Ok(Verdict::new(count > 0, move || format!("rendered {count} times")))
///         }
///     }
/// }
/// ```
pub trait RenderMatcher {
    /// Name the matcher is registered under, used in report headers.
    fn name(&self) -> &'static str;

    /// Evaluate the unnegated expectation.
    ///
    /// `ctx` only influences the wording of the message.
    fn evaluate<T, S>(
        &self,
        taker: &mut T,
        ctx: MatchContext,
        time: &S,
    ) -> impl Future<Output = Result<Verdict>>
    where
        T: RenderTaker,
        S: TimeSource + ?Sized;
}

// =============================================================================
// Expected count
// =============================================================================

/// A validated expected render count: a non-negative whole number.
///
/// Build one with `try_from`/`try_into` from any integer or float type.
///
/// ```rust
/// use render_stream_assert::assertions::ExpectedCount;
///
/// assert_eq!(ExpectedCount::try_from(2).unwrap().get(), 2);
/// assert!(ExpectedCount::try_from(-1).is_err());
/// assert!(ExpectedCount::try_from(1.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpectedCount(usize);

impl ExpectedCount {
    /// The count.
    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for ExpectedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

macro_rules! expected_count_from_int {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<$ty> for ExpectedCount {
                type Error = Error;

                #[allow(clippy::unnecessary_fallible_conversions)]
                fn try_from(value: $ty) -> Result<Self> {
                    usize::try_from(value)
                        .map(Self)
                        .map_err(|_| Error::invalid_expected_count(value))
                }
            }
        )*
    };
}

expected_count_from_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl TryFrom<f64> for ExpectedCount {
    type Error = Error;

    #[allow(clippy::float_cmp)]
    fn try_from(value: f64) -> Result<Self> {
        // `usize::MAX as f64` rounds up to 2^64, which no usize can hold.
        if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < usize::MAX as f64 {
            Ok(Self(value as usize))
        } else {
            Err(Error::invalid_expected_count(value))
        }
    }
}

impl TryFrom<f32> for ExpectedCount {
    type Error = Error;

    fn try_from(value: f32) -> Result<Self> {
        Self::try_from(f64::from(value))
    }
}

// =============================================================================
// Matchers
// =============================================================================

/// Matcher for "the component rendered (again)".
///
/// Observes a single render window and consumes at most one render.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToRerender {
    options: MatcherOptions,
}

impl ToRerender {
    /// Create the matcher with the given options.
    #[must_use]
    pub fn new(options: MatcherOptions) -> Self {
        Self { options }
    }
}

impl RenderMatcher for ToRerender {
    fn name(&self) -> &'static str {
        format::TO_RERENDER
    }

    fn evaluate<T, S>(
        &self,
        taker: &mut T,
        ctx: MatchContext,
        time: &S,
    ) -> impl Future<Output = Result<Verdict>>
    where
        T: RenderTaker,
        S: TimeSource + ?Sized,
    {
        let window = self.options.timeout;
        async move {
            let pass = observe_once(taker, window, time).await?.occurred();
            let negated = ctx.is_not;
            Ok(Verdict::new(pass, move || {
                format::report(format::TO_RERENDER, negated, &format::rerender_body(negated))
            }))
        }
    }
}

/// Matcher for "the component rendered exactly N times".
///
/// Drains the taker until a window passes without a render, then compares the
/// number of renders consumed with the expected count.
#[derive(Debug, Clone, Copy)]
pub struct ToRenderExactlyTimes {
    expected: ExpectedCount,
    options: MatcherOptions,
}

impl ToRenderExactlyTimes {
    /// Create the matcher with the given options.
    #[must_use]
    pub fn new(expected: ExpectedCount, options: MatcherOptions) -> Self {
        Self { expected, options }
    }

    /// The expected render count.
    #[must_use]
    pub fn expected(&self) -> ExpectedCount {
        self.expected
    }
}

impl RenderMatcher for ToRenderExactlyTimes {
    fn name(&self) -> &'static str {
        format::TO_RENDER_EXACTLY_TIMES
    }

    fn evaluate<T, S>(
        &self,
        taker: &mut T,
        ctx: MatchContext,
        time: &S,
    ) -> impl Future<Output = Result<Verdict>>
    where
        T: RenderTaker,
        S: TimeSource + ?Sized,
    {
        let expected = self.expected.get();
        let window = self.options.timeout;
        async move {
            let actual = drain(taker, window, time).await?;
            let negated = ctx.is_not;
            Ok(Verdict::new(actual == expected, move || {
                format::report(
                    format::TO_RENDER_EXACTLY_TIMES,
                    negated,
                    &format::render_count_body(negated, expected, actual),
                )
            }))
        }
    }
}

/// Evaluate [`ToRerender`] on tokio time.
///
/// # Errors
///
/// Propagates taker panics and render source errors.
pub async fn to_rerender<T: RenderTaker>(
    taker: &mut T,
    ctx: MatchContext,
    options: MatcherOptions,
) -> Result<Verdict> {
    ToRerender::new(options)
        .evaluate(taker, ctx, &TokioTime)
        .await
}

/// Evaluate [`ToRenderExactlyTimes`] on tokio time.
///
/// `expected` is validated before the taker is invoked.
///
/// # Errors
///
/// - [`Error::InvalidExpectedCount`] if `expected` is negative or fractional
/// - taker panics and render source errors
pub async fn to_render_exactly_times<T, N>(
    taker: &mut T,
    ctx: MatchContext,
    expected: N,
    options: MatcherOptions,
) -> Result<Verdict>
where
    T: RenderTaker,
    N: TryInto<ExpectedCount, Error = Error>,
{
    let expected = expected.try_into()?;
    ToRenderExactlyTimes::new(expected, options)
        .evaluate(taker, ctx, &TokioTime)
        .await
}
