//! Render assertions for async tests.
//!
//! This module provides assertions over a render taker, the uninvoked
//! "take next render" operation of a render stream:
//!
//! - [`expect`] - Fluent front-end with `.not()`
//! - [`ToRerender`] - Assert at least one more render happened
//! - [`ToRenderExactlyTimes`] - Assert the total number of renders
//! - [`observe_once`] / [`drain`] - The wait-and-classify engine
//! - [`format`] - Failure report text
//!
//! # Example
//!
//! ```rust
//! use render_stream_assert::assertions::expect;
//! use render_stream_assert::stream::RenderStream;
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
//! let stream = RenderStream::<u32>::new();
//! let renderer = stream.renderer();
//! renderer.render(0);
//! renderer.render(1);
//!
//! expect(|| stream.take_render()).to_render_exactly_times(2).await.unwrap();
//! expect(|| stream.take_render()).not().to_rerender().await.unwrap();
//! # });
//! ```

mod expect;
pub mod format;
mod matcher;
mod observe;
mod options;
mod taker;
mod verdict;

pub use expect::{expect, Expect};
pub use matcher::{
    to_render_exactly_times, to_rerender, ExpectedCount, RenderMatcher, ToRenderExactlyTimes,
    ToRerender,
};
pub use observe::{drain, observe_once, Observation};
pub use options::{MatcherOptions, DEFAULT_RENDER_TIMEOUT};
pub use taker::{RenderOf, RenderTaker, TakeOutput};
pub use verdict::{MatchContext, Verdict};
