//! # render-stream-assert
//!
//! > Assert when and how many times a component renders in async tests
//!
//! A component under test records each completed render into a
//! [`RenderStream`](stream::RenderStream). Tests then hand the stream's
//! uninvoked "take next render" operation to an assertion, which decides by
//! racing it against a short wait window whether a render happened.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use render_stream_assert::prelude::*;
//!
//! #[tokio::test(start_paused = true)]
//! async fn test_rerenders_on_signal() -> Result<()> {
//!     let stream = RenderStream::<u32>::new();
//!     stream.render(|renderer: Renderer<u32>| { renderer.render(0); });
//!
//!     expect(|| stream.take_render()).to_rerender().await?;
//!     expect(|| stream.take_render()).not().to_rerender().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Render streams** - Ordered, cancel-safe queue of render events
//! - **`to_rerender`** - Did the component render (again)?
//! - **`to_render_exactly_times`** - How many times did it render?
//! - **Negation** - `.not()` flips the verdict, never the measurement
//! - **Deterministic timing** - Works on tokio's paused test clock

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod assertions;
pub mod error;
pub mod runtime;
pub mod stream;

/// Prelude for convenient imports
///
/// ```rust
/// use render_stream_assert::prelude::*;
/// ```
pub mod prelude {
    pub use crate::assertions::{expect, MatcherOptions, DEFAULT_RENDER_TIMEOUT};
    pub use crate::error::{Error, Result};
    pub use crate::stream::{
        create_render_stream, Component, Render, RenderPhase, RenderStream, RenderStreamConfig,
        Renderer,
    };
}

// Re-exports
pub use assertions::expect;
pub use error::{Error, Result};
