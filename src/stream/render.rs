//! Render records produced by a [`RenderStream`](super::RenderStream).

use std::fmt;
use std::time::Duration;

/// Whether a render mounted the component or updated it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderPhase {
    /// The first render after mounting.
    Mount,
    /// Any later render.
    Update,
}

impl fmt::Display for RenderPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mount => f.write_str("mount"),
            Self::Update => f.write_str("update"),
        }
    }
}

/// A single completed render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Render<T> {
    /// 1-based position of this render in the stream.
    pub index: usize,
    /// Mount or update.
    pub phase: RenderPhase,
    /// Whatever the component chose to record for this render.
    pub snapshot: T,
    /// When the render happened (relative to stream creation).
    pub elapsed: Duration,
}

impl<T> Render<T> {
    /// Whether this is the mounting render.
    #[must_use]
    pub fn is_mount(&self) -> bool {
        self.phase == RenderPhase::Mount
    }

    /// Discard the metadata and keep the snapshot.
    pub fn into_snapshot(self) -> T {
        self.snapshot
    }
}
