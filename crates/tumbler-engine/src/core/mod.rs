//! Core engine-facing contracts.
//!
//! The stable interface between the runtime (platform loop) and the
//! application layer: an initialization hook gated on device bring-up, a
//! per-frame callback, and a close hook that runs before GPU teardown.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
