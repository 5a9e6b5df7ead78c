//! Window + runtime loop.
//!
//! The platform shell: owns the `winit` EventLoop and Window, runs the
//! device bring-up chain, and pumps the cooperative poll loop. The rest of
//! the engine only ever sees the window through the GPU surface; the close
//! signal routes back through `core::App::on_close` before teardown.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
