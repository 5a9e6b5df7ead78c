//! Tumbler engine crate.
//!
//! A minimal single-mesh animation pipeline: GPU device + swapchain
//! bring-up, runtime shader compilation, one immutable cube mesh, and a
//! per-frame rotation state machine. The `window` runtime owns the platform
//! loop; everything else is driven through the `core` contracts.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod math;
pub mod render;
