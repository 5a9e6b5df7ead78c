//! GPU device + presentation surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the window-bound Surface (swapchain)
//! - the depth-stencil frame targets derived from the surface configuration
//! - acquiring frames and providing encoders/views for rendering
//!
//! Bring-up is a strict linear chain; each step requires every previous step
//! to have succeeded and maps its failure to a distinct [`GpuError`] kind.

mod error;
mod gpu;
mod surface;
mod targets;

pub use error::{GpuError, SurfaceErrorAction};
pub use gpu::{Gpu, GpuFrame, GpuInit};
pub use targets::{DEPTH_FORMAT, FrameTargets};

pub(crate) use gpu::checked_create;
