//! GPU rendering subsystem.
//!
//! One renderer, one mesh: the cube pipeline compiles its embedded shaders
//! at startup, uploads the fixed vertex data once, and replays a single
//! clear+draw pass per frame with the animation's current model matrix.
//!
//! The animation itself ([`Spin`]) is pure CPU state and carries no GPU
//! handles, which keeps it testable without a device.

mod ctx;
mod cube;
mod error;
mod mesh;
mod shader;
mod spin;

pub use ctx::{RenderCtx, RenderTarget};
pub use cube::CubeRenderer;
pub use error::RenderError;
pub use mesh::{CUBE_VERTICES, Vertex};
pub use spin::{ROTATION_INTERVAL, Spin};
