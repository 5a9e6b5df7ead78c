//! Small fixed-size linear algebra used by the renderer.
//!
//! Only what the animation needs: a row-major 4x4 matrix with identity,
//! multiplication, and axis/Euler rotation constructors. GPU upload sites are
//! responsible for converting to the shader's column-major layout.

mod mat4;

pub use mat4::Mat4;
