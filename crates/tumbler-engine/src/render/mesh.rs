//! Fixed cube geometry.
//!
//! A unit cube centered at the origin, 6 faces x 2 triangles, 36 vertices,
//! one flat color per face. Triangles wind counter-clockwise seen from
//! outside the cube so back-face culling removes the far side.

use bytemuck::{Pod, Zeroable};

/// One vertex: 3-float position at byte offset 0, 3-float color at offset 12.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3  // color
    ];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

const fn v(x: f32, y: f32, z: f32, color: [f32; 3]) -> Vertex {
    Vertex {
        position: [x, y, z],
        color,
    }
}

const RED: [f32; 3] = [1.0, 0.0, 0.0];
const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
const BLUE: [f32; 3] = [0.0, 0.0, 1.0];
const YELLOW: [f32; 3] = [1.0, 1.0, 0.0];
const MAGENTA: [f32; 3] = [1.0, 0.0, 1.0];
const CYAN: [f32; 3] = [0.0, 1.0, 1.0];

/// 36 vertices, 12 triangles, per-face colors. Never mutated after upload.
#[rustfmt::skip]
pub const CUBE_VERTICES: [Vertex; 36] = [
    // near face (z = -0.5), green
    v(-0.5, -0.5, -0.5, GREEN), v(-0.5,  0.5, -0.5, GREEN), v( 0.5,  0.5, -0.5, GREEN),
    v(-0.5, -0.5, -0.5, GREEN), v( 0.5,  0.5, -0.5, GREEN), v( 0.5, -0.5, -0.5, GREEN),
    // far face (z = +0.5), red
    v(-0.5, -0.5,  0.5, RED),   v( 0.5, -0.5,  0.5, RED),   v( 0.5,  0.5,  0.5, RED),
    v(-0.5, -0.5,  0.5, RED),   v( 0.5,  0.5,  0.5, RED),   v(-0.5,  0.5,  0.5, RED),
    // left face (x = -0.5), cyan
    v(-0.5, -0.5, -0.5, CYAN),  v(-0.5, -0.5,  0.5, CYAN),  v(-0.5,  0.5,  0.5, CYAN),
    v(-0.5, -0.5, -0.5, CYAN),  v(-0.5,  0.5,  0.5, CYAN),  v(-0.5,  0.5, -0.5, CYAN),
    // right face (x = +0.5), magenta
    v( 0.5, -0.5, -0.5, MAGENTA), v( 0.5,  0.5, -0.5, MAGENTA), v( 0.5,  0.5,  0.5, MAGENTA),
    v( 0.5, -0.5, -0.5, MAGENTA), v( 0.5,  0.5,  0.5, MAGENTA), v( 0.5, -0.5,  0.5, MAGENTA),
    // bottom face (y = -0.5), yellow
    v(-0.5, -0.5, -0.5, YELLOW), v( 0.5, -0.5, -0.5, YELLOW), v( 0.5, -0.5,  0.5, YELLOW),
    v(-0.5, -0.5, -0.5, YELLOW), v( 0.5, -0.5,  0.5, YELLOW), v(-0.5, -0.5,  0.5, YELLOW),
    // top face (y = +0.5), blue
    v(-0.5,  0.5, -0.5, BLUE),  v(-0.5,  0.5,  0.5, BLUE),  v( 0.5,  0.5,  0.5, BLUE),
    v(-0.5,  0.5, -0.5, BLUE),  v( 0.5,  0.5,  0.5, BLUE),  v( 0.5,  0.5, -0.5, BLUE),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]
    }

    #[test]
    fn twelve_triangles_of_unit_cube_corners() {
        assert_eq!(CUBE_VERTICES.len(), 36);
        assert_eq!(CUBE_VERTICES.len() % 3, 0);
        for vert in &CUBE_VERTICES {
            for c in vert.position {
                assert_eq!(c.abs(), 0.5, "component off the unit cube: {vert:?}");
            }
        }
    }

    #[test]
    fn six_faces_share_one_color_each() {
        let mut face_colors = Vec::new();
        for face in CUBE_VERTICES.chunks(6) {
            let color = face[0].color;
            assert!(face.iter().all(|v| v.color == color));
            face_colors.push(color);
        }
        assert_eq!(face_colors.len(), 6);
        for (i, a) in face_colors.iter().enumerate() {
            for b in &face_colors[i + 1..] {
                assert_ne!(a, b, "two faces share a color");
            }
        }
    }

    #[test]
    fn triangles_wind_outward() {
        // For a convex solid centered at the origin, a triangle winds
        // counter-clockwise seen from outside iff its normal points away
        // from the origin.
        for tri in CUBE_VERTICES.chunks(3) {
            let n = cross(
                sub(tri[1].position, tri[0].position),
                sub(tri[2].position, tri[0].position),
            );
            let centroid = [
                (tri[0].position[0] + tri[1].position[0] + tri[2].position[0]) / 3.0,
                (tri[0].position[1] + tri[1].position[1] + tri[2].position[1]) / 3.0,
                (tri[0].position[2] + tri[1].position[2] + tri[2].position[2]) / 3.0,
            ];
            let dot = n[0] * centroid[0] + n[1] * centroid[1] + n[2] * centroid[2];
            assert!(dot > 0.0, "inward-facing triangle: {tri:?}");
        }
    }

    #[test]
    fn layout_matches_vertex_struct() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes.len(), 2);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[0].shader_location, 0);
        assert_eq!(layout.attributes[1].offset, 12);
        assert_eq!(layout.attributes[1].shader_location, 1);
    }
}
