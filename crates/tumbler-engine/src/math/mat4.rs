use core::ops::Mul;

use bytemuck::{Pod, Zeroable};

/// Row-major 4x4 matrix, column-vector convention (`v' = M * v`).
///
/// `m[r][c]` is row `r`, column `c`. Rotation constructors produce pure
/// rotations; composing them never introduces translation or scale.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat4 {
    pub m: [[f32; 4]; 4],
}

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4 {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    #[inline]
    pub const fn from_rows(m: [[f32; 4]; 4]) -> Self {
        Self { m }
    }

    /// Rotation about the X axis by `angle` radians.
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about the Y axis by `angle` radians.
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// XYZ-order Euler rotation: rotate about X first, then Y, then Z.
    ///
    /// Equivalent to `Rz * Ry * Rx` under the column-vector convention.
    pub fn from_euler_xyz(x: f32, y: f32, z: f32) -> Self {
        Self::rotation_z(z) * Self::rotation_y(y) * Self::rotation_x(x)
    }

    #[inline]
    pub fn transposed(self) -> Self {
        let mut out = [[0.0f32; 4]; 4];
        for (r, row) in self.m.iter().enumerate() {
            for (c, v) in row.iter().enumerate() {
                out[c][r] = *v;
            }
        }
        Self { m: out }
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        let mut out = [[0.0f32; 4]; 4];
        for r in 0..4 {
            for c in 0..4 {
                let mut acc = 0.0;
                for k in 0..4 {
                    acc += self.m[r][k] * rhs.m[k][c];
                }
                out[r][c] = acc;
            }
        }
        Mat4 { m: out }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::abs_diff_eq;

    const EPS: f32 = 1e-5;

    fn assert_mat_eq(a: Mat4, b: Mat4) {
        for r in 0..4 {
            for c in 0..4 {
                assert!(
                    abs_diff_eq!(a.m[r][c], b.m[r][c], epsilon = EPS),
                    "mismatch at [{r}][{c}]: {} vs {}\n{a:?}\n{b:?}",
                    a.m[r][c],
                    b.m[r][c],
                );
            }
        }
    }

    fn sample() -> Mat4 {
        Mat4::from_euler_xyz(0.3, -1.1, 2.4)
    }

    // ── identity ──────────────────────────────────────────────────────────

    #[test]
    fn identity_is_right_neutral() {
        let a = sample();
        assert_mat_eq(a * Mat4::IDENTITY, a);
    }

    #[test]
    fn identity_is_left_neutral() {
        let a = sample();
        assert_mat_eq(Mat4::IDENTITY * a, a);
    }

    // ── multiply ──────────────────────────────────────────────────────────

    #[test]
    fn multiply_is_associative() {
        let a = Mat4::rotation_x(0.7);
        let b = Mat4::rotation_y(-0.4);
        let c = Mat4::rotation_z(1.9);
        assert_mat_eq((a * b) * c, a * (b * c));
    }

    #[test]
    fn multiply_does_not_commute_in_general() {
        let a = Mat4::rotation_x(0.5);
        let b = Mat4::rotation_y(0.5);
        let ab = a * b;
        let ba = b * a;
        assert!(ab.m[0][1] != ba.m[0][1] || ab.m[1][2] != ba.m[1][2]);
    }

    // ── rotations ─────────────────────────────────────────────────────────

    #[test]
    fn euler_zero_is_identity() {
        assert_mat_eq(Mat4::from_euler_xyz(0.0, 0.0, 0.0), Mat4::IDENTITY);
    }

    #[test]
    fn euler_matches_explicit_composition() {
        let (x, y, z) = (0.2, 0.9, -0.6);
        let explicit = Mat4::rotation_z(z) * Mat4::rotation_y(y) * Mat4::rotation_x(x);
        assert_mat_eq(Mat4::from_euler_xyz(x, y, z), explicit);
    }

    #[test]
    fn rotation_is_orthonormal() {
        // R * R^T == I for any pure rotation.
        let r = sample();
        assert_mat_eq(r * r.transposed(), Mat4::IDENTITY);
    }

    // ── transpose ─────────────────────────────────────────────────────────

    #[test]
    fn transpose_is_an_involution() {
        let a = sample();
        assert_mat_eq(a.transposed().transposed(), a);
    }
}
