use std::f32::consts::PI;

use rand::prelude::*;

use crate::math::Mat4;

/// Frames between rotation re-targeting events.
pub const ROTATION_INTERVAL: u32 = 180;

/// Rotation animation state machine.
///
/// One `update` per presented frame. The accumulated model matrix composes
/// the current per-tick increment on the right each tick; when the frame
/// counter reaches [`ROTATION_INTERVAL`] a fresh increment is sampled from
/// three independent uniform angles and the counter wraps to zero. The
/// accumulated matrix is never reset, so rotation stays continuous while its
/// axis and speed re-target.
///
/// There is no explicit mode flag; the regime is implicit in the counter.
pub struct Spin {
    accumulated: Mat4,
    increment: Mat4,
    frame: u32,
    rng: StdRng,
}

impl Spin {
    /// Entropy-seeded state. Starts at identity with a zero-rotation
    /// increment, so the mesh holds still for the first interval.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Deterministic state for a fixed seed; identical seeds replay the
    /// exact same sequence of increments.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            accumulated: Mat4::IDENTITY,
            increment: Mat4::IDENTITY,
            frame: 0,
            rng,
        }
    }

    /// Advances the animation by one tick.
    ///
    /// The counter stays in `[0, ROTATION_INTERVAL)` on return; the tick
    /// that completes an interval both composes and re-targets.
    pub fn update(&mut self) {
        self.accumulated = self.accumulated * self.increment;
        self.frame += 1;

        if self.frame == ROTATION_INTERVAL {
            // Per-axis angles in [0, pi/ROTATION_INTERVAL), so a full
            // interval sweeps at most half a turn about each axis.
            let max_angle = PI / ROTATION_INTERVAL as f32;
            let x = self.rng.gen_range(0.0..max_angle);
            let y = self.rng.gen_range(0.0..max_angle);
            let z = self.rng.gen_range(0.0..max_angle);

            self.increment = Mat4::from_euler_xyz(x, y, z);
            self.frame = 0;
            log::debug!("retargeted rotation: x={x:.5} y={y:.5} z={z:.5} rad/frame");
        }
    }

    /// Current model matrix for the frame being rendered.
    pub fn model(&self) -> &Mat4 {
        &self.accumulated
    }

    /// Ticks since the last re-targeting event.
    pub fn frame(&self) -> u32 {
        self.frame
    }
}

impl Default for Spin {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::abs_diff_eq;

    fn assert_mat_eq(a: Mat4, b: Mat4) {
        for r in 0..4 {
            for c in 0..4 {
                assert!(
                    abs_diff_eq!(a.m[r][c], b.m[r][c], epsilon = 1e-4),
                    "mismatch at [{r}][{c}]\n{a:?}\n{b:?}",
                );
            }
        }
    }

    #[test]
    fn counter_stays_inside_interval() {
        let mut spin = Spin::with_seed(11);
        for _ in 0..1000 {
            spin.update();
            assert!(spin.frame() < ROTATION_INTERVAL);
        }
    }

    #[test]
    fn fresh_state_holds_identity_until_the_interval_completes() {
        let mut spin = Spin::with_seed(3);
        for _ in 0..(ROTATION_INTERVAL - 1) {
            spin.update();
        }
        assert_eq!(spin.frame(), ROTATION_INTERVAL - 1);
        assert_eq!(*spin.model(), Mat4::IDENTITY);
    }

    #[test]
    fn completing_the_interval_retargets() {
        let mut spin = Spin::with_seed(3);
        for _ in 0..ROTATION_INTERVAL {
            spin.update();
        }
        assert_eq!(spin.frame(), 0);
        // The initial increment was identity, so the accumulated matrix is
        // untouched by re-targeting.
        assert_eq!(*spin.model(), Mat4::IDENTITY);
        assert_ne!(spin.increment, Mat4::IDENTITY);
    }

    #[test]
    fn accumulated_matrix_is_the_fold_of_the_increment() {
        let mut spin = Spin::with_seed(99);
        for _ in 0..ROTATION_INTERVAL {
            spin.update();
        }
        let increment = spin.increment;

        for _ in 0..ROTATION_INTERVAL {
            spin.update();
        }

        let mut expected = Mat4::IDENTITY;
        for _ in 0..ROTATION_INTERVAL {
            expected = expected * increment;
        }
        assert_mat_eq(*spin.model(), expected);
    }

    #[test]
    fn retargeting_preserves_the_accumulated_matrix() {
        let mut spin = Spin::with_seed(7);
        for _ in 0..(2 * ROTATION_INTERVAL - 1) {
            spin.update();
        }
        let before = spin.accumulated;
        let increment = spin.increment;

        // This tick completes the second interval: one more composition,
        // then a re-target that must not reset the accumulated matrix.
        spin.update();
        assert_eq!(spin.frame(), 0);
        assert_mat_eq(spin.accumulated, before * increment);
    }

    #[test]
    fn same_seed_replays_the_same_motion() {
        let mut a = Spin::with_seed(1234);
        let mut b = Spin::with_seed(1234);
        for _ in 0..500 {
            a.update();
            b.update();
        }
        assert_eq!(a.model().m, b.model().m);
    }

    #[test]
    fn sampled_angles_stay_in_range() {
        // Covers several re-targeting events; each sampled axis angle must
        // stay below pi/ROTATION_INTERVAL.
        let mut spin = Spin::with_seed(5);
        let max_angle = PI / ROTATION_INTERVAL as f32;
        for interval in 0..5 {
            for _ in 0..ROTATION_INTERVAL {
                spin.update();
            }
            // A rotation by angles below max_angle keeps every diagonal
            // entry of the 3x3 block close to 1.
            let m = spin.increment.m;
            for i in 0..3 {
                assert!(
                    m[i][i] > (3.0 * max_angle).cos(),
                    "interval {interval}: diagonal {i} suggests an oversized angle",
                );
            }
        }
    }
}
