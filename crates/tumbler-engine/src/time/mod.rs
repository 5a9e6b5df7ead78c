//! Frame timing.
//!
//! One [`FrameClock`] per render loop; call [`FrameClock::tick`] once per
//! presented frame. The clock only observes the presentation rate — the
//! animation itself is counter-driven and never consumes delta time.

use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous tick, in seconds. Clamped to avoid
    /// pathological values when the process is stalled by a debugger or the
    /// window is minimized.
    pub dt: f32,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing [`FrameTime`] snapshots and a smoothed FPS figure.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,

    window_start: Instant,
    window_frames: u32,
    fps: f32,
}

const DT_MIN: f32 = 0.0001;
const DT_MAX: f32 = 0.25;
const FPS_WINDOW: Duration = Duration::from_secs(1);

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last: now,
            frame_index: 0,
            window_start: now,
            window_frames: 0,
            fps: 0.0,
        }
    }

    /// Advances the clock and returns a new [`FrameTime`].
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now
            .saturating_duration_since(self.last)
            .as_secs_f32()
            .clamp(DT_MIN, DT_MAX);
        self.last = now;

        let ft = FrameTime {
            dt,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);

        self.window_frames += 1;
        let window = now.saturating_duration_since(self.window_start);
        if window >= FPS_WINDOW {
            self.fps = self.window_frames as f32 / window.as_secs_f32();
            self.window_start = now;
            self.window_frames = 0;
        }

        ft
    }

    /// Frames per second over the last completed measurement window;
    /// zero until the first window elapses.
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_index_increments_per_tick() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
        assert_eq!(clock.tick().frame_index, 2);
    }

    #[test]
    fn dt_is_clamped_to_sane_bounds() {
        let mut clock = FrameClock::new();
        for _ in 0..5 {
            let ft = clock.tick();
            assert!(ft.dt >= DT_MIN);
            assert!(ft.dt <= DT_MAX);
        }
    }

    #[test]
    fn fps_is_zero_before_a_window_completes() {
        let mut clock = FrameClock::new();
        clock.tick();
        assert_eq!(clock.fps(), 0.0);
    }
}
