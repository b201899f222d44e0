/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Time elapsed since the previous frame, in seconds.
    pub dt: f32,

    /// Host timestamp of this frame, in milliseconds.
    pub now_ms: f64,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots from host timestamps.
///
/// Delta time is clamped so a backgrounded tab (where refresh callbacks stop)
/// does not hand the core a multi-second step on return.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
    frame_index: u64,
    dt_min: f32,
    dt_max: f32,
}

impl FrameClock {
    /// Default clamps: 0.1 ms to 250 ms.
    pub fn new() -> Self {
        Self::with_clamps(0.0001, 0.25)
    }

    /// Creates a clock with custom delta-time clamps, in seconds.
    ///
    /// Clamps must be finite with `0 <= dt_min <= dt_max`; `BridgeConfig`
    /// checks this before a clock is built.
    pub fn with_clamps(dt_min: f32, dt_max: f32) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last_ms: None,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Advances the clock to `now_ms` and returns a new `FrameTime`.
    pub fn tick(&mut self, now_ms: f64) -> FrameTime {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => self.dt_min,
        };
        let dt = if dt.is_finite() { dt.clamp(self.dt_min, self.dt_max) } else { self.dt_min };

        self.last_ms = Some(now_ms);

        let ft = FrameTime {
            dt,
            now_ms,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
