//! Fixed-timestep game clock using an accumulator pattern.
//!
//! The browser calls `draw_web()` at ~60fps with a variable delta. GameTime
//! converts that wall-clock feed into a fixed number of discrete ticks per
//! second, so the progression logic stays deterministic and can be tested
//! natively without a browser.

/// Game logic tick rate. The second-based cadences (auto income every
/// second, energy reconciliation every minute) are expressed in these ticks.
pub const TICKS_PER_SEC: u32 = 10;

pub struct GameTime {
    /// Milliseconds per tick (100ms at 10 ticks/sec).
    ms_per_tick: f64,
    /// Accumulated milliseconds not yet consumed as ticks.
    accumulator: f64,
    /// Total elapsed ticks since creation.
    pub total_ticks: u64,
    /// Timestamp of the last update (ms), None until the first frame.
    last_timestamp: Option<f64>,
}

impl GameTime {
    pub fn new(ticks_per_sec: u32) -> Self {
        Self {
            ms_per_tick: 1000.0 / ticks_per_sec as f64,
            accumulator: 0.0,
            total_ticks: 0,
            last_timestamp: None,
        }
    }

    /// Feed a wall-clock timestamp (epoch ms from `Date.now()`), returning
    /// the number of discrete ticks to process this frame.
    ///
    /// The per-frame delta is clamped to one second: after a backgrounded
    /// tab resumes we do not replay the missed ticks — the energy
    /// reconciliation works from the raw wall clock and catches up on its
    /// own, and replaying minutes of animation ticks would only stall the
    /// frame.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        let delta = match self.last_timestamp {
            Some(prev) => (now_ms - prev).clamp(0.0, 1000.0),
            None => 0.0, // first frame: no delta
        };
        self.last_timestamp = Some(now_ms);

        self.accumulator += delta;
        let ticks = (self.accumulator / self.ms_per_tick) as u32;
        self.accumulator -= ticks as f64 * self.ms_per_tick;
        self.total_ticks += ticks as u64;
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_yields_no_ticks() {
        let mut gt = GameTime::new(TICKS_PER_SEC);
        assert_eq!(gt.update(5_000.0), 0);
    }

    #[test]
    fn one_second_yields_ticks_per_sec() {
        let mut gt = GameTime::new(TICKS_PER_SEC);
        gt.update(0.0);
        assert_eq!(gt.update(1000.0), TICKS_PER_SEC);
        assert_eq!(gt.total_ticks, TICKS_PER_SEC as u64);
    }

    #[test]
    fn remainder_carries_between_frames() {
        let mut gt = GameTime::new(10); // 100ms per tick
        gt.update(0.0);
        assert_eq!(gt.update(250.0), 2); // 2 ticks, 50ms remainder
        assert_eq!(gt.update(300.0), 1); // 50ms + 50ms = 1 tick
        assert_eq!(gt.total_ticks, 3);
    }

    #[test]
    fn backgrounded_tab_delta_is_clamped() {
        let mut gt = GameTime::new(10);
        gt.update(0.0);
        // Five minutes away → clamped to 1s worth of ticks.
        assert_eq!(gt.update(300_000.0), 10);
    }

    #[test]
    fn clock_going_backwards_yields_no_ticks() {
        let mut gt = GameTime::new(10);
        gt.update(10_000.0);
        assert_eq!(gt.update(9_000.0), 0);
        // And recovers once time moves forward again.
        assert_eq!(gt.update(9_100.0), 1);
    }

    #[test]
    fn sub_tick_frames_accumulate() {
        let mut gt = GameTime::new(10); // 100ms/tick
        gt.update(0.0);
        let mut total = 0u32;
        for i in 1..=6 {
            total += gt.update(i as f64 * 16.0); // 96ms total
        }
        assert_eq!(total, 0);
        assert_eq!(gt.update(112.0), 1); // crosses 100ms
    }

    #[test]
    fn steady_60fps_approximates_tick_rate() {
        let mut gt = GameTime::new(10);
        gt.update(0.0);
        let mut total = 0u32;
        for i in 1..=60 {
            total += gt.update(i as f64 * 16.667);
        }
        assert!((9..=11).contains(&total), "expected ~10 ticks, got {}", total);
    }
}
