//! Fixed-timestep accumulator fed by an externally measured frame delta.
//!
//! The host measures wall-clock time however it likes and hands the delta to
//! `begin_frame`; the simulation then consumes it in `fixed_dt` slices:
//!
//! ```text
//! clock.begin_frame(real_dt);
//! while clock.should_step() { session.advance(clock.fixed_dt, ..) }
//! clock.end_frame();
//! ```

pub struct FrameClock {
    pub fixed_dt: f32,
    pub max_frame_dt: f32,
    accumulator: f32,
    pub total_time: f64,
    pub fixed_step_count: u64,
    pub frame_count: u64,
    pub steps_this_frame: u32,
    pub real_dt: f32,
    pub interpolation_alpha: f32,
}

impl FrameClock {
    pub fn new(fixed_dt: f32) -> Self {
        Self {
            fixed_dt,
            max_frame_dt: 0.25,
            accumulator: 0.0,
            total_time: 0.0,
            fixed_step_count: 0,
            frame_count: 0,
            steps_this_frame: 0,
            real_dt: 0.0,
            interpolation_alpha: 0.0,
        }
    }

    pub fn begin_frame(&mut self, real_dt: f32) {
        self.real_dt = real_dt.max(0.0);

        // Spiral-of-death cap
        if self.real_dt > self.max_frame_dt {
            log::warn!(
                "Frame took {:.1}ms, capping to {:.0}ms",
                self.real_dt * 1000.0,
                self.max_frame_dt * 1000.0
            );
            self.real_dt = self.max_frame_dt;
        }

        self.accumulator += self.real_dt;
        self.steps_this_frame = 0;
        self.frame_count += 1;
    }

    pub fn should_step(&mut self) -> bool {
        if self.accumulator >= self.fixed_dt {
            self.accumulator -= self.fixed_dt;
            self.total_time += f64::from(self.fixed_dt);
            self.fixed_step_count += 1;
            self.steps_this_frame += 1;
            true
        } else {
            false
        }
    }

    pub fn end_frame(&mut self) {
        self.interpolation_alpha = self.accumulator / self.fixed_dt;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(1.0 / 60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_frame(clock: &mut FrameClock, real_dt: f32) -> u32 {
        clock.begin_frame(real_dt);
        while clock.should_step() {}
        clock.end_frame();
        clock.steps_this_frame
    }

    #[test]
    fn exact_frame_yields_one_step() {
        let mut clock = FrameClock::new(0.25);
        assert_eq!(run_frame(&mut clock, 0.25), 1);
        assert_eq!(clock.fixed_step_count, 1);
        assert_eq!(clock.interpolation_alpha, 0.0);
    }

    #[test]
    fn short_frames_accumulate() {
        let mut clock = FrameClock::new(0.5);
        assert_eq!(run_frame(&mut clock, 0.125), 0);
        assert!((clock.interpolation_alpha - 0.25).abs() < 1e-6);
        assert_eq!(run_frame(&mut clock, 0.125), 0);
        assert_eq!(run_frame(&mut clock, 0.25), 1);
        assert_eq!(clock.frame_count, 3);
    }

    #[test]
    fn long_frames_are_capped() {
        let mut clock = FrameClock::new(0.125);
        assert_eq!(run_frame(&mut clock, 10.0), 2);
        assert_eq!(clock.real_dt, 0.25);
    }

    #[test]
    fn negative_dt_counts_as_zero() {
        let mut clock = FrameClock::new(0.125);
        assert_eq!(run_frame(&mut clock, -1.0), 0);
        assert_eq!(clock.real_dt, 0.0);
    }
}
