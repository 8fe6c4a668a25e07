//! Frame-based sprite animation timing.
//!
//! A clock owns an ordered, non-empty list of sprite identifiers and a single
//! per-frame duration. Elapsed time is folded into whole frame steps in one
//! pass, so a huge `dt` (a hitch, a paused debugger) costs the same as a small
//! one and can never leave the index out of range.

/// Runtime state for one animated sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClock {
    frames: Vec<String>,
    frame_duration: f32,
    looping: bool,
    elapsed: f32,
    frame_index: usize,
}

impl AnimationClock {
    /// `frames` must be non-empty and `frame_duration` positive; both are
    /// preconditions checked only in debug builds.
    pub fn new<S: Into<String>>(
        frames: impl IntoIterator<Item = S>,
        frame_duration: f32,
        looping: bool,
    ) -> Self {
        let frames: Vec<String> = frames.into_iter().map(Into::into).collect();
        debug_assert!(!frames.is_empty(), "animation needs at least one frame");
        debug_assert!(frame_duration > 0.0, "frame duration must be positive");
        Self {
            frames,
            frame_duration,
            looping,
            elapsed: 0.0,
            frame_index: 0,
        }
    }

    pub fn looping<S: Into<String>>(
        frames: impl IntoIterator<Item = S>,
        frame_duration: f32,
    ) -> Self {
        Self::new(frames, frame_duration, true)
    }

    pub fn once<S: Into<String>>(frames: impl IntoIterator<Item = S>, frame_duration: f32) -> Self {
        Self::new(frames, frame_duration, false)
    }

    /// Advance by `dt` seconds and return the sprite now showing.
    pub fn advance(&mut self, dt: f32) -> &str {
        self.elapsed += dt.max(0.0);
        if self.elapsed >= self.frame_duration {
            let steps = (self.elapsed / self.frame_duration).floor();
            self.elapsed = (self.elapsed - steps * self.frame_duration).max(0.0);
            // `as` saturates, so absurd dt values still land on a valid index.
            let steps = steps as usize;
            let len = self.frames.len();
            self.frame_index = if self.looping {
                (self.frame_index % len + steps % len) % len
            } else {
                self.frame_index.saturating_add(steps).min(len - 1)
            };
        }
        self.current()
    }

    pub fn current(&self) -> &str {
        &self.frames[self.frame_index % self.frames.len()]
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// True once a non-looping clip is parked on its last frame.
    pub fn is_finished(&self) -> bool {
        !self.looping && self.frame_index + 1 >= self.frames.len()
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.frame_index = 0;
    }
}
