//! Fixed-duration value tweens
//!
//! A [`Tween`] animates one value toward a target. Retargeting a running tween
//! starts the new leg from the current interpolated value, so a newer scroll
//! request supersedes an in-flight one without a jump.

use crate::easing::Easing;

/// A single-value animation from `from` to `to`
#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    duration_ms: u32,
    elapsed_ms: f32,
    easing: Easing,
    playing: bool,
}

impl Tween {
    /// A settled tween resting at `value`
    pub fn at(value: f32, duration_ms: u32, easing: Easing) -> Self {
        Self {
            from: value,
            to: value,
            duration_ms,
            elapsed_ms: 0.0,
            easing,
            playing: false,
        }
    }

    /// Animate from the current value toward `to`
    pub fn retarget(&mut self, to: f32) {
        self.from = self.value();
        self.to = to;
        self.elapsed_ms = 0.0;
        self.playing = self.duration_ms > 0 && (self.from - to).abs() > f32::EPSILON;
        if !self.playing {
            self.from = to;
        }
    }

    /// Jump to `value` immediately, cancelling any running leg
    pub fn jump(&mut self, value: f32) {
        self.from = value;
        self.to = value;
        self.elapsed_ms = 0.0;
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Get the current interpolated value
    pub fn value(&self) -> f32 {
        if !self.playing {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(self.progress())
    }

    /// Advance by `dt_ms`, returning true when this tick finished the tween
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if !self.playing {
            return false;
        }

        self.elapsed_ms += dt_ms;

        if self.elapsed_ms >= self.duration_ms as f32 {
            self.elapsed_ms = self.duration_ms as f32;
            self.from = self.to;
            self.playing = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_progress() {
        let mut tween = Tween::at(0.0, 100, Easing::Linear);
        tween.retarget(200.0);

        assert!(tween.is_playing());
        assert!(!tween.tick(50.0));
        assert!((tween.value() - 100.0).abs() < 1e-3);

        assert!(tween.tick(50.0));
        assert_eq!(tween.value(), 200.0);
        assert!(!tween.is_playing());
        // Finished tweens report completion once
        assert!(!tween.tick(16.0));
    }

    #[test]
    fn test_retarget_starts_from_current_value() {
        let mut tween = Tween::at(0.0, 100, Easing::Linear);
        tween.retarget(100.0);
        tween.tick(50.0);

        tween.retarget(300.0);
        assert!((tween.value() - 50.0).abs() < 1e-3);

        tween.tick(100.0);
        assert_eq!(tween.value(), 300.0);
    }

    #[test]
    fn test_retarget_to_same_value_is_settled() {
        let mut tween = Tween::at(42.0, 100, Easing::EaseOutCubic);
        tween.retarget(42.0);
        assert!(!tween.is_playing());
        assert_eq!(tween.value(), 42.0);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut tween = Tween::at(0.0, 0, Easing::Linear);
        tween.retarget(10.0);
        assert!(!tween.is_playing());
        assert_eq!(tween.value(), 10.0);
    }

    #[test]
    fn test_jump_cancels_running_leg() {
        let mut tween = Tween::at(0.0, 100, Easing::Linear);
        tween.retarget(100.0);
        tween.jump(25.0);
        assert!(!tween.is_playing());
        assert_eq!(tween.value(), 25.0);
        assert_eq!(tween.target(), 25.0);
    }
}
