//! Stats counters counting up to their printed value

use serde::{Deserialize, Serialize};

use crate::style::parse_leading_int;

/// Intersection ratio at which a counter starts
pub const TRIGGER_RATIO: f32 = 0.5;

/// Counter timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Total count-up duration
    pub duration_ms: u64,
    /// Interval between frames
    pub frame_ms: u64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            frame_ms: 16,
        }
    }
}

/// A single count-up animation
#[derive(Debug, Clone)]
pub struct StatsCounter {
    target: f64,
    step: f64,
    current: f64,
    frame_ms: u64,
    finished: bool,
}

impl StatsCounter {
    /// Start counting towards the integer printed in `text` (`"150+"` → 150)
    pub fn from_text(text: &str, config: &CounterConfig) -> Option<Self> {
        match parse_leading_int(text) {
            Ok(target) => Some(Self::new(target as f64, config)),
            Err(err) => {
                tracing::debug!(%err, "stat text has no target, not animating");
                None
            }
        }
    }

    pub fn new(target: f64, config: &CounterConfig) -> Self {
        let frame_ms = config.frame_ms.max(1);
        let frames = (config.duration_ms as f64 / frame_ms as f64).max(1.0);
        Self {
            target,
            step: target / frames,
            current: 0.0,
            frame_ms,
            finished: false,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn frame_ms(&self) -> u64 {
        self.frame_ms
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Run one frame and return the text to display
    pub fn tick(&mut self) -> String {
        if !self.finished {
            self.current += self.step;
            if self.current >= self.target {
                self.current = self.target;
                self.finished = true;
            }
        }
        self.display()
    }

    pub fn display(&self) -> String {
        format!("{}+", self.current.floor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_up_to_exact_target() {
        let mut counter = StatsCounter::from_text("150+", &CounterConfig::default()).unwrap();
        assert_eq!(counter.tick(), "1+");

        let mut frames = 1;
        let mut last = String::new();
        while !counter.is_finished() {
            last = counter.tick();
            frames += 1;
            assert!(frames <= 130, "counter never finished");
        }
        assert_eq!(last, "150+");
        assert!(frames >= 125);

        // Extra frames hold the final value
        assert_eq!(counter.tick(), "150+");
    }

    #[test]
    fn test_zero_target_finishes_immediately() {
        let mut counter = StatsCounter::from_text("0", &CounterConfig::default()).unwrap();
        assert_eq!(counter.tick(), "0+");
        assert!(counter.is_finished());
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        let config = CounterConfig {
            duration_ms: 0,
            frame_ms: 16,
        };
        let mut empty = StatsCounter::new(0.0, &config);
        assert_eq!(empty.tick(), "0+");
        assert!(empty.is_finished());

        let mut counter = StatsCounter::new(42.0, &config);
        assert_eq!(counter.tick(), "42+");
        assert!(counter.is_finished());
    }

    #[test]
    fn test_unparseable_text() {
        assert!(StatsCounter::from_text("many", &CounterConfig::default()).is_none());
        assert!(StatsCounter::from_text("", &CounterConfig::default()).is_none());
    }

    #[test]
    fn test_custom_timing() {
        let config = CounterConfig {
            duration_ms: 100,
            frame_ms: 25,
        };
        let mut counter = StatsCounter::new(8.0, &config);
        assert_eq!(counter.frame_ms(), 25);
        let frames: Vec<String> = (0..4).map(|_| counter.tick()).collect();
        assert_eq!(frames, ["2+", "4+", "6+", "8+"]);
        assert!(counter.is_finished());
    }
}
