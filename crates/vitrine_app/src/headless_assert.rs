//! Assertion helpers for headless carousel scenarios.

use serde::{Deserialize, Serialize};
use vitrine_widgets::{Carousel, CarouselPhase};

use crate::headless_host::HeadlessHost;

/// Observable carousel state used for headless assertions and reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarouselSnapshot {
    pub index: usize,
    pub offset: f32,
    pub auto_advancing: bool,
    pub phase: CarouselPhase,
}

impl CarouselSnapshot {
    pub fn capture(carousel: &Carousel<HeadlessHost>) -> Self {
        Self {
            index: carousel.current_index(),
            offset: carousel.host().offset(),
            auto_advancing: carousel.is_auto_advancing(),
            phase: carousel.phase(),
        }
    }
}

/// Assertion result with structured failure details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    Passed,
    Failed { code: String, message: String },
}

pub fn evaluate_assert_index(expected: usize, snapshot: &CarouselSnapshot) -> AssertionResult {
    if snapshot.index == expected {
        AssertionResult::Passed
    } else {
        AssertionResult::Failed {
            code: "index_mismatch".to_string(),
            message: format!("expected index {expected}, got {}", snapshot.index),
        }
    }
}

pub fn evaluate_assert_offset(
    expected: f32,
    tolerance: f32,
    snapshot: &CarouselSnapshot,
) -> AssertionResult {
    if (snapshot.offset - expected).abs() <= tolerance.abs() {
        AssertionResult::Passed
    } else {
        AssertionResult::Failed {
            code: "offset_mismatch".to_string(),
            message: format!(
                "expected offset {expected} (±{tolerance}), got {} during {:?}",
                snapshot.offset, snapshot.phase
            ),
        }
    }
}

pub fn evaluate_assert_auto_advance(expected: bool, snapshot: &CarouselSnapshot) -> AssertionResult {
    if snapshot.auto_advancing == expected {
        AssertionResult::Passed
    } else {
        let state = |on: bool| if on { "running" } else { "stopped" };
        AssertionResult::Failed {
            code: "auto_advance_mismatch".to_string(),
            message: format!(
                "expected auto-advance {}, but it is {}",
                state(expected),
                state(snapshot.auto_advancing)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> CarouselSnapshot {
        CarouselSnapshot {
            index: 2,
            offset: 664.2,
            auto_advancing: false,
            phase: CarouselPhase::Idle,
        }
    }

    #[test]
    fn test_index() {
        assert_eq!(evaluate_assert_index(2, &snapshot()), AssertionResult::Passed);
        assert!(matches!(
            evaluate_assert_index(3, &snapshot()),
            AssertionResult::Failed { code, .. } if code == "index_mismatch"
        ));
    }

    #[test]
    fn test_offset_tolerance() {
        assert_eq!(
            evaluate_assert_offset(664.0, 0.5, &snapshot()),
            AssertionResult::Passed
        );
        assert!(matches!(
            evaluate_assert_offset(664.0, 0.1, &snapshot()),
            AssertionResult::Failed { .. }
        ));
    }

    #[test]
    fn test_auto_advance_message() {
        match evaluate_assert_auto_advance(true, &snapshot()) {
            AssertionResult::Failed { message, .. } => {
                assert_eq!(message, "expected auto-advance running, but it is stopped");
            }
            AssertionResult::Passed => panic!("expected failure"),
        }
    }
}
