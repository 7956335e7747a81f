//! Vitrine Animation System
//!
//! Easing curves, value tweens and a deterministic timer scheduler.
//!
//! # Features
//!
//! - **Easing**: CSS-compatible timing functions including `cubic-bezier`
//! - **Tweens**: Fixed-duration value animations that can be retargeted mid-flight
//! - **Scheduler**: Interval and timeout timers driven by an explicit clock

pub mod easing;
pub mod scheduler;
pub mod tween;

pub use easing::Easing;
pub use scheduler::{Scheduler, TimerId};
pub use tween::Tween;
