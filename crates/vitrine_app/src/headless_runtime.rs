//! Headless runtime primitives for scenario execution.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Configuration for deterministic headless frame execution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadlessRunConfig {
    /// Logical milliseconds between frames.
    pub tick_ms: u64,
    /// Logical viewport width at the start of a run.
    pub viewport_width: f32,
    /// Duration of a simulated smooth scroll.
    pub scroll_duration_ms: u32,
}

impl Default for HeadlessRunConfig {
    fn default() -> Self {
        Self {
            tick_ms: 16,
            viewport_width: 1280.0,
            scroll_duration_ms: 450,
        }
    }
}

/// Frame context passed to headless frame callbacks.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessContext {
    pub frame_index: u32,
    /// Logical milliseconds covered by this frame.
    pub dt_ms: u64,
}

/// Deterministic headless runtime loop.
pub struct HeadlessRuntime;

impl HeadlessRuntime {
    /// Run enough frames to cover `duration_ms`; the last frame may be short.
    pub fn run<F>(cfg: HeadlessRunConfig, duration_ms: u64, mut on_frame: F) -> Result<u32>
    where
        F: FnMut(&HeadlessContext),
    {
        if cfg.tick_ms == 0 {
            bail!("headless tick_ms must be > 0");
        }
        if cfg.viewport_width.is_nan() || cfg.viewport_width <= 0.0 {
            bail!("headless viewport_width must be positive");
        }

        let mut remaining = duration_ms;
        let mut frame_index = 0u32;
        while remaining > 0 {
            let dt_ms = remaining.min(cfg.tick_ms);
            remaining -= dt_ms;
            on_frame(&HeadlessContext { frame_index, dt_ms });
            frame_index = frame_index.saturating_add(1);
        }

        Ok(frame_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_cover_duration() {
        let mut total = 0;
        let frames = HeadlessRuntime::run(HeadlessRunConfig::default(), 40, |ctx| {
            total += ctx.dt_ms;
        })
        .unwrap();
        assert_eq!(frames, 3);
        assert_eq!(total, 40);
    }

    #[test]
    fn test_zero_duration_runs_nothing() {
        let frames = HeadlessRuntime::run(HeadlessRunConfig::default(), 0, |_| {
            panic!("no frame expected");
        })
        .unwrap();
        assert_eq!(frames, 0);
    }

    #[test]
    fn test_rejects_zero_tick() {
        let cfg = HeadlessRunConfig {
            tick_ms: 0,
            ..Default::default()
        };
        assert!(HeadlessRuntime::run(cfg, 10, |_| {}).is_err());
    }
}
