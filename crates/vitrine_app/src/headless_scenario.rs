//! Scenario definition for headless carousel runs.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::headless_host::PageSetup;

/// Page layout plus a sequence of headless steps.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadlessScenario {
    #[serde(default)]
    pub page: PageSetup,
    pub steps: Vec<ScenarioStep>,
}

impl HeadlessScenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("Failed to parse scenario {}", path.display()))
    }
}

fn default_offset_tolerance() -> f32 {
    0.5
}

/// Input, layout and assertion steps.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    /// Let simulated time pass
    Wait { ms: u64 },
    /// Change the viewport width and deliver a resize
    Resize { width: f32 },
    /// Report the carousel's visible fraction
    Visibility { ratio: f32 },
    PointerEnter,
    PointerLeave,
    PointerDown { x: f32 },
    PointerMove { x: f32 },
    PointerUp,
    TouchStart { x: f32 },
    TouchMove { x: f32 },
    TouchEnd,
    Focus,
    Blur,
    /// Key press by DOM key name (`"ArrowRight"`)
    Key { key: String },
    Next,
    Previous,
    /// Change the container's computed gap style
    SetGap { gap: Option<String> },
    AssertIndex { index: usize },
    AssertOffset {
        offset: f32,
        #[serde(default = "default_offset_tolerance")]
        tolerance: f32,
    },
    AssertAutoAdvance { active: bool },
}

impl ScenarioStep {
    /// Assertion name used in reports, for assertion steps
    pub fn assertion_name(&self) -> Option<&'static str> {
        match self {
            ScenarioStep::AssertIndex { .. } => Some("assert_index"),
            ScenarioStep::AssertOffset { .. } => Some("assert_offset"),
            ScenarioStep::AssertAutoAdvance { .. } => Some("assert_auto_advance"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        let scenario = HeadlessScenario::from_json(
            r#"{
                "page": { "items": 3 },
                "steps": [
                    { "type": "pointer_enter" },
                    { "type": "key", "key": "ArrowRight" },
                    { "type": "set_gap", "gap": null },
                    { "type": "assert_offset", "offset": 332.0 }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(scenario.page.items, 3);
        assert_eq!(scenario.page.item_width, 300.0);
        assert_eq!(scenario.steps.len(), 4);
        assert!(matches!(scenario.steps[2], ScenarioStep::SetGap { gap: None }));
        match &scenario.steps[3] {
            ScenarioStep::AssertOffset { offset, tolerance } => {
                assert_eq!(*offset, 332.0);
                assert_eq!(*tolerance, 0.5);
            }
            other => panic!("unexpected step {other:?}"),
        }
        assert_eq!(scenario.steps[3].assertion_name(), Some("assert_offset"));
        assert_eq!(scenario.steps[0].assertion_name(), None);
    }

    #[test]
    fn test_unknown_step_is_rejected() {
        assert!(HeadlessScenario::from_json(r#"{ "steps": [{ "type": "fly" }] }"#).is_err());
    }
}
