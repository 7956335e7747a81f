//! Scenario runner that replays steps against a simulated carousel.

use anyhow::Result;
use vitrine_core::KeyCode;
use vitrine_widgets::{Carousel, Direction};

use crate::config::VitrineConfig;
use crate::headless_assert::{
    evaluate_assert_auto_advance, evaluate_assert_index, evaluate_assert_offset, AssertionResult,
    CarouselSnapshot,
};
use crate::headless_host::HeadlessHost;
use crate::headless_report::{ElapsedTime, HeadlessReport, StepFailure};
use crate::headless_runtime::HeadlessRuntime;
use crate::headless_scenario::{HeadlessScenario, ScenarioStep};

/// Final outcome of a scenario run.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Passed { report: HeadlessReport },
    Failed { report: HeadlessReport },
}

impl RunOutcome {
    pub fn report(&self) -> &HeadlessReport {
        match self {
            RunOutcome::Passed { report } => report,
            RunOutcome::Failed { report } => report,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

/// Execute scenario JSON with the given configuration.
pub fn run_scenario(input: &str, config: &VitrineConfig) -> Result<RunOutcome> {
    let scenario = HeadlessScenario::from_json(input)?;
    run_loaded_scenario(&scenario, config)
}

/// Execute a pre-loaded scenario.
pub fn run_loaded_scenario(
    scenario: &HeadlessScenario,
    config: &VitrineConfig,
) -> Result<RunOutcome> {
    let runtime_cfg = config.headless;
    let host = HeadlessHost::new(scenario.page.clone(), &runtime_cfg);
    let mut carousel = Carousel::new(host, config.carousel.clone());

    let mut elapsed = ElapsedTime::default();

    for (step_index, step) in scenario.steps.iter().enumerate() {
        tracing::trace!(step_index, ?step, "headless step");
        match step {
            ScenarioStep::Wait { ms } => {
                let frames = HeadlessRuntime::run(runtime_cfg, *ms, |ctx| {
                    run_frame(&mut carousel, ctx.dt_ms);
                })?;
                elapsed.frames = elapsed.frames.saturating_add(u64::from(frames));
                elapsed.ms = elapsed.ms.saturating_add(*ms);
            }
            ScenarioStep::Resize { width } => {
                carousel.host_mut().set_viewport_width(*width);
                carousel.on_resize();
            }
            ScenarioStep::Visibility { ratio } => carousel.on_visibility_change(*ratio),
            ScenarioStep::PointerEnter => carousel.on_pointer_enter(),
            ScenarioStep::PointerLeave => carousel.on_pointer_leave(),
            ScenarioStep::PointerDown { x } => carousel.on_pointer_down(*x),
            ScenarioStep::PointerMove { x } => carousel.on_pointer_move(*x),
            ScenarioStep::PointerUp => carousel.on_pointer_up(),
            ScenarioStep::TouchStart { x } => carousel.on_touch_start(*x),
            ScenarioStep::TouchMove { x } => carousel.on_touch_move(*x),
            ScenarioStep::TouchEnd => carousel.on_touch_end(),
            ScenarioStep::Focus => carousel.on_focus(),
            ScenarioStep::Blur => carousel.on_blur(),
            ScenarioStep::Key { key } => carousel.on_key_down(KeyCode::from_key_name(key)),
            ScenarioStep::Next => carousel.advance(Direction::Next),
            ScenarioStep::Previous => carousel.advance(Direction::Previous),
            ScenarioStep::SetGap { gap } => carousel.host_mut().set_gap(gap.clone()),
            ScenarioStep::AssertIndex { .. }
            | ScenarioStep::AssertOffset { .. }
            | ScenarioStep::AssertAutoAdvance { .. } => {
                let snapshot = CarouselSnapshot::capture(&carousel);
                if let AssertionResult::Failed { code, message } = evaluate(step, &snapshot) {
                    let assertion = step.assertion_name().unwrap_or("assertion");
                    tracing::debug!(
                        step_index,
                        assertion,
                        %code,
                        phase = ?snapshot.phase,
                        "headless assertion failed"
                    );
                    let failure = StepFailure {
                        step_index,
                        assertion: assertion.to_string(),
                        code,
                        message,
                    };
                    return Ok(RunOutcome::Failed {
                        report: HeadlessReport::fail(failure, elapsed, snapshot),
                    });
                }
            }
        }
    }

    let snapshot = CarouselSnapshot::capture(&carousel);
    Ok(RunOutcome::Passed {
        report: HeadlessReport::pass(scenario.steps.len(), elapsed, snapshot),
    })
}

fn run_frame(carousel: &mut Carousel<HeadlessHost>, dt_ms: u64) {
    let frame = carousel.host_mut().step(dt_ms);
    if frame.settled {
        carousel.on_scroll_settled();
    }
    for id in frame.fired {
        carousel.on_timer(id);
    }
}

fn evaluate(step: &ScenarioStep, snapshot: &CarouselSnapshot) -> AssertionResult {
    match step {
        ScenarioStep::AssertIndex { index } => evaluate_assert_index(*index, snapshot),
        ScenarioStep::AssertOffset { offset, tolerance } => {
            evaluate_assert_offset(*offset, *tolerance, snapshot)
        }
        ScenarioStep::AssertAutoAdvance { active } => evaluate_assert_auto_advance(*active, snapshot),
        _ => AssertionResult::Passed,
    }
}
