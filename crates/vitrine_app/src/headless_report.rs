//! JSON report of a replayed carousel scenario.
//!
//! Besides the verdict, the report records where the carousel stood when the
//! run stopped, so a failed `assert_offset` can be read next to the phase and
//! index that produced it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

use crate::headless_assert::CarouselSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Pass,
    Fail,
}

/// The assertion step that stopped a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepFailure {
    pub step_index: usize,
    pub assertion: String,
    /// Mismatch kind, e.g. `index_mismatch`
    pub code: String,
    pub message: String,
}

/// Simulated time consumed by `wait` steps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElapsedTime {
    pub frames: u64,
    pub ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlessReport {
    pub verdict: Verdict,
    pub steps_run: usize,
    pub elapsed: ElapsedTime,
    /// Carousel state after the last step that ran
    pub carousel: CarouselSnapshot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<StepFailure>,
}

impl HeadlessReport {
    /// Every step ran and every assertion held
    pub fn pass(steps_run: usize, elapsed: ElapsedTime, carousel: CarouselSnapshot) -> Self {
        Self {
            verdict: Verdict::Pass,
            steps_run,
            elapsed,
            carousel,
            failure: None,
        }
    }

    /// The run stopped at `failure`; the failing step counts as run
    pub fn fail(failure: StepFailure, elapsed: ElapsedTime, carousel: CarouselSnapshot) -> Self {
        Self {
            verdict: Verdict::Fail,
            steps_run: failure.step_index + 1,
            elapsed,
            carousel,
            failure: Some(failure),
        }
    }

    pub fn is_pass(&self) -> bool {
        self.verdict == Verdict::Pass
    }

    /// One-line summary for logs
    pub fn summary(&self) -> String {
        match &self.failure {
            None => format!(
                "{} steps passed in {} ms at index {}",
                self.steps_run, self.elapsed.ms, self.carousel.index
            ),
            Some(failure) => format!(
                "step {} ({}) failed: {}",
                failure.step_index, failure.assertion, failure.message
            ),
        }
    }

    /// Pretty JSON followed by a newline
    pub fn write_to_writer<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        Ok(())
    }

    /// Save the report, creating missing parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create report {}", path.display()))?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
