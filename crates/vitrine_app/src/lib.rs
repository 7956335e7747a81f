//! Vitrine Application Layer
//!
//! Wires the widget library to the outside world:
//!
//! - **Configuration**: `vitrine.toml` loading and serialization
//! - **Preferences**: a JSON file store for the theme toggle
//! - **Headless scenarios**: deterministic replay of carousel input against a
//!   simulated host, with assertions and a machine-readable report

pub mod config;
pub mod headless_assert;
pub mod headless_host;
pub mod headless_report;
pub mod headless_runner;
pub mod headless_runtime;
pub mod headless_scenario;
pub mod preferences;

pub use config::VitrineConfig;
pub use headless_host::{HeadlessHost, PageSetup};
pub use headless_report::{ElapsedTime, HeadlessReport, StepFailure, Verdict};
pub use headless_runner::{run_loaded_scenario, run_scenario, RunOutcome};
pub use headless_runtime::HeadlessRunConfig;
pub use headless_scenario::{HeadlessScenario, ScenarioStep};
pub use preferences::FileStore;
