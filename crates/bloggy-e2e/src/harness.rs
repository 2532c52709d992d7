// Scenario harness - sequential runner with a mandatory baseline hook
//
// Every scenario shares one context (the browser session). Before a scenario
// runs, the context must establish its baseline; afterwards it restores its
// neutral state, whether the scenario passed, failed or panicked. Results are
// aggregated into a `SuiteReport`.

use crate::error::Result;
use async_trait::async_trait;
use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{error, info, warn};

/// Body of a scenario, borrowing the shared context for its duration.
pub type ScenarioFn<C> = for<'a> fn(&'a C) -> BoxFuture<'a, Result<()>>;

/// A named scenario.
pub struct Scenario<C> {
    pub name: &'static str,
    pub run: ScenarioFn<C>,
}

/// State-reset contract of a shared scenario context.
#[async_trait]
pub trait Baseline: Send + Sync {
    /// Puts the context into its known starting state. Runs before every scenario.
    async fn establish(&self) -> Result<()>;

    /// Returns the context to its neutral state. Runs after every scenario.
    async fn restore(&self) -> Result<()>;

    /// Saves whatever helps diagnose a failed scenario into `dir`.
    async fn capture_failure(&self, _scenario: &str, _dir: &Path) -> Result<Option<PathBuf>> {
        Ok(None)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum Outcome {
    Passed,
    Failed(String),
    Skipped,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub name: String,
    pub outcome: Outcome,
    pub duration_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    pub suite: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub duration_ms: u64,
    pub results: Vec<ScenarioResult>,
}

impl SuiteReport {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// 0 when nothing failed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }

    pub fn failures(&self) -> impl Iterator<Item = &ScenarioResult> {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::Failed(_)))
    }
}

/// An ordered set of scenarios over a context of type `C`.
pub struct Suite<C> {
    name: String,
    scenarios: Vec<Scenario<C>>,
    artifacts_dir: Option<PathBuf>,
}

impl<C: Baseline> Suite<C> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scenarios: Vec::new(),
            artifacts_dir: None,
        }
    }

    /// Directory failure artifacts (screenshots) are written to.
    pub fn with_artifacts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.artifacts_dir = Some(dir.into());
        self
    }

    pub fn scenario(mut self, name: &'static str, run: ScenarioFn<C>) -> Self {
        self.scenarios.push(Scenario { name, run });
        self
    }

    /// Runs the scenarios in order; those `filter` does not select are skipped.
    pub async fn run(&self, ctx: &C, filter: Option<&str>) -> SuiteReport {
        let start = Instant::now();
        let mut results = Vec::with_capacity(self.scenarios.len());

        info!(suite = %self.name, scenarios = self.scenarios.len(), "running suite");

        for scenario in &self.scenarios {
            let selected = filter.is_none_or(|f| scenario.name.contains(f));
            let result = if selected {
                self.run_scenario(ctx, scenario).await
            } else {
                ScenarioResult {
                    name: scenario.name.to_string(),
                    outcome: Outcome::Skipped,
                    duration_ms: 0,
                    artifact: None,
                }
            };
            results.push(result);
        }

        let count = |wanted: fn(&Outcome) -> bool| {
            results.iter().filter(|r| wanted(&r.outcome)).count()
        };
        let report = SuiteReport {
            suite: self.name.clone(),
            total: results.len(),
            passed: count(|o| matches!(o, Outcome::Passed)),
            failed: count(|o| matches!(o, Outcome::Failed(_))),
            skipped: count(|o| matches!(o, Outcome::Skipped)),
            duration_ms: start.elapsed().as_millis() as u64,
            results,
        };

        info!(
            suite = %report.suite,
            total = report.total,
            passed = report.passed,
            failed = report.failed,
            skipped = report.skipped,
            duration_ms = report.duration_ms,
            "suite finished"
        );
        report
    }

    async fn run_scenario(&self, ctx: &C, scenario: &Scenario<C>) -> ScenarioResult {
        let start = Instant::now();
        info!(scenario = scenario.name, "scenario started");

        let mut outcome = match ctx.establish().await {
            Err(err) => Outcome::Failed(format!("baseline not established: {err}")),
            Ok(()) => match AssertUnwindSafe((scenario.run)(ctx)).catch_unwind().await {
                Ok(Ok(())) => Outcome::Passed,
                Ok(Err(err)) => Outcome::Failed(err.to_string()),
                Err(panic) => Outcome::Failed(format!("panicked: {}", panic_message(&*panic))),
            },
        };

        let mut artifact = None;
        if let (Outcome::Failed(_), Some(dir)) = (&outcome, &self.artifacts_dir) {
            match ctx.capture_failure(scenario.name, dir).await {
                Ok(path) => artifact = path,
                Err(err) => warn!(scenario = scenario.name, error = %err, "failed to capture artifact"),
            }
        }

        if let Err(err) = ctx.restore().await {
            warn!(scenario = scenario.name, error = %err, "cleanup failed");
            outcome = match outcome {
                Outcome::Failed(msg) => Outcome::Failed(format!("{msg}; cleanup failed: {err}")),
                _ => Outcome::Failed(format!("cleanup failed: {err}")),
            };
        }

        let duration_ms = start.elapsed().as_millis() as u64;
        match &outcome {
            Outcome::Failed(msg) => error!(scenario = scenario.name, duration_ms, "FAILED: {msg}"),
            _ => info!(scenario = scenario.name, duration_ms, "passed"),
        }

        ScenarioResult {
            name: scenario.name.to_string(),
            outcome,
            duration_ms,
            artifact,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
