use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{debug, info};

use crate::config::RunnerConfig;
use crate::errors::RunbenchError;
use crate::parse::parse_time_output;
use crate::types::{Scenario, ScenarioReport};

/// A fully resolved command line: the timing wrapper followed by the
/// benchmark and its flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Build `<timer> <benchmark> -c <concurrency> -i <iterations>`.
pub fn build_invocation(config: &RunnerConfig, scenario: Scenario) -> Invocation {
    let mut args = Vec::with_capacity(5);
    args.push(config.benchmark.clone().into_os_string());
    args.extend(scenario.flags().into_iter().map(OsString::from));
    Invocation {
        program: config.timer.clone(),
        args,
    }
}

/// Run the invocation to completion and return stdout and stderr as one text.
///
/// Blocks until the child exits; there is no timeout. A non-zero exit status
/// is not an error here, the caller decides from the captured text.
pub fn capture_output(invocation: &Invocation) -> Result<String> {
    debug!(command = %invocation, "spawning");

    let output = duct::cmd(invocation.program.as_os_str(), &invocation.args)
        .stderr_to_stdout()
        .stdout_capture()
        .unchecked()
        .run()
        .map_err(|source| RunbenchError::SpawnFailed {
            program: invocation.program.clone(),
            source,
        })?;

    debug!(
        status = ?output.status.code(),
        bytes = output.stdout.len(),
        "child exited"
    );

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Run one scenario under the timing wrapper and parse its report.
pub fn run_scenario(config: &RunnerConfig, scenario: Scenario) -> Result<ScenarioReport> {
    let invocation = build_invocation(config, scenario);
    let started_at = Utc::now();

    info!(%scenario, "running scenario");
    let text = capture_output(&invocation)?;
    let sample = parse_time_output(&text)
        .with_context(|| format!("Unrecognised timing output from '{}'", invocation))?;
    info!(
        %scenario,
        user = %sample.user_time,
        system = %sample.system_time,
        elapsed = %sample.elapsed_time,
        "scenario finished"
    );

    Ok(ScenarioReport {
        concurrency: scenario.concurrency,
        iterations: scenario.iterations,
        started_at,
        sample,
    })
}

/// Run a single `(concurrency, iterations)` pair against the default config.
pub fn run(concurrency: u32, iterations: u32) -> Result<ScenarioReport> {
    run_scenario(
        &RunnerConfig::default(),
        Scenario::new(concurrency, iterations),
    )
}

/// Run every configured scenario in order, handing each report to
/// `on_report` before the next scenario starts. Stops at the first failure.
pub fn run_all<F>(config: &RunnerConfig, mut on_report: F) -> Result<()>
where
    F: FnMut(&ScenarioReport) -> Result<()>,
{
    for &scenario in &config.scenarios {
        let report = run_scenario(config, scenario).with_context(|| {
            format!(
                "Scenario -c {} -i {} failed",
                scenario.concurrency, scenario.iterations
            )
        })?;
        on_report(&report)?;
    }
    Ok(())
}
