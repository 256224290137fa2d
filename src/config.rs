use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

use crate::errors::RunbenchError;
use crate::types::{DEFAULT_SCENARIOS, Scenario};

pub const DEFAULT_BENCHMARK_PATH: &str = "traf_benchmark/target/release/traf_benchmark";

/// GNU `time`; its default report format is what `parse` understands.
pub const DEFAULT_TIMER_PATH: &str = "/usr/bin/time";

/// What to run and how to time it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub benchmark: PathBuf,
    pub timer: PathBuf,
    pub scenarios: Vec<Scenario>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            benchmark: PathBuf::from(DEFAULT_BENCHMARK_PATH),
            timer: PathBuf::from(DEFAULT_TIMER_PATH),
            scenarios: DEFAULT_SCENARIOS.to_vec(),
        }
    }
}

/// On-disk shape of `config.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    benchmark: Option<PathBuf>,
    timer: Option<PathBuf>,
    scenarios: Option<Vec<Scenario>>,
}

/// `{config_dir}/traf-runbench/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("traf-runbench").join("config.toml"))
}

/// Load the runner configuration.
///
/// An explicit `path` must exist. Without one, the default location is tried
/// and silently skipped when absent, leaving the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<RunnerConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) if p.is_file() => p,
            _ => return Ok(RunnerConfig::default()),
        },
    };

    let contents = std::fs::read_to_string(&path).map_err(|source| {
        RunbenchError::ConfigReadError {
            path: path.clone(),
            source,
        }
    })?;

    Ok(parse_config(&contents, &path)?)
}

/// Parse TOML config text, layering it over the defaults.
pub fn parse_config(contents: &str, path: &Path) -> Result<RunnerConfig, RunbenchError> {
    let parse_error = |detail: String| RunbenchError::ConfigParseError {
        path: path.to_path_buf(),
        detail,
    };

    let file: FileConfig = toml::from_str(contents).map_err(|e| parse_error(e.to_string()))?;

    let mut config = RunnerConfig::default();
    if let Some(benchmark) = file.benchmark {
        config.benchmark = benchmark;
    }
    if let Some(timer) = file.timer {
        config.timer = timer;
    }
    if let Some(scenarios) = file.scenarios {
        if let Some(bad) = scenarios
            .iter()
            .find(|s| s.concurrency == 0 || s.iterations == 0)
        {
            return Err(parse_error(format!(
                "scenario {} must have positive concurrency and iterations",
                bad
            )));
        }
        config.scenarios = scenarios;
    }

    Ok(config)
}
