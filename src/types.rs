use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::errors::RunbenchError;

/// The fixed driver scenarios, executed in this order.
pub const DEFAULT_SCENARIOS: [Scenario; 4] = [
    Scenario::new(1, 1000),
    Scenario::new(10, 100),
    Scenario::new(100, 10),
    Scenario::new(1000, 1),
];

/// One `(concurrency, iterations)` pair handed to the benchmark binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub concurrency: u32,
    pub iterations: u32,
}

impl Scenario {
    pub const fn new(concurrency: u32, iterations: u32) -> Self {
        Self {
            concurrency,
            iterations,
        }
    }

    /// Benchmark flags for this scenario: `-c <concurrency> -i <iterations>`.
    pub fn flags(&self) -> [String; 4] {
        [
            "-c".to_string(),
            self.concurrency.to_string(),
            "-i".to_string(),
            self.iterations.to_string(),
        ]
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.concurrency, self.iterations)
    }
}

/// Parses `<concurrency>x<iterations>`, e.g. `10x100`.
impl FromStr for Scenario {
    type Err = RunbenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |detail: &str| RunbenchError::InvalidScenario {
            input: s.to_string(),
            detail: detail.to_string(),
        };

        let (c, i) = s
            .split_once('x')
            .ok_or_else(|| invalid("expected <concurrency>x<iterations>"))?;

        let concurrency: u32 = c
            .trim()
            .parse()
            .map_err(|_| invalid("concurrency is not a positive integer"))?;
        let iterations: u32 = i
            .trim()
            .parse()
            .map_err(|_| invalid("iterations is not a positive integer"))?;

        if concurrency == 0 || iterations == 0 {
            return Err(invalid("values must be greater than zero"));
        }

        Ok(Self::new(concurrency, iterations))
    }
}

/// Times extracted from one timing-wrapper capture. The three times stay as
/// the literal text the wrapper printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimingSample {
    pub user_time: String,
    pub system_time: String,
    pub elapsed_time: String,
    pub raw_output: String,
}

impl TimingSample {
    pub fn as_tuple(&self) -> (&str, &str, &str, &str) {
        (
            &self.user_time,
            &self.system_time,
            &self.elapsed_time,
            &self.raw_output,
        )
    }
}

/// A parsed sample together with the scenario that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub concurrency: u32,
    pub iterations: u32,
    pub started_at: DateTime<Utc>,
    #[serde(flatten)]
    pub sample: TimingSample,
}

impl ScenarioReport {
    pub fn scenario(&self) -> Scenario {
        Scenario::new(self.concurrency, self.iterations)
    }
}

#[derive(Clone, ValueEnum)]
pub enum OutputFormat {
    Default,
    Short,
    Json,
}
