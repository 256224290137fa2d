use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum RunbenchError {
    #[error("Failed to spawn {program}: {source}")]
    SpawnFailed {
        program: PathBuf,
        source: std::io::Error,
    },

    #[error("Timing wrapper produced no output")]
    EmptyOutput,

    #[error("Timing output ended before token {position} (expected a value ending in '{expected}')")]
    MissingToken {
        position: usize,
        expected: &'static str,
    },

    #[error("Unexpected timing token {token:?} at position {position} (expected a value ending in '{expected}')")]
    UnexpectedToken {
        position: usize,
        token: String,
        expected: &'static str,
    },

    #[error("Invalid scenario '{input}': {detail}")]
    InvalidScenario { input: String, detail: String },

    #[error("Failed to read config file {path}: {source}")]
    ConfigReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {detail}")]
    ConfigParseError { path: PathBuf, detail: String },
}
