use colored::Colorize;
use thiserror::Error;

/// The main error type for runlet operations
#[derive(Debug, Error)]
pub enum RunletError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error(
        "command '{}' has a circular dependency on command '{}'",
        .command_a.cyan().bold(),
        .command_b.cyan().bold()
    )]
    CircularDependency {
        command_a: String,
        command_b: String,
    },

    #[error("Command error: {0}")]
    Command(String),
}

/// Result type alias for runlet operations
pub type RunletResult<T> = Result<T, RunletError>;
