//! Runlet Core Library
//!
//! This is the core library for the runlet command runner. The CLI crate
//! layers presentation on top; everything else lives here:
//!
//! - [`configs`] - Configuration parsing for the command set
//! - [`validate`] - Dependency validation, run before any execution
//! - [`execution`] - Deps-first command execution through the shell
//! - [`lifecycle`] - Signal-driven cancellable execution context
//! - [`logging`] - Log record formatting and the logger instance
//! - [`env`] - Environment toggles
//! - [`types`] - Common error types and type aliases
//!
//! ## Usage
//!
//! Load a configuration, validate it, then hand it to the runner together
//! with a cancellable context:
//!
//! ```rust,no_run
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! # async fn example() -> runlet_core::types::RunletResult<()> {
//! let logger = Arc::new(runlet_core::logging::Logger::new(false));
//! let cancel = runlet_core::lifecycle::interruptible(Arc::clone(&logger));
//!
//! let config = runlet_core::configs::load_config(Path::new("runlet.yaml"))?;
//! runlet_core::validate::validate(&config)?;
//!
//! let runner = runlet_core::execution::CommandRunner::new(&config, logger, cancel);
//! runner.run("build").await?;
//! # Ok(())
//! # }
//! ```

pub mod configs;
pub mod env;
pub mod execution;
pub mod lifecycle;
pub mod logging;
pub mod types;
pub mod validate;

// Re-export the main types for easier usage
pub use types::{RunletError, RunletResult};
