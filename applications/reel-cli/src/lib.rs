//! Reel CLI Library
//!
//! Configuration, catalog loading and the interactive session behind the
//! `reel` binary.
//!
//! This library exposes the components for testing purposes.

pub mod config;
pub mod console;
pub mod error;
pub mod library;
pub mod repl;

// Re-export commonly used types for convenience
pub use config::ReelConfig;
pub use console::StdConsole;
pub use error::{CliError, Result};
pub use repl::{run_line, run_session, Flow};
