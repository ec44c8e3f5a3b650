// NOTE: ceyal CLI layering
//
// - args:     clap definitions only, no behaviour
// - commands: dispatch, configuration and logging setup
// - handlers: one module per subcommand; load, analyze, print
// - config:   TOML settings shared by all handlers
//
// Analysis lives in ceyal-engine and ingestion in ceyal-providers; handlers
// only glue them to the terminal.

mod args;
mod commands;
pub mod config;
mod handlers;
mod logging;

pub use args::{Cli, Commands, LogLevel, OutputFormat};
pub use commands::run;
