//! nsrig - namespace process rig
//!
//! Small utilities for test harnesses that need to create, identify and
//! tear down namespaced process trees.

use clap::Parser;
use std::process;
use tracing::Level;

mod cli;
mod commands;

use cli::Cli;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Setup logging based on verbosity. Diagnostics go to stderr: stdout
    // carries machine-consumed output (PID and address lines).
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute the command; its return value is this process's exit status
    match commands::dispatch(cli.command) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("nsrig: {e:#}");
            process::exit(exit_code_for(&e));
        }
    }
}

/// Configuration errors exit with a distinct status from runtime failures
fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<nsrig_core::Error>() {
        Some(e) if e.is_config() => 2,
        _ => 1,
    }
}
