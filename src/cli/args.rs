//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::Overrides;

/// motion-doctor - Diagnose a RubyMotion toolchain.
#[derive(Debug, Parser)]
#[command(name = "motion-doctor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default ~/.motion-doctor.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the per-platform SDK folders
    #[arg(long, global = true, env = "MOTION_DOCTOR_SDK_ROOT", value_name = "PATH")]
    pub sdk_root: Option<PathBuf>,

    /// Seconds to wait for each probed tool (0 disables the timeout)
    #[arg(long, global = true, env = "MOTION_DOCTOR_TIMEOUT", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Settings given on the command line, to be layered over the config file.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            sdk_root: self.sdk_root.clone(),
            probe_timeout_secs: self.timeout,
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check the toolchain and print a report (default if no command specified)
    Check,

    /// Print raw probe results as JSON
    State,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
