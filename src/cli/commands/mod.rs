//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod fetch;
pub mod info;

use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::{Path, PathBuf};

use crate::config::settings::Settings;
use crate::core::fetch::{FailureMode, FetchConfig};

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download the topography grid and companion text files
    Fetch {
        /// Base URL of the upstream data directory
        #[arg(long)]
        base_url: Option<String>,

        /// Dataset version, e.g. 18.1
        #[arg(long)]
        dataset_version: Option<String>,

        /// Directory that receives the downloaded files
        #[arg(short, long)]
        target: Option<PathBuf>,

        /// Stop at the first failed transfer instead of attempting every step
        #[arg(long)]
        fail_fast: bool,
    },

    /// Show the resolved configuration and grid facts without fetching
    Info {
        /// Base URL of the upstream data directory
        #[arg(long)]
        base_url: Option<String>,

        /// Dataset version, e.g. 18.1
        #[arg(long)]
        dataset_version: Option<String>,

        /// Directory that would receive the downloaded files
        #[arg(short, long)]
        target: Option<PathBuf>,
    },
}

impl Commands {
    /// Execute the CLI command
    pub async fn run(self, quiet: bool, json: bool) -> Result<()> {
        match self {
            Commands::Fetch {
                base_url,
                dataset_version,
                target,
                fail_fast,
            } => {
                let config = resolve_config(base_url, dataset_version, target, fail_fast)?;
                fetch::execute(&config, quiet, json).await
            }
            Commands::Info {
                base_url,
                dataset_version,
                target,
            } => {
                let config = resolve_config(base_url, dataset_version, target, false)?;
                info::execute(&config, json)
            }
        }
    }
}

/// Layer the run configuration: defaults, then the optional settings
/// file in the working directory, then command-line flags.
fn resolve_config(
    base_url: Option<String>,
    dataset_version: Option<String>,
    target: Option<PathBuf>,
    fail_fast: bool,
) -> Result<FetchConfig> {
    let settings =
        Settings::load_or_default(Path::new(".")).context("Failed to load settings")?;

    Ok(FetchConfig {
        base_url: base_url.unwrap_or(settings.fetch.base_url),
        version: dataset_version.unwrap_or(settings.fetch.version),
        target_dir: target.unwrap_or(settings.fetch.target),
        failure_mode: if fail_fast || settings.fetch.fail_fast {
            FailureMode::FailFast
        } else {
            FailureMode::BestEffort
        },
    })
}
