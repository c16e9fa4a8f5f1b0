//! CLI implementation for `topofetch fetch`

use anyhow::Result;

use crate::cli::output::{self, status};
use crate::core::fetch::{run_fetch, FetchConfig, FetchResult};

/// Execute the fetch command
pub async fn execute(config: &FetchConfig, quiet: bool, json: bool) -> Result<()> {
    let spinner = (!quiet && !json).then(|| {
        output::create_spinner(&format!(
            "Fetching bathymetry files into {}",
            config.target_dir.display()
        ))
    });

    let result = run_fetch(config).await?;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if !quiet {
        print_summary(&result);
    }

    if !result.is_success() {
        anyhow::bail!("{} fetch step(s) failed", result.failed.len());
    }
    Ok(())
}

/// Print a human-readable summary
fn print_summary(result: &FetchResult) {
    if result.downloaded.is_empty() && result.failed.is_empty() {
        println!("{} Nothing to fetch", status::INFO);
        return;
    }

    if !result.downloaded.is_empty() {
        println!(
            "{} Downloaded {} file(s):",
            status::SUCCESS,
            result.downloaded.len()
        );
        for file in &result.downloaded {
            println!("    {} ({} bytes)", file.name, file.bytes);
        }
    }

    if !result.failed.is_empty() {
        println!("{} Failed {} step(s):", status::ERROR, result.failed.len());
        for step in &result.failed {
            println!("    {}: {}", step.resource, step.error);
        }
    }
}
