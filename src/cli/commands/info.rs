//! CLI implementation for `topofetch info`
//!
//! Shows what a fetch run would do without touching the network.

use anyhow::Result;

use crate::core::dataset::SMITH_SANDWELL;
use crate::core::fetch::{FailureMode, FetchConfig};
use crate::core::manifest::resolve_manifest;

/// Execute the info command
pub fn execute(config: &FetchConfig, json: bool) -> Result<()> {
    let urls = resolve_manifest(config);
    let facts = SMITH_SANDWELL;

    if json {
        let value = serde_json::json!({
            "base_url": config.base_url,
            "version": config.version,
            "target": config.target_dir,
            "fail_fast": config.failure_mode == FailureMode::FailFast,
            "urls": urls,
            "grid": {
                "nlon": facts.nlon,
                "nlat": facts.nlat,
                "max_abs_lat": facts.max_abs_lat,
                "bytes": facts.grid_bytes(),
            },
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Dataset version: {}", config.version);
    println!("Base URL:        {}", config.base_url);
    println!("Target dir:      {}", config.target_dir.display());
    println!("Files:");
    for url in &urls {
        println!("    {url}");
    }
    println!(
        "Grid: {} x {} cells, latitude \u{b1}{}\u{b0}, {} bytes",
        facts.nlon,
        facts.nlat,
        facts.max_abs_lat,
        facts.grid_bytes()
    );
    Ok(())
}
