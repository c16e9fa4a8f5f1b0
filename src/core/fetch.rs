//! Fetch orchestration
//!
//! Runs the fixed sequence: ensure the target directory exists, fetch
//! the text files, fetch the versioned grid file. Each step's outcome
//! is collected into a [`FetchResult`]; whether a failed step stops
//! the sequence is decided by [`FailureMode`].

use serde::Serialize;
use std::path::PathBuf;

use crate::core::manifest::{self, RemoteResource};
use crate::error::{FilesystemError, TransferError};
use crate::infra::download::Downloader;
use crate::infra::filesystem;

/// Immutable configuration for one fetch run
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Base URL of the upstream data directory
    pub base_url: String,
    /// Dataset version, substituted into the grid file name
    pub version: String,
    /// Directory that receives downloaded files
    pub target_dir: PathBuf,
    /// What to do when a step fails
    pub failure_mode: FailureMode,
}

/// Policy for a failed fetch step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureMode {
    /// Attempt every step and report all failures at the end
    #[default]
    BestEffort,
    /// Stop the sequence at the first failed step
    FailFast,
}

/// One file written to the target directory
#[derive(Debug, Clone, Serialize)]
pub struct DownloadedFile {
    /// Remote file name
    pub name: String,
    /// Local path the file was written to
    pub path: PathBuf,
    /// Bytes written
    pub bytes: u64,
}

/// A manifest step that failed
#[derive(Debug, Clone, Serialize)]
pub struct FailedStep {
    /// Remote name of the step's resource (`*.txt` or the grid file)
    pub resource: String,
    /// Error message
    pub error: String,
}

/// Outcome of a fetch run
#[derive(Debug, Default, Serialize)]
pub struct FetchResult {
    /// Files written to the target directory
    pub downloaded: Vec<DownloadedFile>,
    /// Steps that failed
    pub failed: Vec<FailedStep>,
}

impl FetchResult {
    /// True when every step succeeded
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Run the fetch sequence.
///
/// The target directory is created first; failure there aborts the
/// run. Transfer failures never abort under [`FailureMode::BestEffort`],
/// they are collected into the result instead.
pub async fn run_fetch(config: &FetchConfig) -> Result<FetchResult, FilesystemError> {
    filesystem::create_dir_all(&config.target_dir)?;

    let downloader = Downloader::new();
    let mut result = FetchResult::default();

    for resource in manifest::manifest(&config.version) {
        match fetch_resource(&downloader, &resource, config).await {
            Ok(mut files) => {
                tracing::info!(
                    resource = %resource.remote_name(),
                    files = files.len(),
                    "step complete"
                );
                result.downloaded.append(&mut files);
            }
            Err(e) => {
                tracing::warn!(resource = %resource.remote_name(), error = %e, "step failed");
                result.failed.push(FailedStep {
                    resource: resource.remote_name(),
                    error: e.to_string(),
                });
                if config.failure_mode == FailureMode::FailFast {
                    break;
                }
            }
        }
    }

    Ok(result)
}

/// Fetch one manifest entry into the target directory.
///
/// The glob entry is expanded against the remote directory listing;
/// zero matches is not an error, a failed listing request is.
async fn fetch_resource(
    downloader: &Downloader,
    resource: &RemoteResource,
    config: &FetchConfig,
) -> Result<Vec<DownloadedFile>, TransferError> {
    match resource {
        RemoteResource::TextFiles => {
            let listing = downloader.list_directory(&config.base_url).await?;
            let names = manifest::text_file_names(&listing);
            if names.is_empty() {
                tracing::info!(base_url = %config.base_url, "no text files in listing");
            }

            let mut files = Vec::new();
            for name in names {
                let url = format!("{}/{}", config.base_url.trim_end_matches('/'), name);
                let dest = config.target_dir.join(&name);
                let bytes = downloader.fetch_file(&url, &dest).await?;
                files.push(DownloadedFile {
                    name,
                    path: dest,
                    bytes,
                });
            }
            Ok(files)
        }
        RemoteResource::TopoGrid { .. } => {
            let name = resource.remote_name();
            let url = resource.url(&config.base_url);
            let dest = config.target_dir.join(&name);
            let bytes = downloader.fetch_file(&url, &dest).await?;
            Ok(vec![DownloadedFile {
                name,
                path: dest,
                bytes,
            }])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(base_url: &str, target_dir: &std::path::Path, mode: FailureMode) -> FetchConfig {
        FetchConfig {
            base_url: base_url.to_string(),
            version: "18.1".to_string(),
            target_dir: target_dir.to_path_buf(),
            failure_mode: mode,
        }
    }

    async fn mount_listing(server: &MockServer, body: &str) {
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body.to_string()))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_happy_path_fetches_both_steps() {
        let server = MockServer::start().await;
        mount_listing(
            &server,
            r#"<a href="README.txt">x</a><a href="topo_18.1.img">x</a>"#,
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/README.txt"))
            .respond_with(ResponseTemplate::new(200).set_body_string("readme"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/topo_18.1.img"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0u8; 64]))
            .mount(&server)
            .await;

        let temp = TempDir::new().unwrap();
        let target = temp.path().join("data");
        let result = run_fetch(&config(&server.uri(), &target, FailureMode::BestEffort))
            .await
            .unwrap();

        assert!(result.is_success());
        let names: Vec<_> = result.downloaded.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["README.txt", "topo_18.1.img"]);
        assert!(target.join("README.txt").is_file());
        assert!(target.join("topo_18.1.img").is_file());
    }

    #[tokio::test]
    async fn test_best_effort_attempts_second_step_after_failure() {
        let server = MockServer::start().await;
        // Listing fails, grid file is fine
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/topo_18.1.img"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1u8; 16]))
            .expect(1)
            .mount(&server)
            .await;

        let temp = TempDir::new().unwrap();
        let target = temp.path().join("data");
        let result = run_fetch(&config(&server.uri(), &target, FailureMode::BestEffort))
            .await
            .unwrap();

        assert!(!result.is_success());
        assert_eq!(result.failed.len(), 1);
        assert_eq!(result.failed[0].resource, "*.txt");
        assert_eq!(result.downloaded.len(), 1);
        assert!(target.join("topo_18.1.img").is_file());
    }

    #[tokio::test]
    async fn test_fail_fast_skips_second_step() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        // Must never be requested under fail-fast
        Mock::given(method("GET"))
            .and(path("/topo_18.1.img"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let temp = TempDir::new().unwrap();
        let target = temp.path().join("data");
        let result = run_fetch(&config(&server.uri(), &target, FailureMode::FailFast))
            .await
            .unwrap();

        assert!(!result.is_success());
        assert_eq!(result.failed.len(), 1);
        assert!(result.downloaded.is_empty());
    }

    #[tokio::test]
    async fn test_target_dir_created_even_when_fetches_fail() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("data");

        // Nothing listening on port 1
        let result = run_fetch(&config(
            "http://127.0.0.1:1",
            &target,
            FailureMode::BestEffort,
        ))
        .await
        .unwrap();

        assert!(target.is_dir());
        assert!(!result.is_success());
        // Both steps were attempted and both failed
        assert_eq!(result.failed.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_listing_is_not_a_failure() {
        let server = MockServer::start().await;
        mount_listing(&server, "<html><body>empty</body></html>").await;
        Mock::given(method("GET"))
            .and(path("/topo_18.1.img"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![2u8; 8]))
            .mount(&server)
            .await;

        let temp = TempDir::new().unwrap();
        let target = temp.path().join("data");
        let result = run_fetch(&config(&server.uri(), &target, FailureMode::BestEffort))
            .await
            .unwrap();

        assert!(result.is_success());
        assert_eq!(result.downloaded.len(), 1);
        assert_eq!(result.downloaded[0].name, "topo_18.1.img");
    }
}
