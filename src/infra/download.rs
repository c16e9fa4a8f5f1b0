//! HTTP transfer
//!
//! Streams remote files to disk and lists remote directories. There is
//! deliberately no retry, no checksum and no request timeout: failures
//! propagate to the caller and a stalled transfer blocks until the
//! connection drops.

use futures::StreamExt;
use regex::Regex;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::error::TransferError;

/// HTTP client wrapper for fetching upstream files
#[derive(Debug, Clone, Default)]
pub struct Downloader {
    client: reqwest::Client,
}

impl Downloader {
    /// Create a new downloader
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Download `url` into `dest`, overwriting any existing file.
    ///
    /// Returns the number of bytes written. A partially written file is
    /// left in place on failure.
    pub async fn fetch_file(&self, url: &str, dest: &Path) -> Result<u64, TransferError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransferError::Network {
                url: url.to_string(),
                error: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransferError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let mut file = File::create(dest).await.map_err(|e| TransferError::Io {
            path: dest.to_path_buf(),
            error: e.to_string(),
        })?;

        let mut written: u64 = 0;
        let mut stream = response.bytes_stream();

        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result.map_err(|e| TransferError::Network {
                url: url.to_string(),
                error: e.to_string(),
            })?;

            file.write_all(&chunk)
                .await
                .map_err(|e| TransferError::Io {
                    path: dest.to_path_buf(),
                    error: e.to_string(),
                })?;

            written += chunk.len() as u64;
        }

        file.flush().await.map_err(|e| TransferError::Io {
            path: dest.to_path_buf(),
            error: e.to_string(),
        })?;

        tracing::debug!(url, bytes = written, "fetched");
        Ok(written)
    }

    /// GET the directory listing at `base_url` and return the file
    /// names it exposes.
    pub async fn list_directory(&self, base_url: &str) -> Result<Vec<String>, TransferError> {
        let url = format!("{}/", base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| TransferError::Network {
                url: url.clone(),
                error: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransferError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| TransferError::Network {
            url,
            error: e.to_string(),
        })?;

        Ok(listing_names(&body))
    }
}

/// Extract file names from a directory listing page.
///
/// Handles HTML indexes by taking the final path segment of each
/// `href`, and plain-text listings (FTP `LIST` output or one name per
/// line) by taking the final whitespace-separated token of each line.
/// Directory links, query links and parent references are skipped.
fn listing_names(body: &str) -> Vec<String> {
    let href = Regex::new(r#"href\s*=\s*["']([^"']+)["']"#).unwrap();

    let candidates: Vec<&str> = if body.contains("href") {
        href.captures_iter(body)
            .map(|cap| cap.get(1).map_or("", |m| m.as_str()))
            .collect()
    } else {
        body.lines()
            .filter_map(|line| line.split_whitespace().last())
            .collect()
    };

    let mut names = Vec::new();
    for candidate in candidates {
        if candidate.ends_with('/') || candidate.contains('?') || candidate.contains('#') {
            continue;
        }
        let name = candidate.rsplit('/').next().unwrap_or(candidate);
        if name.is_empty() || name == ".." || name == "." {
            continue;
        }
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}
