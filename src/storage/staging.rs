// src/storage/staging.rs

//! Scoped staging directory and per-URL staged resources.
//!
//! The staging directory lives for the whole run and is removed in its
//! entirety on drop. Each staged resource owns its backing file and removes
//! it when its processing cycle ends, on every exit path.

use std::path::{Path, PathBuf};

use url::Url;

use crate::error::{AppError, Result};

/// Working directory holding fetched documents for the duration of one run.
#[derive(Debug)]
pub struct StagingDir {
    root: PathBuf,
}

impl StagingDir {
    /// Create the staging directory, including parents.
    pub fn create(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|e| {
            AppError::staging(format!("failed to create {}: {}", root.display(), e))
        })?;
        Ok(Self { root })
    }

    /// Path of the staging directory.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Materialize fetched bytes as a staged resource for one URL.
    pub async fn stage(&self, url: &str, bytes: &[u8]) -> Result<StagedResource> {
        let path = self.root.join(file_name_for(url));
        tokio::fs::write(&path, bytes).await?;
        log::debug!("Staged {} ({} bytes) at {}", url, bytes.len(), path.display());

        Ok(StagedResource {
            url: url.to_string(),
            path,
        })
    }
}

impl Drop for StagingDir {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_dir_all(&self.root) {
            log::warn!(
                "Failed to remove staging directory {}: {}",
                self.root.display(),
                e
            );
        }
    }
}

/// Locally materialized bytes for one URL.
///
/// Owned exclusively by that URL's processing cycle; the backing file is
/// removed on drop.
#[derive(Debug)]
pub struct StagedResource {
    url: String,
    path: PathBuf,
}

impl StagedResource {
    /// The source URL this resource was fetched from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Path of the staged file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StagedResource {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            log::debug!("Failed to remove staged file {}: {}", self.path.display(), e);
        }
    }
}

/// Derive a staging file name from a URL.
///
/// Uses the last non-empty path segment; falls back to a fixed name when the
/// URL has no usable segment.
fn file_name_for(url: &str) -> String {
    let from_path = Url::parse(url).ok().and_then(|u| {
        u.path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).next_back())
            .map(|s| s.to_string())
    });

    from_path
        .or_else(|| {
            url.rsplit('/')
                .next()
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| "downloaded_file".to_string())
}
