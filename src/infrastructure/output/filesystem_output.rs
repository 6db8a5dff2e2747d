//! Filesystem-based output service implementation
//!
//! Every artifact is first written to a hidden sibling staging file. Only when
//! all of them are staged are they renamed into place, so a failed run leaves
//! no truncated output behind.

use async_trait::async_trait;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::application::{ApplicationError, OutputService};
use crate::generation::Artifact;

const STAGING_SUFFIX: &str = ".swagger2ts-staging";

/// Output service that writes artifacts to the filesystem
pub struct FileSystemOutputService;

impl FileSystemOutputService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemOutputService {
    fn default() -> Self {
        Self::new()
    }
}

/// Hidden sibling of `path` used while staging
fn staging_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{file_name}{STAGING_SUFFIX}"))
}

async fn stage(artifact: &Artifact, staged: &Path) -> Result<(), ApplicationError> {
    if let Some(parent) = artifact.path.parent() {
        fs::create_dir_all(parent).await.map_err(|e| {
            ApplicationError::OutputError(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut file = fs::File::create(staged).await.map_err(|e| {
        ApplicationError::OutputError(format!(
            "Failed to create file {}: {}",
            staged.display(),
            e
        ))
    })?;

    file.write_all(artifact.content.as_bytes())
        .await
        .map_err(|e| {
            ApplicationError::OutputError(format!(
                "Failed to write file {}: {}",
                staged.display(),
                e
            ))
        })?;

    file.flush().await.map_err(|e| {
        ApplicationError::OutputError(format!(
            "Failed to flush file {}: {}",
            staged.display(),
            e
        ))
    })
}

async fn discard(staged: &[PathBuf]) {
    for path in staged {
        if let Err(e) = fs::remove_file(path).await {
            tracing::warn!(path = %path.display(), "Failed to remove staging file: {e}");
        }
    }
}

#[async_trait]
impl OutputService for FileSystemOutputService {
    async fn write_artifacts(&self, artifacts: &[Artifact]) -> Result<(), ApplicationError> {
        let mut targets = HashSet::with_capacity(artifacts.len());
        if let Some(duplicate) = artifacts.iter().find(|a| !targets.insert(a.path.as_path())) {
            return Err(ApplicationError::OutputError(format!(
                "More than one artifact targets {}",
                duplicate.path.display()
            )));
        }

        let mut staged = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            let staging = staging_path(&artifact.path);
            let result = stage(artifact, &staging).await;
            staged.push(staging);
            if let Err(e) = result {
                discard(&staged).await;
                return Err(e);
            }
        }

        for (index, (artifact, staging)) in artifacts.iter().zip(&staged).enumerate() {
            if let Err(e) = fs::rename(staging, &artifact.path).await {
                discard(&staged[index..]).await;
                return Err(ApplicationError::OutputError(format!(
                    "Failed to move {} into place: {}",
                    artifact.path.display(),
                    e
                )));
            }
            tracing::debug!(path = %artifact.path.display(), "Wrote artifact");
        }

        Ok(())
    }

    async fn ensure_directory(&self, path: &Path) -> Result<(), ApplicationError> {
        fs::create_dir_all(path).await.map_err(|e| {
            ApplicationError::OutputError(format!(
                "Failed to create directory {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(())
    }
}
