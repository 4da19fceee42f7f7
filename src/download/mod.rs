//! Best-effort image downloads
//!
//! Downloads referenced images into a local directory with deterministic
//! filenames so repeated runs never re-fetch an asset. Downloads are
//! fail-open: a transport failure is logged, any partial file is removed,
//! and the caller still receives the target path. Callers must not assume
//! the file exists at the returned path after a failure.

use crate::types::OptionStringExt;
use futures::StreamExt;
use reqwest::Client;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

/// Outcome of a single asset fetch.
///
/// All three variants carry the deterministic target path; only
/// `Downloaded` and `AlreadyPresent` guarantee the file exists there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The asset was fetched and written to disk
    Downloaded(PathBuf),
    /// A file with the target name already existed; no request was issued
    AlreadyPresent(PathBuf),
    /// The fetch failed; the partial file was removed and the path is
    /// returned on the assumption the asset is immutable once named
    Failed(PathBuf),
}

impl DownloadOutcome {
    /// The target path, regardless of outcome
    pub fn path(&self) -> &Path {
        match self {
            DownloadOutcome::Downloaded(p)
            | DownloadOutcome::AlreadyPresent(p)
            | DownloadOutcome::Failed(p) => p,
        }
    }

    /// Consume the outcome, keeping only the target path
    pub fn into_path(self) -> PathBuf {
        match self {
            DownloadOutcome::Downloaded(p)
            | DownloadOutcome::AlreadyPresent(p)
            | DownloadOutcome::Failed(p) => p,
        }
    }

    /// Whether the underlying fetch failed
    pub fn is_failed(&self) -> bool {
        matches!(self, DownloadOutcome::Failed(_))
    }
}

/// Derive the local filename for an asset.
///
/// `{owner_id}_{lowercased basename of the URL, query string stripped}` —
/// keyed by owning entity and basename, not content, so two URLs sharing a
/// basename under the same owner resolve to one file.
pub fn asset_filename(owner_id: &str, url: &str) -> String {
    let basename = url.rsplit('/').next().unwrap_or(url);
    let basename = basename.split('?').next().unwrap_or(basename);
    format!("{owner_id}_{}", basename.to_lowercase())
}

/// Downloads assets into a fixed directory.
///
/// Holds its own unauthenticated client: image URLs point at a CDN, not
/// the API host, and must not carry the API authorization header.
#[derive(Debug, Clone)]
pub struct AssetDownloader {
    client: Client,
    directory: PathBuf,
}

impl AssetDownloader {
    /// Create a downloader writing into `directory`
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            client: Client::new(),
            directory: directory.into(),
        }
    }

    /// The directory assets are written to
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Fetch one asset.
    ///
    /// Returns `None` when `url` is absent or empty (not an error). Never
    /// returns a transport failure; see [`DownloadOutcome::Failed`].
    ///
    /// Many calls may run concurrently across different (owner, url)
    /// pairs; filenames are unique per pair so no coordination is needed.
    /// Two concurrent calls for the same pair race on the existence check
    /// and may momentarily double-write the same immutable content.
    pub async fn fetch(&self, owner_id: &str, url: Option<&str>) -> Option<DownloadOutcome> {
        let url = url.map(str::to_string).none_if_empty()?;

        let filename = asset_filename(owner_id, &url);
        let target = self.directory.join(&filename);

        if target.exists() {
            debug!("image {filename} already downloaded");
            return Some(DownloadOutcome::AlreadyPresent(target));
        }

        debug!("downloading {url}");
        match self.stream_to_file(&url, &target).await {
            Ok(()) => Some(DownloadOutcome::Downloaded(target)),
            Err(e) => {
                warn!("error processing image {filename}: {e}");
                if let Err(e) = tokio::fs::remove_file(&target).await {
                    if e.kind() != std::io::ErrorKind::NotFound {
                        warn!("could not remove partial file {}: {e}", target.display());
                    }
                }
                Some(DownloadOutcome::Failed(target))
            }
        }
    }

    /// Stream the response body to the target path
    async fn stream_to_file(&self, url: &str, target: &Path) -> crate::error::Result<()> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(crate::error::Error::http_status(
                status.as_u16(),
                String::new(),
            ));
        }

        let mut file = File::create(target).await?;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
        }
        file.flush().await?;

        Ok(())
    }
}
