//! Run orchestration
//!
//! Resolves the configured object types to fetchers, bootstraps the image
//! directory, and drives all fetchers concurrently against one shared
//! client and sink.

use crate::config::SourceConfig;
use crate::download::AssetDownloader;
use crate::error::Result;
use crate::fetcher::{fetch_resource, FetchContext};
use crate::http::PrintfulClient;
use crate::sink::ContentSink;
use crate::types::ResourceKind;
use futures::future;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

/// The Printful catalog source
pub struct PrintfulSource {
    config: SourceConfig,
    client: PrintfulClient,
}

impl PrintfulSource {
    /// Create a source for the production API.
    ///
    /// Validates the configuration and builds the authenticated client
    /// once; every fetcher reuses it.
    pub fn new(config: SourceConfig) -> Result<Self> {
        config.validate()?;
        let client = PrintfulClient::new(&config.api_key)?;
        Ok(Self { config, client })
    }

    /// Create a source with an explicit client (used by tests)
    pub fn with_client(config: SourceConfig, client: PrintfulClient) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, client })
    }

    /// The active configuration
    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Run every configured fetcher, emitting normalized records to `sink`.
    ///
    /// Fetchers run concurrently and each is allowed to settle; one
    /// fetcher's failure never cancels its siblings, and work already
    /// performed (files downloaded, nodes emitted) is kept. After all
    /// fetchers settle, the first failure — if any — is returned.
    ///
    /// Object type names without a matching fetcher are logged and
    /// skipped; they do not fail the run.
    pub async fn run(&self, sink: Arc<dyn ContentSink>) -> Result<()> {
        let downloader = if self.config.download_files {
            Some(self.prepare_image_directory()?)
        } else {
            None
        };

        let ctx = FetchContext {
            client: self.client.clone(),
            config: self.config.clone(),
            downloader,
            sink,
        };

        let kinds: Vec<ResourceKind> = self
            .config
            .object_types
            .iter()
            .filter_map(|name| {
                let kind = ResourceKind::parse(name);
                if kind.is_none() {
                    error!("no fetcher for object type {name}, skipping");
                }
                kind
            })
            .collect();

        let results = future::join_all(kinds.iter().map(|&kind| {
            let ctx = &ctx;
            async move { (kind, fetch_resource(kind, ctx).await) }
        }))
        .await;

        let mut first_error = None;
        for (kind, result) in results {
            match result {
                Ok(()) => info!("{kind} fetch complete"),
                Err(e) => {
                    error!("{kind} fetch failed: {e}");
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Ensure the image directory exists and build the downloader.
    ///
    /// The directory lives under the current working directory and
    /// creation is idempotent.
    fn prepare_image_directory(&self) -> Result<AssetDownloader> {
        let dir: PathBuf = std::env::current_dir()?.join(&self.config.image_directory);
        std::fs::create_dir_all(&dir)?;
        Ok(AssetDownloader::new(dir))
    }
}
