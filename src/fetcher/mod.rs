//! Resource fetchers
//!
//! One fetcher per [`ResourceKind`]. Each composes the client, paginator,
//! and downloader for its endpoint, shapes the records, and emits them to
//! the sink. Fetchers share no mutable state beyond the sink and run
//! independently; an HTTP failure inside a fetcher propagates out and
//! fails that resource kind only.

mod country;
mod sync_product;
mod tax_rate;
mod warehouse_product;

use crate::config::SourceConfig;
use crate::download::AssetDownloader;
use crate::error::Result;
use crate::http::PrintfulClient;
use crate::sink::ContentSink;
use crate::types::{JsonValue, ResourceKind};
use serde_json::Value;
use std::sync::Arc;

/// Everything a fetcher needs for one run
#[derive(Clone)]
pub struct FetchContext {
    /// Authenticated API client, built once per run
    pub client: PrintfulClient,
    /// Immutable run configuration
    pub config: SourceConfig,
    /// Asset downloader; present only when `download_files` is set
    pub downloader: Option<AssetDownloader>,
    /// Destination for normalized records
    pub sink: Arc<dyn ContentSink>,
}

impl FetchContext {
    /// Output collection name for a kind: `{type_name}{suffix}`
    pub fn collection_name(&self, kind: ResourceKind) -> String {
        format!("{}{}", self.config.type_name, kind.collection_suffix())
    }
}

/// Run the fetcher for one resource kind.
///
/// A closed dispatch table; unknown object type names never reach this
/// point (they are resolved, logged, and skipped by the orchestrator).
pub async fn fetch_resource(kind: ResourceKind, ctx: &FetchContext) -> Result<()> {
    match kind {
        ResourceKind::SyncProduct => sync_product::fetch(ctx).await,
        ResourceKind::WarehouseProduct => warehouse_product::fetch(ctx).await,
        ResourceKind::Country => country::fetch(ctx).await,
        ResourceKind::TaxRate => tax_rate::fetch(ctx).await,
    }
}

/// The record's `id` rendered as a plain string, for logging and for
/// asset filename ownership
pub(crate) fn record_id(record: &JsonValue) -> String {
    match record.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
