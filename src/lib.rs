//! # Printful Source Connector
//!
//! A source connector for the Printful print-on-demand REST API. It pulls
//! catalog data (sync products, warehouse products, countries, tax rates),
//! normalizes each record into a typed node, and optionally materializes
//! referenced images to local disk.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use printful_source::{MemorySink, PrintfulSource, SourceConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> printful_source::Result<()> {
//!     let config = SourceConfig {
//!         api_key: "pf-...".to_string(),
//!         ..SourceConfig::default()
//!     };
//!
//!     let sink = MemorySink::new();
//!     PrintfulSource::new(config)?.run(Arc::new(sink.clone())).await?;
//!
//!     for node in sink.nodes("PrintfulCountry").await {
//!         // Process nodes
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                     PrintfulSource::run                    │
//! │  resolve kinds → bootstrap image dir → fetchers (joined)   │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//! ┌───────────┬────────────┬───┴─────────┬────────────────────┐
//! │   HTTP    │ Pagination │  Download   │       Sink         │
//! ├───────────┼────────────┼─────────────┼────────────────────┤
//! │ Basic auth│ Offset     │ Idempotent  │ Memory (embedding) │
//! │ GET/JSON  │ Dual stop  │ Fail-open   │ JSONL (CLI)        │
//! └───────────┴────────────┴─────────────┴────────────────────┘
//! ```

#![warn(clippy::all)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the connector
pub mod error;

/// Common types and type aliases
pub mod types;

/// Source configuration
pub mod config;

/// Authenticated HTTP client for the Printful API
pub mod http;

/// Offset pagination over list endpoints
pub mod pagination;

/// Best-effort idempotent image downloads
pub mod download;

/// Record shaping: slugs, price coercion, id remapping
pub mod normalize;

/// Output sinks (the host collection contract)
pub mod sink;

/// Per-resource fetchers
pub mod fetcher;

/// Run orchestration
pub mod source;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::SourceConfig;
pub use download::{AssetDownloader, DownloadOutcome};
pub use error::{Error, Result};
pub use sink::{ContentSink, JsonlSink, MemorySink, NodeCollection};
pub use source::PrintfulSource;
pub use types::ResourceKind;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
