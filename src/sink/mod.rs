//! Output sinks
//!
//! The host contract: a fetcher asks for a named collection once, then
//! hands it each normalized record. The connector holds no references to
//! emitted nodes and never reads back what a sink does with them.
//!
//! Two implementations ship with the crate: [`MemorySink`] for tests and
//! in-process embedding, and [`JsonlSink`] for the CLI shell, which
//! materializes one JSONL file per collection.

use crate::error::{Error, Result};
use crate::types::JsonValue;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

// ============================================================================
// Traits
// ============================================================================

/// A named, append-only collection of nodes
#[async_trait]
pub trait NodeCollection: Send + Sync {
    /// Append one node to the collection
    async fn add_node(&self, node: JsonValue) -> Result<()>;
}

/// Destination for normalized records
#[async_trait]
pub trait ContentSink: Send + Sync {
    /// Obtain (creating if needed) the collection with the given type name
    async fn add_collection(&self, type_name: &str) -> Result<Arc<dyn NodeCollection>>;
}

// ============================================================================
// Memory Sink
// ============================================================================

/// In-memory sink; collections are plain vectors keyed by type name
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    collections: Arc<Mutex<BTreeMap<String, Vec<JsonValue>>>>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes emitted to a collection, in emission order
    pub async fn nodes(&self, type_name: &str) -> Vec<JsonValue> {
        self.collections
            .lock()
            .await
            .get(type_name)
            .cloned()
            .unwrap_or_default()
    }

    /// Names of all collections that have been created
    pub async fn collection_names(&self) -> Vec<String> {
        self.collections.lock().await.keys().cloned().collect()
    }
}

struct MemoryCollection {
    type_name: String,
    collections: Arc<Mutex<BTreeMap<String, Vec<JsonValue>>>>,
}

#[async_trait]
impl NodeCollection for MemoryCollection {
    async fn add_node(&self, node: JsonValue) -> Result<()> {
        self.collections
            .lock()
            .await
            .entry(self.type_name.clone())
            .or_default()
            .push(node);
        Ok(())
    }
}

#[async_trait]
impl ContentSink for MemorySink {
    async fn add_collection(&self, type_name: &str) -> Result<Arc<dyn NodeCollection>> {
        self.collections
            .lock()
            .await
            .entry(type_name.to_string())
            .or_default();
        Ok(Arc::new(MemoryCollection {
            type_name: type_name.to_string(),
            collections: Arc::clone(&self.collections),
        }))
    }
}

// ============================================================================
// JSONL Sink
// ============================================================================

/// File sink writing `{directory}/{TypeName}.jsonl`, one node per line
#[derive(Debug, Clone)]
pub struct JsonlSink {
    directory: PathBuf,
}

impl JsonlSink {
    /// Create a sink writing into `directory` (created if missing)
    pub fn new(directory: impl Into<PathBuf>) -> Result<Self> {
        let directory = directory.into();
        std::fs::create_dir_all(&directory)?;
        Ok(Self { directory })
    }
}

struct JsonlCollection {
    file: Mutex<tokio::fs::File>,
}

#[async_trait]
impl NodeCollection for JsonlCollection {
    async fn add_node(&self, node: JsonValue) -> Result<()> {
        let mut line = serde_json::to_vec(&node)?;
        line.push(b'\n');
        let mut file = self.file.lock().await;
        file.write_all(&line).await?;
        // tokio buffers writes internally; flush so a line is durable as
        // soon as add_node resolves.
        file.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl ContentSink for JsonlSink {
    async fn add_collection(&self, type_name: &str) -> Result<Arc<dyn NodeCollection>> {
        if type_name.is_empty() {
            return Err(Error::sink("collection type name is empty"));
        }
        let path = self.directory.join(format!("{type_name}.jsonl"));
        let file = tokio::fs::File::create(&path).await?;
        Ok(Arc::new(JsonlCollection {
            file: Mutex::new(file),
        }))
    }
}
