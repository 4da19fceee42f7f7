//! Sync product fetcher
//!
//! The only fetcher with secondary fetches and image resolution. The
//! listing endpoint yields product ids; a detail fetch per id returns the
//! product and its variants. Detail fetches and per-product image work
//! run concurrently across products, while the files inside one variant
//! are downloaded strictly in order to bound the burst against the CDN.

use super::{record_id, FetchContext};
use crate::download::{AssetDownloader, DownloadOutcome};
use crate::error::Result;
use crate::normalize::{assign_slug, coerce_retail_price};
use crate::pagination::{self, Envelope};
use crate::types::{JsonValue, ResourceKind};
use futures::future;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Detail endpoint payload: the product and its variants side by side
#[derive(Debug, Deserialize)]
struct ProductDetail {
    sync_product: JsonValue,
    sync_variants: Vec<JsonValue>,
}

pub(super) async fn fetch(ctx: &FetchContext) -> Result<()> {
    let listing =
        pagination::fetch_all(&ctx.client, "sync/products", ctx.config.pagination_limit).await?;

    // One detail fetch per listed id, all in flight at once; try_join_all
    // recombines results in listing order regardless of completion order.
    let details = future::try_join_all(
        listing
            .iter()
            .filter_map(|record| record.get("id").and_then(Value::as_u64))
            .map(|id| fetch_detail(ctx, id)),
    )
    .await?;

    let products = match &ctx.downloader {
        Some(downloader) if ctx.config.download_files => {
            future::join_all(
                details
                    .into_iter()
                    .map(|product| resolve_images(ctx, downloader, product)),
            )
            .await
        }
        _ => details,
    };

    let collection = ctx
        .sink
        .add_collection(&ctx.collection_name(ResourceKind::SyncProduct))
        .await?;
    for mut product in products {
        assign_slug(&mut product);
        debug!("add node SyncProduct {}", record_id(&product));
        collection.add_node(product).await?;
    }

    Ok(())
}

/// Fetch one product's detail and fold the variants into the record
async fn fetch_detail(ctx: &FetchContext, id: u64) -> Result<JsonValue> {
    let detail: Envelope<ProductDetail> =
        ctx.client.get_json(&format!("sync/products/{id}")).await?;

    let ProductDetail {
        mut sync_product,
        sync_variants,
    } = detail.result;

    let variants: Vec<JsonValue> = sync_variants
        .into_iter()
        .map(|mut variant| {
            coerce_retail_price(&mut variant);
            variant
        })
        .collect();
    sync_product["variants"] = Value::Array(variants);

    Ok(sync_product)
}

/// Resolve a product's images to local paths.
///
/// The thumbnail belongs to the product; each print file inside a variant
/// owns its own thumbnail and preview. File downloads are awaited one
/// after another within the product.
async fn resolve_images(
    ctx: &FetchContext,
    downloader: &AssetDownloader,
    mut product: JsonValue,
) -> JsonValue {
    if ctx.config.download_product_thumbnail {
        let owner = record_id(&product);
        let url = owned_str(&product, "thumbnail_url");
        if let Some(outcome) = downloader.fetch(&owner, url.as_deref()).await {
            product["thumbnail_img"] = path_value(outcome);
        }
    }

    if ctx.config.download_product_images {
        if let Some(variants) = product.get_mut("variants").and_then(Value::as_array_mut) {
            for variant in variants {
                let Some(files) = variant.get_mut("files").and_then(Value::as_array_mut) else {
                    continue;
                };
                for file in files {
                    let owner = record_id(file);

                    let thumb = owned_str(file, "thumbnail_url");
                    if let Some(outcome) = downloader.fetch(&owner, thumb.as_deref()).await {
                        file["thumbnail_img"] = path_value(outcome);
                    }

                    let preview = owned_str(file, "preview_url");
                    if let Some(outcome) = downloader.fetch(&owner, preview.as_deref()).await {
                        file["preview_img"] = path_value(outcome);
                    }
                }
            }
        }
    }

    product
}

fn owned_str(record: &JsonValue, field: &str) -> Option<String> {
    record.get(field).and_then(Value::as_str).map(str::to_string)
}

fn path_value(outcome: DownloadOutcome) -> JsonValue {
    Value::String(outcome.into_path().display().to_string())
}
