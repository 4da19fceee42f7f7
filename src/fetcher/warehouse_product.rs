//! Warehouse product fetcher

use super::{record_id, FetchContext};
use crate::error::Result;
use crate::normalize::assign_slug;
use crate::pagination;
use crate::types::ResourceKind;
use tracing::debug;

pub(super) async fn fetch(ctx: &FetchContext) -> Result<()> {
    debug!("fetching warehouse products");

    let products = pagination::fetch_all(
        &ctx.client,
        "warehouse/products",
        ctx.config.pagination_limit,
    )
    .await?;

    // Thumbnails are intentionally not fetched for warehouse products,
    // even when downloads are configured.

    let collection = ctx
        .sink
        .add_collection(&ctx.collection_name(ResourceKind::WarehouseProduct))
        .await?;
    for mut product in products {
        assign_slug(&mut product);
        debug!("add node WarehouseProduct {}", record_id(&product));
        collection.add_node(product).await?;
    }

    Ok(())
}
