//! Country fetcher
//!
//! Countries come back in a single unpaginated response and carry no
//! numeric id; the country code becomes the node id.

use super::{record_id, FetchContext};
use crate::error::Result;
use crate::normalize::{assign_slug, remap_country_id};
use crate::pagination::Envelope;
use crate::types::{JsonValue, ResourceKind};
use tracing::debug;

pub(super) async fn fetch(ctx: &FetchContext) -> Result<()> {
    debug!("fetching countries");

    let countries: Envelope<Vec<JsonValue>> = ctx.client.get_json("countries").await?;

    let collection = ctx
        .sink
        .add_collection(&ctx.collection_name(ResourceKind::Country))
        .await?;
    for mut country in countries.result {
        remap_country_id(&mut country);
        assign_slug(&mut country);
        debug!("add node Country {}", record_id(&country));
        collection.add_node(country).await?;
    }

    Ok(())
}
