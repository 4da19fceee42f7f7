//! Tax rate fetcher
//!
//! Single fetch of the tax countries endpoint; records keep their
//! existing id untouched.

use super::{record_id, FetchContext};
use crate::error::Result;
use crate::normalize::assign_slug;
use crate::pagination::Envelope;
use crate::types::{JsonValue, ResourceKind};
use tracing::debug;

pub(super) async fn fetch(ctx: &FetchContext) -> Result<()> {
    let countries: Envelope<Vec<JsonValue>> = ctx.client.get_json("tax/countries").await?;

    let collection = ctx
        .sink
        .add_collection(&ctx.collection_name(ResourceKind::TaxRate))
        .await?;
    for mut country in countries.result {
        assign_slug(&mut country);
        debug!("add node TaxRate {}", record_id(&country));
        collection.add_node(country).await?;
    }

    Ok(())
}
