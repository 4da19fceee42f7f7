//! Offset pagination over Printful list endpoints
//!
//! The API wraps every response in an envelope:
//!
//! ```json
//! { "result": [...], "paging": { "total": 123 } }
//! ```
//!
//! Pages are requested strictly in offset order; each page's request is
//! only issued after the previous page resolves.

use crate::error::Result;
use crate::http::PrintfulClient;
use crate::types::JsonValue;
use serde::Deserialize;
use tracing::debug;

/// Response envelope shared by all Printful endpoints
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    /// The payload; a record array for list endpoints, an object for
    /// detail endpoints
    pub result: T,
    /// Pagination metadata, absent on unpaginated endpoints
    #[serde(default)]
    pub paging: Option<Paging>,
}

/// Pagination metadata reported by the server
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Paging {
    /// Total number of records the endpoint claims to hold
    pub total: u64,
}

/// Fetch every record from a paginated endpoint.
///
/// Maintains `offset = 0` and repeatedly requests
/// `{endpoint}?limit={limit}&offset={offset}`, accumulating each page's
/// `result` array. Stops when a page comes back shorter than `limit`, or
/// when the server-reported total equals the accumulated count — either
/// signal alone terminates, which guards against endpoints whose `total`
/// disagrees with actual page sizes. An endpoint that never produces a
/// terminating signal combination would loop indefinitely; no page cap is
/// applied.
pub async fn fetch_all(
    client: &PrintfulClient,
    endpoint: &str,
    limit: u32,
) -> Result<Vec<JsonValue>> {
    let mut records: Vec<JsonValue> = Vec::new();
    let mut offset: u64 = 0;

    loop {
        let page: Envelope<Vec<JsonValue>> = client
            .get_json(&format!("{endpoint}?limit={limit}&offset={offset}"))
            .await?;

        let page_len = page.result.len();
        records.extend(page.result);
        offset += u64::from(limit);

        debug!(
            "{endpoint}: fetched {page_len} records, {} accumulated",
            records.len()
        );

        let total_reached = page
            .paging
            .is_some_and(|p| p.total == records.len() as u64);
        if page_len < limit as usize || total_reached {
            return Ok(records);
        }
    }
}
