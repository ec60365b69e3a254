//! Flattening concatenator
//!
//! Drains a [`PagedSequence`] eagerly into one in-memory ordered
//! collection, for callers that do not need streaming behavior.

use crate::error::Result;
use crate::fetch::PageFetcher;
use crate::sequence::PagedSequence;
use tracing::debug;

/// Drain a paged sequence to exhaustion into one ordered collection
///
/// Items keep their provider order: page fetch order first, intra-page
/// order within each page; nothing is re-sorted. Callers either get the
/// complete listing or an error: a failed page fetch propagates rather
/// than truncating silently.
///
/// Takes the sequence by value; it is consumed whether or not the drain
/// succeeds, so draining the same sequence twice does not type-check.
pub async fn concat<F: PageFetcher>(mut sequence: PagedSequence<F>) -> Result<Vec<F::Item>> {
    let mut all = Vec::new();
    while sequence.has_next() {
        all.extend(sequence.next().await?);
    }
    debug!(
        items = all.len(),
        pages = sequence.pages_yielded(),
        "drained paged sequence"
    );
    Ok(all)
}

#[cfg(test)]
mod tests;
