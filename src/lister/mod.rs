//! Caller-facing listing API
//!
//! A [`Lister`] binds one listing endpoint's fetcher, marker resolver and
//! fallback policy, and exposes the two entry points every endpoint gets:
//! one page with explicit pagination options, or everything. Both accept
//! the same caller options; the engine passes them through opaquely.

use crate::args::CallArgs;
use crate::error::Result;
use crate::fallback::FallbackPolicy;
use crate::fetch::PageFetcher;
use crate::flatten;
use crate::page::Page;
use crate::resolver::MarkerResolver;
use crate::sequence::PagedSequence;
use std::sync::Arc;
use tracing::debug;

/// One listing endpoint, bound and ready to call
///
/// A `Lister` is also the restart factory: every call to [`pages`] or
/// [`list_all`] reissues the first-page fetch from the original arguments
/// and hands back a fresh sequence, since a [`PagedSequence`] consumes
/// itself and cannot be rewound.
///
/// [`pages`]: Lister::pages
/// [`list_all`]: Lister::list_all
pub struct Lister<F: PageFetcher> {
    fetcher: Arc<F>,
    resolver: MarkerResolver,
    fallback: FallbackPolicy,
}

impl<F: PageFetcher> Clone for Lister<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            resolver: self.resolver.clone(),
            fallback: self.fallback.clone(),
        }
    }
}

impl<F: PageFetcher> std::fmt::Debug for Lister<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lister")
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

impl<F: PageFetcher> Lister<F> {
    /// Bind a fetcher and resolver; errors propagate unabsorbed
    pub fn new(fetcher: Arc<F>, resolver: MarkerResolver) -> Self {
        Self {
            fetcher,
            resolver,
            fallback: FallbackPolicy::propagate(),
        }
    }

    /// Select the fallback policy for this endpoint's fetches
    #[must_use]
    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    /// List one page with explicit pagination options; no iteration
    pub async fn first_page(&self, args: &CallArgs) -> Result<Page<F::Item>> {
        self.fallback
            .empty_page_on_absence(self.fetcher.fetch_first(args).await)
    }

    /// List everything lazily: a fresh paged sequence over every page
    ///
    /// The first page is fetched here (through the fallback policy, so a
    /// designated absence yields an exhausted empty sequence, not an
    /// error); later pages are fetched as the sequence is driven.
    pub async fn pages(&self, args: CallArgs) -> Result<PagedSequence<F>> {
        let first = self.first_page(&args).await?;
        debug!(
            items = first.len(),
            terminal = first.is_terminal(),
            "fetched first page"
        );
        Ok(PagedSequence::new(
            first,
            Arc::clone(&self.fetcher),
            self.resolver.clone(),
            args,
            self.fallback.clone(),
        ))
    }

    /// List everything eagerly into one ordered collection
    pub async fn list_all(&self, args: CallArgs) -> Result<Vec<F::Item>> {
        let sequence = self.pages(args).await?;
        flatten::concat(sequence).await
    }
}
