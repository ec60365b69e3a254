//! Paged sequence
//!
//! The lazy, forward-only cursor chaining page fetches through a marker
//! resolver. A sequence is built from an already-fetched first page and
//! consumes itself as it advances; re-iterating means reissuing the
//! original first-page call (see [`crate::Lister`], the factory for that).

use crate::args::CallArgs;
use crate::error::{Error, Result};
use crate::fallback::FallbackPolicy;
use crate::fetch::PageFetcher;
use crate::page::Page;
use crate::resolver::MarkerResolver;
use std::mem;
use std::sync::Arc;
use tracing::debug;

/// Iteration state of a paged sequence
///
/// `Fetching` is observable only when a `next()` future was dropped while
/// its page fetch was in flight; a live sequence is otherwise always
/// `Ready` or `Exhausted`.
enum State<T> {
    Ready(Page<T>),
    Fetching,
    Exhausted,
}

/// Lazy, forward-only cursor over the pages of one listing call
///
/// Not restartable: the original call arguments are owned by the sequence
/// and each page is discarded once yielded. `&mut self` on [`next`] keeps
/// concurrent consumption of one sequence unrepresentable; callers that
/// need parallel listings create independent sequences.
///
/// [`next`]: PagedSequence::next
pub struct PagedSequence<F: PageFetcher> {
    fetcher: Arc<F>,
    resolver: MarkerResolver,
    args: CallArgs,
    fallback: FallbackPolicy,
    state: State<F::Item>,
    pages_yielded: u64,
}

impl<F: PageFetcher> PagedSequence<F> {
    /// Build a sequence from an already-fetched first page
    ///
    /// The sequence starts `Ready` if the first page has items or a
    /// marker, and `Exhausted` if it is both empty and markerless.
    pub fn new(
        first: Page<F::Item>,
        fetcher: Arc<F>,
        resolver: MarkerResolver,
        args: CallArgs,
        fallback: FallbackPolicy,
    ) -> Self {
        let state = if first.is_empty() && first.is_terminal() {
            State::Exhausted
        } else {
            State::Ready(first)
        };
        Self {
            fetcher,
            resolver,
            args,
            fallback,
            state,
            pages_yielded: 0,
        }
    }

    /// Check whether another `next()` call will yield a page
    pub fn has_next(&self) -> bool {
        matches!(self.state, State::Ready(_))
    }

    /// Number of pages yielded so far
    pub fn pages_yielded(&self) -> u64 {
        self.pages_yielded
    }

    /// The original call arguments this sequence was built from
    pub fn args(&self) -> &CallArgs {
        &self.args
    }

    /// Yield the current page's items and advance to the next page
    ///
    /// If the current page carried a marker, the continuation is resolved
    /// against the original arguments and the next page is fetched through
    /// this sequence's fallback policy before returning. Calling `next()`
    /// on an exhausted sequence is a protocol error, never silent empty
    /// data.
    pub async fn next(&mut self) -> Result<Vec<F::Item>> {
        let page = match mem::replace(&mut self.state, State::Fetching) {
            State::Ready(page) => page,
            State::Exhausted => {
                self.state = State::Exhausted;
                return Err(Error::SequenceExhausted);
            }
            State::Fetching => return Err(Error::FetchInFlight),
        };

        let (items, marker) = page.into_parts();

        match marker {
            None => {
                self.state = State::Exhausted;
            }
            Some(marker) => {
                let call = self.resolver.resolve(&self.args, &marker)?;
                let fetched = self
                    .fallback
                    .empty_page_on_absence(self.fetcher.fetch_next(&call).await)?;
                debug!(
                    items = fetched.len(),
                    terminal = fetched.is_terminal(),
                    "fetched next page"
                );
                self.state = if fetched.is_empty() && fetched.is_terminal() {
                    State::Exhausted
                } else {
                    State::Ready(fetched)
                };
            }
        }

        self.pages_yielded += 1;
        Ok(items)
    }

    /// Adapt the sequence into a `futures::Stream` of per-page item batches
    pub fn into_stream(self) -> impl futures::Stream<Item = Result<Vec<F::Item>>> {
        futures::stream::try_unfold(self, |mut seq| async move {
            if seq.has_next() {
                let items = seq.next().await?;
                Ok(Some((items, seq)))
            } else {
                Ok(None)
            }
        })
    }
}

impl<F: PageFetcher> std::fmt::Debug for PagedSequence<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match self.state {
            State::Ready(_) => "Ready",
            State::Fetching => "Fetching",
            State::Exhausted => "Exhausted",
        };
        f.debug_struct("PagedSequence")
            .field("state", &state)
            .field("pages_yielded", &self.pages_yielded)
            .finish_non_exhaustive()
    }
}
