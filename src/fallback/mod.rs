//! Fallback policy
//!
//! Wraps a single fetch outcome and converts designated failure conditions
//! (canonically HTTP 404) into a clean empty result instead of an error.
//! List call sites and single-item call sites have different correct empty
//! representations (an empty terminal page versus `None`), so the two are
//! separate operations and must not be conflated.

use crate::error::{Error, Result};
use crate::page::Page;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

type AbsorbFn = dyn Fn(&Error) -> bool + Send + Sync;

/// Decides which fetch failures are absorbed as clean absence
///
/// Applies to exactly one fetch at a time (first page or any subsequent
/// page); everything the predicate rejects propagates unchanged. The
/// engine performs no other error recovery.
#[derive(Clone)]
pub struct FallbackPolicy {
    absorb: Option<Arc<AbsorbFn>>,
}

impl FallbackPolicy {
    /// Never absorb anything; every error propagates
    pub fn propagate() -> Self {
        Self { absorb: None }
    }

    /// Absorb the recoverable-absence condition ([`Error::is_not_found`])
    pub fn on_not_found() -> Self {
        Self::on(Error::is_not_found)
    }

    /// Absorb errors matching a custom predicate
    pub fn on<F>(predicate: F) -> Self
    where
        F: Fn(&Error) -> bool + Send + Sync + 'static,
    {
        Self {
            absorb: Some(Arc::new(predicate)),
        }
    }

    /// Check whether this policy absorbs the given error
    pub fn absorbs(&self, error: &Error) -> bool {
        self.absorb.as_ref().is_some_and(|pred| pred(error))
    }

    /// List call sites: an absorbed failure becomes an empty terminal page
    pub fn empty_page_on_absence<T>(&self, result: Result<Page<T>>) -> Result<Page<T>> {
        match result {
            Err(err) if self.absorbs(&err) => {
                warn!(error = %err, "listing fetch absorbed as empty page");
                Ok(Page::empty())
            }
            other => other,
        }
    }

    /// Single-item call sites: an absorbed failure becomes `None`
    pub fn none_on_absence<T>(&self, result: Result<T>) -> Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(err) if self.absorbs(&err) => {
                warn!(error = %err, "single-item fetch absorbed as absent");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self::propagate()
    }
}

impl fmt::Debug for FallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FallbackPolicy")
            .field("absorbs", &self.absorb.is_some())
            .finish()
    }
}
