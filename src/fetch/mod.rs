//! Fetch boundary
//!
//! The engine never issues requests itself. Each listing endpoint supplies
//! a [`PageFetcher`] that performs one request/response cycle and yields an
//! already-deserialized [`Page`]. The fetcher closes over whatever client
//! it needs (passed in at construction, never looked up from ambient
//! state) and is expected to raise a typed not-found condition the
//! fallback policy can recognize.

use crate::args::CallArgs;
use crate::error::Result;
use crate::page::Page;
use crate::resolver::NextCall;
use async_trait::async_trait;
use futures::future::BoxFuture;
use std::fmt;
use std::sync::Arc;

/// One endpoint's page fetch operations
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// The item type this endpoint lists
    type Item: Send;

    /// Fetch the first page for the given arguments
    async fn fetch_first(&self, args: &CallArgs) -> Result<Page<Self::Item>>;

    /// Fetch a subsequent page described by a resolved continuation
    async fn fetch_next(&self, call: &NextCall) -> Result<Page<Self::Item>>;
}

type FirstFn<T> = dyn Fn(CallArgs) -> BoxFuture<'static, Result<Page<T>>> + Send + Sync;
type NextFn<T> = dyn Fn(NextCall) -> BoxFuture<'static, Result<Page<T>>> + Send + Sync;

/// A [`PageFetcher`] built from two closures
///
/// For call sites and tests that do not want a named fetcher type.
pub struct FetchFn<T> {
    first: Arc<FirstFn<T>>,
    next: Arc<NextFn<T>>,
}

impl<T> Clone for FetchFn<T> {
    fn clone(&self) -> Self {
        Self {
            first: Arc::clone(&self.first),
            next: Arc::clone(&self.next),
        }
    }
}

impl<T> FetchFn<T> {
    /// Build a fetcher from a first-page closure and a next-page closure
    pub fn new<F1, Fut1, F2, Fut2>(first: F1, next: F2) -> Self
    where
        F1: Fn(CallArgs) -> Fut1 + Send + Sync + 'static,
        Fut1: std::future::Future<Output = Result<Page<T>>> + Send + 'static,
        F2: Fn(NextCall) -> Fut2 + Send + Sync + 'static,
        Fut2: std::future::Future<Output = Result<Page<T>>> + Send + 'static,
    {
        Self {
            first: Arc::new(move |args: CallArgs| -> BoxFuture<'static, Result<Page<T>>> {
                Box::pin(first(args))
            }),
            next: Arc::new(move |call: NextCall| -> BoxFuture<'static, Result<Page<T>>> {
                Box::pin(next(call))
            }),
        }
    }
}

#[async_trait]
impl<T: Send + Sync> PageFetcher for FetchFn<T> {
    type Item = T;

    async fn fetch_first(&self, args: &CallArgs) -> Result<Page<T>> {
        (self.first)(args.clone()).await
    }

    async fn fetch_next(&self, call: &NextCall) -> Result<Page<T>> {
        (self.next)(call.clone()).await
    }
}

impl<T> fmt::Debug for FetchFn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchFn").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
