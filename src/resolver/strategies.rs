//! Stock marker resolution strategies
//!
//! Each constructor builds the resolver closure for one pagination scheme.
//! All of them pass a [`Marker::Url`] straight through as an opaque next
//! call, since a provider that hands back full links has already encoded
//! the original arguments in them.

use super::NextCall;
use crate::args::CallArgs;
use crate::error::{Error, Result};
use crate::page::Marker;
use std::fmt;
use std::sync::Arc;

type ResolveFn = dyn Fn(&CallArgs, &Marker) -> Result<NextCall> + Send + Sync;

/// Per-endpoint strategy mapping a marker to the next call's arguments
///
/// Holds a closure, so custom schemes plug in without a trait impl. The
/// closure receives the original call arguments (filters intact) and must
/// return arguments for the next fetch, or a fatal error for a marker it
/// cannot interpret. Silently treating a bad marker as end-of-listing
/// would truncate "list everything" callers.
#[derive(Clone)]
pub struct MarkerResolver {
    resolve: Arc<ResolveFn>,
}

impl MarkerResolver {
    /// Create a resolver from a closure
    pub fn new<F>(resolve: F) -> Self
    where
        F: Fn(&CallArgs, &Marker) -> Result<NextCall> + Send + Sync + 'static,
    {
        Self {
            resolve: Arc::new(resolve),
        }
    }

    /// Resolve the next call from the previous page's marker
    pub fn resolve(&self, args: &CallArgs, marker: &Marker) -> Result<NextCall> {
        (self.resolve)(args, marker)
    }

    /// Token continuation: the marker value becomes `?<param>=<token>`
    ///
    /// Accepts string tokens and numeric offsets (some providers emit
    /// numeric tokens); the caller's filters survive unchanged.
    pub fn token(param: impl Into<String>) -> Self {
        let param = param.into();
        Self::new(move |args, marker| match marker {
            Marker::Token(token) => Ok(NextCall::Args(
                args.clone().with_cursor(param.clone(), token.clone()),
            )),
            Marker::Offset(offset) => Ok(NextCall::Args(
                args.clone().with_cursor(param.clone(), offset.to_string()),
            )),
            Marker::Url(url) => Ok(NextCall::Url(url.clone())),
        })
    }

    /// Offset continuation: the marker must be (or parse as) an integer
    pub fn offset(param: impl Into<String>) -> Self {
        let param = param.into();
        Self::new(move |args, marker| match marker {
            Marker::Offset(offset) => Ok(NextCall::Args(
                args.clone().with_cursor(param.clone(), offset.to_string()),
            )),
            Marker::Token(token) => {
                let offset: u64 = token.parse().map_err(|_| {
                    Error::malformed_marker(format!(
                        "offset continuation expects an integer, got {token:?}"
                    ))
                })?;
                Ok(NextCall::Args(
                    args.clone().with_cursor(param.clone(), offset.to_string()),
                ))
            }
            Marker::Url(url) => Ok(NextCall::Url(url.clone())),
        })
    }

    /// Page-number continuation: same marker shapes as [`Self::offset`],
    /// under the provider's page parameter
    pub fn page_number(param: impl Into<String>) -> Self {
        Self::offset(param)
    }

    /// Next-link continuation: the marker must be a full URL
    pub fn next_url() -> Self {
        Self::new(|_args, marker| match marker {
            Marker::Url(url) => Ok(NextCall::Url(url.clone())),
            other => Err(Error::malformed_marker(format!(
                "next-link continuation expects a URL, got {other:?}"
            ))),
        })
    }
}

impl fmt::Debug for MarkerResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkerResolver").finish_non_exhaustive()
    }
}
