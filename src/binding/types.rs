//! Binding definition types

use crate::fallback::FallbackPolicy;
use crate::http::{HttpClient, HttpPageFetcher, MarkerStyle, PageMap};
use crate::lister::Lister;
use crate::resolver::MarkerResolver;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// One declaratively-bound listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ListingBinding {
    /// Binding name
    pub name: String,
    /// Request path, with optional `{region}`/`{parent}` placeholders
    pub path: String,
    /// Dot path to the item array in the response body
    pub items_path: String,
    /// Continuation declaration; absent means single-page listings
    #[serde(default)]
    pub marker: Option<MarkerBinding>,
    /// Treat a not-found listing as empty instead of an error
    #[serde(default)]
    pub absent_as_empty: bool,
}

/// How a binding's listing continues past the first page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MarkerBinding {
    /// Continuation scheme
    pub style: MarkerStyleBinding,
    /// Dot path to the raw marker in the response body
    pub path: String,
    /// Query parameter carrying the cursor (unused for `next_url`)
    #[serde(default)]
    pub param: Option<String>,
}

/// Continuation schemes a binding can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerStyleBinding {
    /// Opaque string token
    Token,
    /// Numeric offset
    Offset,
    /// Page number
    PageNumber,
    /// Full next-page URL in the response body
    NextUrl,
}

impl ListingBinding {
    /// Turn this binding into a ready lister over the given client
    ///
    /// Items come through as raw JSON values; callers wanting typed items
    /// wire up an [`HttpPageFetcher`] themselves.
    pub fn into_lister(self, client: Arc<HttpClient>) -> Lister<HttpPageFetcher<Value>> {
        let mut map = PageMap::new(self.items_path);
        let resolver = match &self.marker {
            None => MarkerResolver::token("marker"),
            Some(marker) => {
                map = map.with_marker(marker.path.clone(), marker.style.into());
                marker.resolver()
            }
        };

        let fetcher = Arc::new(HttpPageFetcher::new(client, self.path, map));
        let mut lister = Lister::new(fetcher, resolver);
        if self.absent_as_empty {
            lister = lister.with_fallback(FallbackPolicy::on_not_found());
        }
        lister
    }
}

impl MarkerBinding {
    fn resolver(&self) -> MarkerResolver {
        let param = self.param.clone().unwrap_or_default();
        match self.style {
            MarkerStyleBinding::Token => MarkerResolver::token(param),
            MarkerStyleBinding::Offset => MarkerResolver::offset(param),
            MarkerStyleBinding::PageNumber => MarkerResolver::page_number(param),
            MarkerStyleBinding::NextUrl => MarkerResolver::next_url(),
        }
    }
}

impl From<MarkerStyleBinding> for MarkerStyle {
    fn from(style: MarkerStyleBinding) -> Self {
        match style {
            MarkerStyleBinding::Token => MarkerStyle::Token,
            MarkerStyleBinding::Offset | MarkerStyleBinding::PageNumber => MarkerStyle::Offset,
            MarkerStyleBinding::NextUrl => MarkerStyle::NextUrl,
        }
    }
}
