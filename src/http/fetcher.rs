//! Generic JSON page fetcher
//!
//! Adapts one JSON listing endpoint into a [`PageFetcher`]: renders the
//! resource scope into the request path, sends the call arguments as query
//! parameters, and lifts the response body into a [`Page`] by extracting
//! the item array and the raw continuation marker at configured dot paths.

use super::client::HttpClient;
use crate::args::{CallArgs, ResourceScope};
use crate::error::{Error, Result};
use crate::fetch::PageFetcher;
use crate::page::{Marker, Page};
use crate::resolver::NextCall;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;

/// How the raw marker field continues the listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStyle {
    /// Opaque string token
    Token,
    /// Numeric offset (or page number)
    Offset,
    /// Full next-page URL (absolute, or relative to the client base URL)
    NextUrl,
}

/// Where a page lives in the response body
#[derive(Debug, Clone)]
pub struct PageMap {
    items_path: String,
    marker_path: Option<String>,
    style: MarkerStyle,
}

impl PageMap {
    /// Map a response whose items live at the given dot path
    ///
    /// Without a marker path every response is a terminal page.
    pub fn new(items_path: impl Into<String>) -> Self {
        Self {
            items_path: items_path.into(),
            marker_path: None,
            style: MarkerStyle::Token,
        }
    }

    /// Read the continuation marker at the given dot path
    #[must_use]
    pub fn with_marker(mut self, path: impl Into<String>, style: MarkerStyle) -> Self {
        self.marker_path = Some(path.into());
        self.style = style;
        self
    }

    /// Lift a JSON response body into a page
    ///
    /// A missing item node is an empty page (providers omit the array when
    /// a listing is empty); a missing, null or empty marker field ends the
    /// sequence. A marker field of the wrong shape is a fatal
    /// [`Error::MalformedMarker`], never treated as end-of-listing.
    pub fn parse_page<T: DeserializeOwned>(&self, body: &Value) -> Result<Page<T>> {
        let items = match extract_path(body, &self.items_path) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(raw)) => raw
                .iter()
                .map(|item| serde_json::from_value(item.clone()))
                .collect::<std::result::Result<Vec<T>, _>>()?,
            Some(other) => {
                return Err(Error::decode(format!(
                    "expected an array at {:?}, got {other}",
                    self.items_path
                )))
            }
        };

        let marker = match &self.marker_path {
            None => None,
            Some(path) => self.parse_marker(extract_path(body, path), path)?,
        };

        Ok(Page::new(items, marker))
    }

    fn parse_marker(&self, raw: Option<&Value>, path: &str) -> Result<Option<Marker>> {
        let raw = match raw {
            None | Some(Value::Null) => return Ok(None),
            Some(value) => value,
        };

        match (self.style, raw) {
            (_, Value::String(s)) if s.is_empty() => Ok(None),
            (MarkerStyle::Token, Value::String(s)) => Ok(Some(Marker::token(s.clone()))),
            (MarkerStyle::Token, Value::Number(n)) => Ok(Some(Marker::token(n.to_string()))),
            (MarkerStyle::Offset, Value::Number(n)) => n.as_u64().map(Marker::offset).map(Some).ok_or_else(|| {
                Error::malformed_marker(format!("marker at {path:?} is not a non-negative integer: {n}"))
            }),
            (MarkerStyle::Offset, Value::String(s)) => s
                .parse()
                .map(Marker::offset)
                .map(Some)
                .map_err(|_| {
                    Error::malformed_marker(format!("marker at {path:?} does not parse as an offset: {s:?}"))
                }),
            (MarkerStyle::NextUrl, Value::String(s)) => {
                // Relative links are joined against the client base URL at
                // fetch time; absolute ones must at least parse.
                if s.starts_with("http://") || s.starts_with("https://") {
                    url::Url::parse(s).map_err(|e| {
                        Error::malformed_marker(format!(
                            "next link at {path:?} is not a valid URL: {e}"
                        ))
                    })?;
                }
                Ok(Some(Marker::url(s.clone())))
            }
            (style, other) => Err(Error::malformed_marker(format!(
                "marker at {path:?} has unusable shape {other} for {style:?} continuation"
            ))),
        }
    }
}

/// [`PageFetcher`] over one JSON listing endpoint
///
/// The path template may address the resource scope with `{region}` and
/// `{parent}` placeholders. A [`NextCall::Url`] continuation is fetched
/// as-is; the path template and call arguments are not reapplied.
pub struct HttpPageFetcher<T> {
    client: Arc<HttpClient>,
    path: String,
    map: PageMap,
    _item: PhantomData<fn() -> T>,
}

impl<T> HttpPageFetcher<T> {
    /// Bind a client, a path template, and a response page map
    pub fn new(client: Arc<HttpClient>, path: impl Into<String>, map: PageMap) -> Self {
        Self {
            client,
            path: path.into(),
            map,
            _item: PhantomData,
        }
    }
}

impl<T: DeserializeOwned + Send + Sync> HttpPageFetcher<T> {
    async fn fetch_by_args(&self, args: &CallArgs) -> Result<Page<T>> {
        let path = render_path(&self.path, args.scope())?;
        let body = self.client.get_json(&path, &args.to_query()).await?;
        self.map.parse_page(&body)
    }
}

#[async_trait]
impl<T: DeserializeOwned + Send + Sync> PageFetcher for HttpPageFetcher<T> {
    type Item = T;

    async fn fetch_first(&self, args: &CallArgs) -> Result<Page<T>> {
        self.fetch_by_args(args).await
    }

    async fn fetch_next(&self, call: &NextCall) -> Result<Page<T>> {
        match call {
            NextCall::Args(args) => self.fetch_by_args(args).await,
            NextCall::Url(url) => {
                let body = self.client.get_json(url, &[]).await?;
                self.map.parse_page(&body)
            }
        }
    }
}

impl<T> std::fmt::Debug for HttpPageFetcher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpPageFetcher")
            .field("path", &self.path)
            .field("map", &self.map)
            .finish_non_exhaustive()
    }
}

/// Render `{region}` and `{parent}` placeholders from the resource scope
pub(super) fn render_path(template: &str, scope: &ResourceScope) -> Result<String> {
    let mut path = template.to_string();

    if path.contains("{region}") {
        let region = scope.region().ok_or_else(|| {
            Error::invalid_arguments(format!("path {template:?} expects a region"))
        })?;
        path = path.replace("{region}", region);
    }
    if path.contains("{parent}") {
        let parent = scope.parent().ok_or_else(|| {
            Error::invalid_arguments(format!("path {template:?} expects a parent resource id"))
        })?;
        path = path.replace("{parent}", parent);
    }

    Ok(path)
}

/// Walk a dot path (optionally `$.`-prefixed) through a JSON object tree
pub(super) fn extract_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let path = path.strip_prefix("$.").unwrap_or(path);
    let mut current = value;
    for part in path.split('.') {
        current = current.as_object()?.get(part)?;
    }
    Some(current)
}
