//! Call argument types

use std::collections::BTreeMap;

/// The resource collection a listing call addresses
///
/// Consumed by URL composition (region and parent land in the request
/// path), never rendered into the query string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResourceScope {
    region: Option<String>,
    parent: Option<String>,
}

impl ResourceScope {
    /// Create an empty scope
    pub fn new() -> Self {
        Self::default()
    }

    /// The region identifier, if any
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// The parent resource id, if any
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Check if the scope carries nothing
    pub fn is_empty(&self) -> bool {
        self.region.is_none() && self.parent.is_none()
    }
}

/// The pagination cursor of one call: a query parameter name and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    param: String,
    value: String,
}

impl Cursor {
    /// Create a cursor
    pub fn new(param: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            value: value.into(),
        }
    }

    /// The query parameter name
    pub fn param(&self) -> &str {
        &self.param
    }

    /// The cursor value
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Immutable arguments for one listing call
///
/// Filters are caller-supplied option pairs, passed through opaquely and
/// preserved across every page of a sequence. The cursor is the only part
/// that changes page to page, and changing it produces a new value via
/// [`CallArgs::with_cursor`] rather than mutating this one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CallArgs {
    scope: ResourceScope,
    filters: BTreeMap<String, String>,
    cursor: Option<Cursor>,
}

impl CallArgs {
    /// Create empty call arguments
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy with the given region
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.scope.region = Some(region.into());
        self
    }

    /// Return a copy with the given parent resource id
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.scope.parent = Some(parent.into());
        self
    }

    /// Return a copy with a caller filter/sort option added
    #[must_use]
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// Return a copy with the conventional `limit` option set
    #[must_use]
    pub fn with_limit(self, limit: u32) -> Self {
        self.with_filter("limit", limit.to_string())
    }

    /// Return a copy positioned at the given pagination cursor
    ///
    /// Filters and scope are untouched; only the cursor slot is replaced.
    /// This is how a marker resolver advances a call to the next page.
    #[must_use]
    pub fn with_cursor(mut self, param: impl Into<String>, value: impl Into<String>) -> Self {
        self.cursor = Some(Cursor::new(param, value));
        self
    }

    /// The resource scope
    pub fn scope(&self) -> &ResourceScope {
        &self.scope
    }

    /// Look up a caller filter option
    pub fn filter(&self, key: &str) -> Option<&str> {
        self.filters.get(key).map(String::as_str)
    }

    /// The pagination cursor, if positioned
    pub fn cursor(&self) -> Option<&Cursor> {
        self.cursor.as_ref()
    }

    /// Check if the arguments carry nothing at all
    pub fn is_empty(&self) -> bool {
        self.scope.is_empty() && self.filters.is_empty() && self.cursor.is_none()
    }

    /// Render the query string pairs for this call
    ///
    /// Filters first (in stable key order), then the cursor. When the
    /// caller supplied an explicit option under the same key the resolver
    /// writes its cursor to, the marker-derived cursor wins: two cursor
    /// styles on one request would be a caller error, and the continuation
    /// is the one that keeps the listing complete.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .filters
            .iter()
            .filter(|(key, _)| {
                self.cursor
                    .as_ref()
                    .map_or(true, |cursor| cursor.param() != key.as_str())
            })
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        if let Some(cursor) = &self.cursor {
            pairs.push((cursor.param().to_string(), cursor.value().to_string()));
        }

        pairs
    }
}
