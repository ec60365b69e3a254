//! # pagewalk
//!
//! A protocol-agnostic pagination engine for REST API clients.
//!
//! Cloud providers agree that big listings come back one page at a time,
//! and on nothing else: continuation is an opaque token, a numeric offset,
//! a page number, or a full next-page URL, depending on the endpoint.
//! pagewalk turns any of them into one lazy, resumable sequence of items
//! while preserving the original call's arguments (region, parent
//! resource, filter options) across every subsequent page fetch.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagewalk::{CallArgs, Lister, MarkerResolver, Result};
//! use pagewalk::http::{HttpClient, HttpClientConfig, HttpPageFetcher, MarkerStyle, PageMap};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Arc::new(HttpClient::with_config(
//!         HttpClientConfig::builder()
//!             .base_url("https://api.example.com")
//!             .build(),
//!     ));
//!
//!     let fetcher = Arc::new(HttpPageFetcher::<serde_json::Value>::new(
//!         client,
//!         "/v2/{region}/servers",
//!         PageMap::new("servers").with_marker("next_marker", MarkerStyle::Token),
//!     ));
//!     let servers = Lister::new(fetcher, MarkerResolver::token("marker"));
//!
//!     // One page with explicit pagination options...
//!     let args = CallArgs::new().with_region("us-east-1").with_limit(100);
//!     let page = servers.first_page(&args).await?;
//!
//!     // ...or everything, across however many pages it takes.
//!     let all = servers.list_all(args).await?;
//!     println!("{} servers ({} on the first page)", all.len(), page.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Lister (per endpoint)                    │
//! │  first_page(args) → Page     pages(args) → PagedSequence        │
//! │  list_all(args) → Vec<T>                                        │
//! └─────────────────────────────────────────────────────────────────┘
//!                │
//! ┌──────────────┬──────────────┬───────────────┬──────────────────┐
//! │    Page      │   Resolver   │   Sequence    │     Fallback     │
//! ├──────────────┼──────────────┼───────────────┼──────────────────┤
//! │ items        │ Token        │ Ready         │ propagate        │
//! │ + marker     │ Offset       │ Fetching      │ on_not_found     │
//! │              │ PageNumber   │ Exhausted     │   list → empty   │
//! │              │ NextUrl      │               │   item → None    │
//! └──────────────┴──────────────┴───────────────┴──────────────────┘
//!                │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  PageFetcher (transport boundary): FetchFn / HttpPageFetcher    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the engine
pub mod error;

/// Page and marker model
pub mod page;

/// Immutable call arguments
pub mod args;

/// Marker resolution strategies
pub mod resolver;

/// Fallback policy for recoverable absence
pub mod fallback;

/// The fetch boundary supplied per endpoint
pub mod fetch;

/// The paged sequence state machine
pub mod sequence;

/// Eager flattening of a paged sequence
pub mod flatten;

/// Caller-facing listing API
pub mod lister;

/// HTTP transport adapter
pub mod http;

/// Declarative YAML listing bindings
pub mod binding;

// ============================================================================
// Re-exports
// ============================================================================

pub use args::{CallArgs, Cursor, ResourceScope};
pub use binding::{load_binding, load_binding_from_str, ListingBinding};
pub use error::{Error, Result};
pub use fallback::FallbackPolicy;
pub use fetch::{FetchFn, PageFetcher};
pub use flatten::concat;
pub use lister::Lister;
pub use page::{Marker, Page};
pub use resolver::{MarkerResolver, NextCall};
pub use sequence::PagedSequence;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
