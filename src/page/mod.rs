//! Page and marker model
//!
//! A [`Page`] is one batch of items from one listing call, carrying the
//! optional continuation [`Marker`] the provider handed back. A page with
//! no marker is the last page of its sequence.

mod types;

pub use types::{Marker, Page};
