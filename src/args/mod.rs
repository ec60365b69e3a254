//! Call arguments
//!
//! [`CallArgs`] is the immutable snapshot of everything needed to reissue a
//! listing call for the same logical resource: the resource scope, the
//! caller's filter/sort options, and the pagination cursor. It is captured
//! once when a paged sequence starts; every subsequent page fetch gets a
//! copy with an updated cursor, never a mutation.

mod types;

pub use types::{CallArgs, Cursor, ResourceScope};
