//! Lookup Module
//!
//! Read-through caching of upstream lookups keyed by id.

mod result;
mod service;

pub use result::{generic_upstream_error, LookupResult};
pub use service::{LookupService, SharedCache};
