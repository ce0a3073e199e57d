//! Response models for the proxy API
//!
//! DTOs serialized into HTTP response bodies, and the remaining-lifetime
//! rendering used by the cache listing.

pub mod remaining_time;
pub mod responses;

// Re-export commonly used types
pub use remaining_time::{TimeFormat, UnknownTimeFormat};
pub use responses::{CacheDetail, CacheListingResponse, HealthResponse};
