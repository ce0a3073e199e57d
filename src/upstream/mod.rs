//! Upstream Module
//!
//! HTTP access to the single external lookup API.

mod client;

pub use client::{UpstreamClient, UpstreamResponse};

/// Upstream base used when none is configured
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://yt-dl-test.vercel.app/dl/";

/// Base URL on a loopback port that was just released, so connections are
/// refused instead of hanging.
#[cfg(test)]
pub(crate) fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/dl/")
}
