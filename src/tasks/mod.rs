//! Background Tasks Module
//!
//! # Tasks
//! - Expired entry purge: runs only when `CLEANUP_INTERVAL` is non-zero;
//!   otherwise expiry stays lazy

mod cleanup;

pub use cleanup::spawn_cleanup_task;
