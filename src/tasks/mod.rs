//! Background Tasks Module
//!
//! Contains background tasks that run during server operation.
//!
//! # Tasks
//! - Preload: warms the cache with popular cities at startup and, optionally,
//!   on a fixed interval afterwards

mod preload;

pub use preload::spawn_preload_task;
