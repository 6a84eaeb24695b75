//! Bulk geographic loading
//!
//! Streams [`MapRecord`]s from a [`MapSource`] into a [`MapGraph`](crate::MapGraph)
//! and finalizes it for searching.

mod builder;
mod config;
mod source;

pub use builder::load_map;
pub use config::LoadConfig;
pub use source::{MapRecord, MapSource, MemorySource};
