//! Cached block reader over region-backed worlds.
#![forbid(unsafe_code)]

mod reader;
mod session_cache;

pub use reader::{BlockLookup, BlockMap, BlockReader, ChunkOf, ReaderError, ReaderStats};
pub use session_cache::{CacheStats, SessionCache};
