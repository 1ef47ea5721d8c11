//! Block identifiers and emptiness filtering.
#![forbid(unsafe_code)]

pub mod filter;
pub mod types;

pub use filter::BlockFilter;
pub use types::{AIR, BlockId, EMPTY_BLOCK_NAMES, is_empty_name};
