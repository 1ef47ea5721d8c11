//! World storage access: the decoder contract, region file layout, and the
//! Anvil adapter used for real saves.
#![forbid(unsafe_code)]

#[cfg(feature = "anvil")]
pub mod anvil;
pub mod error;
pub mod layout;
pub mod source;

#[cfg(feature = "anvil")]
pub use anvil::{AnvilChunk, AnvilDecoder, AnvilRegion};
pub use error::DecodeError;
pub use layout::{REGION_DIR, list_region_files, region_file_name};
pub use source::{ChunkSource, RegionDecoder, RegionSource};
