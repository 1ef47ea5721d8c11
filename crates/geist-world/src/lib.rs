//! World addressing: voxel, chunk, and region coordinates.
#![forbid(unsafe_code)]

pub mod bounds;
pub mod coords;

pub use bounds::ScanBounds;
pub use coords::{
    CHUNK_SHIFT, CHUNK_WIDTH, ChunkCoord, Decomposed, LocalOffset, REGION_CHUNKS, RegionCoord,
    WorldCoord,
};
