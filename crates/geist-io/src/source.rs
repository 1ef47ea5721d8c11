//! Capabilities the block reader needs from a concrete world-format decoder.

use std::path::Path;

use geist_blocks::BlockId;

use crate::error::DecodeError;

/// Opens region files. One region covers a 32x32 grid of chunk columns.
pub trait RegionDecoder {
    type Region: RegionSource;

    /// File extension of region files, without the dot.
    fn extension(&self) -> &str;

    /// Decodes the region at `path`. The file must not stay open after return.
    fn open(&self, path: &Path) -> Result<Self::Region, DecodeError>;
}

/// A decoded region file.
pub trait RegionSource {
    type Chunk: ChunkSource;

    /// Chunk stored in slot `(slot_x, slot_z)`, both in `[0, 32)`.
    /// `Ok(None)` means the slot was never generated.
    fn chunk(&self, slot_x: u8, slot_z: u8) -> Result<Option<Self::Chunk>, DecodeError>;
}

/// A decoded chunk column.
pub trait ChunkSource {
    /// Block at chunk-local `(lx, y, lz)`; `lx`/`lz` in `[0, 16)`, `y` in world space.
    fn block(&self, lx: u8, y: i32, lz: u8) -> Result<BlockId, DecodeError>;
}
