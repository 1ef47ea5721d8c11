use serde::{Deserialize, Serialize};

/// Horizontal edge length of a chunk column, in blocks.
pub const CHUNK_WIDTH: i32 = 16;
pub const CHUNK_SHIFT: u32 = 4;
/// Edge length of a region, in chunks.
pub const REGION_CHUNKS: i32 = 32;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WorldCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl WorldCoord {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Chunk column containing this voxel. Arithmetic shift floors toward
    /// negative infinity, so `x = -1` lands in chunk `-1`.
    #[inline]
    pub const fn chunk(self) -> ChunkCoord {
        ChunkCoord::new(self.x >> CHUNK_SHIFT, self.z >> CHUNK_SHIFT)
    }

    #[inline]
    pub const fn local(self) -> LocalOffset {
        LocalOffset {
            lx: (self.x & (CHUNK_WIDTH - 1)) as u8,
            y: self.y,
            lz: (self.z & (CHUNK_WIDTH - 1)) as u8,
        }
    }

    #[inline]
    pub const fn decompose(self) -> Decomposed {
        let chunk = self.chunk();
        Decomposed {
            chunk,
            region: chunk.region(),
            local: self.local(),
        }
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }
}

impl From<(i32, i32, i32)> for WorldCoord {
    fn from(value: (i32, i32, i32)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<WorldCoord> for (i32, i32, i32) {
    fn from(value: WorldCoord) -> Self {
        (value.x, value.y, value.z)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cz: i32,
}

impl ChunkCoord {
    #[inline]
    pub const fn new(cx: i32, cz: i32) -> Self {
        Self { cx, cz }
    }

    #[inline]
    pub const fn region(self) -> RegionCoord {
        RegionCoord::new(
            self.cx.div_euclid(REGION_CHUNKS),
            self.cz.div_euclid(REGION_CHUNKS),
        )
    }

    /// Position of this chunk inside its region file, both in `[0, 32)`.
    #[inline]
    pub const fn slot(self) -> (u8, u8) {
        (
            self.cx.rem_euclid(REGION_CHUNKS) as u8,
            self.cz.rem_euclid(REGION_CHUNKS) as u8,
        )
    }

    /// World coordinate of the chunk's minimum corner at height `y`.
    #[inline]
    pub const fn origin(self, y: i32) -> WorldCoord {
        WorldCoord::new(self.cx << CHUNK_SHIFT, y, self.cz << CHUNK_SHIFT)
    }
}

impl From<(i32, i32)> for ChunkCoord {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0, value.1)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RegionCoord {
    pub rx: i32,
    pub rz: i32,
}

impl RegionCoord {
    #[inline]
    pub const fn new(rx: i32, rz: i32) -> Self {
        Self { rx, rz }
    }

    #[inline]
    pub const fn chunk_at(self, slot_x: u8, slot_z: u8) -> ChunkCoord {
        ChunkCoord::new(
            self.rx * REGION_CHUNKS + slot_x as i32,
            self.rz * REGION_CHUNKS + slot_z as i32,
        )
    }
}

/// Block position relative to its chunk column; `y` is not wrapped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LocalOffset {
    pub lx: u8,
    pub y: i32,
    pub lz: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decomposed {
    pub chunk: ChunkCoord,
    pub region: RegionCoord,
    pub local: LocalOffset,
}

impl Decomposed {
    #[inline]
    pub fn recompose(&self) -> WorldCoord {
        let origin = self.chunk.origin(self.local.y);
        origin.offset(self.local.lx as i32, 0, self.local.lz as i32)
    }
}
