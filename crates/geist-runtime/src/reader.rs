use std::io;
use std::path::{Path, PathBuf};

use geist_blocks::{BlockFilter, BlockId};
use geist_io::layout::region_path;
use geist_io::{ChunkSource, REGION_DIR, RegionDecoder, RegionSource, list_region_files};
use geist_world::{ChunkCoord, RegionCoord, ScanBounds, WorldCoord};
use indexmap::IndexMap;
use thiserror::Error;

use crate::session_cache::{CacheStats, SessionCache};

/// Lookup results keyed by voxel, in the order the voxels were visited.
pub type BlockMap = IndexMap<WorldCoord, BlockId>;

pub type ChunkOf<D> = <<D as RegionDecoder>::Region as RegionSource>::Chunk;

#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("region folder not found at {}", .0.display())]
    MissingRegionDir(PathBuf),
}

/// Outcome of a single-voxel lookup. `get_block` folds both failure cases
/// into air; this keeps them apart for callers that care.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlockLookup {
    Found(BlockId),
    /// Region file or chunk slot missing, or it failed to decode.
    ChunkAbsent,
    /// Chunk loaded but this voxel could not be decoded.
    Unreadable,
}

impl BlockLookup {
    pub fn into_block(self) -> BlockId {
        match self {
            BlockLookup::Found(id) => id,
            BlockLookup::ChunkAbsent | BlockLookup::Unreadable => BlockId::air(),
        }
    }

    pub fn block(&self) -> Option<&BlockId> {
        match self {
            BlockLookup::Found(id) => Some(id),
            _ => None,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, BlockLookup::Found(_))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReaderStats {
    pub regions: CacheStats,
    pub chunks: CacheStats,
}

/// Resolves world coordinates to block ids through a region cache and a chunk
/// cache. Both caches belong to the reader and grow for its whole lifetime.
///
/// Not synchronized: share across threads only behind a lock, or use one
/// reader per thread.
pub struct BlockReader<D: RegionDecoder> {
    decoder: D,
    region_dir: PathBuf,
    regions: SessionCache<RegionCoord, D::Region>,
    chunks: SessionCache<ChunkCoord, ChunkOf<D>>,
}

impl<D: RegionDecoder> BlockReader<D> {
    /// Fails when `world_root` has no `region` subdirectory.
    pub fn open(world_root: impl Into<PathBuf>, decoder: D) -> Result<Self, ReaderError> {
        let world_root = world_root.into();
        let region_dir = world_root.join(REGION_DIR);
        if !region_dir.is_dir() {
            return Err(ReaderError::MissingRegionDir(region_dir));
        }
        log::info!("initialised world reader for {}", world_root.display());
        Ok(Self {
            decoder,
            region_dir,
            regions: SessionCache::new(),
            chunks: SessionCache::new(),
        })
    }

    pub fn region_dir(&self) -> &Path {
        &self.region_dir
    }

    pub fn stats(&self) -> ReaderStats {
        ReaderStats {
            regions: self.regions.stats(),
            chunks: self.chunks.stats(),
        }
    }

    /// Region file names present on disk, sorted.
    pub fn list_region_files(&self) -> io::Result<Vec<String>> {
        list_region_files(&self.region_dir, self.decoder.extension())
    }

    pub fn resolve_region(&mut self, coord: RegionCoord) -> Option<&D::Region> {
        if self.regions.probe(&coord) {
            return self.regions.get(&coord);
        }
        let path = region_path(&self.region_dir, coord, self.decoder.extension());
        match self.decoder.open(&path) {
            Ok(region) => Some(self.regions.insert(coord, region)),
            Err(e) if e.is_missing_file() => {
                log::debug!("no region file at {}", path.display());
                None
            }
            Err(e) => {
                log::warn!("error loading region file {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Absent chunks are not remembered; the next request retries the region.
    pub fn resolve_chunk(&mut self, coord: ChunkCoord) -> Option<&ChunkOf<D>> {
        if self.chunks.probe(&coord) {
            return self.chunks.get(&coord);
        }
        let chunk = self.load_chunk(coord)?;
        Some(self.chunks.insert(coord, chunk))
    }

    fn load_chunk(&mut self, coord: ChunkCoord) -> Option<ChunkOf<D>> {
        let region = self.resolve_region(coord.region())?;
        let (slot_x, slot_z) = coord.slot();
        match region.chunk(slot_x, slot_z) {
            Ok(Some(chunk)) => Some(chunk),
            Ok(None) => {
                log::debug!("chunk ({}, {}) not generated", coord.cx, coord.cz);
                None
            }
            Err(e) => {
                log::warn!("error loading chunk at ({}, {}): {}", coord.cx, coord.cz, e);
                None
            }
        }
    }

    pub fn lookup(&mut self, coord: impl Into<WorldCoord>) -> BlockLookup {
        let coord = coord.into();
        let parts = coord.decompose();
        let Some(chunk) = self.resolve_chunk(parts.chunk) else {
            return BlockLookup::ChunkAbsent;
        };
        let local = parts.local;
        match chunk.block(local.lx, local.y, local.lz) {
            Ok(id) => BlockLookup::Found(id),
            Err(e) => {
                log::warn!(
                    "error reading block at ({}, {}, {}): {}",
                    coord.x,
                    coord.y,
                    coord.z,
                    e
                );
                BlockLookup::Unreadable
            }
        }
    }

    /// Never fails: anything that cannot be resolved reads as `minecraft:air`.
    pub fn get_block(&mut self, coord: impl Into<WorldCoord>) -> BlockId {
        self.lookup(coord).into_block()
    }

    /// Looks up every coordinate without filtering. Repeated coordinates
    /// collapse into one entry at the position of their first occurrence.
    pub fn get_multiple_blocks<I, C>(&mut self, coords: I) -> BlockMap
    where
        I: IntoIterator<Item = C>,
        C: Into<WorldCoord>,
    {
        let mut out = BlockMap::new();
        for coord in coords {
            let coord = coord.into();
            let id = self.get_block(coord);
            out.insert(coord, id);
        }
        out
    }

    /// Every non-air block in the inclusive box spanned by `a` and `b`, in
    /// x, y, z visit order. Corner order does not matter.
    pub fn scan_area(&mut self, a: impl Into<WorldCoord>, b: impl Into<WorldCoord>) -> BlockMap {
        let bounds = ScanBounds::new(a.into(), b.into());
        self.scan_bounds(bounds, &BlockFilter::new())
    }

    pub fn scan_bounds(&mut self, bounds: ScanBounds, filter: &BlockFilter) -> BlockMap {
        log::debug!(
            "scanning {} voxels from {:?} to {:?}",
            bounds.volume(),
            bounds.min,
            bounds.max
        );
        let mut out = BlockMap::new();
        for coord in bounds.iter() {
            let id = self.get_block(coord);
            if filter.keeps(&id) {
                out.insert(coord, id);
            }
        }
        out
    }
}
