//! Anvil (`.mca`) saves, decoded with `fastanvil`.

use std::fs;
use std::io::Cursor;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use fastanvil::{Chunk as _, JavaChunk, Region};
use geist_blocks::BlockId;

use crate::error::DecodeError;
use crate::source::{ChunkSource, RegionDecoder, RegionSource};

pub const ANVIL_EXTENSION: &str = "mca";

#[derive(Clone, Copy, Debug, Default)]
pub struct AnvilDecoder;

impl AnvilDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl RegionDecoder for AnvilDecoder {
    type Region = AnvilRegion;

    fn extension(&self) -> &str {
        ANVIL_EXTENSION
    }

    fn open(&self, path: &Path) -> Result<AnvilRegion, DecodeError> {
        // Whole file is read up front; the descriptor is closed before decoding.
        let bytes = fs::read(path).map_err(|e| DecodeError::io(path, e))?;
        let region = AnvilRegion {
            path: path.to_path_buf(),
            bytes,
        };
        region.header()?;
        log::debug!("opened region {:?} ({} bytes)", region.path, region.bytes.len());
        Ok(region)
    }
}

/// In-memory copy of one region file.
pub struct AnvilRegion {
    path: PathBuf,
    bytes: Vec<u8>,
}

impl AnvilRegion {
    fn header(&self) -> Result<Region<Cursor<&[u8]>>, DecodeError> {
        Region::from_stream(Cursor::new(self.bytes.as_slice())).map_err(|e| DecodeError::Region {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }
}

impl RegionSource for AnvilRegion {
    type Chunk = AnvilChunk;

    fn chunk(&self, slot_x: u8, slot_z: u8) -> Result<Option<AnvilChunk>, DecodeError> {
        let mut region = self.header()?;
        let data = region
            .read_chunk(usize::from(slot_x), usize::from(slot_z))
            .map_err(|e| DecodeError::Chunk {
                slot_x,
                slot_z,
                reason: e.to_string(),
            })?;
        let Some(data) = data else {
            return Ok(None);
        };
        let inner = JavaChunk::from_bytes(&data).map_err(|e| DecodeError::Chunk {
            slot_x,
            slot_z,
            reason: e.to_string(),
        })?;
        Ok(Some(AnvilChunk { inner }))
    }
}

pub struct AnvilChunk {
    inner: JavaChunk,
}

impl ChunkSource for AnvilChunk {
    fn block(&self, lx: u8, y: i32, lz: u8) -> Result<BlockId, DecodeError> {
        if lx >= 16 || lz >= 16 {
            return Err(DecodeError::Block {
                lx,
                y,
                lz,
                reason: "local coordinate outside chunk".into(),
            });
        }
        // fastanvil indexes packed section data without bounds checks, so a
        // short data array panics instead of erroring.
        let found = panic::catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .block(usize::from(lx), y as isize, usize::from(lz))
                .map(|b| BlockId::from(b.name()))
        }))
        .map_err(|_| DecodeError::Block {
            lx,
            y,
            lz,
            reason: "malformed section data".into(),
        })?;
        // Sections that were never written hold no palette; they read as air.
        Ok(found.unwrap_or_else(BlockId::air))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fastnbt::LongArray;
    use serde::Serialize;

    #[derive(Serialize)]
    struct ChunkNbt {
        #[serde(rename = "DataVersion")]
        data_version: i32,
        #[serde(rename = "Status")]
        status: &'static str,
        sections: Vec<SectionNbt>,
    }

    #[derive(Serialize)]
    struct SectionNbt {
        #[serde(rename = "Y")]
        y: i8,
        block_states: StatesNbt,
    }

    #[derive(Serialize)]
    struct StatesNbt {
        palette: Vec<PaletteEntry>,
        #[serde(skip_serializing_if = "Option::is_none")]
        data: Option<LongArray>,
    }

    #[derive(Serialize)]
    struct PaletteEntry {
        #[serde(rename = "Name")]
        name: &'static str,
    }

    fn chunk_with(section_y: i8, palette: &[&'static str], data: Option<Vec<i64>>) -> AnvilChunk {
        let nbt = ChunkNbt {
            data_version: 3465,
            status: "minecraft:full",
            sections: vec![SectionNbt {
                y: section_y,
                block_states: StatesNbt {
                    palette: palette.iter().map(|&name| PaletteEntry { name }).collect(),
                    data: data.map(LongArray::new),
                },
            }],
        };
        let bytes = fastnbt::to_bytes(&nbt).unwrap();
        AnvilChunk {
            inner: JavaChunk::from_bytes(&bytes).unwrap(),
        }
    }

    #[test]
    fn reads_names_from_packed_palette() {
        // 2-entry palette packs at 4 bits: 16 blocks per long, 256 longs.
        let mut data = vec![0i64; 256];
        data[0] = 1;
        let chunk = chunk_with(0, &["minecraft:air", "minecraft:stone"], Some(data));

        assert_eq!(chunk.block(0, 0, 0).unwrap(), "minecraft:stone");
        assert_eq!(chunk.block(1, 0, 0).unwrap(), "minecraft:air");
        assert_eq!(chunk.block(0, 15, 15).unwrap(), "minecraft:air");
    }

    #[test]
    fn single_entry_palette_fills_section() {
        let chunk = chunk_with(-1, &["minecraft:deepslate"], None);
        assert_eq!(chunk.block(0, -16, 0).unwrap(), "minecraft:deepslate");
        assert_eq!(chunk.block(15, -1, 15).unwrap(), "minecraft:deepslate");
    }

    #[test]
    fn y_without_section_reads_as_air() {
        let chunk = chunk_with(0, &["minecraft:stone"], None);
        assert_eq!(chunk.block(3, 100, 3).unwrap(), BlockId::air());
        assert_eq!(chunk.block(3, -40, 3).unwrap(), BlockId::air());
    }

    #[test]
    fn short_data_array_is_a_block_error() {
        let chunk = chunk_with(
            0,
            &["minecraft:stone", "minecraft:dirt"],
            Some(vec![0]),
        );
        // The first long still covers y=0.
        assert_eq!(chunk.block(0, 0, 0).unwrap(), "minecraft:stone");
        let err = chunk.block(0, 15, 0).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::Block { lx: 0, y: 15, lz: 0, ref reason } if reason == "malformed section data"
        ));
    }

    #[test]
    fn local_coordinate_outside_chunk_is_rejected() {
        let chunk = chunk_with(0, &["minecraft:stone"], None);
        assert!(chunk.block(16, 0, 0).is_err());
        assert!(chunk.block(0, 0, 16).is_err());
    }
}
