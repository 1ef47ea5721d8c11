use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed region file {}: {reason}", path.display())]
    Region { path: PathBuf, reason: String },
    #[error("malformed chunk in slot ({slot_x}, {slot_z}): {reason}")]
    Chunk { slot_x: u8, slot_z: u8, reason: String },
    #[error("unreadable block at local ({lx}, {y}, {lz}): {reason}")]
    Block {
        lx: u8,
        y: i32,
        lz: u8,
        reason: String,
    },
}

impl DecodeError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Region file does not exist; the normal state for unexplored parts of a world.
    pub fn is_missing_file(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_recognized() {
        let e = DecodeError::io("r.0.0.mca", io::Error::from(io::ErrorKind::NotFound));
        assert!(e.is_missing_file());
        assert_eq!(e.to_string(), "failed to read r.0.0.mca: entity not found");
        let e = DecodeError::io("r.0.0.mca", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(!e.is_missing_file());
    }

    #[test]
    fn messages_name_the_location() {
        let e = DecodeError::Chunk {
            slot_x: 3,
            slot_z: 31,
            reason: "bad nbt".into(),
        };
        assert_eq!(e.to_string(), "malformed chunk in slot (3, 31): bad nbt");
    }
}
