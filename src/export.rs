//! Writes scan results as scaled position lists.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use geist_world::WorldCoord;
use sha2::{Digest, Sha256};

/// One exported position: axes reordered to `z x y`, each multiplied by `scale`.
///
/// Any `i32 * i64` product fits in an `i128`, so no scale from config can overflow.
pub fn format_position(c: WorldCoord, scale: i64) -> String {
    let s = |v: i32| i128::from(v) * i128::from(scale);
    format!("{} {} {}", s(c.z), s(c.x), s(c.y))
}

/// `<prefix><8 hex digits>.txt`, stable for a given scan tag.
pub fn output_file_name(prefix: &str, tag: &str) -> String {
    let digest = Sha256::digest(tag.as_bytes());
    let hex: String = digest[..4].iter().map(|b| format!("{b:02x}")).collect();
    format!("{prefix}{hex}.txt")
}

pub fn write_positions<W, I>(mut out: W, coords: I, scale: i64) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = WorldCoord>,
{
    let mut n = 0;
    for c in coords {
        writeln!(out, "{}", format_position(c, scale))?;
        n += 1;
    }
    out.flush()?;
    Ok(n)
}

pub fn export_to_dir<I>(dir: &Path, file_name: &str, coords: I, scale: i64) -> io::Result<PathBuf>
where
    I: IntoIterator<Item = WorldCoord>,
{
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    let n = write_positions(BufWriter::new(File::create(&path)?), coords, scale)?;
    log::debug!("wrote {} positions to {}", n, path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes_are_reordered_and_scaled() {
        assert_eq!(format_position(WorldCoord::new(1, 2, 3), 48), "144 48 96");
        assert_eq!(format_position(WorldCoord::new(-1, 0, 5), 48), "240 -48 0");
    }

    #[test]
    fn scale_does_not_overflow() {
        let line = format_position(WorldCoord::new(i32::MAX, 0, i32::MIN), 48);
        assert_eq!(line, format!("{} {} 0", i64::from(i32::MIN) * 48, i64::from(i32::MAX) * 48));
    }

    #[test]
    fn extreme_scale_is_exact() {
        let line = format_position(WorldCoord::new(i32::MIN, 1, -1), i64::MAX);
        let min_x = i128::from(i32::MIN) * i128::from(i64::MAX);
        assert_eq!(line, format!("{} {} {}", -i128::from(i64::MAX), min_x, i64::MAX));

        let line = format_position(WorldCoord::new(2, 0, 3), i64::MIN);
        assert_eq!(line, format!("{} {} 0", i128::from(i64::MIN) * 3, i128::from(i64::MIN) * 2));
    }

    #[test]
    fn file_name_is_stable_and_short() {
        let a = output_file_name("minecraft_out_", "0_128_0_16_150_16");
        let b = output_file_name("minecraft_out_", "0_128_0_16_150_16");
        let c = output_file_name("minecraft_out_", "16_150_16_0_128_0");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.starts_with("minecraft_out_") && a.ends_with(".txt"));
        let hex = &a["minecraft_out_".len()..a.len() - ".txt".len()];
        assert_eq!(hex.len(), 8);
        assert!(hex.chars().all(|ch| ch.is_ascii_hexdigit()));
    }

    #[test]
    fn writes_one_line_per_position() {
        let mut buf = Vec::new();
        let n = write_positions(
            &mut buf,
            [WorldCoord::new(0, 0, 0), WorldCoord::new(1, 1, 1)],
            2,
        )
        .unwrap();
        assert_eq!(n, 2);
        assert_eq!(String::from_utf8(buf).unwrap(), "0 0 0\n2 2 2\n");
    }

    #[test]
    fn export_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out");
        let path = export_to_dir(&target, "x.txt", [WorldCoord::new(5, 64, 5)], 48).unwrap();
        assert_eq!(path, target.join("x.txt"));
        assert_eq!(fs::read_to_string(path).unwrap(), "240 240 3072\n");
    }
}
