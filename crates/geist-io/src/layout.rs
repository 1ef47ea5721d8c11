use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use geist_world::RegionCoord;

/// Subdirectory of a world save holding the region files.
pub const REGION_DIR: &str = "region";

/// `r.<rx>.<rz>.<ext>`
pub fn region_file_name(coord: RegionCoord, ext: &str) -> String {
    format!("r.{}.{}.{}", coord.rx, coord.rz, ext)
}

pub fn region_path(region_dir: &Path, coord: RegionCoord, ext: &str) -> PathBuf {
    region_dir.join(region_file_name(coord, ext))
}

/// Names of the entries in `dir` ending in `.<ext>`, sorted. Names are not parsed.
pub fn list_region_files(dir: &Path, ext: &str) -> io::Result<Vec<String>> {
    let suffix = format!(".{ext}");
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            log::debug!("skipping non-utf8 entry {:?}", entry.path());
            continue;
        };
        if name.ends_with(&suffix) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_uses_signed_coords() {
        assert_eq!(region_file_name(RegionCoord::new(0, 0), "mca"), "r.0.0.mca");
        assert_eq!(region_file_name(RegionCoord::new(-1, 12), "mca"), "r.-1.12.mca");
        assert_eq!(
            region_path(Path::new("world/region"), RegionCoord::new(2, -3), "mcr"),
            PathBuf::from("world/region/r.2.-3.mcr")
        );
    }
}
