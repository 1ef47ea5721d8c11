use geist_world::{ChunkCoord, ScanBounds, WorldCoord};
use proptest::prelude::*;

fn small_i32() -> impl Strategy<Value = i32> {
    -1_000_000i32..=1_000_000
}

proptest! {
    // decomposing then recomposing yields the original voxel, negatives included
    #[test]
    fn world_roundtrip(x in any::<i32>(), y in any::<i32>(), z in any::<i32>()) {
        let c = WorldCoord::new(x, y, z);
        prop_assert_eq!(c.decompose().recompose(), c);
    }

    // chunk = floor(x / 16) and local stays in [0,16)
    #[test]
    fn chunk_is_floor_division(x in small_i32(), z in small_i32()) {
        let c = WorldCoord::new(x, 0, z);
        let d = c.decompose();
        prop_assert_eq!(d.chunk.cx, x.div_euclid(16));
        prop_assert_eq!(d.chunk.cz, z.div_euclid(16));
        prop_assert!(d.local.lx < 16 && d.local.lz < 16);
    }

    // region + slot rebuilds the chunk coordinate
    #[test]
    fn chunk_region_slot_roundtrip(cx in any::<i32>(), cz in any::<i32>()) {
        let chunk = ChunkCoord::new(cx, cz);
        let (sx, sz) = chunk.slot();
        prop_assert!(sx < 32 && sz < 32);
        prop_assert_eq!(chunk.region().chunk_at(sx, sz), chunk);
    }

    // normalized bounds do not depend on corner order and count every voxel once
    #[test]
    fn bounds_corner_order(
        x1 in -20i32..20, y1 in -20i32..20, z1 in -20i32..20,
        dx in -4i32..4, dy in -4i32..4, dz in -4i32..4,
    ) {
        let a = ScanBounds::from_corners(x1, y1, z1, x1 + dx, y1 + dy, z1 + dz);
        let b = ScanBounds::from_corners(x1 + dx, y1 + dy, z1 + dz, x1, y1, z1);
        prop_assert_eq!(a, b);
        let visited: Vec<WorldCoord> = a.iter().collect();
        prop_assert_eq!(visited.len() as u64, a.volume());
        let mut sorted = visited.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted, visited);
    }
}
