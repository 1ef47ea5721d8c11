use crate::coords::WorldCoord;

/// Inclusive axis-aligned box of voxels, normalized so `min <= max` on every axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScanBounds {
    pub min: WorldCoord,
    pub max: WorldCoord,
}

impl ScanBounds {
    /// Builds the box spanned by two corners given in any order.
    pub fn new(a: WorldCoord, b: WorldCoord) -> Self {
        Self {
            min: WorldCoord::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: WorldCoord::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    pub fn from_corners(x1: i32, y1: i32, z1: i32, x2: i32, y2: i32, z2: i32) -> Self {
        Self::new(WorldCoord::new(x1, y1, z1), WorldCoord::new(x2, y2, z2))
    }

    #[inline]
    pub fn contains(&self, c: WorldCoord) -> bool {
        c.x >= self.min.x
            && c.x <= self.max.x
            && c.y >= self.min.y
            && c.y <= self.max.y
            && c.z >= self.min.z
            && c.z <= self.max.z
    }

    #[inline]
    fn extent(&self) -> (u64, u64, u64) {
        let span = |lo: i32, hi: i32| (i64::from(hi) - i64::from(lo) + 1) as u64;
        (
            span(self.min.x, self.max.x),
            span(self.min.y, self.max.y),
            span(self.min.z, self.max.z),
        )
    }

    /// Number of voxels in the box; saturates for boxes wider than `u64`.
    pub fn volume(&self) -> u64 {
        let (sx, sy, sz) = self.extent();
        sx.saturating_mul(sy).saturating_mul(sz)
    }

    /// Every voxel exactly once: x outermost, then y, then z, all ascending.
    pub fn iter(&self) -> impl Iterator<Item = WorldCoord> + use<> {
        let (min, max) = (self.min, self.max);
        (min.x..=max.x).flat_map(move |x| {
            (min.y..=max.y).flat_map(move |y| (min.z..=max.z).map(move |z| WorldCoord::new(x, y, z)))
        })
    }
}
