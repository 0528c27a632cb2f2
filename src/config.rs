//! Zone capacity configuration

/// Zones the benchmark harness aims for when no capacity is given.
pub const DEFAULT_TARGET_ZONES: usize = 100;

/// Parameters for building a [`ZoneMap`](crate::ZoneMap)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneMapConfig {
    /// Maximum elements per zone
    pub zone_capacity: usize,
}

impl ZoneMapConfig {
    /// Explicit capacity. Zero is accepted here and rejected at build time.
    pub fn with_capacity(zone_capacity: usize) -> Self {
        Self { zone_capacity }
    }

    /// Capacity giving roughly `target_zones` zones over `len` elements.
    ///
    /// Computed as `len / target_zones`, clamped to at least one so that
    /// datasets smaller than the target still build.
    pub fn for_dataset(len: usize, target_zones: usize) -> Self {
        let zone_capacity = len.checked_div(target_zones).unwrap_or(len).max(1);
        Self { zone_capacity }
    }

    /// Zone count a build over `len` elements will produce.
    pub fn expected_zones(&self, len: usize) -> usize {
        if self.zone_capacity == 0 {
            0
        } else {
            len.div_ceil(self.zone_capacity)
        }
    }
}

impl Default for ZoneMapConfig {
    fn default() -> Self {
        Self { zone_capacity: 1024 }
    }
}
