//! Zone map build and query engine
//!
//! Partitions an input sequence into zones of `capacity` consecutive
//! elements and records each zone's exact min/max:
//! - Build consumes the input once, in original order
//! - Point queries scan only zones whose bounds contain the key
//! - Range queries `[low, high)` scan only zones that can overlap the range
//!
//! The structure is immutable after construction, so shared references can
//! be queried from any number of threads.

mod stats;
mod zone;

pub use stats::ScanStats;
pub use zone::{Zone, ZoneBounds};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{config::ZoneMapConfig, ZoneMapError};

/// Coarse block index over a fixed collection of ordered keys
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ZoneMap<T> {
    zones: Vec<Zone<T>>,
    capacity: usize,
    len: usize,
}

impl<T: Ord + Clone> ZoneMap<T> {
    /// Build a zone map with `zone_capacity` elements per zone.
    ///
    /// Fails with [`ZoneMapError::InvalidConfiguration`] when the capacity is
    /// zero. An empty input is valid and yields zero zones.
    pub fn new<I>(elements: I, zone_capacity: usize) -> Result<Self, ZoneMapError>
    where
        I: IntoIterator<Item = T>,
    {
        if zone_capacity == 0 {
            return Err(ZoneMapError::InvalidConfiguration {
                capacity: zone_capacity,
            });
        }

        let iter = elements.into_iter();
        let (expected, _) = iter.size_hint();
        let mut zones = Vec::with_capacity(expected.div_ceil(zone_capacity));
        let mut len = 0usize;
        let mut current = Zone::with_capacity(zone_capacity.min(expected));

        for value in iter {
            current.append(value);
            len += 1;

            if current.len() == zone_capacity {
                let next = Zone::with_capacity(zone_capacity.min(expected.saturating_sub(len)));
                zones.push(std::mem::replace(&mut current, next));
            }
        }

        // Trailing partial zone
        if !current.is_empty() {
            zones.push(current);
        }

        tracing::debug!(
            zones = zones.len(),
            capacity = zone_capacity,
            elements = len,
            "built zone map"
        );

        Ok(Self {
            zones,
            capacity: zone_capacity,
            len,
        })
    }

    /// Build using the capacity carried by `config`.
    pub fn with_config<I>(elements: I, config: &ZoneMapConfig) -> Result<Self, ZoneMapError>
    where
        I: IntoIterator<Item = T>,
    {
        Self::new(elements, config.zone_capacity)
    }

    /// True iff `key` occurs somewhere in the input.
    pub fn query_point(&self, key: &T) -> bool {
        self.zones
            .iter()
            .filter(|zone| zone.bounds().is_some_and(|b| b.contains(key)))
            .any(|zone| zone.contains(key))
    }

    /// Elements `e` with `low <= e < high`.
    ///
    /// Results follow zone order and, within a zone, insertion order; they
    /// are not globally sorted. A range with `high <= low` is empty.
    pub fn query_range(&self, low: &T, high: &T) -> Vec<T> {
        let mut out = Vec::new();
        if high <= low {
            return out;
        }

        for zone in self.candidates_for_range(low, high) {
            out.extend(zone.range(low, high).cloned());
        }
        out
    }

    /// Replay a point query and count the work it does.
    pub fn explain_point(&self, key: &T) -> ScanStats {
        let mut stats = ScanStats::new(self.zones.len());

        for zone in &self.zones {
            if !zone.bounds().is_some_and(|b| b.contains(key)) {
                continue;
            }
            stats.zones_scanned += 1;
            match zone.elements().iter().position(|e| e == key) {
                Some(idx) => {
                    stats.elements_scanned += idx + 1;
                    stats.matches = 1;
                    break;
                }
                None => stats.elements_scanned += zone.len(),
            }
        }

        // Zones after an early hit count as pruned: the query never visits them
        stats.zones_pruned = stats.zones_total - stats.zones_scanned;

        tracing::trace!(
            pruned = stats.zones_pruned,
            scanned = stats.zones_scanned,
            found = stats.matches == 1,
            "point query"
        );
        stats
    }

    /// Replay a range query and count the work it does.
    pub fn explain_range(&self, low: &T, high: &T) -> ScanStats {
        let mut stats = ScanStats::new(self.zones.len());
        if high <= low {
            stats.zones_pruned = stats.zones_total;
            return stats;
        }

        for zone in &self.zones {
            if !zone.bounds().is_some_and(|b| b.overlaps_range(low, high)) {
                stats.zones_pruned += 1;
                continue;
            }
            stats.zones_scanned += 1;
            stats.elements_scanned += zone.len();
            stats.matches += zone.range(low, high).count();
        }

        tracing::trace!(
            pruned = stats.zones_pruned,
            scanned = stats.zones_scanned,
            matches = stats.matches,
            "range query"
        );
        stats
    }

    fn candidates_for_range<'a>(
        &'a self,
        low: &'a T,
        high: &'a T,
    ) -> impl Iterator<Item = &'a Zone<T>> + 'a {
        self.zones
            .iter()
            .filter(move |zone| zone.bounds().is_some_and(|b| b.overlaps_range(low, high)))
    }
}

impl<T> ZoneMap<T> {
    /// Zones in build order.
    pub fn zones(&self) -> &[Zone<T>] {
        &self.zones
    }

    /// Maximum elements per zone.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of zones, `ceil(len / capacity)`.
    pub fn num_zones(&self) -> usize {
        self.zones.len()
    }

    /// Total elements indexed.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when built from an empty input.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All elements in original input order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.zones.iter().flat_map(|zone| zone.elements().iter())
    }
}
