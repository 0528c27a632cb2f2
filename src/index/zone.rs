//! Fixed-capacity zone with exact running bounds
//!
//! A zone holds a contiguous run of the input in original order. Bounds are
//! seeded from the first appended element, never from a default value, so
//! they stay exact for inputs that are all negative, all positive or span zero.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Inclusive minimum and maximum of a zone's elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ZoneBounds<T> {
    /// Smallest element held
    pub min: T,
    /// Largest element held
    pub max: T,
}

impl<T: Ord> ZoneBounds<T> {
    /// Point test, inclusive at both ends.
    #[inline]
    pub fn contains(&self, key: &T) -> bool {
        *key >= self.min && *key <= self.max
    }

    /// Whether `[low, high)` can hold any element of the zone.
    ///
    /// The zone is pruned when the range sits at or below `min`, or
    /// entirely above `max`.
    #[inline]
    pub fn overlaps_range(&self, low: &T, high: &T) -> bool {
        !(*high <= self.min || *low > self.max)
    }
}

/// Ordered bucket of at most `capacity` elements
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Zone<T> {
    elements: Vec<T>,
    bounds: Option<ZoneBounds<T>>,
}

impl<T: Ord + Clone> Zone<T> {
    /// Create an empty zone with room for `capacity` elements.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            bounds: None,
        }
    }

    /// Append `value` and fold it into the bounds.
    pub(crate) fn append(&mut self, value: T) {
        match &mut self.bounds {
            Some(bounds) => {
                if value < bounds.min {
                    bounds.min = value.clone();
                }
                if value > bounds.max {
                    bounds.max = value.clone();
                }
            }
            None => {
                self.bounds = Some(ZoneBounds {
                    min: value.clone(),
                    max: value.clone(),
                });
            }
        }
        self.elements.push(value);
    }

    /// Whether `key` is held, by value equality.
    #[inline]
    pub fn contains(&self, key: &T) -> bool {
        self.elements.iter().any(|e| e == key)
    }

    /// Elements in `[low, high)` in insertion order.
    pub fn range<'a>(&'a self, low: &'a T, high: &'a T) -> impl Iterator<Item = &'a T> + 'a {
        self.elements.iter().filter(move |e| *e >= low && *e < high)
    }
}

impl<T> Zone<T> {
    /// Elements in insertion order.
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// Number of elements held.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True before the first append.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Bounds, `None` only for an empty zone.
    pub fn bounds(&self) -> Option<&ZoneBounds<T>> {
        self.bounds.as_ref()
    }

    /// Smallest element held.
    pub fn min(&self) -> Option<&T> {
        self.bounds.as_ref().map(|b| &b.min)
    }

    /// Largest element held.
    pub fn max(&self) -> Option<&T> {
        self.bounds.as_ref().map(|b| &b.max)
    }
}
