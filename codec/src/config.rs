//! Types for configuring [crate::Bounded].

use crate::Size;
use core::{
    cmp::Ordering,
    ops::{Bound, RangeBounds},
};

/// Inclusive size bounds, with an optional custom failure message.
///
/// Built from any `RangeBounds<i64>`. Exclusive bounds are normalised to
/// their inclusive equivalents.
///
/// # Examples
///
/// ```
/// use confcodec::SizeCfg;
///
/// // Sizes 1..=64
/// let cfg = SizeCfg::new(1..=64);
/// assert!(cfg.contains(32));
/// assert!(!cfg.contains(0));
///
/// // Any size >= 1
/// let cfg = SizeCfg::from(1..);
/// assert_eq!(cfg.min(), Some(1));
/// assert_eq!(cfg.max(), None);
///
/// // Exclusive end
/// let cfg = SizeCfg::from(..10);
/// assert_eq!(cfg.max(), Some(9));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct SizeCfg {
    /// Smallest allowed size (inclusive), if bounded.
    min: Option<i64>,

    /// Largest allowed size (inclusive), if bounded.
    max: Option<i64>,

    /// Message to report instead of the generated one.
    message: Option<String>,
}

impl From<core::ops::Range<i64>> for SizeCfg {
    fn from(r: core::ops::Range<i64>) -> Self {
        Self::new(r)
    }
}

impl From<core::ops::RangeInclusive<i64>> for SizeCfg {
    fn from(r: core::ops::RangeInclusive<i64>) -> Self {
        Self::new(r)
    }
}

impl From<core::ops::RangeFrom<i64>> for SizeCfg {
    fn from(r: core::ops::RangeFrom<i64>) -> Self {
        Self::new(r)
    }
}

impl From<core::ops::RangeTo<i64>> for SizeCfg {
    fn from(r: core::ops::RangeTo<i64>) -> Self {
        Self::new(r)
    }
}

impl From<core::ops::RangeToInclusive<i64>> for SizeCfg {
    fn from(r: core::ops::RangeToInclusive<i64>) -> Self {
        Self::new(r)
    }
}

impl From<core::ops::RangeFull> for SizeCfg {
    fn from(_: core::ops::RangeFull) -> Self {
        Self::new(..)
    }
}

impl SizeCfg {
    /// Creates a new `SizeCfg` from any type implementing `RangeBounds<i64>`.
    pub fn new(r: impl RangeBounds<i64>) -> Self {
        let min = match r.start_bound() {
            Bound::Included(s) => Some(*s),
            Bound::Excluded(s) => Some(s.saturating_add(1)),
            Bound::Unbounded => None,
        };
        let max = match r.end_bound() {
            Bound::Included(e) => Some(*e),
            Bound::Excluded(e) => Some(e.saturating_sub(1)),
            Bound::Unbounded => None,
        };
        Self {
            min,
            max,
            message: None,
        }
    }

    /// Creates a `SizeCfg` that only accepts exactly `size`.
    pub fn exact(size: i64) -> Self {
        Self::new(size..=size)
    }

    /// Reports `message` instead of the generated message on failure.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn min(&self) -> Option<i64> {
        self.min
    }

    pub fn max(&self) -> Option<i64> {
        self.max
    }

    /// Returns true if `size` satisfies both bounds. Unset bounds always pass.
    ///
    /// A NaN size never satisfies a set bound.
    pub fn contains(&self, size: impl Into<Size>) -> bool {
        let size = size.into();
        if let Some(min) = self.min {
            if !matches!(size.cmp_bound(min), Some(Ordering::Greater | Ordering::Equal)) {
                return false;
            }
        }
        if let Some(max) = self.max {
            if !matches!(size.cmp_bound(max), Some(Ordering::Less | Ordering::Equal)) {
                return false;
            }
        }
        true
    }

    /// The failure message: the custom one if set, otherwise generated from the bounds.
    pub fn message(&self) -> String {
        if let Some(message) = &self.message {
            return message.clone();
        }
        let min = self.min.map_or_else(|| "-∞".to_string(), |m| m.to_string());
        let max = self.max.map_or_else(|| "∞".to_string(), |m| m.to_string());
        format!("Value should be of size [{min}, {max}]")
    }
}
