//! Polymorphic size measurement used by [crate::Bounded].
//!
//! | Shape | Size |
//! | --- | --- |
//! | number | the value itself |
//! | text | number of characters |
//! | sequence | number of elements |
//! | set | cardinality |
//! | map | number of entries |
//!
//! Untyped values ([serde_json::Value]) are measured by their runtime shape.
//! Booleans and null cannot be measured and return [UnsupportedSize].

use crate::error::UnsupportedSize;
use core::cmp::Ordering;
use serde_json::{Map, Value};
use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    fmt,
};

/// The size of a value: a whole count or magnitude, or a fractional magnitude.
///
/// Integral floats are stored as [Size::Int] so they compare exactly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Size {
    Int(i64),
    Real(f64),
}

impl Size {
    /// Compares this size against an integer bound.
    ///
    /// Returns `None` only for NaN.
    pub fn cmp_bound(&self, bound: i64) -> Option<Ordering> {
        match self {
            Size::Int(n) => Some(n.cmp(&bound)),
            Size::Real(r) => r.partial_cmp(&(bound as f64)),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Size::Int(n) => write!(f, "{n}"),
            Size::Real(r) => write!(f, "{r}"),
        }
    }
}

macro_rules! impl_size_from {
    ($($type:ty),*) => {
        $(
            impl From<$type> for Size {
                #[inline]
                fn from(value: $type) -> Self {
                    Size::Int(i64::from(value))
                }
            }
        )*
    };
}

macro_rules! impl_size_from_saturating {
    ($($type:ty),*) => {
        $(
            impl From<$type> for Size {
                #[inline]
                fn from(value: $type) -> Self {
                    Size::Int(i64::try_from(value).unwrap_or(i64::MAX))
                }
            }
        )*
    };
}

impl_size_from!(i8, i16, i32, i64, u8, u16, u32);
impl_size_from_saturating!(u64, usize);

impl From<f64> for Size {
    fn from(value: f64) -> Self {
        let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
        if value.fract() == 0.0 && in_range {
            return Size::Int(value as i64);
        }
        Size::Real(value)
    }
}

/// Trait for values with a measurable size.
pub trait Measure {
    /// Returns the size of this value.
    fn size(&self) -> Result<Size, UnsupportedSize>;
}

/// Returns the size of `value`.
#[inline]
pub fn size<T: Measure + ?Sized>(value: &T) -> Result<Size, UnsupportedSize> {
    value.size()
}

/// Converts a length into a size.
#[inline]
fn len(n: usize) -> Size {
    Size::from(n)
}

macro_rules! impl_measure_numeric {
    ($($type:ty),*) => {
        $(
            impl Measure for $type {
                #[inline]
                fn size(&self) -> Result<Size, UnsupportedSize> {
                    Ok(Size::from(*self))
                }
            }
        )*
    };
}

impl_measure_numeric!(i8, i16, i32, i64, u8, u16, u32, u64, usize, f64);

impl Measure for str {
    #[inline]
    fn size(&self) -> Result<Size, UnsupportedSize> {
        Ok(len(self.chars().count()))
    }
}

impl Measure for String {
    #[inline]
    fn size(&self) -> Result<Size, UnsupportedSize> {
        self.as_str().size()
    }
}

impl<T: Measure + ?Sized> Measure for &T {
    #[inline]
    fn size(&self) -> Result<Size, UnsupportedSize> {
        (**self).size()
    }
}

impl<T> Measure for [T] {
    #[inline]
    fn size(&self) -> Result<Size, UnsupportedSize> {
        Ok(len(self.len()))
    }
}

impl<T> Measure for Vec<T> {
    #[inline]
    fn size(&self) -> Result<Size, UnsupportedSize> {
        Ok(len(self.len()))
    }
}

impl<T> Measure for VecDeque<T> {
    #[inline]
    fn size(&self) -> Result<Size, UnsupportedSize> {
        Ok(len(self.len()))
    }
}

impl<T, S> Measure for HashSet<T, S> {
    #[inline]
    fn size(&self) -> Result<Size, UnsupportedSize> {
        Ok(len(self.len()))
    }
}

impl<T> Measure for BTreeSet<T> {
    #[inline]
    fn size(&self) -> Result<Size, UnsupportedSize> {
        Ok(len(self.len()))
    }
}

impl<K, V, S> Measure for HashMap<K, V, S> {
    #[inline]
    fn size(&self) -> Result<Size, UnsupportedSize> {
        Ok(len(self.len()))
    }
}

impl<K, V> Measure for BTreeMap<K, V> {
    #[inline]
    fn size(&self) -> Result<Size, UnsupportedSize> {
        Ok(len(self.len()))
    }
}

impl Measure for Map<String, Value> {
    #[inline]
    fn size(&self) -> Result<Size, UnsupportedSize> {
        Ok(len(self.len()))
    }
}

impl Measure for Value {
    fn size(&self) -> Result<Size, UnsupportedSize> {
        match self {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    return Ok(Size::Int(i));
                }
                if let Some(u) = n.as_u64() {
                    return u.size();
                }
                n.as_f64()
                    .map(Size::from)
                    .ok_or_else(|| UnsupportedSize(format!("number {n}")))
            }
            Value::String(s) => s.size(),
            Value::Array(a) => a.size(),
            Value::Object(o) => o.size(),
            Value::Bool(b) => Err(UnsupportedSize(format!("boolean {b}"))),
            Value::Null => Err(UnsupportedSize("null".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paste::paste;
    use serde_json::json;

    macro_rules! impl_num_test {
        ($type:ty) => {
            paste! {
                #[test]
                fn [<test_size_ $type>]() {
                    for value in [0 as $type, 1 as $type, 5 as $type, 42 as $type] {
                        assert_eq!(size(&value).unwrap(), Size::Int(value as i64));
                    }
                }
            }
        };
    }
    impl_num_test!(i8);
    impl_num_test!(i16);
    impl_num_test!(i32);
    impl_num_test!(i64);
    impl_num_test!(u8);
    impl_num_test!(u16);
    impl_num_test!(u32);
    impl_num_test!(u64);
    impl_num_test!(usize);

    #[test]
    fn test_size_number() {
        assert_eq!(size(&5i64).unwrap(), Size::Int(5));
        assert_eq!(size(&-3i32).unwrap(), Size::Int(-3));
        assert_eq!(size(&u64::MAX).unwrap(), Size::Int(i64::MAX));
        assert_eq!(size(&7.0f64).unwrap(), Size::Int(7));
        assert_eq!(size(&7.5f64).unwrap(), Size::Real(7.5));
        assert_eq!(size(&-0.25f64).unwrap(), Size::Real(-0.25));
        assert_eq!(size(&f64::INFINITY).unwrap(), Size::Real(f64::INFINITY));
    }

    #[test]
    fn test_size_cmp_bound() {
        assert_eq!(Size::Int(3).cmp_bound(3), Some(Ordering::Equal));
        assert_eq!(Size::Real(2.5).cmp_bound(2), Some(Ordering::Greater));
        assert_eq!(Size::Real(2.5).cmp_bound(3), Some(Ordering::Less));
        assert_eq!(Size::Real(f64::NAN).cmp_bound(0), None);
        assert_eq!(Size::Int(i64::MAX).cmp_bound(i64::MAX - 1), Some(Ordering::Greater));
        assert_eq!(Size::Real(7.5).to_string(), "7.5");
    }

    #[test]
    fn test_size_text() {
        assert_eq!(size("abc").unwrap(), Size::Int(3));
        assert_eq!(size(&String::new()).unwrap(), Size::Int(0));
        // Characters, not bytes
        assert_eq!(size("héllo").unwrap(), Size::Int(5));
    }

    #[test]
    fn test_size_sequences() {
        assert_eq!(size(&vec![1, 2, 3]).unwrap(), Size::Int(3));
        assert_eq!(size(&[1u8, 2][..]).unwrap(), Size::Int(2));
        assert_eq!(size(&VecDeque::<u8>::new()).unwrap(), Size::Int(0));
    }

    #[test]
    fn test_size_sets_and_maps() {
        let set: HashSet<&str> = ["a", "b"].into_iter().collect();
        assert_eq!(size(&set).unwrap(), Size::Int(2));
        let set: BTreeSet<u8> = [1, 1, 2].into_iter().collect();
        assert_eq!(size(&set).unwrap(), Size::Int(2));

        let map: HashMap<&str, &str> = [("k1", "v1")].into_iter().collect();
        assert_eq!(size(&map).unwrap(), Size::Int(1));
        let map: BTreeMap<u8, u8> = BTreeMap::new();
        assert_eq!(size(&map).unwrap(), Size::Int(0));
    }

    #[test]
    fn test_size_value() {
        assert_eq!(size(&json!(5)).unwrap(), Size::Int(5));
        assert_eq!(size(&json!(-5)).unwrap(), Size::Int(-5));
        assert_eq!(size(&json!(2.0)).unwrap(), Size::Int(2));
        assert_eq!(size(&json!(2.5)).unwrap(), Size::Real(2.5));
        assert_eq!(size(&json!("abc")).unwrap(), Size::Int(3));
        assert_eq!(size(&json!([1, 2, 3])).unwrap(), Size::Int(3));
        assert_eq!(size(&json!({"k1": "v1"})).unwrap(), Size::Int(1));
    }

    #[test]
    fn test_size_unsupported() {
        assert_eq!(
            size(&json!(true)),
            Err(UnsupportedSize("boolean true".to_string()))
        );
        assert_eq!(size(&json!(null)), Err(UnsupportedSize("null".to_string())));
    }
}
