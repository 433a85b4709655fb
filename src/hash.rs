//! Stable 32-bit content hash codes.
//!
//! [`std::hash::Hash`] streams bytes into a hasher chosen by the container, so
//! its output depends on that hasher. Some contracts in this crate need a
//! hash code that is a pure function of the value: the power-set hash code is
//! defined in closed form from the hash codes of the universe elements, and it
//! has to agree bit for bit with the sum over every subset.
//!
//! [`HashCode`] provides that function. The conventions are the widespread
//! ones for 32-bit content hashes:
//!
//! | Value              | Hash code                                         |
//! |--------------------|---------------------------------------------------|
//! | 8/16/32-bit ints   | the value (sign-extended)                         |
//! | 64-bit ints        | `(v ^ (v >>> 32))` truncated to 32 bits           |
//! | `bool`             | `1231` for `true`, `1237` for `false`             |
//! | `char`             | the scalar value                                  |
//! | strings            | `h = 31 * h + unit` over UTF-16 code units        |
//! | floats             | the bit pattern, NaN canonicalized                |
//! | `Option`           | `0` for `None`, the inner hash code otherwise     |
//! | sequences          | `h = 31 * h + e`, starting from `1`               |
//! | sets               | sum of element hash codes                         |
//! | map entries        | `key ^ value`; maps sum their entries             |
//!
//! All arithmetic wraps at 32 bits.
//!
//! # Examples
//!
//! ```rust
//! use setwise::hash::HashCode;
//!
//! assert_eq!(42_i32.hash_code(), 42);
//! assert_eq!("ab".hash_code(), 97 * 31 + 98);
//! assert_eq!(vec![1, 2].hash_code(), (31 + 1) * 31 + 2);
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::rc::Rc;
use std::sync::Arc;

/// A value with a stable, platform-independent 32-bit content hash code.
///
/// Implementations must be consistent with `Eq`: equal values have equal
/// hash codes.
pub trait HashCode {
    /// Returns the 32-bit content hash code of this value.
    fn hash_code(&self) -> i32;
}

/// Sums the hash codes of `elements` with 32-bit wraparound.
///
/// This is the hash code of a set containing exactly `elements`.
pub fn set_hash_code<'a, T, I>(elements: I) -> i32
where
    T: HashCode + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    elements
        .into_iter()
        .fold(0_i32, |sum, element| sum.wrapping_add(element.hash_code()))
}

/// Folds the hash codes of `elements` as `31 * h + e`, starting from `1`.
///
/// This is the hash code of a list containing exactly `elements` in order.
pub fn list_hash_code<'a, T, I>(elements: I) -> i32
where
    T: HashCode + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    elements.into_iter().fold(1_i32, |hash, element| {
        hash.wrapping_mul(31).wrapping_add(element.hash_code())
    })
}

#[allow(clippy::cast_possible_truncation)]
const fn fold_long(value: u64) -> i32 {
    (value ^ (value >> 32)) as u32 as i32
}

macro_rules! impl_hash_code_widening {
    ($($type:ty),*) => {
        $(
            impl HashCode for $type {
                #[inline]
                fn hash_code(&self) -> i32 {
                    i32::from(*self)
                }
            }
        )*
    };
}

impl_hash_code_widening!(i8, i16, i32, u8, u16);

impl HashCode for u32 {
    #[inline]
    #[allow(clippy::cast_possible_wrap)]
    fn hash_code(&self) -> i32 {
        *self as i32
    }
}

impl HashCode for i64 {
    #[inline]
    #[allow(clippy::cast_sign_loss)]
    fn hash_code(&self) -> i32 {
        fold_long(*self as u64)
    }
}

impl HashCode for u64 {
    #[inline]
    fn hash_code(&self) -> i32 {
        fold_long(*self)
    }
}

impl HashCode for isize {
    #[inline]
    fn hash_code(&self) -> i32 {
        (*self as i64).hash_code()
    }
}

impl HashCode for usize {
    #[inline]
    fn hash_code(&self) -> i32 {
        (*self as u64).hash_code()
    }
}

impl HashCode for bool {
    #[inline]
    fn hash_code(&self) -> i32 {
        if *self { 1231 } else { 1237 }
    }
}

impl HashCode for char {
    #[inline]
    #[allow(clippy::cast_possible_wrap)]
    fn hash_code(&self) -> i32 {
        u32::from(*self) as i32
    }
}

impl HashCode for f32 {
    #[allow(clippy::cast_possible_wrap)]
    fn hash_code(&self) -> i32 {
        let bits = if self.is_nan() { 0x7fc0_0000 } else { self.to_bits() };
        bits as i32
    }
}

impl HashCode for f64 {
    fn hash_code(&self) -> i32 {
        let bits = if self.is_nan() {
            0x7ff8_0000_0000_0000
        } else {
            self.to_bits()
        };
        fold_long(bits)
    }
}

impl HashCode for () {
    #[inline]
    fn hash_code(&self) -> i32 {
        0
    }
}

impl HashCode for str {
    fn hash_code(&self) -> i32 {
        self.encode_utf16().fold(0_i32, |hash, unit| {
            hash.wrapping_mul(31).wrapping_add(i32::from(unit))
        })
    }
}

impl HashCode for String {
    #[inline]
    fn hash_code(&self) -> i32 {
        self.as_str().hash_code()
    }
}

impl<T: HashCode + ?Sized> HashCode for &T {
    #[inline]
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }
}

impl<T: HashCode + ?Sized> HashCode for Box<T> {
    #[inline]
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }
}

impl<T: HashCode + ?Sized> HashCode for Rc<T> {
    #[inline]
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }
}

impl<T: HashCode + ?Sized> HashCode for Arc<T> {
    #[inline]
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }
}

impl<T: HashCode> HashCode for Option<T> {
    #[inline]
    fn hash_code(&self) -> i32 {
        self.as_ref().map_or(0, HashCode::hash_code)
    }
}

impl<K: HashCode, V: HashCode> HashCode for (K, V) {
    #[inline]
    fn hash_code(&self) -> i32 {
        self.0.hash_code() ^ self.1.hash_code()
    }
}

impl<T: HashCode> HashCode for [T] {
    fn hash_code(&self) -> i32 {
        list_hash_code(self)
    }
}

impl<T: HashCode, const N: usize> HashCode for [T; N] {
    fn hash_code(&self) -> i32 {
        list_hash_code(self)
    }
}

impl<T: HashCode> HashCode for Vec<T> {
    fn hash_code(&self) -> i32 {
        list_hash_code(self)
    }
}

impl<T: HashCode, S> HashCode for HashSet<T, S> {
    fn hash_code(&self) -> i32 {
        set_hash_code(self)
    }
}

impl<T: HashCode> HashCode for BTreeSet<T> {
    fn hash_code(&self) -> i32 {
        set_hash_code(self)
    }
}

impl<K: HashCode, V: HashCode, S> HashCode for HashMap<K, V, S> {
    fn hash_code(&self) -> i32 {
        self.iter().fold(0_i32, |sum, (key, value)| {
            sum.wrapping_add(key.hash_code() ^ value.hash_code())
        })
    }
}

impl<K: HashCode, V: HashCode> HashCode for BTreeMap<K, V> {
    fn hash_code(&self) -> i32 {
        self.iter().fold(0_i32, |sum, (key, value)| {
            sum.wrapping_add(key.hash_code() ^ value.hash_code())
        })
    }
}
