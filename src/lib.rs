//! # setwise
//!
//! Immutable collections, lazy combinatorial views, and collection utilities
//! for Rust.
//!
//! ## Overview
//!
//! - **Lazy combinatorial views**: [`PowerSet`](collect::PowerSet) and
//!   [`CartesianProduct`](collect::CartesianProduct) present exponentially
//!   large collections in `O(n)` memory
//! - **Set utilities**: union, intersection, difference and symmetric
//!   difference as lazy views over any [`SetView`](collect::SetView)
//! - **List and map utilities**: partition, reverse, transform, map
//!   difference, value-transforming map views
//! - **Immutable collections**: reference-counted list, set and map
//! - **Orderings**: a fluent [`Comparator`](compare::Comparator) API
//!
//! ## Feature Flags
//!
//! - `collect`: Views and collection utilities
//! - `compare`: Comparators and primitive comparison
//! - `immutables`: Immutable collections
//! - `arc`: Use `Arc` instead of `Rc` so that views are `Send + Sync`
//! - `serde`: Serialization of the immutable collections
//! - `fxhash` / `ahash`: Faster hashers for element index tables
//! - `full`: Enable all of the above except the hasher choice
//!
//! ## Example
//!
//! ```rust
//! use setwise::prelude::*;
//!
//! let power_set = power_set([1, 2, 3]).unwrap();
//! assert_eq!(power_set.len(), 8);
//!
//! let product = cartesian_product(vec![vec![1, 2], vec![10, 20, 30]]).unwrap();
//! assert_eq!(product.get(3).unwrap().to_vec(), vec![2, 10]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use setwise::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{CollectionError, Result};
    pub use crate::hash::HashCode;

    #[cfg(feature = "collect")]
    pub use crate::collect::*;

    #[cfg(feature = "compare")]
    pub use crate::compare::*;

    #[cfg(feature = "immutables")]
    pub use crate::immutables::*;
}

pub mod error;
pub mod hash;

#[cfg(feature = "immutables")]
pub mod immutables;

#[cfg(feature = "collect")]
pub mod collect;

#[cfg(feature = "compare")]
pub mod compare;

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type shared by views and immutable
/// collections.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;
