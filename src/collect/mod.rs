//! Lazy views and collection utilities.
//!
//! The two combinatorial views store only their inputs and compute their
//! elements on access:
//!
//! - [`PowerSet`]: all `2^n` subsets of a universe of at most
//!   [`MAX_POWER_SET_UNIVERSE`] elements, each a bitmask [`Subset`]
//! - [`CartesianProduct`]: every tuple drawn from a sequence of axes, each a
//!   decoded [`Tuple`]
//!
//! Around them sit capability traits and utilities:
//!
//! - [`SetView`] and the set-operation views in [`sets`]
//! - [`ListView`] and the list views in [`lists`]
//! - [`MapLike`], map difference and value-transforming views in [`maps`]
//! - [`iterators`], [`equivalence`] and [`predicates`] helpers
//!
//! Views are read-only: none of them has a method that changes its
//! contents.
//!
//! ```compile_fail
//! use setwise::collect::PowerSet;
//!
//! let power_set = PowerSet::new([1, 2]).unwrap();
//! power_set.insert(power_set.get(0).unwrap());
//! ```
//!
//! ```compile_fail
//! use setwise::collect::CartesianProduct;
//!
//! let mut product = CartesianProduct::new([vec![1], vec![2]]).unwrap();
//! product.clear();
//! ```
//!
//! # Examples
//!
//! ```rust
//! use setwise::collect::{cartesian_product, power_set};
//!
//! let subsets = power_set(["x", "y"]).unwrap();
//! assert_eq!(subsets.len(), 4);
//!
//! let product = cartesian_product([vec![1, 2], vec![3, 4]]).unwrap();
//! assert_eq!(product.get(2).unwrap(), [2, 3]);
//! ```

pub mod cartesian;
pub mod equivalence;
pub mod index;
pub mod iterators;
pub mod lists;
pub mod maps;
pub mod power_set;
pub mod predicates;
pub mod sets;

pub use cartesian::{CartesianProduct, MAX_PRODUCT_SIZE, Tuple, TupleElements};
pub use equivalence::{Equals, Equivalence, Identity};
pub use index::IndexTable;
pub use lists::{ListView, Positions, cartesian_product};
pub use maps::{MapDifference, MapLike, ValueDifference};
pub use power_set::{MAX_POWER_SET_UNIVERSE, PowerSet, Subset, SubsetIter, Subsets};
pub use sets::{SetView, power_set};
