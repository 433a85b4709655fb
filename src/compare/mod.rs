//! Comparators and primitive comparison.
//!
//! - [`Comparator`]: a composable ordering strategy with fluent combinators
//!   ([`reverse`](Comparator::reverse), [`nulls_first`](Comparator::nulls_first),
//!   [`on_result_of`](Comparator::on_result_of),
//!   [`compound`](Comparator::compound),
//!   [`lexicographical`](Comparator::lexicographical))
//! - Factories: [`natural`], [`reverse_natural`], [`from_fn`], [`explicit`],
//!   [`all_equal`], [`using_to_string`], [`compound_all`]
//! - [`compare_ints`] and friends: total orders on primitive values
//!
//! # Examples
//!
//! ```rust
//! use setwise::compare::{explicit, natural, Comparator};
//!
//! let ranked = explicit(["gold", "silver", "bronze"]).unwrap();
//! assert_eq!(ranked.sorted_copy(["bronze", "gold"]), vec!["gold", "bronze"]);
//!
//! let descending = natural().reverse();
//! assert_eq!(descending.sorted_copy([1, 3, 2]), vec![3, 2, 1]);
//! ```

mod ordering;
mod primitives;

pub use ordering::{
    AllEqual, Comparator, Compound, CompoundAll, Explicit, FromFn, Lexicographical, Natural,
    NullsFirst, NullsLast, OnResultOf, Reverse, ReverseNatural, UsingToString, all_equal,
    compound_all, explicit, from_fn, natural, reverse_natural, using_to_string,
};
pub use primitives::{
    compare_booleans, compare_chars, compare_doubles, compare_floats, compare_ints, compare_longs,
    compare_shorts,
};
