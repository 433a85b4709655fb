//! Error types and precondition checks.
//!
//! Every fallible operation in this crate returns [`Result`], whose error
//! type is [`CollectionError`]. All failures are local and synchronous: they
//! describe a contract violated by the caller's input, so recovery means
//! fixing the input and calling again.
//!
//! # Examples
//!
//! ```rust
//! use setwise::error::{CollectionError, check_element_index};
//!
//! assert_eq!(check_element_index(2, 3), Ok(2));
//! assert_eq!(
//!     check_element_index(3, 3),
//!     Err(CollectionError::IndexOutOfRange { index: 3, size: 3 })
//! );
//! ```

use thiserror::Error;

/// Largest size any positional view in this crate may report.
///
/// Sizes are bounded by the signed 32-bit range so that the index arithmetic
/// of the views behaves identically on every platform.
pub const MAX_VIEW_SIZE: usize = i32::MAX as usize;

/// Errors reported by collection constructors and accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// An argument violated a stated precondition.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the violated precondition.
        message: String,
    },

    /// An element or container was absent where the contract requires one.
    #[error("absent element at {location}")]
    NullElement {
        /// Where the absent value was found, for example `axis 1, index 0`.
        location: String,
    },

    /// A positional access fell outside `[0, size)`.
    #[error("index {index} out of range for size {size}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The size of the accessed view.
        size: usize,
    },

    /// Iteration continued past the last element.
    #[error("no more elements")]
    EndOfSequence,

    /// An explicit ordering was asked to rank a value it does not list.
    #[error("cannot compare value: {value}")]
    IncomparableValue {
        /// Debug rendering of the unlisted value.
        value: String,
    },
}

impl CollectionError {
    /// Creates an [`CollectionError::InvalidArgument`] with the given message.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates a [`CollectionError::NullElement`] at the given location.
    #[must_use]
    pub fn null_element(location: impl Into<String>) -> Self {
        Self::NullElement {
            location: location.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CollectionError>;

// =============================================================================
// Preconditions
// =============================================================================

/// Fails with [`CollectionError::InvalidArgument`] unless `condition` holds.
///
/// The message is only built on failure.
///
/// # Errors
///
/// Returns `InvalidArgument` when `condition` is `false`.
pub fn check_argument<F>(condition: bool, message: F) -> Result<()>
where
    F: FnOnce() -> String,
{
    if condition {
        Ok(())
    } else {
        Err(CollectionError::invalid_argument(message()))
    }
}

/// Ensures `index` addresses an element of a view of `size` elements.
///
/// # Errors
///
/// Returns `IndexOutOfRange` unless `index < size`.
pub const fn check_element_index(index: usize, size: usize) -> Result<usize> {
    if index < size {
        Ok(index)
    } else {
        Err(CollectionError::IndexOutOfRange { index, size })
    }
}

/// Ensures `index` is a valid position (`0..=size`) in a view of `size`
/// elements.
///
/// # Errors
///
/// Returns `IndexOutOfRange` unless `index <= size`.
pub const fn check_position_index(index: usize, size: usize) -> Result<usize> {
    if index <= size {
        Ok(index)
    } else {
        Err(CollectionError::IndexOutOfRange { index, size })
    }
}

/// Multiplies two view sizes, failing if the product leaves the signed
/// 32-bit range.
///
/// The multiplication is carried out in 64 bits and compared against
/// [`MAX_VIEW_SIZE`], so no intermediate result wraps.
///
/// # Errors
///
/// Returns `InvalidArgument` if the product exceeds [`MAX_VIEW_SIZE`].
///
/// # Examples
///
/// ```rust
/// use setwise::error::checked_multiply;
///
/// assert_eq!(checked_multiply(46_340, 46_340), Ok(2_147_395_600));
/// assert!(checked_multiply(46_341, 46_341).is_err());
/// ```
pub fn checked_multiply(left: usize, right: usize) -> Result<usize> {
    let product = u64::try_from(left)
        .ok()
        .zip(u64::try_from(right).ok())
        .and_then(|(left, right)| left.checked_mul(right))
        .filter(|product| *product <= MAX_VIEW_SIZE as u64);
    product
        .and_then(|product| usize::try_from(product).ok())
        .ok_or_else(|| {
            CollectionError::invalid_argument(format!(
                "overflow: {left} * {right} exceeds {MAX_VIEW_SIZE}"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_invalid_argument_display() {
        let error = CollectionError::invalid_argument("size must be positive");
        assert_eq!(error.to_string(), "invalid argument: size must be positive");
    }

    #[rstest]
    fn test_null_element_display() {
        let error = CollectionError::null_element("axis 1, index 0");
        assert_eq!(error.to_string(), "absent element at axis 1, index 0");
    }

    #[rstest]
    fn test_index_out_of_range_display() {
        let error = CollectionError::IndexOutOfRange { index: 7, size: 6 };
        assert_eq!(error.to_string(), "index 7 out of range for size 6");
    }

    #[rstest]
    fn test_end_of_sequence_display() {
        assert_eq!(CollectionError::EndOfSequence.to_string(), "no more elements");
    }

    #[rstest]
    fn test_error_is_std_error() {
        let error = CollectionError::EndOfSequence;
        let _: &dyn std::error::Error = &error;
    }

    #[rstest]
    #[case(true, Ok(()))]
    #[case(false, Err(CollectionError::invalid_argument("failed")))]
    fn test_check_argument(#[case] condition: bool, #[case] expected: Result<()>) {
        assert_eq!(check_argument(condition, || "failed".to_string()), expected);
    }

    #[rstest]
    fn test_check_argument_builds_message_lazily() {
        let mut built = false;
        let result = check_argument(true, || {
            built = true;
            String::new()
        });
        assert!(result.is_ok());
        assert!(!built);
    }

    #[rstest]
    #[case(0, 1, true)]
    #[case(0, 0, false)]
    #[case(4, 5, true)]
    #[case(5, 5, false)]
    fn test_check_element_index(#[case] index: usize, #[case] size: usize, #[case] valid: bool) {
        assert_eq!(check_element_index(index, size).is_ok(), valid);
    }

    #[rstest]
    #[case(0, 0, true)]
    #[case(5, 5, true)]
    #[case(6, 5, false)]
    fn test_check_position_index(#[case] index: usize, #[case] size: usize, #[case] valid: bool) {
        assert_eq!(check_position_index(index, size).is_ok(), valid);
    }

    #[rstest]
    #[case(0, usize::MAX, Some(0))]
    #[case(1, MAX_VIEW_SIZE, Some(MAX_VIEW_SIZE))]
    #[case(2, MAX_VIEW_SIZE / 2, Some(MAX_VIEW_SIZE - 1))]
    #[case(2, MAX_VIEW_SIZE / 2 + 1, None)]
    #[case(65_536, 32_768, None)]
    #[case(usize::MAX, 2, None)]
    fn test_checked_multiply(
        #[case] left: usize,
        #[case] right: usize,
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(checked_multiply(left, right).ok(), expected);
    }
}
