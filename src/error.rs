use thiserror::Error;

/// Crate-specific error enum.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A value could not be converted into the type the operation accepts.
    #[error("{name} should be {expected}, not {actual}")]
    TypeMismatch {
        /// The name of the offending parameter.
        name: &'static str,
        /// The type the parameter must have.
        expected: &'static str,
        /// The type that was given.
        actual: &'static str,
    },

    /// A component index was outside of the vector's dimensions.
    #[error("index {index} is out of range for a vector with {len} components")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of components of the vector.
        len: usize,
    },

    /// A swizzle setter was handed the wrong number of values.
    #[error("{accessor} requires {expected} values, got {actual}")]
    InvalidArgumentLength {
        /// The swizzle accessor, e.g. `xy`.
        accessor: &'static str,
        /// The number of values the accessor takes.
        expected: usize,
        /// The number of values that were given.
        actual: usize,
    },
}
