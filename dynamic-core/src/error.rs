//! Error types for dynamics

use thiserror::Error;

/// Raised when a caller tries to set or delete a field of a dynamic.
///
/// Dynamics are immutable; this is the only error a navigation chain can
/// surface, and it always signals misuse rather than a data condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImmutabilityError {
    /// Attempted to assign a field.
    #[error("Dynamics are immutable: cannot set {name:?}")]
    Set {
        /// Name of the field the caller tried to assign
        name: String,
    },
    /// Attempted to remove a field.
    #[error("Dynamics are immutable: cannot delete {name:?}")]
    Delete {
        /// Name of the field the caller tried to remove
        name: String,
    },
}

impl ImmutabilityError {
    /// Name of the field involved in the rejected mutation
    pub fn name(&self) -> &str {
        match self {
            ImmutabilityError::Set { name } | ImmutabilityError::Delete { name } => name,
        }
    }
}

/// Errors produced while parsing a JSON Pointer or validating its limits.
///
/// A well-formed pointer that simply does not match the data is *not* an
/// error; it resolves to the sentinel like any other failed navigation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointerError {
    /// Invalid pointer syntax
    #[error(
        "Invalid JSON Pointer syntax: '{pointer}' - {reason}\n\
         \n\
         JSON Pointers must:\n\
         - Start with '/' (or be empty string for root)\n\
         - Use '~0' to escape '~' and '~1' to escape '/'\n\
         \n\
         See RFC 6901 for details."
    )]
    InvalidPointer {
        /// The invalid pointer string
        pointer: String,
        /// Explanation of why the pointer is invalid
        reason: String,
    },

    /// Pointer string too long
    #[error(
        "Pointer too long: {length} bytes (max: {max_length}).\n\
         \n\
         Raise `PointerLimits::max_pointer_length` if the path is legitimate."
    )]
    PointerTooLong {
        /// Actual length of the pointer string (bytes)
        length: usize,
        /// Maximum pointer length allowed (bytes)
        max_length: usize,
    },

    /// Pointer depth limit exceeded
    #[error(
        "Pointer depth limit exceeded: '{pointer}' has depth {depth} (max: {max_depth})."
    )]
    DepthLimitExceeded {
        /// Pointer being processed
        pointer: String,
        /// Number of reference tokens in the pointer
        depth: usize,
        /// Maximum depth allowed
        max_depth: usize,
    },

    /// Configuration exceeds hard limits
    #[error(
        "Configuration exceeds hard limits: {reason}\n\
         \n\
         Hard limits:\n\
         - Max depth: {max_depth}\n\
         - Max pointer length: {max_ptr_len}"
    )]
    ConfigurationExceedsHardLimits {
        /// Which limit was exceeded
        reason: String,
        /// Hard maximum depth
        max_depth: usize,
        /// Hard maximum pointer length
        max_ptr_len: usize,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PointerError>;
