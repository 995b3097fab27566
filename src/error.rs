//! Error types of the adapter.
//!
//! No operation panics on a wrong-shaped input: every failure is returned
//! as a [`ContainerError`] and left to the caller.
use thiserror::Error;

/// Result type alias for adapter operations.
pub type Result<T> = std::result::Result<T, ContainerError>;

/// Failure of an adapter operation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContainerError {
	/// The value is neither a sequence container nor a map container.
	///
	/// Raised by every operation requiring a container when applied to an
	/// opaque value.
	#[error("value is neither a sequence nor a map container")]
	InvalidArgument,

	/// The element kind does not match the container shape.
	///
	/// Maps only accept key/value entries, sequences only accept plain
	/// items.
	#[error("element kind does not match the container shape")]
	TypeMismatch,
}
