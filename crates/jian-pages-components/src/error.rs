//! Error types for jian-pages-components

use thiserror::Error;

/// Error type for component operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentError {
	/// The mount target did not resolve to an element
	#[error("Element not found for query: {0}")]
	ContainerNotFound(String),

	/// An options document could not be decoded
	#[error("Invalid component options: {0}")]
	InvalidOptions(String),
}

impl From<serde_json::Error> for ComponentError {
	fn from(err: serde_json::Error) -> Self {
		Self::InvalidOptions(err.to_string())
	}
}

/// Result type for component operations
pub type Result<T> = std::result::Result<T, ComponentError>;
