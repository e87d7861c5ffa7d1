//! Error types for jian-pages

use thiserror::Error;

/// Failure to bind to the browser environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
	/// No global `window` (not running in a browser main thread)
	#[error("No window object")]
	NoWindow,

	/// `window.document` is unavailable
	#[error("No document object")]
	NoDocument,
}
