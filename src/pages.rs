//! Browser runtime seams
//!
//! This module provides access to jian-pages: the container, location and listener
//! abstractions every Jian widget is written against.
//!
//! ## Example
//!
//! ```rust,ignore
//! use jian::pages::{MemoryDocument, MemoryLocation, Platform};
//! use std::rc::Rc;
//!
//! let document = Rc::new(MemoryDocument::new());
//! document.create("#pagination");
//! let platform = Platform::new(document, Rc::new(MemoryLocation::new()));
//! ```

// Re-export all jian-pages functionality
pub use jian_pages::*;
