//! Page widgets
//!
//! This module provides access to jian-pages-components.

// Re-export all jian-pages-components functionality
pub use jian_pages_components::*;
