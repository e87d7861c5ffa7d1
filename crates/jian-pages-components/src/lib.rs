//! # Jian Pages Components
//!
//! Widgets for building dynamic pages without a full frontend framework.
//!
//! Widgets are written against the seams in [`jian_pages`]: they render into a
//! [`jian_pages::Container`], own their listeners, and reach the address-bar fragment
//! through a [`jian_pages::Location`]. The same widget code therefore runs in the browser
//! and, with the in-memory platform, in plain `cargo test`.
//!
//! ## Widgets
//!
//! - [`pagination::Pagination`]: page bar with a sliding window and fragment sync
//!
//! ## Example
//!
//! ```ignore
//! use jian_pages::Platform;
//! use jian_pages_components::pagination::{Pagination, PaginationOptions, PaginationUpdate};
//!
//! let platform = Platform::browser()?;
//! let pagination = Pagination::mount(
//!     "#pagination-container",
//!     PaginationOptions::new().total_items(100).page_size(10).use_hash(true),
//!     &platform,
//! );
//! pagination.goto(3);
//! pagination.update(PaginationUpdate::new().total_items(200));
//! ```

#![warn(missing_docs)]

pub mod component;
pub mod error;
pub mod pagination;

pub use component::Component;
pub use error::{ComponentError, Result};
pub use pagination::{Pagination, PaginationOptions, PaginationUpdate, PaginationView};
