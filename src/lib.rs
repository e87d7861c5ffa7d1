//! # Jian
//!
//! Lightweight browser widgets for server-rendered pages that need a bit of interactivity
//! without adopting a full frontend framework.
//!
//! ## Feature Flags
//!
//! - `components` (default) - The widget library ([`components`])
//! - `debug-hooks` - Enables `debug_log!` output
//! - `console_error_panic_hook` - Installs the panic hook in [`pages::Platform::browser`]
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use jian::prelude::*;
//!
//! let platform = Platform::browser()?;
//! let pagination = Pagination::mount(
//!     "#pagination-container",
//!     PaginationOptions::new()
//!         .total_items(100)
//!         .use_hash(true)
//!         .on_page_change(Callback::new(|page| info_log!("page {}", page))),
//!     &platform,
//! );
//! ```

pub mod pages;

#[cfg(feature = "components")]
pub mod components;

pub use jian_pages::{debug_log, error_log, info_log, warn_log};

/// Commonly used types
pub mod prelude {
	pub use jian_pages::{
		Callback, ClickTarget, Container, Document, Location, MountTarget, Platform, Subscription,
	};
	pub use jian_pages::{debug_log, error_log, info_log, warn_log};

	#[cfg(feature = "components")]
	pub use jian_pages_components::{
		Component, ComponentError, Pagination, PaginationOptions, PaginationUpdate,
	};
}
