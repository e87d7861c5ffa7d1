//! Pagination widget
//!
//! A numbered page bar with previous/next controls, a sliding window of page links,
//! first/last anchors, and optional synchronization of the current page with the
//! address-bar fragment.
//!
//! - [`config`]: options, partial updates, and the normalized state
//! - [`window`]: which controls to show for a given page state
//! - [`render`]: markup for those controls and decoding of clicks on them
//! - [`hash`]: the `#<key>=<page>` fragment bridge
//! - [`controller`]: the mounted bar tying them together

pub mod config;
pub mod controller;
pub mod hash;
pub mod render;
pub mod window;

pub use config::{
	DEFAULT_HASH_KEY, DEFAULT_PAGE_SIZE, DEFAULT_VISIBLE_PAGES, PaginationConfig,
	PaginationOptions, PaginationUpdate,
};
pub use controller::Pagination;
pub use hash::{HashSync, format_page, parse_page};
pub use render::{CONTROL_SELECTOR, ControlAction, PaginationView};
pub use window::{Direction, PageItem, page_items, window_range};
