//! # Jian Pages
//!
//! Browser runtime seams for Jian widgets.
//!
//! Widgets never touch `window` or `document` directly. They render into a
//! [`Container`], install listeners that are owned as [`Subscription`]s, and read and write
//! the address-bar fragment through a [`Location`]. Each seam has a browser implementation
//! (compiled for `wasm32`) and an in-memory implementation that runs anywhere.
//!
//! ## Modules
//!
//! - [`dom`]: containers, delegated click handling, selector lookup
//! - [`location`]: fragment access and `hashchange` notification
//! - [`events`]: listener ownership ([`Subscription`], [`ListenerSlot`])
//! - [`callback`]: cloneable notification callbacks
//! - [`platform`]: the document and location a widget is mounted into
//! - [`logging`]: `debug_log!`, `info_log!`, `warn_log!`, `error_log!`
//!
//! ## Example
//!
//! ```ignore
//! use jian_pages::Platform;
//!
//! let platform = Platform::browser()?;
//! let container = platform.document().query_selector("#pagination");
//! ```

#![warn(missing_docs)]

pub mod callback;
pub mod dom;
pub mod error;
pub mod events;
pub mod location;
pub mod logging;
pub mod platform;

pub use callback::Callback;
#[cfg(target_arch = "wasm32")]
pub use dom::{BrowserDocument, ElementContainer};
pub use dom::{
	ClickHandler, ClickTarget, Container, Document, MemoryContainer, MemoryDocument, MountTarget,
};
pub use error::DomError;
pub use events::{ListenerSlot, Subscription};
#[cfg(target_arch = "wasm32")]
pub use location::BrowserLocation;
pub use location::{HashChangeHandler, Location, MemoryLocation};
pub use platform::Platform;

// Logging macros are exported at the crate root via #[macro_export]
