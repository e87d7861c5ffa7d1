//! Address-bar fragment seam.
//!
//! Widgets that persist state in the fragment (the part of the address after `#`) talk to
//! a [`Location`] instead of `window.location`, so the same widget code runs against the
//! browser ([`BrowserLocation`], WASM only) or against [`MemoryLocation`].

use std::rc::Rc;

use crate::events::Subscription;

#[cfg(target_arch = "wasm32")]
pub mod browser;
pub mod memory;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserLocation;
pub use memory::MemoryLocation;

/// Handler invoked after the fragment changed.
pub type HashChangeHandler = Rc<dyn Fn()>;

/// Read/write access to the fragment plus change notification.
pub trait Location {
	/// Returns the fragment including the leading `#`, or an empty string when there is none.
	fn hash(&self) -> String;

	/// Sets the fragment. `hash` may be given with or without the leading `#`.
	///
	/// As in a browser, the change notification is not delivered synchronously.
	fn set_hash(&self, hash: &str);

	/// Subscribes to fragment changes until the returned subscription ends.
	fn on_hash_change(&self, handler: HashChangeHandler) -> Subscription;
}

/// Normalizes a fragment to its `#`-prefixed form, mapping `""` and `"#"` to `""`.
pub fn normalize_hash(hash: &str) -> String {
	let bare = hash.strip_prefix('#').unwrap_or(hash);
	if bare.is_empty() {
		String::new()
	} else {
		format!("#{}", bare)
	}
}
