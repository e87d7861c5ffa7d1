//! Fragment synchronization
//!
//! Keeps the current page in the address-bar fragment as `#<key>=<page>`. Only fragments
//! consisting of exactly one `key=value` pair are understood; anything else is ignored.

use std::rc::Rc;

use jian_pages::{HashChangeHandler, ListenerSlot, Location, debug_log};

/// Reads the page number stored under `key` in `hash`.
///
/// Accepts `#key=N` or `key=N` where `N` is a decimal integer of at least 1. Returns `None`
/// for every other fragment.
pub fn parse_page(hash: &str, key: &str) -> Option<usize> {
	let bare = hash.strip_prefix('#').unwrap_or(hash);
	let value = bare.strip_prefix(key)?.strip_prefix('=')?;
	match value.parse::<usize>() {
		Ok(page) if page >= 1 && value.bytes().all(|b| b.is_ascii_digit()) => Some(page),
		_ => {
			debug_log!("[Pagination] Ignoring fragment {:?} for key {:?}", hash, key);
			None
		}
	}
}

/// Formats the fragment value for `page`, without the leading `#`.
pub fn format_page(key: &str, page: usize) -> String {
	format!("{}={}", key, page)
}

/// Bridge between one fragment key and the controller's current page.
pub struct HashSync {
	location: Rc<dyn Location>,
	key: String,
	listener: ListenerSlot,
}

impl HashSync {
	/// Creates an idle synchronizer for `key`.
	pub fn new(location: Rc<dyn Location>, key: impl Into<String>) -> Self {
		Self {
			location,
			key: key.into(),
			listener: ListenerSlot::new(),
		}
	}

	/// The fragment key
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Changes the fragment key. The caller re-installs the listener if needed.
	pub fn set_key(&mut self, key: impl Into<String>) {
		self.key = key.into();
	}

	/// Reads the page currently stored in the fragment.
	pub fn read(&self) -> Option<usize> {
		parse_page(&self.location.hash(), &self.key)
	}

	/// Stores `page` in the fragment.
	pub fn write(&self, page: usize) {
		self.location.set_hash(&format_page(&self.key, page));
	}

	/// Installs the change listener, replacing any previous one.
	pub fn listen(&mut self, handler: HashChangeHandler) {
		let location = Rc::clone(&self.location);
		self.listener
			.replace(move || location.on_hash_change(handler));
	}

	/// Removes the change listener. Returns false if none was installed.
	pub fn stop(&mut self) -> bool {
		self.listener.release()
	}

	/// Returns true while the change listener is installed.
	pub fn is_listening(&self) -> bool {
		self.listener.is_active()
	}
}

impl std::fmt::Debug for HashSync {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("HashSync")
			.field("key", &self.key)
			.field("listening", &self.is_listening())
			.finish()
	}
}
