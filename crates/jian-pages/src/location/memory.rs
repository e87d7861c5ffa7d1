//! In-memory location.
//!
//! Models browser timing: [`Location::set_hash`] updates the fragment immediately but only
//! queues the change notification, which [`MemoryLocation::flush`] delivers. An external
//! address-bar edit is simulated with [`MemoryLocation::navigate`], which notifies at once.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::{HashChangeHandler, Location, normalize_hash};
use crate::events::Subscription;

/// A fragment held in memory.
#[derive(Default)]
pub struct MemoryLocation {
	hash: RefCell<String>,
	writes: RefCell<Vec<String>>,
	pending: Cell<usize>,
	handlers: Rc<RefCell<Vec<(u64, HashChangeHandler)>>>,
	next_id: Cell<u64>,
}

impl MemoryLocation {
	/// Creates a location with an empty fragment.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a location whose fragment starts as `hash`.
	pub fn with_hash(hash: &str) -> Self {
		let location = Self::new();
		*location.hash.borrow_mut() = normalize_hash(hash);
		location
	}

	/// Every value written through [`Location::set_hash`], normalized, in order.
	pub fn writes(&self) -> Vec<String> {
		self.writes.borrow().clone()
	}

	/// Number of change notifications queued by `set_hash` and not yet delivered.
	pub fn pending(&self) -> usize {
		self.pending.get()
	}

	/// Number of active change subscriptions.
	pub fn subscriber_count(&self) -> usize {
		self.handlers.borrow().len()
	}

	/// Delivers queued change notifications. Returns how many were delivered.
	pub fn flush(&self) -> usize {
		let queued = self.pending.replace(0);
		for _ in 0..queued {
			self.notify();
		}
		queued
	}

	/// Simulates the user editing the address bar or following a link.
	pub fn navigate(&self, hash: &str) {
		*self.hash.borrow_mut() = normalize_hash(hash);
		self.notify();
	}

	fn notify(&self) {
		let handlers: Vec<HashChangeHandler> = self
			.handlers
			.borrow()
			.iter()
			.map(|(_, h)| Rc::clone(h))
			.collect();
		for handler in handlers {
			handler();
		}
	}
}

impl std::fmt::Debug for MemoryLocation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MemoryLocation")
			.field("hash", &self.hash.borrow())
			.field("pending", &self.pending.get())
			.field("subscribers", &self.subscriber_count())
			.finish()
	}
}

impl Location for MemoryLocation {
	fn hash(&self) -> String {
		self.hash.borrow().clone()
	}

	fn set_hash(&self, hash: &str) {
		let hash = normalize_hash(hash);
		let changed = *self.hash.borrow() != hash;
		*self.hash.borrow_mut() = hash.clone();
		self.writes.borrow_mut().push(hash);
		// Browsers only fire hashchange when the fragment actually changed
		if changed {
			self.pending.set(self.pending.get() + 1);
		}
	}

	fn on_hash_change(&self, handler: HashChangeHandler) -> Subscription {
		let id = self.next_id.get();
		self.next_id.set(id + 1);
		self.handlers.borrow_mut().push((id, handler));

		let handlers = Rc::downgrade(&self.handlers);
		Subscription::new(move || {
			if let Some(handlers) = handlers.upgrade() {
				handlers.borrow_mut().retain(|(i, _)| *i != id);
			}
		})
	}
}
