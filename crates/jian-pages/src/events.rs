//! Listener ownership.
//!
//! Every listener a widget installs on the page is represented by a [`Subscription`].
//! Dropping the subscription removes the listener, so the widget, not the platform, decides
//! how long a listener lives. [`ListenerSlot`] holds at most one active subscription and
//! releases the old one before a replacement is created.

use std::fmt;

/// An installed listener. Removing the listener happens exactly once, either through
/// [`Subscription::unsubscribe`] or when the value is dropped.
#[must_use = "dropping a Subscription immediately removes the listener"]
pub struct Subscription {
	release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
	/// Creates a subscription that runs `release` when it ends.
	pub fn new<F>(release: F) -> Self
	where
		F: FnOnce() + 'static,
	{
		Self {
			release: Some(Box::new(release)),
		}
	}

	/// A subscription with nothing to release.
	pub fn noop() -> Self {
		Self { release: None }
	}

	/// Removes the listener now.
	pub fn unsubscribe(mut self) {
		self.release_now();
	}

	fn release_now(&mut self) {
		if let Some(release) = self.release.take() {
			release();
		}
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		self.release_now();
	}
}

impl fmt::Debug for Subscription {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Subscription")
			.field("active", &self.release.is_some())
			.finish()
	}
}

/// Single-slot owner of one listener.
///
/// Installing through [`ListenerSlot::replace`] always releases the current occupant
/// before the factory for the new one runs, so two listeners from the same slot are
/// never attached at the same time.
#[derive(Debug, Default)]
pub struct ListenerSlot {
	active: Option<Subscription>,
}

impl ListenerSlot {
	/// Creates an empty slot.
	pub fn new() -> Self {
		Self::default()
	}

	/// Releases the current listener, then installs the one built by `install`.
	pub fn replace<F>(&mut self, install: F)
	where
		F: FnOnce() -> Subscription,
	{
		self.release();
		self.active = Some(install());
	}

	/// Releases the current listener. Returns false if the slot was already empty.
	pub fn release(&mut self) -> bool {
		match self.active.take() {
			Some(subscription) => {
				subscription.unsubscribe();
				true
			}
			None => false,
		}
	}

	/// Returns true while a listener is installed.
	pub fn is_active(&self) -> bool {
		self.active.is_some()
	}
}
