//! `window.location` bindings (WASM only).

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::{HashChangeHandler, Location};
use crate::error::DomError;
use crate::events::Subscription;

/// The page's `window.location`.
#[derive(Debug, Clone)]
pub struct BrowserLocation {
	window: web_sys::Window,
}

impl BrowserLocation {
	/// Binds to the global window.
	pub fn new() -> Result<Self, DomError> {
		let window = web_sys::window().ok_or(DomError::NoWindow)?;
		Ok(Self { window })
	}
}

impl Location for BrowserLocation {
	fn hash(&self) -> String {
		self.window.location().hash().unwrap_or_default()
	}

	fn set_hash(&self, hash: &str) {
		if let Err(err) = self.window.location().set_hash(hash) {
			crate::warn_log!("Failed to set location hash: {:?}", err);
		}
	}

	fn on_hash_change(&self, handler: HashChangeHandler) -> Subscription {
		let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
			handler();
		}) as Box<dyn FnMut(_)>);

		if let Err(err) = self
			.window
			.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())
		{
			crate::error_log!("Failed to attach hashchange listener: {:?}", err);
			return Subscription::noop();
		}

		let window = self.window.clone();
		Subscription::new(move || {
			let _ = window
				.remove_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
		})
	}
}
