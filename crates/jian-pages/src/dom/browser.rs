//! Browser DOM bindings (WASM only).

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::{ClickHandler, ClickTarget, Container, Document};
use crate::error::DomError;
use crate::events::Subscription;

/// A container backed by a live DOM element.
#[derive(Debug, Clone)]
pub struct ElementContainer {
	element: web_sys::Element,
}

impl ElementContainer {
	/// Wraps `element`.
	pub fn new(element: web_sys::Element) -> Self {
		Self { element }
	}

	/// Returns the wrapped element.
	pub fn element(&self) -> &web_sys::Element {
		&self.element
	}
}

/// Collects the `data-*` attributes of `element`.
fn click_target_from(element: &web_sys::Element) -> ClickTarget {
	let mut target = ClickTarget::new();
	let names: js_sys::Array = element.get_attribute_names();
	for name in names.iter() {
		let Some(name) = name.as_string() else {
			continue;
		};
		if let Some(key) = name.strip_prefix("data-")
			&& let Some(value) = element.get_attribute(&name)
		{
			target = target.with_data(key, value);
		}
	}
	target
}

impl Container for ElementContainer {
	fn set_inner_html(&self, html: &str) {
		self.element.set_inner_html(html);
	}

	fn inner_html(&self) -> String {
		self.element.inner_html()
	}

	fn delegate_click(&self, selector: &str, handler: ClickHandler) -> Subscription {
		let root = self.element.clone();
		let selector = selector.to_string();

		let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
			let Some(origin) = event
				.target()
				.and_then(|t| t.dyn_into::<web_sys::Element>().ok())
			else {
				return;
			};
			// Only matches inside this container count
			let Ok(Some(matched)) = origin.closest(&selector) else {
				return;
			};
			let node: &web_sys::Node = matched.as_ref();
			if !root.contains(Some(node)) {
				return;
			}
			handler(&click_target_from(&matched));
		}) as Box<dyn FnMut(_)>);

		if let Err(err) = self
			.element
			.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
		{
			crate::error_log!("Failed to attach click listener: {:?}", err);
			return Subscription::noop();
		}

		let element = self.element.clone();
		Subscription::new(move || {
			let _ = element
				.remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
		})
	}
}

/// The page's `document`.
#[derive(Debug, Clone)]
pub struct BrowserDocument {
	document: web_sys::Document,
}

impl BrowserDocument {
	/// Binds to `window.document`.
	pub fn new() -> Result<Self, DomError> {
		let window = web_sys::window().ok_or(DomError::NoWindow)?;
		let document = window.document().ok_or(DomError::NoDocument)?;
		Ok(Self { document })
	}
}

impl Document for BrowserDocument {
	fn query_selector(&self, selector: &str) -> Option<Rc<dyn Container>> {
		self.document
			.query_selector(selector)
			.ok()
			.flatten()
			.map(|element| Rc::new(ElementContainer::new(element)) as Rc<dyn Container>)
	}
}
