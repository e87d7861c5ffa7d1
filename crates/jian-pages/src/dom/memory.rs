//! In-memory DOM.
//!
//! [`MemoryContainer`] records what was rendered into it and which delegated listeners are
//! attached. Clicks are simulated with [`MemoryContainer::click`], which hands the target to
//! every listener attached at the moment of the click.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::{ClickHandler, ClickTarget, Container, Document};
use crate::events::Subscription;

struct Listener {
	id: u64,
	selector: String,
	handler: ClickHandler,
}

/// A container that keeps its content and listeners in memory.
#[derive(Default)]
pub struct MemoryContainer {
	html: RefCell<String>,
	renders: Cell<usize>,
	listeners: Rc<RefCell<Vec<Listener>>>,
	next_id: Cell<u64>,
}

impl MemoryContainer {
	/// Creates an empty container.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of times the content was replaced.
	pub fn render_count(&self) -> usize {
		self.renders.get()
	}

	/// Number of delegated listeners currently attached.
	pub fn listener_count(&self) -> usize {
		self.listeners.borrow().len()
	}

	/// Selectors of the attached listeners, in attach order.
	pub fn listener_selectors(&self) -> Vec<String> {
		self.listeners
			.borrow()
			.iter()
			.map(|l| l.selector.clone())
			.collect()
	}

	/// Simulates a click on an element inside the container that resolved to `target`.
	///
	/// Returns the number of listeners that received the click. Handlers run after the
	/// listener list is released, so a handler may re-render the container.
	pub fn click(&self, target: &ClickTarget) -> usize {
		let handlers: Vec<ClickHandler> = self
			.listeners
			.borrow()
			.iter()
			.map(|l| Rc::clone(&l.handler))
			.collect();
		for handler in &handlers {
			handler(target);
		}
		handlers.len()
	}
}

impl std::fmt::Debug for MemoryContainer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MemoryContainer")
			.field("html", &self.html.borrow())
			.field("renders", &self.renders.get())
			.field("listeners", &self.listener_count())
			.finish()
	}
}

impl Container for MemoryContainer {
	fn set_inner_html(&self, html: &str) {
		*self.html.borrow_mut() = html.to_string();
		self.renders.set(self.renders.get() + 1);
	}

	fn inner_html(&self) -> String {
		self.html.borrow().clone()
	}

	fn delegate_click(&self, selector: &str, handler: ClickHandler) -> Subscription {
		let id = self.next_id.get();
		self.next_id.set(id + 1);
		self.listeners.borrow_mut().push(Listener {
			id,
			selector: selector.to_string(),
			handler,
		});

		let listeners = Rc::downgrade(&self.listeners);
		Subscription::new(move || {
			if let Some(listeners) = listeners.upgrade() {
				listeners.borrow_mut().retain(|l| l.id != id);
			}
		})
	}
}

/// A document whose elements are registered up front by selector.
#[derive(Debug, Default)]
pub struct MemoryDocument {
	elements: RefCell<HashMap<String, Rc<MemoryContainer>>>,
}

impl MemoryDocument {
	/// Creates an empty document.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a fresh container under `selector` and returns it.
	pub fn create(&self, selector: &str) -> Rc<MemoryContainer> {
		let container = Rc::new(MemoryContainer::new());
		self.insert(selector, Rc::clone(&container));
		container
	}

	/// Registers `container` under `selector`, replacing any previous registration.
	pub fn insert(&self, selector: &str, container: Rc<MemoryContainer>) {
		self.elements
			.borrow_mut()
			.insert(selector.to_string(), container);
	}
}

impl Document for MemoryDocument {
	fn query_selector(&self, selector: &str) -> Option<Rc<dyn Container>> {
		self.elements
			.borrow()
			.get(selector)
			.map(|c| Rc::clone(c) as Rc<dyn Container>)
	}
}
