//! DOM seam.
//!
//! Widgets render into a [`Container`] and learn about user clicks through one delegated
//! click listener per container. A [`Document`] resolves selectors to containers.
//!
//! Two implementations are provided:
//!
//! - [`memory`]: an in-memory container and document, available on every target. Used by
//!   tests and by server-side rendering.
//! - `browser` (WASM only): wraps `web_sys::Element` and `web_sys::Document`.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::events::Subscription;

#[cfg(target_arch = "wasm32")]
pub mod browser;
pub mod memory;

#[cfg(target_arch = "wasm32")]
pub use browser::{BrowserDocument, ElementContainer};
pub use memory::{MemoryContainer, MemoryDocument};

/// Handler invoked by a delegated click listener.
pub type ClickHandler = Rc<dyn Fn(&ClickTarget)>;

/// The element a delegated click resolved to.
///
/// Holds the `data-*` attributes of the closest ancestor of the click origin that
/// matched the delegation selector, keyed without the `data-` prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTarget {
	data: HashMap<String, String>,
}

impl ClickTarget {
	/// Creates a target with no data attributes.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a data attribute (`name` without the `data-` prefix).
	pub fn with_data(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.data.insert(name.into(), value.into());
		self
	}

	/// Returns the value of `data-<name>`.
	pub fn data(&self, name: &str) -> Option<&str> {
		self.data.get(name).map(String::as_str)
	}

	/// Returns true if the element carries `data-disabled="true"`.
	pub fn is_disabled(&self) -> bool {
		self.data("disabled") == Some("true")
	}
}

/// A rendering target owned by one widget.
pub trait Container {
	/// Replaces the container's content.
	fn set_inner_html(&self, html: &str);

	/// Returns the container's current content.
	fn inner_html(&self) -> String;

	/// Installs a click listener on the container itself. Clicks on descendants are
	/// delivered to `handler` when their closest ancestor matching `selector` lies
	/// inside the container. The listener stays installed until the returned
	/// subscription ends.
	fn delegate_click(&self, selector: &str, handler: ClickHandler) -> Subscription;
}

/// Resolves selectors to containers.
pub trait Document {
	/// Returns the first element matching `selector`.
	fn query_selector(&self, selector: &str) -> Option<Rc<dyn Container>>;
}

/// What a widget is mounted on: an already resolved container or a selector still to be
/// looked up in a [`Document`].
#[derive(Clone)]
pub enum MountTarget {
	/// A resolved container
	Element(Rc<dyn Container>),
	/// A selector such as `#pagination`
	Selector(String),
}

impl MountTarget {
	/// Resolves the target against `document`.
	pub fn resolve(&self, document: &dyn Document) -> Option<Rc<dyn Container>> {
		match self {
			Self::Element(container) => Some(Rc::clone(container)),
			Self::Selector(selector) => document.query_selector(selector),
		}
	}
}

impl fmt::Debug for MountTarget {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Element(_) => f.write_str("Element(<container>)"),
			Self::Selector(selector) => f.debug_tuple("Selector").field(selector).finish(),
		}
	}
}

impl fmt::Display for MountTarget {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Element(_) => f.write_str("<element>"),
			Self::Selector(selector) => f.write_str(selector),
		}
	}
}

impl From<&str> for MountTarget {
	fn from(selector: &str) -> Self {
		Self::Selector(selector.to_string())
	}
}

impl From<String> for MountTarget {
	fn from(selector: String) -> Self {
		Self::Selector(selector)
	}
}

impl From<Rc<dyn Container>> for MountTarget {
	fn from(container: Rc<dyn Container>) -> Self {
		Self::Element(container)
	}
}

impl From<Rc<MemoryContainer>> for MountTarget {
	fn from(container: Rc<MemoryContainer>) -> Self {
		Self::Element(container)
	}
}

#[cfg(target_arch = "wasm32")]
impl From<web_sys::Element> for MountTarget {
	fn from(element: web_sys::Element) -> Self {
		Self::Element(Rc::new(ElementContainer::new(element)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_click_target_data() {
		let target = ClickTarget::new()
			.with_data("action", "goto")
			.with_data("page", "4");
		assert_eq!(target.data("action"), Some("goto"));
		assert_eq!(target.data("page"), Some("4"));
		assert_eq!(target.data("missing"), None);
		assert!(!target.is_disabled());
	}

	#[rstest]
	#[case("true", true)]
	#[case("false", false)]
	#[case("", false)]
	fn test_click_target_disabled(#[case] value: &str, #[case] expected: bool) {
		let target = ClickTarget::new().with_data("disabled", value);
		assert_eq!(target.is_disabled(), expected);
	}

	#[rstest]
	fn test_mount_target_resolves_selector() {
		let document = MemoryDocument::new();
		let container = document.create("#pager");

		let target = MountTarget::from("#pager");
		let resolved = target.resolve(&document);
		assert!(resolved.is_some());

		resolved.unwrap().set_inner_html("<ul></ul>");
		assert_eq!(container.inner_html(), "<ul></ul>");
	}

	#[rstest]
	fn test_mount_target_missing_selector() {
		let document = MemoryDocument::new();
		assert!(MountTarget::from("#missing").resolve(&document).is_none());
	}

	#[rstest]
	fn test_mount_target_element_skips_lookup() {
		let document = MemoryDocument::new();
		let container = Rc::new(MemoryContainer::new());
		let target = MountTarget::from(Rc::clone(&container));
		assert!(target.resolve(&document).is_some());
		assert_eq!(target.to_string(), "<element>");
	}
}
