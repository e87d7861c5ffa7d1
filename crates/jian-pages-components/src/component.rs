//! Core component trait

/// Component trait - base interface for all renderable widgets
///
/// A component is a snapshot of widget state that renders to an HTML string. Live widgets
/// build one per render pass and write its output into their container.
pub trait Component {
	/// Returns the component's name (for debugging)
	fn name(&self) -> &'static str;

	/// Renders the component to HTML string
	fn render(&self) -> String;

	/// Returns CSS classes for the component's root element
	fn classes(&self) -> Vec<&'static str> {
		vec![]
	}

	/// Joins [`Component::classes`] into a `class` attribute value
	fn class_attr(&self) -> String {
		self.classes().join(" ")
	}
}
