//! Pagination markup
//!
//! [`PaginationView`] renders a list of [`PageItem`]s into Bootstrap-compatible markup, and
//! [`ControlAction::from_click`] reads a clicked control back into an action. Every clickable
//! control is an `a.page-link` carrying `data-action` and, for numbered pages, `data-page`.

use jian_pages::{ClickTarget, warn_log};

use super::window::{Direction, PageItem, page_items};
use crate::component::Component;

/// Selector the controller delegates clicks to
pub const CONTROL_SELECTOR: &str = "a.page-link";

const PREV_LABEL: &str = "Previous";
const NEXT_LABEL: &str = "Next";

/// A snapshot of the bar for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
	items: Vec<PageItem>,
}

impl PaginationView {
	/// Builds the view for the given page state.
	pub fn new(current_page: usize, total_pages: usize, visible_pages: usize) -> Self {
		Self {
			items: page_items(current_page, total_pages, visible_pages),
		}
	}

	/// Builds a view from precomputed items.
	pub fn from_items(items: Vec<PageItem>) -> Self {
		Self { items }
	}

	/// The controls in display order.
	pub fn items(&self) -> &[PageItem] {
		&self.items
	}

	fn render_item(item: &PageItem) -> String {
		match item {
			PageItem::Nav { direction, enabled } => {
				let label = match direction {
					Direction::Prev => PREV_LABEL,
					Direction::Next => NEXT_LABEL,
				};
				if *enabled {
					format!(
						r#"<li class="page-item"><a href="javascript:void(0)" class="page-link" data-action="{}">{}</a></li>"#,
						direction.as_str(),
						label
					)
				} else {
					format!(
						r#"<li class="page-item disabled"><a href="javascript:void(0)" class="page-link" data-action="{}" data-disabled="true" style="pointer-events: none;">{}</a></li>"#,
						direction.as_str(),
						label
					)
				}
			}
			PageItem::Page { number, current } => format!(
				r#"<li class="page-item{}"><a href="javascript:void(0)" class="page-link" data-action="goto" data-page="{}">{}</a></li>"#,
				if *current { " active" } else { "" },
				number,
				number
			),
			PageItem::Ellipsis => {
				r#"<li class="page-item disabled"><span class="page-link">...</span></li>"#.to_string()
			}
		}
	}
}

impl Component for PaginationView {
	fn name(&self) -> &'static str {
		"Pagination"
	}

	fn render(&self) -> String {
		if self.items.is_empty() {
			return String::new();
		}

		let mut html = format!(r#"<ul class="{}">"#, self.class_attr());
		for item in &self.items {
			html.push_str(&Self::render_item(item));
		}
		html.push_str("</ul>");
		html
	}

	fn classes(&self) -> Vec<&'static str> {
		vec!["pagination"]
	}
}

/// What a click on a pagination control asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
	/// Move one page back
	Prev,
	/// Move one page forward
	Next,
	/// Jump to a page (clamped by the controller)
	GoTo(i64),
}

impl ControlAction {
	/// Reads the action of a clicked control.
	///
	/// Returns `None` for disabled controls, controls without a recognized `data-action`,
	/// and `goto` controls whose `data-page` is not an integer.
	pub fn from_click(target: &ClickTarget) -> Option<Self> {
		if target.is_disabled() {
			return None;
		}
		match target.data("action")? {
			"prev" => Some(Self::Prev),
			"next" => Some(Self::Next),
			"goto" => {
				let raw = target.data("page")?;
				match raw.trim().parse::<i64>() {
					Ok(page) => Some(Self::GoTo(page)),
					Err(_) => {
						warn_log!("[Pagination] Ignoring click on page {:?}", raw);
						None
					}
				}
			}
			_ => None,
		}
	}
}
