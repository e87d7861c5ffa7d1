//! Page window computation
//!
//! Turns `(current_page, total_pages, visible_pages)` into the ordered list of controls a
//! pagination bar shows:
//!
//! ```text
//! [prev] [1] [...] [8] [9] [10] [11] [12] [...] [20] [next]
//! ```
//!
//! The numbered run is centered on the current page and slides to hug either end of the
//! range, so it always holds `min(visible_pages, total_pages)` numbers. The first and last
//! page are added as anchors when the run does not reach them, with a single ellipsis
//! marking a gap of at least one page.

use std::ops::RangeInclusive;

/// Direction of a navigation control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	/// Towards page 1
	Prev,
	/// Towards the last page
	Next,
}

impl Direction {
	/// Value of the control's `data-action` attribute
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Prev => "prev",
			Self::Next => "next",
		}
	}
}

/// One control in a rendered pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
	/// Previous/next control
	Nav {
		/// Which way the control moves
		direction: Direction,
		/// False at the corresponding end of the range
		enabled: bool,
	},
	/// A numbered page, including the first/last anchors
	Page {
		/// The page number (1-indexed)
		number: usize,
		/// True for the current page
		current: bool,
	},
	/// A gap between the anchors and the window
	Ellipsis,
}

/// Returns the numbered run of pages to show.
///
/// `current` is clamped into `[1, total]` and `total`/`visible` are treated as at least 1.
pub fn window_range(current: usize, total: usize, visible: usize) -> RangeInclusive<usize> {
	let total = total.max(1);
	let visible = visible.max(1);
	let current = current.clamp(1, total);

	let mut start = current.saturating_sub(visible / 2).max(1);
	let end = total.min(start.saturating_add(visible - 1));
	if end - start + 1 < visible {
		start = end.saturating_sub(visible - 1).max(1);
	}
	start..=end
}

/// Returns every control of the bar, in display order. Empty when there is a single page.
pub fn page_items(current: usize, total: usize, visible: usize) -> Vec<PageItem> {
	if total <= 1 {
		return Vec::new();
	}

	let range = window_range(current, total, visible);
	let (start, end) = (*range.start(), *range.end());
	let current = current.clamp(1, total);

	let mut items = Vec::with_capacity(end - start + 7);
	items.push(PageItem::Nav {
		direction: Direction::Prev,
		enabled: current > 1,
	});

	if start > 1 {
		items.push(PageItem::Page {
			number: 1,
			current: false,
		});
		if start > 2 {
			items.push(PageItem::Ellipsis);
		}
	}

	items.extend(range.map(|number| PageItem::Page {
		number,
		current: number == current,
	}));

	if end < total {
		if end < total - 1 {
			items.push(PageItem::Ellipsis);
		}
		items.push(PageItem::Page {
			number: total,
			current: false,
		});
	}

	items.push(PageItem::Nav {
		direction: Direction::Next,
		enabled: current < total,
	});
	items
}
