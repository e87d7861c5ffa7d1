//! Pagination configuration
//!
//! [`PaginationOptions`] is what callers hand to the controller, [`PaginationUpdate`] is the
//! partial form accepted by `update()`, and [`PaginationConfig`] is the normalized state the
//! controller owns. Normalization happens in exactly two places:
//! [`PaginationConfig::from_options`] and [`PaginationConfig::apply`].

use std::ops::Range;

use jian_pages::Callback;
use serde::Deserialize;

use crate::error::Result;

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Default number of numbered controls in the window
pub const DEFAULT_VISIBLE_PAGES: usize = 5;
/// Default fragment key, giving fragments like `#page=3`
pub const DEFAULT_HASH_KEY: &str = "page";

/// Options recognized by the pagination controller.
///
/// | Option | Default |
/// |--------|---------|
/// | `total_items` | `0` |
/// | `total_pages` | absent (derived from `total_items`) |
/// | `page_size` | `10` |
/// | `current_page` | `1` |
/// | `visible_pages` | `5` |
/// | `use_hash` | `false` |
/// | `hash_key` | `"page"` |
/// | `on_page_change` | absent |
///
/// Zero values are treated as "not given": a zero `page_size` or `visible_pages` falls back
/// to its default, a zero `current_page` becomes 1, `total_pages = Some(0)` means absent, and
/// an empty `hash_key` becomes `"page"`.
///
/// Options can also be read from a JSON document with camelCase keys. `total` and
/// `hashPrefix` are accepted as aliases for `totalItems` and `hashKey`:
///
/// ```ignore
/// let options = PaginationOptions::from_json(r#"{"total": 95, "useHash": true}"#)?;
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaginationOptions {
	/// Total number of items
	#[serde(alias = "total")]
	pub total_items: usize,
	/// Total number of pages, overriding the value derived from `total_items`
	pub total_pages: Option<usize>,
	/// Number of items per page
	pub page_size: usize,
	/// Initial page (1-indexed)
	pub current_page: usize,
	/// Number of numbered controls in the window
	pub visible_pages: usize,
	/// Keep the current page in the address-bar fragment
	pub use_hash: bool,
	/// Fragment key used when `use_hash` is set
	#[serde(alias = "hashPrefix")]
	pub hash_key: String,
	/// Invoked with the new page after every successful transition
	#[serde(skip)]
	pub on_page_change: Option<Callback<usize>>,
}

impl Default for PaginationOptions {
	fn default() -> Self {
		Self {
			total_items: 0,
			total_pages: None,
			page_size: DEFAULT_PAGE_SIZE,
			current_page: 1,
			visible_pages: DEFAULT_VISIBLE_PAGES,
			use_hash: false,
			hash_key: DEFAULT_HASH_KEY.to_string(),
			on_page_change: None,
		}
	}
}

impl PaginationOptions {
	/// Creates options with every default applied.
	pub fn new() -> Self {
		Self::default()
	}

	/// Decodes options from a JSON document.
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}

	/// Sets the total number of items.
	pub fn total_items(mut self, total_items: usize) -> Self {
		self.total_items = total_items;
		self
	}

	/// Sets the total number of pages directly.
	pub fn total_pages(mut self, total_pages: usize) -> Self {
		self.total_pages = Some(total_pages);
		self
	}

	/// Sets the number of items per page.
	pub fn page_size(mut self, page_size: usize) -> Self {
		self.page_size = page_size;
		self
	}

	/// Sets the initial page.
	pub fn current_page(mut self, current_page: usize) -> Self {
		self.current_page = current_page;
		self
	}

	/// Sets the window size.
	pub fn visible_pages(mut self, visible_pages: usize) -> Self {
		self.visible_pages = visible_pages;
		self
	}

	/// Enables or disables fragment synchronization.
	pub fn use_hash(mut self, use_hash: bool) -> Self {
		self.use_hash = use_hash;
		self
	}

	/// Sets the fragment key.
	pub fn hash_key(mut self, hash_key: impl Into<String>) -> Self {
		self.hash_key = hash_key.into();
		self
	}

	/// Sets the page-change callback.
	pub fn on_page_change(mut self, callback: Callback<usize>) -> Self {
		self.on_page_change = Some(callback);
		self
	}
}

/// A partial set of options for `update()`. Absent fields keep their current value.
///
/// `total_pages = Some(0)` removes a previously set page-count override.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaginationUpdate {
	/// New total number of items
	#[serde(alias = "total")]
	pub total_items: Option<usize>,
	/// New page-count override
	pub total_pages: Option<usize>,
	/// New page size
	pub page_size: Option<usize>,
	/// New current page (clamped, no callback)
	pub current_page: Option<usize>,
	/// New window size
	pub visible_pages: Option<usize>,
	/// Turn fragment synchronization on or off
	pub use_hash: Option<bool>,
	/// New fragment key
	#[serde(alias = "hashPrefix")]
	pub hash_key: Option<String>,
	/// New page-change callback
	#[serde(skip)]
	pub on_page_change: Option<Callback<usize>>,
}

impl PaginationUpdate {
	/// Creates an empty update.
	pub fn new() -> Self {
		Self::default()
	}

	/// Decodes an update from a JSON document.
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}

	/// Sets the total number of items.
	pub fn total_items(mut self, total_items: usize) -> Self {
		self.total_items = Some(total_items);
		self
	}

	/// Sets the page-count override (`0` removes it).
	pub fn total_pages(mut self, total_pages: usize) -> Self {
		self.total_pages = Some(total_pages);
		self
	}

	/// Sets the page size.
	pub fn page_size(mut self, page_size: usize) -> Self {
		self.page_size = Some(page_size);
		self
	}

	/// Sets the current page.
	pub fn current_page(mut self, current_page: usize) -> Self {
		self.current_page = Some(current_page);
		self
	}

	/// Sets the window size.
	pub fn visible_pages(mut self, visible_pages: usize) -> Self {
		self.visible_pages = Some(visible_pages);
		self
	}

	/// Turns fragment synchronization on or off.
	pub fn use_hash(mut self, use_hash: bool) -> Self {
		self.use_hash = Some(use_hash);
		self
	}

	/// Sets the fragment key.
	pub fn hash_key(mut self, hash_key: impl Into<String>) -> Self {
		self.hash_key = Some(hash_key.into());
		self
	}

	/// Replaces the page-change callback.
	pub fn on_page_change(mut self, callback: Callback<usize>) -> Self {
		self.on_page_change = Some(callback);
		self
	}
}

/// Normalized controller state.
///
/// Invariant: `1 <= current_page <= total_pages()` after every constructor or mutator.
#[derive(Debug, Clone)]
pub struct PaginationConfig {
	total_items: usize,
	total_pages_override: Option<usize>,
	page_size: usize,
	current_page: usize,
	visible_pages: usize,
	use_hash: bool,
	hash_key: String,
	on_page_change: Option<Callback<usize>>,
}

fn or_default(value: usize, default: usize) -> usize {
	if value == 0 { default } else { value }
}

fn non_empty_key(key: String) -> String {
	if key.is_empty() {
		DEFAULT_HASH_KEY.to_string()
	} else {
		key
	}
}

impl PaginationConfig {
	/// Normalizes `options` and clamps the initial page.
	pub fn from_options(options: PaginationOptions) -> Self {
		let mut config = Self {
			total_items: options.total_items,
			total_pages_override: options.total_pages.filter(|&n| n > 0),
			page_size: or_default(options.page_size, DEFAULT_PAGE_SIZE),
			current_page: options.current_page,
			visible_pages: or_default(options.visible_pages, DEFAULT_VISIBLE_PAGES),
			use_hash: options.use_hash,
			hash_key: non_empty_key(options.hash_key),
			on_page_change: options.on_page_change,
		};
		config.current_page = config.current_page.clamp(1, config.total_pages());
		config
	}

	/// Merges `update` into the configuration and re-clamps the current page against the
	/// recomputed page count. Returns true if `use_hash` or `hash_key` changed.
	pub fn apply(&mut self, update: PaginationUpdate) -> bool {
		let before = (self.use_hash, self.hash_key.clone());

		if let Some(total_items) = update.total_items {
			self.total_items = total_items;
		}
		if let Some(total_pages) = update.total_pages {
			self.total_pages_override = (total_pages > 0).then_some(total_pages);
		}
		if let Some(page_size) = update.page_size {
			self.page_size = or_default(page_size, DEFAULT_PAGE_SIZE);
		}
		if let Some(current_page) = update.current_page {
			self.current_page = current_page;
		}
		if let Some(visible_pages) = update.visible_pages {
			self.visible_pages = or_default(visible_pages, DEFAULT_VISIBLE_PAGES);
		}
		if let Some(use_hash) = update.use_hash {
			self.use_hash = use_hash;
		}
		if let Some(hash_key) = update.hash_key {
			self.hash_key = non_empty_key(hash_key);
		}
		if let Some(callback) = update.on_page_change {
			self.on_page_change = Some(callback);
		}

		self.current_page = self.current_page.clamp(1, self.total_pages());

		before != (self.use_hash, self.hash_key.clone())
	}

	/// Page count: the override when present, otherwise `ceil(total_items / page_size)`,
	/// never less than 1.
	pub fn total_pages(&self) -> usize {
		self.total_pages_override
			.unwrap_or_else(|| self.total_items.div_ceil(self.page_size))
			.max(1)
	}

	/// Saturates `page` into `[1, total_pages()]`.
	pub fn clamp(&self, page: i64) -> usize {
		let last = self.total_pages();
		if page < 1 {
			1
		} else {
			usize::try_from(page).map_or(last, |p| p.min(last))
		}
	}

	/// Moves to `page`, which must already be clamped. Returns false if nothing changed.
	pub(crate) fn set_current_page(&mut self, page: usize) -> bool {
		debug_assert!((1..=self.total_pages()).contains(&page));
		if page == self.current_page {
			return false;
		}
		self.current_page = page;
		true
	}

	/// Current page (1-indexed)
	pub fn current_page(&self) -> usize {
		self.current_page
	}

	/// Items per page
	pub fn page_size(&self) -> usize {
		self.page_size
	}

	/// Total number of items
	pub fn total_items(&self) -> usize {
		self.total_items
	}

	/// Window size
	pub fn visible_pages(&self) -> usize {
		self.visible_pages
	}

	/// Whether fragment synchronization is enabled
	pub fn use_hash(&self) -> bool {
		self.use_hash
	}

	/// Fragment key
	pub fn hash_key(&self) -> &str {
		&self.hash_key
	}

	/// Page-change callback
	pub fn on_page_change(&self) -> Option<&Callback<usize>> {
		self.on_page_change.as_ref()
	}

	/// Returns the start index for the current page (0-indexed)
	pub fn start_index(&self) -> usize {
		(self.current_page - 1).saturating_mul(self.page_size)
	}

	/// Returns the end index for the current page (exclusive, 0-indexed)
	pub fn end_index(&self) -> usize {
		self.start_index()
			.saturating_add(self.page_size)
			.min(self.total_items)
	}

	/// Item indices shown on the current page. Empty when the page lies past `total_items`,
	/// which happens when the page count is overridden.
	pub fn item_range(&self) -> Range<usize> {
		let start = self.start_index().min(self.total_items);
		start..self.end_index()
	}
}
