//! Pagination controller
//!
//! [`Pagination`] owns the page state of one pagination bar, renders it into its container,
//! and keeps exactly one delegated click listener and at most one fragment listener alive.
//!
//! Every navigation either completes fully, in the order state → render → fragment write →
//! callback, or does nothing at all. The callback runs after the controller's state is
//! released, so it may call back into the controller.

use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;

use jian_pages::{
	Callback, ClickTarget, Container, ListenerSlot, MountTarget, Platform, debug_log, error_log,
};

use super::config::{PaginationConfig, PaginationOptions, PaginationUpdate};
use super::hash::HashSync;
use super::render::{CONTROL_SELECTOR, ControlAction, PaginationView};
use crate::component::Component;
use crate::error::{ComponentError, Result};

struct Inner {
	/// `None` when the mount target did not resolve
	container: Option<Rc<dyn Container>>,
	config: PaginationConfig,
	hash: HashSync,
	click: ListenerSlot,
	destroyed: bool,
}

impl Inner {
	fn is_live(&self) -> bool {
		self.container.is_some() && !self.destroyed
	}

	fn notification(&self, page: usize) -> Option<(Callback<usize>, usize)> {
		self.config.on_page_change().cloned().map(|callback| (callback, page))
	}
}

/// A mounted pagination bar.
///
/// Cloning the handle shares the same bar. The installed listeners keep the bar alive, so a
/// bar mounted without keeping its handle keeps responding to clicks and fragment changes.
/// Only [`Pagination::destroy`] removes the listeners and releases the bar.
///
/// # Example
///
/// ```ignore
/// use jian_pages::{Callback, Platform};
/// use jian_pages_components::pagination::{Pagination, PaginationOptions};
///
/// let platform = Platform::browser()?;
/// let pagination = Pagination::mount(
///     "#pagination-container",
///     PaginationOptions::new()
///         .total_items(100)
///         .use_hash(true)
///         .on_page_change(Callback::new(|page| info_log!("page {}", page))),
///     &platform,
/// );
/// pagination.goto(3);
/// ```
#[derive(Clone)]
pub struct Pagination {
	inner: Rc<RefCell<Inner>>,
}

fn resolve(target: &MountTarget, platform: &Platform) -> Result<Rc<dyn Container>> {
	target
		.resolve(platform.document())
		.ok_or_else(|| ComponentError::ContainerNotFound(target.to_string()))
}

impl Pagination {
	/// Mounts a bar, reporting an unresolvable target as an error.
	pub fn try_mount(
		target: impl Into<MountTarget>,
		options: PaginationOptions,
		platform: &Platform,
	) -> Result<Self> {
		let container = resolve(&target.into(), platform)?;
		Ok(Self::build(Some(container), options, platform))
	}

	/// Mounts a bar. An unresolvable target is logged and yields an inert bar whose
	/// operations do nothing.
	pub fn mount(
		target: impl Into<MountTarget>,
		options: PaginationOptions,
		platform: &Platform,
	) -> Self {
		match resolve(&target.into(), platform) {
			Ok(container) => Self::build(Some(container), options, platform),
			Err(err) => {
				error_log!("[Pagination Error] {}", err);
				Self::build(None, options, platform)
			}
		}
	}

	fn build(
		container: Option<Rc<dyn Container>>,
		options: PaginationOptions,
		platform: &Platform,
	) -> Self {
		let config = PaginationConfig::from_options(options);
		let hash = HashSync::new(platform.location(), config.hash_key());
		let pagination = Self {
			inner: Rc::new(RefCell::new(Inner {
				container,
				config,
				hash,
				click: ListenerSlot::new(),
				destroyed: false,
			})),
		};

		{
			let mut guard = pagination.inner.borrow_mut();
			let inner = &mut *guard;
			if inner.is_live() {
				if inner.config.use_hash() {
					if let Some(page) = inner.hash.read() {
						let page = page.min(inner.config.total_pages());
						inner.config.set_current_page(page);
					}
					pagination.listen_hash(inner);
				}
				pagination.render(inner);
			}
		}
		pagination
	}

	/// Moves to `page`, clamped into `[1, total_pages]`.
	///
	/// Moving to the current page does nothing: no render, no fragment write, no callback.
	pub fn goto(&self, page: i64) {
		self.transition(|config| config.clamp(page));
	}

	/// Same as [`Pagination::goto`].
	pub fn set_current_page(&self, page: i64) {
		self.goto(page);
	}

	/// Moves one page back.
	pub fn prev(&self) {
		self.transition(|config| config.current_page().saturating_sub(1).max(1));
	}

	/// Moves one page forward.
	pub fn next(&self) {
		self.transition(|config| {
			config
				.current_page()
				.saturating_add(1)
				.min(config.total_pages())
		});
	}

	/// Moves to page 1.
	pub fn first(&self) {
		self.transition(|_| 1);
	}

	/// Moves to the last page.
	pub fn last(&self) {
		self.transition(PaginationConfig::total_pages);
	}

	/// Merges `update` into the options, re-clamps the current page and re-renders.
	///
	/// Turning `use_hash` on installs the fragment listener, turning it off removes it.
	/// No callback is invoked.
	pub fn update(&self, update: PaginationUpdate) {
		let mut guard = self.inner.borrow_mut();
		let inner = &mut *guard;
		if !inner.is_live() {
			return;
		}

		if inner.config.apply(update) {
			inner.hash.set_key(inner.config.hash_key());
			if inner.config.use_hash() {
				self.listen_hash(inner);
			} else {
				inner.hash.stop();
			}
		}
		self.render(inner);
	}

	/// Removes all listeners and clears the container. The bar stays inert afterwards.
	/// Calling it again does nothing.
	pub fn destroy(&self) {
		let mut guard = self.inner.borrow_mut();
		let inner = &mut *guard;
		if inner.destroyed {
			return;
		}
		inner.click.release();
		inner.hash.stop();
		if let Some(container) = &inner.container {
			container.set_inner_html("");
		}
		inner.destroyed = true;
		debug_log!("[Pagination] destroyed");
	}

	/// Current page (1-indexed)
	pub fn current_page(&self) -> usize {
		self.inner.borrow().config.current_page()
	}

	/// Number of pages, derived from the current options
	pub fn total_pages(&self) -> usize {
		self.inner.borrow().config.total_pages()
	}

	/// Items per page
	pub fn page_size(&self) -> usize {
		self.inner.borrow().config.page_size()
	}

	/// Total number of items
	pub fn total_items(&self) -> usize {
		self.inner.borrow().config.total_items()
	}

	/// Window size
	pub fn visible_pages(&self) -> usize {
		self.inner.borrow().config.visible_pages()
	}

	/// Item indices shown on the current page
	pub fn item_range(&self) -> Range<usize> {
		self.inner.borrow().config.item_range()
	}

	/// False for bars whose target did not resolve and for destroyed bars
	pub fn is_mounted(&self) -> bool {
		self.inner.borrow().is_live()
	}

	/// True while the fragment listener is installed
	pub fn is_hash_synced(&self) -> bool {
		self.inner.borrow().hash.is_listening()
	}

	/// The bar as it would be rendered now
	pub fn view(&self) -> PaginationView {
		let inner = self.inner.borrow();
		PaginationView::new(
			inner.config.current_page(),
			inner.config.total_pages(),
			inner.config.visible_pages(),
		)
	}

	/// Runs one navigation to the page picked by `target`, which must return a page inside
	/// `[1, total_pages]`.
	fn transition(&self, target: impl FnOnce(&PaginationConfig) -> usize) {
		let notify = {
			let mut guard = self.inner.borrow_mut();
			let inner = &mut *guard;
			if !inner.is_live() {
				return;
			}
			let page = target(&inner.config);
			let from = inner.config.current_page();
			if !inner.config.set_current_page(page) {
				return;
			}
			debug_log!("[Pagination] page {} -> {}", from, page);

			self.render(inner);
			if inner.config.use_hash() {
				inner.hash.write(page);
			}
			inner.notification(page)
		};

		if let Some((callback, page)) = notify {
			callback.call(page);
		}
	}

	fn render(&self, inner: &mut Inner) {
		let Some(container) = inner.container.clone() else {
			return;
		};
		let view = PaginationView::new(
			inner.config.current_page(),
			inner.config.total_pages(),
			inner.config.visible_pages(),
		);
		container.set_inner_html(&view.render());

		if view.items().is_empty() {
			inner.click.release();
			return;
		}

		// The listener owns the bar until destroy() releases it
		let bar = self.clone();
		inner.click.replace(move || {
			container.delegate_click(
				CONTROL_SELECTOR,
				Rc::new(move |target: &ClickTarget| bar.handle_click(target)),
			)
		});
	}

	fn listen_hash(&self, inner: &mut Inner) {
		let bar = self.clone();
		inner.hash.listen(Rc::new(move || bar.sync_from_hash()));
	}

	fn handle_click(&self, target: &ClickTarget) {
		match ControlAction::from_click(target) {
			Some(ControlAction::Prev) => self.prev(),
			Some(ControlAction::Next) => self.next(),
			Some(ControlAction::GoTo(page)) => self.goto(page),
			None => {}
		}
	}

	/// Adopts a page from the fragment after an external change. Mirrors `goto` without
	/// writing the fragment back, so reading a value this bar wrote is a no-op.
	fn sync_from_hash(&self) {
		let notify = {
			let mut guard = self.inner.borrow_mut();
			let inner = &mut *guard;
			if !inner.is_live() || !inner.config.use_hash() {
				return;
			}
			let Some(page) = inner.hash.read() else {
				return;
			};
			if page > inner.config.total_pages() || !inner.config.set_current_page(page) {
				return;
			}
			debug_log!("[Pagination] page {} from fragment", page);

			self.render(inner);
			inner.notification(page)
		};

		if let Some((callback, page)) = notify {
			callback.call(page);
		}
	}
}

impl std::fmt::Debug for Pagination {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner = self.inner.borrow();
		f.debug_struct("Pagination")
			.field("config", &inner.config)
			.field("hash", &inner.hash)
			.field("mounted", &inner.is_live())
			.finish()
	}
}
