//! Integration tests for the pagination controller against the in-memory platform

use std::rc::Rc;
use std::sync::{Arc, Mutex};

use jian_pages::{
	Callback, ClickTarget, Container, Location, MemoryContainer, MemoryDocument, MemoryLocation,
	Platform,
};
use jian_pages_components::pagination::{Pagination, PaginationOptions, PaginationUpdate};
use proptest::prelude::*;
use rstest::*;

struct Page {
	container: Rc<MemoryContainer>,
	location: Rc<MemoryLocation>,
	platform: Platform,
}

impl Page {
	fn with_hash(hash: &str) -> Self {
		let document = Rc::new(MemoryDocument::new());
		let container = document.create("#pagination");
		let location = Rc::new(MemoryLocation::with_hash(hash));
		let platform = Platform::new(document, location.clone());
		Self {
			container,
			location,
			platform,
		}
	}

	fn mount(&self, options: PaginationOptions) -> Pagination {
		Pagination::mount("#pagination", options, &self.platform)
	}

	fn html(&self) -> String {
		self.container.inner_html()
	}
}

#[derive(Clone, Default)]
struct Recorder {
	pages: Arc<Mutex<Vec<usize>>>,
}

impl Recorder {
	fn callback(&self) -> Callback<usize> {
		let pages = Arc::clone(&self.pages);
		Callback::new(move |page| pages.lock().unwrap().push(page))
	}

	fn pages(&self) -> Vec<usize> {
		self.pages.lock().unwrap().clone()
	}
}

#[fixture]
fn page() -> Page {
	Page::with_hash("")
}

#[fixture]
fn recorder() -> Recorder {
	Recorder::default()
}

fn goto_target(page: usize) -> ClickTarget {
	ClickTarget::new()
		.with_data("action", "goto")
		.with_data("page", page.to_string())
}

fn action_target(action: &str) -> ClickTarget {
	ClickTarget::new().with_data("action", action)
}

// ============================================================================
// State store
// ============================================================================

#[rstest]
fn test_total_pages_and_clamping(page: Page) {
	let pagination = page.mount(PaginationOptions::new().total_items(95).page_size(10));

	assert_eq!(pagination.total_pages(), 10);
	pagination.goto(12);
	assert_eq!(pagination.current_page(), 10);
	pagination.goto(-4);
	assert_eq!(pagination.current_page(), 1);
}

#[rstest]
fn test_accessors(page: Page) {
	let pagination = page.mount(
		PaginationOptions::new()
			.total_items(95)
			.page_size(20)
			.visible_pages(3)
			.current_page(2),
	);

	assert!(pagination.is_mounted());
	assert_eq!(pagination.page_size(), 20);
	assert_eq!(pagination.total_items(), 95);
	assert_eq!(pagination.visible_pages(), 3);
	assert_eq!(pagination.total_pages(), 5);
	assert_eq!(pagination.item_range(), 20..40);
}

#[rstest]
fn test_total_pages_override(page: Page) {
	let pagination = page.mount(PaginationOptions::new().total_items(95).total_pages(20));
	assert_eq!(pagination.total_pages(), 20);
}

#[rstest]
fn test_update_reclamps_and_rerenders_without_callback(page: Page, recorder: Recorder) {
	let pagination = page.mount(
		PaginationOptions::new()
			.total_items(200)
			.current_page(18)
			.on_page_change(recorder.callback()),
	);
	let renders = page.container.render_count();

	pagination.update(PaginationUpdate::new().total_items(50));

	assert_eq!(pagination.total_pages(), 5);
	assert_eq!(pagination.current_page(), 5);
	assert_eq!(page.container.render_count(), renders + 1);
	assert!(recorder.pages().is_empty());
	assert!(page.html().contains(r#"<li class="page-item active"><a href="javascript:void(0)" class="page-link" data-action="goto" data-page="5">5</a></li>"#));
}

#[rstest]
fn test_update_replaces_callback(page: Page, recorder: Recorder) {
	let pagination = page.mount(PaginationOptions::new().total_items(100));

	pagination.update(PaginationUpdate::new().on_page_change(recorder.callback()));
	pagination.goto(3);

	assert_eq!(recorder.pages(), vec![3]);
}

#[rstest]
fn test_options_from_json(page: Page) {
	let options =
		PaginationOptions::from_json(r#"{"total": 95, "currentPage": 4, "visiblePages": 3}"#)
			.unwrap();
	let pagination = page.mount(options);

	assert_eq!(pagination.current_page(), 4);
	assert_eq!(pagination.view().items().len(), 9);
}

// ============================================================================
// Rendering
// ============================================================================

#[rstest]
fn test_first_page_of_twenty_renders_trailing_anchor(page: Page) {
	page.mount(PaginationOptions::new().total_pages(20));

	let html = page.html();
	for n in 1..=5 {
		assert!(html.contains(&format!(r#"data-page="{}""#, n)));
	}
	assert!(!html.contains(r#"data-page="6""#));
	assert!(html.contains(r#"data-page="20""#));
	assert_eq!(html.matches("...").count(), 1);
	assert!(html.contains(r#"data-action="prev" data-disabled="true""#));
}

#[rstest]
fn test_middle_page_of_twenty_renders_both_anchors(page: Page) {
	page.mount(PaginationOptions::new().total_pages(20).current_page(10));

	let html = page.html();
	let pages: Vec<&str> = html
		.split(r#"data-page=""#)
		.skip(1)
		.map(|rest| rest.split('"').next().unwrap())
		.collect();
	assert_eq!(pages, vec!["1", "8", "9", "10", "11", "12", "20"]);
	assert_eq!(html.matches("...").count(), 2);
}

#[rstest]
fn test_single_page_renders_nothing(page: Page) {
	page.mount(PaginationOptions::new().total_items(7));

	assert_eq!(page.html(), "");
	assert_eq!(page.container.listener_count(), 0);
}

#[rstest]
fn test_shrinking_to_one_page_removes_listener(page: Page) {
	let pagination = page.mount(PaginationOptions::new().total_items(100));
	assert_eq!(page.container.listener_count(), 1);

	pagination.update(PaginationUpdate::new().total_items(3));

	assert_eq!(page.html(), "");
	assert_eq!(page.container.listener_count(), 0);
}

// ============================================================================
// Navigation
// ============================================================================

#[rstest]
fn test_goto_current_page_is_noop(recorder: Recorder) {
	let page = Page::with_hash("");
	let pagination = page.mount(
		PaginationOptions::new()
			.total_items(100)
			.current_page(4)
			.use_hash(true)
			.on_page_change(recorder.callback()),
	);
	let renders = page.container.render_count();

	pagination.goto(4);
	pagination.set_current_page(4);

	assert_eq!(page.container.render_count(), renders);
	assert!(page.location.writes().is_empty());
	assert!(recorder.pages().is_empty());
}

#[rstest]
fn test_clamped_goto_to_current_is_noop(page: Page, recorder: Recorder) {
	let pagination = page.mount(
		PaginationOptions::new()
			.total_items(100)
			.current_page(10)
			.on_page_change(recorder.callback()),
	);
	let renders = page.container.render_count();

	pagination.goto(99);
	pagination.next();
	pagination.last();

	assert_eq!(page.container.render_count(), renders);
	assert!(recorder.pages().is_empty());
}

#[rstest]
fn test_navigation_shortcuts(page: Page, recorder: Recorder) {
	let pagination = page.mount(
		PaginationOptions::new()
			.total_items(100)
			.on_page_change(recorder.callback()),
	);

	pagination.prev();
	pagination.next();
	pagination.next();
	pagination.last();
	pagination.prev();
	pagination.first();

	assert_eq!(recorder.pages(), vec![2, 3, 10, 9, 1]);
	assert_eq!(pagination.current_page(), 1);
}

#[rstest]
fn test_transition_renders_writes_and_notifies(recorder: Recorder) {
	let page = Page::with_hash("");
	let pagination = page.mount(
		PaginationOptions::new()
			.total_items(100)
			.use_hash(true)
			.hash_key("orders")
			.on_page_change(recorder.callback()),
	);

	pagination.goto(6);

	assert!(page.html().contains(r#"<li class="page-item active"><a href="javascript:void(0)" class="page-link" data-action="goto" data-page="6">6</a></li>"#));
	assert_eq!(page.location.hash(), "#orders=6");
	assert_eq!(recorder.pages(), vec![6]);
}

#[rstest]
fn test_no_fragment_write_without_hash(page: Page) {
	let pagination = page.mount(PaginationOptions::new().total_items(100));
	pagination.goto(3);
	assert!(page.location.writes().is_empty());
	assert_eq!(page.location.subscriber_count(), 0);
}

// ============================================================================
// Event delegation
// ============================================================================

#[rstest]
fn test_click_dispatch(page: Page, recorder: Recorder) {
	let pagination = page.mount(
		PaginationOptions::new()
			.total_items(100)
			.on_page_change(recorder.callback()),
	);

	page.container.click(&goto_target(7));
	page.container.click(&action_target("prev"));
	page.container.click(&action_target("next"));
	page.container.click(&action_target("next"));

	assert_eq!(recorder.pages(), vec![7, 6, 7, 8]);
	assert_eq!(pagination.current_page(), 8);
}

#[rstest]
fn test_click_on_inert_controls_is_noop(page: Page, recorder: Recorder) {
	let pagination = page.mount(
		PaginationOptions::new()
			.total_items(100)
			.on_page_change(recorder.callback()),
	);

	page.container.click(&ClickTarget::new());
	page.container.click(&action_target("unknown"));
	page.container.click(
		&ClickTarget::new()
			.with_data("action", "goto")
			.with_data("page", "abc"),
	);
	// A disabled control stays inert even if its markup is still clickable
	page.container.click(&action_target("next").with_data("disabled", "true"));

	assert!(recorder.pages().is_empty());
	assert_eq!(pagination.current_page(), 1);
}

#[rstest]
fn test_rerenders_keep_single_listener(page: Page, recorder: Recorder) {
	let pagination = page.mount(
		PaginationOptions::new()
			.total_items(500)
			.on_page_change(recorder.callback()),
	);

	for n in 2..=11 {
		pagination.goto(n);
	}
	for size in [5, 10, 20] {
		pagination.update(PaginationUpdate::new().page_size(size));
	}
	assert_eq!(page.container.listener_count(), 1);
	let before = recorder.pages().len();

	let delivered = page.container.click(&goto_target(1));

	assert_eq!(delivered, 1);
	assert_eq!(recorder.pages().len(), before + 1);
	assert_eq!(recorder.pages().last(), Some(&1));
}

#[rstest]
fn test_listener_delegates_to_page_links(page: Page) {
	page.mount(PaginationOptions::new().total_items(100));
	assert_eq!(page.container.listener_selectors(), vec!["a.page-link"]);
}

// ============================================================================
// Fragment synchronization
// ============================================================================

#[rstest]
fn test_initial_page_from_fragment() {
	let page = Page::with_hash("#page=7");
	let pagination = page.mount(PaginationOptions::new().total_pages(10).use_hash(true));

	assert_eq!(pagination.current_page(), 7);
	assert!(pagination.is_hash_synced());
	assert_eq!(page.location.subscriber_count(), 1);
}

#[rstest]
#[case("#page=abc")]
#[case("#page=0")]
#[case("#other=7")]
#[case("#page=7&sort=asc")]
fn test_malformed_initial_fragment_is_ignored(#[case] hash: &str) {
	let page = Page::with_hash(hash);
	let pagination = page.mount(
		PaginationOptions::new()
			.total_pages(10)
			.current_page(3)
			.use_hash(true),
	);
	assert_eq!(pagination.current_page(), 3);
}

#[rstest]
fn test_fragment_ignored_without_use_hash() {
	let page = Page::with_hash("#page=7");
	let pagination = page.mount(PaginationOptions::new().total_pages(10));
	assert_eq!(pagination.current_page(), 1);
}

#[rstest]
fn test_own_fragment_write_is_not_reapplied(recorder: Recorder) {
	let page = Page::with_hash("");
	let pagination = page.mount(
		PaginationOptions::new()
			.total_items(100)
			.use_hash(true)
			.on_page_change(recorder.callback()),
	);

	pagination.goto(4);
	let renders = page.container.render_count();
	assert_eq!(page.location.flush(), 1);

	assert_eq!(pagination.current_page(), 4);
	assert_eq!(recorder.pages(), vec![4]);
	assert_eq!(page.container.render_count(), renders);
	assert_eq!(page.location.writes(), vec!["#page=4".to_string()]);
}

#[rstest]
fn test_external_fragment_change(recorder: Recorder) {
	let page = Page::with_hash("");
	let pagination = page.mount(
		PaginationOptions::new()
			.total_items(100)
			.use_hash(true)
			.on_page_change(recorder.callback()),
	);

	page.location.navigate("#page=8");

	assert_eq!(pagination.current_page(), 8);
	assert_eq!(recorder.pages(), vec![8]);
	assert!(page.html().contains(r#"class="page-item active"><a href="javascript:void(0)" class="page-link" data-action="goto" data-page="8""#));
	assert!(page.location.writes().is_empty());
}

#[rstest]
#[case("#page=11")]
#[case("#page=-1")]
#[case("#page=x")]
#[case("")]
#[case("#page=1")]
fn test_rejected_external_fragment_changes(#[case] hash: &str, recorder: Recorder) {
	let page = Page::with_hash("");
	let pagination = page.mount(
		PaginationOptions::new()
			.total_items(100)
			.use_hash(true)
			.on_page_change(recorder.callback()),
	);
	let renders = page.container.render_count();

	page.location.navigate(hash);

	assert_eq!(pagination.current_page(), 1);
	assert!(recorder.pages().is_empty());
	assert_eq!(page.container.render_count(), renders);
}

#[rstest]
fn test_update_toggles_fragment_listener(recorder: Recorder) {
	let page = Page::with_hash("");
	let pagination = page.mount(
		PaginationOptions::new()
			.total_items(100)
			.on_page_change(recorder.callback()),
	);
	assert!(!pagination.is_hash_synced());

	pagination.update(PaginationUpdate::new().use_hash(true));
	assert!(pagination.is_hash_synced());
	page.location.navigate("#page=5");
	assert_eq!(pagination.current_page(), 5);

	pagination.update(PaginationUpdate::new().use_hash(false));
	assert!(!pagination.is_hash_synced());
	assert_eq!(page.location.subscriber_count(), 0);
	page.location.navigate("#page=2");
	assert_eq!(pagination.current_page(), 5);
	assert_eq!(recorder.pages(), vec![5]);
}

#[rstest]
fn test_update_hash_key(recorder: Recorder) {
	let page = Page::with_hash("");
	let pagination = page.mount(
		PaginationOptions::new()
			.total_items(100)
			.use_hash(true)
			.on_page_change(recorder.callback()),
	);

	pagination.update(PaginationUpdate::new().hash_key("p"));
	page.location.navigate("#page=3");
	page.location.navigate("#p=6");
	pagination.goto(2);

	assert_eq!(recorder.pages(), vec![6, 2]);
	assert_eq!(page.location.subscriber_count(), 1);
	assert_eq!(page.location.hash(), "#p=2");
}

// ============================================================================
// Lifecycle
// ============================================================================

#[rstest]
fn test_destroy_detaches_everything(recorder: Recorder) {
	let page = Page::with_hash("");
	let pagination = page.mount(
		PaginationOptions::new()
			.total_items(100)
			.use_hash(true)
			.on_page_change(recorder.callback()),
	);

	pagination.destroy();

	assert_eq!(page.html(), "");
	assert_eq!(page.container.listener_count(), 0);
	assert_eq!(page.location.subscriber_count(), 0);
	assert!(!pagination.is_mounted());

	page.location.navigate("#page=4");
	assert_eq!(page.container.click(&goto_target(3)), 0);
	pagination.goto(5);
	assert!(recorder.pages().is_empty());
	assert_eq!(page.html(), "");
}

#[rstest]
fn test_destroy_twice(page: Page) {
	let pagination = page.mount(PaginationOptions::new().total_items(100));

	pagination.destroy();
	let renders = page.container.render_count();
	pagination.destroy();

	assert_eq!(page.container.render_count(), renders);
}

#[rstest]
fn test_unbound_mount_keeps_responding(recorder: Recorder) {
	let page = Page::with_hash("");
	page.mount(
		PaginationOptions::new()
			.total_items(100)
			.use_hash(true)
			.on_page_change(recorder.callback()),
	);

	assert_eq!(page.container.click(&action_target("next")), 1);
	page.location.navigate("#page=5");

	assert_eq!(recorder.pages(), vec![2, 5]);
	assert!(page.html().contains(r#"<li class="page-item active"><a href="javascript:void(0)" class="page-link" data-action="goto" data-page="5">5</a></li>"#));
	assert_eq!(page.container.listener_count(), 1);
	assert_eq!(page.location.subscriber_count(), 1);
}

#[rstest]
fn test_listeners_outlive_handles_until_destroy(recorder: Recorder) {
	let page = Page::with_hash("");
	let pagination = page.mount(
		PaginationOptions::new()
			.total_items(100)
			.use_hash(true)
			.on_page_change(recorder.callback()),
	);
	let keeper = pagination.clone();
	drop(pagination);

	page.container.click(&goto_target(4));
	assert_eq!(keeper.current_page(), 4);

	keeper.destroy();
	drop(keeper);

	assert_eq!(page.container.click(&goto_target(6)), 0);
	page.location.navigate("#page=7");
	assert_eq!(recorder.pages(), vec![4]);
	assert_eq!(page.container.listener_count(), 0);
	assert_eq!(page.location.subscriber_count(), 0);
}

#[rstest]
fn test_mount_on_resolved_element() {
	let document = Rc::new(MemoryDocument::new());
	let container = Rc::new(MemoryContainer::new());
	let platform = Platform::new(document, Rc::new(MemoryLocation::new()));

	let pagination = Pagination::try_mount(
		Rc::clone(&container),
		PaginationOptions::new().total_items(30),
		&platform,
	)
	.unwrap();

	assert!(pagination.is_mounted());
	assert!(container.inner_html().starts_with(r#"<ul class="pagination">"#));
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
	#![proptest_config(ProptestConfig::with_cases(64))]

	/// Property: any target leaves the current page inside [1, total_pages]
	#[test]
	fn test_goto_always_lands_in_range(
		total_items in 0usize..2_000,
		page_size in 1usize..50,
		targets in proptest::collection::vec(any::<i64>(), 1..20),
	) {
		let page = Page::with_hash("");
		let pagination = page.mount(
			PaginationOptions::new().total_items(total_items).page_size(page_size),
		);

		for target in targets {
			pagination.goto(target);
			let current = pagination.current_page();
			prop_assert!(current >= 1);
			prop_assert!(current <= pagination.total_pages());
		}
	}

	/// Property: feeding the fragment back after a navigation changes nothing
	#[test]
	fn test_fragment_round_trip(total_pages in 2usize..200, target in 1i64..250) {
		let page = Page::with_hash("");
		let recorder = Recorder::default();
		let pagination = page.mount(
			PaginationOptions::new()
				.total_pages(total_pages)
				.use_hash(true)
				.on_page_change(recorder.callback()),
		);

		pagination.goto(target);
		let current = pagination.current_page();
		let notified = recorder.pages().len();
		page.location.flush();
		page.location.navigate(&page.location.hash());

		prop_assert_eq!(pagination.current_page(), current);
		prop_assert_eq!(recorder.pages().len(), notified);
	}
}
