//! Filter and pagination state for one displayed list.
//!
//! A `ListController` owns its items and derives everything the view needs
//! (filtered items, page count, visible slice) from a single cached list of
//! filtered indices, so `total_pages` and `show_pagination` can never disagree.
//!
//! State transitions:
//!
//! | action              | next state                              |
//! |---------------------|-----------------------------------------|
//! | `SetFilter(key)`    | `(key, 1)`                              |
//! | `SetPage(n)`        | `(filter, clamp(n, 1, total_pages))`    |
//! | `DataChanged(items)`| `(filter, current page re-clamped)`     |
//!
//! The initial state is `("all", 1)`. No operation can fail.

use std::fmt;
use std::ops::RangeInclusive;

/// Filter key meaning "no filtering".
pub const ALL_FILTER: &str = "all";

/// Extracts the value an item is filtered on.
pub type KeyFn<T> = fn(&T) -> &str;

/// Snapshot of the user-controlled part of a list's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewState {
    pub active_filter: String,
    pub current_page: usize,
}

impl Default for ListViewState {
    fn default() -> Self {
        Self {
            active_filter: ALL_FILTER.to_string(),
            current_page: 1,
        }
    }
}

/// Events a list reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum ListAction<T> {
    SetFilter(String),
    SetPage(usize),
    DataChanged(Vec<T>),
}

pub struct ListController<T> {
    items: Vec<T>,
    key_of: Option<KeyFn<T>>,
    page_size: usize,
    state: ListViewState,
    /// Indices into `items` that pass the active filter, in original order
    filtered: Vec<usize>,
}

impl<T> ListController<T> {
    /// Creates a list without a filter dimension. A `page_size` of 0 is treated as 1.
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        Self::build(items, page_size, None)
    }

    /// Creates a list filtered on the value returned by `key_of`.
    pub fn with_filter(items: Vec<T>, page_size: usize, key_of: KeyFn<T>) -> Self {
        Self::build(items, page_size, Some(key_of))
    }

    fn build(items: Vec<T>, page_size: usize, key_of: Option<KeyFn<T>>) -> Self {
        let mut controller = Self {
            items,
            key_of,
            page_size: page_size.max(1),
            state: ListViewState::default(),
            filtered: Vec::new(),
        };
        controller.refilter();
        controller
    }

    // ============================================================================
    // Transitions
    // ============================================================================

    pub fn dispatch(&mut self, action: ListAction<T>) {
        match action {
            ListAction::SetFilter(key) => self.apply_filter(key),
            ListAction::SetPage(page) => self.go_to_page(page),
            ListAction::DataChanged(items) => self.set_items(items),
        }
    }

    /// Activates `key` as the filter and returns to the first page.
    ///
    /// A blank key is the same as [`ALL_FILTER`].
    pub fn apply_filter(&mut self, key: impl Into<String>) {
        let key = key.into();
        self.state.active_filter = if key.trim().is_empty() {
            ALL_FILTER.to_string()
        } else {
            key
        };
        self.refilter();
        self.state.current_page = 1;
    }

    /// Moves to page `page`, clamped into the valid range.
    pub fn go_to_page(&mut self, page: usize) {
        self.state.current_page = self.clamp_page(page);
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.state.current_page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.state.current_page.saturating_sub(1));
    }

    /// Replaces the items wholesale, keeping the filter and re-clamping the page.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.refilter();
        self.state.current_page = self.clamp_page(self.state.current_page);
    }

    // ============================================================================
    // Derived values
    // ============================================================================

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn active_filter(&self) -> &str {
        &self.state.active_filter
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn state(&self) -> &ListViewState {
        &self.state
    }

    pub fn is_filtering(&self) -> bool {
        self.key_of.is_some() && self.state.active_filter != ALL_FILTER
    }

    /// Items passing the active filter, in original order.
    pub fn filtered_items(&self) -> Vec<&T> {
        self.filtered.iter().map(|&index| &self.items[index]).collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Number of pages; 0 when nothing passes the filter.
    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(self.page_size)
    }

    /// Items on the current page.
    pub fn visible_items(&self) -> Vec<&T> {
        let start = (self.state.current_page - 1) * self.page_size;
        self.filtered
            .iter()
            .skip(start)
            .take(self.page_size)
            .map(|&index| &self.items[index])
            .collect()
    }

    /// Pagination controls are shown only when there is more than one page.
    pub fn show_pagination(&self) -> bool {
        self.filtered.len() > self.page_size
    }

    pub fn has_previous_page(&self) -> bool {
        self.state.current_page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.state.current_page < self.total_pages()
    }

    /// Page numbers for the pagination control; empty when there are no pages.
    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.total_pages()
    }

    // ============================================================================
    // Internals
    // ============================================================================

    fn refilter(&mut self) {
        let filter = self.state.active_filter.as_str();
        self.filtered = match self.key_of {
            Some(key_of) if filter != ALL_FILTER => self
                .items
                .iter()
                .enumerate()
                .filter(|(_, item)| key_of(*item) == filter)
                .map(|(index, _)| index)
                .collect(),
            _ => (0..self.items.len()).collect(),
        };
    }

    fn clamp_page(&self, page: usize) -> usize {
        page.clamp(1, self.total_pages().max(1))
    }
}

impl<T: Clone> Clone for ListController<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            key_of: self.key_of,
            page_size: self.page_size,
            state: self.state.clone(),
            filtered: self.filtered.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ListController<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListController")
            .field("items", &self.items)
            .field("filterable", &self.key_of.is_some())
            .field("page_size", &self.page_size)
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: usize,
        kind: &'static str,
    }

    fn kind_of(item: &Item) -> &str {
        item.kind
    }

    fn items(kinds: &[&'static str]) -> Vec<Item> {
        kinds
            .iter()
            .enumerate()
            .map(|(id, &kind)| Item { id, kind })
            .collect()
    }

    fn ids(visible: Vec<&Item>) -> Vec<usize> {
        visible.into_iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_initial_state() {
        let list = ListController::new(items(&["Web"; 3]), 2);
        assert_eq!(list.state(), &ListViewState::default());
        assert_eq!(list.active_filter(), "all");
        assert_eq!(list.current_page(), 1);
    }

    #[test]
    fn test_five_items_page_size_two() {
        let mut list = ListController::new(items(&["Web"; 5]), 2);
        assert_eq!(list.total_pages(), 3);

        assert_eq!(ids(list.visible_items()), vec![0, 1]);
        list.go_to_page(2);
        assert_eq!(ids(list.visible_items()), vec![2, 3]);
        list.go_to_page(3);
        assert_eq!(ids(list.visible_items()), vec![4]);

        list.go_to_page(99);
        assert_eq!(list.current_page(), 3);
        list.go_to_page(0);
        assert_eq!(list.current_page(), 1);
    }

    #[test]
    fn test_filter_resets_page() {
        let mut list = ListController::with_filter(
            items(&["Web", "Mobile", "Web", "Web", "Mobile", "Web"]),
            2,
            kind_of,
        );
        list.go_to_page(3);
        assert_eq!(list.current_page(), 3);

        list.apply_filter("Web");
        assert_eq!(list.current_page(), 1);
        assert_eq!(ids(list.filtered_items()), vec![0, 2, 3, 5]);
        assert_eq!(list.total_pages(), 2);

        list.go_to_page(2);
        list.apply_filter("Desktop");
        assert_eq!(list.current_page(), 1);
        assert_eq!(list.total_pages(), 0);
        assert!(list.visible_items().is_empty());
        assert!(!list.show_pagination());
        assert!(list.page_numbers().is_empty());
    }

    #[test]
    fn test_filter_preserves_relative_order() {
        let mut list =
            ListController::with_filter(items(&["Mobile", "Web", "Mobile", "Web"]), 10, kind_of);
        list.apply_filter("Mobile");
        assert_eq!(ids(list.visible_items()), vec![0, 2]);

        list.apply_filter(ALL_FILTER);
        assert_eq!(ids(list.visible_items()), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_filter_without_dimension_is_noop() {
        let mut list = ListController::new(items(&["Web", "Mobile"]), 2);
        list.apply_filter("Web");
        assert_eq!(list.active_filter(), "Web");
        assert!(!list.is_filtering());
        assert_eq!(list.filtered_len(), 2);
    }

    #[test]
    fn test_blank_filter_means_all() {
        let mut list = ListController::with_filter(items(&["Web", "Mobile"]), 2, kind_of);
        list.apply_filter("  ");
        assert_eq!(list.active_filter(), ALL_FILTER);
        assert_eq!(list.filtered_len(), 2);
    }

    #[test]
    fn test_data_changed_reclamps() {
        let mut list = ListController::new(items(&["Web"; 6]), 2);
        list.go_to_page(3);
        assert_eq!(list.current_page(), 3);

        list.set_items(items(&["Web"; 2]));
        assert_eq!(list.total_pages(), 1);
        assert_eq!(list.current_page(), 1);
        assert_eq!(ids(list.visible_items()), vec![0, 1]);
    }

    #[test]
    fn test_data_changed_keeps_filter_and_valid_page() {
        let mut list = ListController::with_filter(items(&["Web"; 6]), 2, kind_of);
        list.apply_filter("Web");
        list.go_to_page(2);

        list.set_items(items(&["Web", "Web", "Mobile", "Web"]));
        assert_eq!(list.active_filter(), "Web");
        assert_eq!(list.current_page(), 2);
        assert_eq!(ids(list.filtered_items()), vec![0, 1, 3]);
        assert_eq!(ids(list.visible_items()), vec![3]);

        list.set_items(Vec::new());
        assert_eq!(list.current_page(), 1);
        assert_eq!(list.total_pages(), 0);
    }

    #[test]
    fn test_dispatch_follows_state_machine() {
        let mut list = ListController::with_filter(items(&["Web"; 5]), 2, kind_of);

        list.dispatch(ListAction::SetPage(7));
        assert_eq!(
            list.state(),
            &ListViewState {
                active_filter: "all".to_string(),
                current_page: 3
            }
        );

        list.dispatch(ListAction::SetFilter("Web".to_string()));
        assert_eq!(list.current_page(), 1);
        assert_eq!(list.active_filter(), "Web");

        list.dispatch(ListAction::SetPage(3));
        list.dispatch(ListAction::DataChanged(items(&["Web"])));
        assert_eq!(list.current_page(), 1);
    }

    #[test]
    fn test_show_pagination_matches_total_pages() {
        for len in 0..8 {
            let list = ListController::new(items(&vec!["Web"; len]), 3);
            assert_eq!(list.show_pagination(), list.total_pages() > 1, "len={len}");
        }
    }

    #[test]
    fn test_next_and_previous() {
        let mut list = ListController::new(items(&["Web"; 3]), 2);
        assert!(!list.has_previous_page());
        assert!(list.has_next_page());

        list.next_page();
        assert_eq!(list.current_page(), 2);
        assert!(!list.has_next_page());

        list.next_page();
        assert_eq!(list.current_page(), 2);

        list.previous_page();
        list.previous_page();
        assert_eq!(list.current_page(), 1);
        assert_eq!(list.page_numbers().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_zero_page_size_is_coerced() {
        let list = ListController::new(items(&["Web"; 2]), 0);
        assert_eq!(list.page_size(), 1);
        assert_eq!(list.total_pages(), 2);
    }
}
