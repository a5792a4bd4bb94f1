//! Row collection of a list screen with its paginator.
//!
//! A screen either receives every row and slices pages locally
//! ([`PageOwner::Client`]) or asks the backend for one page at a time
//! ([`PageOwner::Server`]). Both share the same 1-based [`Paginator`].

use contracts::shared::{EntityId, ListQuery, ListResponse, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOwner {
    Client,
    Server,
}

/// Number of pages needed for `count` rows; never less than one.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if count == 0 || page_size == 0 {
        1
    } else {
        count.div_ceil(page_size)
    }
}

/// Rows of 1-based `page`. Out-of-range pages are empty.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    page_size: usize,
    total_pages: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total_pages: 1,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Move to `page`. Returns false and stays put when it is out of range.
    pub fn go_to(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages {
            return false;
        }
        self.page = page;
        true
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Keeps the current page inside the new range.
    pub fn set_total_pages(&mut self, total: usize) {
        self.total_pages = total.max(1);
        self.page = self.page.clamp(1, self.total_pages);
    }

    /// Recompute the page count for `count` locally held rows.
    pub fn set_count(&mut self, count: usize) {
        self.set_total_pages(total_pages(count, self.page_size));
    }

    /// Changing the size always starts over from page one.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Running 1-based number of the row at `index` on the current page.
    pub fn row_number(&self, index: usize) -> usize {
        (self.page - 1) * self.page_size + index + 1
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        page_slice(items, self.page, self.page_size)
    }
}

/// Decides which fetched rows a screen shows.
pub trait RowFilter<T> {
    fn keep(&self, row: &T) -> bool;
}

/// Shows every row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoFilter;

impl<T> RowFilter<T> for NoFilter {
    fn keep(&self, _row: &T) -> bool {
        true
    }
}

#[derive(Debug, Clone)]
pub struct ListStore<T, F = NoFilter> {
    items: Vec<T>,
    /// Rows of `items` that pass `filter`, in fetch order.
    rows: Vec<T>,
    filter: F,
    owner: PageOwner,
    paginator: Paginator,
    fetch_size: Option<usize>,
}

impl<T: Record + Clone> ListStore<T, NoFilter> {
    pub fn new(owner: PageOwner, page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            rows: Vec::new(),
            filter: NoFilter,
            owner,
            paginator: Paginator::new(page_size),
            fetch_size: None,
        }
    }

    /// Same store, showing only the rows `filter` keeps.
    pub fn with_filter<G: RowFilter<T>>(self, filter: G) -> ListStore<T, G> {
        let mut store = ListStore {
            items: self.items,
            rows: Vec::new(),
            filter,
            owner: self.owner,
            paginator: self.paginator,
            fetch_size: self.fetch_size,
        };
        store.refresh();
        store
    }
}

impl<T: Record + Clone, F: RowFilter<T>> ListStore<T, F> {
    /// Client-owned list fetched with an explicit `page_size` parameter.
    pub fn with_fetch_size(mut self, fetch_size: usize) -> Self {
        self.fetch_size = Some(fetch_size);
        self
    }

    pub fn owner(&self) -> PageOwner {
        self.owner
    }

    /// Every fetched row, filtered or not.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Rows passing the current filter.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// Query parameters for the next list request.
    pub fn query(&self) -> ListQuery {
        match (self.owner, self.fetch_size) {
            (PageOwner::Server, _) => {
                ListQuery::page(self.paginator.page(), self.paginator.page_size())
            }
            (PageOwner::Client, Some(size)) => ListQuery::sized(size),
            (PageOwner::Client, None) => ListQuery::all(),
        }
    }

    pub fn replace(&mut self, response: ListResponse<T>) {
        self.items = response.results;
        self.refresh();
        if self.owner == PageOwner::Server {
            self.paginator
                .set_total_pages(response.total_pages.unwrap_or(1));
        }
    }

    /// Swap the filter. Any change starts over from page one.
    pub fn set_filter(&mut self, filter: F) {
        self.filter = filter;
        self.refresh();
        self.paginator.reset();
    }

    /// Rows shown on the current page.
    pub fn visible(&self) -> &[T] {
        match self.owner {
            PageOwner::Client => self.paginator.slice(&self.rows),
            PageOwner::Server => &self.rows,
        }
    }

    /// See [`Paginator::go_to`]. A server-owned list must be refetched
    /// after a successful move.
    pub fn go_to(&mut self, page: usize) -> bool {
        self.paginator.go_to(page)
    }

    /// Drop the row with `id`. Returns whether a row was removed.
    pub fn remove(&mut self, id: EntityId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        let removed = self.items.len() != before;
        if removed {
            self.refresh();
        }
        removed
    }

    fn refresh(&mut self) {
        self.rows = self
            .items
            .iter()
            .filter(|row| self.filter.keep(row))
            .cloned()
            .collect();
        if self.owner == PageOwner::Client {
            self.paginator.set_count(self.rows.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(EntityId);

    impl Record for Row {
        fn id(&self) -> EntityId {
            self.0
        }
    }

    fn rows(n: i64) -> Vec<Row> {
        (1..=n).map(Row).collect()
    }

    fn response(results: Vec<Row>, total_pages: Option<usize>) -> ListResponse<Row> {
        ListResponse {
            results,
            total_pages,
        }
    }

    /// Keeps rows whose id is divisible by the inner value.
    #[derive(Debug, Clone, Copy)]
    struct EveryNth(i64);

    impl RowFilter<Row> for EveryNth {
        fn keep(&self, row: &Row) -> bool {
            row.0 % self.0 == 0
        }
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn test_pages_cover_rows_exactly_once() {
        for count in 0..30usize {
            for size in 1..8usize {
                let items: Vec<usize> = (0..count).collect();
                let pages = total_pages(count, size);
                let joined: Vec<usize> = (1..=pages)
                    .flat_map(|p| page_slice(&items, p, size).to_vec())
                    .collect();
                assert_eq!(joined, items, "count={} size={}", count, size);
                for p in 1..=pages {
                    assert!(page_slice(&items, p, size).len() <= size);
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_page_is_rejected() {
        let mut store = ListStore::new(PageOwner::Client, 10);
        store.replace(response(rows(25), None));
        assert_eq!(store.paginator().total_pages(), 3);

        assert!(!store.go_to(0));
        assert!(!store.go_to(4));
        assert_eq!(store.paginator().page(), 1);

        assert!(store.go_to(3));
        assert_eq!(store.visible().len(), 5);
        assert_eq!(store.paginator().row_number(0), 21);
    }

    #[test]
    fn test_client_query_and_slice() {
        let store: ListStore<Row> = ListStore::new(PageOwner::Client, 10);
        assert!(store.query().is_empty());

        let store: ListStore<Row> = ListStore::new(PageOwner::Client, 20).with_fetch_size(1000);
        assert_eq!(store.query(), ListQuery::sized(1000));
    }

    #[test]
    fn test_server_owned_pages() {
        let mut store = ListStore::new(PageOwner::Server, 150);
        assert_eq!(store.query(), ListQuery::page(1, 150));

        store.replace(response(rows(150), Some(4)));
        assert_eq!(store.paginator().total_pages(), 4);
        assert_eq!(store.visible().len(), 150);

        assert!(store.go_to(2));
        assert_eq!(store.query(), ListQuery::page(2, 150));
        assert_eq!(store.paginator().row_number(0), 151);
    }

    #[test]
    fn test_server_without_total_pages() {
        let mut store = ListStore::new(PageOwner::Server, 150);
        store.replace(response(rows(3), None));
        assert_eq!(store.paginator().total_pages(), 1);
    }

    #[test]
    fn test_remove_clamps_page() {
        let mut store = ListStore::new(PageOwner::Client, 10);
        store.replace(response(rows(11), None));
        assert!(store.go_to(2));
        assert_eq!(store.visible(), &[Row(11)]);

        assert!(store.remove(11));
        assert_eq!(store.paginator().total_pages(), 1);
        assert_eq!(store.paginator().page(), 1);
        assert_eq!(store.visible().len(), 10);

        assert!(!store.remove(99));
    }

    #[test]
    fn test_page_size_change_resets() {
        let mut paginator = Paginator::new(3);
        paginator.set_count(10);
        assert!(paginator.go_to(4));
        paginator.set_page_size(5);
        paginator.set_count(10);
        assert_eq!(paginator.page(), 1);
        assert_eq!(paginator.total_pages(), 2);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut store: ListStore<Row, EveryNth> =
            ListStore::new(PageOwner::Client, 5).with_filter(EveryNth(1));
        store.replace(response(rows(30), None));
        assert!(store.go_to(3));
        assert_eq!(store.paginator().page(), 3);

        store.set_filter(EveryNth(2));
        assert_eq!(store.paginator().page(), 1);
        assert_eq!(store.rows().len(), 15);
        assert_eq!(store.items().len(), 30);
        assert_eq!(store.paginator().total_pages(), 3);
        assert_eq!(store.visible(), &[Row(2), Row(4), Row(6), Row(8), Row(10)]);
    }

    #[test]
    fn test_filter_survives_refetch() {
        let mut store: ListStore<Row, EveryNth> = ListStore::new(PageOwner::Client, 10)
            .with_filter(EveryNth(3))
            .with_fetch_size(1000);
        assert_eq!(store.query(), ListQuery::sized(1000));

        store.replace(response(rows(9), None));
        assert_eq!(store.rows(), &[Row(3), Row(6), Row(9)]);
        store.replace(response(rows(4), None));
        assert_eq!(store.rows(), &[Row(3)]);
    }

    #[test]
    fn test_delete_emptying_last_filtered_page_clamps() {
        let mut store: ListStore<Row, EveryNth> =
            ListStore::new(PageOwner::Client, 2).with_filter(EveryNth(2));
        store.replace(response(rows(10), None));
        // rows 2,4 | 6,8 | 10
        assert!(store.go_to(3));
        assert_eq!(store.visible(), &[Row(10)]);

        assert!(store.remove(10));
        assert_eq!(store.paginator().total_pages(), 2);
        assert_eq!(store.paginator().page(), 2);
        assert_eq!(store.visible(), &[Row(6), Row(8)]);

        // a row hidden by the filter still leaves the shown rows alone
        assert!(store.remove(9));
        assert_eq!(store.rows().len(), 4);
    }
}
