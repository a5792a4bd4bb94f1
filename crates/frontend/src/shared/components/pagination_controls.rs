use crate::shared::icons::icon;
use leptos::prelude::*;

/// Page numbers to render around `current`: always the first and the last
/// page, plus two neighbours on each side. `None` marks a gap.
pub fn page_window(current: usize, total: usize) -> Vec<Option<usize>> {
    let mut pages = Vec::new();
    let mut last = 0;
    for page in 1..=total {
        let near = page + 2 >= current && page <= current + 2;
        if page == 1 || page == total || near {
            if last != 0 && page > last + 1 {
                pages.push(None);
            }
            pages.push(Some(page));
            last = page;
        }
    }
    pages
}

/// Previous/next and numbered page buttons. Pages are 1-based; nothing is
/// rendered while there is a single page.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <div class="pagination-controls">
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page > 1 {
                            on_page_change.run(page - 1);
                        }
                    }
                    disabled=move || current_page.get() <= 1
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>
                {move || {
                    let current = current_page.get();
                    page_window(current, total_pages.get())
                        .into_iter()
                        .map(|slot| match slot {
                            Some(page) => view! {
                                <button
                                    class="pagination-btn"
                                    class:pagination-btn--active=page == current
                                    on:click=move |_| on_page_change.run(page)
                                >
                                    {page.to_string()}
                                </button>
                            }
                            .into_any(),
                            None => view! { <span class="pagination-gap">"…"</span> }.into_any(),
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page < total_pages.get() {
                            on_page_change.run(page + 1);
                        }
                    }
                    disabled=move || current_page.get() >= total_pages.get()
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_range_has_no_gaps() {
        assert_eq!(
            page_window(1, 3),
            vec![Some(1), Some(2), Some(3)]
        );
    }

    #[test]
    fn test_long_range_has_gaps() {
        assert_eq!(
            page_window(6, 12),
            vec![
                Some(1),
                None,
                Some(4),
                Some(5),
                Some(6),
                Some(7),
                Some(8),
                None,
                Some(12)
            ]
        );
    }

    #[test]
    fn test_window_at_edges() {
        assert_eq!(
            page_window(1, 10),
            vec![Some(1), Some(2), Some(3), None, Some(10)]
        );
        assert_eq!(
            page_window(10, 10),
            vec![Some(1), None, Some(8), Some(9), Some(10)]
        );
    }
}
