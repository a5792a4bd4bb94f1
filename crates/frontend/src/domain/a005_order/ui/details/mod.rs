use contracts::domain::a005_order::Order;
use leptos::ev;
use leptos::prelude::*;

use crate::shared::browser::viewport_width;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_datetime;
use crate::shared::list_store::Paginator;
use crate::shared::modal::Modal;

/// Width assumed when the viewport cannot be measured.
const FALLBACK_WIDTH: f64 = 1024.0;

/// Line items shown per page for a viewport `width` in CSS pixels.
pub fn items_per_page(width: f64) -> usize {
    if width < 480.0 {
        3
    } else if width < 640.0 {
        5
    } else {
        10
    }
}

fn current_items_per_page() -> usize {
    items_per_page(viewport_width().unwrap_or(FALLBACK_WIDTH))
}

/// Read-only view of one order with its line items.
#[component]
pub fn OrderDetails(order: Order, on_close: Callback<()>) -> impl IntoView {
    let item_count = order.items.len();
    let paginator = RwSignal::new({
        let mut p = Paginator::new(current_items_per_page());
        p.set_count(item_count);
        p
    });

    // A new page size starts over from the first page.
    let handle = window_event_listener(ev::resize, move |_| {
        let size = current_items_per_page();
        if paginator.with_untracked(|p| p.page_size()) != size {
            paginator.update(|p| {
                p.set_page_size(size);
                p.set_count(item_count);
            });
        }
    });
    on_cleanup(move || handle.remove());

    let items = StoredValue::new(order.items.clone());
    let comment = order
        .comment
        .clone()
        .unwrap_or_else(|| "No comment".to_string());
    let created = format_datetime(&order.created_at, &chrono::Local);

    view! {
        <Modal title=format!("Order #{}", order.order_number) on_close=on_close class="modal--wide">
            <dl class="details">
                <dt class="details__label">"Customer"</dt>
                <dd class="details__value">{order.customer_name.clone()}</dd>
                <dt class="details__label">"Account"</dt>
                <dd class="details__value">{order.customer_email.clone()}</dd>
                <dt class="details__label">"Contact number"</dt>
                <dd class="details__value">{order.contact_number.clone()}</dd>
                <dt class="details__label">"Created"</dt>
                <dd class="details__value">{created}</dd>
                <dt class="details__label">"Amount"</dt>
                <dd class="details__value">{order.amount.to_string()}</dd>
                <dt class="details__label">"Comment"</dt>
                <dd class="details__value">{comment}</dd>
            </dl>

            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"#"</th>
                        <th class="table__header-cell">"Product"</th>
                        <th class="table__header-cell">"Code"</th>
                        <th class="table__header-cell">"Quantity"</th>
                        <th class="table__header-cell">"Unit"</th>
                        <th class="table__header-cell">"Price"</th>
                        <th class="table__header-cell">"Total"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let p = paginator.get();
                        items.with_value(|all| {
                            p.slice(all)
                                .iter()
                                .enumerate()
                                .map(|(index, item)| view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{p.row_number(index)}</td>
                                        <td class="table__cell">{item.product_name.clone()}</td>
                                        <td class="table__cell">
                                            {item.product_code.clone().unwrap_or_else(|| "—".to_string())}
                                        </td>
                                        <td class="table__cell">{item.quantity.to_string()}</td>
                                        <td class="table__cell">{item.unit.clone()}</td>
                                        <td class="table__cell">{item.unit_price.to_string()}</td>
                                        <td class="table__cell">{item.price.to_string()}</td>
                                    </tr>
                                })
                                .collect_view()
                        })
                    }}
                </tbody>
            </table>

            <PaginationControls
                current_page=Signal::derive(move || paginator.with(|p| p.page()))
                total_pages=Signal::derive(move || paginator.with(|p| p.total_pages()))
                on_page_change=Callback::new(move |page: usize| {
                    paginator.update(|p| {
                        p.go_to(page);
                    });
                })
            />
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_per_page_breakpoints() {
        assert_eq!(items_per_page(320.0), 3);
        assert_eq!(items_per_page(479.9), 3);
        assert_eq!(items_per_page(480.0), 5);
        assert_eq!(items_per_page(639.0), 5);
        assert_eq!(items_per_page(640.0), 10);
        assert_eq!(items_per_page(1920.0), 10);
    }

    #[test]
    fn test_resize_resets_item_page() {
        let mut p = Paginator::new(items_per_page(1024.0));
        p.set_count(12);
        assert!(p.go_to(2));

        p.set_page_size(items_per_page(400.0));
        p.set_count(12);
        assert_eq!(p.page(), 1);
        assert_eq!(p.total_pages(), 4);
    }
}
