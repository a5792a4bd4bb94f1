use chrono::Local;
use contracts::domain::a005_order::{
    export_file_name, export_rows, parse_date_input, CustomerFilter, Order, OrderFilter,
    OrderResource, ALL_CUSTOMERS, EXPORT_SHEET_NAME,
};
use contracts::shared::ListQuery;
use contracts::system::users::UserResource;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a005_order::ui::details::OrderDetails;
use crate::shared::api::use_gateway;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::{Input, Select};
use crate::shared::config::use_config;
use crate::shared::date_utils::{date_input_value, format_datetime};
use crate::shared::export::export_to_excel;
use crate::shared::icons::icon;
use crate::shared::list_controller::{CrudText, ListController};
use crate::shared::list_store::{ListStore, PageOwner, RowFilter};
use crate::shared::notify::use_notifier;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

const TEXT: CrudText = CrudText {
    created: "Order created",
    updated: "Order updated",
    deleted: "Order deleted",
    fetch_failed: "Failed to fetch orders",
    create_failed: "Failed to create order",
    update_failed: "Failed to update order",
    delete_failed: "Failed to delete order",
};

/// Dates are compared in the viewer's time zone.
impl RowFilter<Order> for OrderFilter {
    fn keep(&self, row: &Order) -> bool {
        self.matches(row, &Local)
    }
}

/// Options of the customer filter: "all" first, then every known username.
fn customer_options(usernames: &[String]) -> Vec<(String, String)> {
    std::iter::once((ALL_CUSTOMERS.to_string(), "All users".to_string()))
        .chain(usernames.iter().map(|u| (u.clone(), u.clone())))
        .collect()
}

#[component]
pub fn OrderList() -> impl IntoView {
    let users_gateway = StoredValue::new(use_gateway::<UserResource>());
    let notifier = use_notifier();
    let config = use_config();

    let list = ListController::<OrderResource, OrderFilter>::new(
        ListStore::new(PageOwner::Client, config.pagination.orders)
            .with_filter(OrderFilter::default())
            .with_fetch_size(config.pagination.orders_fetch),
        TEXT,
    )
    .refetch_after_delete();
    let store = list.store;
    let loading = list.loading;
    let usernames: RwSignal<Vec<String>> = RwSignal::new(Vec::new());
    let selected: RwSignal<Option<Order>> = RwSignal::new(None);

    let fetch_users = move || {
        let users_gateway = users_gateway.get_value();
        spawn_local(async move {
            match users_gateway.list(ListQuery::all()).await {
                Ok(page) => usernames.set(page.results.into_iter().map(|u| u.username).collect()),
                Err(e) => notifier.report(&e, "Failed to fetch users"),
            }
        });
    };

    let current_filter = move || store.with_untracked(|s| s.filter().clone());

    let export = move || {
        let rows = store.with_untracked(|s| export_rows(s.rows(), &Local));
        if rows.is_empty() {
            notifier.info("No orders to export");
            return;
        }
        let filename = export_file_name(store.with_untracked(|s| s.filter().date));
        match export_to_excel(&rows, EXPORT_SHEET_NAME, &filename) {
            Ok(()) => log::info!("exported {} order rows to {}", rows.len(), filename),
            Err(e) => {
                log::error!("order export failed: {}", e);
                notifier.error("Failed to export orders");
            }
        }
    };

    let delete = move |order: Order| {
        list.delete(order.id, &format!("Delete order #{}?", order.order_number));
    };

    fetch_users();
    list.fetch();

    view! {
        <PageFrame page_id="a005_order--list" category=PAGE_CAT_LIST>
            <PageHeader title="Orders" count=Signal::derive(move || store.with(|s| s.rows().len()))>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| export()>
                    {icon("download")}
                    " Export to Excel"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="filter-panel">
                    <Select
                        label="User"
                        value=Signal::derive(move || store.with(|s| s.filter().customer.select_value()))
                        on_change=Callback::new(move |value: String| {
                            let mut next = current_filter();
                            next.customer = CustomerFilter::from_select(&value);
                            list.set_filter(next);
                        })
                        options=Signal::derive(move || usernames.with(|u| customer_options(u)))
                    />
                    <Input
                        label="Date"
                        input_type="date"
                        value=Signal::derive(move || store.with(|s| date_input_value(s.filter().date)))
                        on_input=Callback::new(move |value: String| {
                            let mut next = current_filter();
                            next.date = parse_date_input(&value);
                            list.set_filter(next);
                        })
                    />
                    <Button
                        appearance=ButtonAppearance::Subtle
                        disabled=Signal::derive(move || store.with(|s| *s.filter() == OrderFilter::default()))
                        on_click=move |_| list.set_filter(OrderFilter::default())
                    >
                        "Reset"
                    </Button>
                </div>

                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false min_width=60.0>"#"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=100.0>"Order"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=180.0>"Customer"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=140.0>"Contact"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=100.0>"Amount"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=70.0>"Items"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=160.0>"Created"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=120.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            if loading.get() {
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan="8">
                                            <div class="table__placeholder">"Loading..."</div>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            let (rows, p) = store.with(|s| (s.visible().to_vec(), *s.paginator()));
                            if rows.is_empty() {
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan="8">
                                            <div class="table__placeholder">"No orders found"</div>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .enumerate()
                                .map(|(index, order)| {
                                    let created = format_datetime(&order.created_at, &Local);
                                    let item_count = order.items.len();
                                    let for_view = order.clone();
                                    let for_delete = order.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{p.row_number(index)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{order.order_number}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span class="table__primary">{order.customer_name}</span>
                                                    <span class="table__muted">{order.customer_email}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{order.contact_number}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{order.amount.to_string()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{item_count}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <div class="table__actions">
                                                    <button
                                                        class="button button--icon"
                                                        title="Details"
                                                        on:click=move |_| selected.set(Some(for_view.clone()))
                                                    >
                                                        {icon("eye")}
                                                    </button>
                                                    <button
                                                        class="button button--icon button--danger"
                                                        title="Delete"
                                                        on:click=move |_| delete(for_delete.clone())
                                                    >
                                                        {icon("delete")}
                                                    </button>
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </TableBody>
                </Table>

                <PaginationControls
                    current_page=Signal::derive(move || store.with(|s| s.paginator().page()))
                    total_pages=Signal::derive(move || store.with(|s| s.paginator().total_pages()))
                    on_page_change=Callback::new(move |page: usize| list.go_to(page))
                />
            </div>

            {move || selected.get().map(|order| view! {
                <OrderDetails order=order on_close=Callback::new(move |_| selected.set(None)) />
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::ListResponse;

    fn order(id: i64, username: &str) -> Order {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "order_number": id,
            "user": {"username": username, "first_name": "", "last_name": ""},
            "total_price": "10",
            "created_at": "2025-03-15T08:00:00Z",
            "items": []
        }))
        .unwrap()
    }

    #[test]
    fn test_customer_filter_narrows_rows_and_restarts_paging() {
        let mut store: ListStore<Order, OrderFilter> =
            ListStore::new(PageOwner::Client, 2).with_filter(OrderFilter::default());
        store.replace(ListResponse {
            results: (1..=6)
                .map(|id| order(id, if id % 2 == 0 { "ali" } else { "vali" }))
                .collect(),
            total_pages: None,
        });
        assert!(store.go_to(3));

        store.set_filter(OrderFilter {
            customer: CustomerFilter::from_select("ali"),
            date: None,
        });
        assert_eq!(store.paginator().page(), 1);
        let ids: Vec<i64> = store.rows().iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![2, 4, 6]);
    }

    #[test]
    fn test_customer_options_start_with_all() {
        let options = customer_options(&["ali".to_string(), "vali".to_string()]);
        assert_eq!(options[0], ("all".to_string(), "All users".to_string()));
        assert_eq!(options[1], ("ali".to_string(), "ali".to_string()));
        assert_eq!(options.len(), 3);
    }
}
