use contracts::domain::a002_unit::UnitResource;
use contracts::domain::a003_category::CategoryResource;
use contracts::domain::a004_product::{Product, ProductForm, ProductResource};
use contracts::shared::{Decimal, EntityId, ListQuery, RefField, Record};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::File;

use crate::domain::a004_product::ui::details::ProductDetails;
use crate::shared::api::{use_gateway, Attachment};
use crate::shared::browser::revoke_preview;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::list_controller::{CrudText, ListController};
use crate::shared::list_store::{ListStore, PageOwner};
use crate::shared::modal_form::ModalForm;
use crate::shared::notify::use_notifier;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

/// Display text of a product's category/unit reference. Bare ids are
/// resolved against the loaded options.
fn ref_label(reference: &Option<RefField>, options: &[(EntityId, String)]) -> String {
    let Some(reference) = reference else {
        return "—".to_string();
    };
    match reference {
        RefField::Id(id) => options
            .iter()
            .find(|(option_id, _)| option_id == id)
            .map(|(_, name)| name.clone())
            .unwrap_or_else(|| reference.label()),
        _ => reference.label(),
    }
}

fn decimal_text(value: &Option<Decimal>) -> String {
    value
        .as_ref()
        .filter(|d| !d.is_empty())
        .map(|d| d.to_string())
        .unwrap_or_else(|| "—".to_string())
}

fn select_options(options: &[(EntityId, String)]) -> Vec<(String, String)> {
    options
        .iter()
        .map(|(id, name)| (id.to_string(), name.clone()))
        .collect()
}

const TEXT: CrudText = CrudText {
    created: "Product created",
    updated: "Product updated",
    deleted: "Product deleted",
    fetch_failed: "Failed to fetch products",
    create_failed: "Failed to create product",
    update_failed: "Failed to update product",
    delete_failed: "Failed to delete product",
};

#[component]
pub fn ProductList() -> impl IntoView {
    let categories_gateway = StoredValue::new(use_gateway::<CategoryResource>());
    let units_gateway = StoredValue::new(use_gateway::<UnitResource>());
    let notifier = use_notifier();
    let config = use_config();
    let lookup_size = config.pagination.lookup_fetch;

    let list = ListController::<ProductResource>::new(
        ListStore::new(PageOwner::Client, config.pagination.products),
        TEXT,
    );
    let store = list.store;
    let loading = list.loading;
    let saving = list.saving;
    let categories: RwSignal<Vec<(EntityId, String)>> = RwSignal::new(Vec::new());
    let units: RwSignal<Vec<(EntityId, String)>> = RwSignal::new(Vec::new());
    let form = RwSignal::new(ModalForm::<ProductForm>::new());
    let file: RwSignal<Option<File>, LocalStorage> = RwSignal::new_local(None);
    let preview: RwSignal<Option<String>> = RwSignal::new(None);

    let fetch_options = move || {
        let categories_gateway = categories_gateway.get_value();
        let units_gateway = units_gateway.get_value();
        spawn_local(async move {
            match categories_gateway.list(ListQuery::all()).await {
                Ok(page) => categories.set(
                    page.results
                        .into_iter()
                        .map(|c| (c.id, c.name))
                        .collect(),
                ),
                Err(e) => notifier.report(&e, "Failed to fetch categories"),
            }
            match units_gateway.list(ListQuery::sized(lookup_size)).await {
                Ok(page) => units.set(
                    page.results
                        .into_iter()
                        .map(|u| (u.id, u.name))
                        .collect(),
                ),
                Err(e) => notifier.report(&e, "Failed to fetch units"),
            }
        });
    };

    let open_create = move || {
        let first_category = categories.with_untracked(|c| c.first().map(|(id, _)| *id));
        let first_unit = units.with_untracked(|u| u.first().map(|(id, _)| *id));
        form.update(|f| {
            f.open_create();
            f.fields.fill_missing_refs(first_category, first_unit);
        });
    };

    let discard_image = move || {
        if let Some(url) = preview.get_untracked() {
            revoke_preview(&url);
        }
        preview.set(None);
        file.set(None);
    };

    let close_form = move || {
        discard_image();
        form.update(|f| f.close());
    };

    let submit = move || {
        let attachment = file
            .get_untracked()
            .map(|file| Attachment { field: "image", file });
        list.submit(form, attachment, discard_image);
    };

    let delete = move |product: Product| {
        list.delete(
            product.id(),
            &format!("Delete product \"{}\"?", product.name),
        );
    };

    fetch_options();
    list.fetch();

    view! {
        <PageFrame page_id="a004_product--list" category=PAGE_CAT_LIST>
            <PageHeader title="Products" count=Signal::derive(move || store.with(|s| s.items().len()))>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_create()>
                    {icon("plus")}
                    " Add product"
                </Button>
            </PageHeader>

            <div class="page__content">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false min_width=60.0>"#"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=80.0>"Image"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=200.0>"Name"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=100.0>"Price"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=140.0>"Category"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=80.0>"Unit"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=100.0>"Left"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=100.0>"Min"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=120.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            if loading.get() {
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan="9">
                                            <div class="table__placeholder">"Loading..."</div>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            let (rows, paginator) = store.with(|s| (s.visible().to_vec(), *s.paginator()));
                            if rows.is_empty() {
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan="9">
                                            <div class="table__placeholder">"No products yet"</div>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            let category_names = categories.get();
                            let unit_names = units.get();
                            rows.into_iter()
                                .enumerate()
                                .map(|(index, product)| {
                                    let category = ref_label(&product.category, &category_names);
                                    let unit = ref_label(&product.unity, &unit_names);
                                    let left = decimal_text(&product.quantity_left);
                                    let min = decimal_text(&product.min_quantity);
                                    let for_edit = product.clone();
                                    let for_delete = product.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{paginator.row_number(index)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                {match product.image {
                                                    Some(src) => view! { <img class="table__thumb" src=src alt="" /> }.into_any(),
                                                    None => view! { <span class="table__muted">"—"</span> }.into_any(),
                                                }}
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{product.name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{product.price.to_string()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{category}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{unit}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{left}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{min}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <div class="table__actions">
                                                    <button
                                                        class="button button--icon"
                                                        title="Edit"
                                                        on:click=move |_| form.update(|f| f.open_edit(for_edit.clone()))
                                                    >
                                                        {icon("edit")}
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

            <Show when=move || form.with(|f| f.is_open())>
                <ProductDetails
                    form=form
                    file=file
                    preview=preview
                    categories=Signal::derive(move || categories.with(|c| select_options(c)))
                    units=Signal::derive(move || units.with(|u| select_options(u)))
                    saving=saving
                    on_submit=Callback::new(move |_| submit())
                    on_close=Callback::new(move |_| close_form())
                />
            </Show>
        </PageFrame>
    }
}
