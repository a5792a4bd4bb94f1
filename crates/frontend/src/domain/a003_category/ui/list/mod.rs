use contracts::domain::a003_category::{Category, CategoryForm, CategoryResource};
use contracts::shared::Record;
use leptos::prelude::*;
use thaw::*;
use web_sys::File;

use crate::domain::a003_category::ui::details::CategoryDetails;
use crate::shared::api::Attachment;
use crate::shared::browser::revoke_preview;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::list_controller::{CrudText, ListController};
use crate::shared::list_store::{ListStore, PageOwner};
use crate::shared::modal_form::ModalForm;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

const TEXT: CrudText = CrudText {
    created: "Category created",
    updated: "Category updated",
    deleted: "Category deleted",
    fetch_failed: "Failed to fetch categories",
    create_failed: "Failed to create category",
    update_failed: "Failed to update category",
    delete_failed: "Failed to delete category",
};

#[component]
pub fn CategoryList() -> impl IntoView {
    let page_size = use_config().pagination.categories;
    let list = ListController::<CategoryResource>::new(
        ListStore::new(PageOwner::Client, page_size),
        TEXT,
    );
    let store = list.store;
    let loading = list.loading;
    let saving = list.saving;
    let form = RwSignal::new(ModalForm::<CategoryForm>::new());
    let file: RwSignal<Option<File>, LocalStorage> = RwSignal::new_local(None);

    let discard_image = move || {
        if let Some(preview) = form.with_untracked(|f| f.fields.image.clone()) {
            revoke_preview(&preview);
        }
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

    let delete = move |category: Category| {
        list.delete(
            category.id(),
            &format!("Delete category \"{}\"?", category.name),
        );
    };

    list.fetch();

    view! {
        <PageFrame page_id="a003_category--list" category=PAGE_CAT_LIST>
            <PageHeader title="Categories" count=Signal::derive(move || store.with(|s| s.items().len()))>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| form.update(|f| f.open_create())
                >
                    {icon("plus")}
                    " Add category"
                </Button>
            </PageHeader>

            <div class="page__content">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false min_width=60.0>"#"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=80.0>"Image"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=220.0>"Name"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=80.0>"Order"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=120.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            if loading.get() {
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan="5">
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
                                        <TableCell attr:colspan="5">
                                            <div class="table__placeholder">"No categories yet"</div>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .enumerate()
                                .map(|(index, category)| {
                                    let for_edit = category.clone();
                                    let for_delete = category.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{paginator.row_number(index)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                {match category.image {
                                                    Some(src) => view! { <img class="table__thumb" src=src alt="" /> }.into_any(),
                                                    None => view! { <span class="table__muted">"—"</span> }.into_any(),
                                                }}
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{category.name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {category.order.map(|o| o.to_string()).unwrap_or_else(|| "—".to_string())}
                                                </TableCellLayout>
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
                <CategoryDetails
                    form=form
                    file=file
                    saving=saving
                    on_submit=Callback::new(move |_| submit())
                    on_close=Callback::new(move |_| close_form())
                />
            </Show>
        </PageFrame>
    }
}
