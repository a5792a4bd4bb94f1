//! List screen for records that are nothing but a name (objects, units).
//!
//! The concrete screens are thin components that pass their resource type,
//! texts and paging mode to [`named_list`].

use contracts::domain::common::{NameDto, NameForm, Named};
use contracts::shared::{EntityId, Record, Resource};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::Input;
use crate::shared::icons::icon;
use crate::shared::list_controller::{CrudText, ListController};
use crate::shared::list_store::{ListStore, PageOwner};
use crate::shared::modal::Modal;
use crate::shared::modal_form::ModalForm;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

/// User-facing texts of one named-entity screen.
#[derive(Debug, Clone, Copy)]
pub struct NamedListText {
    pub page_id: &'static str,
    pub title: &'static str,
    pub add_label: &'static str,
    pub create_title: &'static str,
    pub edit_title: &'static str,
    pub name_placeholder: &'static str,
    pub crud: CrudText,
}

/// Id of `record` and the confirmation asked before deleting it.
fn delete_request<T: Named>(record: &T) -> (EntityId, String) {
    (record.id(), format!("Delete \"{}\"?", record.name()))
}

pub fn named_list<R>(text: NamedListText, owner: PageOwner, page_size: usize) -> impl IntoView
where
    R: Resource<Draft = NameDto>,
    R::Record: Named + Send + Sync,
{
    let list = ListController::<R>::new(ListStore::new(owner, page_size), text.crud);
    let store = list.store;
    let form = RwSignal::new(ModalForm::<NameForm<R::Record>>::new());
    let loading = list.loading;
    let saving = list.saving;

    let submit = move || list.submit(form, None, || ());

    let delete = move |record: R::Record| {
        let (id, prompt) = delete_request(&record);
        list.delete(id, &prompt);
    };

    list.fetch();

    view! {
        <PageFrame page_id=text.page_id category=PAGE_CAT_LIST>
            <PageHeader title=text.title count=Signal::derive(move || store.with(|s| s.items().len()))>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| form.update(|f| f.open_create())
                >
                    {icon("plus")}
                    {text.add_label}
                </Button>
            </PageHeader>

            <div class="page__content">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false min_width=60.0>"#"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=240.0>"Name"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=120.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            if loading.get() {
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan="3">
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
                                        <TableCell attr:colspan="3">
                                            <div class="table__placeholder">"No records"</div>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .enumerate()
                                .map(|(index, record)| {
                                    let name = record.name().to_string();
                                    let for_edit = record.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{paginator.row_number(index)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{name}</TableCellLayout>
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
                                                        on:click=move |_| delete(record.clone())
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
                {move || {
                    let title = if form.with_untracked(|f| f.is_edit()) {
                        text.edit_title
                    } else {
                        text.create_title
                    };
                    view! {
                        <Modal
                            title=title
                            on_close=Callback::new(move |_| form.update(|f| f.close()))
                            footer=move || view! {
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| form.update(|f| f.close())
                                >
                                    "Cancel"
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    disabled=Signal::derive(move || saving.get())
                                    on_click=move |_| submit()
                                >
                                    "Save"
                                </Button>
                            }
                        >
                            <form class="form" on:submit=move |ev| {
                                ev.prevent_default();
                                submit();
                            }>
                                <Input
                                    label="Name"
                                    value=Signal::derive(move || form.with(|f| f.fields.name.clone()))
                                    on_input=Callback::new(move |value: String| form.update(|f| f.fields.name = value))
                                    placeholder=text.name_placeholder
                                />
                                {move || form.with(|f| f.error().map(|e| view! {
                                    <div class="alert alert--error">{e.to_string()}</div>
                                }))}
                            </form>
                        </Modal>
                    }
                }}
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_object::Object;

    #[test]
    fn test_delete_request_uses_id_and_name() {
        let object: Object =
            serde_json::from_value(serde_json::json!({"id": 7, "name": "Ombor"})).unwrap();
        let (id, prompt) = delete_request(&object);
        assert_eq!(id, 7);
        assert_eq!(prompt, "Delete \"Ombor\"?");
    }
}
