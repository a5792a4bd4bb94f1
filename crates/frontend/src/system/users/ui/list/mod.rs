use contracts::shared::Record;
use contracts::system::users::{Role, User, UserForm, UserResource};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::list_controller::{CrudText, ListController};
use crate::shared::list_store::{ListStore, PageOwner};
use crate::shared::modal_form::ModalForm;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::users::ui::details::UserDetails;

const TEXT: CrudText = CrudText {
    created: "User created",
    updated: "User updated",
    deleted: "User deleted",
    fetch_failed: "Failed to fetch users",
    create_failed: "Failed to create user",
    update_failed: "Failed to update user",
    delete_failed: "Failed to delete user",
};

#[component]
pub fn UsersList() -> impl IntoView {
    let page_size = use_config().pagination.users;
    let list = ListController::<UserResource>::new(
        ListStore::new(PageOwner::Client, page_size),
        TEXT,
    );
    let store = list.store;
    let loading = list.loading;
    let saving = list.saving;
    let form = RwSignal::new(ModalForm::<UserForm>::new());

    let submit = move || list.submit(form, None, || ());

    let delete = move |user: User| {
        list.delete(user.id(), &format!("Delete user \"{}\"?", user.username));
    };

    list.fetch();

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Users" count=Signal::derive(move || store.with(|s| s.items().len()))>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| form.update(|f| f.open_create())
                >
                    {icon("plus")}
                    " Add user"
                </Button>
            </PageHeader>

            <div class="page__content">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false min_width=60.0>"#"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=200.0>"Username"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=100.0>"Role"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=120.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            if loading.get() {
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan="4">
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
                                        <TableCell attr:colspan="4">
                                            <div class="table__placeholder">"No users"</div>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .enumerate()
                                .map(|(index, user)| {
                                    let role = user.role();
                                    let for_edit = user.clone();
                                    let for_delete = user.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{paginator.row_number(index)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{user.username}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {match role {
                                                        Role::Admin => view! { <span class="badge badge--warning">{role.label()}</span> }.into_any(),
                                                        Role::User => view! { <span class="badge badge--neutral">{role.label()}</span> }.into_any(),
                                                    }}
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
                <UserDetails
                    form=form
                    saving=saving
                    on_submit=Callback::new(move |_| submit())
                    on_close=Callback::new(move |_| form.update(|f| f.close()))
                />
            </Show>
        </PageFrame>
    }
}
