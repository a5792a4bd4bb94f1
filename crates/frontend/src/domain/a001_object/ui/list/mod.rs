use contracts::domain::a001_object::ObjectResource;
use leptos::prelude::*;

use crate::shared::config::use_config;
use crate::shared::list_controller::CrudText;
use crate::shared::list_store::PageOwner;
use crate::shared::named_list::{named_list, NamedListText};

const TEXT: NamedListText = NamedListText {
    page_id: "a001_object--list",
    title: "Objects",
    add_label: " Add object",
    create_title: "New object",
    edit_title: "Edit object",
    name_placeholder: "Object name",
    crud: CrudText {
        created: "Object created",
        updated: "Object updated",
        deleted: "Object deleted",
        fetch_failed: "Failed to fetch objects",
        create_failed: "Failed to create object",
        update_failed: "Failed to update object",
        delete_failed: "Failed to delete object",
    },
};

/// Objects are few; the whole list is fetched and paged locally.
#[component]
pub fn ObjectList() -> impl IntoView {
    let page_size = use_config().pagination.objects;
    named_list::<ObjectResource>(TEXT, PageOwner::Client, page_size)
}
