use contracts::domain::a002_unit::UnitResource;
use leptos::prelude::*;

use crate::shared::config::use_config;
use crate::shared::list_controller::CrudText;
use crate::shared::list_store::PageOwner;
use crate::shared::named_list::{named_list, NamedListText};

const TEXT: NamedListText = NamedListText {
    page_id: "a002_unit--list",
    title: "Units",
    add_label: " Add unit",
    create_title: "New unit",
    edit_title: "Edit unit",
    name_placeholder: "e.g. kg, litr, dona",
    crud: CrudText {
        created: "Unit created",
        updated: "Unit updated",
        deleted: "Unit deleted",
        fetch_failed: "Failed to fetch units",
        create_failed: "Failed to create unit",
        update_failed: "Failed to update unit",
        delete_failed: "Failed to delete unit",
    },
};

/// Units are paged by the backend; every page change is a new request.
#[component]
pub fn UnitList() -> impl IntoView {
    let page_size = use_config().pagination.units;
    named_list::<UnitResource>(TEXT, PageOwner::Server, page_size)
}
