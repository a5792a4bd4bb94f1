use contracts::domain::a003_category::CategoryForm;
use leptos::prelude::*;
use thaw::*;
use web_sys::File;

use crate::shared::browser::{preview_url, revoke_preview};
use crate::shared::components::ui::{ImageInput, Input};
use crate::shared::modal::Modal;
use crate::shared::modal_form::ModalForm;

/// Create/edit dialog of a category. The chosen image file is kept outside
/// the form state because `File` is not `Send`.
#[component]
pub fn CategoryDetails(
    form: RwSignal<ModalForm<CategoryForm>>,
    file: RwSignal<Option<File>, LocalStorage>,
    #[prop(into)] saving: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let title = if form.with_untracked(|f| f.is_edit()) {
        "Edit category"
    } else {
        "New category"
    };

    let on_select = Callback::new(move |selected: Option<File>| {
        let Some(selected) = selected else {
            return;
        };
        if let Some(url) = preview_url(&selected) {
            form.update(|f| {
                if let Some(old) = f.fields.image.replace(url) {
                    revoke_preview(&old);
                }
            });
        }
        file.set(Some(selected));
    });

    view! {
        <Modal
            title=title
            on_close=on_close
            footer=move || view! {
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=saving
                    on_click=move |_| on_submit.run(())
                >
                    "Save"
                </Button>
            }
        >
            <form class="form" on:submit=move |ev| {
                ev.prevent_default();
                on_submit.run(());
            }>
                <Input
                    label="Name"
                    value=Signal::derive(move || form.with(|f| f.fields.name.clone()))
                    on_input=Callback::new(move |value: String| form.update(|f| f.fields.name = value))
                    placeholder="Category name"
                />
                <Input
                    label="Order"
                    input_type="number"
                    value=Signal::derive(move || form.with(|f| f.fields.order.clone()))
                    on_input=Callback::new(move |value: String| form.update(|f| f.fields.order = value))
                    placeholder="Position in the catalogue (optional)"
                />
                <ImageInput
                    label="Image"
                    preview=Signal::derive(move || form.with(|f| f.fields.image.clone()))
                    on_select=on_select
                />
                {move || form.with(|f| f.error().map(|e| view! {
                    <div class="alert alert--error">{e.to_string()}</div>
                }))}
            </form>
        </Modal>
    }
}
