use contracts::domain::a004_product::ProductForm;
use leptos::prelude::*;
use thaw::*;
use web_sys::File;

use crate::shared::browser::{preview_url, revoke_preview};
use crate::shared::components::ui::{ImageInput, Input, Select, Textarea};
use crate::shared::modal::Modal;
use crate::shared::modal_form::ModalForm;

/// Create/edit dialog of a product.
#[component]
pub fn ProductDetails(
    form: RwSignal<ModalForm<ProductForm>>,
    file: RwSignal<Option<File>, LocalStorage>,
    /// Object URL of a newly picked image, if any
    preview: RwSignal<Option<String>>,
    /// `(id, name)` pairs for the category select
    #[prop(into)]
    categories: Signal<Vec<(String, String)>>,
    /// `(id, name)` pairs for the unit select
    #[prop(into)]
    units: Signal<Vec<(String, String)>>,
    #[prop(into)] saving: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let title = if form.with_untracked(|f| f.is_edit()) {
        "Edit product"
    } else {
        "New product"
    };

    let on_select = Callback::new(move |selected: Option<File>| {
        let Some(selected) = selected else {
            return;
        };
        if let Some(url) = preview_url(&selected) {
            if let Some(old) = preview.get_untracked() {
                revoke_preview(&old);
            }
            preview.set(Some(url));
        }
        file.set(Some(selected));
    });

    let image = Signal::derive(move || {
        preview.get().or_else(|| {
            form.with(|f| f.editing().and_then(|p| p.image.clone()))
        })
    });

    // One setter per text field keeps the view below readable.
    let field = move |apply: fn(&mut ProductForm, String)| {
        Callback::new(move |value: String| form.update(|f| apply(&mut f.fields, value)))
    };

    view! {
        <Modal
            title=title
            class="modal--wide"
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
            <form class="form form--grid" on:submit=move |ev| {
                ev.prevent_default();
                on_submit.run(());
            }>
                <Input
                    label="Name"
                    value=Signal::derive(move || form.with(|f| f.fields.name.clone()))
                    on_input=field(|f, v| f.name = v)
                    placeholder="Product name"
                />
                <Input
                    label="Price"
                    input_mode="decimal"
                    value=Signal::derive(move || form.with(|f| f.fields.price.clone()))
                    on_input=field(|f, v| f.price = v)
                    placeholder="0.00"
                />
                <Select
                    label="Category"
                    value=Signal::derive(move || form.with(|f| f.fields.category.clone()))
                    on_change=field(|f, v| f.category = v)
                    options=categories
                    placeholder="Select category"
                />
                <Select
                    label="Unit"
                    value=Signal::derive(move || form.with(|f| f.fields.unity.clone()))
                    on_change=field(|f, v| f.unity = v)
                    options=units
                    placeholder="Select unit"
                />
                <Input
                    label="Quantity left"
                    input_mode="decimal"
                    value=Signal::derive(move || form.with(|f| f.fields.quantity_left.clone()))
                    on_input=field(|f, v| f.quantity_left = v)
                />
                <Input
                    label="Min quantity"
                    input_mode="decimal"
                    value=Signal::derive(move || form.with(|f| f.fields.min_quantity.clone()))
                    on_input=field(|f, v| f.min_quantity = v)
                />
                <Textarea
                    label="Description"
                    value=Signal::derive(move || form.with(|f| f.fields.description.clone()))
                    on_input=field(|f, v| f.description = v)
                    rows=4
                />
                <ImageInput label="Image" preview=image on_select=on_select />
                {move || form.with(|f| f.error().map(|e| view! {
                    <div class="alert alert--error">{e.to_string()}</div>
                }))}
            </form>
        </Modal>
    }
}
