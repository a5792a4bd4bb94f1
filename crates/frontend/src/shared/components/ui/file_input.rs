use leptos::prelude::*;
use web_sys::File;

use crate::shared::browser::selected_file;

/// Image picker with a preview of the current or newly chosen picture.
#[component]
pub fn ImageInput(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// URL shown as preview: the stored image or an object URL of the new file
    #[prop(into)]
    preview: Signal<Option<String>>,
    on_select: Callback<Option<File>>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">{l}</label>
            })}
            <input
                class="form__input"
                type="file"
                accept="image/*"
                on:change=move |ev| on_select.run(selected_file(&ev))
            />
            {move || preview.get().map(|src| view! {
                <img class="form__preview" src=src alt="" />
            })}
        </div>
    }
}
