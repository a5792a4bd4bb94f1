use contracts::system::users::{Role, UserForm};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::ui::{Input, Select};
use crate::shared::modal::Modal;
use crate::shared::modal_form::ModalForm;

fn role_options() -> Vec<(String, String)> {
    Role::ALL
        .iter()
        .map(|r| (r.as_str().to_string(), r.label().to_string()))
        .collect()
}

/// Create/edit dialog of an account.
#[component]
pub fn UserDetails(
    form: RwSignal<ModalForm<UserForm>>,
    #[prop(into)] saving: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_edit = form.with_untracked(|f| f.is_edit());
    let title = if is_edit { "Edit user" } else { "New user" };
    let password_hint = if is_edit {
        "Leave blank to keep the current password"
    } else {
        "Password"
    };

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
                    label="Username"
                    value=Signal::derive(move || form.with(|f| f.fields.username.clone()))
                    on_input=Callback::new(move |value: String| form.update(|f| f.fields.username = value))
                    autocomplete="off"
                />
                <Input
                    label="Password"
                    input_type="password"
                    value=Signal::derive(move || form.with(|f| f.fields.password.clone()))
                    on_input=Callback::new(move |value: String| form.update(|f| f.fields.password = value))
                    placeholder=password_hint
                    autocomplete="new-password"
                />
                <Select
                    label="Role"
                    value=Signal::derive(move || form.with(|f| f.fields.role.as_str().to_string()))
                    on_change=Callback::new(move |value: String| form.update(|f| f.fields.role = Role::parse(&value)))
                    options=role_options()
                />
                {move || form.with(|f| f.error().map(|e| view! {
                    <div class="alert alert--error">{e.to_string()}</div>
                }))}
            </form>
        </Modal>
    }
}
