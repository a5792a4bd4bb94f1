use leptos::prelude::*;

use crate::shared::api::use_api;

/// Renders `children` only when a credential was found at startup.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let authenticated = use_api().is_authenticated();
    if !authenticated {
        log::warn!("no access token in local storage; screens are disabled");
    }

    view! {
        <Show
            when=move || authenticated
            fallback=|| view! {
                <div class="page">
                    <div class="alert alert--error">"Not authenticated. Please sign in to the admin backend first."</div>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
