use crate::routes::routes::AppRoutes;
use crate::shared::api::ApiClient;
use crate::shared::config::AppConfig;
use crate::shared::notify::{NoticeHost, Notifier};
use crate::system::auth::storage;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // The credential is read once; screens reach it only through the client.
    let token = storage::get_access_token(&config.api.token_key);
    let client = ApiClient::new(config.api.resolved_base_url(), token);
    log::debug!(
        "api client ready (base: {}, authenticated: {})",
        client.base_url(),
        client.is_authenticated()
    );

    provide_context(config);
    provide_context(client);
    provide_context(Notifier::new());

    view! {
        <AppRoutes />
        <NoticeHost />
    }
}
