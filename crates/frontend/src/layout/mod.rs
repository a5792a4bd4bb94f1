pub mod sidebar;

use crate::shared::icons::icon;
use leptos::prelude::*;
use sidebar::Sidebar;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              top header                  |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let sidebar_open = RwSignal::new(true);

    view! {
        <div class="app-layout">
            <div class="top-header">
                <div class="top-header__brand">
                    <button
                        class="top-header__icon-btn"
                        on:click=move |_| sidebar_open.update(|open| *open = !*open)
                        title=move || if sidebar_open.get() { "Hide navigation" } else { "Show navigation" }
                    >
                        {icon("menu")}
                    </button>
                    <span class="top-header__title">"Agro Admin"</span>
                </div>
            </div>

            <div class="app-body">
                <div data-zone="left" class="left" class:hidden=move || !sidebar_open.get()>
                    <Sidebar />
                </div>
                <div class="app-main">
                    {children()}
                </div>
            </div>
        </div>
    }
}
