use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

// (href, label, icon)
const MENU: [(&str, &str, &str); 6] = [
    ("/orders", "Orders", "orders"),
    ("/products", "Products", "products"),
    ("/categories", "Categories", "categories"),
    ("/units", "Units", "units"),
    ("/objects", "Objects", "objects"),
    ("/users", "Users", "users"),
];

/// Navigation links; the router marks the current one with `aria-current="page"`.
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="app-sidebar__content">
            {MENU
                .into_iter()
                .map(|(href, label, icon_name)| {
                    view! {
                        <A href=href attr:class="app-sidebar__item">
                            <div class="app-sidebar__item-content">
                                {icon(icon_name)}
                                <span>{label}</span>
                            </div>
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}
