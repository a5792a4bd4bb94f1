use leptos::prelude::*;

/// PageHeader component - title row of a list screen with its actions
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Number of loaded records, shown next to the title
    #[prop(optional, into)]
    count: MaybeProp<usize>,

    /// Action buttons (pass empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-text">
                <h1 class="page__title">
                    {title}
                    {move || count.get().map(|n| view! {
                        <span class="page__count">{n}</span>
                    })}
                </h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="page__subtitle">{s}</div>
                })}
            </div>
            <div class="page__actions">
                {children()}
            </div>
        </div>
    }
}
