use leptos::prelude::*;

/// Section header with a title, optional subtitle and an actions slot
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional)]
    subtitle: Option<&'static str>,

    /// Action buttons
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h2 class="page-header__title">{title}</h2>
                    {subtitle.map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
