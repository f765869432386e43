//! PageFrame: standard root wrapper for every section of the page.
//!
//! Sets two metadata attributes on the root DOM element:
//!   - `id`: `"{entity}--{category}"`, e.g. `"a001_product--list"`
//!   - `data-page-category`: one of the PAGE_CAT_* constants
//!
//! The `--` separator keeps the entity searchable: the id copied from the
//! DOM inspector leads straight to `domain/a001_product/`.

use leptos::prelude::*;

/// Table of records with filters.
pub const PAGE_CAT_LIST: &str = "list";

/// Analytical chart view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

fn frame_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    }
}

#[component]
pub fn PageFrame(
    page_id: &'static str,
    category: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            id=page_id
            class=frame_class(category)
            data-page-category=category
        >
            {children()}
        </section>
    }
}
