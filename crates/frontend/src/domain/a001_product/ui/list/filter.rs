use super::state::ProductListState;
use crate::domain::a001_product::api;
use crate::shared::icons::icon;
use contracts::domain::a001_product::query::AVAILABILITY_OPTIONS;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Manufacturer names offered by the selector. Blank names would collide
/// with the "all manufacturers" entry and are skipped.
pub fn manufacturer_choices(names: Vec<String>) -> Vec<String> {
    names
        .into_iter()
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect()
}

fn manufacturer_option(name: String) -> impl IntoView {
    let label = name.clone();
    view! { <option value=name>{label}</option> }
}

/// Price, manufacturer and availability filters
#[component]
pub fn ProductFilterBar(
    state: RwSignal<ProductListState>,
    on_apply: Callback<()>,
    on_reset: Callback<()>,
) -> impl IntoView {
    let (manufacturers, set_manufacturers) = signal(Vec::<String>::new());

    spawn_local(async move {
        match api::fetch_manufacturers().await {
            Ok(list) => set_manufacturers.set(list),
            Err(e) => log::error!("Помилка завантаження виробників: {}", e),
        }
    });

    let active_count = move || state.with(|s| s.filters.active_count());

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                {icon("filter")}
                <span class="filter-panel__title">"Фільтри"</span>
                {move || {
                    let count = active_count();
                    (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                }}
            </div>
            <div class="filter-panel__content">
                <div class="form-group">
                    <label for="minPrice">"Ціна від"</label>
                    <input
                        type="number"
                        id="minPrice"
                        min="0"
                        step="any"
                        prop:value=move || state.with(|s| s.filters.min_price.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.filters.min_price = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="maxPrice">"Ціна до"</label>
                    <input
                        type="number"
                        id="maxPrice"
                        min="0"
                        step="any"
                        prop:value=move || state.with(|s| s.filters.max_price.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.filters.max_price = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="manufacturerFilter">"Виробник"</label>
                    <select
                        id="manufacturerFilter"
                        prop:value=move || state.with(|s| s.filters.manufacturer.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.filters.manufacturer = value);
                        }
                    >
                        <option value="">"Усі виробники"</option>
                        {move || {
                            manufacturer_choices(manufacturers.get())
                                .into_iter()
                                .map(manufacturer_option)
                                .collect_view()
                        }}
                    </select>
                </div>
                <div class="form-group">
                    <label for="availabilityFilter">"Наявність"</label>
                    <select
                        id="availabilityFilter"
                        prop:value=move || state.with(|s| s.filters.availability.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.filters.availability = value);
                        }
                    >
                        <option value="">"Будь-яка"</option>
                        {AVAILABILITY_OPTIONS.iter().map(|a| view! { <option value=*a>{*a}</option> }).collect_view()}
                    </select>
                </div>
                <div class="filter-panel__actions">
                    <button class="button button--primary" on:click=move |_| on_apply.run(())>
                        {icon("filter")}
                        "Застосувати"
                    </button>
                    <button class="button button--secondary" on:click=move |_| on_reset.run(())>
                        {icon("cancel")}
                        "Скинути"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manufacturer_choices_skip_blank_names() {
        let names = vec![
            "Ikea".to_string(),
            "  ".to_string(),
            " Богдан ".to_string(),
            String::new(),
        ];
        assert_eq!(manufacturer_choices(names), vec!["Ikea", "Богдан"]);
    }

    #[test]
    fn test_manufacturer_option_builds() {
        let _option = manufacturer_option("Ikea".to_string());
    }
}
