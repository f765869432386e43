use crate::dashboards::d400_supply::api;
use crate::dashboards::d400_supply::canvas::CanvasBackend;
use crate::dashboards::d400_supply::chart::{replace_chart, BarChartModel, SupplyChart};
use crate::shared::browser;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use contracts::dashboards::d400_supply::SupplyQuery;
use leptos::html::Canvas;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Supply chart for a selected period
#[component]
pub fn SupplyDashboard() -> impl IntoView {
    let (start_date, set_start_date) = signal(String::new());
    let (end_date, set_end_date) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let canvas_ref = NodeRef::<Canvas>::new();
    // The chart on screen; owned by this component and dropped with it.
    let chart = StoredValue::new_local(None::<SupplyChart<CanvasBackend>>);

    let build_chart = move || {
        let query = SupplyQuery::new(start_date.get_untracked(), end_date.get_untracked());
        if let Err(e) = query.validate() {
            browser::alert(&e.to_string());
            return;
        }

        set_loading.set(true);
        spawn_local(async move {
            match api::get_supply_data(&query).await {
                Ok(points) => {
                    log::debug!("Дані для графіка: {} точок", points.len());
                    let model = BarChartModel::from_points(&points);
                    let mut previous = None;
                    chart.update_value(|c| previous = c.take());
                    let next = replace_chart(
                        previous,
                        || {
                            canvas_ref
                                .get_untracked()
                                .ok_or_else(|| "chart canvas is not mounted".to_string())
                                .and_then(CanvasBackend::new)
                        },
                        model,
                    );
                    match next {
                        Ok(next) => chart.set_value(Some(next)),
                        Err(e) => log::error!("Помилка побудови графіка: {}", e),
                    }
                }
                Err(e) => log::error!("Помилка завантаження графіка: {}", e),
            }
            set_loading.set(false);
        });
    };

    view! {
        <PageFrame page_id="d400_supply--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Надходження товарів" subtitle="Кількість товарів за датою поставки" />

            <div class="page__content">
                <div class="chart-controls">
                    <div class="form-group">
                        <label for="startDate">"З"</label>
                        <input
                            type="date"
                            id="startDate"
                            prop:value=start_date
                            on:input=move |ev| set_start_date.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="endDate">"По"</label>
                        <input
                            type="date"
                            id="endDate"
                            prop:value=end_date
                            on:input=move |ev| set_end_date.set(event_target_value(&ev))
                        />
                    </div>
                    <button
                        class="button button--primary"
                        disabled=move || loading.get()
                        on:click=move |_| build_chart()
                    >
                        {icon("chart")}
                        "Побудувати графік"
                    </button>
                </div>

                <div class="chart-container">
                    <canvas id="supplyChart" node_ref=canvas_ref></canvas>
                </div>
            </div>
        </PageFrame>
    }
}
