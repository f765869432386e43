use crate::dashboards::d400_supply::ui::SupplyDashboard;
use crate::domain::a001_product::ui::list::ProductList;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app">
            <header class="app-header">
                {icon("products")}
                <h1 class="app-header__title">"Облік товарів"</h1>
            </header>
            <main class="app-main">
                <ProductList />
                <SupplyDashboard />
            </main>
        </div>
    }
}
