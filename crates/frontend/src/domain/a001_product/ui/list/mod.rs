pub mod cache;
pub mod delete;
pub mod filter;
pub mod row;
pub mod state;

use self::cache::ProductCache;
use self::delete::{confirm_delete, delete_notice, DeleteNotice, DELETE_FAILED, DELETE_OK};
use self::filter::ProductFilterBar;
use self::row::ProductTableRow;
use self::state::{create_state, LoadKind, SearchOutcome};
use crate::domain::a001_product::api;
use crate::domain::a001_product::ui::details::{ProductDetails, ProductDetailsViewModel};
use crate::domain::a001_product::ui::transfer::ProductTransfer;
use crate::shared::browser;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::request_generation::RequestGeneration;
use contracts::domain::a001_product::aggregate::ProductId;
use leptos::html::{Div, Table};
use leptos::prelude::*;
use leptos::task::spawn_local;

const SEARCH_DEBOUNCE_MS: u32 = 300;

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let state = create_state();
    let cache = RwSignal::new(ProductCache::default());
    let generation = StoredValue::new(RequestGeneration::new());
    let search_debounce = StoredValue::new(RequestGeneration::new());
    let table_ref = NodeRef::<Table>::new();
    let form_ref = NodeRef::<Div>::new();
    let vm = ProductDetailsViewModel::new();

    // Only the most recently issued load may render.
    let load = move |kind: LoadKind| {
        let query = state.with_untracked(|s| s.query(kind));
        let ticket = generation.with_value(|g| g.begin());
        spawn_local(async move {
            match api::fetch_products(&query).await {
                Ok(products) => {
                    if !ticket.is_current() {
                        log::debug!("Dropping stale product list (request #{})", ticket.id());
                        return;
                    }
                    let count = products.len();
                    log::debug!("Отримано товарів: {}", count);
                    cache.set(ProductCache::new(products));

                    if kind == LoadKind::Search {
                        let mut outcome = SearchOutcome::NoSearch;
                        state.update(|s| outcome = s.apply_search_result(&query, count));
                        if outcome == SearchOutcome::Found {
                            if let Some(table) = table_ref.get_untracked() {
                                browser::scroll_into_view(&table);
                            }
                        }
                    }
                }
                Err(e) => log::error!("Помилка отримання товарів: {}", e),
            }
        });
    };

    let reload_unfiltered = move || {
        state.update(|s| s.reset_after_mutation());
        load(LoadKind::Search);
    };

    let schedule_search = move || {
        let ticket = search_debounce.with_value(|g| g.begin());
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if ticket.is_current() {
                load(LoadKind::Search);
            }
        });
    };

    let search_now = move || {
        // cancels a pending debounced search
        search_debounce.with_value(|g| g.begin());
        load(LoadKind::Search);
    };

    let on_edit = Callback::new(move |id: ProductId| {
        let Some(product) = cache.with_untracked(|c| c.get(id).cloned()) else {
            log::warn!("Product {} is not in the current list", id);
            return;
        };
        vm.load_from(&product);
        if let Some(form) = form_ref.get_untracked() {
            browser::scroll_into_view(&form);
        }
    });

    let on_delete = Callback::new(move |id: ProductId| {
        let Some(request) = confirm_delete(id, browser::confirm) else {
            return;
        };
        spawn_local(async move {
            let result = api::delete_product(&request).await;
            if let Err(e) = &result {
                log::error!("Помилка видалення: {}", e);
            }
            match delete_notice(&result) {
                DeleteNotice::Deleted => {
                    browser::alert(DELETE_OK);
                    if vm.form.with_untracked(|f| f.id == Some(id)) {
                        vm.reset();
                    }
                    reload_unfiltered();
                }
                DeleteNotice::Failed => browser::alert(DELETE_FAILED),
                DeleteNotice::Silent => {}
            }
        });
    });

    let on_saved = Callback::new(move |_: ()| reload_unfiltered());

    load(LoadKind::Search);

    view! {
        <PageFrame page_id="a001_product--list" category=PAGE_CAT_LIST>
            <PageHeader title="Товари">
                <button class="button button--secondary" on:click=move |_| search_now()>
                    {icon("refresh")}
                    "Оновити"
                </button>
                <ProductTransfer on_imported=on_saved />
            </PageHeader>

            <div class="page__content">
                <div class="product-form" node_ref=form_ref>
                    <ProductDetails vm=vm on_saved=on_saved />
                </div>

                <div class="search-bar">
                    <input
                        type="search"
                        id="search"
                        class="search-bar__input"
                        placeholder="Пошук товару за назвою..."
                        prop:value=move || state.with(|s| s.search.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.search = value);
                            schedule_search();
                        }
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                search_now();
                            }
                        }
                    />
                    <button class="button button--primary" on:click=move |_| search_now()>
                        {icon("search")}
                        "Пошук"
                    </button>
                    <span id="searchMessage" class="search-bar__message">
                        {move || state.with(|s| s.search_message.clone()).unwrap_or_default()}
                    </span>
                </div>

                <ProductFilterBar
                    state=state
                    on_apply=Callback::new(move |_: ()| load(LoadKind::Filter))
                    on_reset=Callback::new(move |_: ()| {
                        state.update(|s| s.reset_filters());
                        load(LoadKind::Search);
                    })
                />

                <div class="table-container">
                    <table class="table__data table--striped" node_ref=table_ref>
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Назва"</th>
                                <th class="table__header-cell">"Зображення"</th>
                                <th class="table__header-cell">"Матеріал"</th>
                                <th class="table__header-cell">"Розмір"</th>
                                <th class="table__header-cell">"Опис"</th>
                                <th class="table__header-cell">"Виробник"</th>
                                <th class="table__header-cell">"Кількість"</th>
                                <th class="table__header-cell">"Ціна"</th>
                                <th class="table__header-cell">"Загальна вартість"</th>
                                <th class="table__header-cell">"Дата поставки"</th>
                                <th class="table__header-cell">"Постачальник"</th>
                                <th class="table__header-cell">"Наявність"</th>
                                <th class="table__header-cell">"Дії"</th>
                            </tr>
                        </thead>
                        <tbody id="productTableBody">
                            {move || cache.with(|c| c.rows()).into_iter().map(|row| view! {
                                <ProductTableRow row=row on_edit=on_edit on_delete=on_delete />
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>
        </PageFrame>
    }
}
