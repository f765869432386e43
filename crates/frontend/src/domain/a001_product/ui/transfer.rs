use crate::domain::a001_product::api::{self, ExportFormat};
use crate::shared::api_error::ApiError;
use crate::shared::browser;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

pub const IMPORT_NO_FILE: &str = "Оберіть файл Excel для імпорту!";

/// Excel/TXT export and Excel import controls
#[component]
pub fn ProductTransfer(
    /// Called after a successful import
    on_imported: Callback<()>,
) -> impl IntoView {
    let (importing, set_importing) = signal(false);

    let handle_import = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            browser::alert(IMPORT_NO_FILE);
            return;
        };
        // lets the same file be picked again
        input.set_value("");

        set_importing.set(true);
        spawn_local(async move {
            match api::import_excel(file).await {
                Ok(result) => {
                    log::info!("Imported {} products", result.imported);
                    browser::alert(&format!("Імпортовано {} товарів", result.imported));
                    on_imported.run(());
                }
                Err(ApiError::Server(msg)) => {
                    browser::alert(&format!("Помилка імпорту: {}", msg));
                }
                Err(e) => {
                    log::error!("Помилка імпорту: {}", e);
                    browser::alert("Помилка імпорту: невідома помилка");
                }
            }
            set_importing.set(false);
        });
    };

    view! {
        <div class="transfer-actions">
            <button
                class="button button--secondary"
                on:click=move |_| browser::navigate(&api::export_url(ExportFormat::Excel))
            >
                {icon("download")}
                "Експорт Excel"
            </button>
            <button
                class="button button--secondary"
                on:click=move |_| browser::navigate(&api::export_url(ExportFormat::Txt))
            >
                {icon("download")}
                "Експорт TXT"
            </button>
            <label class=move || {
                if importing.get() {
                    "button button--secondary button--disabled"
                } else {
                    "button button--secondary"
                }
            }>
                {icon("upload")}
                {move || if importing.get() { "Імпорт..." } else { "Імпорт Excel" }}
                <input
                    type="file"
                    accept=".xlsx,.xls"
                    style="display: none;"
                    disabled=move || importing.get()
                    on:change=handle_import
                />
            </label>
        </div>
    }
}
