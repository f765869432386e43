use super::view_model::ProductDetailsViewModel;
use crate::shared::icons::icon;
use contracts::domain::a001_product::aggregate::ProductDto;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn text_field(
    vm: ProductDetailsViewModel,
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    get: fn(&ProductDto) -> String,
    set: fn(&mut ProductDto, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type=input_type
                id=id
                name=id
                step=if input_type == "number" { Some("any") } else { None }
                prop:value=move || vm.form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.form.update(|f| set(f, value));
                }
            />
        </div>
    }
}

#[component]
pub fn ProductDetails(
    vm: ProductDetailsViewModel,
    /// Called after a successful create or update
    on_saved: Callback<()>,
) -> impl IntoView {
    let on_image_change = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        vm.set_image(file);
    };

    view! {
        <form
            class="details-form"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.save_command(on_saved);
            }
        >
            <h3 class="details-form__title">
                {move || if vm.is_edit_mode() { "Редагування товару" } else { "Новий товар" }}
            </h3>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <input
                type="hidden"
                id="productId"
                prop:value=move || vm.form.with(|f| f.id.map(|id| id.as_string()).unwrap_or_default())
            />

            <div class="details-form__grid">
                {text_field(vm, "name", "Назва *", "text", |f| f.name.clone(), |f, v| f.name = v)}
                {text_field(vm, "material", "Матеріал", "text", |f| f.material.clone(), |f, v| f.material = v)}
                {text_field(vm, "size", "Розмір", "text", |f| f.size.clone(), |f, v| f.size = v)}
                {text_field(vm, "manufacturer", "Виробник", "text", |f| f.manufacturer.clone(), |f, v| f.manufacturer = v)}
                {text_field(vm, "quantity", "Кількість *", "number", |f| f.quantity.clone(), |f, v| f.quantity = v)}
                {text_field(vm, "price", "Ціна, грн *", "number", |f| f.price.clone(), |f, v| f.price = v)}
                {text_field(vm, "delivery_date", "Дата поставки", "date", |f| f.delivery_date.clone(), |f, v| f.delivery_date = v)}
                {text_field(vm, "supplier", "Постачальник", "text", |f| f.supplier.clone(), |f, v| f.supplier = v)}

                <div class="form-group form-group--wide">
                    <label for="description">"Опис"</label>
                    <textarea
                        id="description"
                        name="description"
                        rows="3"
                        prop:value=move || vm.form.with(|f| f.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| f.description = value);
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="image">"Зображення"</label>
                    <input
                        type="file"
                        id="image"
                        name="image"
                        accept="image/*"
                        node_ref=vm.image_input
                        on:change=on_image_change
                    />
                </div>
            </div>

            <div class="details-actions">
                <button type="submit" class="button button--primary" disabled=move || vm.saving.get()>
                    {icon("save")}
                    {move || if vm.is_edit_mode() { "Зберегти" } else { "Додати товар" }}
                </button>
                <button type="button" class="button button--secondary" on:click=move |_| vm.reset()>
                    {icon("cancel")}
                    "Очистити"
                </button>
            </div>
        </form>
    }
}
