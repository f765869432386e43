use contracts::domain::a001_product::aggregate::{non_blank, Product, ProductId};
use contracts::domain::common::AggregateId;
use contracts::shared::date::date_part;
use leptos::prelude::*;

/// Shown for absent or blank values
pub const PLACEHOLDER: &str = "—";
pub const CURRENCY_SUFFIX: &str = " грн";

pub fn format_money(value: f64) -> String {
    format!("{:.2}{}", value, CURRENCY_SUFFIX)
}

/// Display projection of one product
#[derive(Clone, Debug, PartialEq)]
pub struct ProductRow {
    pub id: ProductId,
    pub data_id: String,
    pub name: String,
    pub image: Option<String>,
    pub material: String,
    pub size: String,
    pub description: String,
    pub manufacturer: String,
    pub quantity: String,
    pub price: String,
    pub total_price: String,
    pub delivery_date: String,
    pub supplier: String,
    pub availability: String,
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        let text = |v: &Option<String>| non_blank(v).unwrap_or(PLACEHOLDER).to_string();
        let name = p.name.trim();
        Self {
            id: p.id,
            data_id: p.id.as_string(),
            name: if name.is_empty() { PLACEHOLDER.to_string() } else { name.to_string() },
            image: non_blank(&p.image).map(str::to_string),
            material: text(&p.material),
            size: text(&p.size),
            description: text(&p.description),
            manufacturer: text(&p.manufacturer),
            quantity: p
                .quantity
                .map(|q| q.to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            price: format_money(p.price.unwrap_or_default()),
            total_price: format_money(p.total_price),
            delivery_date: non_blank(&p.delivery_date)
                .map(|d| date_part(d).to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            supplier: text(&p.supplier),
            availability: text(&p.availability),
        }
    }
}

/// One table row. The row owns its edit and delete buttons and reports
/// clicks through the callbacks with its product id.
#[component]
pub fn ProductTableRow(
    row: ProductRow,
    on_edit: Callback<ProductId>,
    on_delete: Callback<ProductId>,
) -> impl IntoView {
    let id = row.id;
    let image = match row.image {
        Some(src) => view! { <img src=src width="50" alt=row.name.clone() /> }.into_any(),
        None => view! { <span>{PLACEHOLDER}</span> }.into_any(),
    };

    view! {
        <tr class="table__row" data-id=row.data_id>
            <td class="table__cell name">{row.name}</td>
            <td class="table__cell">{image}</td>
            <td class="table__cell material">{row.material}</td>
            <td class="table__cell size">{row.size}</td>
            <td class="table__cell description">{row.description}</td>
            <td class="table__cell manufacturer">{row.manufacturer}</td>
            <td class="table__cell table__cell--number quantity">{row.quantity}</td>
            <td class="table__cell table__cell--number price">{row.price}</td>
            <td class="table__cell table__cell--number total_price">{row.total_price}</td>
            <td class="table__cell delivery_date">{row.delivery_date}</td>
            <td class="table__cell supplier">{row.supplier}</td>
            <td class="table__cell availability">{row.availability}</td>
            <td class="table__cell table__cell--actions">
                <button class="button button--small" on:click=move |_| on_edit.run(id)>
                    "Редагувати"
                </button>
                <button class="button button--small button--danger" on:click=move |_| on_delete.run(id)>
                    "Видалити"
                </button>
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_placeholders_for_falsy_fields() {
        let p: Product = serde_json::from_value(json!({
            "id": 5,
            "name": "Шафа",
            "image": "",
            "material": null,
            "size": "  ",
            "manufacturer": "Ikea",
            "quantity": 4,
            "price": 1250,
            "total_price": 5000
        }))
        .unwrap();
        let row = ProductRow::from(&p);
        assert_eq!(row.data_id, "5");
        assert_eq!(row.image, None);
        assert_eq!(row.material, PLACEHOLDER);
        assert_eq!(row.size, PLACEHOLDER);
        assert_eq!(row.description, PLACEHOLDER);
        assert_eq!(row.delivery_date, PLACEHOLDER);
        assert_eq!(row.supplier, PLACEHOLDER);
        assert_eq!(row.availability, PLACEHOLDER);
        assert_eq!(row.manufacturer, "Ikea");
        assert_eq!(row.quantity, "4");
    }

    #[test]
    fn test_record_with_gaps_still_renders() {
        let p: Product = serde_json::from_value(json!({
            "id": 9,
            "name": null,
            "quantity": null,
            "price": null
        }))
        .unwrap();
        let row = ProductRow::from(&p);
        assert_eq!(row.name, PLACEHOLDER);
        assert_eq!(row.quantity, PLACEHOLDER);
        assert_eq!(row.price, "0.00 грн");
        assert_eq!(row.total_price, "0.00 грн");
    }

    #[test]
    fn test_money_has_two_decimals_and_suffix() {
        assert_eq!(format_money(1250.0), "1250.00 грн");
        assert_eq!(format_money(99.999), "100.00 грн");
        assert_eq!(format_money(0.5), "0.50 грн");
    }

    #[test]
    fn test_image_and_date() {
        let p: Product = serde_json::from_value(json!({
            "id": 1,
            "name": "Лампа",
            "image": "/uploads/lamp.png",
            "quantity": "2",
            "price": "19.9",
            "delivery_date": "2024-05-02T00:00:00.000Z",
            "availability": "В наявності"
        }))
        .unwrap();
        let row = ProductRow::from(&p);
        assert_eq!(row.image.as_deref(), Some("/uploads/lamp.png"));
        assert_eq!(row.delivery_date, "2024-05-02");
        assert_eq!(row.price, "19.90 грн");
        assert_eq!(row.total_price, "0.00 грн");
        assert_eq!(row.availability, "В наявності");
    }
}
