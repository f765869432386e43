use crate::domain::common::AggregateId;
use crate::shared::date::date_part;
use crate::shared::number::{lenient_f64_option, lenient_f64_or_zero};
use crate::shared::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Server-assigned product identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.as_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(ProductId)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Inventory item as returned by `GET /products`. Only `id` is mandatory;
/// a record with gaps still decodes so the rest of the list renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64_option")]
    pub quantity: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64_option")]
    pub price: Option<f64>,
    /// Computed by the server
    #[serde(default, deserialize_with = "lenient_f64_or_zero")]
    pub total_price: f64,
    #[serde(default)]
    pub delivery_date: Option<String>,
    #[serde(default)]
    pub supplier: Option<String>,
    /// Computed by the server; never sent back
    #[serde(default)]
    pub availability: Option<String>,
}

/// Non-blank text of an optional field.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Editable form of a product. Values are kept exactly as typed; numeric
/// fields are parsed only for validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: Option<ProductId>,
    pub name: String,
    pub material: String,
    pub size: String,
    pub description: String,
    pub manufacturer: String,
    pub quantity: String,
    pub price: String,
    pub delivery_date: String,
    pub supplier: String,
}

impl ProductDto {
    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty()
            || self.quantity.trim().is_empty()
            || self.price.trim().is_empty()
        {
            return Err(ValidationError::MissingRequired);
        }
        if self.quantity.trim().parse::<f64>().is_err() {
            return Err(ValidationError::NotANumber("Кількість"));
        }
        if self.price.trim().parse::<f64>().is_err() {
            return Err(ValidationError::NotANumber("Ціна"));
        }
        Ok(())
    }

    /// Multipart parts in submission order. `id` travels in the URL and
    /// `availability` is owned by the server, so neither is included.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.trim().to_string()),
            ("material", self.material.trim().to_string()),
            ("size", self.size.trim().to_string()),
            ("description", self.description.trim().to_string()),
            ("manufacturer", self.manufacturer.trim().to_string()),
            ("quantity", self.quantity.trim().to_string()),
            ("price", self.price.trim().to_string()),
            ("delivery_date", self.delivery_date.trim().to_string()),
            ("supplier", self.supplier.trim().to_string()),
        ]
    }
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        let text = |v: &Option<String>| non_blank(v).unwrap_or_default().to_string();
        Self {
            id: Some(p.id),
            name: p.name.clone(),
            material: text(&p.material),
            size: text(&p.size),
            description: text(&p.description),
            manufacturer: text(&p.manufacturer),
            quantity: p.quantity.map(|q| q.to_string()).unwrap_or_default(),
            price: p.price.map(|v| v.to_string()).unwrap_or_default(),
            delivery_date: non_blank(&p.delivery_date)
                .map(|d| date_part(d).to_string())
                .unwrap_or_default(),
            supplier: text(&p.supplier),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Product {
        serde_json::from_value(json!({
            "id": 7,
            "name": "Стілець",
            "image": null,
            "material": "дуб",
            "size": "",
            "description": null,
            "manufacturer": "Ikea",
            "quantity": 3,
            "price": "99.50",
            "total_price": "298.50",
            "delivery_date": "2024-01-01T00:00:00.000Z",
            "supplier": null,
            "availability": "В наявності"
        }))
        .unwrap()
    }

    #[test]
    fn test_decodes_wire_record() {
        let p = sample();
        assert_eq!(p.id, ProductId(7));
        assert_eq!(p.price, Some(99.5));
        assert_eq!(p.total_price, 298.5);
        assert_eq!(p.quantity, Some(3.0));
        assert_eq!(non_blank(&p.size), None);
        assert_eq!(non_blank(&p.material), Some("дуб"));
    }

    #[test]
    fn test_total_price_defaults_to_zero() {
        let p: Product =
            serde_json::from_value(json!({"id": 1, "name": "x", "quantity": 1, "price": 2}))
                .unwrap();
        assert_eq!(p.total_price, 0.0);
        assert_eq!(p.availability, None);
    }

    #[test]
    fn test_gaps_in_one_record_keep_the_list_decodable() {
        let list: Vec<Product> = serde_json::from_value(json!([
            {"id": 1, "name": "Стіл", "quantity": 2, "price": "10"},
            {"id": 2, "name": null, "quantity": null, "price": null, "total_price": null},
            {"id": 3, "name": "Шафа", "quantity": "", "price": 5}
        ]))
        .unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list[1].name, "");
        assert_eq!(list[1].quantity, None);
        assert_eq!(list[1].price, None);
        assert_eq!(list[2].quantity, None);

        // the edit form starts empty so validation asks for the missing values
        let dto = ProductDto::from(&list[1]);
        assert_eq!(dto.quantity, "");
        assert_eq!(dto.price, "");
        assert_eq!(dto.validate(), Err(ValidationError::MissingRequired));
    }

    #[test]
    fn test_dto_from_record_keeps_raw_values() {
        let dto = ProductDto::from(&sample());
        assert_eq!(dto.id, Some(ProductId(7)));
        assert_eq!(dto.price, "99.5");
        assert_eq!(dto.quantity, "3");
        // absent values stay empty instead of becoming placeholders
        assert_eq!(dto.size, "");
        assert_eq!(dto.description, "");
        assert_eq!(dto.supplier, "");
        assert_eq!(dto.delivery_date, "2024-01-01");
        assert!(dto.is_edit_mode());
    }

    #[test]
    fn test_validate_requires_name_quantity_price() {
        let valid = ProductDto {
            name: "Стіл".into(),
            quantity: "2".into(),
            price: "10".into(),
            ..Default::default()
        };
        assert_eq!(valid.validate(), Ok(()));

        for broken in [
            ProductDto { name: "  ".into(), ..valid.clone() },
            ProductDto { quantity: String::new(), ..valid.clone() },
            ProductDto { price: String::new(), ..valid.clone() },
        ] {
            assert_eq!(broken.validate(), Err(ValidationError::MissingRequired));
        }

        let bad_price = ProductDto { price: "10 грн".into(), ..valid };
        assert_eq!(bad_price.validate(), Err(ValidationError::NotANumber("Ціна")));
    }

    #[test]
    fn test_form_fields_skip_id_and_availability() {
        let dto = ProductDto::from(&sample());
        let fields = dto.form_fields();
        let names: Vec<&str> = fields.iter().map(|(k, _)| *k).collect();
        assert!(!names.contains(&"id"));
        assert!(!names.contains(&"availability"));
        assert!(fields.contains(&("price", "99.5".to_string())));
    }

    #[test]
    fn test_product_id_parsing() {
        assert_eq!(ProductId::from_string(" 42 "), Ok(ProductId(42)));
        assert!(ProductId::from_string("abc").is_err());
        assert_eq!(ProductId(42).as_string(), "42");
    }
}
