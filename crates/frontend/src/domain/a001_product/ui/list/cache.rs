use super::row::ProductRow;
use contracts::domain::a001_product::aggregate::{Product, ProductId};

/// Records of the last completed load, in server order.
///
/// Edit looks the original record up here instead of reading rendered
/// cells back, so placeholders and rounding never leak into the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCache {
    items: Vec<Product>,
}

impl ProductCache {
    pub fn new(items: Vec<Product>) -> Self {
        Self { items }
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.items.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn rows(&self) -> Vec<ProductRow> {
        self.items.iter().map(ProductRow::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::aggregate::ProductDto;
    use serde_json::json;

    fn products() -> Vec<Product> {
        serde_json::from_value(json!([
            {"id": 3, "name": "Полиця", "quantity": 1, "price": 10, "total_price": 10},
            {"id": 7, "name": "Стіл", "material": null, "quantity": 2, "price": "1499.90", "total_price": "2999.80"},
            {"id": 1, "name": "Крісло", "quantity": 5, "price": 300, "total_price": 1500}
        ]))
        .unwrap()
    }

    #[test]
    fn test_rows_keep_server_order() {
        let cache = ProductCache::new(products());
        let ids: Vec<i64> = cache.rows().iter().map(|r| r.id.value()).collect();
        assert_eq!(ids, vec![3, 7, 1]);
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_edit_reads_the_cached_record() {
        let cache = ProductCache::new(products());
        let dto = ProductDto::from(cache.get(ProductId(7)).unwrap());
        assert_eq!(dto.id, Some(ProductId(7)));
        assert_eq!(dto.price, "1499.9");
        assert_eq!(dto.material, "");
    }

    #[test]
    fn test_missing_id() {
        let cache = ProductCache::new(products());
        assert!(cache.get(ProductId(99)).is_none());
        assert!(ProductCache::default().is_empty());
    }
}
