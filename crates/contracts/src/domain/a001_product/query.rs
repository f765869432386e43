/// Values offered by the availability filter selector. They are passed to
/// the backend verbatim.
pub const AVAILABILITY_OPTIONS: &[&str] = &["В наявності", "Немає в наявності"];

/// Query parameters of `GET /products`. Empty strings mean "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductListQuery {
    pub search: String,
    pub min_price: String,
    pub max_price: String,
    pub manufacturer: String,
    pub availability: String,
}

impl ProductListQuery {
    pub fn search(term: &str) -> Self {
        Self {
            search: term.to_string(),
            ..Default::default()
        }
    }

    pub fn has_search(&self) -> bool {
        !self.search.trim().is_empty()
    }

    pub fn is_unfiltered(&self) -> bool {
        self.params().is_empty()
    }

    fn params(&self) -> Vec<(&'static str, &str)> {
        [
            ("search", self.search.as_str()),
            ("minPrice", self.min_price.as_str()),
            ("maxPrice", self.max_price.as_str()),
            ("manufacturer", self.manufacturer.as_str()),
            ("availability", self.availability.as_str()),
        ]
        .into_iter()
        .map(|(k, v)| (k, v.trim()))
        .filter(|(_, v)| !v.is_empty())
        .collect()
    }

    /// `?search=...&minPrice=...`, or an empty string when nothing is set
    pub fn to_query_string(&self) -> String {
        let params = self.params();
        if params.is_empty() {
            return String::new();
        }
        let joined = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{}", joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query() {
        let q = ProductListQuery::default();
        assert!(q.is_unfiltered());
        assert!(!q.has_search());
        assert_eq!(q.to_query_string(), "");
    }

    #[test]
    fn test_search_is_trimmed_and_encoded() {
        let q = ProductListQuery::search("  шафа купе ");
        assert!(q.has_search());
        assert_eq!(
            q.to_query_string(),
            "?search=%D1%88%D0%B0%D1%84%D0%B0%20%D0%BA%D1%83%D0%BF%D0%B5"
        );
    }

    #[test]
    fn test_blank_search_is_unfiltered() {
        let q = ProductListQuery::search("   ");
        assert!(q.is_unfiltered());
        assert_eq!(q.to_query_string(), "");
    }

    #[test]
    fn test_filters_in_fixed_order() {
        let q = ProductListQuery {
            availability: "В наявності".into(),
            min_price: "10".into(),
            manufacturer: "A&B".into(),
            ..Default::default()
        };
        assert_eq!(
            q.to_query_string(),
            "?minPrice=10&manufacturer=A%26B&availability=%D0%92%20%D0%BD%D0%B0%D1%8F%D0%B2%D0%BD%D0%BE%D1%81%D1%82%D1%96"
        );
    }
}
