use contracts::domain::a001_product::query::ProductListQuery;
use leptos::prelude::*;

pub const NOT_FOUND_MESSAGE: &str = "Такого товару не знайдено";

/// Filter inputs of the list. Empty strings mean "not set".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductFilters {
    pub min_price: String,
    pub max_price: String,
    pub manufacturer: String,
    pub availability: String,
}

impl ProductFilters {
    pub fn active_count(&self) -> usize {
        [
            &self.min_price,
            &self.max_price,
            &self.manufacturer,
            &self.availability,
        ]
        .iter()
        .filter(|v| !v.trim().is_empty())
        .count()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductListState {
    pub search: String,
    pub filters: ProductFilters,
    pub search_message: Option<String>,
}

/// Which input produced a load
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadKind {
    /// Search box (or the plain reload); drives the "not found" message
    Search,
    /// Filter panel; never touches the search message
    Filter,
}

/// What the search box should do once a search load has rendered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    NoSearch,
    Found,
    NotFound,
}

impl ProductListState {
    pub fn query(&self, kind: LoadKind) -> ProductListQuery {
        match kind {
            LoadKind::Search => ProductListQuery::search(self.search.trim()),
            LoadKind::Filter => ProductListQuery {
                min_price: self.filters.min_price.clone(),
                max_price: self.filters.max_price.clone(),
                manufacturer: self.filters.manufacturer.clone(),
                availability: self.filters.availability.clone(),
                ..Default::default()
            },
        }
    }

    pub fn reset_filters(&mut self) {
        self.filters = ProductFilters::default();
    }

    /// Mutations reload the whole unfiltered list
    pub fn reset_after_mutation(&mut self) {
        self.search.clear();
        self.reset_filters();
        self.search_message = None;
    }

    /// Apply the result of a search load and report what happened
    pub fn apply_search_result(&mut self, query: &ProductListQuery, count: usize) -> SearchOutcome {
        let outcome = match (query.has_search(), count) {
            (false, _) => SearchOutcome::NoSearch,
            (true, 0) => SearchOutcome::NotFound,
            (true, _) => SearchOutcome::Found,
        };
        self.search_message = match outcome {
            SearchOutcome::NotFound => Some(NOT_FOUND_MESSAGE.to_string()),
            _ => None,
        };
        outcome
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filtered_state() -> ProductListState {
        ProductListState {
            search: "стіл".into(),
            filters: ProductFilters {
                min_price: "100".into(),
                max_price: "".into(),
                manufacturer: "Ikea".into(),
                availability: "В наявності".into(),
            },
            search_message: Some(NOT_FOUND_MESSAGE.into()),
        }
    }

    #[test]
    fn test_search_query_ignores_filters() {
        let q = filtered_state().query(LoadKind::Search);
        assert_eq!(q, ProductListQuery::search("стіл"));
    }

    #[test]
    fn test_filter_query_ignores_search() {
        let q = filtered_state().query(LoadKind::Filter);
        assert!(!q.has_search());
        assert_eq!(q.min_price, "100");
        assert_eq!(q.manufacturer, "Ikea");
        assert_eq!(filtered_state().filters.active_count(), 3);
    }

    #[test]
    fn test_reload_after_mutation_is_unfiltered() {
        let mut state = filtered_state();
        state.reset_after_mutation();
        assert!(state.query(LoadKind::Search).is_unfiltered());
        assert!(state.query(LoadKind::Filter).is_unfiltered());
        assert_eq!(state.search_message, None);
    }

    #[test]
    fn test_reset_filters_keeps_search() {
        let mut state = filtered_state();
        state.reset_filters();
        assert_eq!(state.filters.active_count(), 0);
        assert_eq!(state.search, "стіл");
    }

    #[test]
    fn test_search_outcomes() {
        let mut state = ProductListState::default();
        let search = ProductListQuery::search("шафа");

        assert_eq!(state.apply_search_result(&search, 0), SearchOutcome::NotFound);
        assert_eq!(state.search_message.as_deref(), Some(NOT_FOUND_MESSAGE));

        assert_eq!(state.apply_search_result(&search, 2), SearchOutcome::Found);
        assert_eq!(state.search_message, None);

        state.search_message = Some(NOT_FOUND_MESSAGE.into());
        let all = ProductListQuery::default();
        assert_eq!(state.apply_search_result(&all, 0), SearchOutcome::NoSearch);
        assert_eq!(state.search_message, None);
    }
}
