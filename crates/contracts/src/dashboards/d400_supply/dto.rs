use crate::shared::date::date_part;
use crate::shared::number::lenient_f64;
use crate::shared::validation::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Quantity received on one delivery date (`GET /supply-data`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyPoint {
    pub delivery_date: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_quantity: f64,
}

impl SupplyPoint {
    /// Axis label: the date part of `delivery_date`
    pub fn label(&self) -> &str {
        date_part(&self.delivery_date)
    }
}

/// Period selected for the supply chart, as `YYYY-MM-DD` strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplyQuery {
    pub start_date: String,
    pub end_date: String,
}

impl SupplyQuery {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let start = self.start_date.trim();
        let end = self.end_date.trim();
        if start.is_empty() || end.is_empty() {
            return Err(ValidationError::MissingPeriod);
        }
        let parse = |s: &str| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|_| ValidationError::InvalidDate(s.to_string()))
        };
        if parse(start)? > parse(end)? {
            return Err(ValidationError::InvertedPeriod);
        }
        Ok(())
    }

    pub fn to_query_string(&self) -> String {
        format!(
            "?startDate={}&endDate={}",
            urlencoding::encode(self.start_date.trim()),
            urlencoding::encode(self.end_date.trim())
        )
    }
}
