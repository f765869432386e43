use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{api_url, read_json};
use contracts::dashboards::d400_supply::{SupplyPoint, SupplyQuery};
use gloo_net::http::Request;

const SUPPLY_DATA: &str = "/supply-data";

pub fn supply_path(query: &SupplyQuery) -> String {
    format!("{}{}", SUPPLY_DATA, query.to_query_string())
}

/// Supply totals per delivery date for the selected period
pub async fn get_supply_data(query: &SupplyQuery) -> Result<Vec<SupplyPoint>, ApiError> {
    let response = Request::get(&api_url(&supply_path(query))).send().await?;
    read_json(response).await
}
