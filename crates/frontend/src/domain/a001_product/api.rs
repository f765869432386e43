use crate::domain::a001_product::ui::list::delete::DeleteRequest;
use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{api_url, read_json};
use contracts::domain::a001_product::aggregate::{Product, ProductDto, ProductId};
use contracts::domain::a001_product::query::ProductListQuery;
use contracts::domain::a001_product::response::{DeleteResponse, ImportResponse};
use contracts::domain::common::AggregateId;
use gloo_net::http::{Request, RequestBuilder};
use web_sys::{File, FormData};

const PRODUCTS: &str = "/products";
const MANUFACTURERS: &str = "/manufacturers";
const IMPORT_EXCEL: &str = "/import/excel";

/// Path of the product collection, or of one product when `id` is given
pub fn product_path(id: Option<ProductId>) -> String {
    match id {
        Some(id) => format!("{}/{}", PRODUCTS, id.as_string()),
        None => PRODUCTS.to_string(),
    }
}

pub fn list_path(query: &ProductListQuery) -> String {
    format!("{}{}", PRODUCTS, query.to_query_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Excel,
    Txt,
}

pub fn export_path(format: ExportFormat) -> &'static str {
    match format {
        ExportFormat::Excel => "/export/excel",
        ExportFormat::Txt => "/export/txt",
    }
}

pub fn export_url(format: ExportFormat) -> String {
    api_url(export_path(format))
}

/// `GET /products[?search=..|minPrice=..&..]`
pub async fn fetch_products(query: &ProductListQuery) -> Result<Vec<Product>, ApiError> {
    let url = api_url(&list_path(query));
    log::debug!("Loading products: {}", url);
    let response = Request::get(&url).send().await?;
    read_json(response).await
}

/// `GET /manufacturers`
pub async fn fetch_manufacturers() -> Result<Vec<String>, ApiError> {
    let response = Request::get(&api_url(MANUFACTURERS)).send().await?;
    read_json(response).await
}

fn build_form_data(dto: &ProductDto, image: Option<&File>) -> Result<FormData, ApiError> {
    let form_data = FormData::new().map_err(|e| ApiError::Browser(format!("{e:?}")))?;
    for (name, value) in dto.form_fields() {
        form_data
            .append_with_str(name, &value)
            .map_err(|e| ApiError::Browser(format!("{e:?}")))?;
    }
    if let Some(file) = image {
        form_data
            .append_with_blob("image", file)
            .map_err(|e| ApiError::Browser(format!("{e:?}")))?;
    }
    Ok(form_data)
}

async fn send_form(
    builder: RequestBuilder,
    dto: &ProductDto,
    image: Option<File>,
) -> Result<(), ApiError> {
    let form_data = build_form_data(dto, image.as_ref())?;
    let response = builder.body(form_data)?.send().await?;
    let saved: serde_json::Value = read_json(response).await?;
    log::info!("Product saved: {}", saved);
    Ok(())
}

/// `POST /products`, multipart so an image file can travel with the fields
pub async fn create_product(dto: &ProductDto, image: Option<File>) -> Result<(), ApiError> {
    send_form(Request::post(&api_url(&product_path(None))), dto, image).await
}

/// `PUT /products/{id}`
pub async fn update_product(
    id: ProductId,
    dto: &ProductDto,
    image: Option<File>,
) -> Result<(), ApiError> {
    send_form(Request::put(&api_url(&product_path(Some(id)))), dto, image).await
}

/// `DELETE /products/{id}` for a delete the user has confirmed
pub async fn delete_product(request: &DeleteRequest) -> Result<DeleteResponse, ApiError> {
    let response = Request::delete(&api_url(&request.path())).send().await?;
    read_json(response).await
}

/// `POST /import/excel` with the workbook under `file`
pub async fn import_excel(file: File) -> Result<ImportResponse, ApiError> {
    let form_data = FormData::new().map_err(|e| ApiError::Browser(format!("{e:?}")))?;
    form_data
        .append_with_blob("file", &file)
        .map_err(|e| ApiError::Browser(format!("{e:?}")))?;
    let response = Request::post(&api_url(IMPORT_EXCEL))
        .body(form_data)?
        .send()
        .await?;
    read_json(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_path() {
        assert_eq!(product_path(None), "/products");
        assert_eq!(product_path(Some(ProductId(7))), "/products/7");
    }

    #[test]
    fn test_list_path_without_filters() {
        assert_eq!(list_path(&ProductListQuery::default()), "/products");
        assert_eq!(
            list_path(&ProductListQuery::search("lamp")),
            "/products?search=lamp"
        );
    }

    #[test]
    fn test_export_paths() {
        assert_eq!(export_path(ExportFormat::Excel), "/export/excel");
        assert_eq!(export_path(ExportFormat::Txt), "/export/txt");
    }
}
