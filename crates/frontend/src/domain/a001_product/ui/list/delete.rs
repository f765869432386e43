//! Delete flow of the product list: the confirmation gate and the mapping
//! of the server's answer to what the user is told.

use crate::domain::a001_product::api;
use crate::shared::api_error::ApiError;
use contracts::domain::a001_product::aggregate::ProductId;
use contracts::domain::a001_product::response::DeleteResponse;

pub const DELETE_CONFIRM: &str = "Ви впевнені, що хочете видалити цей товар?";
pub const DELETE_OK: &str = "Товар успішно видалено!";
pub const DELETE_FAILED: &str = "Помилка видалення товару!";

/// A delete the user has confirmed. Only [`confirm_delete`] creates one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteRequest {
    id: ProductId,
}

impl DeleteRequest {
    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn path(&self) -> String {
        api::product_path(Some(self.id))
    }
}

/// Ask once; `None` when the user declines.
pub fn confirm_delete(
    id: ProductId,
    confirm: impl FnOnce(&str) -> bool,
) -> Option<DeleteRequest> {
    confirm(DELETE_CONFIRM).then_some(DeleteRequest { id })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteNotice {
    /// Acknowledged: tell the user and reload
    Deleted,
    Failed,
    /// Network failure, only logged
    Silent,
}

pub fn delete_notice(result: &Result<DeleteResponse, ApiError>) -> DeleteNotice {
    match result {
        Ok(response) if response.deleted => DeleteNotice::Deleted,
        Ok(_) => DeleteNotice::Failed,
        Err(e) if e.is_network() => DeleteNotice::Silent,
        Err(_) => DeleteNotice::Failed,
    }
}
