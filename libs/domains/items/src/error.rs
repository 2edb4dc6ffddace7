use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemError {
    /// Carries the id exactly as requested, which may not be numeric.
    #[error("Item {0} not found")]
    NotFound(String),

    #[error("Failed to read items document: {0}")]
    StoreRead(String),

    #[error("Failed to write items document: {0}")]
    StoreWrite(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound(_) => AppError::NotFound(err.to_string()),
            ItemError::StoreRead(msg) => AppError::StoreRead(msg),
            ItemError::StoreWrite(msg) => AppError::StoreWrite(msg),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_maps_to_404() {
        let err: AppError = ItemError::NotFound("abc".to_string()).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Not Found: Item abc not found");
    }

    #[test]
    fn test_store_errors_map_to_500() {
        let read: AppError = ItemError::StoreRead("eof".to_string()).into();
        let write: AppError = ItemError::StoreWrite("read-only fs".to_string()).into();
        assert_eq!(read.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(write.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
