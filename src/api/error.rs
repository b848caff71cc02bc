use crate::application::catalog::CatalogError;
use crate::application::loan::LoanServiceError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを
/// 提供する。
#[derive(Debug)]
pub enum ApiError {
    Loan(LoanServiceError),
    Catalog(CatalogError),
}

impl From<LoanServiceError> for ApiError {
    fn from(err: LoanServiceError) -> Self {
        ApiError::Loan(err)
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError::Catalog(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::Loan(err) => match err {
                // 404 Not Found - リクエストされたリソースが存在しない
                LoanServiceError::LoanNotFound => (
                    StatusCode::NOT_FOUND,
                    "LOAN_NOT_FOUND",
                    "No active loan found for this book and member".to_string(),
                ),

                // 422 Unprocessable Entity - ビジネスルール違反
                LoanServiceError::MemberNotFound => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "MEMBER_NOT_FOUND",
                    "Member not found".to_string(),
                ),
                LoanServiceError::MemberInactive => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "MEMBER_INACTIVE",
                    "Member is inactive".to_string(),
                ),
                LoanServiceError::BookUnavailable => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "BOOK_UNAVAILABLE",
                    "Book is not available for loan".to_string(),
                ),
                LoanServiceError::LoanLimitExceeded => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "LOAN_LIMIT_EXCEEDED",
                    "Loan limit exceeded (max 3 books per member)".to_string(),
                ),

                // 500 Internal Server Error - プログラミングエラーの通知
                LoanServiceError::InvalidDateRange => {
                    tracing::error!("Invalid date range reached the penalty calculator");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INVALID_DATE_RANGE",
                        "An unexpected error occurred".to_string(),
                    )
                }

                // 500 Internal Server Error - ストア障害
                // 詳細はログに記録し、クライアントには一般的なメッセージのみを返す
                LoanServiceError::BookStoreError(ref e) => {
                    tracing::error!("Book store error: {}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "BOOK_STORE_ERROR",
                        "Storage error".to_string(),
                    )
                }
                LoanServiceError::MemberStoreError(ref e) => {
                    tracing::error!("Member store error: {}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "MEMBER_STORE_ERROR",
                        "Storage error".to_string(),
                    )
                }
                LoanServiceError::LoanStoreError(ref e) => {
                    tracing::error!("Loan store error: {}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "LOAN_STORE_ERROR",
                        "Storage error".to_string(),
                    )
                }
            },

            ApiError::Catalog(err) => match err {
                // 404 Not Found
                CatalogError::BookNotFound => (
                    StatusCode::NOT_FOUND,
                    "BOOK_NOT_FOUND",
                    "Book not found".to_string(),
                ),
                CatalogError::MemberNotFound => (
                    StatusCode::NOT_FOUND,
                    "MEMBER_NOT_FOUND",
                    "Member not found".to_string(),
                ),

                // 409 Conflict
                CatalogError::BookAlreadyExists => (
                    StatusCode::CONFLICT,
                    "BOOK_ALREADY_EXISTS",
                    "A book with this ISBN already exists".to_string(),
                ),
                CatalogError::BookOnLoan => (
                    StatusCode::CONFLICT,
                    "BOOK_ON_LOAN",
                    "Book is currently on loan and cannot be removed".to_string(),
                ),

                // 500 Internal Server Error - ストア障害
                CatalogError::BookStoreError(ref e) => {
                    tracing::error!("Book store error: {}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "BOOK_STORE_ERROR",
                        "Storage error".to_string(),
                    )
                }
                CatalogError::MemberStoreError(ref e) => {
                    tracing::error!("Member store error: {}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "MEMBER_STORE_ERROR",
                        "Storage error".to_string(),
                    )
                }
            },
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
