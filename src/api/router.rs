use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, create_book, create_loan, delete_book, list_books, list_members, list_overdue,
    register_member, return_loan, set_member_active,
};

/// Creates the API router with all lending endpoints
///
/// Loan endpoints:
/// - POST /loans - Borrow a book
/// - POST /loans/return - Return a book (identified by ISBN + member id)
/// - GET /loans/overdue - List overdue loans
///
/// Catalog endpoints:
/// - POST /books, GET /books (?available=true), DELETE /books/:isbn
/// - POST /members, GET /members, PATCH /members/:id/active
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Loan lifecycle endpoints
        .route("/loans", post(create_loan))
        .route("/loans/return", post(return_loan))
        .route("/loans/overdue", get(list_overdue))
        // Catalog endpoints
        .route("/books", post(create_book).get(list_books))
        .route("/books/:isbn", delete(delete_book))
        .route("/members", post(register_member).get(list_members))
        .route("/members/:id/active", patch(set_member_active))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
