use crate::application::catalog;
use crate::application::loan::{
    ServiceDependencies, borrow_book as execute_borrow_book, list_overdue_loans,
    return_book as execute_return_book,
};
use crate::domain::{Isbn, MemberId};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::error::ApiError;
use super::types::{
    BookResponse, BorrowBookRequest, CreateBookRequest, ListBooksQuery, LoanResponse,
    MemberResponse, RegisterMemberRequest, ReturnBookRequest, SetMemberActiveRequest,
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// 貸出ハンドラー
// ============================================================================

/// POST /loans - 書籍を貸し出す
///
/// 強制されるビジネスルール:
/// - 会員が存在し、有効であること
/// - 書籍が存在し、貸出可能であること
/// - 会員の貸出冊数が上限（3冊）未満であること
pub async fn create_loan(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BorrowBookRequest>,
) -> Result<(StatusCode, Json<LoanResponse>), ApiError> {
    let cmd = req.to_command();

    let loan = execute_borrow_book(&state.service_deps, cmd).await?;

    Ok((StatusCode::CREATED, Json(LoanResponse::from(&loan))))
}

/// POST /loans/return - 書籍を返却する
///
/// 返却は書籍のISBNと会員IDで特定する。計算済みの延滞料金を含む
/// Closedな貸出を返す。
pub async fn return_loan(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReturnBookRequest>,
) -> Result<(StatusCode, Json<LoanResponse>), ApiError> {
    let cmd = req.to_command();

    let loan = execute_return_book(&state.service_deps, cmd).await?;

    Ok((StatusCode::OK, Json(LoanResponse::from(&loan))))
}

/// GET /loans/overdue - 延滞中の貸出を一覧する
///
/// 今日の日付を基準に、返却予定日を過ぎたActiveな貸出のみを返す。
pub async fn list_overdue(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LoanResponse>>, ApiError> {
    let today = chrono::Utc::now().date_naive();

    let loans = list_overdue_loans(&state.service_deps, today).await?;

    Ok(Json(loans.iter().map(LoanResponse::from).collect()))
}

// ============================================================================
// 書籍ハンドラー
// ============================================================================

/// POST /books - 書籍をカタログに登録する
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateBookRequest>,
) -> Result<(StatusCode, Json<BookResponse>), ApiError> {
    let book = catalog::add_book(&state.service_deps, req.to_book()).await?;

    Ok((StatusCode::CREATED, Json(BookResponse::from(book))))
}

/// GET /books - 書籍を一覧する
///
/// クエリパラメータ `available=true` で貸出可能な書籍のみに絞り込める。
pub async fn list_books(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListBooksQuery>,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let books = if query.available.unwrap_or(false) {
        catalog::list_available_books(&state.service_deps).await?
    } else {
        catalog::list_books(&state.service_deps).await?
    };

    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// DELETE /books/:isbn - 書籍をカタログから削除する
///
/// 貸出中の書籍は削除できない（409）。
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(isbn): Path<String>,
) -> Result<StatusCode, ApiError> {
    catalog::remove_book(&state.service_deps, &Isbn::new(isbn)).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// 会員ハンドラー
// ============================================================================

/// POST /members - 会員を登録する
pub async fn register_member(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterMemberRequest>,
) -> Result<(StatusCode, Json<MemberResponse>), ApiError> {
    let member = catalog::register_member(&state.service_deps, req.to_new_member()).await?;

    Ok((StatusCode::CREATED, Json(MemberResponse::from(member))))
}

/// GET /members - 会員を一覧する
pub async fn list_members(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MemberResponse>>, ApiError> {
    let members = catalog::list_members(&state.service_deps).await?;

    Ok(Json(
        members.into_iter().map(MemberResponse::from).collect(),
    ))
}

/// PATCH /members/:id/active - 会員を有効化・無効化する
///
/// 無効化しても既存の貸出は返却可能なまま残る。
pub async fn set_member_active(
    State(state): State<Arc<AppState>>,
    Path(member_id): Path<i64>,
    Json(req): Json<SetMemberActiveRequest>,
) -> Result<Json<MemberResponse>, ApiError> {
    let member =
        catalog::set_member_active(&state.service_deps, MemberId::new(member_id), req.active)
            .await?;

    Ok(Json(MemberResponse::from(member)))
}
