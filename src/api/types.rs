use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::commands::{BorrowBook, ReturnBook};
use crate::domain::loan::{ActiveLoan, ClosedLoan, Loan};
use crate::domain::{Book, Isbn, Member, MemberId, NewMember};

// ============================================================================
// 貸出
// ============================================================================

/// 貸出リクエスト（POST /loans）
#[derive(Debug, Deserialize)]
pub struct BorrowBookRequest {
    pub isbn: String,
    pub member_id: i64,
}

impl BorrowBookRequest {
    pub fn to_command(&self) -> BorrowBook {
        BorrowBook {
            isbn: Isbn::new(self.isbn.clone()),
            member_id: MemberId::new(self.member_id),
            borrowed_on: Utc::now().date_naive(),
        }
    }
}

/// 返却リクエスト（POST /loans/return）
#[derive(Debug, Deserialize)]
pub struct ReturnBookRequest {
    pub isbn: String,
    pub member_id: i64,
}

impl ReturnBookRequest {
    pub fn to_command(&self) -> ReturnBook {
        ReturnBook {
            isbn: Isbn::new(self.isbn.clone()),
            member_id: MemberId::new(self.member_id),
            returned_on: Utc::now().date_naive(),
        }
    }
}

/// 貸出レスポンス
#[derive(Debug, Serialize)]
pub struct LoanResponse {
    pub loan_id: Uuid,
    pub isbn: String,
    pub member_id: i64,
    pub borrowed_on: NaiveDate,
    pub due_on: NaiveDate,
    pub returned_on: Option<NaiveDate>,
    pub penalty: Option<f64>,
    pub status: String,
}

impl From<&ActiveLoan> for LoanResponse {
    fn from(loan: &ActiveLoan) -> Self {
        Self {
            loan_id: loan.loan_id.value(),
            isbn: loan.isbn.as_str().to_string(),
            member_id: loan.member_id.value(),
            borrowed_on: loan.borrowed_on,
            due_on: loan.due_on,
            returned_on: None,
            penalty: None,
            status: "active".to_string(),
        }
    }
}

impl From<&ClosedLoan> for LoanResponse {
    fn from(loan: &ClosedLoan) -> Self {
        Self {
            loan_id: loan.loan_id.value(),
            isbn: loan.isbn.as_str().to_string(),
            member_id: loan.member_id.value(),
            borrowed_on: loan.borrowed_on,
            due_on: loan.due_on,
            returned_on: Some(loan.returned_on),
            penalty: Some(loan.penalty),
            status: "closed".to_string(),
        }
    }
}

impl From<&Loan> for LoanResponse {
    fn from(loan: &Loan) -> Self {
        match loan {
            Loan::Active(active) => active.into(),
            Loan::Closed(closed) => closed.into(),
        }
    }
}

// ============================================================================
// 書籍
// ============================================================================

/// 書籍登録リクエスト（POST /books）
#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
}

impl CreateBookRequest {
    pub fn to_book(&self) -> Book {
        Book::new(
            Isbn::new(self.isbn.clone()),
            self.title.clone(),
            self.author.clone(),
            self.publication_year,
        )
    }
}

/// 書籍一覧のクエリパラメータ
#[derive(Debug, Deserialize)]
pub struct ListBooksQuery {
    /// trueの場合は貸出可能な書籍のみを返す
    pub available: Option<bool>,
}

/// 書籍レスポンス
#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub available: bool,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            isbn: book.isbn.into_inner(),
            title: book.title,
            author: book.author,
            publication_year: book.publication_year,
            available: book.available,
        }
    }
}

// ============================================================================
// 会員
// ============================================================================

/// 会員登録リクエスト（POST /members）
#[derive(Debug, Deserialize)]
pub struct RegisterMemberRequest {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
}

impl RegisterMemberRequest {
    pub fn to_new_member(&self) -> NewMember {
        NewMember {
            last_name: self.last_name.clone(),
            first_name: self.first_name.clone(),
            email: self.email.clone(),
        }
    }
}

/// 会員の有効化・無効化リクエスト（PATCH /members/:id/active）
#[derive(Debug, Deserialize)]
pub struct SetMemberActiveRequest {
    pub active: bool,
}

/// 会員レスポンス
#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub member_id: i64,
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub active: bool,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            member_id: member.member_id.value(),
            last_name: member.last_name,
            first_name: member.first_name,
            email: member.email,
            active: member.active,
        }
    }
}

// ============================================================================
// エラー
// ============================================================================

/// エラーレスポンス
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
