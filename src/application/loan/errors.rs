use thiserror::Error;

use crate::domain::errors::{EligibilityError, PenaltyError};

/// 貸出ライフサイクルエンジンのエラー
///
/// ビジネス上の失敗は例外ではなく型付きの値として呼び出し側に返す。
/// エンジン内部でログ出力や握りつぶしは行わない。
#[derive(Debug, Error)]
pub enum LoanServiceError {
    /// 会員が存在しない（無効化とは別条件）
    #[error("Member not found")]
    MemberNotFound,

    /// 会員が無効化されている
    #[error("Member is inactive")]
    MemberInactive,

    /// 書籍が存在しない、または貸出中
    #[error("Book is not available for loan")]
    BookUnavailable,

    /// 貸出上限（3冊）に達している
    #[error("Loan limit exceeded (max 3 books per member)")]
    LoanLimitExceeded,

    /// 該当するActiveな貸出が見つからない
    #[error("No active loan found for this book and member")]
    LoanNotFound,

    /// 日付範囲が不正（正しい呼び出し側からは到達しない）
    #[error("Invalid date range")]
    InvalidDateRange,

    /// BookStoreのエラー
    #[error("Book store error")]
    BookStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// MemberStoreのエラー
    #[error("Member store error")]
    MemberStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// LoanStoreのエラー
    #[error("Loan store error")]
    LoanStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<EligibilityError> for LoanServiceError {
    fn from(err: EligibilityError) -> Self {
        match err {
            EligibilityError::MemberNotFound => LoanServiceError::MemberNotFound,
            EligibilityError::MemberInactive => LoanServiceError::MemberInactive,
            EligibilityError::BookUnavailable => LoanServiceError::BookUnavailable,
            EligibilityError::LoanLimitExceeded => LoanServiceError::LoanLimitExceeded,
        }
    }
}

impl From<PenaltyError> for LoanServiceError {
    fn from(err: PenaltyError) -> Self {
        match err {
            PenaltyError::InvalidDateRange => LoanServiceError::InvalidDateRange,
        }
    }
}

/// 貸出アプリケーション層のResult型
pub type Result<T> = std::result::Result<T, LoanServiceError>;
