use thiserror::Error;

/// カタログ・会員管理のエラー
#[derive(Debug, Error)]
pub enum CatalogError {
    /// 同じISBNの書籍が既に登録されている
    #[error("A book with this ISBN already exists")]
    BookAlreadyExists,

    /// 書籍が存在しない
    #[error("Book not found")]
    BookNotFound,

    /// 書籍が貸出中のため削除できない
    #[error("Book is currently on loan")]
    BookOnLoan,

    /// 会員が存在しない
    #[error("Member not found")]
    MemberNotFound,

    /// BookStoreのエラー
    #[error("Book store error")]
    BookStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// MemberStoreのエラー
    #[error("Member store error")]
    MemberStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// カタログ管理のResult型
pub type Result<T> = std::result::Result<T, CatalogError>;
