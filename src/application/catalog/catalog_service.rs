use crate::application::loan::ServiceDependencies;
use crate::domain::{Book, Isbn, Member, MemberId, NewMember};

use super::errors::{CatalogError, Result};

/// 書籍をカタログに登録する
///
/// 同じISBNの書籍が既に存在する場合は拒否する。
/// ISBNやタイトルの形式バリデーションはここでは行わない（入力層の責務）。
pub async fn add_book(deps: &ServiceDependencies, book: Book) -> Result<Book> {
    let existing = deps
        .book_store
        .find_by_isbn(&book.isbn)
        .await
        .map_err(CatalogError::BookStoreError)?;

    if existing.is_some() {
        return Err(CatalogError::BookAlreadyExists);
    }

    deps.book_store
        .save(&book)
        .await
        .map_err(CatalogError::BookStoreError)?;

    Ok(book)
}

/// 全書籍を一覧する
pub async fn list_books(deps: &ServiceDependencies) -> Result<Vec<Book>> {
    deps.book_store
        .find_all()
        .await
        .map_err(CatalogError::BookStoreError)
}

/// 貸出可能な書籍を一覧する
pub async fn list_available_books(deps: &ServiceDependencies) -> Result<Vec<Book>> {
    deps.book_store
        .find_available()
        .await
        .map_err(CatalogError::BookStoreError)
}

/// 書籍をカタログから削除する
///
/// 貸出中の書籍は削除できない。削除すると書籍と貸出の不変条件が壊れるため。
pub async fn remove_book(deps: &ServiceDependencies, isbn: &Isbn) -> Result<()> {
    let book = deps
        .book_store
        .find_by_isbn(isbn)
        .await
        .map_err(CatalogError::BookStoreError)?
        .ok_or(CatalogError::BookNotFound)?;

    if !book.available {
        return Err(CatalogError::BookOnLoan);
    }

    deps.book_store
        .delete(isbn)
        .await
        .map_err(CatalogError::BookStoreError)
}

/// 会員を登録する
///
/// IDは会員ストアが採番する。
pub async fn register_member(deps: &ServiceDependencies, member: NewMember) -> Result<Member> {
    deps.member_store
        .save(member)
        .await
        .map_err(CatalogError::MemberStoreError)
}

/// 全会員を一覧する
pub async fn list_members(deps: &ServiceDependencies) -> Result<Vec<Member>> {
    deps.member_store
        .find_all()
        .await
        .map_err(CatalogError::MemberStoreError)
}

/// 会員を有効化・無効化する
///
/// 無効化しても既存の貸出は有効なまま残り、返却も受け付ける。
pub async fn set_member_active(
    deps: &ServiceDependencies,
    member_id: MemberId,
    active: bool,
) -> Result<Member> {
    let mut member = deps
        .member_store
        .find_by_id(member_id)
        .await
        .map_err(CatalogError::MemberStoreError)?
        .ok_or(CatalogError::MemberNotFound)?;

    member.active = active;

    deps.member_store
        .update(&member)
        .await
        .map_err(CatalogError::MemberStoreError)?;

    Ok(member)
}
