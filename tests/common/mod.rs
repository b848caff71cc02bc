use biblio_lending::adapters::memory::{MemoryBookStore, MemoryLoanStore, MemoryMemberStore};
use biblio_lending::application::loan::ServiceDependencies;
use biblio_lending::domain::{Book, Isbn, Member, NewMember};
use biblio_lending::ports::{BookStore, MemberStore};
use std::sync::Arc;

/// インメモリストアで構成したサービス依存関係を作成する
///
/// 各テストが独立したストアを持つため、テスト間の直列化は不要。
pub fn memory_deps() -> ServiceDependencies {
    ServiceDependencies::new(
        Arc::new(MemoryBookStore::new()),
        Arc::new(MemoryMemberStore::new()),
        Arc::new(MemoryLoanStore::new()),
    )
}

/// テスト用の書籍を登録する
pub async fn seed_book(deps: &ServiceDependencies, isbn: &str, title: &str) -> Book {
    let book = Book::new(Isbn::new(isbn), title, "Ahmed Sefrioui", 1954);
    deps.book_store.save(&book).await.unwrap();
    book
}

/// テスト用の会員を登録する
pub async fn seed_member(deps: &ServiceDependencies, active: bool) -> Member {
    let mut member = deps
        .member_store
        .save(NewMember {
            last_name: "Alaoui".to_string(),
            first_name: "Yasmine".to_string(),
            email: "yasmine@example.com".to_string(),
        })
        .await
        .unwrap();

    if !active {
        member.active = false;
        deps.member_store.update(&member).await.unwrap();
    }

    member
}
