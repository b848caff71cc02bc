use serde::{Deserialize, Serialize};

use super::Isbn;

/// 書籍エンティティ
///
/// 不変条件：`available == false` ⇔ この書籍を参照するActiveな貸出が
/// ちょうど1件存在する。availableの反転は貸出ライフサイクルエンジンのみが
/// 行い、他のコンポーネントはこのフィールドを変更しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub isbn: Isbn,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub available: bool,
}

impl Book {
    /// 新しい書籍を作成する（初期状態は貸出可能）
    pub fn new(
        isbn: Isbn,
        title: impl Into<String>,
        author: impl Into<String>,
        publication_year: i32,
    ) -> Self {
        Self {
            isbn,
            title: title.into(),
            author: author.into(),
            publication_year,
            available: true,
        }
    }

    /// 貸出可能か
    pub fn can_be_borrowed(&self) -> bool {
        self.available
    }

    /// 貸出により貸出不可にする
    pub fn check_out(&mut self) {
        self.available = false;
    }

    /// 返却により貸出可能に戻す
    pub fn check_in(&mut self) {
        self.available = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_book_is_available() {
        let book = Book::new(Isbn::new("978-1"), "Le Petit Prince", "Saint-Exupéry", 1943);
        assert!(book.available);
        assert!(book.can_be_borrowed());
    }

    #[test]
    fn test_check_out_and_check_in() {
        let mut book = Book::new(Isbn::new("978-1"), "Le Petit Prince", "Saint-Exupéry", 1943);

        book.check_out();
        assert!(!book.can_be_borrowed());

        book.check_in();
        assert!(book.can_be_borrowed());
    }
}
