pub mod book_store;
pub mod loan_store;
pub mod member_store;

// パブリックに型を再エクスポート
pub use book_store::BookStore as PostgresBookStore;
pub use loan_store::LoanStore as PostgresLoanStore;
pub use member_store::MemberStore as PostgresMemberStore;
