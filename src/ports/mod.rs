pub mod book_store;
pub mod loan_store;
pub mod member_store;

pub use book_store::BookStore;
pub use loan_store::LoanStore;
pub use member_store::MemberStore;
