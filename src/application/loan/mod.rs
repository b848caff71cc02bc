mod errors;
mod loan_service;

pub use errors::{LoanServiceError, Result};
pub use loan_service::{
    BookLocks, ServiceDependencies, borrow_book, list_overdue_loans, return_book,
};
