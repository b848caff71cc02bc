use crate::domain::loan::{ActiveLoan, Loan};
use crate::domain::{Isbn, MemberId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Loan repository port.
///
/// Loans are created in the active state and later updated to closed;
/// they are never deleted.
#[async_trait]
pub trait LoanStore: Send + Sync {
    /// Persist a newly opened loan.
    async fn save(&self, loan: &ActiveLoan) -> Result<()>;

    /// Persist the current state of an existing loan (used when closing).
    async fn update(&self, loan: &Loan) -> Result<()>;

    /// All loans, active and closed.
    async fn find_all(&self) -> Result<Vec<Loan>>;

    /// Number of active loans held by a member.
    ///
    /// Used to enforce the per-member loan limit.
    async fn count_active_for_member(&self, member_id: MemberId) -> Result<u32>;

    /// The active loan referencing a book, if any.
    ///
    /// At most one active loan may reference a given ISBN.
    async fn find_active_by_isbn(&self, isbn: &Isbn) -> Result<Option<ActiveLoan>>;
}
