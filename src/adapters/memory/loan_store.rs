use crate::domain::loan::{ActiveLoan, Loan};
use crate::domain::{Isbn, LoanId, MemberId};
use crate::ports::loan_store::{LoanStore as LoanStoreTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// LoanStoreのインメモリ実装
pub struct LoanStore {
    loans: Mutex<HashMap<LoanId, Loan>>,
}

impl LoanStore {
    pub fn new() -> Self {
        Self {
            loans: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for LoanStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LoanStoreTrait for LoanStore {
    async fn save(&self, loan: &ActiveLoan) -> Result<()> {
        self.loans
            .lock()
            .unwrap()
            .insert(loan.loan_id, Loan::Active(loan.clone()));
        Ok(())
    }

    async fn update(&self, loan: &Loan) -> Result<()> {
        self.loans.lock().unwrap().insert(loan.loan_id(), loan.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Loan>> {
        Ok(self.loans.lock().unwrap().values().cloned().collect())
    }

    async fn count_active_for_member(&self, member_id: MemberId) -> Result<u32> {
        let count = self
            .loans
            .lock()
            .unwrap()
            .values()
            .filter_map(Loan::as_active)
            .filter(|loan| loan.member_id == member_id)
            .count();
        Ok(count as u32)
    }

    async fn find_active_by_isbn(&self, isbn: &Isbn) -> Result<Option<ActiveLoan>> {
        Ok(self
            .loans
            .lock()
            .unwrap()
            .values()
            .filter_map(Loan::as_active)
            .find(|loan| &loan.isbn == isbn)
            .cloned())
    }
}
