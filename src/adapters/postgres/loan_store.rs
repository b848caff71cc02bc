use crate::domain::loan::{ActiveLoan, ClosedLoan, Loan, LoanCore};
use crate::domain::{Isbn, LoanId, MemberId};
use crate::ports::loan_store::{LoanStore as LoanStoreTrait, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Row, postgres::PgRow};

/// PostgreSQLの行データをLoanに変換する
///
/// `returned_on`がNULLならActive、そうでなければClosedとして復元する。
/// Closedなのに`penalty`がNULLの行は不正データとして扱う。
fn map_row_to_loan(row: &PgRow) -> Result<Loan> {
    let core = LoanCore {
        loan_id: LoanId::from_uuid(row.get("loan_id")),
        isbn: Isbn::new(row.get::<String, _>("isbn")),
        member_id: MemberId::new(row.get("member_id")),
        borrowed_on: row.get("borrowed_on"),
        due_on: row.get("due_on"),
    };

    let returned_on: Option<NaiveDate> = row.get("returned_on");
    let penalty: Option<f64> = row.get("penalty");

    match (returned_on, penalty) {
        (None, _) => Ok(Loan::Active(ActiveLoan { core })),
        (Some(returned_on), Some(penalty)) => Ok(Loan::Closed(ClosedLoan {
            core,
            returned_on,
            penalty,
        })),
        (Some(_), None) => Err(Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("loan {} is closed but has no penalty", core.loan_id.value()),
        )) as Box<dyn std::error::Error + Send + Sync>),
    }
}

/// LoanStoreのPostgreSQL実装
///
/// スキーマ側の部分ユニークインデックス（returned_on IS NULLの行のISBN）が
/// 「同じ書籍のActiveな貸出は最大1件」をストアレベルでも保証する。
pub struct LoanStore {
    pool: PgPool,
}

impl LoanStore {
    /// PostgreSQLコネクションプールから新しいLoanStoreを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LoanStoreTrait for LoanStore {
    async fn save(&self, loan: &ActiveLoan) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO loans (loan_id, isbn, member_id, borrowed_on, due_on, returned_on, penalty)
            VALUES ($1, $2, $3, $4, $5, NULL, NULL)
            "#,
        )
        .bind(loan.loan_id.value())
        .bind(loan.isbn.as_str())
        .bind(loan.member_id.value())
        .bind(loan.borrowed_on)
        .bind(loan.due_on)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, loan: &Loan) -> Result<()> {
        let (returned_on, penalty) = match loan {
            Loan::Active(_) => (None, None),
            Loan::Closed(closed) => (Some(closed.returned_on), Some(closed.penalty)),
        };

        sqlx::query(
            r#"
            UPDATE loans
            SET returned_on = $2,
                penalty = $3
            WHERE loan_id = $1
            "#,
        )
        .bind(loan.loan_id().value())
        .bind(returned_on)
        .bind(penalty)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Loan>> {
        let rows = sqlx::query(
            r#"
            SELECT loan_id, isbn, member_id, borrowed_on, due_on, returned_on, penalty
            FROM loans
            ORDER BY borrowed_on ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_loan).collect()
    }

    async fn count_active_for_member(&self, member_id: MemberId) -> Result<u32> {
        let row = sqlx::query(
            r#"
            SELECT COUNT(*) AS active_count
            FROM loans
            WHERE member_id = $1 AND returned_on IS NULL
            "#,
        )
        .bind(member_id.value())
        .fetch_one(&self.pool)
        .await?;

        let count: i64 = row.get("active_count");
        let count: u32 = count.try_into().map_err(|_| {
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("active loan count out of range: {}", count),
            )) as Box<dyn std::error::Error + Send + Sync>
        })?;

        Ok(count)
    }

    async fn find_active_by_isbn(&self, isbn: &Isbn) -> Result<Option<ActiveLoan>> {
        let row = sqlx::query(
            r#"
            SELECT loan_id, isbn, member_id, borrowed_on, due_on, returned_on, penalty
            FROM loans
            WHERE isbn = $1 AND returned_on IS NULL
            "#,
        )
        .bind(isbn.as_str())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            None => Ok(None),
            Some(row) => match map_row_to_loan(&row)? {
                Loan::Active(active) => Ok(Some(active)),
                Loan::Closed(_) => Ok(None),
            },
        }
    }
}
