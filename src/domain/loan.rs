use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::errors::PenaltyError;
use super::penalty::compute_penalty;
use super::{Isbn, LoanId, MemberId};

/// 貸出期間（日数）
pub const LOAN_PERIOD_DAYS: i64 = 15;

// ============================================================================
// 型安全な状態パターン
// ============================================================================

/// Loan集約の共通フィールド
///
/// Active、Closedの両状態で共有されるコアデータ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanCore {
    // 識別子
    pub loan_id: LoanId,

    // 他の集約への参照（IDのみ）
    pub isbn: Isbn,
    pub member_id: MemberId,

    // 貸出管理の責務
    pub borrowed_on: NaiveDate,
    pub due_on: NaiveDate,
}

/// 貸出中状態
///
/// ビジネスルール：
/// - 返却日と延滞料金は未確定
/// - 返却によってのみClosedへ遷移する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveLoan {
    #[serde(flatten)]
    pub core: LoanCore,
}

impl std::ops::Deref for ActiveLoan {
    type Target = LoanCore;

    fn deref(&self) -> &Self::Target {
        &self.core
    }
}

/// 返却済み状態
///
/// ビジネスルール：
/// - 返却日と延滞料金が必須（型で保証）
/// - 終端状態。再オープンはできない
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosedLoan {
    #[serde(flatten)]
    pub core: LoanCore,
    pub returned_on: NaiveDate,
    pub penalty: f64,
}

impl std::ops::Deref for ClosedLoan {
    type Target = LoanCore;

    fn deref(&self) -> &Self::Target {
        &self.core
    }
}

/// Loan集約の統合型
///
/// 状態遷移は `Active -> Closed` の一方向のみ。
/// 不正な状態（返却日のないClosedなど）を型システムで排除する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Loan {
    Active(ActiveLoan),
    Closed(ClosedLoan),
}

impl Loan {
    pub fn loan_id(&self) -> LoanId {
        match self {
            Loan::Active(active) => active.loan_id,
            Loan::Closed(closed) => closed.loan_id,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Loan::Active(_))
    }

    pub fn as_active(&self) -> Option<&ActiveLoan> {
        match self {
            Loan::Active(active) => Some(active),
            Loan::Closed(_) => None,
        }
    }
}

// ============================================================================
// 純粋関数
// ============================================================================

/// 純粋関数：新しい貸出を開始する
///
/// ビジネスルール：
/// - 返却予定日は貸出日 + 15日
/// - 状態はActive
///
/// 副作用なし。永続化と書籍のavailable反転は呼び出し側の責務。
pub fn open_loan(isbn: Isbn, member_id: MemberId, borrowed_on: NaiveDate) -> ActiveLoan {
    let due_on = borrowed_on + Duration::days(LOAN_PERIOD_DAYS);

    ActiveLoan {
        core: LoanCore {
            loan_id: LoanId::new(),
            isbn,
            member_id,
            borrowed_on,
            due_on,
        },
    }
}

/// 純粋関数：貸出を返却して閉じる
///
/// ビジネスルール：
/// - 延滞していても返却は受け付ける
/// - 延滞料金は返却予定日と返却日の差から計算し、Closedに記録する
///
/// `ActiveLoan`を消費するため、同じ貸出を二度閉じることはできない（型で保証）。
pub fn close_loan(loan: ActiveLoan, returned_on: NaiveDate) -> Result<ClosedLoan, PenaltyError> {
    let penalty = compute_penalty(loan.due_on, loan.borrowed_on, returned_on)?;

    Ok(ClosedLoan {
        core: loan.core,
        returned_on,
        penalty,
    })
}

/// 純粋関数：延滞判定
///
/// Activeな貸出の返却予定日が`today`より厳密に前の場合のみ延滞。
/// 返却予定日当日は延滞ではない。
pub fn is_overdue(loan: &ActiveLoan, today: NaiveDate) -> bool {
    loan.due_on < today
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_open_loan_sets_due_date_fifteen_days_out() {
        let borrowed_on = date(2026, 3, 1);
        let loan = open_loan(Isbn::new("978-1"), MemberId::new(1), borrowed_on);

        assert_eq!(loan.borrowed_on, borrowed_on);
        assert_eq!(loan.due_on, date(2026, 3, 16));
        assert_eq!(loan.isbn, Isbn::new("978-1"));
        assert_eq!(loan.member_id, MemberId::new(1));
    }

    #[test]
    fn test_close_loan_on_time_has_zero_penalty() {
        let loan = open_loan(Isbn::new("978-1"), MemberId::new(1), date(2026, 3, 1));
        let due_on = loan.due_on;

        let closed = close_loan(loan, due_on).unwrap();

        assert_eq!(closed.returned_on, due_on);
        assert_eq!(closed.penalty, 0.0);
    }

    #[test]
    fn test_close_loan_five_days_late_records_penalty() {
        // 20日後の返却は5日遅延、2.0/日 → 10.0
        let loan = open_loan(Isbn::new("978-1"), MemberId::new(1), date(2026, 3, 1));

        let closed = close_loan(loan, date(2026, 3, 21)).unwrap();

        assert_eq!(closed.penalty, 10.0);
    }

    #[test]
    fn test_close_loan_fails_when_returned_before_borrowed() {
        let loan = open_loan(Isbn::new("978-1"), MemberId::new(1), date(2026, 3, 10));

        let result = close_loan(loan, date(2026, 3, 5));

        assert_eq!(result.unwrap_err(), PenaltyError::InvalidDateRange);
    }

    #[test]
    fn test_is_overdue_false_before_due_date() {
        let loan = open_loan(Isbn::new("978-1"), MemberId::new(1), date(2026, 3, 1));

        assert!(!is_overdue(&loan, date(2026, 3, 10)));
    }

    #[test]
    fn test_is_overdue_false_exactly_on_due_date() {
        let loan = open_loan(Isbn::new("978-1"), MemberId::new(1), date(2026, 3, 1));

        assert!(!is_overdue(&loan, loan.due_on));
    }

    #[test]
    fn test_is_overdue_true_after_due_date() {
        let loan = open_loan(Isbn::new("978-1"), MemberId::new(1), date(2026, 3, 1));

        assert!(is_overdue(&loan, date(2026, 3, 17)));
    }

    #[test]
    fn test_loan_enum_accessors() {
        let active = open_loan(Isbn::new("978-1"), MemberId::new(1), date(2026, 3, 1));
        let loan_id = active.loan_id;

        let loan = Loan::Active(active.clone());
        assert!(loan.is_active());
        assert_eq!(loan.loan_id(), loan_id);
        assert!(loan.as_active().is_some());

        let closed = close_loan(active, date(2026, 3, 16)).unwrap();
        let loan = Loan::Closed(closed);
        assert!(!loan.is_active());
        assert_eq!(loan.loan_id(), loan_id);
        assert!(loan.as_active().is_none());
    }
}
