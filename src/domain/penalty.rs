use chrono::NaiveDate;

use super::errors::PenaltyError;

/// 延滞料金：遅延1日あたり2.0（固定ポリシー）
pub const PENALTY_RATE_PER_DAY: f64 = 2.0;

/// 純粋関数：延滞料金を計算する
///
/// ビジネスルール：
/// - `returned_on <= due_on` の場合は 0.0
/// - それ以降は遅延日数（整数日） × `PENALTY_RATE_PER_DAY`
///
/// 遅延判定は返却日と返却予定日（`due_on`）の比較で行う。
/// 貸出日に固定日数を足した値との比較ではない。
///
/// # エラー
/// `returned_on`が`borrowed_on`より前、または`due_on`が`borrowed_on`より
/// 前の場合は`PenaltyError::InvalidDateRange`を返す。
///
/// 副作用なし。I/Oなし。
pub fn compute_penalty(
    due_on: NaiveDate,
    borrowed_on: NaiveDate,
    returned_on: NaiveDate,
) -> Result<f64, PenaltyError> {
    if returned_on < borrowed_on || due_on < borrowed_on {
        return Err(PenaltyError::InvalidDateRange);
    }

    if returned_on <= due_on {
        return Ok(0.0);
    }

    let late_days = (returned_on - due_on).num_days();
    Ok(late_days as f64 * PENALTY_RATE_PER_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_penalty_is_zero_before_due_date() {
        let borrowed = date(2026, 1, 1);
        let due = date(2026, 1, 16);
        let returned = date(2026, 1, 10);

        assert_eq!(compute_penalty(due, borrowed, returned).unwrap(), 0.0);
    }

    #[test]
    fn test_penalty_is_zero_exactly_on_due_date() {
        let borrowed = date(2026, 1, 1);
        let due = date(2026, 1, 16);

        assert_eq!(compute_penalty(due, borrowed, due).unwrap(), 0.0);
    }

    #[test]
    fn test_penalty_five_days_late_at_rate_two_is_ten() {
        // 貸出から20日後に返却（5日遅延）、2.0/日 → 10.0
        let borrowed = date(2026, 1, 1);
        let due = date(2026, 1, 16);
        let returned = date(2026, 1, 21);

        assert_eq!(compute_penalty(due, borrowed, returned).unwrap(), 10.0);
    }

    #[test]
    fn test_penalty_one_day_late() {
        let borrowed = date(2026, 1, 1);
        let due = date(2026, 1, 16);
        let returned = date(2026, 1, 17);

        assert_eq!(
            compute_penalty(due, borrowed, returned).unwrap(),
            PENALTY_RATE_PER_DAY
        );
    }

    #[test]
    fn test_penalty_strictly_increasing_after_due_date() {
        let borrowed = date(2026, 1, 1);
        let due = date(2026, 1, 16);

        let mut previous = 0.0;
        for late in 1..=30 {
            let returned = due + Duration::days(late);
            let penalty = compute_penalty(due, borrowed, returned).unwrap();
            assert!(penalty > previous);
            previous = penalty;
        }
    }

    #[test]
    fn test_penalty_fails_when_returned_before_borrowed() {
        let borrowed = date(2026, 1, 10);
        let due = date(2026, 1, 25);
        let returned = date(2026, 1, 5);

        assert_eq!(
            compute_penalty(due, borrowed, returned),
            Err(PenaltyError::InvalidDateRange)
        );
    }

    #[test]
    fn test_penalty_fails_when_due_before_borrowed() {
        let borrowed = date(2026, 1, 10);
        let due = date(2026, 1, 5);
        let returned = date(2026, 1, 20);

        assert_eq!(
            compute_penalty(due, borrowed, returned),
            Err(PenaltyError::InvalidDateRange)
        );
    }
}
