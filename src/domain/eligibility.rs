use super::errors::EligibilityError;
use super::{Book, Member};

/// 会員1人あたりの最大貸出冊数
///
/// 上限判定は`active_loan_count >= MAX_ACTIVE_LOANS`。
/// 3冊を貸出中の会員は4冊目を借りられない。
pub const MAX_ACTIVE_LOANS: u32 = 3;

/// 純粋関数：貸出の適格性を判定する
///
/// チェック順序：
/// 1. 会員が存在すること（不存在は`MemberNotFound`。無効とは区別する）
/// 2. 会員が有効であること
/// 3. 書籍が存在し、貸出可能であること
/// 4. 会員のActiveな貸出冊数が上限未満であること
///
/// 副作用なし。貸出冊数は呼び出し側がLoanStoreから取得して渡す。
pub fn check_eligibility(
    member: Option<&Member>,
    active_loan_count: u32,
    book: Option<&Book>,
) -> Result<(), EligibilityError> {
    let member = member.ok_or(EligibilityError::MemberNotFound)?;

    if !member.active {
        return Err(EligibilityError::MemberInactive);
    }

    match book {
        None => return Err(EligibilityError::BookUnavailable),
        Some(book) if !book.can_be_borrowed() => return Err(EligibilityError::BookUnavailable),
        Some(_) => {}
    }

    if active_loan_count >= MAX_ACTIVE_LOANS {
        return Err(EligibilityError::LoanLimitExceeded);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Isbn, MemberId};

    fn member(active: bool) -> Member {
        Member {
            member_id: MemberId::new(1),
            last_name: "Alaoui".to_string(),
            first_name: "Yasmine".to_string(),
            email: "yasmine@example.com".to_string(),
            active,
        }
    }

    fn book(available: bool) -> Book {
        Book {
            isbn: Isbn::new("978-1"),
            title: "L'Étranger".to_string(),
            author: "Camus".to_string(),
            publication_year: 1942,
            available,
        }
    }

    #[test]
    fn test_eligible_member_and_available_book() {
        let member = member(true);
        let book = book(true);

        assert!(check_eligibility(Some(&member), 0, Some(&book)).is_ok());
    }

    #[test]
    fn test_missing_member_is_not_found_not_inactive() {
        let book = book(true);

        assert_eq!(
            check_eligibility(None, 0, Some(&book)),
            Err(EligibilityError::MemberNotFound)
        );
    }

    #[test]
    fn test_inactive_member_is_refused() {
        let member = member(false);
        let book = book(true);

        assert_eq!(
            check_eligibility(Some(&member), 0, Some(&book)),
            Err(EligibilityError::MemberInactive)
        );
    }

    #[test]
    fn test_missing_book_is_unavailable() {
        let member = member(true);

        assert_eq!(
            check_eligibility(Some(&member), 0, None),
            Err(EligibilityError::BookUnavailable)
        );
    }

    #[test]
    fn test_checked_out_book_is_unavailable() {
        let member = member(true);
        let book = book(false);

        assert_eq!(
            check_eligibility(Some(&member), 0, Some(&book)),
            Err(EligibilityError::BookUnavailable)
        );
    }

    #[test]
    fn test_member_at_limit_is_refused() {
        let member = member(true);
        let book = book(true);

        assert_eq!(
            check_eligibility(Some(&member), MAX_ACTIVE_LOANS, Some(&book)),
            Err(EligibilityError::LoanLimitExceeded)
        );
    }

    #[test]
    fn test_member_one_below_limit_is_allowed() {
        let member = member(true);
        let book = book(true);

        assert!(check_eligibility(Some(&member), MAX_ACTIVE_LOANS - 1, Some(&book)).is_ok());
    }
}
