/// 延滞料金計算のエラー
///
/// 呼び出し側が正しい限り到達しない、プログラミングエラーの通知として扱う。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PenaltyError {
    /// 返却日が貸出日より前、または返却予定日が貸出日より前
    InvalidDateRange,
}

/// 貸出適格性チェックのエラー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EligibilityError {
    /// 会員が存在しない
    MemberNotFound,
    /// 会員が無効化されている
    MemberInactive,
    /// 書籍が存在しない、または貸出中
    BookUnavailable,
    /// 貸出上限に達している
    LoanLimitExceeded,
}
