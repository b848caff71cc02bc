use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Isbn, MemberId};

/// コマンド：書籍を貸し出す
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowBook {
    pub isbn: Isbn,
    pub member_id: MemberId,
    pub borrowed_on: NaiveDate,
}

/// コマンド：書籍を返却する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnBook {
    pub isbn: Isbn,
    pub member_id: MemberId,
    pub returned_on: NaiveDate,
}
