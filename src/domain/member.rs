use serde::{Deserialize, Serialize};

use super::MemberId;

/// 会員エンティティ
///
/// 不変条件：新しい貸出を開始できるのは`active`な会員のみ。
/// 無効化された会員の既存の貸出は有効なままで、返却も受け付ける。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub member_id: MemberId,
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub active: bool,
}

/// 登録前の会員
///
/// IDは会員ストアが採番するため、ここでは持たない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMember {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
}

impl Member {
    pub fn new(
        member_id: MemberId,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            member_id,
            last_name: last_name.into(),
            first_name: first_name.into(),
            email: email.into(),
            active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_member_is_active() {
        let member = Member::new(MemberId::new(1), "Alaoui", "Yasmine", "yasmine@example.com");
        assert!(member.active);
        assert_eq!(member.member_id.value(), 1);
    }
}
