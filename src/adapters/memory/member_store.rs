use crate::domain::{Member, MemberId, NewMember};
use crate::ports::member_store::{MemberStore as MemberStoreTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

/// MemberStoreのインメモリ実装
///
/// IDは1から始まる連番で採番する。
pub struct MemberStore {
    members: Mutex<HashMap<MemberId, Member>>,
    next_id: AtomicI64,
}

impl MemberStore {
    pub fn new() -> Self {
        Self {
            members: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemberStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MemberStoreTrait for MemberStore {
    async fn save(&self, member: NewMember) -> Result<Member> {
        let member_id = MemberId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let member = Member {
            member_id,
            last_name: member.last_name,
            first_name: member.first_name,
            email: member.email,
            active: true,
        };
        self.members
            .lock()
            .unwrap()
            .insert(member_id, member.clone());
        Ok(member)
    }

    async fn find_by_id(&self, member_id: MemberId) -> Result<Option<Member>> {
        Ok(self.members.lock().unwrap().get(&member_id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Member>> {
        let mut members: Vec<Member> = self.members.lock().unwrap().values().cloned().collect();
        members.sort_by_key(|member| member.member_id.value());
        Ok(members)
    }

    async fn update(&self, member: &Member) -> Result<()> {
        self.members
            .lock()
            .unwrap()
            .insert(member.member_id, member.clone());
        Ok(())
    }
}
