use crate::domain::{Member, MemberId, NewMember};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Member repository port.
///
/// The store assigns member ids on save and is the system of record for
/// member entities. The lending engine only resolves members through this
/// interface.
#[async_trait]
pub trait MemberStore: Send + Sync {
    /// Persist a new member. The store assigns the id and returns the
    /// stored entity.
    async fn save(&self, member: NewMember) -> Result<Member>;

    /// Look up a member by id.
    async fn find_by_id(&self, member_id: MemberId) -> Result<Option<Member>>;

    /// All registered members.
    async fn find_all(&self) -> Result<Vec<Member>>;

    /// Persist changes to an existing member (activation flips included).
    async fn update(&self, member: &Member) -> Result<()>;
}
