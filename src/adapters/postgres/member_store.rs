use crate::domain::{Member, MemberId, NewMember};
use crate::ports::member_store::{MemberStore as MemberStoreTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

/// PostgreSQLの行データをMemberに変換する
fn map_row_to_member(row: &PgRow) -> Member {
    Member {
        member_id: MemberId::new(row.get("member_id")),
        last_name: row.get("last_name"),
        first_name: row.get("first_name"),
        email: row.get("email"),
        active: row.get("active"),
    }
}

/// MemberStoreのPostgreSQL実装
///
/// 会員IDはBIGSERIALで採番する。
pub struct MemberStore {
    pool: PgPool,
}

impl MemberStore {
    /// PostgreSQLコネクションプールから新しいMemberStoreを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberStoreTrait for MemberStore {
    async fn save(&self, member: NewMember) -> Result<Member> {
        let row = sqlx::query(
            r#"
            INSERT INTO members (last_name, first_name, email, active)
            VALUES ($1, $2, $3, TRUE)
            RETURNING member_id, last_name, first_name, email, active
            "#,
        )
        .bind(&member.last_name)
        .bind(&member.first_name)
        .bind(&member.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(map_row_to_member(&row))
    }

    async fn find_by_id(&self, member_id: MemberId) -> Result<Option<Member>> {
        let row = sqlx::query(
            r#"
            SELECT member_id, last_name, first_name, email, active
            FROM members
            WHERE member_id = $1
            "#,
        )
        .bind(member_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(map_row_to_member))
    }

    async fn find_all(&self) -> Result<Vec<Member>> {
        let rows = sqlx::query(
            r#"
            SELECT member_id, last_name, first_name, email, active
            FROM members
            ORDER BY member_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(map_row_to_member).collect())
    }

    async fn update(&self, member: &Member) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE members
            SET last_name = $2,
                first_name = $3,
                email = $4,
                active = $5
            WHERE member_id = $1
            "#,
        )
        .bind(member.member_id.value())
        .bind(&member.last_name)
        .bind(&member.first_name)
        .bind(&member.email)
        .bind(member.active)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
