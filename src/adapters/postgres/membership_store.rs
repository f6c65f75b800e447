//! PostgreSQL implementation of MembershipStore.
//!
//! Persistent storage for memberships using sqlx with connection pooling.
//! The `(user_id, membership_type)` UNIQUE constraint closes the
//! check-then-insert race: a second concurrent register trips the
//! constraint and surfaces as `DuplicateMembership`.

use crate::domain::foundation::{
    DomainError, ErrorCode, MembershipId, Point, Timestamp, UserId,
};
use crate::domain::membership::{Membership, MembershipType, NewMembership};
use crate::ports::MembershipStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Name of the UNIQUE constraint on (user_id, membership_type).
const UNIQUE_PAIR_CONSTRAINT: &str = "memberships_user_id_membership_type_key";

/// PostgreSQL implementation of the MembershipStore port.
pub struct PostgresMembershipStore {
    pool: PgPool,
}

impl PostgresMembershipStore {
    /// Creates a new PostgresMembershipStore with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a membership.
#[derive(Debug, sqlx::FromRow)]
struct MembershipRow {
    id: Uuid,
    user_id: String,
    membership_type: String,
    point: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<MembershipRow> for Membership {
    type Error = DomainError;

    fn try_from(row: MembershipRow) -> Result<Self, Self::Error> {
        let membership_type = parse_membership_type(&row.membership_type)?;
        let point = Point::try_new(row.point).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid point value: {}", e))
        })?;
        let user_id = UserId::new(row.user_id).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid user_id: {}", e))
        })?;

        Ok(Membership {
            id: MembershipId::from_uuid(row.id),
            user_id,
            membership_type,
            point,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

fn parse_membership_type(s: &str) -> Result<MembershipType, DomainError> {
    s.parse().map_err(|_| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid membership_type value: {}", s),
        )
    })
}

fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}

#[async_trait]
impl MembershipStore for PostgresMembershipStore {
    async fn find_by_user_and_type(
        &self,
        user_id: &UserId,
        membership_type: MembershipType,
    ) -> Result<Option<Membership>, DomainError> {
        let row: Option<MembershipRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, membership_type, point, created_at, updated_at
            FROM memberships
            WHERE user_id = $1 AND membership_type = $2
            "#,
        )
        .bind(user_id.as_str())
        .bind(membership_type.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to find membership", e))?;

        row.map(Membership::try_from).transpose()
    }

    async fn find_by_id(&self, id: &MembershipId) -> Result<Option<Membership>, DomainError> {
        let row: Option<MembershipRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, membership_type, point, created_at, updated_at
            FROM memberships
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to find membership", e))?;

        row.map(Membership::try_from).transpose()
    }

    async fn find_all_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Membership>, DomainError> {
        let rows: Vec<MembershipRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, membership_type, point, created_at, updated_at
            FROM memberships
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list memberships", e))?;

        rows.into_iter().map(Membership::try_from).collect()
    }

    async fn insert(&self, candidate: NewMembership) -> Result<Membership, DomainError> {
        let id = MembershipId::new();
        let now = Timestamp::now();

        sqlx::query(
            r#"
            INSERT INTO memberships (id, user_id, membership_type, point, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(id.as_uuid())
        .bind(candidate.user_id.as_str())
        .bind(candidate.membership_type.as_str())
        .bind(candidate.point.value())
        .bind(now.as_datetime())
        .bind(now.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some(UNIQUE_PAIR_CONSTRAINT) {
                    return DomainError::new(
                        ErrorCode::DuplicateMembership,
                        "Membership already registered for this user and provider",
                    );
                }
            }
            db_error("Failed to insert membership", e)
        })?;

        Ok(Membership {
            id,
            user_id: candidate.user_id,
            membership_type: candidate.membership_type,
            point: candidate.point,
            created_at: now,
            updated_at: now,
        })
    }

    async fn update(&self, membership: &Membership) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE memberships
            SET point = $2, updated_at = $3
            WHERE id = $1
            "#,
        )
        .bind(membership.id.as_uuid())
        .bind(membership.point.value())
        .bind(membership.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update membership", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::MembershipNotFound,
                "Membership not found",
            ));
        }

        Ok(())
    }

    async fn delete_by_id(&self, id: &MembershipId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM memberships WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete membership", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::MembershipNotFound,
                "Membership not found",
            ));
        }

        Ok(())
    }
}
