//! User database repository
//!
//! Users live in the `users` schema; the location hierarchy lives in
//! `locations`. The insert routine takes a reference for every level of the
//! hierarchy so a caller can pin the whole chain by id or let the backend
//! resolve (or create) it by name. Updates only reassign the municipality.

use anyhow::Result;
use serde::Serialize;
use sqlx::PgPool;

use super::municipalities::Municipality;
use super::refs::ParentRef;
use super::row::{ColumnCursor, DecodeError, FlatRow};

/// User as returned by `users.fn_get_users()`, with the full ancestor
/// chain of its municipality inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub cellphone: String,
    pub address: String,
    pub municipality_id: i32,
    pub municipality: Municipality,
}

impl User {
    /// Columns: id, name, cellphone, address, then the municipality
    /// columns (which carry the rest of the chain).
    pub(crate) fn decode<R: FlatRow>(cur: &mut ColumnCursor<'_, R>) -> Result<Self, DecodeError> {
        let id = cur.int()?;
        let name = cur.text()?;
        let cellphone = cur.text()?;
        let address = cur.text()?;
        let municipality = Municipality::decode(cur)?;
        Ok(Self {
            id,
            name,
            cellphone,
            address,
            municipality_id: municipality.id,
            municipality,
        })
    }
}

/// Input for creating a user
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub cellphone: String,
    pub address: String,
    pub country: ParentRef,
    pub department: ParentRef,
    pub municipality: ParentRef,
}

/// Input for updating a user
#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub id: i32,
    pub name: String,
    pub cellphone: String,
    pub address: String,
    pub municipality: ParentRef,
}

pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: CreateUser) -> Result<()> {
        sqlx::query("CALL users.sp_insert_user($1, $2, $3, $4, $5, $6, $7, $8, $9)")
            .bind(&input.name)
            .bind(&input.cellphone)
            .bind(&input.address)
            .bind(input.country.id())
            .bind(input.department.id())
            .bind(input.municipality.id())
            .bind(input.country.name())
            .bind(input.department.name())
            .bind(input.municipality.name())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// All users with their municipality, department and country inline,
    /// in cursor order.
    pub async fn list(&self) -> Result<Vec<User>> {
        let rows = sqlx::query("SELECT * FROM users.fn_get_users()")
            .fetch_all(&self.pool)
            .await?;

        let mut users = Vec::with_capacity(rows.len());
        for row in &rows {
            users.push(User::decode(&mut ColumnCursor::new(row))?);
        }
        Ok(users)
    }

    pub async fn update(&self, input: UpdateUser) -> Result<()> {
        sqlx::query("CALL users.sp_update_user($1, $2, $3, $4, $5, $6)")
            .bind(input.id)
            .bind(&input.name)
            .bind(&input.cellphone)
            .bind(&input.address)
            .bind(input.municipality.id())
            .bind(input.municipality.name())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        sqlx::query("CALL users.sp_delete_user($1)")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
