//! Municipality database repository

use anyhow::Result;
use serde::Serialize;
use sqlx::PgPool;

use super::departments::Department;
use super::refs::ParentRef;
use super::row::{ColumnCursor, DecodeError, FlatRow};

/// Municipality as returned by `locations.fn_get_municipalities()`, with
/// its department and country inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Municipality {
    pub id: i32,
    pub name: String,
    pub department_id: i32,
    pub department: Department,
}

impl Municipality {
    /// Columns: id, name, then the department columns (which end with the
    /// country columns).
    pub(crate) fn decode<R: FlatRow>(cur: &mut ColumnCursor<'_, R>) -> Result<Self, DecodeError> {
        let id = cur.int()?;
        let name = cur.text()?;
        let department = Department::decode(cur)?;
        Ok(Self {
            id,
            name,
            department_id: department.id,
            department,
        })
    }
}

/// Input for creating a municipality
#[derive(Debug, Clone)]
pub struct CreateMunicipality {
    pub name: String,
    pub department: ParentRef,
}

/// Input for updating a municipality
#[derive(Debug, Clone)]
pub struct UpdateMunicipality {
    pub id: i32,
    pub name: String,
    pub department: ParentRef,
}

pub struct MunicipalityRepository {
    pool: PgPool,
}

impl MunicipalityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: CreateMunicipality) -> Result<()> {
        sqlx::query("CALL locations.sp_insert_municipality($1, $2, $3)")
            .bind(&input.name)
            .bind(input.department.id())
            .bind(input.department.name())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// All municipalities with their full ancestor chain, in cursor order.
    pub async fn list(&self) -> Result<Vec<Municipality>> {
        let rows = sqlx::query("SELECT * FROM locations.fn_get_municipalities()")
            .fetch_all(&self.pool)
            .await?;

        let mut municipalities = Vec::with_capacity(rows.len());
        for row in &rows {
            municipalities.push(Municipality::decode(&mut ColumnCursor::new(row))?);
        }
        Ok(municipalities)
    }

    pub async fn update(&self, input: UpdateMunicipality) -> Result<()> {
        sqlx::query("CALL locations.sp_update_municipality($1, $2, $3, $4)")
            .bind(input.id)
            .bind(&input.name)
            .bind(input.department.id())
            .bind(input.department.name())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        sqlx::query("CALL locations.sp_delete_municipality($1)")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
