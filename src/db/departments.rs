//! Department database repository

use anyhow::Result;
use serde::Serialize;
use sqlx::PgPool;

use super::countries::Country;
use super::refs::ParentRef;
use super::row::{ColumnCursor, DecodeError, FlatRow};

/// Department as returned by `locations.fn_get_departments()`, with its
/// country inline. `country_id` and `country.id` carry the same join value;
/// some consumers want the bare id, others the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Department {
    pub id: i32,
    pub name: String,
    pub country_id: i32,
    pub country: Country,
}

impl Department {
    /// Columns: id, name, then the country columns.
    pub(crate) fn decode<R: FlatRow>(cur: &mut ColumnCursor<'_, R>) -> Result<Self, DecodeError> {
        let id = cur.int()?;
        let name = cur.text()?;
        let country = Country::decode(cur)?;
        Ok(Self {
            id,
            name,
            country_id: country.id,
            country,
        })
    }
}

/// Input for creating a department
#[derive(Debug, Clone)]
pub struct CreateDepartment {
    pub name: String,
    pub country: ParentRef,
}

/// Input for updating a department
#[derive(Debug, Clone)]
pub struct UpdateDepartment {
    pub id: i32,
    pub name: String,
    pub country: ParentRef,
}

pub struct DepartmentRepository {
    pool: PgPool,
}

impl DepartmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: CreateDepartment) -> Result<()> {
        sqlx::query("CALL locations.sp_insert_department($1, $2, $3)")
            .bind(&input.name)
            .bind(input.country.id())
            .bind(input.country.name())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// All departments with their country inline, in cursor order.
    pub async fn list(&self) -> Result<Vec<Department>> {
        let rows = sqlx::query("SELECT * FROM locations.fn_get_departments()")
            .fetch_all(&self.pool)
            .await?;

        let mut departments = Vec::with_capacity(rows.len());
        for row in &rows {
            departments.push(Department::decode(&mut ColumnCursor::new(row))?);
        }
        Ok(departments)
    }

    pub async fn update(&self, input: UpdateDepartment) -> Result<()> {
        sqlx::query("CALL locations.sp_update_department($1, $2, $3, $4)")
            .bind(input.id)
            .bind(&input.name)
            .bind(input.country.id())
            .bind(input.country.name())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        sqlx::query("CALL locations.sp_delete_department($1)")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::row::fixtures::{Col, TestRow};
    use pretty_assertions::assert_eq;

    fn antioquia_row() -> TestRow {
        TestRow(vec![
            Col::Int(2),
            Col::Text("Antioquia"),
            Col::Int(1),
            Col::Text("Colombia"),
        ])
    }

    #[test]
    fn decodes_department_with_nested_country() {
        let dept = Department::decode(&mut ColumnCursor::new(&antioquia_row())).unwrap();
        assert_eq!(dept.id, 2);
        assert_eq!(dept.name, "Antioquia");
        assert_eq!(dept.country_id, 1);
        assert_eq!(dept.country.id, dept.country_id);
        assert_eq!(dept.country.name, "Colombia");
    }

    #[test]
    fn decoding_twice_yields_equal_values() {
        let row = antioquia_row();
        let a = Department::decode(&mut ColumnCursor::new(&row)).unwrap();
        let b = Department::decode(&mut ColumnCursor::new(&row)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn null_country_name_fails_the_whole_row() {
        let row = TestRow(vec![
            Col::Int(2),
            Col::Text("Antioquia"),
            Col::Int(1),
            Col::Null,
        ]);
        let err = Department::decode(&mut ColumnCursor::new(&row)).unwrap_err();
        assert_eq!(err.index, 3);
    }
}
