//! Country database repository

use anyhow::Result;
use serde::Serialize;
use sqlx::PgPool;

use super::row::{ColumnCursor, DecodeError, FlatRow};

/// Country as returned by `locations.fn_get_countries()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
    pub id: i32,
    pub name: String,
}

impl Country {
    /// Columns: id, name.
    pub(crate) fn decode<R: FlatRow>(cur: &mut ColumnCursor<'_, R>) -> Result<Self, DecodeError> {
        Ok(Self {
            id: cur.int()?,
            name: cur.text()?,
        })
    }
}

/// Input for creating a country
#[derive(Debug, Clone)]
pub struct CreateCountry {
    pub name: String,
}

/// Input for updating a country
#[derive(Debug, Clone)]
pub struct UpdateCountry {
    pub id: i32,
    pub name: String,
}

pub struct CountryRepository {
    pool: PgPool,
}

impl CountryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a country. The routine is void; callers that need the
    /// generated id must list.
    pub async fn create(&self, input: CreateCountry) -> Result<()> {
        sqlx::query("CALL locations.sp_insert_country($1)")
            .bind(&input.name)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// All countries, in cursor order.
    pub async fn list(&self) -> Result<Vec<Country>> {
        let rows = sqlx::query("SELECT * FROM locations.fn_get_countries()")
            .fetch_all(&self.pool)
            .await?;

        let mut countries = Vec::with_capacity(rows.len());
        for row in &rows {
            countries.push(Country::decode(&mut ColumnCursor::new(row))?);
        }
        Ok(countries)
    }

    pub async fn update(&self, input: UpdateCountry) -> Result<()> {
        sqlx::query("CALL locations.sp_update_country($1, $2)")
            .bind(input.id)
            .bind(&input.name)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        sqlx::query("CALL locations.sp_delete_country($1)")
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

    #[test]
    fn decodes_id_then_name() {
        let row = TestRow(vec![Col::Int(1), Col::Text("Colombia")]);
        let country = Country::decode(&mut ColumnCursor::new(&row)).unwrap();
        assert_eq!(
            country,
            Country {
                id: 1,
                name: "Colombia".to_string()
            }
        );
    }

    #[test]
    fn null_name_fails_the_row() {
        let row = TestRow(vec![Col::Int(1), Col::Null]);
        assert!(Country::decode(&mut ColumnCursor::new(&row)).is_err());
    }
}
