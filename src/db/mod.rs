//! Database connection and per-entity repositories

pub mod countries;
pub mod departments;
pub mod municipalities;
pub mod refs;
pub mod row;
pub mod users;

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub use countries::{Country, CountryRepository, CreateCountry, UpdateCountry};
pub use departments::{CreateDepartment, Department, DepartmentRepository, UpdateDepartment};
pub use municipalities::{
    CreateMunicipality, Municipality, MunicipalityRepository, UpdateMunicipality,
};
pub use refs::ParentRef;
pub use users::{CreateUser, UpdateUser, User, UserRepository};

/// Database wrapper providing connection pool access
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database wrapper from an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get the maximum connection pool size from environment or default
    fn get_max_connections() -> u32 {
        std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10)
    }

    /// Create a new database connection pool
    pub async fn connect(url: &str) -> Result<Self> {
        let max_connections = Self::get_max_connections();
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;

        Ok(Self { pool })
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get a country repository
    pub fn countries(&self) -> CountryRepository {
        CountryRepository::new(self.pool.clone())
    }

    /// Get a department repository
    pub fn departments(&self) -> DepartmentRepository {
        DepartmentRepository::new(self.pool.clone())
    }

    /// Get a municipality repository
    pub fn municipalities(&self) -> MunicipalityRepository {
        MunicipalityRepository::new(self.pool.clone())
    }

    /// Get a user repository
    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.pool.clone())
    }
}
