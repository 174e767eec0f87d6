//! Department endpoints

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::MessageResponse;
use crate::db::{CreateDepartment, Department, ParentRef, UpdateDepartment};
use crate::services::DepartmentService;
use crate::validation;
use crate::AppState;

/// Create/update body. The country may be referenced by id, by name
/// (resolved or created backend-side), by both, or omitted.
#[derive(Debug, Deserialize)]
pub struct DepartmentBody {
    pub name: String,
    #[serde(default)]
    pub country_id: Option<i32>,
    #[serde(default)]
    pub country_name: Option<String>,
}

impl DepartmentBody {
    fn validate(self) -> Result<(String, ParentRef), ApiError> {
        let name = validation::required_name("name", &self.name)?;
        let country_name =
            validation::optional_name("country_name", self.country_name.as_deref())?;
        Ok((name, ParentRef::new(self.country_id, country_name)))
    }
}

async fn create_department(
    State(state): State<AppState>,
    Json(body): Json<DepartmentBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    let (name, country) = body.validate()?;

    DepartmentService::new(state.db.departments())
        .register(CreateDepartment { name, country })
        .await?;
    Ok(Json(MessageResponse::new("department created")))
}

async fn list_departments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Department>>, ApiError> {
    let departments = DepartmentService::new(state.db.departments())
        .list()
        .await?;
    Ok(Json(departments))
}

async fn update_department(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<DepartmentBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = validation::required_id("id", id)?;
    let (name, country) = body.validate()?;

    DepartmentService::new(state.db.departments())
        .update(UpdateDepartment { id, name, country })
        .await?;
    Ok(Json(MessageResponse::new("department updated")))
}

async fn delete_department(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = validation::required_id("id", id)?;

    DepartmentService::new(state.db.departments())
        .delete(id)
        .await?;
    Ok(Json(MessageResponse::new("department deleted")))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/departments",
            get(list_departments).post(create_department),
        )
        .route(
            "/departments/{id}",
            axum::routing::put(update_department).delete(delete_department),
        )
}
