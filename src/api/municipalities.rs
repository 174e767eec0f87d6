//! Municipality endpoints

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::MessageResponse;
use crate::db::{CreateMunicipality, Municipality, ParentRef, UpdateMunicipality};
use crate::services::MunicipalityService;
use crate::validation;
use crate::AppState;

/// Create/update body. The department may be referenced by id, by name
/// (resolved or created backend-side), by both, or omitted.
#[derive(Debug, Deserialize)]
pub struct MunicipalityBody {
    pub name: String,
    #[serde(default)]
    pub department_id: Option<i32>,
    #[serde(default)]
    pub department_name: Option<String>,
}

impl MunicipalityBody {
    fn validate(self) -> Result<(String, ParentRef), ApiError> {
        let name = validation::required_name("name", &self.name)?;
        let department_name =
            validation::optional_name("department_name", self.department_name.as_deref())?;
        Ok((name, ParentRef::new(self.department_id, department_name)))
    }
}

async fn create_municipality(
    State(state): State<AppState>,
    Json(body): Json<MunicipalityBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    let (name, department) = body.validate()?;

    MunicipalityService::new(state.db.municipalities())
        .register(CreateMunicipality { name, department })
        .await?;
    Ok(Json(MessageResponse::new("municipality created")))
}

async fn list_municipalities(
    State(state): State<AppState>,
) -> Result<Json<Vec<Municipality>>, ApiError> {
    let municipalities = MunicipalityService::new(state.db.municipalities())
        .list()
        .await?;
    Ok(Json(municipalities))
}

async fn update_municipality(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<MunicipalityBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = validation::required_id("id", id)?;
    let (name, department) = body.validate()?;

    MunicipalityService::new(state.db.municipalities())
        .update(UpdateMunicipality {
            id,
            name,
            department,
        })
        .await?;
    Ok(Json(MessageResponse::new("municipality updated")))
}

async fn delete_municipality(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = validation::required_id("id", id)?;

    MunicipalityService::new(state.db.municipalities())
        .delete(id)
        .await?;
    Ok(Json(MessageResponse::new("municipality deleted")))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/municipalities",
            get(list_municipalities).post(create_municipality),
        )
        .route(
            "/municipalities/{id}",
            axum::routing::put(update_municipality).delete(delete_municipality),
        )
}
