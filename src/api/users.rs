//! User endpoints

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::MessageResponse;
use crate::db::{CreateUser, ParentRef, UpdateUser, User};
use crate::services::UserService;
use crate::validation;
use crate::AppState;

const MAX_NAME_LEN: usize = 100;

/// Create body. Every level of the hierarchy can be referenced by id, by
/// name, or both; the backend resolves the chain.
#[derive(Debug, Deserialize)]
pub struct CreateUserBody {
    pub name: String,
    pub cellphone: String,
    pub address: String,
    #[serde(default)]
    pub country_id: Option<i32>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub department_id: Option<i32>,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default)]
    pub municipality_id: Option<i32>,
    #[serde(default)]
    pub municipality_name: Option<String>,
}

/// Update body. Updates only reassign the municipality.
#[derive(Debug, Deserialize)]
pub struct UpdateUserBody {
    pub name: String,
    pub cellphone: String,
    pub address: String,
    #[serde(default)]
    pub municipality_id: Option<i32>,
    #[serde(default)]
    pub municipality_name: Option<String>,
}

impl CreateUserBody {
    fn validate(self) -> Result<CreateUser, ApiError> {
        let name = validation::required_name_capped("name", &self.name, MAX_NAME_LEN)?;
        let cellphone = validation::required_cellphone("cellphone", &self.cellphone)?;
        let country_name =
            validation::optional_name("country_name", self.country_name.as_deref())?;
        let department_name =
            validation::optional_name("department_name", self.department_name.as_deref())?;
        let municipality_name =
            validation::optional_name("municipality_name", self.municipality_name.as_deref())?;

        Ok(CreateUser {
            name,
            cellphone,
            address: self.address,
            country: ParentRef::new(self.country_id, country_name),
            department: ParentRef::new(self.department_id, department_name),
            municipality: ParentRef::new(self.municipality_id, municipality_name),
        })
    }
}

impl UpdateUserBody {
    fn validate(self, id: i32) -> Result<UpdateUser, ApiError> {
        let id = validation::required_id("id", id)?;
        let name = validation::required_name_capped("name", &self.name, MAX_NAME_LEN)?;
        let cellphone = validation::required_cellphone("cellphone", &self.cellphone)?;
        let municipality_name =
            validation::optional_name("municipality_name", self.municipality_name.as_deref())?;

        Ok(UpdateUser {
            id,
            name,
            cellphone,
            address: self.address,
            municipality: ParentRef::new(self.municipality_id, municipality_name),
        })
    }
}

async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    let input = body.validate()?;

    UserService::new(state.db.users()).register(input).await?;
    Ok(Json(MessageResponse::new("user created")))
}

async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = UserService::new(state.db.users()).list().await?;
    Ok(Json(users))
}

async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateUserBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    let input = body.validate(id)?;

    UserService::new(state.db.users()).update(input).await?;
    Ok(Json(MessageResponse::new("user updated")))
}

async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = validation::required_id("id", id)?;

    UserService::new(state.db.users()).delete(id).await?;
    Ok(Json(MessageResponse::new("user deleted")))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            axum::routing::put(update_user).delete(delete_user),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{body_json, request, test_app};
    use axum::http::StatusCode;
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    fn base_body() -> CreateUserBody {
        CreateUserBody {
            name: "Maria Gomez".to_string(),
            cellphone: "30012345678".to_string(),
            address: "Calle cuarenta y cinco".to_string(),
            country_id: None,
            country_name: None,
            department_id: None,
            department_name: None,
            municipality_id: None,
            municipality_name: None,
        }
    }

    #[test]
    fn accepts_valid_input_with_name_only_municipality() {
        let mut body = base_body();
        body.municipality_name = Some("Medellin".to_string());
        let input = body.validate().unwrap();
        assert_eq!(input.municipality.id(), None);
        assert_eq!(input.municipality.name(), Some("Medellin"));
        assert_eq!(input.country, ParentRef::Unset);
        assert_eq!(input.department, ParentRef::Unset);
    }

    #[test]
    fn rejects_eight_char_rule_violations() {
        let mut body = base_body();
        body.cellphone = "1234567".to_string();
        assert!(body.validate().is_err());

        let mut body = base_body();
        body.cellphone = "12345678".to_string();
        assert!(body.validate().is_ok());
    }

    #[test]
    fn rejects_name_over_limit() {
        let mut body = base_body();
        body.name = "a".repeat(101);
        assert!(body.validate().is_err());
    }

    #[tokio::test]
    async fn update_with_zero_id_never_reaches_the_backend() {
        // The pool in the test app cannot connect; a 400 here proves the
        // request was rejected before any backend call.
        let app = test_app();
        let response = app
            .oneshot(request(
                "PUT",
                "/api/users/0",
                r#"{"name":"Maria Gomez","cellphone":"30012345678","address":"Calle"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "id is required");
    }

    #[tokio::test]
    async fn create_rejects_non_digit_cellphone() {
        let app = test_app();
        let response = app
            .oneshot(request(
                "POST",
                "/api/users",
                r#"{"name":"Maria","cellphone":"300-1234567","address":"Calle"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "cellphone contains invalid characters");
    }
}
