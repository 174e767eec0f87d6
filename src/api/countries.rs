//! Country endpoints

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::MessageResponse;
use crate::db::{Country, CreateCountry, UpdateCountry};
use crate::services::CountryService;
use crate::validation;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CountryBody {
    pub name: String,
}

async fn create_country(
    State(state): State<AppState>,
    Json(body): Json<CountryBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    let name = validation::required_name("name", &body.name)?;

    CountryService::new(state.db.countries())
        .register(CreateCountry { name })
        .await?;
    Ok(Json(MessageResponse::new("country created")))
}

async fn list_countries(
    State(state): State<AppState>,
) -> Result<Json<Vec<Country>>, ApiError> {
    let countries = CountryService::new(state.db.countries()).list().await?;
    Ok(Json(countries))
}

async fn update_country(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<CountryBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = validation::required_id("id", id)?;
    let name = validation::required_name("name", &body.name)?;

    CountryService::new(state.db.countries())
        .update(UpdateCountry { id, name })
        .await?;
    Ok(Json(MessageResponse::new("country updated")))
}

async fn delete_country(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = validation::required_id("id", id)?;

    CountryService::new(state.db.countries()).delete(id).await?;
    Ok(Json(MessageResponse::new("country deleted")))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/countries", get(list_countries).post(create_country))
        .route(
            "/countries/{id}",
            axum::routing::put(update_country).delete(delete_country),
        )
}

#[cfg(test)]
mod tests {
    use crate::api::testing::{body_json, request, test_app};
    use axum::http::StatusCode;
    use tower::ServiceExt;

    #[tokio::test]
    async fn create_rejects_name_with_digit() {
        let app = test_app();
        let response = app
            .oneshot(request("POST", "/api/countries", r#"{"name":"Bogota1"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "name contains invalid characters");
    }

    #[tokio::test]
    async fn create_rejects_whitespace_only_name() {
        let app = test_app();
        let response = app
            .oneshot(request("POST", "/api/countries", r#"{"name":"   "}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "name is required");
    }

    #[tokio::test]
    async fn update_rejects_zero_id() {
        let app = test_app();
        let response = app
            .oneshot(request("PUT", "/api/countries/0", r#"{"name":"Colombia"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "id is required");
    }
}
