//! HTTP request handlers

use super::state::AppState;
use crate::models::{College, Major, SearchResults, University};
use crate::search::SearchError;
use crate::store::StoreError;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

/// Error envelope returned by every failing endpoint
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "message": self.message }))).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        let status = match err {
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::DuplicateKey { .. } | StoreError::Validation(_) => StatusCode::BAD_REQUEST,
            StoreError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        error!("Search failed: {}", err);
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    }
}

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search query
    pub query: Option<String>,
    /// Entity type filter: university, college, major, or all
    #[serde(rename = "type")]
    pub search_type: Option<String>,
}

/// Global search handler
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResults>, ApiError> {
    let query = params.query.unwrap_or_default();
    let results = state
        .search
        .execute(&query, params.search_type.as_deref())
        .await?;
    Ok(Json(results))
}

/// Admin login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Admin login handler: a plain configured-credential check
pub async fn admin_login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if body.username.is_empty() || body.password.is_empty() {
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            "Username and password are required",
        ));
    }

    let admin = &state.settings.admin;
    if body.username != admin.username || body.password != admin.password {
        return Err(ApiError::new(
            StatusCode::UNAUTHORIZED,
            "Invalid username or password",
        ));
    }

    Ok(Json(json!({
        "message": "Login successful",
        "admin": { "username": admin.username, "role": "admin" }
    })))
}

pub async fn list_universities(
    State(state): State<AppState>,
) -> Result<Json<Vec<University>>, ApiError> {
    Ok(Json(state.store.list_universities().await?))
}

pub async fn create_university(
    State(state): State<AppState>,
    Json(university): Json<University>,
) -> Result<(StatusCode, Json<University>), ApiError> {
    let created = state.store.create_university(university).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_university(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(university): Json<University>,
) -> Result<Json<University>, ApiError> {
    Ok(Json(state.store.update_university(&id, university).await?))
}

pub async fn delete_university(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = state.store.delete_university(&id).await?;
    Ok(Json(json!({
        "message": "University deleted successfully",
        "university": deleted
    })))
}

pub async fn list_colleges(
    State(state): State<AppState>,
    Path(uni_key): Path<String>,
) -> Result<Json<Vec<College>>, ApiError> {
    Ok(Json(state.store.list_colleges(&uni_key).await?))
}

pub async fn create_college(
    State(state): State<AppState>,
    Json(college): Json<College>,
) -> Result<(StatusCode, Json<College>), ApiError> {
    let created = state.store.create_college(college).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_college(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(college): Json<College>,
) -> Result<Json<College>, ApiError> {
    Ok(Json(state.store.update_college(&id, college).await?))
}

pub async fn delete_college(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = state.store.delete_college(&id).await?;
    Ok(Json(json!({
        "message": "College deleted successfully",
        "college": deleted
    })))
}

pub async fn list_majors(
    State(state): State<AppState>,
    Path((uni_key, college_key)): Path<(String, String)>,
) -> Result<Json<Vec<Major>>, ApiError> {
    Ok(Json(state.store.list_majors(&uni_key, &college_key).await?))
}

pub async fn get_major(
    State(state): State<AppState>,
    Path((uni_key, college_key, major_id)): Path<(String, String, String)>,
) -> Result<Json<Major>, ApiError> {
    state
        .store
        .get_major(&uni_key, &college_key, &major_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::new(StatusCode::NOT_FOUND, "Major not found"))
}

pub async fn create_major(
    State(state): State<AppState>,
    Json(major): Json<Major>,
) -> Result<(StatusCode, Json<Major>), ApiError> {
    let created = state.store.create_major(major).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_major(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(major): Json<Major>,
) -> Result<Json<Major>, ApiError> {
    Ok(Json(state.store.update_major(&id, major).await?))
}

pub async fn delete_major(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = state.store.delete_major(&id).await?;
    Ok(Json(json!({
        "message": "Major deleted successfully",
        "major": deleted
    })))
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "instance": state.instance_name(),
        "version": crate::VERSION
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::UniversityType;
    use crate::store::{CatalogStore, MemoryStore};
    use crate::web::create_router;
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn app() -> axum::Router {
        let store = MemoryStore::new();
        store
            .create_university(University {
                id: String::new(),
                key: "iu".to_string(),
                name: "الجامعة الإسلامية".to_string(),
                color: "#0a4b78".to_string(),
                university_type: UniversityType::Public,
            })
            .await
            .unwrap();
        store
            .create_college(College {
                id: String::new(),
                key: "eng".to_string(),
                name: "كلية الهندسة".to_string(),
                university_key: "iu".to_string(),
            })
            .await
            .unwrap();
        create_router(AppState::new(Settings::default(), Arc::new(store)))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = app()
            .await
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_search_without_query_returns_empty_bundle() {
        let response = app()
            .await
            .oneshot(Request::get("/api/search").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["universities"].as_array().unwrap().is_empty());
        assert!(json["colleges"].as_array().unwrap().is_empty());
        assert!(json["majors"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_returns_enriched_college() {
        let uri = format!("/api/search?query={}&type=all", urlencode("هندسة"));
        let response = app()
            .await
            .oneshot(Request::get(uri.as_str()).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let colleges = json["colleges"].as_array().unwrap();
        assert_eq!(colleges.len(), 1);
        assert_eq!(colleges[0]["university"]["name"], "الجامعة الإسلامية");
        assert_eq!(colleges[0]["university"]["type"], "public");
        assert_eq!(colleges[0]["university"]["color"], "#0a4b78");
        assert!(json["universities"].as_array().unwrap().is_empty());
        assert!(json["majors"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_university_conflict_is_bad_request() {
        let app = app().await;
        let body = serde_json::json!({
            "key": "iu",
            "name": "Duplicate",
            "color": "#ffffff",
            "type": "private"
        });
        let response = app
            .oneshot(
                Request::post("/api/universities")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["message"].as_str().unwrap().contains("duplicate"));
    }

    #[tokio::test]
    async fn test_admin_login_rejects_bad_credentials() {
        let response = app()
            .await
            .oneshot(
                Request::post("/api/admin/login")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"username":"admin","password":"wrong"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_admin_login_accepts_configured_credentials() {
        let response = app()
            .await
            .oneshot(
                Request::post("/api/admin/login")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"username":"admin","password":"admin"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["admin"]["username"], "admin");
    }

    #[tokio::test]
    async fn test_update_missing_university_is_not_found() {
        let body = serde_json::json!({
            "key": "x",
            "name": "X",
            "color": "#000000",
            "type": "public"
        });
        let response = app()
            .await
            .oneshot(
                Request::put("/api/universities/does-not-exist")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    fn urlencode(s: &str) -> String {
        s.bytes()
            .map(|b| format!("%{:02X}", b))
            .collect()
    }
}
