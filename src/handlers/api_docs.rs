use crate::api_doc::ApiDoc;
use axum::Json;
use utoipa::OpenApi;

/// GET /api-docs/openapi.json handler - OpenAPI document for the public API
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
