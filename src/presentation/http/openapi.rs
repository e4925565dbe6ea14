// src/presentation/http/openapi.rs
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(super::routes::health),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse
        )
    ),
    tags(
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Calculator API",
        description = "Calculator backend with a uniform error body",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
