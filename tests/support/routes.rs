// tests/support/routes.rs
// Handlers that raise each failure kind so the boundary can be driven over HTTP.
use axum::{
    Json, Router,
    routing::{get, post},
};
use calculator_api::domain::errors::{CalculatorError, DomainResult};
use calculator_api::presentation::http::{
    error::{HttpError, HttpResult, IntoHttpResult},
    extractors::{ValidatedJson, ValidatedPath, ValidatedQuery},
};
use serde::Deserialize;
use serde_json::{Value, json};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct OperandRequest {
    #[validate(length(min = 1, message = "must not be blank"))]
    pub label: String,
    #[validate(range(min = 1, message = "must be positive"))]
    pub operand: i64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(email)]
    pub contact: String,
    #[validate(range(min = 1))]
    pub operand: i64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ScaleParams {
    #[validate(range(max = 10, message = "scale must be at most 10"))]
    pub scale: u32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ItemPath {
    #[validate(range(min = 1, message = "id must be positive"))]
    pub id: i64,
}

fn divide(dividend: i64, divisor: i64) -> DomainResult<i64> {
    if divisor == 0 {
        return Err(CalculatorError::new("Division by zero"));
    }
    Ok(dividend / divisor)
}

async fn domain_error() -> HttpResult<Json<Value>> {
    Err(CalculatorError::new("Invalid operand").into())
}

async fn default_domain_error() -> HttpResult<Json<Value>> {
    Err(HttpError::from(CalculatorError::default()))
}

async fn divide_by_zero() -> HttpResult<Json<Value>> {
    let quotient = divide(10, 0).into_http()?;
    Ok(Json(json!({ "quotient": quotient })))
}

async fn operands(ValidatedJson(req): ValidatedJson<OperandRequest>) -> HttpResult<Json<Value>> {
    Ok(Json(json!({ "label": req.label, "operand": req.operand })))
}

async fn contact(ValidatedJson(req): ValidatedJson<ContactRequest>) -> HttpResult<Json<Value>> {
    Ok(Json(json!({ "contact": req.contact, "operand": req.operand })))
}

async fn scale(ValidatedQuery(params): ValidatedQuery<ScaleParams>) -> HttpResult<Json<Value>> {
    Ok(Json(json!({ "scale": params.scale })))
}

async fn item(ValidatedPath(path): ValidatedPath<ItemPath>) -> HttpResult<Json<Value>> {
    Ok(Json(json!({ "id": path.id })))
}

async fn unclassified() -> HttpResult<Json<Value>> {
    Err(HttpError::from(std::io::Error::other("storage offline")))
}

pub fn failure_routes() -> Router {
    Router::new()
        .route("/test/domain", get(domain_error))
        .route("/test/domain-default", get(default_domain_error))
        .route("/test/divide-by-zero", get(divide_by_zero))
        .route("/test/operands", post(operands))
        .route("/test/contact", post(contact))
        .route("/test/scale", get(scale))
        .route("/test/items/{id}", get(item))
        .route("/test/unclassified", get(unclassified))
}
