use axum::Json;
use demo_kit::{ErrorBody, QueryParams};

use crate::dtos::AddParams;

pub const GREETING: &str = "Hello, World!";

/// Returns a simple greeting.
#[utoipa::path(
    get,
    path = "/greet",
    tag = "greeting",
    responses(
        (status = 200, description = "Successful greeting", body = String, content_type = "text/plain")
    )
)]
pub async fn greet() -> &'static str {
    GREETING
}

/// Add two numbers
///
/// Returns the 32-bit sum of `a` and `b`.
#[utoipa::path(
    get,
    path = "/add",
    tag = "greeting",
    params(AddParams),
    responses(
        (status = 200, description = "Sum of both operands", body = i32),
        (status = 400, description = "Missing or non-integer operand", body = ErrorBody)
    )
)]
pub async fn add(QueryParams(params): QueryParams<AddParams>) -> Json<i32> {
    tracing::debug!(a = params.a, b = params.b, "adding");
    Json(params.sum())
}
