/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Liveness check.
#[utoipa::path(
    get,
    path = "/",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is running", body = String, content_type = "text/plain")
    ),
)]
pub async fn health() -> &'static str {
    "FitClub Backend is running!"
}
