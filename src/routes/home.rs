use axum::{http::StatusCode, response::Html};

const INDEX: &str = concat!(
    "Available Routes:<br/>",
    "/api/v1.0/precipitation<br/>",
    "/api/v1.0/stations<br/>",
    "/api/v1.0/tobs<br/>",
    "/api/v1.0/&lt;start&gt;<br/>",
    "/api/v1.0/&lt;start&gt;/&lt;end&gt;",
);

/// List all available API routes
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "HTML list of routes", content_type = "text/html", body = String),
    ),
    tag = "home"
)]
pub async fn index() -> Html<&'static str> {
    Html(INDEX)
}

/// Health check endpoint
///
/// Returns 200 OK while the process is serving.
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Service is healthy"),
    ),
    tag = "home"
)]
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
