use crate::routes;

/// Liveness body, returned verbatim
pub const HEALTH_BODY: &str = "OK";

/// GET /health handler - Liveness check endpoint
///
/// Reachable without credentials. There are no downstream dependencies to
/// probe, so a response at all means the process is up.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is alive", body = String, content_type = "text/plain")
    ),
    tag = "health"
)]
pub async fn health_handler() -> &'static str {
    tracing::debug!("Health check passed");
    HEALTH_BODY
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::{Request, StatusCode}, routing::get, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = Router::new().route(routes::HEALTH, get(health_handler));

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"],
            "text/plain; charset=utf-8"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"OK");
    }
}
