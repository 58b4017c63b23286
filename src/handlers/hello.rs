use crate::routes;

/// Greeting body, returned verbatim
pub const HELLO_BODY: &str = "Hello from Backend!";

/// GET /api/hello handler - Static greeting
#[utoipa::path(
    get,
    path = routes::HELLO,
    responses(
        (status = 200, description = "Greeting message", body = String, content_type = "text/plain")
    ),
    tag = "hello"
)]
pub async fn hello_handler() -> &'static str {
    HELLO_BODY
}
