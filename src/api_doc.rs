use utoipa::OpenApi;

use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "hello-backend API",
        version = "1.0.0",
        description = "Liveness check and static greeting"
    ),
    paths(
        handlers::health::health_handler,
        handlers::hello::hello_handler
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "hello", description = "Greeting operations")
    )
)]
pub struct ApiDoc;
