pub mod api_docs;
pub mod fallback;
pub mod health;
pub mod hello;

pub use api_docs::openapi_handler;
pub use fallback::not_found_handler;
pub use health::health_handler;
pub use hello::hello_handler;
