// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const HELLO: &str = "/api/hello";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Paths reachable without credentials. Matched exactly.
pub const PUBLIC_PATHS: [&str; 2] = [HEALTH, HELLO];
