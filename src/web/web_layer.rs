// The web module is the HTTP surface: routes, pages and error mapping.
// Handlers stay thin and call into the core services.

#[path = "api_error.rs"]
pub mod api_error;

#[path = "pages.rs"]
pub mod pages;

#[path = "routes.rs"]
pub mod routes;
