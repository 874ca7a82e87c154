pub mod app;
pub mod backend;
pub mod chart;
pub mod errors;
pub mod filters;
pub mod handlers;
pub mod models;
pub mod state;
pub mod ui;

pub use app::router;
pub use backend::{resolve_backend_timeout, resolve_backend_url, BackendClient};
pub use state::AppState;
