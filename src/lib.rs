pub mod app;
pub mod clock;
pub mod config;
pub mod db;
pub mod errors;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;

pub use app::create_app;
pub use state::AppState;
