pub mod errors;
pub mod routes;
pub mod state;

pub use errors::ApiError;
pub use routes::create_router;
pub use state::AppState;
