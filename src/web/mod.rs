// Server-rendered pages for managing projects

pub mod forms;
pub mod handlers;
pub mod routes;

pub use handlers::AppState;
