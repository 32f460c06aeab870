//! HTTP API for the dice service.

pub mod handlers;
pub mod models;
pub mod routes;

pub use handlers::DiceApiState;
pub use models::RollParams;
pub use routes::dice_routes;
