//! Dice-roll domain and HTTP API
//!
//! This crate implements the `/rolldice` endpoint: an optional `player`
//! query parameter, a uniform roll in [1, 6], a WARN-level log record per
//! roll, and a plain-text response body carrying the result.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use dice::api::{dice_routes, DiceApiState};
//!
//! let state = Arc::new(DiceApiState::new("rolldice"));
//! let router = dice_routes(state);
//! // GET /rolldice?player=alice -> "4"
//! ```

pub mod api;
pub mod roll;

pub use api::{dice_routes, DiceApiState, RollParams};
pub use roll::roll;
