//! HTTP request handlers for the dice API.

use crate::api::models::RollParams;
use crate::roll::roll;
use axum::extract::{Query, State};
use observability::DiceMetrics;
use std::sync::Arc;
use std::time::Instant;
use tracing::warn;

/// Shared state for dice API handlers.
pub struct DiceApiState {
    /// Service name, used as the metrics label
    pub service_name: String,
    /// Roll counters and timings
    pub metrics: DiceMetrics,
}

impl DiceApiState {
    pub fn new(service_name: impl Into<String>) -> Self {
        let service_name = service_name.into();
        let metrics = DiceMetrics::new(&service_name);
        Self {
            service_name,
            metrics,
        }
    }
}

/// GET /rolldice
///
/// Rolls a six-sided die and returns the result as a plain-text decimal
/// string. Each roll emits one WARN-level record naming the player, or
/// "Anonymous" when the `player` parameter is absent or empty.
pub async fn roll_dice(
    State(state): State<Arc<DiceApiState>>,
    Query(params): Query<RollParams>,
) -> String {
    let start = Instant::now();
    let result = roll();

    match params.player_name() {
        Some(player) => warn!("{} is rolling the dice: {}", player, result),
        None => warn!("Anonymous player is rolling the dice: {}", result),
    }

    state.metrics.record_roll(result, start.elapsed());

    result.to_string()
}
