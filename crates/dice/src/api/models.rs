//! API request models.

use serde::Deserialize;

/// Query parameters for `GET /rolldice`.
#[derive(Debug, Default, Deserialize)]
pub struct RollParams {
    /// Name of the player rolling the dice; anonymous when absent
    pub player: Option<String>,
}

impl RollParams {
    /// The player name, treating an empty string as absent.
    pub fn player_name(&self) -> Option<&str> {
        self.player.as_deref().filter(|p| !p.is_empty())
    }
}
