//! The dice roll itself.

use rand::Rng;

/// Lowest face value of the die
pub const MIN_FACE: u8 = 1;
/// Highest face value of the die
pub const MAX_FACE: u8 = 6;

/// Roll a six-sided die.
///
/// Returns a uniformly distributed integer in the closed range [1, 6].
pub fn roll() -> u8 {
    rand::thread_rng().gen_range(MIN_FACE..=MAX_FACE)
}
