pub mod action;
pub mod atomic;
pub mod board;
pub mod codec;
pub mod dark;
pub mod movegen;
pub mod perft;
pub mod rifle;
pub mod rules;
pub mod types;

pub use action::*;
pub use atomic::*;
pub use board::*;
pub use codec::*;
pub use dark::*;
pub use movegen::{COMPASS_DIRS, KNIGHT_DELTAS, candidates, is_checking_action, leads_to_check};
pub use perft::perft;
pub use rifle::*;
pub use rules::*;
pub use types::*;

// ============================================================================
// Agent trait - implemented by move-selecting players (random, neural, ...)
// ============================================================================

/// A decision-maker that picks one action per turn.
///
/// Agents work from the legality mask over the flat action space, so a policy
/// head can be dropped in without knowing the movement rules. The mask passed
/// to `propose_action` must come from the same position as `board`.
pub trait Agent<R: Ruleset = Gardner> {
    /// Picks an action for the side to move.
    ///
    /// # Arguments
    /// * `board` - the current position
    /// * `mask` - 0/1 legality mask over the action space
    ///
    /// # Returns
    /// The chosen action, or None when the mask admits nothing.
    fn propose_action(&mut self, board: &Board<R>, mask: &[f32]) -> Option<Action>;

    /// The agent's display name for logs and demos.
    fn name(&self) -> &str;
}
