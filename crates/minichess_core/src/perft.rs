use crate::board::Board;
use crate::rules::Ruleset;

/// Counts leaf nodes of the legal move tree to `depth`. Exercises generation
/// and the push/pop cycle together; the board comes back untouched.
pub fn perft<R: Ruleset>(board: &mut Board<R>, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let actions = board.legal_actions_for_color(board.active_color(), true);
    if depth == 1 {
        return actions.len() as u64;
    }
    let mut nodes = 0;
    for action in actions {
        board.push_unchecked(action);
        nodes += perft(board, depth - 1);
        board.pop();
    }
    nodes
}
