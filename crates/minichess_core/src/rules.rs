//! Rule sets. A rule set is a stateless marker type plugged into `Board` that
//! overrides how actions mutate tiles, how candidates are generated, and how
//! terminal states are classified. The default methods implement the standard
//! Gardner rules; variants override only what they change.

use std::fmt;

use crate::action::{Action, ActionFlags, Captured};
use crate::board::{Board, Status};
use crate::movegen;
use crate::types::{BOARD_SIDE, Color, Piece, PieceKind};

/// The marker bounds keep `Board<R>` cloneable and comparable behind a bare
/// `R: Ruleset` bound; the derives on `Board` condition on them.
pub trait Ruleset: Sized + Copy + Eq + fmt::Debug {
    /// Applies the tile mutations for `action`: detach the agent, resolve any
    /// capture into `action.captured`, land, promote.
    fn apply(board: &mut Board<Self>, action: &mut Action) {
        standard_apply(board, action);
    }

    /// Reverses `apply` exactly, using the snapshots stored on `action`.
    fn revert(board: &mut Board<Self>, action: &Action) {
        standard_revert(board, action);
    }

    /// Candidate actions for one piece, before any check filtering.
    fn candidates(board: &Board<Self>, piece: Piece, out: &mut Vec<Action>) {
        movegen::candidates(board, piece, out);
    }

    /// Whether moves that leave the own king capturable are filtered out and
    /// pushes annotate check and checkmate.
    fn uses_check_rule() -> bool {
        true
    }

    /// Terminal-state classification for the current position.
    fn status(board: &Board<Self>) -> Status {
        standard_status(board)
    }
}

/// The standard 5x5 rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gardner {}

impl Ruleset for Gardner {}

/// Moves the agent from `from` to `to`, recording any displaced occupant and
/// replacing a pawn that reaches a back rank with its promotion piece.
pub fn standard_apply<R: Ruleset>(board: &mut Board<R>, action: &mut Action) {
    let agent = board
        .get_mut(action.from)
        .pop()
        .expect("no piece on from-square");
    if let Some(occupant) = board.get_mut(action.to).pop() {
        action.captured = Some(Captured::Single(occupant));
    }
    board.get_mut(action.to).push(agent);
    if agent.kind == PieceKind::Pawn
        && (action.to.row == 0 || action.to.row as usize == BOARD_SIDE - 1)
    {
        let kind = action.flags.promotion();
        let promoted = Piece::new(agent.color, kind, action.to, board.values().value_of(kind));
        board.get_mut(action.to).pop();
        board.get_mut(action.to).push(promoted);
    }
}

/// Puts the agent snapshot back on `from` and the displaced occupant, if any,
/// back on `to`.
pub fn standard_revert<R: Ruleset>(board: &mut Board<R>, action: &Action) {
    board.get_mut(action.from).pop();
    board.get_mut(action.from).push(action.agent);
    board.get_mut(action.to).pop();
    match &action.captured {
        Some(Captured::Single(occupant)) => board.get_mut(action.to).push(*occupant),
        Some(Captured::Bundle(_)) => {
            unreachable!("bundle captures only arise under atomic rules")
        }
        None => {}
    }
}

/// Standard terminal classification: a checkmate flag on the latest action is
/// a win for the side that played it; otherwise a stuck side to move or a
/// board holding nothing but kings is a draw.
pub fn standard_status<R: Ruleset>(board: &Board<R>) -> Status {
    if let Some(last) = board.peek()
        && last.flags.contains(ActionFlags::CHECKMATE)
    {
        return match board.active_color() {
            Color::White => Status::BlackWin,
            Color::Black => Status::WhiteWin,
        };
    }
    if board.legal_actions().is_empty() || board.has_only_kings() {
        Status::Draw
    } else {
        Status::Ongoing
    }
}
