//! Rifle rules: captures are shots. The captured piece is removed and the
//! shooter stays on its own tile, so a capturing pawn never reaches a back
//! rank and never promotes. Quiet moves follow the standard rules.

use crate::action::{Action, ActionFlags, Captured};
use crate::board::Board;
use crate::movegen;
use crate::rules::{Ruleset, standard_apply, standard_revert};
use crate::types::{Piece, PieceKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rifle {}

impl Ruleset for Rifle {
    fn apply(board: &mut Board<Self>, action: &mut Action) {
        if !action.flags.contains(ActionFlags::CAPTURE) {
            standard_apply(board, action);
            return;
        }
        let victim = board
            .get_mut(action.to)
            .pop()
            .expect("capture flagged on an empty tile");
        action.captured = Some(Captured::Single(victim));
    }

    fn revert(board: &mut Board<Self>, action: &Action) {
        match &action.captured {
            // The shooter never left `from`; only the victim comes back.
            Some(Captured::Single(victim)) => board.get_mut(action.to).push(*victim),
            _ => standard_revert(board, action),
        }
    }

    fn candidates(board: &Board<Self>, piece: Piece, out: &mut Vec<Action>) {
        if piece.kind == PieceKind::Pawn {
            let mut unfiltered = Vec::new();
            movegen::candidates(board, piece, &mut unfiltered);
            // A shot onto the far rank never lands, so the flagged promotion
            // choices collapse into the one plain shot.
            out.extend(unfiltered.into_iter().filter(|action| {
                !(action.flags.contains(ActionFlags::CAPTURE)
                    && action.flags.underpromotion().is_some())
            }));
        } else {
            movegen::candidates(board, piece, out);
        }
    }
}
