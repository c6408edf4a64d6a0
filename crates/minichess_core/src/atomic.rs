//! Atomic rules: every capture detonates. The mover and the captured piece
//! are always destroyed, along with every non-pawn occupant of the 3x3
//! neighborhood around the destination. Pawns caught in the blast survive
//! unless they are the captured piece itself. Kings never capture; the blast
//! would take them with it.
//!
//! Quiet moves are resolved by the standard rules, promotion included. A
//! capturing pawn never promotes because it never lands.

use crate::action::{Action, ActionFlags, CaptureBundle, Captured};
use crate::board::Board;
use crate::movegen;
use crate::rules::{Ruleset, standard_apply, standard_revert};
use crate::types::{Piece, PieceKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Atomic {}

impl Ruleset for Atomic {
    fn apply(board: &mut Board<Self>, action: &mut Action) {
        if !action.flags.contains(ActionFlags::CAPTURE) {
            standard_apply(board, action);
            return;
        }
        // The mover is consumed by its own blast; only the action snapshot
        // keeps it.
        board.get_mut(action.from).pop();
        let center = action.to;
        let mut cells = [None; CaptureBundle::CELLS];
        for (index, cell) in cells.iter_mut().enumerate() {
            let drow = (index / 3) as i8 - 1;
            let dcol = (index % 3) as i8 - 1;
            let Some(pos) = center.offset(drow, dcol) else {
                continue;
            };
            if pos == center {
                *cell = Some(
                    board
                        .get_mut(pos)
                        .pop()
                        .expect("capture flagged on an empty tile"),
                );
            } else if let Some(occ) = board.get(pos).peek()
                && occ.kind != PieceKind::Pawn
            {
                *cell = board.get_mut(pos).pop();
            }
        }
        action.captured = Some(Captured::Bundle(CaptureBundle { center, cells }));
    }

    fn revert(board: &mut Board<Self>, action: &Action) {
        let Some(Captured::Bundle(bundle)) = &action.captured else {
            standard_revert(board, action);
            return;
        };
        board.get_mut(action.from).pop();
        board.get_mut(action.from).push(action.agent);
        for index in 0..CaptureBundle::CELLS {
            if let Some(piece) = bundle.cells[index] {
                let pos = bundle
                    .cell_pos(index)
                    .expect("a recorded blast victim stood on the board");
                board.get_mut(pos).push(piece);
            }
        }
    }

    fn candidates(board: &Board<Self>, piece: Piece, out: &mut Vec<Action>) {
        if piece.kind == PieceKind::King {
            let mut unfiltered = Vec::new();
            movegen::candidates(board, piece, &mut unfiltered);
            out.extend(
                unfiltered
                    .into_iter()
                    .filter(|action| !action.flags.contains(ActionFlags::CAPTURE)),
            );
        } else {
            movegen::candidates(board, piece, out);
        }
    }
}

#[cfg(test)]
#[path = "atomic_tests.rs"]
mod atomic_tests;
