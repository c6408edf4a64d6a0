//! Dark rules: fog-of-war play. There is no check rule, so every generated
//! candidate is playable, capturing the king is a legal move, and the game
//! ends the moment a king leaves the board. Each side sees only its own
//! pieces and the tiles its pieces could move to.

use crate::board::{Board, NUM_TILE_FEATURES, StateVector, Status};
use crate::rules::Ruleset;
use crate::types::{BOARD_SIDE, Color};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dark {}

impl Ruleset for Dark {
    fn uses_check_rule() -> bool {
        false
    }

    fn status(board: &Board<Self>) -> Status {
        if board.king_pos(Color::White).is_none() {
            return Status::BlackWin;
        }
        if board.king_pos(Color::Black).is_none() {
            return Status::WhiteWin;
        }
        if board.legal_actions().is_empty() || board.has_only_kings() {
            Status::Draw
        } else {
            Status::Ongoing
        }
    }
}

impl Board<Dark> {
    /// Tiles `color` can see: its own pieces plus every destination those
    /// pieces could move to right now.
    pub fn visibility_mask(&self, color: Color) -> [[bool; BOARD_SIDE]; BOARD_SIDE] {
        let mut seen = [[false; BOARD_SIDE]; BOARD_SIDE];
        for tile in self.tiles() {
            if let Some(piece) = tile.peek()
                && piece.color == color
            {
                seen[tile.pos.row as usize][tile.pos.col as usize] = true;
            }
        }
        let mut scratch = self.clone();
        for action in scratch.legal_actions_for_color(color, false) {
            seen[action.to.row as usize][action.to.col as usize] = true;
        }
        seen
    }

    /// The state vector as `color` sees it: features on fogged tiles are
    /// zeroed out.
    pub fn state_vector_for(&self, color: Color) -> StateVector {
        let seen = self.visibility_mask(color);
        let mut vector = self.state_vector();
        for (row, seen_row) in seen.iter().enumerate() {
            for (col, &visible) in seen_row.iter().enumerate() {
                if !visible {
                    vector[row][col] = [0.0; NUM_TILE_FEATURES];
                }
            }
        }
        vector
    }
}
