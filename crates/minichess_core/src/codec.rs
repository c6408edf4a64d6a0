//! Bijective mapping between actions and a fixed 1225-slot action space,
//! sized for policy heads that emit one logit per (from-tile, move-pattern)
//! pair.
//!
//! Each of the 25 from-tiles owns 49 planes:
//!
//! - planes 0-31: sliding moves, 8 compass directions (the `COMPASS_DIRS`
//!   order) times distances 1 through 4
//! - planes 32-39: knight jumps in `KNIGHT_DELTAS` order
//! - planes 40-48: underpromotions, column delta -1/0/+1 times
//!   knight/bishop/rook
//!
//! Queen promotions carry no promotion flag and ride the sliding planes, so
//! every action is identified by its from-tile, its geometry, and its
//! explicit promotion choice. The promotion row direction is implied by the
//! from-row: row 1 promotes upward, row 3 downward.

use thiserror::Error;

use crate::action::{Action, ActionFlags};
use crate::board::Board;
use crate::movegen::{COMPASS_DIRS, KNIGHT_DELTAS};
use crate::rules::Ruleset;
use crate::types::{BOARD_SIDE, NUM_TILES, PieceKind, Pos};

/// Longest sliding distance on the board.
pub const MAX_SLIDE: usize = BOARD_SIDE - 1;
/// Move-pattern planes per from-tile.
pub const ACTION_PLANES: usize = PROMO_PLANE_BASE + 9;
/// Total size of the flat action space.
pub const ACTION_SPACE: usize = NUM_TILES * ACTION_PLANES;

const KNIGHT_PLANE_BASE: usize = COMPASS_DIRS.len() * MAX_SLIDE;
const PROMO_PLANE_BASE: usize = KNIGHT_PLANE_BASE + KNIGHT_DELTAS.len();
const UNDERPROMO_KINDS: [PieceKind; 3] = [PieceKind::Knight, PieceKind::Bishop, PieceKind::Rook];

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("action vector has length {0}, not the action space size")]
    BadLength(usize),
    #[error("slot {0} does not map to a move on this board")]
    OffBoard(usize),
    #[error("no piece to move at {0}")]
    EmptyFrom(Pos),
}

/// The action-space slot for `action`. Panics when the action's geometry has
/// no slot, which means the action was not produced by move generation.
pub fn slot_of(action: &Action) -> usize {
    let drow = action.to.row as i8 - action.from.row as i8;
    let dcol = action.to.col as i8 - action.from.col as i8;
    let plane = if let Some(kind) = action.flags.underpromotion() {
        underpromotion_plane(action, drow, dcol, kind)
    } else if let Some(index) = KNIGHT_DELTAS.iter().position(|&d| d == (drow, dcol)) {
        KNIGHT_PLANE_BASE + index
    } else {
        slide_plane(action, drow, dcol)
    };
    action.from.index() * ACTION_PLANES + plane
}

/// One-hot vector over the action space with `action`'s slot set.
pub fn encode(action: &Action) -> Vec<f32> {
    let mut vector = vec![0.0; ACTION_SPACE];
    vector[slot_of(action)] = 1.0;
    vector
}

/// Decodes the dominant slot of `vector` against `board`: the slot with the
/// highest value wins, ties going to the lowest index.
pub fn decode<R: Ruleset>(vector: &[f32], board: &Board<R>) -> Result<Action, DecodeError> {
    if vector.len() != ACTION_SPACE {
        return Err(DecodeError::BadLength(vector.len()));
    }
    let mut slot = 0;
    let mut best = f32::NEG_INFINITY;
    for (index, &weight) in vector.iter().enumerate() {
        if weight > best {
            slot = index;
            best = weight;
        }
    }
    decode_slot(slot, board)
}

/// Rebuilds the action a slot stands for, reading the acting piece off the
/// board and re-deriving the capture, king-capture and double-step flags from
/// the position, so a decoded legal action equals its generated counterpart.
pub fn decode_slot<R: Ruleset>(slot: usize, board: &Board<R>) -> Result<Action, DecodeError> {
    if slot >= ACTION_SPACE {
        return Err(DecodeError::OffBoard(slot));
    }
    let from = Pos::from_index(slot / ACTION_PLANES);
    let plane = slot % ACTION_PLANES;
    let ((drow, dcol), promotion) = plane_delta(from, plane).ok_or(DecodeError::OffBoard(slot))?;
    let to = from.offset(drow, dcol).ok_or(DecodeError::OffBoard(slot))?;
    let agent = board
        .get(from)
        .peek()
        .copied()
        .ok_or(DecodeError::EmptyFrom(from))?;
    let mut flags = match promotion {
        Some(PieceKind::Knight) => ActionFlags::PROMOTE_KNIGHT,
        Some(PieceKind::Bishop) => ActionFlags::PROMOTE_BISHOP,
        Some(PieceKind::Rook) => ActionFlags::PROMOTE_ROOK,
        _ => ActionFlags::NONE,
    };
    if let Some(occ) = board.get(to).peek() {
        flags.insert(ActionFlags::CAPTURE);
        if occ.kind == PieceKind::King {
            flags.insert(ActionFlags::KING_CAPTURE);
        }
    }
    if agent.kind == PieceKind::Pawn && dcol == 0 && drow.abs() == 2 {
        flags.insert(ActionFlags::DOUBLE_PAWN);
    }
    Ok(Action::new(agent, from, to, flags))
}

fn underpromotion_plane(action: &Action, drow: i8, dcol: i8, kind: PieceKind) -> usize {
    let expected = if action.from.row == 1 {
        -1
    } else if action.from.row as usize == BOARD_SIDE - 2 {
        1
    } else {
        panic!("promotion from {} cannot reach a back rank", action.from);
    };
    if drow != expected || !(-1..=1).contains(&dcol) {
        panic!("no action slot for {} -> {}", action.from, action.to);
    }
    let kind_index = UNDERPROMO_KINDS
        .iter()
        .position(|&k| k == kind)
        .expect("underpromotion flags name a minor piece");
    PROMO_PLANE_BASE + (dcol + 1) as usize * UNDERPROMO_KINDS.len() + kind_index
}

fn slide_plane(action: &Action, drow: i8, dcol: i8) -> usize {
    let diagonal = drow != 0 && drow.abs() == dcol.abs();
    let straight = (drow == 0) != (dcol == 0);
    let distance = drow.abs().max(dcol.abs()) as usize;
    if !(diagonal || straight) || !(1..=MAX_SLIDE).contains(&distance) {
        panic!("no action slot for {} -> {}", action.from, action.to);
    }
    let direction = COMPASS_DIRS
        .iter()
        .position(|&d| d == (drow.signum(), dcol.signum()))
        .expect("compass directions cover every ray");
    direction * MAX_SLIDE + distance - 1
}

/// The (delta row, delta col) and promotion choice a plane stands for, from
/// the given from-tile. None when the plane needs a promotion direction the
/// from-row does not imply.
fn plane_delta(from: Pos, plane: usize) -> Option<((i8, i8), Option<PieceKind>)> {
    if plane < KNIGHT_PLANE_BASE {
        let (drow, dcol) = COMPASS_DIRS[plane / MAX_SLIDE];
        let distance = (plane % MAX_SLIDE + 1) as i8;
        Some(((drow * distance, dcol * distance), None))
    } else if plane < PROMO_PLANE_BASE {
        Some((KNIGHT_DELTAS[plane - KNIGHT_PLANE_BASE], None))
    } else {
        let promo = plane - PROMO_PLANE_BASE;
        let dcol = (promo / UNDERPROMO_KINDS.len()) as i8 - 1;
        let kind = UNDERPROMO_KINDS[promo % UNDERPROMO_KINDS.len()];
        let drow = if from.row == 1 {
            -1
        } else if from.row as usize == BOARD_SIDE - 2 {
            1
        } else {
            return None;
        };
        Some(((drow, dcol), Some(kind)))
    }
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod codec_tests;
