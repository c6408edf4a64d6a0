use crate::action::{Action, ActionFlags};
use crate::board::Board;
use crate::rules::Ruleset;
use crate::types::{BOARD_SIDE, Color, Piece, PieceKind, Pos};

/// The eight compass directions as (delta row, delta col) with row 0 at the
/// top: N, NE, E, SE, S, SW, W, NW. Sliding action planes index this order.
pub const COMPASS_DIRS: [(i8, i8); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Knight jumps in fixed order. Knight action planes index this order.
pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
];

const BISHOP_DIRS: [(i8, i8); 4] = [(-1, 1), (1, 1), (1, -1), (-1, -1)];
const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Candidate actions for one piece under the standard movement rules, tagged
/// with capture flags but not yet filtered for check.
pub fn candidates<R: Ruleset>(board: &Board<R>, piece: Piece, out: &mut Vec<Action>) {
    match piece.kind {
        PieceKind::Pawn => gen_pawn(board, piece, out),
        PieceKind::Knight => gen_steps(board, piece, &KNIGHT_DELTAS, out),
        PieceKind::Bishop => gen_slider(board, piece, &BISHOP_DIRS, out),
        PieceKind::Rook => gen_slider(board, piece, &ROOK_DIRS, out),
        PieceKind::Queen => gen_slider(board, piece, &COMPASS_DIRS, out),
        PieceKind::King => gen_steps(board, piece, &COMPASS_DIRS, out),
    }
}

/// Whether playing `action` would leave `color`'s king capturable. Simulates
/// with annotation disabled, scans the opponent's unfiltered replies for a
/// king capture, and restores the board.
pub fn leads_to_check<R: Ruleset>(board: &mut Board<R>, action: &Action, color: Color) -> bool {
    board.push_unchecked(action.clone());
    let exposed = board
        .legal_actions_for_color(color.invert(), false)
        .iter()
        .any(|reply| reply.flags.contains(ActionFlags::KING_CAPTURE));
    board.pop();
    exposed
}

/// Whether `action` by `color` delivers check and, if it does, whether the
/// opponent is then out of legal replies. Simulates with annotation disabled
/// and restores the board.
pub fn is_checking_action<R: Ruleset>(
    board: &mut Board<R>,
    action: &Action,
    color: Color,
) -> (bool, bool) {
    board.push_unchecked(action.clone());
    let checking = board
        .legal_actions_for_color(color, false)
        .iter()
        .any(|reply| reply.flags.contains(ActionFlags::KING_CAPTURE));
    let opponent_stuck = if checking {
        board
            .legal_actions_for_color(color.invert(), true)
            .is_empty()
    } else {
        false
    };
    board.pop();
    (checking, opponent_stuck)
}

fn pawn_dir(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

fn pawn_home_row(color: Color) -> u8 {
    match color {
        Color::White => (BOARD_SIDE - 2) as u8,
        Color::Black => 1,
    }
}

fn promotion_row(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => (BOARD_SIDE - 1) as u8,
    }
}

fn gen_pawn<R: Ruleset>(board: &Board<R>, piece: Piece, out: &mut Vec<Action>) {
    let dir = pawn_dir(piece.color);
    if let Some(to) = piece.pos.offset(dir, 0)
        && !board.get(to).occupied()
    {
        emit_pawn(board, piece, to, ActionFlags::NONE, out);
        if piece.pos.row == pawn_home_row(piece.color)
            && let Some(two) = piece.pos.offset(2 * dir, 0)
            && !board.get(two).occupied()
        {
            emit(board, piece, two, ActionFlags::DOUBLE_PAWN, out);
        }
    }
    for dcol in [-1, 1] {
        if let Some(to) = piece.pos.offset(dir, dcol)
            && board.get(to).capturable(piece.color)
        {
            emit_pawn(board, piece, to, ActionFlags::NONE, out);
        }
    }
}

fn gen_steps<R: Ruleset>(board: &Board<R>, piece: Piece, deltas: &[(i8, i8)], out: &mut Vec<Action>) {
    for &(drow, dcol) in deltas {
        if let Some(to) = piece.pos.offset(drow, dcol) {
            match board.get(to).peek() {
                None => emit(board, piece, to, ActionFlags::NONE, out),
                Some(occ) if occ.color != piece.color => {
                    emit(board, piece, to, ActionFlags::NONE, out)
                }
                Some(_) => {}
            }
        }
    }
}

fn gen_slider<R: Ruleset>(board: &Board<R>, piece: Piece, dirs: &[(i8, i8)], out: &mut Vec<Action>) {
    for &(drow, dcol) in dirs {
        let mut next = piece.pos.offset(drow, dcol);
        while let Some(to) = next {
            match board.get(to).peek() {
                None => emit(board, piece, to, ActionFlags::NONE, out),
                Some(occ) if occ.color != piece.color => {
                    emit(board, piece, to, ActionFlags::NONE, out);
                    break;
                }
                Some(_) => break,
            }
            next = to.offset(drow, dcol);
        }
    }
}

/// Emits one candidate, tagging capture flags from the destination occupant.
fn emit<R: Ruleset>(
    board: &Board<R>,
    piece: Piece,
    to: Pos,
    extra: ActionFlags,
    out: &mut Vec<Action>,
) {
    let mut flags = extra;
    if let Some(occ) = board.get(to).peek() {
        flags.insert(ActionFlags::CAPTURE);
        if occ.kind == PieceKind::King {
            flags.insert(ActionFlags::KING_CAPTURE);
        }
    }
    out.push(Action::new(piece, piece.pos, to, flags));
}

/// Pawn emission: on the promotion rank one candidate per promotion choice,
/// queen first with no flag, then each flagged underpromotion.
fn emit_pawn<R: Ruleset>(
    board: &Board<R>,
    piece: Piece,
    to: Pos,
    extra: ActionFlags,
    out: &mut Vec<Action>,
) {
    if to.row == promotion_row(piece.color) {
        for promo in [
            ActionFlags::NONE,
            ActionFlags::PROMOTE_ROOK,
            ActionFlags::PROMOTE_BISHOP,
            ActionFlags::PROMOTE_KNIGHT,
        ] {
            emit(board, piece, to, extra | promo, out);
        }
    } else {
        emit(board, piece, to, extra, out);
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
