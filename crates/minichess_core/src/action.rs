//! Actions and their annotations: bit flags describing what a move does and
//! the captured payload needed to reverse it exactly.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use crate::types::{Piece, PieceKind, Pos};

/// Move annotation flags packed into a u16.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ActionFlags(pub u16);

impl ActionFlags {
    pub const NONE: ActionFlags = ActionFlags(0);
    /// The destination held an opposing piece.
    pub const CAPTURE: ActionFlags = ActionFlags(1 << 0);
    /// The move leaves the opposing king attacked.
    pub const CHECK: ActionFlags = ActionFlags(1 << 1);
    /// The move checks and the opponent has no legal reply.
    pub const CHECKMATE: ActionFlags = ActionFlags(1 << 2);
    /// The destination held the opposing king. Only meaningful inside the
    /// check-detection simulation and under rules without a check rule.
    pub const KING_CAPTURE: ActionFlags = ActionFlags(1 << 3);
    pub const PROMOTE_KNIGHT: ActionFlags = ActionFlags(1 << 4);
    pub const PROMOTE_BISHOP: ActionFlags = ActionFlags(1 << 5);
    pub const PROMOTE_ROOK: ActionFlags = ActionFlags(1 << 6);
    /// A pawn double-step from its home rank.
    pub const DOUBLE_PAWN: ActionFlags = ActionFlags(1 << 7);

    pub fn contains(self, other: ActionFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: ActionFlags) {
        self.0 |= other.0;
    }

    /// The piece a promoting pawn becomes. Absent an explicit promotion flag
    /// the pawn becomes a queen.
    pub fn promotion(self) -> PieceKind {
        self.underpromotion().unwrap_or(PieceKind::Queen)
    }

    /// The explicitly flagged promotion kind, if any.
    pub fn underpromotion(self) -> Option<PieceKind> {
        if self.contains(ActionFlags::PROMOTE_KNIGHT) {
            Some(PieceKind::Knight)
        } else if self.contains(ActionFlags::PROMOTE_BISHOP) {
            Some(PieceKind::Bishop)
        } else if self.contains(ActionFlags::PROMOTE_ROOK) {
            Some(PieceKind::Rook)
        } else {
            None
        }
    }
}

impl BitOr for ActionFlags {
    type Output = ActionFlags;
    fn bitor(self, rhs: ActionFlags) -> ActionFlags {
        ActionFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for ActionFlags {
    fn bitor_assign(&mut self, rhs: ActionFlags) {
        self.0 |= rhs.0;
    }
}

/// Pieces removed by an action, kept so the action can be reversed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Captured {
    /// The single occupant of the destination tile.
    Single(Piece),
    /// Everything removed by an exploding capture.
    Bundle(CaptureBundle),
}

/// The 3x3 neighborhood removed by an exploding capture, recorded row-major
/// around the destination tile. A None cell was off the board, empty, or a
/// spared occupant; restoring skips it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureBundle {
    pub center: Pos,
    pub cells: [Option<Piece>; CaptureBundle::CELLS],
}

impl CaptureBundle {
    pub const CELLS: usize = 9;

    /// Board position of cell `index`, None when the cell lies off the board.
    pub fn cell_pos(&self, index: usize) -> Option<Pos> {
        assert!(index < CaptureBundle::CELLS, "bundle cell {index} out of range");
        let drow = (index / 3) as i8 - 1;
        let dcol = (index % 3) as i8 - 1;
        self.center.offset(drow, dcol)
    }

    /// Iterates the pieces actually removed.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.cells.iter().flatten()
    }
}

/// A move of one piece from one tile to another, with enough recorded state
/// to apply and reverse it. `agent` is the snapshot of the moving piece as it
/// stood on `from` when the action was proposed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Action {
    pub from: Pos,
    pub to: Pos,
    pub agent: Piece,
    pub captured: Option<Captured>,
    pub flags: ActionFlags,
}

impl Action {
    pub fn new(agent: Piece, from: Pos, to: Pos, flags: ActionFlags) -> Action {
        Action {
            from,
            to,
            agent,
            captured: None,
            flags,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.flags.underpromotion() {
            write!(f, "={}", kind.letter())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn test_flag_operations() {
        let mut flags = ActionFlags::NONE;
        assert!(!flags.contains(ActionFlags::CAPTURE));
        flags.insert(ActionFlags::CAPTURE);
        flags.insert(ActionFlags::CHECK);
        assert!(flags.contains(ActionFlags::CAPTURE));
        assert!(flags.contains(ActionFlags::CHECK));
        assert!(flags.contains(ActionFlags::CAPTURE | ActionFlags::CHECK));
        assert!(!flags.contains(ActionFlags::CHECKMATE));
    }

    #[test]
    fn test_promotion_defaults_to_queen() {
        assert_eq!(ActionFlags::NONE.promotion(), PieceKind::Queen);
        assert_eq!(ActionFlags::NONE.underpromotion(), None);
        assert_eq!(ActionFlags::PROMOTE_KNIGHT.promotion(), PieceKind::Knight);
        assert_eq!(ActionFlags::PROMOTE_BISHOP.promotion(), PieceKind::Bishop);
        assert_eq!(ActionFlags::PROMOTE_ROOK.promotion(), PieceKind::Rook);
        let combined = ActionFlags::CAPTURE | ActionFlags::PROMOTE_ROOK;
        assert_eq!(combined.promotion(), PieceKind::Rook);
    }

    #[test]
    fn test_bundle_cell_positions() {
        let bundle = CaptureBundle {
            center: Pos::new(0, 0),
            cells: [None; CaptureBundle::CELLS],
        };
        // Top-left corner: only the center and its in-board neighbors map.
        assert_eq!(bundle.cell_pos(0), None);
        assert_eq!(bundle.cell_pos(4), Some(Pos::new(0, 0)));
        assert_eq!(bundle.cell_pos(5), Some(Pos::new(0, 1)));
        assert_eq!(bundle.cell_pos(7), Some(Pos::new(1, 0)));
        assert_eq!(bundle.cell_pos(8), Some(Pos::new(1, 1)));
    }

    #[test]
    fn test_action_display() {
        let pawn = Piece::new(Color::White, PieceKind::Pawn, Pos::new(1, 1), 100);
        let quiet = Action::new(pawn, Pos::new(1, 1), Pos::new(0, 1), ActionFlags::NONE);
        assert_eq!(quiet.to_string(), "d2d1");
        let promo = Action::new(
            pawn,
            Pos::new(1, 1),
            Pos::new(0, 1),
            ActionFlags::PROMOTE_ROOK,
        );
        assert_eq!(promo.to_string(), "d2d1=R");
    }
}
