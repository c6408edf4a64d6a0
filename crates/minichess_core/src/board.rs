use std::fmt;
use std::marker::PhantomData;

use crate::action::{Action, ActionFlags};
use crate::codec;
use crate::movegen;
use crate::rules::{Gardner, Ruleset};
use crate::types::{BOARD_SIDE, Color, NUM_TILES, Piece, PieceKind, PieceValues, Pos};

/// Features per tile in the state vector: six piece kinds for each color.
pub const NUM_TILE_FEATURES: usize = 12;

/// One-hot piece planes per tile, indexed `[row][col][feature]`.
pub type StateVector = [[[f32; NUM_TILE_FEATURES]; BOARD_SIDE]; BOARD_SIDE];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Ongoing,
    WhiteWin,
    BlackWin,
    Draw,
}

/// A board square. Holds at most one piece and stamps its position on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub color: Color,
    pub pos: Pos,
    piece: Option<Piece>,
}

impl Tile {
    fn new(color: Color, pos: Pos) -> Tile {
        Tile {
            color,
            pos,
            piece: None,
        }
    }

    pub fn occupied(&self) -> bool {
        self.piece.is_some()
    }

    /// Whether `by` could capture here: occupied by the other color.
    pub fn capturable(&self, by: Color) -> bool {
        matches!(self.piece, Some(piece) if piece.color != by)
    }

    /// Places `piece` here, stamping its position. Any previous occupant is
    /// dropped.
    pub fn push(&mut self, mut piece: Piece) {
        piece.pos = self.pos;
        self.piece = Some(piece);
    }

    pub fn pop(&mut self) -> Option<Piece> {
        self.piece.take()
    }

    pub fn peek(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }
}

/// The 5x5 board: tiles, the side to move, and the action history that makes
/// every push reversible. The rule set parameter selects the variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board<R: Ruleset = Gardner> {
    tiles: [Tile; NUM_TILES],
    active_color: Color,
    history: Vec<Action>,
    values: PieceValues,
    rules: PhantomData<R>,
}

const BACK_RANK: [PieceKind; BOARD_SIDE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
];

impl<R: Ruleset> Board<R> {
    /// The starting position with default material values.
    pub fn new() -> Self {
        Self::with_values(PieceValues::default())
    }

    pub fn with_values(values: PieceValues) -> Self {
        let mut board = Self::empty_with_values(values);
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.place(Color::Black, kind, Pos::new(0, col));
            board.place(Color::White, kind, Pos::new(BOARD_SIDE - 1, col));
        }
        for col in 0..BOARD_SIDE {
            board.place(Color::Black, PieceKind::Pawn, Pos::new(1, col));
            board.place(Color::White, PieceKind::Pawn, Pos::new(BOARD_SIDE - 2, col));
        }
        board
    }

    /// An empty board, for composing positions tile by tile.
    pub fn empty() -> Self {
        Self::empty_with_values(PieceValues::default())
    }

    pub fn empty_with_values(values: PieceValues) -> Self {
        let tiles = std::array::from_fn(|index| {
            let color = if index % 2 == 0 {
                Color::Black
            } else {
                Color::White
            };
            Tile::new(color, Pos::from_index(index))
        });
        Board {
            tiles,
            active_color: Color::White,
            history: Vec::new(),
            values,
            rules: PhantomData,
        }
    }

    pub fn get(&self, pos: Pos) -> &Tile {
        &self.tiles[pos.index()]
    }

    pub fn get_mut(&mut self, pos: Pos) -> &mut Tile {
        &mut self.tiles[pos.index()]
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Constructs a piece from the board's value table and places it.
    pub fn place(&mut self, color: Color, kind: PieceKind, pos: Pos) {
        let piece = Piece::new(color, kind, pos, self.values.value_of(kind));
        self.get_mut(pos).push(piece);
    }

    pub fn active_color(&self) -> Color {
        self.active_color
    }

    /// Overrides the side to move, for composed positions.
    pub fn set_active_color(&mut self, color: Color) {
        self.active_color = color;
    }

    pub fn values(&self) -> PieceValues {
        self.values
    }

    pub fn history(&self) -> &[Action] {
        &self.history
    }

    /// Applies `action`, annotating it with check and checkmate flags first,
    /// and flips the side to move. Reversed exactly by `pop`.
    pub fn push(&mut self, action: Action) {
        self.push_inner(action, true);
    }

    /// `push` without the check and checkmate annotation pass. The legality
    /// simulations use this so that detection never recurses into itself.
    pub fn push_unchecked(&mut self, action: Action) {
        self.push_inner(action, false);
    }

    fn push_inner(&mut self, mut action: Action, check_for_check: bool) {
        if check_for_check && R::uses_check_rule() {
            let mover = self.active_color;
            let (checking, opponent_stuck) = movegen::is_checking_action(self, &action, mover);
            if checking {
                action.flags.insert(ActionFlags::CHECK);
                if opponent_stuck {
                    action.flags.insert(ActionFlags::CHECKMATE);
                }
            }
        }
        R::apply(self, &mut action);
        self.history.push(action);
        self.active_color = self.active_color.invert();
    }

    /// Reverses the most recent action and flips the side to move back.
    /// Returns the reversed action, or None when the history is empty.
    pub fn pop(&mut self) -> Option<Action> {
        let action = self.history.pop()?;
        R::revert(self, &action);
        self.active_color = self.active_color.invert();
        Some(action)
    }

    pub fn peek(&self) -> Option<&Action> {
        self.history.last()
    }

    /// Legal actions for the side to move.
    pub fn legal_actions(&self) -> Vec<Action> {
        let mut scratch = self.clone();
        scratch.legal_actions_for_color(self.active_color, true)
    }

    /// Actions for `color`; with `filter_for_check` the candidates that leave
    /// the own king capturable are removed. Filtering simulates on the board
    /// itself and restores it before returning.
    pub fn legal_actions_for_color(&mut self, color: Color, filter_for_check: bool) -> Vec<Action> {
        let mut out = Vec::new();
        for index in 0..NUM_TILES {
            if let Some(&piece) = self.tiles[index].peek()
                && piece.color == color
            {
                R::candidates(self, piece, &mut out);
            }
        }
        if filter_for_check && R::uses_check_rule() {
            out.retain(|action| !movegen::leads_to_check(self, action, color));
        }
        out
    }

    /// Flat 0/1 mask over the action space with the legal slots set.
    pub fn legal_action_mask(&self) -> Vec<f32> {
        let mut mask = vec![0.0; codec::ACTION_SPACE];
        for action in self.legal_actions() {
            mask[codec::slot_of(&action)] = 1.0;
        }
        mask
    }

    /// One-hot piece features per tile: planes 0-5 are White pawn through
    /// king, planes 6-11 the same for Black. Empty tiles stay all zero.
    pub fn state_vector(&self) -> StateVector {
        let mut out = [[[0.0; NUM_TILE_FEATURES]; BOARD_SIDE]; BOARD_SIDE];
        for tile in self.tiles.iter() {
            if let Some(piece) = tile.peek() {
                let feature = piece.kind.idx() + 6 * piece.color.idx();
                out[tile.pos.row as usize][tile.pos.col as usize][feature] = 1.0;
            }
        }
        out
    }

    pub fn status(&self) -> Status {
        R::status(self)
    }

    /// Sum of signed piece values: positive when White is ahead.
    pub fn material_balance(&self) -> i32 {
        self.tiles
            .iter()
            .filter_map(|tile| tile.peek())
            .map(|piece| piece.signed_value())
            .sum()
    }

    /// Whether every piece left on the board is a king.
    pub fn has_only_kings(&self) -> bool {
        self.tiles
            .iter()
            .filter_map(|tile| tile.peek())
            .all(|piece| piece.kind == PieceKind::King)
    }

    pub fn king_pos(&self, color: Color) -> Option<Pos> {
        self.tiles
            .iter()
            .filter_map(|tile| tile.peek())
            .find(|piece| piece.color == color && piece.kind == PieceKind::King)
            .map(|piece| piece.pos)
    }
}

impl<R: Ruleset> Default for Board<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Ruleset> fmt::Display for Board<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIDE {
            for col in 0..BOARD_SIDE {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.get(Pos::new(row, col)).peek() {
                    Some(piece) => write!(f, "{piece}")?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
