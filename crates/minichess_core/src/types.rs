use std::fmt;

use thiserror::Error;

/// Side length of the board. Every other geometric constant derives from it.
pub const BOARD_SIDE: usize = 5;
/// Number of tiles on the board.
pub const NUM_TILES: usize = BOARD_SIDE * BOARD_SIDE;

/// Column letters in board order: column 0 is the e-file, column 4 the a-file.
pub const COLUMN_LETTERS: [char; BOARD_SIDE] = ['e', 'd', 'c', 'b', 'a'];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn invert(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub fn idx(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// A board coordinate. Row 0 is the top rank, column 0 the e-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Pos {
        assert!(
            row < BOARD_SIDE && col < BOARD_SIDE,
            "position ({row}, {col}) is off the board"
        );
        Pos {
            row: row as u8,
            col: col as u8,
        }
    }

    /// Row-major tile index in `0..NUM_TILES`.
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIDE + self.col as usize
    }

    pub fn from_index(index: usize) -> Pos {
        assert!(index < NUM_TILES, "tile index {index} is off the board");
        Pos {
            row: (index / BOARD_SIDE) as u8,
            col: (index % BOARD_SIDE) as u8,
        }
    }

    /// Offsets by (delta row, delta col), returning None off the board.
    pub fn offset(self, drow: i8, dcol: i8) -> Option<Pos> {
        let row = self.row as i8 + drow;
        let col = self.col as i8 + dcol;
        if (0..BOARD_SIDE as i8).contains(&row) && (0..BOARD_SIDE as i8).contains(&col) {
            Some(Pos {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Parses a two-character coordinate: file letter then rank digit,
    /// e.g. "e1" for the top-left tile. Row = rank digit - 1.
    pub fn from_coord(coord: &str) -> Result<Pos, CoordParseError> {
        let bytes = coord.as_bytes();
        if bytes.len() != 2 {
            return Err(CoordParseError::Length(coord.to_string()));
        }
        let file = bytes[0].to_ascii_lowercase() as char;
        let col = COLUMN_LETTERS
            .iter()
            .position(|&letter| letter == file)
            .ok_or(CoordParseError::File(file))?;
        let rank = bytes[1] as char;
        let digit = rank.to_digit(10).ok_or(CoordParseError::Rank(rank))?;
        if !(1..=BOARD_SIDE as u32).contains(&digit) {
            return Err(CoordParseError::Rank(rank));
        }
        Ok(Pos {
            row: digit as u8 - 1,
            col: col as u8,
        })
    }

    pub fn to_coord(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", COLUMN_LETTERS[self.col as usize], self.row + 1)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CoordParseError {
    #[error("coordinate {0:?} must be a file letter followed by a rank digit")]
    Length(String),
    #[error("unknown file letter {0:?}")]
    File(char),
    #[error("rank {0:?} is off the board")]
    Rank(char),
}

/// A piece as held by a tile. The stored position always matches the holding
/// tile, except transiently while the piece is detached during a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub pos: Pos,
    pub value: i32,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind, pos: Pos, value: i32) -> Piece {
        Piece {
            color,
            kind,
            pos,
            value,
        }
    }

    /// Material value signed by color: positive for White, negative for Black.
    pub fn signed_value(self) -> i32 {
        match self.color {
            Color::White => self.value,
            Color::Black => -self.value,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        };
        write!(f, "{letter}")
    }
}

/// Material value table, passed to the board at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceValues {
    pub pawn: i32,
    pub knight: i32,
    pub bishop: i32,
    pub rook: i32,
    pub queen: i32,
    pub king: i32,
}

impl PieceValues {
    pub fn value_of(self, kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Pawn => self.pawn,
            PieceKind::Knight => self.knight,
            PieceKind::Bishop => self.bishop,
            PieceKind::Rook => self.rook,
            PieceKind::Queen => self.queen,
            PieceKind::King => self.king,
        }
    }
}

impl Default for PieceValues {
    fn default() -> Self {
        PieceValues {
            pawn: 100,
            knight: 305,
            bishop: 333,
            rook: 563,
            queen: 950,
            king: 10000,
        }
    }
}
