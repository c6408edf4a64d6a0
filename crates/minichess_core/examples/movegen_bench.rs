//! Move generation benchmark for profiling with cargo-flamegraph.
//!
//! This benchmark focuses specifically on move generation performance,
//! running many iterations of legal_actions on various positions.
//!
//! Usage:
//!   cargo flamegraph --example movegen_bench -p minichess_core

use std::time::Instant;

use minichess_core::{Board, Color, PieceKind, Pos};

/// Positions covering different game phases and complexity levels
const TEST_POSITIONS: &[(&str, fn() -> Board)] = &[
    ("Start", start),
    ("Developed", developed),
    ("Promotion race", promotion_race),
    ("Rook endgame", rook_endgame),
    ("Queen check", queen_check),
];

const ITERATIONS: usize = 100_000;

fn start() -> Board {
    Board::new()
}

/// A few opening plies into the game: both center pawns and knights out.
fn developed() -> Board {
    let mut board = Board::new();
    for (from, to) in [
        (Pos::new(3, 2), Pos::new(2, 2)),
        (Pos::new(1, 1), Pos::new(2, 1)),
        (Pos::new(4, 1), Pos::new(2, 0)),
        (Pos::new(0, 1), Pos::new(2, 2)),
    ] {
        let action = board
            .legal_actions()
            .into_iter()
            .find(|action| action.from == from && action.to == to)
            .unwrap_or_else(|| panic!("scripted opening move {from} -> {to} is legal"));
        board.push(action);
    }
    board
}

/// Both sides one step from promoting, with captures into the back rank.
fn promotion_race() -> Board {
    let mut board = Board::empty();
    board.place(Color::White, PieceKind::Pawn, Pos::new(1, 1));
    board.place(Color::White, PieceKind::Pawn, Pos::new(1, 3));
    board.place(Color::White, PieceKind::King, Pos::new(4, 0));
    board.place(Color::Black, PieceKind::Rook, Pos::new(0, 2));
    board.place(Color::Black, PieceKind::Pawn, Pos::new(3, 1));
    board.place(Color::Black, PieceKind::Pawn, Pos::new(3, 3));
    board.place(Color::Black, PieceKind::King, Pos::new(0, 4));
    board
}

fn rook_endgame() -> Board {
    let mut board = Board::empty();
    board.place(Color::White, PieceKind::Rook, Pos::new(3, 1));
    board.place(Color::White, PieceKind::Pawn, Pos::new(3, 4));
    board.place(Color::White, PieceKind::King, Pos::new(4, 3));
    board.place(Color::Black, PieceKind::Rook, Pos::new(1, 2));
    board.place(Color::Black, PieceKind::King, Pos::new(0, 3));
    board
}

/// The side to move is in check, so most candidates get filtered.
fn queen_check() -> Board {
    let mut board = Board::empty();
    board.place(Color::White, PieceKind::King, Pos::new(4, 2));
    board.place(Color::White, PieceKind::Queen, Pos::new(3, 0));
    board.place(Color::White, PieceKind::Knight, Pos::new(3, 3));
    board.place(Color::Black, PieceKind::Queen, Pos::new(0, 2));
    board.place(Color::Black, PieceKind::King, Pos::new(0, 0));
    board
}

fn main() {
    println!("=== Move Generation Benchmark ===");
    println!("Iterations per position: {ITERATIONS}");
    println!();

    let mut total_actions = 0usize;
    let mut total_time = std::time::Duration::ZERO;

    for (name, build) in TEST_POSITIONS {
        let board = build();

        print!("{name:.<20}");

        let start = Instant::now();
        let mut actions_generated = 0usize;

        for _ in 0..ITERATIONS {
            actions_generated += board.legal_actions().len();
        }

        let elapsed = start.elapsed();
        total_actions += actions_generated;
        total_time += elapsed;

        let actions_per_pos = actions_generated as f64 / ITERATIONS as f64;
        let pps = if elapsed.as_secs_f64() > 0.0 {
            ITERATIONS as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {actions_per_pos:>5.1} actions/pos, {pps:>10.0} pos/sec ({elapsed:>8.3?})");
    }

    println!();
    println!("{:=<70}", "");
    let avg_pps = if total_time.as_secs_f64() > 0.0 {
        (ITERATIONS * TEST_POSITIONS.len()) as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_actions} actions in {total_time:.3?} ({avg_pps:.0} positions/sec)");
}
