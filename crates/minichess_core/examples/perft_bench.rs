//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p minichess_core -- [depth] [position]
//!
//! Examples:
//!   # Default: depth 5 from the starting position
//!   cargo flamegraph --example perft_bench -p minichess_core
//!
//!   # Custom depth
//!   cargo flamegraph --example perft_bench -p minichess_core -- 6
//!
//!   # Custom depth on one named position
//!   cargo flamegraph --example perft_bench -p minichess_core -- 5 endgame

use std::env;
use std::time::Instant;

use minichess_core::{Board, Color, PieceKind, Pos, perft};

/// Named test positions for comprehensive profiling
const TEST_POSITIONS: &[(&str, fn() -> Board)] = &[
    ("start", start),
    ("open", open_center),
    ("promotion", promotion_heavy),
    ("endgame", endgame),
];

fn start() -> Board {
    Board::new()
}

/// Center pawns traded away, sliders with open lines.
fn open_center() -> Board {
    let mut board = Board::empty();
    board.place(Color::White, PieceKind::Rook, Pos::new(4, 0));
    board.place(Color::White, PieceKind::Bishop, Pos::new(4, 2));
    board.place(Color::White, PieceKind::Queen, Pos::new(3, 3));
    board.place(Color::White, PieceKind::Pawn, Pos::new(3, 0));
    board.place(Color::White, PieceKind::King, Pos::new(4, 4));
    board.place(Color::Black, PieceKind::Rook, Pos::new(0, 0));
    board.place(Color::Black, PieceKind::Bishop, Pos::new(0, 2));
    board.place(Color::Black, PieceKind::Queen, Pos::new(1, 3));
    board.place(Color::Black, PieceKind::Pawn, Pos::new(1, 0));
    board.place(Color::Black, PieceKind::King, Pos::new(0, 4));
    board
}

fn promotion_heavy() -> Board {
    let mut board = Board::empty();
    board.place(Color::White, PieceKind::Pawn, Pos::new(1, 0));
    board.place(Color::White, PieceKind::Pawn, Pos::new(1, 2));
    board.place(Color::White, PieceKind::King, Pos::new(4, 4));
    board.place(Color::Black, PieceKind::Knight, Pos::new(0, 1));
    board.place(Color::Black, PieceKind::Pawn, Pos::new(3, 2));
    board.place(Color::Black, PieceKind::Pawn, Pos::new(3, 4));
    board.place(Color::Black, PieceKind::King, Pos::new(0, 4));
    board
}

fn endgame() -> Board {
    let mut board = Board::empty();
    board.place(Color::White, PieceKind::Rook, Pos::new(2, 1));
    board.place(Color::White, PieceKind::King, Pos::new(4, 2));
    board.place(Color::Black, PieceKind::Knight, Pos::new(1, 3));
    board.place(Color::Black, PieceKind::King, Pos::new(0, 2));
    board
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u32 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(5);

    if let Some(name) = args.get(2) {
        run_single_position(name, depth);
    } else {
        run_all_positions(depth);
    }
}

fn run_single_position(name: &str, depth: u32) {
    let Some((_, build)) = TEST_POSITIONS.iter().find(|(known, _)| *known == name) else {
        eprintln!("unknown position {name:?}; known positions:");
        for (known, _) in TEST_POSITIONS {
            eprintln!("  {known}");
        }
        std::process::exit(1);
    };
    let mut board = build();

    println!("Position: {name}");
    println!("Depth: {depth}");
    println!();

    // Warm-up run at lower depth
    if depth > 2 {
        let _ = perft(&mut board, depth.saturating_sub(2));
    }

    let start = Instant::now();
    let nodes = perft(&mut board, depth);
    let elapsed = start.elapsed();

    let nps = if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };

    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {nps:.0}");
}

fn run_all_positions(depth: u32) {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for (name, build) in TEST_POSITIONS {
        let mut board = build();

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&mut board, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        let nps = if elapsed.as_secs_f64() > 0.0 {
            nodes as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {nodes:>12} nodes in {elapsed:>8.3?} ({nps:>10.0} nps)");
    }

    println!();
    println!("{:=<70}", "");
    let total_nps = if total_time.as_secs_f64() > 0.0 {
        total_nodes as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_nodes} nodes in {total_time:.3?} ({total_nps:.0} nps)");
}
