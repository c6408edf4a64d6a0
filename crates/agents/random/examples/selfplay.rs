//! Self-play demo: two random agents play one game to the end.
//!
//! Usage:
//!   cargo run --example selfplay -p random_agent
//!
//!   # Reproducible game
//!   cargo run --example selfplay -p random_agent -- 42

use minichess_core::{ActionFlags, Agent, Board, Color, Status};
use random_agent::RandomAgent;

const MAX_PLIES: usize = 200;

fn main() {
    let seed = std::env::args().nth(1).and_then(|arg| arg.parse::<u64>().ok());
    let (mut white, mut black) = match seed {
        Some(seed) => (
            RandomAgent::from_seed(seed),
            RandomAgent::from_seed(seed.wrapping_add(1)),
        ),
        None => (RandomAgent::new(), RandomAgent::new()),
    };

    let mut board: Board = Board::new();
    println!("{board}");

    let mut plies = 0;
    while plies < MAX_PLIES && board.status() == Status::Ongoing {
        let mask = board.legal_action_mask();
        let side = board.active_color();
        let agent = match side {
            Color::White => &mut white,
            Color::Black => &mut black,
        };
        let Some(action) = agent.propose_action(&board, &mask) else {
            break;
        };
        board.push(action);
        plies += 1;

        let played = board.peek().expect("pushed action is on the stack");
        let note = if played.flags.contains(ActionFlags::CHECKMATE) {
            " mate"
        } else if played.flags.contains(ActionFlags::CHECK) {
            " check"
        } else {
            ""
        };
        println!("{plies:>3}. {side:?} plays {played}{note}");
        println!("{board}");
    }

    println!("Result after {plies} plies: {:?}", board.status());
    println!("Material balance: {}", board.material_balance());
}
