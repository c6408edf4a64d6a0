use super::*;
use minichess_core::{Atomic, Color, Gardner, PieceKind, Pos};

#[test]
fn random_agent_returns_legal_action() {
    let mut agent = RandomAgent::new();
    let board = Board::<Gardner>::new();
    let mask = board.legal_action_mask();

    let action = agent
        .propose_action(&board, &mask)
        .expect("the start position has legal actions");

    assert!(board.legal_actions().contains(&action));
}

#[test]
fn random_agent_handles_checkmate() {
    let mut agent = RandomAgent::new();
    // Queen on b2 covered by the king, black king mated in the corner.
    let mut board = Board::<Gardner>::empty();
    board.place(Color::White, PieceKind::Queen, Pos::new(1, 3));
    board.place(Color::White, PieceKind::King, Pos::new(2, 2));
    board.place(Color::Black, PieceKind::King, Pos::new(0, 4));
    board.set_active_color(Color::Black);

    let mask = board.legal_action_mask();
    assert_eq!(agent.propose_action(&board, &mask), None);
}

#[test]
fn random_agent_handles_stalemate() {
    let mut agent = RandomAgent::new();
    let mut board = Board::<Gardner>::empty();
    board.place(Color::Black, PieceKind::King, Pos::new(0, 0));
    board.place(Color::White, PieceKind::Queen, Pos::new(2, 1));
    board.place(Color::White, PieceKind::King, Pos::new(4, 4));
    board.set_active_color(Color::Black);

    let mask = board.legal_action_mask();
    assert_eq!(agent.propose_action(&board, &mask), None);
}

#[test]
fn random_agent_is_deterministic_with_a_seed() {
    let board = Board::<Gardner>::new();
    let mask = board.legal_action_mask();
    let mut first = RandomAgent::from_seed(5);
    let mut second = RandomAgent::from_seed(5);

    for _ in 0..10 {
        assert_eq!(
            first.propose_action(&board, &mask),
            second.propose_action(&board, &mask)
        );
    }
}

#[test]
fn random_agent_plays_any_rule_set() {
    let mut agent = RandomAgent::from_seed(11);
    let board = Board::<Atomic>::new();
    let mask = board.legal_action_mask();

    let action = agent
        .propose_action(&board, &mask)
        .expect("the start position has legal actions");

    assert!(board.legal_actions().contains(&action));
}
