use super::*;
use crate::types::{Color, Pos};

fn capture_from(board: &Board<Atomic>, from: Pos, to: Pos) -> Action {
    board
        .legal_actions()
        .into_iter()
        .find(|action| action.from == from && action.to == to)
        .expect("capture is offered")
}

#[test]
fn test_capture_blast_levels_the_neighborhood() {
    let mut board = Board::<Atomic>::empty();
    board.place(Color::White, PieceKind::Rook, Pos::new(1, 4));
    board.place(Color::White, PieceKind::King, Pos::new(4, 4));
    board.place(Color::Black, PieceKind::Knight, Pos::new(1, 1));
    board.place(Color::Black, PieceKind::Pawn, Pos::new(0, 0));
    board.place(Color::Black, PieceKind::Rook, Pos::new(2, 1));
    board.place(Color::Black, PieceKind::King, Pos::new(0, 4));
    let snapshot = board.clone();

    let action = capture_from(&board, Pos::new(1, 4), Pos::new(1, 1));
    board.push(action);

    // The rook never lands, the knight and the neighboring rook are gone,
    // the pawn in the blast zone survives.
    assert!(!board.get(Pos::new(1, 4)).occupied());
    assert!(!board.get(Pos::new(1, 1)).occupied());
    assert!(!board.get(Pos::new(2, 1)).occupied());
    assert_eq!(
        board.get(Pos::new(0, 0)).peek().map(|piece| piece.kind),
        Some(PieceKind::Pawn)
    );
    assert_eq!(board.material_balance(), -100);

    let recorded = board.peek().expect("pushed action is on the stack");
    let Some(Captured::Bundle(bundle)) = &recorded.captured else {
        panic!("blast records a bundle");
    };
    assert_eq!(bundle.center, Pos::new(1, 1));
    assert!(bundle.cells[0].is_none());
    assert_eq!(bundle.cells[4].map(|piece| piece.kind), Some(PieceKind::Knight));
    assert_eq!(bundle.cells[7].map(|piece| piece.kind), Some(PieceKind::Rook));
    assert_eq!(bundle.pieces().count(), 2);

    board.pop();
    assert_eq!(board, snapshot);
}

#[test]
fn test_center_pawn_dies_while_neighbor_pawn_survives() {
    let mut board = Board::<Atomic>::empty();
    board.place(Color::White, PieceKind::Rook, Pos::new(2, 4));
    board.place(Color::White, PieceKind::King, Pos::new(4, 4));
    board.place(Color::Black, PieceKind::Pawn, Pos::new(2, 2));
    board.place(Color::Black, PieceKind::Pawn, Pos::new(1, 2));
    board.place(Color::Black, PieceKind::Queen, Pos::new(3, 2));
    board.place(Color::Black, PieceKind::King, Pos::new(0, 0));
    let snapshot = board.clone();

    let action = capture_from(&board, Pos::new(2, 4), Pos::new(2, 2));
    board.push(action);

    assert!(!board.get(Pos::new(2, 2)).occupied());
    assert!(!board.get(Pos::new(3, 2)).occupied());
    assert!(board.get(Pos::new(1, 2)).occupied());
    assert_eq!(board.material_balance(), -100);

    let recorded = board.peek().expect("pushed action is on the stack");
    let Some(Captured::Bundle(bundle)) = &recorded.captured else {
        panic!("blast records a bundle");
    };
    assert_eq!(bundle.cells[4].map(|piece| piece.kind), Some(PieceKind::Pawn));
    assert!(bundle.cells[1].is_none());
    assert_eq!(bundle.cells[7].map(|piece| piece.kind), Some(PieceKind::Queen));

    board.pop();
    assert_eq!(board, snapshot);
}

#[test]
fn test_kings_never_capture() {
    let mut board = Board::<Atomic>::empty();
    board.place(Color::White, PieceKind::King, Pos::new(4, 4));
    board.place(Color::White, PieceKind::Knight, Pos::new(3, 2));
    board.place(Color::Black, PieceKind::Knight, Pos::new(1, 1));
    board.place(Color::Black, PieceKind::Knight, Pos::new(3, 4));
    board.place(Color::Black, PieceKind::King, Pos::new(0, 4));

    let legal = board.legal_actions();
    assert!(
        legal
            .iter()
            .all(|action| !(action.from == Pos::new(4, 4)
                && action.flags.contains(ActionFlags::CAPTURE))),
        "the king next to a knight must not be offered the capture"
    );
    assert!(
        legal
            .iter()
            .any(|action| action.from == Pos::new(4, 4))
    );
    assert!(
        legal
            .iter()
            .any(|action| action.from == Pos::new(3, 2)
                && action.to == Pos::new(1, 1)
                && action.flags.contains(ActionFlags::CAPTURE))
    );
}

#[test]
fn test_quiet_promotion_still_applies() {
    let mut board = Board::<Atomic>::empty();
    board.place(Color::White, PieceKind::Pawn, Pos::new(1, 1));
    board.place(Color::White, PieceKind::King, Pos::new(4, 4));
    board.place(Color::Black, PieceKind::King, Pos::new(0, 4));
    let snapshot = board.clone();

    let action = board
        .legal_actions()
        .into_iter()
        .find(|action| {
            action.from == Pos::new(1, 1)
                && action.to == Pos::new(0, 1)
                && action.flags.underpromotion().is_none()
        })
        .expect("queen promotion is offered");
    board.push(action);
    let promoted = board.get(Pos::new(0, 1)).peek().expect("promotion landed");
    assert_eq!(promoted.kind, PieceKind::Queen);
    assert_eq!(promoted.value, 950);

    board.pop();
    assert_eq!(board, snapshot);
}
