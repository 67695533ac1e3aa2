//! push/pop による履歴の往復

use rxiangqi_core::{Color, Move, NotationError, Position, STARTPOS_FEN};

#[test]
fn test_push_pop_sequence_restores_every_state() {
    let mut pos = Position::startpos();
    let line = ["h2e2", "h9g7", "h0g2", "i9h9", "i0h0", "b9c7", "h0h6", "c6c5"];

    let mut fens = vec![pos.to_fen()];
    for token in line {
        pos.push_token(token).unwrap();
        fens.push(pos.to_fen());
    }
    assert_eq!(pos.ply(), line.len());
    assert_eq!(pos.fullmove_number(), 5);
    assert_eq!(pos.side_to_move(), Color::Red);

    for (i, token) in line.iter().enumerate().rev() {
        assert_eq!(pos.pop().map(|m| m.to_ucci()), Some(token.to_string()));
        assert_eq!(pos.to_fen(), fens[i]);
    }
    assert_eq!(pos.pop(), None);
    assert_eq!(pos.to_fen(), STARTPOS_FEN);
}

#[test]
fn test_move_stack_matches_pushes() {
    let mut pos = Position::startpos();
    pos.push_token("b2e2").unwrap();
    pos.push(Move::NULL);
    pos.push_token("b0c2").unwrap();

    let tokens: Vec<_> = pos.move_stack().iter().map(|m| m.to_ucci()).collect();
    assert_eq!(tokens, ["b2e2", "0000", "b0c2"]);
    assert_eq!(pos.last_move().map(|m| m.to_ucci()).as_deref(), Some("b0c2"));
}

#[test]
fn test_capture_then_pop() {
    let mut pos = Position::startpos();
    pos.push_token("h2h9").unwrap();
    assert_eq!(pos.halfmove_clock(), 0);
    assert_eq!(pos.pieces_c(Color::Black).count(), 15);

    pos.pop();
    assert_eq!(pos, Position::startpos());
}

#[test]
fn test_clone_is_independent() {
    let mut a = Position::startpos();
    a.push_token("h2e2").unwrap();
    let mut b = a.clone();

    b.push_token("h9g7").unwrap();
    b.pop();
    b.pop();
    assert_eq!(a.ply(), 1);
    assert_eq!(b.ply(), 0);
    assert_ne!(a.to_fen(), b.to_fen());
}

#[test]
fn test_set_fen_resets_history() {
    let mut pos = Position::startpos();
    pos.push_token("h2e2").unwrap();
    pos.set_fen("4k4/9/9/9/9/9/9/9/9/3K5 w - - 0 1").unwrap();
    assert_eq!(pos.ply(), 0);
    assert_eq!(pos.pop(), None);
}

#[test]
fn test_illegal_token_does_not_mutate() {
    let mut pos = Position::startpos();
    let before = pos.clone();
    let err = pos.push_token("e3e5").unwrap_err();
    assert_eq!(
        err,
        NotationError::IllegalMove {
            token: "e3e5".to_string(),
            fen: STARTPOS_FEN.to_string(),
        }
    );
    assert_eq!(pos, before);
}
