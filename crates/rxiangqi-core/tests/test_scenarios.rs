//! 局面ごとの合法手集合のテスト

use std::collections::BTreeSet;

use rxiangqi_core::{NotationError, Position};

fn legal_set(fen: &str) -> BTreeSet<String> {
    let pos = Position::from_fen(fen).unwrap();
    pos.legal_moves().map(|m| m.to_ucci()).collect()
}

fn set(tokens: &[&str]) -> BTreeSet<String> {
    tokens.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_pawns_before_river_only_advance() {
    assert_eq!(
        legal_set("9/9/9/9/9/9/P1P1P1P1P/9/9/9 w - - 0 1"),
        set(&["a3a4", "c3c4", "e3e4", "g3g4", "i3i4"])
    );
}

#[test]
fn test_pawn_across_river_gains_sideways_moves() {
    assert_eq!(
        legal_set("9/9/9/9/3rP4/9/P1P3P1P/9/9/9 w - - 0 1"),
        set(&["a3a4", "c3c4", "e5d5", "e5f5", "e5e6", "g3g4", "i3i4"])
    );
}

#[test]
fn test_black_pawns() {
    assert_eq!(
        legal_set("9/9/9/p1p3p1p/9/4pR3/9/9/9/9 b - - 0 1"),
        set(&["a6a5", "c6c5", "e4d4", "e4f4", "e4e3", "g6g5", "i6i5"])
    );
}

#[test]
fn test_cannon_with_screens() {
    let expected = set(&[
        // 兵 e7, e5
        "e7e8", "e7d7", "e7f7", "e5e6", "e5d5", "e5f5",
        // 車 c3
        "c3b3", "c3a3", "c3d3", "c3c4", "c3c5", "c3c6", "c3c7", "c3c8", "c3c9", "c3c2",
        "c3c1", "c3c0",
        // 炮 e3: 移動は駒の手前まで、取りは c3 を砲台に a3
        "e3d3", "e3f3", "e3g3", "e3h3", "e3i3", "e3e4", "e3e2", "e3a3",
        // 馬 e1
        "e1f3", "e1d3", "e1g2", "e1g0", "e1c2", "e1c0",
    ]);
    assert_eq!(expected.len(), 32);
    assert_eq!(
        legal_set("9/9/4P4/9/4P4/9/p1R1C4/9/4H4/9 w - - 0 1"),
        expected
    );
}

#[test]
fn test_elephant_eyes() {
    // c0 は帥 d1 が、g0 は卒 f1 が相の目をふさぐ
    assert_eq!(
        legal_set("9/9/9/9/9/9/9/4E4/3K1p3/9 w - - 0 1"),
        set(&["d1e1", "d1d2", "d1d0", "e2c4", "e2g4"])
    );
}

#[test]
fn test_horse_legs() {
    // 馬 e4 の脚: e5 と d4 をふさぐと d6 f6 c5 c3 への跳びが消える
    let open = legal_set("9/9/9/9/9/4H4/9/9/9/9 w - - 0 1");
    assert_eq!(open.len(), 8);

    let blocked = legal_set("9/9/9/9/4p4/3pH4/9/9/9/9 w - - 0 1");
    assert_eq!(blocked, set(&["e4g5", "e4g3", "e4f2", "e4d2"]));
}

#[test]
fn test_roundtrip_notation() {
    let fen = "r1eakaeh1/9/1ch4cr/p1p1p3p/6p2/9/P1P1P1P1P/1C2C1H2/9/RHEAKAER1 w - - 0 4";
    assert_eq!(Position::from_fen(fen).unwrap().to_fen(), fen);
}

#[test]
fn test_rejects_foreign_piece_letters() {
    let fen = "r1bakabn1/9/1cn4cr/p1p1p3p/6p2/9/P1P1P1P1P/1C2C1N2/9/RNBAKABR1 w - - 0 4";
    assert!(matches!(
        Position::from_fen(fen),
        Err(NotationError::MalformedNotation(_))
    ));
}

#[test]
fn test_flying_generals_invariant_in_generated_moves() {
    let pos = Position::from_fen("3k5/9/9/9/9/4R4/9/9/9/4K4 w - - 0 1").unwrap();
    // 車 e4 が e筋をふさいでいるが、将は d筋なので車はどこへでも動ける
    assert!(pos.legal_moves().any(|m| m.to_ucci() == "e4a4"));

    let pos = Position::from_fen("4k4/9/9/9/9/4R4/9/9/9/4K4 w - - 0 1").unwrap();
    for mv in pos.legal_moves() {
        let mut next = pos.clone();
        next.push(mv);
        assert!(!next.board().kings_facing(), "{mv}");
    }
    assert!(!pos.legal_moves().any(|m| m.to_ucci() == "e4a4"));
}
