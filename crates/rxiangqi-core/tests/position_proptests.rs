//! ランダムな対局経路に対する性質テスト

use proptest::prelude::*;
use rand::Rng;
use rand_xoshiro::Xoshiro256PlusPlus;
use rand_xoshiro::rand_core::SeedableRng;
use rxiangqi_core::bitboard::Bitboard;
use rxiangqi_core::{Color, Move, PieceType, Position, Rules};

/// seed から決まるランダムな合法手の列を指す
fn random_playout(pos: &mut Position, seed: u64, plies: usize) -> Vec<Move> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut played = Vec::new();
    for _ in 0..plies {
        let moves = pos.legal_move_list();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.random_range(0..moves.len())];
        pos.push(mv);
        played.push(mv);
    }
    played
}

fn arb_rules() -> impl Strategy<Value = Rules> {
    prop_oneof![Just(Rules::default()), Just(Rules::king_safety())]
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 48, .. ProptestConfig::default() })]

    #[test]
    fn prop_no_double_occupancy(seed in any::<u64>(), plies in 0usize..80, rules in arb_rules()) {
        let mut pos = Position::startpos().with_rules(rules);
        random_playout(&mut pos, seed, plies);

        prop_assert!(pos.board().is_consistent());
        let red = pos.pieces_c(Color::Red);
        let black = pos.pieces_c(Color::Black);
        prop_assert!((red & black).is_empty());
        prop_assert_eq!(red | black, pos.occupied());

        let mut union = Bitboard::EMPTY;
        for pt in PieceType::ALL {
            prop_assert!((union & pos.pieces_pt(pt)).is_empty());
            union |= pos.pieces_pt(pt);
        }
        prop_assert_eq!(union, pos.occupied());
    }

    #[test]
    fn prop_notation_roundtrip(seed in any::<u64>(), plies in 0usize..80) {
        let mut pos = Position::startpos();
        random_playout(&mut pos, seed, plies);

        let fen = pos.to_fen();
        let decoded = Position::from_fen(&fen).unwrap();
        prop_assert_eq!(decoded.to_fen(), fen);
        prop_assert_eq!(decoded.board(), pos.board());
    }

    #[test]
    fn prop_generation_is_restartable(seed in any::<u64>(), plies in 0usize..60) {
        let mut pos = Position::startpos();
        random_playout(&mut pos, seed, plies);

        let first: Vec<_> = pos.legal_moves().collect();
        let second: Vec<_> = pos.legal_moves().collect();
        prop_assert_eq!(&first, &second);

        let iter = pos.pseudo_legal_moves();
        let a: Vec<_> = iter.clone().collect();
        let b: Vec<_> = iter.collect();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_legal_moves_never_face_kings(seed in any::<u64>(), plies in 0usize..60) {
        let mut pos = Position::startpos();
        random_playout(&mut pos, seed, plies);

        for mv in pos.legal_move_list() {
            prop_assert!(pos.is_legal(mv));
            prop_assert!(pos.is_pseudo_legal(mv));
            pos.push(mv);
            prop_assert!(!pos.board().kings_facing());
            pos.pop();
        }
    }

    #[test]
    fn prop_king_safety_is_subset(seed in any::<u64>(), plies in 0usize..60) {
        let mut pos = Position::startpos();
        random_playout(&mut pos, seed, plies);

        let strict = pos.clone().with_rules(Rules::king_safety());
        let loose: Vec<_> = pos.legal_moves().collect();
        for mv in strict.legal_moves() {
            prop_assert!(loose.contains(&mv));
            let mut next = strict.clone();
            next.push(mv);
            if let Some(ksq) = next.king_square(strict.side_to_move()) {
                prop_assert!(!next.is_attacked_by(next.side_to_move(), ksq));
            }
        }
    }

    #[test]
    fn prop_push_pop_restores_notation(seed in any::<u64>(), plies in 1usize..60) {
        let mut pos = Position::startpos();
        let start = pos.clone();
        let mut fens = vec![pos.to_fen()];
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        for _ in 0..plies {
            let moves = pos.legal_move_list();
            if moves.is_empty() {
                break;
            }
            pos.push(moves[rng.random_range(0..moves.len())]);
            fens.push(pos.to_fen());
        }

        fens.pop();
        while let Some(expected) = fens.pop() {
            prop_assert!(pos.pop().is_some());
            prop_assert_eq!(pos.to_fen(), expected);
        }
        prop_assert_eq!(pos, start);
    }

    #[test]
    fn prop_flip_is_involution(seed in any::<u64>(), plies in 0usize..60) {
        let mut pos = Position::startpos();
        random_playout(&mut pos, seed, plies);

        let fen = pos.to_fen();
        let flipped = rxiangqi_core::flip_fen(&fen).unwrap();
        prop_assert_eq!(rxiangqi_core::flip_fen(&flipped).unwrap(), fen);

        // 反転しても合法手の数は変わらない
        prop_assert_eq!(pos.flipped().legal_moves().count(), pos.legal_moves().count());
    }
}
