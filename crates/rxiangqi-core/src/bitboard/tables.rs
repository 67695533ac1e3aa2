//! 固定の利きテーブルとBitboardマスク
//!
//! 盤上の駒配置に依存しない利き（帥・仕・兵）と、九宮・河・相の点などの
//! 領域マスクはコンパイル時に計算する。

use crate::types::{Color, File, Rank, Square};

use super::Bitboard;

/// 筋のBitboard
pub static FILE_BB: [Bitboard; File::NUM] = init_file_bb();

/// 段のBitboard
pub static RANK_BB: [Bitboard; Rank::NUM] = init_rank_bb();

/// 九宮 [Color]
pub static PALACE_BB: [Bitboard; Color::NUM] = init_palace_bb();

/// 自陣（河の手前）[Color]
pub static OWN_HALF_BB: [Bitboard; Color::NUM] = init_own_half_bb();

/// 相/象が立てる7点 [Color]
pub static ELEPHANT_POINTS_BB: [Bitboard; Color::NUM] = init_elephant_points_bb();

/// 帥/将の利き [Color][Square]
pub static KING_EFFECT: [[Bitboard; Square::NUM]; Color::NUM] = init_king_effect();

/// 仕/士の利き [Color][Square]
pub static ADVISOR_EFFECT: [[Bitboard; Square::NUM]; Color::NUM] = init_advisor_effect();

/// 兵/卒の利き [Color][Square]
pub static PAWN_EFFECT: [[Bitboard; Square::NUM]; Color::NUM] = init_pawn_effect();

/// 帥/将の利き（九宮内の縦横1マス）
#[inline]
pub fn king_effect(c: Color, sq: Square) -> Bitboard {
    KING_EFFECT[c.index()][sq.index()]
}

/// 仕/士の利き（九宮内の斜め1マス）
#[inline]
pub fn advisor_effect(c: Color, sq: Square) -> Bitboard {
    ADVISOR_EFFECT[c.index()][sq.index()]
}

/// 兵/卒の利き（前1マス、河を越えたら左右1マスも）
#[inline]
pub fn pawn_effect(c: Color, sq: Square) -> Bitboard {
    PAWN_EFFECT[c.index()][sq.index()]
}

// === 初期化関数 ===

const fn init_file_bb() -> [Bitboard; File::NUM] {
    let mut result = [Bitboard::EMPTY; File::NUM];
    let mut file = 0;
    while file < File::NUM {
        let mut rank = 0;
        while rank < Rank::NUM {
            result[file] = result[file].with(Square::new(File::ALL[file], Rank::ALL[rank]));
            rank += 1;
        }
        file += 1;
    }
    result
}

const fn init_rank_bb() -> [Bitboard; Rank::NUM] {
    let mut result = [Bitboard::EMPTY; Rank::NUM];
    let mut rank = 0;
    while rank < Rank::NUM {
        let mut file = 0;
        while file < File::NUM {
            result[rank] = result[rank].with(Square::new(File::ALL[file], Rank::ALL[rank]));
            file += 1;
        }
        rank += 1;
    }
    result
}

/// 筋の範囲 [f0, f1] と段の範囲 [r0, r1] の矩形
const fn rect_bb(f0: usize, f1: usize, r0: usize, r1: usize) -> Bitboard {
    let mut bb = Bitboard::EMPTY;
    let mut rank = r0;
    while rank <= r1 {
        let mut file = f0;
        while file <= f1 {
            bb = bb.with(Square::new(File::ALL[file], Rank::ALL[rank]));
            file += 1;
        }
        rank += 1;
    }
    bb
}

const fn init_palace_bb() -> [Bitboard; Color::NUM] {
    // d-f筋、紅は0-2段、黒は7-9段
    [rect_bb(3, 5, 0, 2), rect_bb(3, 5, 7, 9)]
}

const fn init_own_half_bb() -> [Bitboard; Color::NUM] {
    [rect_bb(0, 8, 0, 4), rect_bb(0, 8, 5, 9)]
}

const fn init_elephant_points_bb() -> [Bitboard; Color::NUM] {
    // 紅: c0 g0 a2 e2 i2 c4 g4（黒はその上下反転）
    const POINTS: [(usize, usize); 7] = [(2, 0), (6, 0), (0, 2), (4, 2), (8, 2), (2, 4), (6, 4)];
    let mut result = [Bitboard::EMPTY; Color::NUM];
    let mut i = 0;
    while i < POINTS.len() {
        let (file, rank) = POINTS[i];
        let sq = Square::new(File::ALL[file], Rank::ALL[rank]);
        result[Color::Red.index()] = result[Color::Red.index()].with(sq);
        result[Color::Black.index()] = result[Color::Black.index()].with(sq.flip());
        i += 1;
    }
    result
}

/// 差分集合 `deltas` の1歩先のうち `zone` 内のものを集める（`from` 自身も `zone` 内に限る）
const fn step_effect(from: Square, deltas: &[(i32, i32)], zone: Bitboard) -> Bitboard {
    let mut bb = Bitboard::EMPTY;
    if !zone.contains(from) {
        return bb;
    }
    let mut i = 0;
    while i < deltas.len() {
        if let Some(to) = from.offset(deltas[i].0, deltas[i].1) {
            if zone.contains(to) {
                bb = bb.with(to);
            }
        }
        i += 1;
    }
    bb
}

const fn init_king_effect() -> [[Bitboard; Square::NUM]; Color::NUM] {
    const DELTAS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
    let palace = init_palace_bb();
    let mut result = [[Bitboard::EMPTY; Square::NUM]; Color::NUM];
    let mut c = 0;
    while c < Color::NUM {
        let mut sq = 0;
        while sq < Square::NUM {
            result[c][sq] = step_effect(Square::from_u8_unchecked(sq as u8), &DELTAS, palace[c]);
            sq += 1;
        }
        c += 1;
    }
    result
}

const fn init_advisor_effect() -> [[Bitboard; Square::NUM]; Color::NUM] {
    const DELTAS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
    let palace = init_palace_bb();
    let mut result = [[Bitboard::EMPTY; Square::NUM]; Color::NUM];
    let mut c = 0;
    while c < Color::NUM {
        let mut sq = 0;
        while sq < Square::NUM {
            result[c][sq] = step_effect(Square::from_u8_unchecked(sq as u8), &DELTAS, palace[c]);
            sq += 1;
        }
        c += 1;
    }
    result
}

const fn init_pawn_effect() -> [[Bitboard; Square::NUM]; Color::NUM] {
    let mut result = [[Bitboard::EMPTY; Square::NUM]; Color::NUM];
    let mut c = 0;
    while c < Color::NUM {
        let color = Color::ALL[c];
        let mut sq = 0;
        while sq < Square::NUM {
            let from = Square::from_u8_unchecked(sq as u8);
            let mut bb = Bitboard::EMPTY;
            // 前進
            if let Some(to) = from.offset(0, color.forward()) {
                bb = bb.with(to);
            }
            // 河を越えたら横にも動ける
            if from.rank().is_across_river(color) {
                if let Some(to) = from.offset(1, 0) {
                    bb = bb.with(to);
                }
                if let Some(to) = from.offset(-1, 0) {
                    bb = bb.with(to);
                }
            }
            result[c][sq] = bb;
            sq += 1;
        }
        c += 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_name(name).unwrap()
    }

    fn bb(names: &[&str]) -> Bitboard {
        names.iter().map(|n| sq(n)).collect()
    }

    #[test]
    fn test_file_rank_bb() {
        for f in File::ALL {
            assert_eq!(FILE_BB[f.index()].count(), 10);
        }
        for r in Rank::ALL {
            assert_eq!(RANK_BB[r.index()].count(), 9);
        }
        assert!(FILE_BB[File::FileE.index()].contains(Square::E9));
        assert!(RANK_BB[Rank::Rank0.index()].contains(Square::I0));
    }

    #[test]
    fn test_palace_bb() {
        assert_eq!(PALACE_BB[0], bb(&["d0", "e0", "f0", "d1", "e1", "f1", "d2", "e2", "f2"]));
        assert_eq!(PALACE_BB[1], bb(&["d7", "e7", "f7", "d8", "e8", "f8", "d9", "e9", "f9"]));
    }

    #[test]
    fn test_elephant_points_bb() {
        assert_eq!(
            ELEPHANT_POINTS_BB[0],
            bb(&["c0", "g0", "a2", "e2", "i2", "c4", "g4"])
        );
        assert_eq!(
            ELEPHANT_POINTS_BB[1],
            bb(&["c9", "g9", "a7", "e7", "i7", "c5", "g5"])
        );
        assert!((ELEPHANT_POINTS_BB[0] & !OWN_HALF_BB[0]).is_empty());
    }

    #[test]
    fn test_king_effect() {
        assert_eq!(king_effect(Color::Red, sq("e1")), bb(&["e0", "e2", "d1", "f1"]));
        assert_eq!(king_effect(Color::Red, sq("d0")), bb(&["e0", "d1"]));
        // 九宮の外からは動けない
        assert!(king_effect(Color::Red, sq("c0")).is_empty());
        assert!(king_effect(Color::Red, sq("e9")).is_empty());
        assert_eq!(king_effect(Color::Black, sq("e9")), bb(&["d9", "f9", "e8"]));
    }

    #[test]
    fn test_advisor_effect() {
        assert_eq!(advisor_effect(Color::Red, sq("e1")), bb(&["d0", "f0", "d2", "f2"]));
        assert_eq!(advisor_effect(Color::Red, sq("d0")), bb(&["e1"]));
        assert_eq!(advisor_effect(Color::Black, sq("f9")), bb(&["e8"]));
    }

    #[test]
    fn test_pawn_effect() {
        // 河を越える前は前進のみ
        assert_eq!(pawn_effect(Color::Red, sq("e3")), bb(&["e4"]));
        assert_eq!(pawn_effect(Color::Red, sq("e4")), bb(&["e5"]));
        // 河を越えたら横も
        assert_eq!(pawn_effect(Color::Red, sq("e5")), bb(&["e6", "d5", "f5"]));
        assert_eq!(pawn_effect(Color::Red, sq("a9")), bb(&["b9"]));
        assert_eq!(pawn_effect(Color::Black, sq("e6")), bb(&["e5"]));
        assert_eq!(pawn_effect(Color::Black, sq("e4")), bb(&["e3", "d4", "f4"]));
        assert_eq!(pawn_effect(Color::Black, sq("i0")), bb(&["h0"]));
    }
}
