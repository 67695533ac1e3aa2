//! 学習器への入力平面
//!
//! 14枚の 10×9 平面。並びは `K A E H R C P k a e h r c p`（紅、黒の順）、
//! 各平面の行0が9段、列0がa筋。駒のあるマスが 1.0。

use crate::types::{Color, File, PieceType, Rank, Square};

use super::pos::Position;

/// 入力平面の枚数
pub const NUM_PLANES: usize = 14;

/// 入力平面 [plane][row][column]
pub type InputPlanes = [[[f32; File::NUM]; Rank::NUM]; NUM_PLANES];

/// 手番ごとの平面の並び
const PLANE_ORDER: [PieceType; 7] = [
    PieceType::King,
    PieceType::Advisor,
    PieceType::Elephant,
    PieceType::Horse,
    PieceType::Rook,
    PieceType::Cannon,
    PieceType::Pawn,
];

/// 局面の入力平面
pub fn input_planes(pos: &Position) -> InputPlanes {
    let mut planes = [[[0.0; File::NUM]; Rank::NUM]; NUM_PLANES];
    for (ci, c) in [Color::Red, Color::Black].into_iter().enumerate() {
        for (i, &pt) in PLANE_ORDER.iter().enumerate() {
            let plane = &mut planes[ci * PLANE_ORDER.len() + i];
            for sq in pos.pieces(c, pt) {
                plane[row_of(sq)][sq.file().index()] = 1.0;
            }
        }
    }
    planes
}

/// 手番側を紅として見た入力平面（黒番なら反転してから作る）
pub fn canonical_input_planes(pos: &Position) -> InputPlanes {
    match pos.side_to_move() {
        Color::Red => input_planes(pos),
        Color::Black => input_planes(&pos.flipped()),
    }
}

#[inline]
fn row_of(sq: Square) -> usize {
    Rank::NUM - 1 - sq.rank().index()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::STARTPOS_FEN;

    fn count(planes: &InputPlanes, i: usize) -> usize {
        planes[i].iter().flatten().filter(|&&v| v == 1.0).count()
    }

    #[test]
    fn test_startpos_planes() {
        let pos = Position::from_fen(STARTPOS_FEN).unwrap();
        let planes = input_planes(&pos);
        // K A E H R C P
        let expected = [1, 2, 2, 2, 2, 2, 5];
        for (i, &n) in expected.iter().enumerate() {
            assert_eq!(count(&planes, i), n);
            assert_eq!(count(&planes, i + 7), n);
        }
        // 紅の帥は最下行の e 列、黒の将は最上行
        assert_eq!(planes[0][9][4], 1.0);
        assert_eq!(planes[7][0][4], 1.0);
    }

    #[test]
    fn test_canonical_flips_for_black() {
        let pos = Position::from_fen("4k4/9/9/9/9/9/9/9/4C4/3K5 b - - 0 1").unwrap();
        let planes = canonical_input_planes(&pos);
        // 反転後は黒将が紅帥として e0（最下行）
        assert_eq!(planes[0][9][4], 1.0);
        // 紅の炮 e1 は黒の炮 e8（行1）
        assert_eq!(planes[12][1][4], 1.0);
        assert_eq!(count(&planes, 7), 1);

        let red = pos.flipped();
        assert_eq!(canonical_input_planes(&red), input_planes(&red));
    }
}
