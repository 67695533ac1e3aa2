//! 指し手生成器
//!
//! 現局面を借用するだけの遅延イテレータで疑似合法手・合法手を生成する。
//! 局面を消費・変更しないので、同じ局面から何度でも生成し直せる。
//!
//! 生成順は移動元の升番号の昇順、同じ移動元では移動先の升番号の昇順。

use crate::bitboard::{
    Bitboard, advisor_effect, cannon_capture_effect, cannon_slide_effect, elephant_effect,
    horse_effect, king_effect, pawn_effect, rook_effect,
};
use crate::position::{Board, Position};
use crate::types::{Color, Move, PieceType, Square};

use super::movelist::MoveList;

/// `us` 側の `pt` が `from` から動ける升（自駒の升を除く）
///
/// 炮は駒を取らない移動と、砲台をちょうど1枚越えた相手の駒の取りに分かれる。
pub fn destinations(board: &Board, us: Color, pt: PieceType, from: Square) -> Bitboard {
    let occ = board.occupied();
    let own = board.pieces_c(us);
    match pt {
        PieceType::Pawn => pawn_effect(us, from) & !own,
        PieceType::Horse => horse_effect(from, occ) & !own,
        PieceType::Elephant => elephant_effect(us, from, occ) & !own,
        PieceType::Rook => rook_effect(from, occ) & !own,
        PieceType::Advisor => advisor_effect(us, from) & !own,
        PieceType::King => king_effect(us, from) & !own,
        PieceType::Cannon => {
            cannon_slide_effect(from, occ) | (cannon_capture_effect(from, occ) & board.pieces_c(!us))
        }
    }
}

/// 疑似合法手の遅延イテレータ
#[derive(Clone)]
pub struct PseudoLegalMoves<'a> {
    board: &'a Board,
    us: Color,
    to_mask: Bitboard,
    /// まだ展開していない移動元
    sources: Bitboard,
    /// 展開中の移動元と残りの移動先
    current: Option<(Square, Bitboard)>,
}

impl<'a> PseudoLegalMoves<'a> {
    fn new(pos: &'a Position, from_mask: Bitboard, to_mask: Bitboard) -> Self {
        let us = pos.side_to_move();
        PseudoLegalMoves {
            board: pos.board(),
            us,
            to_mask,
            sources: pos.pieces_c(us) & from_mask,
            current: None,
        }
    }
}

impl Iterator for PseudoLegalMoves<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        loop {
            if let Some((from, targets)) = &mut self.current {
                if targets.is_not_empty() {
                    return Some(Move::new(*from, targets.pop()));
                }
            }
            if self.sources.is_empty() {
                return None;
            }
            let from = self.sources.pop();
            let pt = self.board.piece_on(from)?.piece_type;
            let targets = destinations(self.board, self.us, pt, from) & self.to_mask;
            self.current = Some((from, targets));
        }
    }
}

/// 合法手の遅延イテレータ（疑似合法手から合法性判定を通ったものを同じ順に返す）
#[derive(Clone)]
pub struct LegalMoves<'a> {
    pos: &'a Position,
    inner: PseudoLegalMoves<'a>,
}

impl Iterator for LegalMoves<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        if self.pos.is_already_over() {
            return None;
        }
        let pos = self.pos;
        self.inner.find(|&mv| pos.is_legal_pseudo(mv))
    }
}

// ============================================================================
// Position に指し手生成を追加
// ============================================================================

impl Position {
    /// 移動元・移動先を制限した疑似合法手
    pub fn generate_pseudo_legal_moves(
        &self,
        from_mask: Bitboard,
        to_mask: Bitboard,
    ) -> PseudoLegalMoves<'_> {
        PseudoLegalMoves::new(self, from_mask, to_mask)
    }

    /// 移動元・移動先を制限した合法手
    pub fn generate_legal_moves(&self, from_mask: Bitboard, to_mask: Bitboard) -> LegalMoves<'_> {
        LegalMoves {
            pos: self,
            inner: PseudoLegalMoves::new(self, from_mask, to_mask),
        }
    }

    /// すべての疑似合法手
    #[inline]
    pub fn pseudo_legal_moves(&self) -> PseudoLegalMoves<'_> {
        self.generate_pseudo_legal_moves(Bitboard::ALL, Bitboard::ALL)
    }

    /// すべての合法手
    #[inline]
    pub fn legal_moves(&self) -> LegalMoves<'_> {
        self.generate_legal_moves(Bitboard::ALL, Bitboard::ALL)
    }

    /// すべての合法手を集めたリスト
    pub fn legal_move_list(&self) -> MoveList {
        self.legal_moves().collect()
    }

    /// 疑似合法手か
    ///
    /// null move・駒打ち・成りの付いた手は常に false。
    pub fn is_pseudo_legal(&self, mv: Move) -> bool {
        if mv.is_null() || mv.is_drop() || mv.promotion().is_some() {
            return false;
        }
        let us = self.side_to_move();
        let Some(pc) = self.piece_on(mv.from()) else {
            return false;
        };
        if pc.color != us || self.pieces_c(us).contains(mv.to()) {
            return false;
        }
        destinations(self.board(), us, pc.piece_type, mv.from()).contains(mv.to())
    }
}
