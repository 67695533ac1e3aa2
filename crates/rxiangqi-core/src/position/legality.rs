//! 合法性判定と王手判定
//!
//! 合法手 = 終局していない ∧ 疑似合法 ∧ 指した後に将帥対面にならない。
//! `CheckRule::KingSafety` ではさらに、指した後に自分の帥/将へ利きが残る手を除く。

use crate::bitboard::Bitboard;
use crate::rules::CheckRule;
use crate::types::{Color, Move, Square};

use super::pos::Position;

impl Position {
    // ========== 利き計算 ==========

    /// `c` 側の駒のうち `sq` に利いているもの
    #[inline]
    pub fn attackers_to(&self, c: Color, sq: Square) -> Bitboard {
        self.board.attackers_to(c, sq)
    }

    /// `c` 側の駒が `sq` に利いているか
    #[inline]
    pub fn is_attacked_by(&self, c: Color, sq: Square) -> bool {
        self.board.is_attacked_by(c, sq)
    }

    /// 手番側の帥/将に利いている相手の駒
    pub fn checkers(&self) -> Bitboard {
        match self.king_square(self.side_to_move) {
            Some(ksq) => self.attackers_to(!self.side_to_move, ksq),
            None => Bitboard::EMPTY,
        }
    }

    /// 手番側が王手されているか（将帥対面も含む）
    pub fn is_check(&self) -> bool {
        self.checkers().is_not_empty() || self.board.kings_facing()
    }

    // ========== 合法性 ==========

    /// 駒取りのない半手数が上限に達した（以降は合法手がない）
    #[inline]
    pub fn is_variant_end(&self) -> bool {
        self.halfmove_clock >= self.rules.no_progress_limit
    }

    /// 既に決着している（手数上限、または手番側の帥/将が取られた）
    ///
    /// これが成り立つ局面に合法手はない。
    #[inline]
    pub(crate) fn is_already_over(&self) -> bool {
        self.is_variant_end() || self.is_king_captured()
    }

    /// 合法手か
    pub fn is_legal(&self, mv: Move) -> bool {
        !self.is_already_over() && self.is_pseudo_legal(mv) && self.is_legal_pseudo(mv)
    }

    /// 疑似合法手 `mv` を指した後の局面が許されるか
    ///
    /// 実局面は変更せず、盤面のコピーで試す。
    pub(crate) fn is_legal_pseudo(&self, mv: Move) -> bool {
        let after = self.board.after_move(mv);
        if after.kings_facing() {
            return false;
        }
        match self.rules.check_rule {
            CheckRule::FlyingGenerals => true,
            CheckRule::KingSafety => after
                .king_square(self.side_to_move)
                .is_none_or(|ksq| !after.is_attacked_by(!self.side_to_move, ksq)),
        }
    }
}
