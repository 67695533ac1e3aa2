//! 盤面（駒配置）
//!
//! 駒種別・手番別のBitboardと全駒の占有をまとめた `Copy` 値。
//! 局面本体の盤面であると同時に、指し手の試行（合法性・王手判定）にも
//! 実局面を変更せずに使う。

use crate::bitboard::{
    Bitboard, FILE_BB, advisor_effect, between_bb, cannon_capture_effect, elephant_effect,
    horse_effect, king_effect, pawn_effect, rook_effect,
};
use crate::types::{Color, Move, Piece, PieceType, Square};

/// 駒配置
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// 駒種別Bitboard [PieceType]
    by_type: [Bitboard; PieceType::NUM],
    /// 手番別Bitboard [Color]
    by_color: [Bitboard; Color::NUM],
    /// 全駒
    occupied: Bitboard,
}

impl Board {
    /// 駒のない盤面
    pub const EMPTY: Board = Board {
        by_type: [Bitboard::EMPTY; PieceType::NUM],
        by_color: [Bitboard::EMPTY; Color::NUM],
        occupied: Bitboard::EMPTY,
    };

    // ========== 盤面アクセス ==========

    /// 指定マスの駒
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        if !self.occupied.contains(sq) {
            return None;
        }
        let color = if self.by_color[Color::Red.index()].contains(sq) {
            Color::Red
        } else {
            Color::Black
        };
        PieceType::ALL
            .into_iter()
            .find(|pt| self.by_type[pt.index()].contains(sq))
            .map(|pt| Piece::new(pt, color))
    }

    /// 全駒のBitboard（占有）
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.occupied
    }

    /// 指定駒種のBitboard
    #[inline]
    pub fn pieces_pt(&self, pt: PieceType) -> Bitboard {
        self.by_type[pt.index()]
    }

    /// 指定手番の駒のBitboard
    #[inline]
    pub fn pieces_c(&self, c: Color) -> Bitboard {
        self.by_color[c.index()]
    }

    /// 指定手番・駒種のBitboard
    #[inline]
    pub fn pieces(&self, c: Color, pt: PieceType) -> Bitboard {
        self.by_color[c.index()] & self.by_type[pt.index()]
    }

    /// 帥/将の位置（いなければ None）
    #[inline]
    pub fn king_square(&self, c: Color) -> Option<Square> {
        self.pieces(c, PieceType::King).lsb()
    }

    // ========== 内部操作 ==========

    /// 空きマスに駒を置く
    pub(crate) fn put_piece(&mut self, sq: Square, pc: Piece) {
        debug_assert!(!self.occupied.contains(sq), "put_piece on occupied square {sq}");
        self.by_type[pc.piece_type.index()].set(sq);
        self.by_color[pc.color.index()].set(sq);
        self.occupied.set(sq);
    }

    /// 駒を取り除く
    pub(crate) fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        let pc = self.piece_on(sq)?;
        self.by_type[pc.piece_type.index()].clear(sq);
        self.by_color[pc.color.index()].clear(sq);
        self.occupied.clear(sq);
        Some(pc)
    }

    /// 指し手を盤面に適用し、取った駒を返す
    ///
    /// null move と移動元が空の手は盤面を変えない。
    pub(crate) fn apply_move(&mut self, mv: Move) -> Option<Piece> {
        if mv.is_null() || mv.is_drop() {
            return None;
        }
        let pc = self.remove_piece(mv.from())?;
        let captured = self.remove_piece(mv.to());
        self.put_piece(mv.to(), pc);
        captured
    }

    /// 指し手を適用した後の盤面（自身は変更しない）
    #[inline]
    pub fn after_move(&self, mv: Move) -> Board {
        let mut board = *self;
        board.apply_move(mv);
        board
    }

    // ========== 利き計算 ==========

    /// `c` 側の駒のうち `sq` に利いているもの
    ///
    /// 車・炮・帥・仕は利きの対称性から逆引きし、
    /// 向きのある駒（馬の脚、相の目、兵の前進方向）は駒ごとに調べる。
    pub fn attackers_to(&self, c: Color, sq: Square) -> Bitboard {
        let occ = self.occupied;
        let mut attackers = (rook_effect(sq, occ) & self.pieces(c, PieceType::Rook))
            | (cannon_capture_effect(sq, occ) & self.pieces(c, PieceType::Cannon))
            | (king_effect(c, sq) & self.pieces(c, PieceType::King))
            | (advisor_effect(c, sq) & self.pieces(c, PieceType::Advisor));

        for from in self.pieces(c, PieceType::Horse) {
            if horse_effect(from, occ).contains(sq) {
                attackers.set(from);
            }
        }
        for from in self.pieces(c, PieceType::Elephant) {
            if elephant_effect(c, from, occ).contains(sq) {
                attackers.set(from);
            }
        }
        for from in self.pieces(c, PieceType::Pawn) {
            if pawn_effect(c, from).contains(sq) {
                attackers.set(from);
            }
        }
        attackers
    }

    /// `c` 側の駒が `sq` に利いているか
    #[inline]
    pub fn is_attacked_by(&self, c: Color, sq: Square) -> bool {
        self.attackers_to(c, sq).is_not_empty()
    }

    /// 両者の帥/将が同じ筋で、間に駒がない（将帥対面）
    pub fn kings_facing(&self) -> bool {
        let (Some(red), Some(black)) = (
            self.king_square(Color::Red),
            self.king_square(Color::Black),
        ) else {
            return false;
        };
        FILE_BB[red.file().index()].contains(black)
            && (between_bb(red, black) & self.occupied).is_empty()
    }

    // ========== 変換・検証 ==========

    /// 先後を入れ替えて上下反転した盤面
    pub fn flipped(&self) -> Board {
        let mut board = Board::EMPTY;
        for sq in self.occupied {
            if let Some(pc) = self.piece_on(sq) {
                board.put_piece(sq.flip(), Piece::new(pc.piece_type, !pc.color));
            }
        }
        board
    }

    /// 内部整合性（各マスの駒は高々1つ、占有 = 手番別の和 = 駒種別の和）
    pub fn is_consistent(&self) -> bool {
        let red = self.by_color[Color::Red.index()];
        let black = self.by_color[Color::Black.index()];
        if (red & black).is_not_empty() || (red | black) != self.occupied {
            return false;
        }

        let mut union = Bitboard::EMPTY;
        let mut total = 0;
        for bb in self.by_type {
            union |= bb;
            total += bb.count();
        }
        union == self.occupied && total == self.occupied.count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::EMPTY
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for rank in (0..10).rev() {
            for file in 0..9 {
                let sq = Square::from_u8_unchecked(rank * 9 + file);
                let c = self.piece_on(sq).map_or('.', |pc| pc.to_char());
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
