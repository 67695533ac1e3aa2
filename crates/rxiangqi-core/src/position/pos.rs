//! 局面（Position）

use std::fmt;

use crate::bitboard::Bitboard;
use crate::rules::Rules;
use crate::types::{Color, Move, Piece, PieceType, Square};

use super::board::Board;
use super::state::StateInfo;

/// 象棋の局面
///
/// 盤面と手番・手数に加えて、push ごとのスナップショットと指し手を
/// 1:1 で積んだ履歴を持つ。`Clone` は履歴を含めて完全に独立した値を作る。
#[derive(Clone, PartialEq, Eq)]
pub struct Position {
    // === 盤面 ===
    pub(super) board: Board,

    // === 状態 ===
    /// 手番
    pub(super) side_to_move: Color,
    /// 駒取りからの半手数
    pub(super) halfmove_clock: u32,
    /// 手数（黒が指すたびに1増える）
    pub(super) fullmove_number: u32,

    // === 履歴 ===
    /// push 前の状態 [ply]
    pub(super) history: Vec<StateInfo>,
    /// 指した手 [ply]
    pub(super) move_stack: Vec<Move>,

    /// 対局ルール
    pub(super) rules: Rules,
}

impl Position {
    // ========== 局面設定 ==========

    /// 駒のない局面（紅番、1手目）
    pub fn new() -> Self {
        Position {
            board: Board::EMPTY,
            side_to_move: Color::Red,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
            move_stack: Vec::new(),
            rules: Rules::default(),
        }
    }

    /// ルールを差し替えた局面を返す
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// ルールを変更
    pub fn set_rules(&mut self, rules: Rules) {
        self.rules = rules;
    }

    /// 現在のルール
    #[inline]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    // ========== 盤面アクセス ==========

    /// 盤面
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 指定マスの駒
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.board.piece_on(sq)
    }

    /// 全駒のBitboard（占有）
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.board.occupied()
    }

    /// 指定駒種のBitboard
    #[inline]
    pub fn pieces_pt(&self, pt: PieceType) -> Bitboard {
        self.board.pieces_pt(pt)
    }

    /// 指定手番の駒のBitboard
    #[inline]
    pub fn pieces_c(&self, c: Color) -> Bitboard {
        self.board.pieces_c(c)
    }

    /// 指定手番・駒種のBitboard
    #[inline]
    pub fn pieces(&self, c: Color, pt: PieceType) -> Bitboard {
        self.board.pieces(c, pt)
    }

    /// 帥/将の位置
    #[inline]
    pub fn king_square(&self, c: Color) -> Option<Square> {
        self.board.king_square(c)
    }

    // ========== 状態アクセス ==========

    /// 手番
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// 駒取りからの半手数
    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// 手数
    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// これまでに push した手（古い順）
    #[inline]
    pub fn move_stack(&self) -> &[Move] {
        &self.move_stack
    }

    /// 直前の手
    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.move_stack.last().copied()
    }

    /// 局面設定からの手数（履歴の深さ）
    #[inline]
    pub fn ply(&self) -> usize {
        self.move_stack.len()
    }

    /// 現在の状態のスナップショット
    pub fn state(&self) -> StateInfo {
        StateInfo {
            board: self.board,
            side_to_move: self.side_to_move,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        }
    }

    /// 盤面・手番・手数の内部整合性
    pub fn is_consistent(&self) -> bool {
        self.board.is_consistent()
            && self.fullmove_number >= 1
            && self.history.len() == self.move_stack.len()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Position")
            .field("fen", &self.to_fen())
            .field("ply", &self.ply())
            .field("rules", &self.rules)
            .finish()
    }
}

/// 盤面を漢字の駒で表示する（上が9段、左がa筋）
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..10u8).rev() {
            write!(f, "{rank} ")?;
            for file in 0..9u8 {
                let sq = Square::from_u8_unchecked(rank * 9 + file);
                match self.piece_on(sq) {
                    Some(pc) => write!(f, "{}", pc.unicode_symbol())?,
                    None => write!(f, "・")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "  ａｂｃｄｅｆｇｈｉ")?;
        write!(
            f,
            "{} to move",
            match self.side_to_move {
                Color::Red => "red",
                Color::Black => "black",
            }
        )
    }
}
