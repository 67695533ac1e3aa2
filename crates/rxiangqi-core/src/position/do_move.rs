//! 指し手の実行（push）と巻き戻し（pop）

use crate::error::{NotationError, NotationResult};
use crate::types::{Color, Move};

use super::pos::Position;

impl Position {
    /// 指し手を実行する
    ///
    /// 合法性は検証しない。実行前の状態を履歴に積み、指し手と 1:1 で対応させる。
    /// - 駒を取ったら半手数を0に戻し、それ以外は1増やす
    /// - 黒が指したら手数を1増やす
    /// - null move は手番を渡すだけ
    /// - 半手数・手数は u32::MAX で飽和する
    pub fn push(&mut self, mv: Move) {
        self.history.push(self.state());
        self.move_stack.push(mv);

        if mv.is_some() {
            let captured = self.board.apply_move(mv);
            if captured.is_some() {
                self.halfmove_clock = 0;
            } else {
                self.halfmove_clock = self.halfmove_clock.saturating_add(1);
            }
            if self.side_to_move == Color::Black {
                self.fullmove_number = self.fullmove_number.saturating_add(1);
            }
        }
        self.side_to_move = !self.side_to_move;

        log::trace!("push {mv} (ply {})", self.ply());
        #[cfg(feature = "debug")]
        assert!(self.is_consistent(), "inconsistent position after push {mv}");
    }

    /// 直前の push を取り消し、その手を返す。履歴が空なら何もしない
    pub fn pop(&mut self) -> Option<Move> {
        let mv = self.move_stack.pop()?;
        let state = self.history.pop()?;
        self.board = state.board;
        self.side_to_move = state.side_to_move;
        self.halfmove_clock = state.halfmove_clock;
        self.fullmove_number = state.fullmove_number;

        log::trace!("pop {mv} (ply {})", self.ply());
        #[cfg(feature = "debug")]
        assert!(self.is_consistent(), "inconsistent position after pop {mv}");
        Some(mv)
    }

    /// 指し手表記を解析し、現局面で合法か検証する（実行はしない）
    pub fn parse_move_token(&self, token: &str) -> NotationResult<Move> {
        let mv = Move::from_ucci(token)?;
        if !self.is_legal(mv) {
            log::warn!("rejected illegal move {token} in {}", self.to_fen());
            return Err(NotationError::IllegalMove {
                token: token.to_string(),
                fen: self.to_fen(),
            });
        }
        Ok(mv)
    }

    /// 指し手表記を解析・検証して実行する
    pub fn push_token(&mut self, token: &str) -> NotationResult<Move> {
        let mv = self.parse_move_token(token)?;
        self.push(mv);
        Ok(mv)
    }

    /// 駒を取る手か
    pub fn is_capture(&self, mv: Move) -> bool {
        mv.is_some() && !mv.is_drop() && self.pieces_c(!self.side_to_move).contains(mv.to())
    }
}
