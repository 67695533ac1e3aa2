//! 終局判定と局面評価の補助
//!
//! - 詰み: 手番側の負け
//! - 手詰まり（王手されていない）: `StalemateRule` に従う
//! - 駒取りのない半手数が上限に達した: 引き分け
//! - 手番側の帥/将が取られている: 手番側の負け

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::rules::StalemateRule;
use crate::types::{Color, Move, PieceType};

use super::pos::Position;

/// 対局結果
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    #[serde(rename = "1-0")]
    RedWins,
    #[serde(rename = "0-1")]
    BlackWins,
    #[serde(rename = "1/2-1/2")]
    Draw,
    /// 対局中
    #[serde(rename = "*")]
    Ongoing,
}

impl GameResult {
    /// `c` 側の勝ち
    #[inline]
    pub const fn win_for(c: Color) -> GameResult {
        match c {
            Color::Red => GameResult::RedWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    /// 結果文字列（"1-0"、"0-1"、"1/2-1/2"、"*"）
    pub const fn as_str(self) -> &'static str {
        match self {
            GameResult::RedWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
            GameResult::Ongoing => "*",
        }
    }

    /// 決着がついているか
    #[inline]
    pub const fn is_decided(self) -> bool {
        !matches!(self, GameResult::Ongoing)
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameResult {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1-0" => Ok(GameResult::RedWins),
            "0-1" => Ok(GameResult::BlackWins),
            "1/2-1/2" => Ok(GameResult::Draw),
            "*" => Ok(GameResult::Ongoing),
            _ => Err(format!("invalid result: {s:?}")),
        }
    }
}

/// 駒割の点数 [PieceType]
const PIECE_VALUES: [f64; PieceType::NUM] = [
    1.0,  // Pawn
    4.0,  // Horse
    3.25, // Elephant
    5.0,  // Rook
    2.0,  // Advisor
    3.0,  // King
    4.0,  // Cannon
];

impl Position {
    /// 合法手が1つでもあるか
    #[inline]
    pub fn has_legal_move(&self) -> bool {
        self.legal_moves().next().is_some()
    }

    /// 駒取りのない半手数の上限による引き分け
    #[inline]
    pub fn is_no_progress_draw(&self) -> bool {
        self.is_variant_end()
    }

    /// 手番側の帥/将が盤上になく、相手の帥/将は残っている
    pub fn is_king_captured(&self) -> bool {
        self.king_square(self.side_to_move).is_none()
            && self.king_square(!self.side_to_move).is_some()
    }

    /// 詰み（王手されていて合法手がない）
    pub fn is_checkmate(&self) -> bool {
        !self.is_already_over() && self.is_check() && !self.has_legal_move()
    }

    /// 手詰まり（王手されておらず合法手がない）
    pub fn is_stalemate(&self) -> bool {
        !self.is_already_over() && !self.is_check() && !self.has_legal_move()
    }

    /// 終局しているか
    pub fn is_game_over(&self) -> bool {
        self.is_already_over() || !self.has_legal_move()
    }

    /// 対局結果
    pub fn result(&self) -> GameResult {
        let us = self.side_to_move;
        if self.is_king_captured() {
            return GameResult::win_for(!us);
        }
        if self.is_variant_end() {
            return GameResult::Draw;
        }
        if self.has_legal_move() {
            return GameResult::Ongoing;
        }
        if self.is_check() || self.rules.stalemate == StalemateRule::Loss {
            GameResult::win_for(!us)
        } else {
            GameResult::Draw
        }
    }

    /// 駒割による簡易評価（-1..1）
    ///
    /// 紅から見た駒割を総駒割で正規化し、tanh(3v) で圧縮する。
    /// `absolute` でなければ手番側から見た値。
    pub fn material_balance(&self, absolute: bool) -> f64 {
        let mut balance = 0.0;
        let mut total = 0.0;
        for pt in PieceType::ALL {
            let value = PIECE_VALUES[pt.index()];
            let red = self.pieces(Color::Red, pt).count() as f64;
            let black = self.pieces(Color::Black, pt).count() as f64;
            balance += value * (red - black);
            total += value * (red + black);
        }
        if total == 0.0 {
            return 0.0;
        }

        let mut v = balance / total;
        if !absolute && self.side_to_move == Color::Black {
            v = -v;
        }
        (v * 3.0).tanh()
    }

    /// 駒割で勝敗を裁定する（打ち切り時用）
    pub fn adjudicate(&self) -> GameResult {
        let score = self.material_balance(true);
        if score.abs() < 0.01 {
            GameResult::Draw
        } else if score > 0.0 {
            GameResult::RedWins
        } else {
            GameResult::BlackWins
        }
    }

    /// 指した後の局面表記が `fen` と一致する合法手
    ///
    /// 盤面・手番・半手数・手数のすべてを比較する。予約欄は `-` に正規化される。
    /// `fen` が解釈できなければ `None`。
    pub fn find_move_to(&mut self, fen: &str) -> Option<Move> {
        let target = Position::from_fen(fen).ok()?.to_fen();
        let moves = self.legal_move_list();
        moves.into_iter().find(|&mv| {
            self.push(mv);
            let found = self.to_fen() == target;
            self.pop();
            found
        })
    }
}
