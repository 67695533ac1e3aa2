//! 局面表記（FEN形式）の解析・出力
//!
//! `<盤面> <手番> - - <半手数> <手数>`
//!
//! 盤面は9段から0段へ `/` 区切りで並べ、各段は a筋から i筋へ、
//! 数字（1-9）が連続する空きマス、英字が駒1つ（大文字が紅）を表す。

use std::str::FromStr;

use crate::error::{NotationError, NotationResult};
use crate::types::{Color, File, Piece, Rank, Square};

use super::board::Board;
use super::pos::Position;

/// 平手初期局面
pub const STARTPOS_FEN: &str =
    "rheakaehr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RHEAKAEHR w - - 0 1";

fn malformed(msg: impl Into<String>) -> NotationError {
    NotationError::MalformedNotation(msg.into())
}

impl Position {
    /// 平手初期局面
    pub fn startpos() -> Self {
        let mut pos = Position::new();
        pos.set_startpos();
        pos
    }

    /// 平手初期局面を設定
    pub fn set_startpos(&mut self) {
        let board = parse_board(STARTPOS_FEN.split(' ').next().unwrap_or_default());
        debug_assert!(board.is_ok(), "STARTPOS_FEN must parse");
        self.board = board.unwrap_or_default();
        self.side_to_move = Color::Red;
        self.halfmove_clock = 0;
        self.fullmove_number = 1;
        self.history.clear();
        self.move_stack.clear();
    }

    /// FEN文字列から局面を生成
    pub fn from_fen(fen: &str) -> NotationResult<Self> {
        let mut pos = Position::new();
        pos.set_fen(fen)?;
        Ok(pos)
    }

    /// FEN文字列から局面を設定する。ルールは保持し、履歴は消去する
    ///
    /// 失敗した場合、局面は変更されない。
    pub fn set_fen(&mut self, fen: &str) -> NotationResult<()> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(malformed(format!(
                "expected 6 fields, got {} in {fen:?}",
                fields.len()
            )));
        }

        // 1. 盤面
        let board = parse_board(fields[0])?;

        // 2. 手番
        let side_to_move = match fields[1] {
            "w" => Color::Red,
            "b" => Color::Black,
            other => {
                return Err(malformed(format!(
                    "expected side 'w' or 'b', got {other:?}"
                )));
            }
        };

        // 3-4. 予約フィールドは読み飛ばす

        // 5-6. 半手数・手数
        let halfmove_clock = parse_counter("halfmove clock", fields[4])?;
        let fullmove_number = parse_counter("fullmove number", fields[5])?.max(1);

        self.board = board;
        self.side_to_move = side_to_move;
        self.halfmove_clock = halfmove_clock;
        self.fullmove_number = fullmove_number;
        self.history.clear();
        self.move_stack.clear();
        Ok(())
    }

    /// 盤面部分のFEN
    pub fn board_fen(&self) -> String {
        board_to_fen(&self.board)
    }

    /// FEN文字列を出力
    pub fn to_fen(&self) -> String {
        format!(
            "{} {} - - {} {}",
            self.board_fen(),
            self.side_to_move.to_fen_char(),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// 先後を入れ替えて上下反転した局面（手番も入れ替わる。履歴は持たない）
    pub fn flipped(&self) -> Position {
        Position {
            board: self.board.flipped(),
            side_to_move: !self.side_to_move,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            history: Vec::new(),
            move_stack: Vec::new(),
            rules: self.rules,
        }
    }
}

impl FromStr for Position {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

/// FEN文字列の先後を入れ替え、上下反転する
pub fn flip_fen(fen: &str) -> NotationResult<String> {
    Ok(Position::from_fen(fen)?.flipped().to_fen())
}

fn parse_counter(name: &str, s: &str) -> NotationResult<u32> {
    let n: i64 = s
        .parse()
        .map_err(|_| malformed(format!("{name} is not an integer: {s:?}")))?;
    if n < 0 {
        return Err(malformed(format!("{name} is negative: {n}")));
    }
    u32::try_from(n).map_err(|_| malformed(format!("{name} is out of range: {n}")))
}

fn parse_board(s: &str) -> NotationResult<Board> {
    let rows: Vec<&str> = s.split('/').collect();
    if rows.len() != Rank::NUM {
        return Err(malformed(format!(
            "expected {} rows, got {} in {s:?}",
            Rank::NUM,
            rows.len()
        )));
    }

    let mut board = Board::EMPTY;
    for (i, row) in rows.iter().enumerate() {
        let rank = Rank::ALL[Rank::NUM - 1 - i];
        let mut file = 0usize;
        let mut prev_digit = false;

        for c in row.chars() {
            if let Some(n) = c.to_digit(10).filter(|n| (1..=9).contains(n)) {
                if prev_digit {
                    return Err(malformed(format!("two consecutive digits in row {row:?}")));
                }
                prev_digit = true;
                file += n as usize;
            } else if let Some(pc) = Piece::from_char(c) {
                prev_digit = false;
                if file >= File::NUM {
                    return Err(malformed(format!("too many columns in row {row:?}")));
                }
                board.put_piece(Square::new(File::ALL[file], rank), pc);
                file += 1;
            } else {
                return Err(malformed(format!("invalid character {c:?} in row {row:?}")));
            }
        }

        if file != File::NUM {
            return Err(malformed(format!(
                "row {row:?} has {file} columns, expected {}",
                File::NUM
            )));
        }
    }
    Ok(board)
}

fn board_to_fen(board: &Board) -> String {
    let mut s = String::with_capacity(90);
    for (i, &rank) in Rank::ALL.iter().rev().enumerate() {
        if i > 0 {
            s.push('/');
        }
        let mut empty = 0;
        for file in File::ALL {
            match board.piece_on(Square::new(file, rank)) {
                Some(pc) => {
                    if empty > 0 {
                        s.push_str(&empty.to_string());
                        empty = 0;
                    }
                    s.push(pc.to_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            s.push_str(&empty.to_string());
        }
    }
    s
}
