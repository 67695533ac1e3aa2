//! 駒種（PieceType）と駒（Piece）

use std::fmt;

use super::Color;

/// 駒種（7種）
///
/// 並びは表記文字 `p h e r a k c` の順。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PieceType {
    /// 兵/卒
    Pawn = 0,
    /// 馬
    Horse = 1,
    /// 相/象
    Elephant = 2,
    /// 車
    Rook = 3,
    /// 仕/士
    Advisor = 4,
    /// 帥/将
    King = 5,
    /// 炮/砲
    Cannon = 6,
}

impl PieceType {
    /// 駒種の数
    pub const NUM: usize = 7;

    /// 全駒種
    pub const ALL: [PieceType; PieceType::NUM] = [
        PieceType::Pawn,
        PieceType::Horse,
        PieceType::Elephant,
        PieceType::Rook,
        PieceType::Advisor,
        PieceType::King,
        PieceType::Cannon,
    ];

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 表記文字（小文字）
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Horse => 'h',
            PieceType::Elephant => 'e',
            PieceType::Rook => 'r',
            PieceType::Advisor => 'a',
            PieceType::King => 'k',
            PieceType::Cannon => 'c',
        }
    }

    /// 表記文字から変換（大文字小文字は区別しない）
    #[inline]
    pub const fn from_char(c: char) -> Option<PieceType> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceType::Pawn),
            'h' => Some(PieceType::Horse),
            'e' => Some(PieceType::Elephant),
            'r' => Some(PieceType::Rook),
            'a' => Some(PieceType::Advisor),
            'k' => Some(PieceType::King),
            'c' => Some(PieceType::Cannon),
            _ => None,
        }
    }
}

/// 駒（駒種と手番の組）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(piece_type: PieceType, color: Color) -> Piece {
        Piece { piece_type, color }
    }

    /// 表記文字（紅は大文字、黒は小文字）
    #[inline]
    pub const fn to_char(self) -> char {
        let c = self.piece_type.to_char();
        match self.color {
            Color::Red => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// 表記文字から変換
    #[inline]
    pub const fn from_char(c: char) -> Option<Piece> {
        let Some(pt) = PieceType::from_char(c) else {
            return None;
        };
        let color = if c.is_ascii_uppercase() {
            Color::Red
        } else {
            Color::Black
        };
        Some(Piece::new(pt, color))
    }

    /// 盤面表示用の漢字
    pub const fn unicode_symbol(self) -> char {
        match (self.color, self.piece_type) {
            (Color::Red, PieceType::King) => '帅',
            (Color::Black, PieceType::King) => '将',
            (Color::Red, PieceType::Advisor) => '仕',
            (Color::Black, PieceType::Advisor) => '士',
            (Color::Red, PieceType::Elephant) => '相',
            (Color::Black, PieceType::Elephant) => '象',
            (_, PieceType::Horse) => '马',
            (_, PieceType::Rook) => '车',
            (_, PieceType::Cannon) => '炮',
            (Color::Red, PieceType::Pawn) => '兵',
            (Color::Black, PieceType::Pawn) => '卒',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
