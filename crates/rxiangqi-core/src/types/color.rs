//! 手番（Color）

use serde::{Deserialize, Serialize};

/// 手番（紅/黒）
///
/// 紅が先手で、盤面表記では大文字・手番記号 `w` で表す。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    Red = 0,
    Black = 1,
}

impl Color {
    /// 手番の数
    pub const NUM: usize = 2;

    /// 全手番
    pub const ALL: [Color; Color::NUM] = [Color::Red, Color::Black];

    /// 相手番を返す
    #[inline]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// インデックスとして使用（配列アクセス用）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 局面表記の手番記号
    #[inline]
    pub const fn to_fen_char(self) -> char {
        match self {
            Color::Red => 'w',
            Color::Black => 'b',
        }
    }

    /// 局面表記の手番記号から変換
    #[inline]
    pub const fn from_fen_char(c: char) -> Option<Color> {
        match c {
            'w' => Some(Color::Red),
            'b' => Some(Color::Black),
            _ => None,
        }
    }

    /// 前進方向の段差分（紅は上、黒は下へ進む）
    #[inline]
    pub const fn forward(self) -> i32 {
        match self {
            Color::Red => 1,
            Color::Black => -1,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.opponent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_opponent() {
        assert_eq!(Color::Red.opponent(), Color::Black);
        assert_eq!(Color::Black.opponent(), Color::Red);
    }

    #[test]
    fn test_color_not() {
        assert_eq!(!Color::Red, Color::Black);
        assert_eq!(!Color::Black, Color::Red);
    }

    #[test]
    fn test_color_fen_char() {
        for c in Color::ALL {
            assert_eq!(Color::from_fen_char(c.to_fen_char()), Some(c));
        }
        assert_eq!(Color::from_fen_char('r'), None);
    }
}
