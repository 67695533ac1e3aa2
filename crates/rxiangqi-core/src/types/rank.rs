//! 段（Rank）

use super::Color;

/// 段（0-9、紅の陣から黒の陣へ）
///
/// 0-4段が紅の陣、5-9段が黒の陣。4段と5段の間が河。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Rank0 = 0,
    Rank1 = 1,
    Rank2 = 2,
    Rank3 = 3,
    Rank4 = 4,
    Rank5 = 5,
    Rank6 = 6,
    Rank7 = 7,
    Rank8 = 8,
    Rank9 = 9,
}

impl Rank {
    /// 段の数
    pub const NUM: usize = 10;

    /// 全ての段
    pub const ALL: [Rank; Rank::NUM] = [
        Rank::Rank0,
        Rank::Rank1,
        Rank::Rank2,
        Rank::Rank3,
        Rank::Rank4,
        Rank::Rank5,
        Rank::Rank6,
        Rank::Rank7,
        Rank::Rank8,
        Rank::Rank9,
    ];

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 数値から生成
    #[inline]
    pub const fn from_index(i: usize) -> Option<Rank> {
        if i < Rank::NUM {
            Some(Rank::ALL[i])
        } else {
            None
        }
    }

    /// 表記用の文字（'0'-'9'）
    #[inline]
    pub const fn to_char(self) -> char {
        (b'0' + self as u8) as char
    }

    /// 表記用の文字から変換
    #[inline]
    pub const fn from_char(c: char) -> Option<Rank> {
        match c {
            '0'..='9' => Rank::from_index(c as usize - '0' as usize),
            _ => None,
        }
    }

    /// 上下反転
    #[inline]
    pub const fn flip(self) -> Rank {
        Rank::ALL[9 - self as usize]
    }

    /// 指定手番から見て河を越えているか
    #[inline]
    pub const fn is_across_river(self, c: Color) -> bool {
        match c {
            Color::Red => self as u8 >= 5,
            Color::Black => self as u8 <= 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_char_roundtrip() {
        for r in Rank::ALL {
            assert_eq!(Rank::from_char(r.to_char()), Some(r));
        }
        assert_eq!(Rank::from_char('a'), None);
    }

    #[test]
    fn test_rank_river() {
        assert!(!Rank::Rank4.is_across_river(Color::Red));
        assert!(Rank::Rank5.is_across_river(Color::Red));
        assert!(!Rank::Rank5.is_across_river(Color::Black));
        assert!(Rank::Rank4.is_across_river(Color::Black));
    }
}
