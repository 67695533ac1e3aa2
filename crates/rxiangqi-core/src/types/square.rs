//! 升目（Square）

use std::fmt;

use super::{File, Rank};

/// 升目（0-89）
///
/// 配置: 横型Bitboard対応
/// A0=0, B0=1, ..., I0=8, A1=9, ..., I9=89
/// （index = rank * 9 + file、0段が紅の最下段）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    /// 升目の数
    pub const NUM: usize = 90;

    /// a0（紅の左下隅）
    pub const A0: Square = Square(0);
    /// e0（紅の帥の初期位置）
    pub const E0: Square = Square(4);
    /// i0
    pub const I0: Square = Square(8);
    /// a9
    pub const A9: Square = Square(81);
    /// e9（黒の将の初期位置）
    pub const E9: Square = Square(85);
    /// i9
    pub const I9: Square = Square(89);

    /// FileとRankからSquareを生成
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Square {
        Square(rank as u8 * 9 + file as u8)
    }

    /// 筋を取得
    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 % 9) as usize]
    }

    /// 段を取得
    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 / 9) as usize]
    }

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 内部値を取得
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// u8から生成（範囲チェックあり）
    #[inline]
    pub const fn from_u8(n: u8) -> Option<Square> {
        if (n as usize) < Square::NUM {
            Some(Square(n))
        } else {
            None
        }
    }

    /// u8から生成（範囲チェックはdebugビルドのみ）
    ///
    /// Bitboardのビット位置など、90未満であることが分かっている値にだけ使う。
    #[inline]
    pub(crate) const fn from_u8_unchecked(n: u8) -> Square {
        debug_assert!((n as usize) < Square::NUM);
        Square(n)
    }

    /// 筋・段の差分だけ移動した升（盤外ならNone）
    #[inline]
    pub const fn offset(self, df: i32, dr: i32) -> Option<Square> {
        let f = (self.0 % 9) as i32 + df;
        let r = (self.0 / 9) as i32 + dr;
        if f < 0 || f >= 9 || r < 0 || r >= 10 {
            None
        } else {
            Some(Square((r * 9 + f) as u8))
        }
    }

    /// 2升間の距離（玉の歩数、チェビシェフ距離）
    #[inline]
    pub const fn distance(self, other: Square) -> u8 {
        let df = (self.0 % 9).abs_diff(other.0 % 9);
        let dr = (self.0 / 9).abs_diff(other.0 / 9);
        if df > dr { df } else { dr }
    }

    /// 左右反転（e筋軸）
    #[inline]
    pub const fn mirror(self) -> Square {
        Square::new(self.file().mirror(), self.rank())
    }

    /// 上下反転（紅黒の陣を入れ替える）
    #[inline]
    pub const fn flip(self) -> Square {
        Square::new(self.file(), self.rank().flip())
    }

    /// 表記用の升名（"e3"等）からSquareに変換
    pub fn from_name(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file = File::from_char(chars.next()?)?;
        let rank = Rank::from_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Square::new(file, rank))
    }

    /// 全ての升を返すイテレータ
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Square::NUM as u8).map(Square)
    }
}

/// 升名で表示（例: "e3"）
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file().to_char(), self.rank().to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_new() {
        let sq = Square::new(File::FileE, Rank::Rank3);
        assert_eq!(sq.index(), 31);
        assert_eq!(sq.file(), File::FileE);
        assert_eq!(sq.rank(), Rank::Rank3);
        assert_eq!(Square::new(File::FileI, Rank::Rank9), Square::I9);
    }

    #[test]
    fn test_square_name_roundtrip() {
        for sq in Square::all() {
            assert_eq!(Square::from_name(&sq.to_string()), Some(sq));
        }
        assert_eq!(Square::A0.to_string(), "a0");
        assert_eq!(Square::E9.to_string(), "e9");
        assert_eq!(Square::from_name("j0"), None);
        assert_eq!(Square::from_name("a"), None);
        assert_eq!(Square::from_name("a10"), None);
    }

    #[test]
    fn test_square_offset() {
        assert_eq!(Square::A0.offset(-1, 0), None);
        assert_eq!(Square::A0.offset(0, -1), None);
        assert_eq!(Square::I9.offset(1, 0), None);
        assert_eq!(Square::A0.offset(1, 2), Square::from_name("b2"));
        // 筋の端を跨いで隣の段に回り込まない
        assert_eq!(Square::I0.offset(1, 0), None);
    }

    #[test]
    fn test_square_distance() {
        let e3 = Square::from_name("e3").unwrap();
        let g4 = Square::from_name("g4").unwrap();
        assert_eq!(e3.distance(g4), 2);
        assert_eq!(Square::A0.distance(Square::I9), 9);
        assert_eq!(e3.distance(e3), 0);
    }

    #[test]
    fn test_square_mirror_flip() {
        let b2 = Square::from_name("b2").unwrap();
        assert_eq!(b2.mirror(), Square::from_name("h2").unwrap());
        assert_eq!(b2.flip(), Square::from_name("b7").unwrap());
        assert_eq!(Square::E0.flip(), Square::E9);
        for sq in Square::all() {
            assert_eq!(sq.mirror().mirror(), sq);
            assert_eq!(sq.flip().flip(), sq);
        }
    }
}
