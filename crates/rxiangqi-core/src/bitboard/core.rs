//! Bitboard（90bit盤面表現）

use crate::types::Square;

/// Bitboard（u128の下位90bitを使用）
///
/// 横型配置: bit index = rank * 9 + file（Square::index と同じ）
/// bit 90-127 は常に0に保つ。
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(transparent)]
pub struct Bitboard {
    p: u128,
}

impl Bitboard {
    /// 有効ビットのマスク
    const MASK: u128 = (1u128 << Square::NUM) - 1;

    /// 空のBitboard
    pub const EMPTY: Bitboard = Bitboard { p: 0 };

    /// 全マスが立っているBitboard
    pub const ALL: Bitboard = Bitboard { p: Self::MASK };

    /// 内部値を直接指定して生成（盤外ビットは落とす）
    #[inline]
    pub const fn new(p: u128) -> Bitboard {
        Bitboard { p: p & Self::MASK }
    }

    /// 単一マスのBitboard
    #[inline]
    pub const fn from_square(sq: Square) -> Bitboard {
        Bitboard {
            p: 1u128 << sq.index(),
        }
    }

    /// 空かどうか
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.p == 0
    }

    /// 空でないかどうか
    #[inline]
    pub const fn is_not_empty(self) -> bool {
        self.p != 0
    }

    /// 内部値を取得
    #[inline]
    pub const fn bits(self) -> u128 {
        self.p
    }

    /// ビットが立っている数
    #[inline]
    pub const fn count(self) -> u32 {
        self.p.count_ones()
    }

    /// 最下位ビットのSquareを取得して消す
    #[inline]
    pub fn pop(&mut self) -> Square {
        debug_assert!(!self.is_empty(), "pop() called on empty Bitboard");
        let idx = self.p.trailing_zeros();
        self.p &= self.p.wrapping_sub(1);
        Square::from_u8_unchecked(idx as u8)
    }

    /// 最下位ビットのSquareを取得（消さない）
    #[inline]
    pub const fn lsb(self) -> Option<Square> {
        if self.is_empty() {
            None
        } else {
            Some(Square::from_u8_unchecked(self.p.trailing_zeros() as u8))
        }
    }

    /// 最上位ビットのSquareを取得（消さない）
    #[inline]
    pub const fn msb(self) -> Option<Square> {
        if self.is_empty() {
            None
        } else {
            Some(Square::from_u8_unchecked((127 - self.p.leading_zeros()) as u8))
        }
    }

    /// 指定マスにビットが立っているか
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.p >> sq.index()) & 1 != 0
    }

    /// ビットを立てる
    #[inline]
    pub fn set(&mut self, sq: Square) {
        self.p |= 1u128 << sq.index();
    }

    /// ビットを消す
    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.p &= !(1u128 << sq.index());
    }

    /// ビットを立てたBitboardを返す（const文脈用）
    #[inline]
    pub const fn with(self, sq: Square) -> Bitboard {
        Bitboard {
            p: self.p | (1u128 << sq.index()),
        }
    }

    /// イテレータを返す
    #[inline]
    pub const fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }
}

// ビット演算
impl std::ops::BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard { p: self.p & rhs.p }
    }
}

impl std::ops::BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.p &= rhs.p;
    }
}

impl std::ops::BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard { p: self.p | rhs.p }
    }
}

impl std::ops::BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.p |= rhs.p;
    }
}

impl std::ops::BitXor for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitxor(self, rhs: Bitboard) -> Bitboard {
        Bitboard { p: self.p ^ rhs.p }
    }
}

impl std::ops::BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Bitboard) {
        self.p ^= rhs.p;
    }
}

impl std::ops::Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Bitboard {
        // 未使用ビットはマスク
        Bitboard {
            p: !self.p & Self::MASK,
        }
    }
}

impl std::fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Bitboard {{")?;
        // 盤面形式で表示（9段目から0段目、a筋からi筋）
        for rank in (0..10).rev() {
            write!(f, "  ")?;
            for file in 0..9 {
                let bit = (self.p >> (rank * 9 + file)) & 1;
                write!(f, "{}", if bit == 1 { "●" } else { "・" })?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut bb = Bitboard::EMPTY;
        for sq in iter {
            bb.set(sq);
        }
        bb
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    #[inline]
    fn into_iter(self) -> BitboardIter {
        self.iter()
    }
}

/// Bitboardイテレータ（升目の昇順）
#[derive(Clone)]
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.pop())
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for BitboardIter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_name(name).unwrap()
    }

    #[test]
    fn test_bitboard_empty() {
        let bb = Bitboard::EMPTY;
        assert!(bb.is_empty());
        assert!(!bb.is_not_empty());
        assert_eq!(bb.count(), 0);
        assert_eq!(bb.lsb(), None);
        assert_eq!(bb.msb(), None);
    }

    #[test]
    fn test_bitboard_all() {
        let bb = Bitboard::ALL;
        assert!(bb.is_not_empty());
        assert_eq!(bb.count(), 90);
        assert_eq!(bb.lsb(), Some(Square::A0));
        assert_eq!(bb.msb(), Some(Square::I9));
    }

    #[test]
    fn test_bitboard_new_masks_off_board_bits() {
        let bb = Bitboard::new(u128::MAX);
        assert_eq!(bb, Bitboard::ALL);
    }

    #[test]
    fn test_bitboard_set_clear() {
        let mut bb = Bitboard::EMPTY;
        let e3 = sq("e3");

        bb.set(e3);
        assert!(bb.contains(e3));
        assert_eq!(bb.count(), 1);

        bb.clear(e3);
        assert!(!bb.contains(e3));
    }

    #[test]
    fn test_bitboard_lsb_pop() {
        let a = sq("b2");
        let b = sq("h7");
        let mut bb = Bitboard::from_square(a) | Bitboard::from_square(b);

        assert_eq!(bb.lsb(), Some(a));
        assert_eq!(bb.msb(), Some(b));
        assert_eq!(bb.pop(), a);
        assert_eq!(bb.pop(), b);
        assert!(bb.is_empty());
    }

    #[test]
    fn test_bitboard_set_algebra() {
        let a = Bitboard::from_square(sq("a0")) | Bitboard::from_square(sq("b0"));
        let b = Bitboard::from_square(sq("b0")) | Bitboard::from_square(sq("c0"));

        assert_eq!((a & b).count(), 1);
        assert_eq!((a | b).count(), 3);
        assert_eq!((a ^ b).count(), 2);
        assert_eq!(!Bitboard::EMPTY, Bitboard::ALL);
        assert_eq!(!Bitboard::ALL, Bitboard::EMPTY);
        assert_eq!((!a).count(), 88);
    }

    #[test]
    fn test_bitboard_iter_order() {
        let bb: Bitboard = [sq("i9"), sq("a0"), sq("e4")].into_iter().collect();
        let squares: Vec<_> = bb.iter().collect();
        assert_eq!(squares, vec![sq("a0"), sq("e4"), sq("i9")]);
        assert_eq!(bb.iter().len(), 3);
    }
}
