//! 指し手リスト

use smallvec::SmallVec;

use crate::types::Move;

/// 1局面の合法手の最大数の目安（これを超えるとヒープに移る）
pub const MAX_MOVES: usize = 128;

/// 指し手リスト
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: SmallVec<[Move; MAX_MOVES]>,
}

impl MoveList {
    /// 空のMoveListを作成
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// 指し手の数
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// 空かどうか
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// イテレータを取得
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// 指定された指し手が含まれているか
    pub fn contains(&self, mv: Move) -> bool {
        self.moves.contains(&mv)
    }

    /// 指し手を追加
    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// スライスとして取得
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, i: usize) -> &Move {
        &self.moves[i]
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = smallvec::IntoIter<[Move; MAX_MOVES]>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    #[test]
    fn test_push_and_contains() {
        let mut list = MoveList::new();
        assert!(list.is_empty());
        let mv = Move::new(Square::E0, Square::E9);
        list.push(mv);
        assert_eq!(list.len(), 1);
        assert!(list.contains(mv));
        assert!(!list.contains(Move::NULL));
        assert_eq!(list[0], mv);
    }

    #[test]
    fn test_spills_past_inline_capacity() {
        let list: MoveList = (0..MAX_MOVES + 10).map(|_| Move::NULL).collect();
        assert_eq!(list.len(), MAX_MOVES + 10);
        assert_eq!(list.into_iter().count(), MAX_MOVES + 10);
    }
}
