//! 指し手（Move）

use std::fmt;
use std::str::FromStr;

use super::{PieceType, Square};
use crate::error::{NotationError, NotationResult};

/// 指し手
///
/// 移動元・移動先に加えて、表記互換のための成り駒・駒打ちの欄を持つ。
/// 象棋には成りも駒打ちもないため、生成される手では両方とも `None`。
/// 全フィールドが一致するときに等しく、同じ組でハッシュされる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<PieceType>,
    drop: Option<PieceType>,
}

impl Move {
    /// null move（from == to == a0）。手番を渡すだけの手で、偽として扱う
    pub const NULL: Move = Move {
        from: Square::A0,
        to: Square::A0,
        promotion: None,
        drop: None,
    };

    /// null move の表記
    pub const NULL_UCCI: &'static str = "0000";

    /// 通常の移動手を生成
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            promotion: None,
            drop: None,
        }
    }

    /// 成り駒欄つきで生成（表記互換用）
    #[inline]
    pub const fn with_promotion(from: Square, to: Square, promotion: PieceType) -> Move {
        Move {
            from,
            to,
            promotion: Some(promotion),
            drop: None,
        }
    }

    /// 駒打ち欄つきで生成（この変種では合法にならない）
    #[inline]
    pub const fn with_drop(to: Square, piece_type: PieceType) -> Move {
        Move {
            from: to,
            to,
            promotion: None,
            drop: Some(piece_type),
        }
    }

    /// 移動元
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// 移動先
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// 成り駒欄
    #[inline]
    pub const fn promotion(self) -> Option<PieceType> {
        self.promotion
    }

    /// 駒打ち欄
    #[inline]
    pub const fn drop(self) -> Option<PieceType> {
        self.drop
    }

    /// 駒打ちか
    #[inline]
    pub const fn is_drop(self) -> bool {
        self.drop.is_some()
    }

    /// null move か
    #[inline]
    pub const fn is_null(self) -> bool {
        self.from.raw() == 0 && self.to.raw() == 0 && self.drop.is_none()
    }

    /// null move 以外か（真偽値としての評価）
    #[inline]
    pub const fn is_some(self) -> bool {
        !self.is_null()
    }

    /// UCCI形式（"h2e2"、"0000"等）から変換する。合法性は検証しない
    pub fn from_ucci(s: &str) -> NotationResult<Move> {
        if s == Self::NULL_UCCI {
            return Ok(Move::NULL);
        }
        if !s.is_ascii() || !(s.len() == 4 || s.len() == 5) {
            return Err(NotationError::InvalidMoveToken(format!(
                "expected 4 or 5 characters, got {:?}",
                s
            )));
        }

        let square = |name: &str| {
            Square::from_name(name).ok_or_else(|| {
                NotationError::InvalidMoveToken(format!("invalid square {name:?} in {s:?}"))
            })
        };
        let from = square(&s[0..2])?;
        let to = square(&s[2..4])?;

        match s[4..].chars().next() {
            None => Ok(Move::new(from, to)),
            Some(c) => PieceType::from_char(c)
                .map(|pt| Move::with_promotion(from, to, pt))
                .ok_or_else(|| {
                    NotationError::InvalidMoveToken(format!(
                        "invalid promotion piece {c:?} in {s:?}"
                    ))
                }),
        }
    }

    /// UCCI形式の文字列に変換
    pub fn to_ucci(self) -> String {
        if self.is_null() {
            return Self::NULL_UCCI.to_string();
        }
        match self.promotion {
            Some(pt) => format!("{}{}{}", self.from, self.to, pt.to_char()),
            None => format!("{}{}", self.from, self.to),
        }
    }
}

impl Default for Move {
    fn default() -> Self {
        Move::NULL
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ucci())
    }
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::from_ucci(s)
    }
}
