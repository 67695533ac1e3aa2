//! 対局ルール設定
//!
//! 合法性判定・終局判定の差異をまとめる。既定値は最小限の規則
//! （将帥対面のみ禁止、欠着は引き分け、150半手で打ち切り）。

use serde::{Deserialize, Serialize};

/// 合法手判定の規則
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckRule {
    /// 将帥対面になる手のみ禁止
    #[default]
    FlyingGenerals,
    /// 加えて、自分の将（帥）に利きが残る手も禁止
    KingSafety,
}

/// 手がない（王手されていない）局面の扱い
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StalemateRule {
    #[default]
    Draw,
    /// 手番側の負け
    Loss,
}

/// ルール一式
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub check_rule: CheckRule,
    pub stalemate: StalemateRule,
    /// 駒取りのない半手数の上限。これに達すると引き分けで、以降は合法手がない
    pub no_progress_limit: u32,
}

impl Rules {
    pub const DEFAULT_NO_PROGRESS_LIMIT: u32 = 150;

    /// 自玉の安全も確認する規則
    pub fn king_safety() -> Self {
        Rules {
            check_rule: CheckRule::KingSafety,
            ..Rules::default()
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            check_rule: CheckRule::default(),
            stalemate: StalemateRule::default(),
            no_progress_limit: Self::DEFAULT_NO_PROGRESS_LIMIT,
        }
    }
}
