//! 静的テーブルの初期化
//!
//! 占有依存の利きテーブル（馬・相・車/炮）は初回参照時に構築されるが、
//! 複数スレッドから局面を扱う前に明示的にまとめて構築しておくための入口を提供する。

use std::sync::Once;

use crate::bitboard::{init_leaper_tables, init_slider_tables};

static INIT_ONCE: Once = Once::new();

/// すべての静的テーブルを一度だけ初期化する
///
/// 何度呼んでもよく、どのスレッドから呼んでもよい。
/// 構築順は 跳び駒 → 遠方駒（互いに依存しない）。
pub fn init_all_tables_once() {
    INIT_ONCE.call_once(|| {
        init_leaper_tables();
        init_slider_tables();
    });
}

/// 初期化済みかどうか（デバッグ用）
#[cfg(debug_assertions)]
pub fn is_initialized() -> bool {
    INIT_ONCE.is_completed()
}
