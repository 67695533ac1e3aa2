//! ビットボードモジュール
//!
//! 90マスの盤面を128bitで表現し、高速なビット演算を提供する。
//!
//! - `Bitboard`: 90bit盤面表現
//! - 固定の利きテーブル（帥・仕・兵）と領域マスク
//! - 跳び駒（馬・相）の占有キー付き利きテーブル
//! - 遠方駒（車・炮）の利き計算

mod core;
mod leapers;
mod sliders;
mod tables;

pub use core::Bitboard;
pub use core::BitboardIter;
pub use leapers::*;
pub use sliders::*;
pub use tables::*;
