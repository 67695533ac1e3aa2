//! 指し手生成モジュール
//!
//! - 疑似合法手・合法手の遅延イテレータ
//! - 指し手リスト
//! - perft

mod generator;
mod movelist;
mod perft;

pub use generator::{LegalMoves, PseudoLegalMoves, destinations};
pub use movelist::{MAX_MOVES, MoveList};
pub use perft::{perft, perft_divide};
