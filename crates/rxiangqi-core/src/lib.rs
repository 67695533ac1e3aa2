//! # rxiangqi-core
//!
//! 象棋（シャンチー）のビットボード局面表現と指し手生成ライブラリ。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Color, Square, Piece, Move）
//! - `bitboard`: 90bit盤面表現と利きテーブル
//! - `position`: 局面表現、push/pop、局面表記、合法性判定、終局判定
//! - `movegen`: 疑似合法手・合法手の生成、perft
//! - `rules`: 対局ルール設定
//! - `error`: 表記解析エラー
//!
//! ```
//! use rxiangqi_core::Position;
//!
//! let mut pos = Position::startpos();
//! assert_eq!(pos.legal_moves().count(), 44);
//! pos.push_token("h2e2").unwrap();
//! assert_eq!(
//!     pos.to_fen(),
//!     "rheakaehr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C2C4/9/RHEAKAEHR b - - 1 1"
//! );
//! ```

// 基本型
pub mod error;
pub mod types;

// 盤面表現
pub mod bitboard;
pub mod init;
pub mod position;

// 指し手生成
pub mod movegen;

pub mod rules;

pub use error::{NotationError, NotationResult};
pub use init::init_all_tables_once;
pub use movegen::{perft, perft_divide};
pub use position::{GameResult, Position, STARTPOS_FEN, flip_fen};
pub use rules::{CheckRule, Rules, StalemateRule};
pub use types::{Color, File, Move, Piece, PieceType, Rank, Square};
