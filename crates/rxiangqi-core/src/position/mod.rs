//! 局面表現モジュール
//!
//! 象棋の局面を表現し、手の実行・巻き戻しを行う。
//!
//! - `Position`: 局面
//! - `Board`: 駒配置（Copy値）
//! - `StateInfo`: push 前の局面状態
//! - `push` / `pop`: 手の実行と巻き戻し
//! - FEN形式の解析・出力
//! - 合法性判定・終局判定
//! - 学習器向けの入力平面

mod board;
mod do_move;
mod features;
mod fen;
mod game;
mod legality;
mod pos;
mod state;

pub use board::Board;
pub use features::{InputPlanes, NUM_PLANES, canonical_input_planes, input_planes};
pub use fen::{STARTPOS_FEN, flip_fen};
pub use game::GameResult;
pub use pos::Position;
pub use state::StateInfo;
