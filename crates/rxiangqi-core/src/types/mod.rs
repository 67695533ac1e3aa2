//! 基本型
//!
//! - `Color`: 手番（紅/黒）
//! - `File` / `Rank` / `Square`: 座標
//! - `PieceType` / `Piece`: 駒
//! - `Move`: 指し手

mod color;
mod file;
mod moves;
mod piece;
mod rank;
mod square;

pub use color::Color;
pub use file::File;
pub use moves::Move;
pub use piece::{Piece, PieceType};
pub use rank::Rank;
pub use square::Square;
