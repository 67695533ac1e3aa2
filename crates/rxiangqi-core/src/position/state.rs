//! 局面状態（StateInfo）

use crate::types::Color;

use super::board::Board;

/// push 前の局面のスナップショット
///
/// push 時に積み、pop 時にそのまま復元する。盤面は `Copy` 値なので
/// 差分を持たずに丸ごと保存する。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateInfo {
    pub board: Board,
    pub side_to_move: Color,
    /// 駒取りからの半手数
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}
