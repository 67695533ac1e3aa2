//! 表記の解析エラー
//!
//! 局面表記・指し手表記の入力検証で発生するエラーのみを扱う。
//! それ以外の局面操作は妥当な局面に対して全域的で、失敗しない。

/// 表記解析エラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// 局面表記の形式が不正（段数・列数・文字・フィールド数・手数）
    #[error("Malformed notation: {0}")]
    MalformedNotation(String),

    /// 指し手表記の形式が不正
    #[error("Invalid move token: {0}")]
    InvalidMoveToken(String),

    /// 指し手表記は読めたが、現局面で合法でない
    #[error("Illegal move: {token} in {fen}")]
    IllegalMove { token: String, fen: String },
}

/// 表記解析の結果型
pub type NotationResult<T> = Result<T, NotationError>;
