//! ツール共通のユーティリティ

pub mod io;
pub mod rules;
