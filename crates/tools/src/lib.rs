//! rxiangqi ツール群の共通モジュール

pub mod common;
