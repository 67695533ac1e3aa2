//! perft（指定深さまでの合法手の総数）

use crate::position::Position;
use crate::types::Move;

/// 深さ `depth` の末端局面数
///
/// push/pop で局面を往復するので、呼び出し後の局面は呼び出し前と同じ。
pub fn perft(pos: &mut Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    if depth == 1 {
        return pos.legal_moves().count() as u64;
    }

    let mut nodes = 0;
    for mv in pos.legal_move_list() {
        pos.push(mv);
        nodes += perft(pos, depth - 1);
        pos.pop();
    }
    nodes
}

/// 初手ごとの perft（初手の生成順）
pub fn perft_divide(pos: &mut Position, depth: u32) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    pos.legal_move_list()
        .into_iter()
        .map(|mv| {
            pos.push(mv);
            let nodes = perft(pos, depth - 1);
            pos.pop();
            (mv, nodes)
        })
        .collect()
}
