//! 馬・相の利き（脚・眼の塞がりを考慮する跳び駒）
//!
//! どちらも「途中の1マスに駒があれば跳べない」駒なので、
//! 隣接4マスの占有状態（4bit、16通り）をキーにした表を引く。
//! 表は規則から直接作る: キーのビットが立っている（=塞がれている）方向の
//! 跳び先は候補から外す。占有ビットが跳び先を増やすことはない。

use std::sync::OnceLock;

use crate::types::{Color, Square};

use super::{Bitboard, ELEPHANT_POINTS_BB};

/// 占有キーの状態数（隣接4マス分のビット）
const KEY_NUM: usize = 16;

/// 縦横の隣（馬の脚）: 北・南・東・西
const ORTHOGONAL: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// 斜めの隣（相の眼）: 北東・北西・南東・南西
const DIAGONAL: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// 馬の8方向の跳び先と、それを塞ぐ脚（ORTHOGONAL のインデックス）
const HORSE_JUMPS: [((i32, i32), usize); 8] = [
    ((1, 2), 0),
    ((-1, 2), 0),
    ((1, -2), 1),
    ((-1, -2), 1),
    ((2, 1), 2),
    ((2, -1), 2),
    ((-2, 1), 3),
    ((-2, -1), 3),
];

struct LeaperTable {
    /// 縦横の隣接マス [Square][方向]
    orthogonal: [[Option<Square>; 4]; Square::NUM],
    /// 斜めの隣接マス [Square][方向]
    diagonal: [[Option<Square>; 4]; Square::NUM],
    /// 馬の利き [Square][脚の占有キー]
    horse: [[Bitboard; KEY_NUM]; Square::NUM],
    /// 相の利き [Color][Square][眼の占有キー]
    elephant: [[[Bitboard; KEY_NUM]; Square::NUM]; Color::NUM],
}

static LEAPER_ATTACKS: OnceLock<LeaperTable> = OnceLock::new();

fn leaper_attacks() -> &'static LeaperTable {
    LEAPER_ATTACKS.get_or_init(LeaperTable::new)
}

impl LeaperTable {
    fn new() -> Self {
        let orthogonal = init_neighbors(&ORTHOGONAL);
        let diagonal = init_neighbors(&DIAGONAL);
        let horse = init_horse_effect();
        let elephant = init_elephant_effect();
        log::debug!(
            "leaper tables built: horse {}x{}, elephant {}x{}x{}",
            Square::NUM,
            KEY_NUM,
            Color::NUM,
            Square::NUM,
            KEY_NUM
        );

        LeaperTable {
            orthogonal,
            diagonal,
            horse,
            elephant,
        }
    }
}

fn init_neighbors(deltas: &[(i32, i32); 4]) -> [[Option<Square>; 4]; Square::NUM] {
    let mut table = [[None; 4]; Square::NUM];
    for sq in Square::all() {
        for (dir, &(df, dr)) in deltas.iter().enumerate() {
            table[sq.index()][dir] = sq.offset(df, dr);
        }
    }
    table
}

fn init_horse_effect() -> [[Bitboard; KEY_NUM]; Square::NUM] {
    let mut table = [[Bitboard::EMPTY; KEY_NUM]; Square::NUM];
    for sq in Square::all() {
        for key in 0..KEY_NUM {
            let mut bb = Bitboard::EMPTY;
            for &((df, dr), leg) in &HORSE_JUMPS {
                // 脚が塞がっている跳びは除外
                if key & (1 << leg) != 0 {
                    continue;
                }
                if let Some(to) = sq.offset(df, dr) {
                    bb.set(to);
                }
            }
            table[sq.index()][key] = bb;
        }
    }
    table
}

fn init_elephant_effect() -> [[[Bitboard; KEY_NUM]; Square::NUM]; Color::NUM] {
    let mut table = [[[Bitboard::EMPTY; KEY_NUM]; Square::NUM]; Color::NUM];
    for c in Color::ALL {
        let points = ELEPHANT_POINTS_BB[c.index()];
        for sq in points {
            for key in 0..KEY_NUM {
                let mut bb = Bitboard::EMPTY;
                for (eye, &(df, dr)) in DIAGONAL.iter().enumerate() {
                    // 眼が塞がっている跳びは除外
                    if key & (1 << eye) != 0 {
                        continue;
                    }
                    if let Some(to) = sq.offset(2 * df, 2 * dr) {
                        if points.contains(to) {
                            bb.set(to);
                        }
                    }
                }
                table[c.index()][sq.index()][key] = bb;
            }
        }
    }
    table
}

/// 隣接4マスの占有状態をキーに変換
#[inline]
fn occupancy_key(neighbors: &[Option<Square>; 4], occupied: Bitboard) -> usize {
    let mut key = 0;
    for (bit, n) in neighbors.iter().enumerate() {
        if let Some(n) = n {
            if occupied.contains(*n) {
                key |= 1 << bit;
            }
        }
    }
    key
}

/// 馬の利き
///
/// 脚（跳ぶ方向に縦横1マス隣）に駒があればその方向の2つの跳び先は除かれる。
/// 跳び先の駒の色は考慮しない。
#[inline]
pub fn horse_effect(sq: Square, occupied: Bitboard) -> Bitboard {
    let t = leaper_attacks();
    let key = occupancy_key(&t.orthogonal[sq.index()], occupied);
    t.horse[sq.index()][key]
}

/// 相/象の利き
///
/// 自陣の7点の間の斜め2マスの跳び。眼（斜め1マス隣）に駒があれば跳べない。
#[inline]
pub fn elephant_effect(c: Color, sq: Square, occupied: Bitboard) -> Bitboard {
    let t = leaper_attacks();
    let key = occupancy_key(&t.diagonal[sq.index()], occupied);
    t.elephant[c.index()][sq.index()][key]
}

/// 表を強制的に構築する
pub(crate) fn init_leaper_tables() {
    let _ = leaper_attacks();
}
