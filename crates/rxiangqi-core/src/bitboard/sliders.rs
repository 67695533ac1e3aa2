//! 遠方駒（車・炮）の利き
//!
//! 段方向・筋方向それぞれについて、升ごとの関連占有マスク（利きの経路から
//! 盤端を除いたもの）の全部分集合を carry-rippler で列挙し、
//! 部分集合ごとの利きを平坦な配列に前計算する。
//! 炮の利きは車の表から導出する。

use std::sync::OnceLock;

use crate::types::Square;

use super::Bitboard;

/// 方向（RAY_BB の添字）
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North = 0,
    South = 1,
    East = 2,
    West = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// 筋・段の差分
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// 逆方向
    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

/// 各方向の盤端までの経路（起点を含まない）[Direction][Square]
pub static RAY_BB: [[Bitboard; Square::NUM]; 4] = init_ray_bb();

const fn init_ray_bb() -> [[Bitboard; Square::NUM]; 4] {
    let mut result = [[Bitboard::EMPTY; Square::NUM]; 4];
    let mut d = 0;
    while d < 4 {
        let (df, dr) = Direction::ALL[d].delta();
        let mut sq = 0;
        while sq < Square::NUM {
            let mut bb = Bitboard::EMPTY;
            let mut cur = Square::from_u8_unchecked(sq as u8);
            while let Some(next) = cur.offset(df, dr) {
                bb = bb.with(next);
                cur = next;
            }
            result[d][sq] = bb;
            sq += 1;
        }
        d += 1;
    }
    result
}

/// 指定方向の経路
#[inline]
pub fn ray_bb(dir: Direction, sq: Square) -> Bitboard {
    RAY_BB[dir as usize][sq.index()]
}

/// 2升の間（両端を含まない）。同じ筋・段にない場合は空
pub fn between_bb(a: Square, b: Square) -> Bitboard {
    for dir in Direction::ALL {
        if ray_bb(dir, a).contains(b) {
            return ray_bb(dir, a) & ray_bb(dir.opposite(), b);
        }
    }
    Bitboard::EMPTY
}

/// 1方向分の表の位置
#[derive(Clone, Copy, Default)]
struct SliderEntry {
    /// 関連占有マスク
    mask: Bitboard,
    /// attacks 配列内の開始位置
    offset: usize,
}

struct SliderTable {
    /// 段方向（東西）[Square]
    rank: [SliderEntry; Square::NUM],
    /// 筋方向（南北）[Square]
    file: [SliderEntry; Square::NUM],
    attacks: Vec<Bitboard>,
}

static SLIDER_ATTACKS: OnceLock<SliderTable> = OnceLock::new();

fn slider_attacks() -> &'static SliderTable {
    SLIDER_ATTACKS.get_or_init(SliderTable::new)
}

impl SliderTable {
    fn new() -> Self {
        let mut attacks = Vec::new();
        let rank = init_slider_entries(&[Direction::East, Direction::West], &mut attacks);
        let file = init_slider_entries(&[Direction::North, Direction::South], &mut attacks);
        log::debug!("slider tables built: {} entries", attacks.len());

        SliderTable {
            rank,
            file,
            attacks,
        }
    }

    #[inline]
    fn lookup(&self, entry: &SliderEntry, occupied: Bitboard) -> Bitboard {
        self.attacks[entry.offset + pext(occupied, entry.mask)]
    }
}

fn init_slider_entries(
    dirs: &[Direction; 2],
    attacks: &mut Vec<Bitboard>,
) -> [SliderEntry; Square::NUM] {
    let mut entries = [SliderEntry::default(); Square::NUM];
    for sq in Square::all() {
        let mask = relevant_mask(sq, dirs);
        let offset = attacks.len();
        attacks.resize(offset + (1usize << mask.count()), Bitboard::EMPTY);

        // carry-rippler で mask の全部分集合を列挙
        let mut subset = 0u128;
        loop {
            let occ = Bitboard::new(subset);
            attacks[offset + pext(occ, mask)] = sliding_effect(sq, occ, dirs);
            subset = subset.wrapping_sub(mask.bits()) & mask.bits();
            if subset == 0 {
                break;
            }
        }

        entries[sq.index()] = SliderEntry { mask, offset };
    }
    entries
}

/// 経路から盤端の1マスを除いたマスク（端のマスの占有は利きに影響しない）
fn relevant_mask(sq: Square, dirs: &[Direction; 2]) -> Bitboard {
    let mut mask = Bitboard::EMPTY;
    for &dir in dirs {
        let ray = ray_bb(dir, sq);
        let edge = match dir {
            Direction::North | Direction::East => ray.msb(),
            Direction::South | Direction::West => ray.lsb(),
        };
        if let Some(edge) = edge {
            mask |= ray & !Bitboard::from_square(edge);
        }
    }
    mask
}

/// 1マスずつ進めて最初の駒（を含む）までを集める
fn sliding_effect(sq: Square, occupied: Bitboard, dirs: &[Direction]) -> Bitboard {
    let mut bb = Bitboard::EMPTY;
    for dir in dirs {
        let (df, dr) = dir.delta();
        let mut cur = sq;
        while let Some(next) = cur.offset(df, dr) {
            bb.set(next);
            if occupied.contains(next) {
                break;
            }
            cur = next;
        }
    }
    bb
}

/// mask のビット位置の占有を下位ビットから詰めて取り出す（ソフトウェアpext）
#[inline]
fn pext(occupied: Bitboard, mask: Bitboard) -> usize {
    let mut index = 0;
    for (bit, sq) in mask.iter().enumerate() {
        if occupied.contains(sq) {
            index |= 1 << bit;
        }
    }
    index
}

/// 段方向の利き
#[inline]
pub fn rank_effect(sq: Square, occupied: Bitboard) -> Bitboard {
    let t = slider_attacks();
    t.lookup(&t.rank[sq.index()], occupied)
}

/// 筋方向の利き
#[inline]
pub fn file_effect(sq: Square, occupied: Bitboard) -> Bitboard {
    let t = slider_attacks();
    t.lookup(&t.file[sq.index()], occupied)
}

/// 車の利き（4方向、最初の駒を含む）
#[inline]
pub fn rook_effect(sq: Square, occupied: Bitboard) -> Bitboard {
    rank_effect(sq, occupied) | file_effect(sq, occupied)
}

/// 炮の駒を取らない移動先（最初の駒の手前まで）
#[inline]
pub fn cannon_slide_effect(sq: Square, occupied: Bitboard) -> Bitboard {
    rook_effect(sq, occupied) & !occupied
}

/// 炮の取り先（各方向で、ちょうど1枚の駒（砲台）を越えた先の最初の駒）
///
/// 取り先の駒の色は考慮しない。
pub fn cannon_capture_effect(sq: Square, occupied: Bitboard) -> Bitboard {
    let near = rook_effect(sq, occupied) & occupied;
    let mut bb = Bitboard::EMPTY;
    for dir in Direction::ALL {
        let Some(screen) = (near & ray_bb(dir, sq)).lsb() else {
            continue;
        };
        bb |= rook_effect(screen, occupied) & occupied & ray_bb(dir, screen);
    }
    bb
}

/// 炮の利き（移動先と取り先の和）
#[inline]
pub fn cannon_effect(sq: Square, occupied: Bitboard) -> Bitboard {
    cannon_slide_effect(sq, occupied) | cannon_capture_effect(sq, occupied)
}

/// 表を強制的に構築する
pub(crate) fn init_slider_tables() {
    let _ = slider_attacks();
}
