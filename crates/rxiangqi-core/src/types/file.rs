//! 筋（File）

/// 筋（a-i、紅から見て左から右）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum File {
    FileA = 0,
    FileB = 1,
    FileC = 2,
    FileD = 3,
    FileE = 4,
    FileF = 5,
    FileG = 6,
    FileH = 7,
    FileI = 8,
}

impl File {
    /// 筋の数
    pub const NUM: usize = 9;

    /// 全ての筋
    pub const ALL: [File; File::NUM] = [
        File::FileA,
        File::FileB,
        File::FileC,
        File::FileD,
        File::FileE,
        File::FileF,
        File::FileG,
        File::FileH,
        File::FileI,
    ];

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 数値から生成
    #[inline]
    pub const fn from_index(i: usize) -> Option<File> {
        if i < File::NUM {
            Some(File::ALL[i])
        } else {
            None
        }
    }

    /// 表記用の文字（'a'-'i'）
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }

    /// 表記用の文字から変換
    #[inline]
    pub const fn from_char(c: char) -> Option<File> {
        match c {
            'a'..='i' => File::from_index(c as usize - 'a' as usize),
            _ => None,
        }
    }

    /// 左右反転（e筋軸）
    #[inline]
    pub const fn mirror(self) -> File {
        File::ALL[8 - self as usize]
    }
}
