use std::num::ParseIntError;

use thiserror::Error;

/// 探索する候補文字列の最大長。常に `MIN_LEN` 以上。
///
/// 上限は設けない。候補総数が `u64` を超える探索も開始はでき、
/// 総数の計算(`Alphabet::search_space` など)が `None` を返すだけである。
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SearchBound(usize);

impl SearchBound {
    /// 最大長の下限。
    pub const MIN_LEN: usize = 1;

    /// 最小値。
    pub const MIN: Self = Self(Self::MIN_LEN);

    /// 引数が値域内にあるかどうかを返す。
    pub const fn in_range(len: usize) -> bool {
        len >= Self::MIN_LEN
    }

    /// `usize` から `SearchBound` を作る。値域外なら `None` を返す。
    pub const fn new(len: usize) -> Option<Self> {
        if Self::in_range(len) {
            Some(Self(len))
        } else {
            None
        }
    }

    /// `usize` から `SearchBound` を作る。0 ならエラーを返す。
    pub fn try_new(len: usize) -> Result<Self, SearchBoundError> {
        Self::new(len).ok_or(SearchBoundError::Zero)
    }

    /// 最大長を返す。
    pub const fn get(self) -> usize {
        self.0
    }

    /// 長さ 1 から最大長までを昇順で返す。
    pub fn lengths(
        self,
    ) -> impl Iterator<Item = usize> + DoubleEndedIterator + std::iter::FusedIterator {
        Self::MIN_LEN..=self.get()
    }
}

impl From<SearchBound> for usize {
    fn from(bound: SearchBound) -> Self {
        bound.get()
    }
}

impl TryFrom<usize> for SearchBound {
    type Error = SearchBoundError;

    fn try_from(len: usize) -> Result<Self, Self::Error> {
        Self::try_new(len)
    }
}

impl std::str::FromStr for SearchBound {
    type Err = SearchBoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len: usize = s.trim().parse()?;
        Self::try_new(len)
    }
}

impl std::fmt::Display for SearchBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SearchBoundError {
    /// 最大長が 0。
    #[error("max_length must be greater than zero")]
    Zero,

    /// パースエラー。
    #[error("invalid max_length: {0}")]
    Parse(#[from] ParseIntError),
}
