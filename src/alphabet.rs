use std::fmt::Write as _;

use thiserror::Error;

use crate::bound::SearchBound;
use crate::macros::assert_unchecked;

/// 候補文字列の各位置に使える文字の集合。
///
/// 文字の並び順がそのまま列挙順になる。空でなく、重複を含まないことが保証される。
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Alphabet(Box<[char]>);

impl Alphabet {
    /// デフォルトの文字集合(英小文字と数字)。
    pub const DEFAULT_CHARS: &'static str = "abcdefghijklmnopqrstuvwxyz0123456789";

    /// `char` のスライスから `Alphabet` を作る。
    ///
    /// 空の場合、または同じ文字が 2 回以上現れる場合はエラーを返す。
    /// `DuplicateChar` の `pos` は 2 回目に現れた位置を指す。
    pub fn new(chars: &[char]) -> Result<Self, AlphabetError> {
        if chars.is_empty() {
            return Err(AlphabetError::Empty);
        }

        for (pos, &ch) in chars.iter().enumerate() {
            if chars[..pos].contains(&ch) {
                return Err(AlphabetError::DuplicateChar { pos, ch });
            }
        }

        Ok(Self(chars.into()))
    }

    /// 文字列をパースして `Alphabet` を作る。
    pub fn parse(s: &str) -> Result<Self, AlphabetError> {
        let chars: Vec<char> = s.chars().collect();
        Self::new(&chars)
    }

    /// 文字数を返す。
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 全ての文字を列挙順に含むスライスを返す。
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    /// `i` 番目の文字を返す。範囲外なら `None` を返す。
    pub fn get(&self, i: usize) -> Option<char> {
        self.0.get(i).copied()
    }

    /// `i` 番目の文字を返す。
    ///
    /// # Panics
    ///
    /// `i >= self.len()` ならばビルド設定によらず panic する。
    pub fn char_at(&self, i: usize) -> char {
        match self.get(i) {
            Some(ch) => ch,
            None => panic!(
                "alphabet index out of range: the len is {} but the index is {i}",
                self.len()
            ),
        }
    }

    /// `i` 番目の文字を返す。
    ///
    /// # Safety
    ///
    /// `i < self.len()` でなければならない。デバッグビルドでは違反時に panic する。
    pub unsafe fn char_at_unchecked(&self, i: usize) -> char {
        assert_unchecked!(i < self.len());
        *self.0.get_unchecked(i)
    }

    /// 文字の位置を返す。含まれない文字に対しては `None` を返す。
    pub fn position(&self, ch: char) -> Option<usize> {
        self.0.iter().position(|&c| c == ch)
    }

    /// 長さ 1 から `bound` までの候補の総数を返す。`u64` に収まらなければ `None` を返す。
    pub fn search_space(&self, bound: SearchBound) -> Option<u64> {
        let k = u64::try_from(self.len()).ok()?;
        if k == 1 {
            return u64::try_from(bound.get()).ok();
        }

        // k >= 2 なら高々 64 回で溢れる。
        let mut total: u64 = 0;
        let mut layer: u64 = 1;
        for _ in 0..bound.get() {
            layer = layer.checked_mul(k)?;
            total = total.checked_add(layer)?;
        }

        Some(total)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        let chars: Vec<char> = Self::DEFAULT_CHARS.chars().collect();
        Self(chars.into_boxed_slice())
    }
}

impl std::str::FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::ops::Deref for Alphabet {
    type Target = [char];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &ch in self.iter() {
            f.write_char(ch)?;
        }

        Ok(())
    }
}

/// `Alphabet` の構築時に発生しうるエラー。
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum AlphabetError {
    /// 文字が 1 つもない。
    #[error("charset cannot be empty")]
    Empty,

    /// 同じ文字が複数回現れる。
    #[error("charset contains a duplicate character '{ch}' at position {pos}")]
    DuplicateChar { pos: usize, ch: char },
}
