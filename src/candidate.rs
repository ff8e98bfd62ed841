use std::fmt::Write as _;

use crate::alphabet::Alphabet;
use crate::bound::SearchBound;

/// 固定長の候補文字列。
///
/// 位置ベクトル(オドメーター)とそれに対応する文字列を同時に保持する。
/// 位置 0 が最上位桁で、右端の位置が最も速く回る。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Candidate<'a> {
    alphabet: &'a Alphabet,
    positions: Vec<usize>,
    chars: Vec<char>,
}

impl<'a> Candidate<'a> {
    /// 長さ `len` の最初の候補(全ての位置がアルファベットの先頭文字)を作る。
    ///
    /// `len` が 0 なら `None` を返す。バッファはここで 1 度だけ確保し、以降は使い回す。
    pub fn first(alphabet: &'a Alphabet, len: usize) -> Option<Self> {
        if !SearchBound::in_range(len) {
            return None;
        }

        Some(Self {
            alphabet,
            positions: vec![0; len],
            chars: vec![alphabet.char_at(0); len],
        })
    }

    /// オドメーター順で次の候補に進める。
    ///
    /// 最後の候補から進めた場合は最初の候補に戻り、`false` を返す。
    pub fn advance(&mut self) -> bool {
        let k = self.alphabet.len();

        for pos in (0..self.positions.len()).rev() {
            let idx = self.positions[pos] + 1;
            if idx < k {
                self.positions[pos] = idx;
                // SAFETY: idx < k = alphabet.len()
                self.chars[pos] = unsafe { self.alphabet.char_at_unchecked(idx) };
                return true;
            }

            // 桁上がり。
            self.positions[pos] = 0;
            self.chars[pos] = self.alphabet.char_at(0);
        }

        false
    }

    /// 文字数を返す。
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// 位置ベクトルを返す。
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// 候補の文字列を返す。
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// 候補が `target` と文字単位で完全一致するかどうかを返す。
    pub fn matches(&self, target: &[char]) -> bool {
        self.as_chars() == target
    }

    /// 候補を文字列としてフォーマットする `Display` オブジェクトを返す。
    pub fn display(&self) -> CandidateDisplay<'_> {
        CandidateDisplay { chars: &self.chars }
    }
}

#[derive(Debug)]
pub struct CandidateDisplay<'a> {
    chars: &'a [char],
}

impl std::fmt::Display for CandidateDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &ch in self.chars {
            f.write_char(ch)?;
        }

        Ok(())
    }
}

/// 長さ 1 から最大長までの全候補を探索順に返すイテレータ。
#[derive(Clone, Debug)]
pub struct Candidates<'a> {
    alphabet: &'a Alphabet,
    bound: SearchBound,
    current: Option<Candidate<'a>>,
}

impl<'a> Candidates<'a> {
    pub fn new(alphabet: &'a Alphabet, bound: SearchBound) -> Self {
        Self {
            alphabet,
            bound,
            current: Candidate::first(alphabet, SearchBound::MIN_LEN),
        }
    }
}

impl Iterator for Candidates<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let candidate = self.current.as_mut()?;
        let item = candidate.display().to_string();

        if !candidate.advance() {
            let len = candidate.len() + 1;
            self.current = if len <= self.bound.get() {
                Candidate::first(self.alphabet, len)
            } else {
                None
            };
        }

        Some(item)
    }
}

impl std::iter::FusedIterator for Candidates<'_> {}

#[cfg(test)]
mod tests {
    use itertools::{assert_equal, Itertools as _};

    use super::*;

    #[test]
    fn test_candidate_first() {
        let alphabet = Alphabet::parse("xyz").unwrap();

        let candidate = Candidate::first(&alphabet, 3).unwrap();
        assert_eq!(candidate.positions(), [0, 0, 0]);
        assert_eq!(candidate.display().to_string(), "xxx");

        assert!(Candidate::first(&alphabet, 0).is_none());

        let long = Candidate::first(&alphabet, 100).unwrap();
        assert_eq!(long.len(), 100);
    }

    #[test]
    fn test_candidate_advance() {
        let alphabet = Alphabet::parse("ab").unwrap();
        let mut candidate = Candidate::first(&alphabet, 2).unwrap();

        let mut seen = vec![candidate.display().to_string()];
        while candidate.advance() {
            seen.push(candidate.display().to_string());
        }
        assert_equal(seen, ["aa", "ab", "ba", "bb"]);

        // 一周すると最初に戻る。
        assert_eq!(candidate.positions(), [0, 0]);
        assert!(candidate.matches(&['a', 'a']));
    }

    #[test]
    fn test_candidate_advance_single_char_alphabet() {
        let alphabet = Alphabet::parse("z").unwrap();
        let mut candidate = Candidate::first(&alphabet, 4).unwrap();

        assert!(!candidate.advance());
        assert_eq!(candidate.display().to_string(), "zzzz");
    }

    #[test]
    fn test_candidates_order() {
        let alphabet = Alphabet::parse("01").unwrap();
        let bound = SearchBound::new(2).unwrap();

        assert_equal(
            Candidates::new(&alphabet, bound),
            ["0", "1", "00", "01", "10", "11"].map(String::from),
        );
    }

    #[test]
    fn test_candidates_match_cartesian_product() {
        let alphabet = Alphabet::parse("cab").unwrap();
        let bound = SearchBound::new(4).unwrap();

        let expected = bound.lengths().flat_map(|len| {
            std::iter::repeat(alphabet.iter().copied())
                .take(len)
                .multi_cartesian_product()
                .map(|chars| chars.into_iter().collect::<String>())
        });

        assert_equal(Candidates::new(&alphabet, bound), expected);
    }
}
