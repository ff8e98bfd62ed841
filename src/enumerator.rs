use std::time::Instant;

use thiserror::Error;

use crate::alphabet::{Alphabet, AlphabetError};
use crate::bound::{SearchBound, SearchBoundError};
use crate::cancel::{CancelSignal, NeverCancel};
use crate::candidate::{Candidate, Candidates};
use crate::result::SearchResult;

/// アルファベットと最大長を固定した全探索エンジン。
///
/// 長さ 1 から最大長まで、各長さについて全ての候補をオドメーター順
/// (位置 0 が最上位桁、右端が最も速く回る)に生成する。
/// エンジン自身は状態を持たないので、複数スレッドで共有して同時に探索してよい。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Enumerator {
    alphabet: Alphabet,
    bound: SearchBound,
}

impl Enumerator {
    pub fn new(alphabet: Alphabet, bound: SearchBound) -> Self {
        Self { alphabet, bound }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn bound(&self) -> SearchBound {
        self.bound
    }

    /// 探索空間の大きさ(全長さの候補数の合計)を返す。`u64` に収まらなければ `None`。
    pub fn search_space(&self) -> Option<u64> {
        self.alphabet.search_space(self.bound)
    }

    /// `target` と完全一致する候補を探す。
    ///
    /// `target` が空ならエラーを返す。アルファベットで表せない `target` はエラーではなく、
    /// 探索空間を尽くして見つからなかったという結果になる。
    pub fn search(&self, target: &str) -> Result<SearchResult, SearchError> {
        self.search_cancellable(target, NeverCancel)
    }

    /// `search` と同じだが、`cancel` によって打ち切れる。
    pub fn search_cancellable(
        &self,
        target: &str,
        cancel: impl CancelSignal,
    ) -> Result<SearchResult, SearchError> {
        if target.is_empty() {
            return Err(SearchError::EmptyTarget);
        }

        let target: Vec<char> = target.chars().collect();
        Ok(self.search_with(|candidate| candidate.matches(&target), cancel))
    }

    /// `predicate` を満たす最初の候補を探す。
    ///
    /// 完全な候補 1 つごとに、まず `cancel` を確認し、次に試行回数を 1 増やしてから
    /// `predicate` を呼ぶ。途中の接頭辞は試行に数えない。
    /// `predicate` に渡される候補はバッファが使い回されるため、呼び出しを越えて保持できない。
    pub fn search_with<P, C>(&self, mut predicate: P, cancel: C) -> SearchResult
    where
        P: FnMut(&Candidate<'_>) -> bool,
        C: CancelSignal,
    {
        let mut attempts: u64 = 0;
        let start = Instant::now();

        for len in self.bound.lengths() {
            let Some(mut candidate) = Candidate::first(&self.alphabet, len) else {
                break;
            };

            loop {
                if cancel.is_cancelled() {
                    return SearchResult::cancelled(attempts, start.elapsed());
                }

                attempts += 1;
                if predicate(&candidate) {
                    let elapsed = start.elapsed();
                    return SearchResult::found(candidate.display().to_string(), attempts, elapsed);
                }

                if !candidate.advance() {
                    break;
                }
            }
        }

        SearchResult::exhausted(attempts, start.elapsed())
    }

    /// 全ての候補を探索順に返すイテレータを返す。
    pub fn candidates(&self) -> Candidates<'_> {
        Candidates::new(&self.alphabet, self.bound)
    }
}

/// `target` をアルファベット `alphabet` の長さ `max_length` 以下の候補から全探索する。
pub fn search(
    target: &str,
    max_length: usize,
    alphabet: &Alphabet,
) -> Result<SearchResult, SearchError> {
    let bound = SearchBound::try_new(max_length)?;
    Enumerator::new(alphabet.clone(), bound).search(target)
}

/// `search` と同じだが、アルファベットを文字列で受け取る。
pub fn search_charset(
    target: &str,
    max_length: usize,
    charset: &str,
) -> Result<SearchResult, SearchError> {
    let alphabet = Alphabet::parse(charset)?;
    search(target, max_length, &alphabet)
}

/// `target` が何回目の試行で見つかるか(1 始まり)を計算で求める。
///
/// `target` が空、アルファベット外の文字を含む、または回数が `u64` に収まらない場合は
/// `None` を返す。最大長が `target` の文字数以上であれば `search` の試行回数と一致する。
pub fn odometer_rank(target: &str, alphabet: &Alphabet) -> Option<u64> {
    let len = target.chars().count();
    if !SearchBound::in_range(len) {
        return None;
    }

    let k = u64::try_from(alphabet.len()).ok()?;

    // 短い長さの候補は全て先に試される。
    let shorter = match SearchBound::new(len - 1) {
        Some(bound) => alphabet.search_space(bound)?,
        None => 0,
    };

    let mut rank: u64 = 0;
    for ch in target.chars() {
        let pos = u64::try_from(alphabet.position(ch)?).ok()?;
        rank = rank.checked_mul(k)?.checked_add(pos)?;
    }

    shorter.checked_add(rank)?.checked_add(1)
}

/// 探索開始前に検出されるエラー。いずれの場合も試行は 1 回も行われない。
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SearchError {
    /// アルファベットが無効。
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(#[from] AlphabetError),

    /// 最大長が無効。
    #[error("invalid search bound: {0}")]
    InvalidSearchBound(#[from] SearchBoundError),

    /// 探索対象が空文字列。
    #[error("target cannot be empty")]
    EmptyTarget,
}
