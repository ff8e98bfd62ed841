use std::time::Duration;

/// 探索の終わり方。
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SearchOutcome {
    /// 述語を満たす候補が見つかった。
    Found,
    /// 全ての候補を試したが見つからなかった。
    Exhausted,
    /// 探索空間を尽くす前にキャンセルされた。
    Cancelled,
}

/// 1 回の探索の結果。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchResult {
    matched: Option<String>,
    attempts: u64,
    elapsed: Duration,
    cancelled: bool,
}

impl SearchResult {
    pub(crate) fn found(matched: String, attempts: u64, elapsed: Duration) -> Self {
        Self {
            matched: Some(matched),
            attempts,
            elapsed,
            cancelled: false,
        }
    }

    pub(crate) fn exhausted(attempts: u64, elapsed: Duration) -> Self {
        Self {
            matched: None,
            attempts,
            elapsed,
            cancelled: false,
        }
    }

    pub(crate) fn cancelled(attempts: u64, elapsed: Duration) -> Self {
        Self {
            matched: None,
            attempts,
            elapsed,
            cancelled: true,
        }
    }

    /// 一致する候補が見つかったかどうかを返す。
    pub fn is_found(&self) -> bool {
        self.matched.is_some()
    }

    /// 見つかった候補を返す。
    pub fn matched(&self) -> Option<&str> {
        self.matched.as_deref()
    }

    /// 評価した完全な候補の数を返す。
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// 探索にかかった時間を返す。
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// キャンセルによって打ち切られたかどうかを返す。
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn outcome(&self) -> SearchOutcome {
        if self.is_found() {
            SearchOutcome::Found
        } else if self.cancelled {
            SearchOutcome::Cancelled
        } else {
            SearchOutcome::Exhausted
        }
    }

    /// 経過時間を除いて等しいかどうかを返す。
    pub fn same_outcome(&self, other: &Self) -> bool {
        self.matched == other.matched
            && self.attempts == other.attempts
            && self.cancelled == other.cancelled
    }
}

/// 3 行のレポート(結果・試行回数・経過ミリ秒)としてフォーマットする。
impl std::fmt::Display for SearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.outcome() {
            SearchOutcome::Found => {
                writeln!(f, "Password found: {}", self.matched.as_deref().unwrap_or_default())?
            }
            SearchOutcome::Exhausted => {
                writeln!(f, "Password not found within the provided limits.")?
            }
            SearchOutcome::Cancelled => writeln!(
                f,
                "Search cancelled before the search space was exhausted."
            )?,
        }
        writeln!(f, "Attempts: {}", self.attempts)?;
        write!(f, "Elapsed: {} ms", self.elapsed.as_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome() {
        let d = Duration::from_millis(3);

        assert_eq!(
            SearchResult::found("ab".into(), 4, d).outcome(),
            SearchOutcome::Found
        );
        assert_eq!(
            SearchResult::exhausted(6, d).outcome(),
            SearchOutcome::Exhausted
        );

        let cancelled = SearchResult::cancelled(2, d);
        assert_eq!(cancelled.outcome(), SearchOutcome::Cancelled);
        assert!(!cancelled.is_found());
        assert_eq!(cancelled.matched(), None);
    }

    #[test]
    fn test_display() {
        let d = Duration::from_micros(12_345);

        assert_eq!(
            SearchResult::found("10".into(), 5, d).to_string(),
            "Password found: 10\nAttempts: 5\nElapsed: 12 ms"
        );
        assert_eq!(
            SearchResult::exhausted(6, d).to_string(),
            "Password not found within the provided limits.\nAttempts: 6\nElapsed: 12 ms"
        );
        assert!(SearchResult::cancelled(1, d)
            .to_string()
            .starts_with("Search cancelled"));
    }

    #[test]
    fn test_same_outcome_ignores_elapsed() {
        let a = SearchResult::found("x".into(), 1, Duration::from_millis(1));
        let b = SearchResult::found("x".into(), 1, Duration::from_millis(9));
        assert!(a.same_outcome(&b));
        assert_ne!(a, b);
    }
}
