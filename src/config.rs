use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use crate::alphabet::Alphabet;
use crate::bound::SearchBound;
use crate::enumerator::{Enumerator, SearchError};

/// 探索の設定。TOML から読み込める。
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct SearchConfig {
    /// 各位置で試す文字(列挙順)。
    #[serde(default = "default_charset")]
    pub charset: String,

    /// 候補の最大長。省略時は探索対象の文字数。
    #[serde(default)]
    pub max_length: Option<usize>,

    /// 探索を打ち切るまでのミリ秒数。
    #[serde(default)]
    pub time_limit_ms: Option<u64>,
}

fn default_charset() -> String {
    Alphabet::DEFAULT_CHARS.to_string()
}

impl SearchConfig {
    /// TOML 文字列をパースする。
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// TOML ファイルを読み込んでパースする。
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// 受理はするがおそらく意図していない設定について警告をログに出す。
    pub fn validate(&self) {
        if self.time_limit_ms == Some(0) {
            tracing::warn!("time_limit_ms = 0; the search will be cancelled before the first attempt");
        }
        if self.charset.chars().any(char::is_whitespace) {
            tracing::warn!(charset = %self.charset, "charset contains whitespace characters");
        }
    }

    pub fn alphabet(&self) -> Result<Alphabet, SearchError> {
        Ok(Alphabet::parse(&self.charset)?)
    }

    /// `target` に対する実際の最大長を返す。
    pub fn bound_for(&self, target: &str) -> Result<SearchBound, SearchError> {
        let len = self.max_length.unwrap_or_else(|| target.chars().count());
        Ok(SearchBound::try_new(len)?)
    }

    /// 文字集合と最大長を検証し、`target` 用の `Enumerator` を作る。
    ///
    /// 候補総数が `u64` に収まらない場合は警告をログに出す(エラーにはしない)。
    pub fn enumerator(&self, target: &str) -> Result<Enumerator, SearchError> {
        let alphabet = self.alphabet()?;
        let bound = self.bound_for(target)?;
        let enumerator = Enumerator::new(alphabet, bound);

        match enumerator.search_space() {
            Some(total) => tracing::debug!(candidates = total, "search space"),
            None => tracing::warn!(
                max_length = bound.get(),
                "search space exceeds u64::MAX candidates; attempts cannot be exhausted"
            ),
        }

        Ok(enumerator)
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            charset: default_charset(),
            max_length: None,
            time_limit_ms: None,
        }
    }
}

/// 設定ファイルの読み込み時に発生しうるエラー。
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use crate::alphabet::AlphabetError;
    use crate::bound::SearchBoundError;

    use super::*;

    #[test]
    fn test_default_values() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.charset, "abcdefghijklmnopqrstuvwxyz0123456789");
        assert_eq!(cfg.max_length, None);
        assert_eq!(cfg.time_limit(), None);
        assert_eq!(cfg.alphabet().unwrap(), Alphabet::default());
    }

    #[test]
    fn test_partial_toml_override() {
        let cfg = SearchConfig::from_toml_str("max_length = 3").unwrap();
        assert_eq!(cfg.max_length, Some(3));
        // 指定しなかった項目はデフォルト値。
        assert_eq!(cfg.charset, Alphabet::DEFAULT_CHARS);
        assert_eq!(cfg, SearchConfig { max_length: Some(3), ..Default::default() });
    }

    #[test]
    fn test_full_toml() {
        let toml_str = r#"
            charset = "01"
            max_length = 8
            time_limit_ms = 250
        "#;
        let cfg = SearchConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(cfg.charset, "01");
        assert_eq!(cfg.max_length, Some(8));
        assert_eq!(cfg.time_limit(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            SearchConfig::from_toml_str("max_length = \"three\""),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_bound_defaults_to_target_length() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.bound_for("abcd").unwrap().get(), 4);
        assert_eq!(cfg.bound_for("あい").unwrap().get(), 2);
        assert_eq!(
            cfg.bound_for(""),
            Err(SearchError::InvalidSearchBound(SearchBoundError::Zero))
        );
    }

    #[test]
    fn test_enumerator_errors() {
        let cfg = SearchConfig {
            charset: "xyx".into(),
            ..Default::default()
        };
        assert_eq!(
            cfg.enumerator("xy"),
            Err(SearchError::InvalidAlphabet(AlphabetError::DuplicateChar {
                pos: 2,
                ch: 'x'
            }))
        );

        let cfg = SearchConfig {
            charset: "xy".into(),
            max_length: Some(2),
            ..Default::default()
        };
        let enumerator = cfg.enumerator("yyy").unwrap();
        assert_eq!(enumerator.bound().get(), 2);
        assert_eq!(enumerator.search_space(), Some(6));
    }

    #[test]
    fn test_enumerator_overflowing_search_space() {
        // 36^100 は u64 に収まらないが、探索の構築自体は成功する。
        let cfg = SearchConfig {
            max_length: Some(100),
            ..Default::default()
        };
        let enumerator = cfg.enumerator("abc").unwrap();
        assert_eq!(enumerator.bound().get(), 100);
        assert_eq!(enumerator.search_space(), None);
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "charset = \"ab\"").unwrap();

        let cfg = SearchConfig::load(file.path()).unwrap();
        assert_eq!(cfg.charset, "ab");

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            SearchConfig::load(&missing),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_validate_does_not_panic() {
        let cfg = SearchConfig {
            charset: "a b".into(),
            time_limit_ms: Some(0),
            ..Default::default()
        };
        cfg.validate(); // 警告は出るが panic はしない。
    }
}
