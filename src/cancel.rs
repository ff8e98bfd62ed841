use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// 協調的キャンセルのシグナル。
///
/// 探索エンジンは完全な候補を 1 つ評価する直前に 1 回だけ `is_cancelled` を呼ぶ。
pub trait CancelSignal {
    /// キャンセルが要求されているかどうかを返す。
    fn is_cancelled(&self) -> bool;
}

/// 決してキャンセルされないシグナル。
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NeverCancel;

impl CancelSignal for NeverCancel {
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// スレッド間で共有できるキャンセルフラグ。
///
/// クローンは全て同じフラグを指す。
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// キャンセルを要求する。
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

impl CancelSignal for CancelToken {
    fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// 作成時点から一定時間が経過するとキャンセル状態になるシグナル。
#[derive(Clone, Copy, Debug)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    /// 現在時刻から `budget` 後に期限切れとなる `Deadline` を作る。
    pub fn after(budget: Duration) -> Self {
        Self {
            at: Instant::now() + budget,
        }
    }
}

impl CancelSignal for Deadline {
    fn is_cancelled(&self) -> bool {
        Instant::now() >= self.at
    }
}

/// クロージャをシグナルとして扱う。`from_fn` で作る。
#[derive(Clone, Copy, Debug)]
pub struct FromFn<F>(F);

/// クロージャからシグナルを作る。
pub fn from_fn<F: Fn() -> bool>(f: F) -> FromFn<F> {
    FromFn(f)
}

impl<F: Fn() -> bool> CancelSignal for FromFn<F> {
    fn is_cancelled(&self) -> bool {
        (self.0)()
    }
}

impl<T: CancelSignal + ?Sized> CancelSignal for &T {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

impl<T: CancelSignal> CancelSignal for Option<T> {
    fn is_cancelled(&self) -> bool {
        self.as_ref().map_or(false, T::is_cancelled)
    }
}
