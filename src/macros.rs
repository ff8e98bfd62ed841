/// 条件が成り立つことをコンパイラに伝える。
///
/// デバッグビルドでは条件が偽なら panic する。リリースビルドでは条件が偽なら未定義動作となる。
macro_rules! assert_unchecked {
    ($cond:expr) => {{
        let cond: bool = $cond;
        if cfg!(debug_assertions) {
            assert!(cond, concat!("assertion failed: ", stringify!($cond)));
        } else if !cond {
            // 呼び出し側の unsafe 契約により到達しない。
            unsafe { ::std::hint::unreachable_unchecked() };
        }
    }};
}

pub(crate) use assert_unchecked;
