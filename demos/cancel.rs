//! cargo run --example=cancel --release -- 'zzzzzz' 500
//!
//! 別スレッドから `CancelToken` で探索を打ち切る。

use std::time::Duration;

use charset_search::*;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let target = args.next().expect("Usage: cancel <target> <millis>");
    let millis: u64 = args.next().expect("Usage: cancel <target> <millis>").parse()?;

    let enumerator = SearchConfig::default().enumerator(&target)?;
    let token = CancelToken::new();

    let result = std::thread::scope(|s| {
        let canceller = token.clone();
        s.spawn(move || {
            std::thread::sleep(Duration::from_millis(millis));
            canceller.cancel();
        });

        enumerator.search_cancellable(&target, &token)
    })?;

    println!("{result}");
    if let Some(rank) = odometer_rank(&target, enumerator.alphabet()) {
        println!("expected attempts: {rank}");
    }

    Ok(())
}
