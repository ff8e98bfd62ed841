//! cargo run --example=enumerate -- 'abc' 3

use charset_search::*;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let charset = args.next().expect("Usage: enumerate <charset> <max_length>");
    let bound: SearchBound = args
        .next()
        .expect("Usage: enumerate <charset> <max_length>")
        .parse()?;

    let enumerator = Enumerator::new(Alphabet::parse(&charset)?, bound);

    let mut count: u64 = 0;
    for candidate in enumerator.candidates() {
        count += 1;
        println!("{count}\t{candidate}");
    }

    println!();
    println!("count: {count}");

    Ok(())
}
