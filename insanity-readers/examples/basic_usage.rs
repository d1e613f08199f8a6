//! Compiles a unidiff catalogue from a data directory and checks a few names.
//!
//! Run with:
//! ```shell
//! cargo run --example basic_usage -- path/to/dat rename delete
//! ```

use insanity_readers::{ReaderConfig, Result, Unidiff};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let datpath = args.next().unwrap_or_else(|| "dat".into());

    let config = ReaderConfig::new(datpath, true);
    let mut unidiff = Unidiff::new(&config)?;

    for name in args {
        let verdict = if unidiff.find(&name) { "known" } else { "unknown" };
        println!("{name}: {verdict}");
    }

    println!("used: {:?}", unidiff.used().collect::<Vec<_>>());
    println!("never referenced: {:?}", unidiff.unused());
    Ok(())
}
