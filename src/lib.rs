#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

mod alphabet;
mod bound;
mod cancel;
mod candidate;
mod config;
mod enumerator;
mod macros;
mod result;

pub use self::alphabet::*;
pub use self::bound::*;
pub use self::cancel::*;
pub use self::candidate::*;
pub use self::config::*;
pub use self::enumerator::*;
pub use self::result::*;
