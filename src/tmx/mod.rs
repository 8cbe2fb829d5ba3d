pub mod model;
pub mod parser;
pub mod scanner;
#[cfg(test)]
pub(crate) mod fixtures;

pub use model::{TmxMap, TmxObject};
pub use parser::parse_tmx;
pub use scanner::LineScanner;
