pub mod error_handling;
pub mod lexer;
pub mod parser;
pub mod trie;

const VERSION: &str = "0.0.1";

pub fn version() -> &'static str {
    VERSION
}
