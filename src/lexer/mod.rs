mod lexer;
mod lexer_stream;
mod streams;

pub use lexer::hits_word_boundary;
pub use lexer::is_alphanumeric;
pub use lexer::is_letter;
pub use lexer::is_number;
pub use lexer::is_space;
pub use lexer::is_symbol;
pub use lexer::Lexer;
pub use lexer::Token;
pub use lexer::TokenTrie;
pub use lexer::TokenType;
pub use lexer_stream::LexerStream;
pub use streams::BufferedFileStream;
pub use streams::ByteStream;
