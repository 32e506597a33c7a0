use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("yaml parsing error: {0}")]
    YamlParsingError(#[from] serde_yaml::Error),
    #[error("io error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("token literals must not be empty")]
    EmptyLiteral,
    #[error("missing schema key `{0}`")]
    MissingSchemaKey(&'static str),
    #[error("invalid schema: {0}")]
    InvalidSchema(&'static str),
    #[error("lexer input stream not set")]
    LexerInputStreamNotSet,
}

pub type Result<T> = std::result::Result<T, Error>;
