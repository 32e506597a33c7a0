use crate::error_handling::Error::LexerInputStreamNotSet;
use crate::error_handling::Result;
use crate::lexer::LexerStream;
use crate::trie::PrefixTrie;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenType {
    End,
    User,
    Keyword,
    Symbol,
}

pub type TokenTrie = PrefixTrie<TokenType>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    val: Vec<u8>,
    token_type: TokenType,
}

impl Token {
    pub fn new(token_type: TokenType, val: impl Into<Vec<u8>>) -> Self {
        Self {
            val: val.into(),
            token_type,
        }
    }

    pub fn end() -> Self {
        Self::new(TokenType::End, Vec::new())
    }

    pub fn get_val(&self) -> &[u8] {
        &self.val
    }

    pub fn get_val_as_string(&self) -> String {
        String::from_utf8_lossy(&self.val).into_owned()
    }

    pub fn get_token_type(&self) -> TokenType {
        self.token_type
    }

    pub fn is_end(&self) -> bool {
        TokenType::End == self.token_type
    }
}

pub fn is_letter(c: u8) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_number(c: u8) -> bool {
    c.is_ascii_digit()
}

pub fn is_alphanumeric(c: u8) -> bool {
    is_letter(c) || is_number(c)
}

/// Whitespace as classified by the "C" locale.
pub fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

pub fn is_symbol(c: u8) -> bool {
    false == (is_alphanumeric(c) || is_space(c))
}

// `prev` is `None` for the first byte of a token.
pub fn hits_word_boundary(prev: Option<u8>, curr: u8) -> bool {
    match prev {
        None => false,
        Some(prev) => is_space(curr) || is_alphanumeric(prev) != is_alphanumeric(curr),
    }
}

/// Maximal munch tokenizer. The only state kept between two tokens is the stream position.
pub struct Lexer<'a> {
    trie: &'a TokenTrie,
    input_stream: Option<Box<dyn LexerStream>>,
}

impl<'a> Lexer<'a> {
    pub fn new(trie: &'a TokenTrie) -> Self {
        Self {
            trie,
            input_stream: None,
        }
    }

    pub fn set_input_stream(&mut self, input_stream: Box<dyn LexerStream>) {
        log::debug!("Lexer input stream attached");
        self.input_stream = Some(input_stream);
    }

    // Once the input is exhausted every call returns an END token.
    pub fn get_next_token(&mut self) -> Result<Token> {
        let trie = self.trie;
        let stream = self
            .input_stream
            .as_mut()
            .ok_or(LexerInputStreamNotSet)?
            .as_mut();

        while let Some(c) = stream.peek_next_byte()? {
            if false == is_space(c) {
                break;
            }
            stream.get_next_byte()?;
        }

        let mut buf: Vec<u8> = Vec::new();
        let mut prev: Option<u8> = None;
        while let Some(c) = stream.get_next_byte()? {
            if hits_word_boundary(prev, c) || Self::ends_symbol(trie, &buf, c) {
                stream.unget_byte(c);
                break;
            }
            buf.push(c);
            prev = Some(c);
        }

        if buf.is_empty() {
            return Ok(Token::end());
        }
        let token_type = match trie.get(&buf) {
            Some(values) => values[0],
            None => TokenType::User,
        };
        log::trace!(
            "Emit token {:?}: {:?}",
            token_type,
            String::from_utf8_lossy(&buf)
        );
        Ok(Token::new(token_type, buf))
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.get_next_token()?;
            let is_end = token.is_end();
            tokens.push(token);
            if is_end {
                return Ok(tokens);
            }
        }
    }

    // True if `buf` already is a complete symbol that `next` can never extend.
    fn ends_symbol(trie: &TokenTrie, buf: &[u8], next: u8) -> bool {
        let exact = match trie.find_exact(buf) {
            Some(node) => node,
            None => return false,
        };
        match exact.get_values().first() {
            Some(TokenType::Symbol) => exact.is_terminal() || exact.find_partial(next).is_none(),
            _ => false,
        }
    }
}
