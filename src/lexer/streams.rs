use super::lexer_stream::LexerStream;
use crate::error_handling::Result;
use std::io::{BufReader, Read};

const BUF_SIZE: usize = 4096;

pub struct BufferedFileStream {
    buf_reader: BufReader<std::fs::File>,
    pos: usize,
    end: usize,
    buffer: [u8; BUF_SIZE],
    pushed_back: Option<u8>,
}

impl BufferedFileStream {
    pub fn new(path: &str) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        log::debug!("Opened input file: {}", path);
        Ok(Self {
            buf_reader: BufReader::new(file),
            pos: 0,
            end: 0,
            buffer: [0; BUF_SIZE],
            pushed_back: None,
        })
    }

    // Returns false once the underlying file is exhausted.
    fn fill_buffer_if_empty(&mut self) -> Result<bool> {
        if self.pos < self.end {
            return Ok(true);
        }
        let byte_read = self.buf_reader.read(&mut self.buffer)?;
        log::trace!("Refilled input buffer with {} bytes", byte_read);
        self.pos = 0;
        self.end = byte_read;
        Ok(0 != byte_read)
    }
}

impl LexerStream for BufferedFileStream {
    fn peek_next_byte(&mut self) -> Result<Option<u8>> {
        if self.pushed_back.is_some() {
            return Ok(self.pushed_back);
        }
        if false == self.fill_buffer_if_empty()? {
            return Ok(None);
        }
        Ok(Some(self.buffer[self.pos]))
    }

    fn get_next_byte(&mut self) -> Result<Option<u8>> {
        if let Some(c) = self.pushed_back.take() {
            return Ok(Some(c));
        }
        if false == self.fill_buffer_if_empty()? {
            return Ok(None);
        }
        let c = self.buffer[self.pos];
        self.pos += 1;
        Ok(Some(c))
    }

    fn unget_byte(&mut self, c: u8) {
        self.pushed_back = Some(c);
    }
}

pub struct ByteStream {
    bytes: Vec<u8>,
    pos: usize,
    pushed_back: Option<u8>,
}

impl ByteStream {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            pos: 0,
            pushed_back: None,
        }
    }
}

impl From<&str> for ByteStream {
    fn from(input: &str) -> Self {
        Self::new(input)
    }
}

impl LexerStream for ByteStream {
    fn peek_next_byte(&mut self) -> Result<Option<u8>> {
        if self.pushed_back.is_some() {
            return Ok(self.pushed_back);
        }
        Ok(self.bytes.get(self.pos).copied())
    }

    fn get_next_byte(&mut self) -> Result<Option<u8>> {
        if let Some(c) = self.pushed_back.take() {
            return Ok(Some(c));
        }
        let c = self.bytes.get(self.pos).copied();
        if c.is_some() {
            self.pos += 1;
        }
        Ok(c)
    }

    fn unget_byte(&mut self, c: u8) {
        self.pushed_back = Some(c);
    }
}
