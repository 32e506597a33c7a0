use crate::error_handling::Result;

/// A sequential byte source with one byte of lookahead and one byte of pushback.
pub trait LexerStream {
    fn peek_next_byte(&mut self) -> Result<Option<u8>>;

    fn get_next_byte(&mut self) -> Result<Option<u8>>;

    /// Pushes back the byte returned by the last `get_next_byte` call.
    fn unget_byte(&mut self, c: u8);

    fn is_end(&mut self) -> Result<bool> {
        Ok(self.peek_next_byte()?.is_none())
    }
}
