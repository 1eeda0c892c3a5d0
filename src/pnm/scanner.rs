//! Header lexer: a cursor over the input bytes that skips whitespace and
//! `#` comments between tokens.

use crate::error::CodecError;

pub(crate) struct Scanner<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(data: &'a [u8], pos: usize) -> Self {
        Self { data, pos }
    }

    /// Current byte offset into the input.
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// Skip any interleaving of whitespace runs and `#`-to-newline comments,
    /// leaving the cursor on the first byte that belongs to a token (or at
    /// end of input). Bytes inside a comment are never token content.
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some(b) if b.is_ascii_whitespace() => {
                    self.pos += 1;
                }
                Some(b'#') => {
                    while let Some(b) = self.advance() {
                        if b == b'\n' {
                            break;
                        }
                    }
                }
                _ => return,
            }
        }
    }

    /// Consume and return bytes up to the next whitespace.
    ///
    /// The terminating whitespace is left unconsumed. End of input before
    /// any token byte is [`CodecError::TruncatedData`].
    pub(crate) fn token(&mut self) -> Result<&'a [u8], CodecError> {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() {
                break;
            }
            self.pos += 1;
        }
        if self.pos == start {
            return Err(CodecError::TruncatedData {
                needed: 1,
                actual: 0,
            });
        }
        Ok(&self.data[start..self.pos])
    }
}
