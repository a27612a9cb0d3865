//! # Cursor
//!
//! Provides byte-by-byte navigation through a REPL line.
//!
//! Source lines are restricted to the token set in [`super::token`], so the cursor
//! operates on a byte slice (`&[u8]`) rather than `Vec<char>`. This avoids the
//! per-line allocation `.chars().collect()` would require. `pos` serves as both the byte
//! offset and the character index — they are identical for ASCII input.

/// A cursor for iterating through source bytes.
pub struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            bytes: source.as_bytes(),
            pos: 0,
        }
    }

    pub fn peek(&self) -> Option<char> {
        self.bytes.get(self.pos).map(|&b| b as char)
    }

    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        Some(ch)
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }
}
