// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

/// Forward-only character stream owned by the host parser.
///
/// The scanner never backtracks: once a byte is consumed with `advance` the
/// position cannot be revisited. `mark_end` fixes the token boundary
/// independently of the current position, so the scanner can peek past the
/// end of a token without extending it.
pub trait Cursor {
    /// The next unconsumed byte, `None` at end of input.
    fn lookahead(&self) -> Option<u8>;

    /// Consume the lookahead byte. With `skip` set the byte belongs to no
    /// token (leading whitespace).
    fn advance(&mut self, skip: bool);

    /// Fix the token boundary at the current position.
    fn mark_end(&mut self);

    /// Absolute offset of the next unconsumed byte.
    fn pos(&self) -> usize;
}

/// A `Cursor` over a byte slice.
#[derive(Debug)]
pub struct SliceCursor<'a> {
    buf: &'a [u8],
    pos: usize,
    token_start: usize,
    token_end: Option<usize>,
}

impl<'a> SliceCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_pos(buf, 0)
    }

    /// Start scanning at `pos` rather than at the beginning of the slice.
    pub fn with_pos(buf: &'a [u8], pos: usize) -> Self {
        Self {
            buf,
            pos,
            token_start: pos,
            token_end: None,
        }
    }

    /// First byte of the token, past any skipped leading whitespace.
    #[inline(always)]
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Boundary fixed by `mark_end`, if any.
    #[inline(always)]
    pub fn token_end(&self) -> Option<usize> {
        self.token_end
    }

    /// The accepted span, once a boundary has been marked.
    pub fn token(&self) -> Option<&'a [u8]> {
        self.token_end.map(|end| &self.buf[self.token_start..end])
    }
}

impl<'a> Cursor for SliceCursor<'a> {
    #[inline(always)]
    fn lookahead(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    #[inline(always)]
    fn advance(&mut self, skip: bool) {
        if self.pos < self.buf.len() {
            self.pos += 1;
        }
        // Leading skips push the token start forward; once the boundary is
        // marked further skips are pure lookahead and leave it alone.
        if skip && self.token_end.is_none() {
            self.token_start = self.pos;
        }
    }

    #[inline(always)]
    fn mark_end(&mut self) {
        self.token_end = Some(self.pos);
    }

    #[inline(always)]
    fn pos(&self) -> usize {
        self.pos
    }
}
