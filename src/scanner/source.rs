use std::iter::Peekable;

/// Input to the scanner: one character of lookahead and a way to consume it.
pub trait CharSource {
    /// The next character, or `None` once the source is exhausted.
    fn peek(&mut self) -> Option<char>;
    fn advance(&mut self);
}

impl<I: Iterator<Item = char>> CharSource for Peekable<I> {
    fn peek(&mut self) -> Option<char> {
        Peekable::peek(self).copied()
    }

    fn advance(&mut self) {
        self.next();
    }
}

/// Cursor over in-memory source text.
pub struct SourceText<'source> {
    source: &'source str,
    current: usize,
}

impl<'source> SourceText<'source> {
    pub fn new(source: &'source str) -> Self {
        Self { source, current: 0 }
    }

    /// Byte offset of the next unconsumed character.
    pub fn position(&self) -> usize {
        self.current
    }
}

impl CharSource for SourceText<'_> {
    fn peek(&mut self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.current += c.len_utf8();
        }
    }
}
