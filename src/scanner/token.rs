use std::fmt;
use std::sync::Arc;

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use crate::common::TAG_BASE;

/// Reserved token classes. Codes start above the range used by
/// single-character tokens, whose tag is their own code point.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, FromPrimitive)]
#[repr(u32)]
pub enum Tag {
    And = TAG_BASE,
    Basic,
    Break,
    Do,
    Else,
    Eq,
    False,
    Ge,
    Id,
    If,
    Le,
    Ne,
    Num,
    Or,
    Real,
    True,
    While,
}

impl Tag {
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Maps a tag code back to its class. `None` for single-character tags.
    pub fn from_code(code: u32) -> Option<Tag> {
        Tag::from_u32(code)
    }
}

#[derive(Debug, Clone)]
pub struct Word {
    pub lexeme: String,
    pub tag: Tag,
}

impl Word {
    pub fn new(lexeme: impl Into<String>, tag: Tag) -> Self {
        Self {
            lexeme: lexeme.into(),
            tag,
        }
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.lexeme == other.lexeme
    }
}

impl Eq for Word {}

/// A primitive type name with its storage width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Type {
    pub word: Word,
    pub width: usize,
}

impl Type {
    pub fn new(lexeme: &str, width: usize) -> Self {
        Self {
            word: Word::new(lexeme, Tag::Basic),
            width,
        }
    }

    pub fn lexeme(&self) -> &str {
        &self.word.lexeme
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Char(char),
    Word(Arc<Word>),
    Type(Arc<Type>),
    Num(i64),
    Real(f64),
}

impl Token {
    pub fn identifier(lexeme: impl Into<String>) -> Self {
        Token::Word(Arc::new(Word::new(lexeme, Tag::Id)))
    }

    pub fn tag(&self) -> u32 {
        match self {
            Token::Char(c) => *c as u32,
            Token::Word(word) => word.tag.code(),
            Token::Type(ty) => ty.word.tag.code(),
            Token::Num(_) => Tag::Num.code(),
            Token::Real(_) => Tag::Real.code(),
        }
    }

    pub fn lexeme(&self) -> Option<&str> {
        match self {
            Token::Word(word) => Some(&word.lexeme),
            Token::Type(ty) => Some(ty.lexeme()),
            _ => None,
        }
    }

    pub fn class_name(&self) -> String {
        match Tag::from_code(self.tag()) {
            Some(tag) => format!("{tag:?}"),
            None => "Char".to_owned(),
        }
    }

    /// True when both tokens are the same shared table entry.
    pub fn same_entry(&self, other: &Token) -> bool {
        match (self, other) {
            (Token::Word(a), Token::Word(b)) => Arc::ptr_eq(a, b),
            (Token::Type(a), Token::Type(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Char(c) => write!(f, "{c}"),
            Token::Word(word) => write!(f, "{}", word.lexeme),
            Token::Type(ty) => write!(f, "{}", ty.lexeme()),
            Token::Num(value) => write!(f, "{value}"),
            Token::Real(value) => write!(f, "{value:?}"),
        }
    }
}
