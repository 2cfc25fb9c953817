use std::collections::HashMap;
use std::hash::BuildHasherDefault;
use std::sync::Arc;

use ahash::AHasher;

use super::token::{Tag, Token, Type, Word};
use crate::common::{
    BOOL_WIDTH, CHAR_WIDTH, COMPOUND_OPERATORS_COUNT, FLOAT_WIDTH, INT_WIDTH,
    RESERVED_WORDS_COUNT,
};

type AHashMap<K, V> = HashMap<K, V, BuildHasherDefault<AHasher>>;

/// Keywords, boolean literals and primitive type names, plus the fixed
/// two-character operators. Read-only once built.
pub struct ReservedWords {
    words: AHashMap<String, Token>,
    compounds: AHashMap<(char, char), Token>,
}

impl ReservedWords {
    pub fn new() -> Self {
        let entries = [
            ("if", Token::Word(Arc::new(Word::new("if", Tag::If)))),
            ("else", Token::Word(Arc::new(Word::new("else", Tag::Else)))),
            ("while", Token::Word(Arc::new(Word::new("while", Tag::While)))),
            ("do", Token::Word(Arc::new(Word::new("do", Tag::Do)))),
            ("break", Token::Word(Arc::new(Word::new("break", Tag::Break)))),
            ("true", Token::Word(Arc::new(Word::new("true", Tag::True)))),
            ("false", Token::Word(Arc::new(Word::new("false", Tag::False)))),
            ("int", Token::Type(Arc::new(Type::new("int", INT_WIDTH)))),
            ("char", Token::Type(Arc::new(Type::new("char", CHAR_WIDTH)))),
            ("bool", Token::Type(Arc::new(Type::new("bool", BOOL_WIDTH)))),
            ("float", Token::Type(Arc::new(Type::new("float", FLOAT_WIDTH)))),
        ];
        let mut words =
            AHashMap::with_capacity_and_hasher(RESERVED_WORDS_COUNT, Default::default());
        for (lexeme, token) in entries {
            debug_assert_eq!(token.lexeme(), Some(lexeme), "key must match lexeme");
            let previous = words.insert(lexeme.to_owned(), token);
            debug_assert!(previous.is_none(), "duplicate reserved word");
        }

        let operators = [
            ('&', '&', Tag::And),
            ('|', '|', Tag::Or),
            ('=', '=', Tag::Eq),
            ('!', '=', Tag::Ne),
            ('<', '=', Tag::Le),
            ('>', '=', Tag::Ge),
        ];
        let mut compounds =
            AHashMap::with_capacity_and_hasher(COMPOUND_OPERATORS_COUNT, Default::default());
        for (first, second, tag) in operators {
            let lexeme: String = [first, second].iter().collect();
            let token = Token::Word(Arc::new(Word::new(lexeme, tag)));
            let previous = compounds.insert((first, second), token);
            debug_assert!(previous.is_none(), "duplicate compound operator");
        }

        Self { words, compounds }
    }

    pub fn lookup(&self, lexeme: &str) -> Option<Token> {
        self.words.get(lexeme).cloned()
    }

    /// The operator token for `first` followed by `second`, if there is one.
    pub fn compound(&self, first: char, second: char) -> Option<Token> {
        self.compounds.get(&(first, second)).cloned()
    }

    /// True when `first` can start a two-character operator.
    pub fn starts_compound(&self, first: char) -> bool {
        self.compounds.keys().any(|(c, _)| *c == first)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.words.len()
    }

    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &Token)> {
        self.words.iter().map(|(lexeme, token)| (lexeme.as_str(), token))
    }
}

impl Default for ReservedWords {
    fn default() -> Self {
        Self::new()
    }
}
