use source::CharSource;
use token::Token;
use words::ReservedWords;

pub mod source;
pub mod token;
pub mod words;

pub struct Scanner<'words> {
    words: &'words ReservedWords,
    tokens: Vec<Token>,
    line: usize,
}

impl<'words> Scanner<'words> {
    pub fn new(words: &'words ReservedWords) -> Self {
        Self {
            words,
            tokens: Vec::new(),
            line: 1,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// Consumes `source` to exhaustion and returns its tokens in order.
    pub fn scan(&mut self, source: &mut impl CharSource) -> Vec<Token> {
        self.line = 1;
        self.tokens.clear();
        while let Some(c) = source.peek() {
            if c.is_whitespace() {
                self.skip_whitespace(source);
                continue;
            }
            let token = match c {
                c if self.words.starts_compound(c) => self.make_operator_token(source, c),
                c if c.is_ascii_digit() => self.make_number_token(source),
                c if is_word_start(c) => self.make_word_token(source),
                c => {
                    source.advance();
                    Token::Char(c)
                }
            };
            self.push(token);
        }
        std::mem::take(&mut self.tokens)
    }

    fn push(&mut self, token: Token) {
        if cfg!(feature = "debug_trace") {
            eprintln!("{}", trace_line(self.line, &token));
        }
        self.tokens.push(token);
    }

    fn skip_whitespace(&mut self, source: &mut impl CharSource) {
        while let Some(c) = source.peek() {
            if !c.is_whitespace() {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            source.advance();
        }
    }

    // the second character is only consumed when it completes an operator
    fn make_operator_token(&self, source: &mut impl CharSource, first: char) -> Token {
        source.advance();
        match source.peek().and_then(|second| self.words.compound(first, second)) {
            Some(token) => {
                source.advance();
                token
            }
            None => Token::Char(first),
        }
    }

    fn make_number_token(&self, source: &mut impl CharSource) -> Token {
        let mut value: i64 = 0;
        // unclamped copy so reals keep integer parts beyond i64
        let mut int_part = 0.0;
        while let Some(digit) = peek_digit(source) {
            value = value.saturating_mul(10).saturating_add(i64::from(digit));
            int_part = int_part * 10.0 + f64::from(digit);
            source.advance();
        }
        if source.peek() != Some('.') {
            return Token::Num(value);
        }
        source.advance();
        let mut real = int_part;
        let mut divisor = 10.0;
        while let Some(digit) = peek_digit(source) {
            real += f64::from(digit) / divisor;
            divisor *= 10.0;
            source.advance();
        }
        Token::Real(real)
    }

    fn make_word_token(&self, source: &mut impl CharSource) -> Token {
        let mut lexeme = String::new();
        while let Some(c) = source.peek() {
            if !is_word_start(c) && !c.is_ascii_digit() {
                break;
            }
            lexeme.push(c);
            source.advance();
        }
        match self.words.lookup(&lexeme) {
            Some(token) => token,
            None => Token::identifier(lexeme),
        }
    }
}

fn trace_line(line: usize, token: &Token) -> String {
    format!("[line {line}] {:<5} {token:?}", token.tag())
}

fn peek_digit(source: &mut impl CharSource) -> Option<u32> {
    source.peek().and_then(|c| c.to_digit(10))
}

fn is_word_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::source::SourceText;
    use super::token::Tag;
    use super::*;

    fn scan(text: &str) -> Vec<Token> {
        let words = ReservedWords::new();
        Scanner::new(&words).scan(&mut SourceText::new(text))
    }

    fn word(token: &Token) -> (Tag, &str) {
        match token {
            Token::Word(word) => (word.tag, word.lexeme.as_str()),
            other => panic!("expected word token, got {other:?}"),
        }
    }

    #[test]
    fn whitespace_only_input_has_no_tokens() {
        assert!(scan("").is_empty());
        assert!(scan(" \t\r\n  \n").is_empty());
    }

    #[test]
    fn reserved_words_reuse_table_entries() {
        let words = ReservedWords::new();
        let tokens = Scanner::new(&words).scan(&mut SourceText::new("while x while"));
        assert_eq!(tokens.len(), 3);
        assert_eq!(word(&tokens[0]), (Tag::While, "while"));
        assert!(tokens[0].same_entry(&tokens[2]));
        assert!(tokens[0].same_entry(&words.lookup("while").expect("while is reserved")));
    }

    #[test]
    fn every_reserved_word_scans_to_its_entry() {
        let words = ReservedWords::new();
        let mut scanner = Scanner::new(&words);
        for (lexeme, entry) in words.iter() {
            let tokens = scanner.scan(&mut SourceText::new(lexeme));
            assert_eq!(tokens.len(), 1, "{lexeme}");
            assert_eq!(tokens[0].lexeme(), Some(lexeme));
            assert!(tokens[0].same_entry(entry), "{lexeme}");
        }
    }

    #[test]
    fn type_names_scan_to_type_tokens() {
        let tokens = scan("float");
        match &tokens[..] {
            [Token::Type(ty)] => {
                assert_eq!(ty.lexeme(), "float");
                assert_eq!(ty.width, 8);
            }
            other => panic!("expected one type token, got {other:?}"),
        }
    }

    #[test]
    fn compound_operators() {
        let tokens = scan("&& || == != <= >=");
        let expected = [
            (Tag::And, "&&"),
            (Tag::Or, "||"),
            (Tag::Eq, "=="),
            (Tag::Ne, "!="),
            (Tag::Le, "<="),
            (Tag::Ge, ">="),
        ];
        assert_eq!(tokens.len(), expected.len());
        for (token, expected) in tokens.iter().zip(expected) {
            assert_eq!(word(token), expected);
        }
    }

    #[test]
    fn unmatched_second_character_is_not_consumed() {
        let tokens = scan("& x");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], Token::Char('&'));
        assert_eq!(word(&tokens[1]), (Tag::Id, "x"));

        let tokens = scan("<5");
        assert_eq!(tokens, vec![Token::Char('<'), Token::Num(5)]);

        let tokens = scan("!!=");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], Token::Char('!'));
        assert_eq!(word(&tokens[1]), (Tag::Ne, "!="));
    }

    #[test]
    fn operator_at_end_of_source() {
        assert_eq!(scan("="), vec![Token::Char('=')]);
        assert_eq!(scan("a>"), vec![Token::identifier("a"), Token::Char('>')]);
    }

    #[test]
    fn integer_literals() {
        assert_eq!(scan("123"), vec![Token::Num(123)]);
        assert_eq!(scan("007"), vec![Token::Num(7)]);
        assert_eq!(scan("0"), vec![Token::Num(0)]);
    }

    #[test]
    fn integer_literals_saturate() {
        assert_eq!(scan("99999999999999999999"), vec![Token::Num(i64::MAX)]);
    }

    #[test]
    fn real_literals_keep_large_integer_part() {
        assert_eq!(
            scan("100000000000000000000.5"),
            vec![Token::Real(1e20 + 0.5)]
        );
        assert_eq!(scan("1000000000000000000000."), vec![Token::Real(1e21)]);
    }

    #[test]
    #[allow(clippy::approx_constant)]
    fn real_literals() {
        match &scan("3.14")[..] {
            [Token::Real(value)] => assert!((value - 3.14).abs() < 1e-9),
            other => panic!("expected one real token, got {other:?}"),
        }
        assert_eq!(scan("3."), vec![Token::Real(3.0)]);
        assert_eq!(scan("0.5;"), vec![Token::Real(0.5), Token::Char(';')]);
    }

    #[test]
    fn number_followed_by_word() {
        assert_eq!(scan("12ab"), vec![Token::Num(12), Token::identifier("ab")]);
    }

    #[test]
    fn identifiers_use_maximal_munch() {
        let tokens = scan("iffy _tmp x1 do_");
        let lexemes: Vec<(Tag, &str)> = tokens.iter().map(word).collect();
        assert_eq!(
            lexemes,
            vec![
                (Tag::Id, "iffy"),
                (Tag::Id, "_tmp"),
                (Tag::Id, "x1"),
                (Tag::Id, "do_"),
            ]
        );
    }

    #[test]
    fn unicode_letters_start_words() {
        assert_eq!(scan("größe"), vec![Token::identifier("größe")]);
    }

    #[test]
    fn unrecognised_characters_become_char_tokens() {
        assert_eq!(
            scan("(+;@)"),
            vec![
                Token::Char('('),
                Token::Char('+'),
                Token::Char(';'),
                Token::Char('@'),
                Token::Char(')'),
            ]
        );
    }

    #[test]
    fn counts_lines() {
        let words = ReservedWords::new();
        let mut scanner = Scanner::new(&words);
        assert_eq!(scanner.line(), 1);
        let tokens = scanner.scan(&mut SourceText::new("a\nb\nc"));
        assert_eq!(tokens.len(), 3);
        assert_eq!(scanner.line(), 3);

        scanner.scan(&mut SourceText::new("a"));
        assert_eq!(scanner.line(), 1);
    }

    #[test]
    fn token_order() {
        let tokens = scan("if(x<=5)break");
        assert_eq!(tokens.len(), 7);
        assert_eq!(word(&tokens[0]), (Tag::If, "if"));
        assert_eq!(tokens[1], Token::Char('('));
        assert_eq!(word(&tokens[2]), (Tag::Id, "x"));
        assert_eq!(word(&tokens[3]), (Tag::Le, "<="));
        assert_eq!(tokens[4], Token::Num(5));
        assert_eq!(tokens[5], Token::Char(')'));
        assert_eq!(word(&tokens[6]), (Tag::Break, "break"));
    }

    #[test]
    fn scans_from_peekable_iterators() {
        let words = ReservedWords::new();
        let tokens = Scanner::new(&words).scan(&mut "do x = 1.5".chars().peekable());
        assert_eq!(tokens.len(), 4);
        assert_eq!(word(&tokens[0]), (Tag::Do, "do"));
        assert_eq!(tokens[2], Token::Char('='));
        assert_eq!(tokens[3], Token::Real(1.5));
    }

    #[test]
    fn trace_lines_show_line_and_tag() {
        assert_eq!(trace_line(2, &Token::Num(7)), "[line 2] 268   Num(7)");
        assert_eq!(trace_line(1, &Token::Char('(')), "[line 1] 40    Char('(')");
    }
}
