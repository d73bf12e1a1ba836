//! Contains the [`Scanner`], which turns a source buffer into [`Token`]s one at a time.

use std::{iter::FusedIterator, str::FromStr};

use excerpt_base::source_file::Location;
use getset::CopyGetters;

use crate::token::{InvalidKind, KeywordKind, PrimitiveType, Symbol, Token, TokenKind};

/// Is an unsigned integer that represents a byte index in the source buffer.
pub type ByteIndex = usize;

/// Is a cursor over an immutable source buffer that produces one [`Token`] per
/// [`Scanner::next_token`] call.
///
/// The scanner never fails: malformed lexemes are returned as [`TokenKind::Invalid`] tokens and
/// scanning resumes right after them. Once the end of the buffer is reached, every call returns a
/// [`TokenKind::End`] token.
///
/// As an [`Iterator`], the scanner yields every token up to and including the first
/// [`TokenKind::End`].
#[derive(Debug, Clone, CopyGetters)]
#[allow(missing_copy_implementations)]
pub struct Scanner<'a> {
    /// Gets the source buffer being scanned.
    #[get_copy = "pub"]
    source: &'a str,

    /// Gets the byte index of the next unconsumed character.
    #[get_copy = "pub"]
    position: ByteIndex,

    /// Gets the line of the next unconsumed character (starts at 1).
    #[get_copy = "pub"]
    line: usize,

    /// Gets the column of the next unconsumed character (starts at 1).
    #[get_copy = "pub"]
    column: usize,

    yielded_end: bool,
}

impl<'a> Scanner<'a> {
    /// Creates a new [`Scanner`] positioned at the start of the given source buffer.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
            yielded_end: false,
        }
    }

    /// Gets the [`Location`] of the next unconsumed character.
    #[must_use]
    pub fn location(&self) -> Location { Location::new(self.line, self.column) }

    /// Looks at the character `offset` characters after the next unconsumed one without consuming
    /// anything.
    #[must_use]
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.source[self.position..].chars().nth(offset)
    }

    /// Consumes the next character, updating the line and column.
    fn advance(&mut self) -> Option<char> {
        let character = self.peek(0)?;

        self.position += character.len_utf8();

        if character == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(character)
    }

    /// Consumes characters until the predicate returns false or the input ends.
    fn walk(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(character) = self.peek(0) {
            if !predicate(character) {
                break;
            }

            self.advance();
        }
    }

    /// Gets the source text from `start` to the next unconsumed character.
    fn lexeme_from(&self, start: ByteIndex) -> &'a str { &self.source[start..self.position] }

    fn is_whitespace(character: char) -> bool {
        character.is_ascii_whitespace() || character == '\x0B'
    }

    fn is_first_identifier_character(character: char) -> bool {
        character.is_ascii_alphabetic() || character == '_'
    }

    fn is_identifier_character(character: char) -> bool {
        character.is_ascii_alphanumeric() || character == '_'
    }

    /// Skips whitespaces and comments.
    ///
    /// Returns an invalid token spanning the rest of the input if a `/*` comment is never closed.
    fn skip_whitespaces_and_comments(&mut self) -> Option<Token> {
        loop {
            match (self.peek(0), self.peek(1)) {
                (Some(character), _) if Self::is_whitespace(character) => {
                    self.advance();
                }

                // the terminating new line is left for the whitespace arm
                (Some('/'), Some('/')) => self.walk(|character| character != '\n'),

                (Some('/'), Some('*')) => {
                    let start = self.position;
                    let location = self.location();

                    self.advance();
                    self.advance();

                    if !self.skip_delimited_comment_body() {
                        return Some(Self::create_token(
                            InvalidKind::UnterminatedComment.into(),
                            self.lexeme_from(start),
                            location,
                        ));
                    }
                }

                _ => return None,
            }
        }
    }

    /// Consumes a delimited comment body through its `*/`. Returns false if the input ends first.
    fn skip_delimited_comment_body(&mut self) -> bool {
        while let Some(character) = self.advance() {
            if character == '*' && self.peek(0) == Some('/') {
                self.advance();
                return true;
            }
        }

        false
    }

    fn create_token(kind: TokenKind, text: impl Into<String>, location: Location) -> Token {
        Token::new(kind, text.into(), location.line, location.column)
    }

    fn handle_identifier_and_keyword(&mut self, location: Location) -> Token {
        let start = self.position;
        self.walk(Self::is_identifier_character);

        let word = self.lexeme_from(start);

        // keywords take precedence over primitive type names
        let kind = KeywordKind::from_str(word).map_or_else(
            |_| {
                PrimitiveType::from_str(word)
                    .map_or(TokenKind::Identifier, TokenKind::Primitive)
            },
            TokenKind::Keyword,
        );

        Self::create_token(kind, word, location)
    }

    fn handle_numeric_literal(&mut self, location: Location) -> Token {
        let start = self.position;

        // tokenizes the whole number part
        self.walk(|character| character.is_ascii_digit());

        let is_float = self.peek(0) == Some('.')
            && self.peek(1).is_some_and(|character| character.is_ascii_digit());

        let kind = if is_float {
            self.advance();
            self.walk(|character| character.is_ascii_digit());

            TokenKind::FloatLiteral
        } else {
            TokenKind::IntegerLiteral
        };

        Self::create_token(kind, self.lexeme_from(start), location)
    }

    fn handle_character_literal(&mut self, location: Location) -> Token {
        // opening quote
        self.advance();

        let Some(character) = self.advance() else {
            return Self::create_token(InvalidKind::MalformedCharacter.into(), "", location);
        };

        if self.peek(0) == Some('\'') {
            self.advance();

            Self::create_token(TokenKind::CharLiteral, character, location)
        } else {
            Self::create_token(InvalidKind::MalformedCharacter.into(), character, location)
        }
    }

    fn handle_string_literal(&mut self, location: Location) -> Token {
        // opening quote
        self.advance();

        let start = self.position;
        self.walk(|character| character != '"');

        let content = self.lexeme_from(start);

        if self.advance().is_some() {
            Self::create_token(TokenKind::StringLiteral, content, location)
        } else {
            Self::create_token(InvalidKind::UnterminatedString.into(), content, location)
        }
    }

    fn handle_symbol(&mut self, location: Location) -> Token {
        let start = self.position;
        self.advance();

        // two-character operators win over their one-character prefixes
        if let Some(next) = self.peek(0) {
            let spelling = &self.source[start..self.position + next.len_utf8()];

            if let Ok(symbol) = Symbol::from_str(spelling) {
                self.advance();
                return Self::create_token(symbol.into(), spelling, location);
            }
        }

        let spelling = self.lexeme_from(start);

        Symbol::from_str(spelling).map_or_else(
            |_| Self::create_token(InvalidKind::UnexpectedCharacter.into(), spelling, location),
            |symbol| Self::create_token(symbol.into(), spelling, location),
        )
    }

    /// Scans the next token and moves the scanner past it.
    ///
    /// Every call consumes at least one character unless the end of input has been reached, in
    /// which case a [`TokenKind::End`] token located at the end of input is returned.
    pub fn next_token(&mut self) -> Token {
        if let Some(invalid) = self.skip_whitespaces_and_comments() {
            return invalid;
        }

        let location = self.location();

        let Some(character) = self.peek(0) else {
            return Self::create_token(TokenKind::End, "", location);
        };

        // Found identifier/keyword/primitive type
        if Self::is_first_identifier_character(character) {
            self.handle_identifier_and_keyword(location)
        }
        // Found numeric literal
        else if character.is_ascii_digit() {
            self.handle_numeric_literal(location)
        }
        // Found character literal
        else if character == '\'' {
            self.handle_character_literal(location)
        }
        // Found string literal
        else if character == '"' {
            self.handle_string_literal(location)
        }
        // Found a symbol or an unexpected character
        else {
            self.handle_symbol(location)
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.yielded_end {
            return None;
        }

        let token = self.next_token();
        self.yielded_end = token.kind == TokenKind::End;

        Some(token)
    }
}

impl<'a> FusedIterator for Scanner<'a> {}
