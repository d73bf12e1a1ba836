//! Is a module containing the [`Token`] type and all of its related types.

use std::{collections::HashMap, fmt::Display, hash::Hash, str::FromStr};

use derive_new::new;
use enum_as_inner::EnumAsInner;
use excerpt_base::source_file::Location;
use lazy_static::lazy_static;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};
use thiserror::Error;

/// Is an enumeration representing keywords in the Excerpt programming language.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum KeywordKind {
    If,
    Else,
    While,
    For,
    Break,
    Continue,
    Return,
    True,
    False,
}

/// Is an error that is returned when a string cannot be parsed into a [`KeywordKind`] in
/// [`FromStr`] trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("invalid string representation of keyword.")]
pub struct KeywordParseError;

impl FromStr for KeywordKind {
    type Err = KeywordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref STRING_KEYWORD_MAP: HashMap<&'static str, KeywordKind> = {
                let mut map = HashMap::new();

                for keyword in KeywordKind::iter() {
                    map.insert(keyword.as_str(), keyword);
                }

                map
            };
        }
        STRING_KEYWORD_MAP.get(s).copied().ok_or(KeywordParseError)
    }
}

impl KeywordKind {
    /// Gets the string representation of the keyword as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
            Self::For => "for",
            Self::Break => "break",
            Self::Continue => "continue",
            Self::Return => "return",
            Self::True => "true",
            Self::False => "false",
        }
    }
}

/// Is an enumeration representing the names of the primitive types.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum PrimitiveType {
    Int,
    Float,
    Char,
    Bool,
}

/// Is an error that is returned when a string cannot be parsed into a [`PrimitiveType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("invalid string representation of primitive type.")]
pub struct PrimitiveTypeParseError;

impl FromStr for PrimitiveType {
    type Err = PrimitiveTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref STRING_PRIMITIVE_TYPE_MAP: HashMap<&'static str, PrimitiveType> =
                PrimitiveType::iter()
                    .map(|primitive_type| (primitive_type.as_str(), primitive_type))
                    .collect();
        }
        STRING_PRIMITIVE_TYPE_MAP
            .get(s)
            .copied()
            .ok_or(PrimitiveTypeParseError)
    }
}

impl PrimitiveType {
    /// Gets the string representation of the primitive type as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Char => "char",
            Self::Bool => "bool",
        }
    }
}

/// Is an enumeration of the punctuation symbols and operators.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum Symbol {
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    #[strum(serialize = "LPAREN")]
    LeftParenthesis,
    #[strum(serialize = "RPAREN")]
    RightParenthesis,
    #[strum(serialize = "LBRACE")]
    LeftBrace,
    #[strum(serialize = "RBRACE")]
    RightBrace,
    #[strum(serialize = "LBRACKET")]
    LeftBracket,
    #[strum(serialize = "RBRACKET")]
    RightBracket,
    Semicolon,
    Colon,
    Comma,
    Dot,
    Assign,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

/// Is an error that is returned when a string cannot be parsed into a [`Symbol`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("invalid string representation of symbol.")]
pub struct SymbolParseError;

impl FromStr for Symbol {
    type Err = SymbolParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref STRING_SYMBOL_MAP: HashMap<&'static str, Symbol> =
                Symbol::iter().map(|symbol| (symbol.as_str(), symbol)).collect();
        }
        STRING_SYMBOL_MAP.get(s).copied().ok_or(SymbolParseError)
    }
}

impl Symbol {
    /// Gets the source spelling of the symbol as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::LeftParenthesis => "(",
            Self::RightParenthesis => ")",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::Comma => ",",
            Self::Dot => ".",
            Self::Assign => "=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
        }
    }
}

/// Describes why a lexeme was classified as [`TokenKind::Invalid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum InvalidKind {
    /// A `/*` comment that reaches the end of input without its `*/`.
    UnterminatedComment,

    /// A string literal that reaches the end of input without its closing `"`.
    UnterminatedString,

    /// A character literal that isn't exactly one character between two `'`.
    MalformedCharacter,

    /// A character that doesn't start any token, including a `!` not followed by `=`.
    #[default]
    UnexpectedCharacter,
}

/// Is an enumeration containing all kinds of tokens in the Excerpt programming language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner)]
#[allow(missing_docs)]
pub enum TokenKind {
    Symbol(Symbol),
    Keyword(KeywordKind),
    Primitive(PrimitiveType),
    Identifier,
    IntegerLiteral,
    FloatLiteral,
    CharLiteral,
    StringLiteral,

    /// The end of input. Once reached, the scanner keeps producing it.
    End,

    /// A malformed lexeme.
    Invalid(InvalidKind),
}

impl From<Symbol> for TokenKind {
    fn from(symbol: Symbol) -> Self { Self::Symbol(symbol) }
}

impl From<KeywordKind> for TokenKind {
    fn from(keyword: KeywordKind) -> Self { Self::Keyword(keyword) }
}

impl From<PrimitiveType> for TokenKind {
    fn from(primitive: PrimitiveType) -> Self { Self::Primitive(primitive) }
}

impl From<InvalidKind> for TokenKind {
    fn from(invalid: InvalidKind) -> Self { Self::Invalid(invalid) }
}

/// Is an error that is returned when a name cannot be parsed into a [`TokenKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("invalid token kind name.")]
pub struct TokenKindParseError;

impl FromStr for TokenKind {
    type Err = TokenKindParseError;

    /// Looks up the kind by its name, e.g. `LESS_EQUAL` or `INTEGER_LITERAL`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref NAME_KIND_MAP: HashMap<&'static str, TokenKind> = {
                let mut map = HashMap::new();

                let kinds = Symbol::iter()
                    .map(TokenKind::from)
                    .chain(KeywordKind::iter().map(TokenKind::from))
                    .chain(PrimitiveType::iter().map(TokenKind::from))
                    .chain([
                        TokenKind::Identifier,
                        TokenKind::IntegerLiteral,
                        TokenKind::FloatLiteral,
                        TokenKind::CharLiteral,
                        TokenKind::StringLiteral,
                        TokenKind::End,
                        TokenKind::Invalid(InvalidKind::default()),
                    ]);

                for kind in kinds {
                    map.insert(kind.name(), kind);
                }

                map
            };
        }
        NAME_KIND_MAP.get(s).copied().ok_or(TokenKindParseError)
    }
}

impl TokenKind {
    /// Gets the upper-case name of the kind, e.g. `PLUS`, `IF`, `INT` or `STRING_LITERAL`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Symbol(symbol) => symbol.into(),
            Self::Keyword(keyword) => keyword.into(),
            Self::Primitive(primitive) => primitive.into(),
            Self::Identifier => "IDENTIFIER",
            Self::IntegerLiteral => "INTEGER_LITERAL",
            Self::FloatLiteral => "FLOAT_LITERAL",
            Self::CharLiteral => "CHAR_LITERAL",
            Self::StringLiteral => "STRING_LITERAL",
            Self::End => "END",
            Self::Invalid(..) => "INVALID",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.name()) }
}

/// Represents a single classified lexeme of the source code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Token {
    /// Is the kind of the token.
    pub kind: TokenKind,

    /// Is the text of the token: the spelling of identifiers, symbols and numbers, the body of
    /// string literals and the single character of character literals.
    pub text: String,

    /// Is the line of the first character of the token (starts at 1).
    pub line: usize,

    /// Is the column of the first character of the token (starts at 1).
    pub column: usize,
}

impl Token {
    /// Gets the [`Location`] of the first character of the token.
    #[must_use]
    pub fn location(&self) -> Location { Location::new(self.line, self.column) }

    /// Gets the source spelling of the token, which scans back into a token of the same kind.
    #[must_use]
    pub fn lexeme(&self) -> String {
        match self.kind {
            TokenKind::CharLiteral => format!("'{}'", self.text),
            TokenKind::StringLiteral => format!("\"{}\"", self.text),
            _ => self.text.clone(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({}, {})", self.kind, self.text)
    }
}
