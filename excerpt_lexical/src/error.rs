//! Contains all kinds of lexical errors that can be reported for the invalid tokens found while
//! tokenizing the source code.

use std::fmt::Display;

use derive_more::From;
use enum_as_inner::EnumAsInner;
use excerpt_base::{
    log::{Message, Severity},
    source_file::Location,
};

use crate::token::{InvalidKind, Token, TokenKind};

/// The source code contains an unclosed `/*` comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnterminatedComment {
    /// The location of the `/*` that starts the comment.
    pub location: Location,
}

impl Display for UnterminatedComment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Message::new(Severity::Error, "found an unclosed `/*` comment")
        )
    }
}

/// The source code contains a string literal without its closing `"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnterminatedString {
    /// The location of the opening `"`.
    pub location: Location,

    /// The content scanned before reaching the end of input.
    pub content: String,
}

impl Display for UnterminatedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Message::new(Severity::Error, "found an unterminated string literal")
        )
    }
}

/// A character literal doesn't consist of exactly one character enclosed by `'`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MalformedCharacter {
    /// The location of the opening `'`.
    pub location: Location,

    /// The character found after the opening `'`, empty if the input ended right after it.
    pub content: String,
}

impl Display for MalformedCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Message::new(
                Severity::Error,
                "a character literal must contain exactly one character enclosed by `'`"
            )
        )
    }
}

/// A character that doesn't start any token was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnexpectedCharacter {
    /// The location of the character.
    pub location: Location,

    /// The unexpected character.
    pub character: char,
}

impl Display for UnexpectedCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Message::new(
                Severity::Error,
                format!("found an unexpected character `{}`", self.character.escape_debug())
            )
        )
    }
}

/// Is an enumeration containing all kinds of lexical errors, one for each [`InvalidKind`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Error {
    UnterminatedComment(UnterminatedComment),
    UnterminatedString(UnterminatedString),
    MalformedCharacter(MalformedCharacter),
    UnexpectedCharacter(UnexpectedCharacter),
}

impl Error {
    /// Creates the error describing the given token.
    ///
    /// Returns [`None`] if the token isn't a [`TokenKind::Invalid`] token.
    #[must_use]
    pub fn from_token(token: &Token) -> Option<Self> {
        let TokenKind::Invalid(invalid) = token.kind else {
            return None;
        };

        let location = token.location();

        Some(match invalid {
            InvalidKind::UnterminatedComment => UnterminatedComment { location }.into(),
            InvalidKind::UnterminatedString => UnterminatedString {
                location,
                content: token.text.clone(),
            }
            .into(),
            InvalidKind::MalformedCharacter => MalformedCharacter {
                location,
                content: token.text.clone(),
            }
            .into(),
            InvalidKind::UnexpectedCharacter => UnexpectedCharacter {
                location,
                character: token.text.chars().next()?,
            }
            .into(),
        })
    }

    /// Gets the location where the erroneous lexeme starts.
    #[must_use]
    pub fn location(&self) -> Location {
        match self {
            Self::UnterminatedComment(error) => error.location,
            Self::UnterminatedString(error) => error.location,
            Self::MalformedCharacter(error) => error.location,
            Self::UnexpectedCharacter(error) => error.location,
        }
    }

    /// Gets the number of characters worth highlighting when showing the error in the source.
    #[must_use]
    pub fn highlight_length(&self) -> usize {
        match self {
            Self::UnterminatedComment(..) => 2,
            Self::UnterminatedString(..) | Self::UnexpectedCharacter(..) => 1,
            Self::MalformedCharacter(error) => 1 + error.content.chars().count(),
        }
    }

    /// Gets a hint on how to fix the error, if there is one.
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            Self::UnterminatedComment(..) => Some("close the comment with `*/`"),
            Self::UnterminatedString(..) => Some("close the string literal with `\"`"),
            Self::MalformedCharacter(..) => None,
            Self::UnexpectedCharacter(error) if error.character == '!' => {
                Some("did you mean `!=`?")
            }
            Self::UnexpectedCharacter(..) => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedComment(err) => write!(f, "{err}"),
            Self::UnterminatedString(err) => write!(f, "{err}"),
            Self::MalformedCharacter(err) => write!(f, "{err}"),
            Self::UnexpectedCharacter(err) => write!(f, "{err}"),
        }
    }
}
