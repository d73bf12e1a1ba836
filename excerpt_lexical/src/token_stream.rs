//! Contains the [`TokenStream`] struct.

use std::ops::Index;

use derive_more::Deref;
use excerpt_base::diagnostic::Handler;

use crate::{
    error,
    scanner::Scanner,
    token::{Token, TokenKind},
};

/// Is the ordered list of every token of a source buffer, always terminated by a
/// [`TokenKind::End`] token.
///
/// This struct is the final output of the lexical analysis phase and is meant to be used by the
/// next stage of the compilation process.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deref)]
pub struct TokenStream {
    #[deref]
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Tokenizes the given source code.
    ///
    /// This function runs a fresh [`Scanner`] over the source until it produces the
    /// [`TokenKind::End`] token. Every invalid token is kept in the stream and is also reported to
    /// the `handler` as an [`error::Error`].
    #[must_use]
    pub fn tokenize(source: &str, handler: &dyn Handler<error::Error>) -> Self {
        let mut tokens = Vec::new();

        for token in Scanner::new(source) {
            if let Some(error) = error::Error::from_token(&token) {
                handler.receive(error);
            }

            tokens.push(token);
        }

        Self { tokens }
    }

    /// Gets an iterator over the kinds of the tokens, in order.
    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.tokens.iter().map(|token| token.kind)
    }

    /// Dissolves this struct into the underlying vector of tokens.
    #[must_use]
    pub fn dissolve(self) -> Vec<Token> { self.tokens }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Self::Output { &self.tokens[index] }
}
