//! This crate implements the lexical analysis phase of the compiler. This phase is responsible
//! for scanning the source code into a sequence of classified tokens.
//!
//! Tokens are produced one at a time by a [`scanner::Scanner`] or all at once as a
//! [`token_stream::TokenStream`]. Malformed input never stops the scanning; it shows up as
//! [`token::TokenKind::Invalid`] tokens that can be turned into [`error::Error`]s.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(
    clippy::missing_panics_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

pub mod error;
pub mod scanner;
pub mod token;
pub mod token_stream;
