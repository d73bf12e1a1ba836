//! Contains the command-line front end of the Excerpt compiler: it loads the input, runs the
//! lexical analysis and writes out the resulting tokens.

use std::{
    fmt::Display,
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

pub use clap::Parser;
use excerpt_base::{
    diagnostic::{Counter, Handler},
    log::{Message, Severity, SourceCodeDisplay},
    source_file::{self, SourceFile},
};
use excerpt_lexical::{error, token_stream::TokenStream};
use thiserror::Error;

/// The path that stands for the standard input.
pub const STDIN_PATH: &str = "-";

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(
    name = "excerpt",
    version,
    about = "Excerpt compiler: scans a source file into its tokens."
)]
pub struct Argument {
    /// The input file to scan, `-` reads the standard input.
    #[clap(default_value = STDIN_PATH, value_name = "FILE")]
    pub file: PathBuf,

    /// Writes the tokens to this file instead of the standard output.
    #[clap(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Prints debug and info messages to the standard error stream.
    #[clap(short, long)]
    pub verbose: bool,
}

/// Is an error that stops the driver before all the tokens are written out.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error("{}: {source}", path.display())]
    Input {
        path: PathBuf,
        source: source_file::Error,
    },

    #[error("{}: {source}", path.display())]
    Output { path: PathBuf, source: io::Error },
}

/// A struct that implements [`Handler`] by printing every lexical error, along with the source
/// code it points at, to the standard error stream.
#[derive(Debug, Clone, Copy)]
struct Printer<'a> {
    source_file: &'a SourceFile,
}

impl<'a> Handler<error::Error> for Printer<'a> {
    fn receive(&self, error: error::Error) {
        eprintln!(
            "{error}\n{}",
            SourceCodeDisplay::new(
                self.source_file,
                error.location(),
                error.highlight_length(),
                error.help()
            )
        );
    }
}

/// Checks whether a message of the given severity is printed: errors and warnings always are,
/// info and debug messages only with `--verbose`.
fn is_logged(verbose: bool, severity: Severity) -> bool {
    verbose || severity <= Severity::Warning
}

fn log(argument: &Argument, severity: Severity, display: impl Display) {
    if is_logged(argument.verbose, severity) {
        eprintln!("{}", Message::new(severity, display));
    }
}

/// Describes the loaded input for the debug log.
///
/// A trailing new line doesn't start another line here, unlike [`SourceFile::line_number`].
fn describe_input(source_file: &SourceFile) -> String {
    format!(
        "read {} bytes ({} lines) from {}",
        source_file.content().len(),
        source_file.content().lines().count(),
        source_file.full_path().display()
    )
}

fn load_source_file(path: &Path) -> Result<Arc<SourceFile>, Error> {
    let result = if path == Path::new(STDIN_PATH) {
        SourceFile::read(io::stdin().lock(), PathBuf::from("<stdin>"))
    } else {
        File::open(path)
            .map_err(source_file::Error::from)
            .and_then(|file| SourceFile::load(file, path.to_owned()))
    };

    result.map_err(|source| Error::Input {
        path: path.to_owned(),
        source,
    })
}

/// Writes one `line:column<TAB>Token(KIND, text)` line per token.
fn write_tokens(token_stream: &TokenStream, writer: &mut dyn Write) -> io::Result<()> {
    for token in token_stream.iter() {
        writeln!(writer, "{}\t{token}", token.location())?;
    }

    writer.flush()
}

/// Scans the input named by the argument and writes its tokens to the chosen output.
///
/// Returns `true` if the input contained no invalid tokens.
///
/// # Errors
/// - [`Error::Input`]: The input couldn't be read or isn't valid UTF-8.
/// - [`Error::Output`]: The tokens couldn't be written to the output.
pub fn tokenize(argument: &Argument) -> Result<bool, Error> {
    let source_file = load_source_file(&argument.file)?;

    log(argument, Severity::Debug, describe_input(&source_file));

    let printer = Counter::new(Printer {
        source_file: &source_file,
    });
    let token_stream = TokenStream::tokenize(source_file.content(), &printer);

    log(
        argument,
        Severity::Info,
        format!("scanned {} tokens", token_stream.len()),
    );

    match &argument.output {
        Some(path) => {
            let to_error = |source| Error::Output {
                path: path.clone(),
                source,
            };

            let mut writer = BufWriter::new(File::create(path).map_err(to_error)?);
            write_tokens(&token_stream, &mut writer).map_err(to_error)?;
        }
        None => {
            write_tokens(&token_stream, &mut io::stdout().lock()).map_err(|source| {
                Error::Output {
                    path: PathBuf::from("<stdout>"),
                    source,
                }
            })?;
        }
    }

    if !printer.is_clean() {
        log(
            argument,
            Severity::Warning,
            format!("found {} invalid token(s)", printer.count()),
        );
    }

    Ok(printer.is_clean())
}

/// Runs the program with the given arguments.
#[must_use]
pub fn run(argument: Argument) -> ExitCode {
    match tokenize(&argument) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            log(&argument, Severity::Error, error);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests;
