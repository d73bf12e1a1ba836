//! Contains the code related to the source buffer handed to the scanner.

use std::{
    fmt::{Debug, Display},
    fs::File,
    io::Read,
    ops::Range,
    path::PathBuf,
    sync::Arc,
};

use getset::Getters;
use memmap::MmapOptions;
use ouroboros::self_referencing;
use thiserror::Error;

/// Represents an error that occurs when loading/creating a source file.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Utf8Error(#[from] std::str::Utf8Error),
}

/// Represents an immutable source buffer together with the path it was read from.
///
/// The content is either memory-mapped from a file or owned in memory (e.g. when it is read from
/// the standard input).
#[derive(Getters)]
pub struct SourceFile {
    source: Source,

    /// Gets the full path to the source file.
    #[get = "pub"]
    full_path: PathBuf,

    lines: Vec<Range<usize>>,
}

impl Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("full_path", &self.full_path)
            .field("lines", &self.lines)
            .finish()
    }
}

enum Source {
    Mapped(MappedSource),
    Owned(String),
}

impl Source {
    fn content(&self) -> &str {
        match self {
            Self::Mapped(mapped) => mapped.content(),
            Self::Owned(string) => string,
        }
    }
}

#[self_referencing]
struct MappedSource {
    file: File,
    mapped: Option<memmap::Mmap>,

    #[borrows(mapped)]
    mapped_str: &'this str,
}

impl MappedSource {
    fn create(file: File) -> Result<Self, Error> {
        let mapped = if file.metadata()?.len() == 0 {
            None
        } else {
            Some(unsafe { MmapOptions::new().map(&file)? })
        };
        MappedSourceTryBuilder {
            file,
            mapped,
            mapped_str_builder: |mapped| {
                #[allow(clippy::option_if_let_else)]
                if let Some(mmaped) = mapped {
                    std::str::from_utf8(mmaped).map_err(Error::from)
                } else {
                    Ok("")
                }
            },
        }
        .try_build()
    }

    fn content(&self) -> &str { self.borrow_mapped_str() }
}

impl SourceFile {
    fn new(full_path: PathBuf, source: Source) -> Arc<Self> {
        let lines = get_line_byte_positions(source.content());
        Arc::new(Self {
            source,
            full_path,
            lines,
        })
    }

    /// Gets the content of the source file.
    #[must_use]
    pub fn content(&self) -> &str { self.source.content() }

    /// Gets the line of the source file at the given line number, including its line terminator.
    ///
    /// The line number starts at 1.
    #[must_use]
    pub fn get_line(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }

        self.lines
            .get(line - 1)
            .map(|range| &self.source.content()[range.clone()])
    }

    /// Gets the number of lines in the source file.
    ///
    /// A content ending with `\n` has an empty last line, so `"a\n"` has two lines. This matches
    /// the scanner, which puts the end of such an input at the start of that line.
    #[must_use]
    pub fn line_number(&self) -> usize { self.lines.len() }

    /// Loads the source file by memory-mapping the given file.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when mapping the file to memory.
    /// - [`Error::Utf8Error`]: Error occurred when converting the mapped bytes to a string.
    pub fn load(file: File, path: PathBuf) -> Result<Arc<Self>, Error> {
        let source = MappedSource::create(file)?;
        Ok(Self::new(path, Source::Mapped(source)))
    }

    /// Reads the whole content of the given reader into an in-memory source file.
    ///
    /// This is used for inputs that can't be memory-mapped such as the standard input.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when reading from the reader.
    /// - [`Error::Utf8Error`]: The read bytes are not valid UTF-8.
    pub fn read(mut reader: impl Read, path: PathBuf) -> Result<Arc<Self>, Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        let content = String::from_utf8(bytes).map_err(|error| error.utf8_error())?;
        Ok(Self::new(path, Source::Owned(content)))
    }

    /// Creates an in-memory source file from the given string.
    #[must_use]
    pub fn in_memory(content: impl Into<String>, path: PathBuf) -> Arc<Self> {
        Self::new(path, Source::Owned(content.into()))
    }

    /// Creates a temporary source file and writes the given displayable object to it.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when creating the temporary file, writing to, and
    ///   mapping it to memory.
    /// - [`Error::Utf8Error`]: Error occurred when converting the mapped bytes to a string.
    pub fn temp(display: impl Display) -> Result<Arc<Self>, Error> {
        use std::io::Write;

        let mut tempfile = tempfile::Builder::new()
            .prefix("excerpt")
            .suffix(".ex")
            .tempfile()?;

        write!(tempfile.as_file_mut(), "{display}")?;
        let path = tempfile.path().to_owned();

        Self::load(tempfile.into_file(), path)
    }
}

/// Is a struct pointing to a particular location in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Location {
    /// The line number of the location (starts at 1).
    pub line: usize,

    /// The column number of the location (starts at 1).
    pub column: usize,
}

impl Location {
    /// Creates a new [`Location`] from the given line and column numbers.
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self { Self { line, column } }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

// only `\n` starts a new line, the scanner counts lines the same way
fn get_line_byte_positions(text: &str) -> Vec<Range<usize>> {
    let mut current_position = 0;
    let mut results = Vec::new();

    for (byte, _) in text.match_indices('\n') {
        #[allow(clippy::range_plus_one)]
        results.push(current_position..byte + 1);

        current_position = byte + 1;
    }

    results.push(current_position..text.len());

    results
}

#[cfg(test)]
mod tests;
