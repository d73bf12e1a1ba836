//! Provides the functions related to logging/printing messages to the console.

use std::fmt::Display;

use derive_new::new;
use formatting::{Attribute, Color, Style};

use crate::source_file::{Location, SourceFile};

pub mod formatting;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Debug,
}

/// Is a struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let log_header = Style::Bold.with(match self.severity {
            Severity::Error => Color::Red.with("[error]:"),
            Severity::Warning => Color::Yellow.with("[warning]:"),
            Severity::Info => Color::Green.with("[info]:"),
            Severity::Debug => Color::White.with("[debug]:"),
        });

        let message_part = Style::Bold.with(&self.display);

        write!(f, "{log_header} {message_part}")
    }
}

fn get_digit(mut number: usize) -> usize {
    let mut digit = 0;

    while number > 0 {
        number /= 10;
        digit += 1;
    }

    digit
}

/// Structure implementing [`Display`] that prints the source line containing a location, with the
/// `length` characters starting at the location underlined.
///
/// The lines before and after the location are printed as context. The underline never extends
/// past the end of the located line.
#[derive(Debug, Clone, Copy, new)]
pub struct SourceCodeDisplay<'a, T> {
    /// The source file containing the location.
    pub source_file: &'a SourceFile,

    /// The location of the first highlighted character.
    pub location: Location,

    /// The number of characters to highlight (at least one is always highlighted).
    pub length: usize,

    /// The help message to be displayed.
    pub help_display: Option<T>,
}

impl<'a, T> SourceCodeDisplay<'a, T> {
    fn write_line_number(
        f: &mut std::fmt::Formatter<'_>,
        line_number: usize,
        width: usize,
    ) -> std::fmt::Result {
        write!(
            f,
            "{}{}{} ",
            Style::Bold.with(Color::Cyan.with(line_number)),
            format_args!("{:width$}", "", width = width - get_digit(line_number) + 1),
            Style::Bold.with(Color::Cyan.with("┃")),
        )
    }

    fn write_empty_pipe(f: &mut std::fmt::Formatter<'_>, width: usize) -> std::fmt::Result {
        for _ in 0..=width {
            write!(f, " ")?;
        }
        write!(f, "{}", Style::Bold.with(Color::Cyan.with("┃")))
    }

    fn write_plain_line(f: &mut std::fmt::Formatter<'_>, line: &str) -> std::fmt::Result {
        for char in line.chars() {
            // if the char is tab, print 4 spaces
            if char == '\t' {
                write!(f, "    ")?;
            } else if char != '\n' && char != '\r' {
                write!(f, "{char}")?;
            }
        }

        writeln!(f)
    }
}

impl<'a, T: Display> Display for SourceCodeDisplay<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line_number = self.location.line;
        let start_column = self.location.column;
        let end_column = start_column + self.length.max(1);

        // the line after the location is printed as well
        let width = get_digit(line_number + 1);

        // prints the source location
        for _ in 0..width {
            write!(f, " ")?;
        }
        writeln!(
            f,
            "{} {}:{}",
            Style::Bold.with(Color::Cyan.with("-->")),
            self.source_file.full_path().display(),
            self.location
        )?;

        Self::write_empty_pipe(f, width)?;
        writeln!(f)?;

        // prints previous line
        if let Some(line) = self.source_file.get_line(line_number.saturating_sub(1)) {
            Self::write_line_number(f, line_number - 1, width)?;
            Self::write_plain_line(f, line)?;
        }

        let Some(line) = self.source_file.get_line(line_number) else {
            return Ok(());
        };

        Self::write_line_number(f, line_number, width)?;

        for (index, char) in line.chars().enumerate() {
            let column = index + 1;

            if char == '\n' || char == '\r' {
                continue;
            }

            let char_display = if char == '\t' { "    ".to_string() } else { char.to_string() };

            if column >= start_column && column < end_column {
                write!(
                    f,
                    "{}",
                    Style::Underline.with(Style::Bold.with(Color::Red.with(char_display)))
                )?;
            } else {
                write!(f, "{char_display}")?;
            }
        }
        writeln!(f)?;

        if let Some(message) = &self.help_display {
            Self::write_empty_pipe(f, width)?;
            write!(f, " ")?;

            // prints the whitespace until the start's column
            for (index, char) in line.chars().enumerate() {
                if index + 1 >= start_column {
                    break;
                }

                write!(f, "{}", if char == '\t' { "    " } else { " " })?;
            }

            writeln!(f, "{}: {message}", Style::Bold.with("help"))?;
        }

        // prints the post line
        if let Some(line) = self.source_file.get_line(line_number + 1) {
            Self::write_line_number(f, line_number + 1, width)?;
            Self::write_plain_line(f, line)?;
        }

        Self::write_empty_pipe(f, width)?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests;
