//! Contains the ANSI escape code wrappers used to colorize console output.

use std::fmt::Display;

/// Represents an ANSI text attribute (a style or a color) that can wrap a displayable object.
pub trait Attribute: Copy {
    /// Gets the escape code that switches the attribute on.
    fn escape_code(self) -> &'static str;

    /// Applies the attribute to the given displayable object.
    fn with<T>(self, display: T) -> Styled<Self, T> {
        Styled {
            attribute: self,
            display,
        }
    }
}

/// Represents a style that can be applied to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Style {
    Bold,
    Underline,
}

impl Attribute for Style {
    fn escape_code(self) -> &'static str {
        match self {
            Self::Bold => "\x1B[1m",
            Self::Underline => "\x1B[4m",
        }
    }
}

/// Represents a foreground color that can be applied to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Cyan,
    White,
}

impl Attribute for Color {
    fn escape_code(self) -> &'static str {
        match self {
            Self::Red => "\x1B[31m",
            Self::Green => "\x1B[32m",
            Self::Yellow => "\x1B[33m",
            Self::Cyan => "\x1B[36m",
            Self::White => "\x1B[37m",
        }
    }
}

/// Is a struct implementing [`Display`] that represents a displayable object with an
/// [`Attribute`] applied. The attribute is reset after the object is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Styled<A, T> {
    /// The attribute applied to the displayable object.
    pub attribute: A,

    /// The displayable object.
    pub display: T,
}

impl<A: Attribute, T: Display> Display for Styled<A, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}\x1B[0m", self.attribute.escape_code(), self.display)
    }
}
