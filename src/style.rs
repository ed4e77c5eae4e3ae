//! src/style.rs
//! The output style enum controlling whether and how a debug line is prefixed.

use std::borrow::Cow;
use std::fmt;

/// Output style for a debug line.
///
/// A style value decides whether a [`log!`](crate::log) or
/// [`logf!`](crate::logf) call emits anything, and which call-site prefix the
/// emitted line carries. Callers typically keep a named `Style` beside the
/// code it instruments and flip it while debugging:
///
/// ```
/// use stylog::Style;
///
/// const TRACE: Style = Style::NoOp;
///
/// // flipped to `Style::FileLine` when chasing a problem
/// stylog::log!(TRACE, "refreshing cache");
/// ```
///
/// The default style is [`Style::NoOp`], so a freshly declared style variable
/// is silent until somebody turns it on.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Style {
    /// Suppress all output.
    #[default]
    NoOp = 0,
    /// Emit the payload with no prefix.
    Plain = 1,
    /// Prefix each line with the caller's source file and line number.
    FileLine = 2,
    /// Prefix each line with the caller's fully qualified function path.
    Func = 3,
}

impl Style {
    /// Returns the human-readable name of the style.
    ///
    /// # Examples
    ///
    /// ```
    /// use stylog::Style;
    ///
    /// assert_eq!(Style::FileLine.as_str(), "FileLine");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoOp => "NoOp",
            Self::Plain => "Plain",
            Self::FileLine => "FileLine",
            Self::Func => "Func",
        }
    }

    /// Reports whether the style suppresses all output.
    #[must_use]
    pub const fn is_no_op(self) -> bool {
        matches!(self, Self::NoOp)
    }

    /// Converts a raw numeric style back into a `Style`.
    ///
    /// Returns `None` for values beyond the last defined style.
    ///
    /// # Examples
    ///
    /// ```
    /// use stylog::Style;
    ///
    /// assert_eq!(Style::from_raw(1), Some(Style::Plain));
    /// assert_eq!(Style::from_raw(9), None);
    /// ```
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::NoOp),
            1 => Some(Self::Plain),
            2 => Some(Self::FileLine),
            3 => Some(Self::Func),
            _ => None,
        }
    }

    /// Returns a label for an untrusted raw style value.
    ///
    /// Known values map to their names; anything beyond the last defined
    /// style is rendered as its decimal representation so configuration
    /// mistakes stay visible instead of panicking.
    ///
    /// # Examples
    ///
    /// ```
    /// use stylog::Style;
    ///
    /// assert_eq!(Style::label(2), "FileLine");
    /// assert_eq!(Style::label(7), "7");
    /// ```
    #[must_use]
    pub fn label(raw: u8) -> Cow<'static, str> {
        match Self::from_raw(raw) {
            Some(style) => Cow::Borrowed(style.as_str()),
            None => Cow::Owned(raw.to_string()),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Style> for u8 {
    fn from(style: Style) -> Self {
        style as Self
    }
}
