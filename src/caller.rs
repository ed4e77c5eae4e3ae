// Call-site metadata captured by the logging macros.
//
// Capture happens at macro expansion time: `file!` and `line!` pin the source
// position, and the type name of a probe function item defined inside the
// expansion yields the enclosing function's fully qualified path. The probe
// suffix and any closure segments are stripped when the name is read back.

use std::fmt;

/// Source position and enclosing function of a logging call.
///
/// Values are normally produced by [`callsite!`](crate::callsite); the
/// constructor is public so callers relaying diagnostics from elsewhere (for
/// example an event subscriber) can supply their own metadata.
///
/// # Examples
///
/// ```
/// let site = stylog::callsite!();
/// assert!(site.file().ends_with(".rs"));
/// assert!(site.line() > 0);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CallSite {
    file: &'static str,
    line: u32,
    function: &'static str,
}

impl CallSite {
    /// Creates a call site from explicit parts.
    #[must_use]
    pub const fn from_parts(file: &'static str, line: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }

    /// Returns the source file path as recorded by the compiler.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Returns the 1-based source line.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Returns the fully qualified path of the calling function.
    ///
    /// The raw captured name ends with the probe item (`::__here`) and, when
    /// the call happened inside a closure, one or more `::{{closure}}`
    /// segments; both are stripped so the name reads as the function a person
    /// would point at in the source.
    #[must_use]
    pub fn function(&self) -> &'static str {
        let mut name = self.function;
        if let Some(stripped) = name.strip_suffix("::__here") {
            name = stripped;
        }
        while let Some(stripped) = name.strip_suffix("::{{closure}}") {
            name = stripped;
        }
        name
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

#[doc(hidden)]
#[must_use]
pub fn __name_of<T>(_: T) -> &'static str {
    std::any::type_name::<T>()
}

/// Captures the current call site.
///
/// Expands to a [`CallSite`] carrying the current file, line, and enclosing
/// function path. The logging macros invoke this internally; it is exported
/// for callers that want to record a position themselves.
///
/// # Examples
///
/// ```
/// use stylog::callsite;
///
/// fn rebuild_index() -> stylog::CallSite {
///     callsite!()
/// }
///
/// let site = rebuild_index();
/// assert!(site.function().ends_with("rebuild_index"));
/// ```
#[macro_export]
macro_rules! callsite {
    () => {{
        fn __here() {}
        $crate::CallSite::from_parts(file!(), line!(), $crate::__name_of(__here))
    }};
}
