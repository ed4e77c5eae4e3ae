//! src/macros.rs
//! The `log!` and `logf!` macros — the crate's logging surface.

/// Logs a line of space-separated values, or passes a failure through.
///
/// The first macro argument is always the [`Style`](crate::Style). Two forms
/// follow it:
///
/// **Value form.** Any number of [`Display`](std::fmt::Display) values are
/// written space-separated and newline-terminated. With a `NoOp` style, or
/// with no values at all, nothing is written.
///
/// ```
/// use stylog::{Style, log};
///
/// log!(Style::Plain, "loaded", 3, "segments");
/// log!(Style::NoOp, "suppressed");
/// log!(Style::Plain); // empty payload, also suppressed
/// ```
///
/// **Failure form.** `err =` tags the first argument as an optional failure
/// indicator, typed `Option<E>` where `E: std::error::Error`. When the style
/// is enabled and the failure is `Some`, its display form is written first
/// (trailing values follow, space-separated) and the call evaluates to
/// `Some(failure)` so it can chain straight into error returns. A `None`
/// failure writes nothing. Note that a `NoOp` style also suppresses the
/// pass-through: the call evaluates to `None` and the failure value is
/// dropped, exactly like the other suppressed cases.
///
/// ```
/// use std::io;
/// use stylog::{Style, log};
///
/// let failure = log!(Style::Plain, err = Some(io::Error::other("cache offline")));
/// assert_eq!(failure.expect("passed through").to_string(), "cache offline");
///
/// let silent: Option<io::Error> = log!(Style::NoOp, err = Some(io::Error::other("gone")));
/// assert!(silent.is_none());
/// ```
#[macro_export]
macro_rules! log {
    ($style:expr $(,)?) => {{
        let _ = $style;
    }};
    ($style:expr, err = $failure:expr $(, $value:expr)* $(,)?) => {
        $crate::__log_failure(
            $style,
            &$crate::callsite!(),
            $failure,
            &[$(&$value as &dyn ::core::fmt::Display),*],
        )
    };
    ($style:expr $(, $value:expr)+ $(,)?) => {
        $crate::__log_values(
            $style,
            &$crate::callsite!(),
            &[$(&$value as &dyn ::core::fmt::Display),+],
        )
    };
}

/// Logs a line rendered from a format template, or passes a failure through.
///
/// The first macro argument is always the [`Style`](crate::Style). Two forms
/// follow it:
///
/// **Template form.** The template is rendered with its arguments and
/// newline-terminated. A template with no arguments is treated as an empty
/// payload and suppressed, like the empty value form of [`log!`].
///
/// ```
/// use stylog::{Style, logf};
///
/// logf!(Style::Plain, "{} items", 3);
/// logf!(Style::Plain, "bare template"); // suppressed
/// ```
///
/// **Failure form.** `err =` tags an optional failure indicator exactly as
/// in [`log!`]; when written, the failure is supplied to the template as its
/// first formatting argument, with the remaining arguments after it. The
/// call evaluates to `Some(failure)` when a line was written and `None` on
/// any suppressed path, including `NoOp` (which drops the failure value).
///
/// ```
/// use std::io;
/// use stylog::{Style, logf};
///
/// let failure = logf!(
///     Style::Plain,
///     err = Some(io::Error::other("cache offline")),
///     "{}: giving up after {} attempts",
///     5,
/// );
/// assert!(failure.is_some());
/// ```
#[macro_export]
macro_rules! logf {
    ($style:expr, err = $failure:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
        let __style = $style;
        let __failure = $failure;
        if $crate::__suppressed(__style, &__failure) {
            ::core::option::Option::None
        } else {
            if let ::core::option::Option::Some(ref __err) = __failure {
                $crate::__log_format(
                    __style,
                    &$crate::callsite!(),
                    ::core::format_args!($fmt, __err $(, $arg)*),
                );
            }
            __failure
        }
    }};
    ($style:expr, $fmt:literal $(,)?) => {{
        let _ = $style;
        let _ = $fmt;
    }};
    ($style:expr, $fmt:literal $(, $arg:expr)+ $(,)?) => {{
        let __style = $style;
        if !__style.is_no_op() {
            $crate::__log_format(
                __style,
                &$crate::callsite!(),
                ::core::format_args!($fmt $(, $arg)+),
            );
        }
    }};
}
