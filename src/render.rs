//! src/render.rs
//! Prefix rendering and line emission behind the logging macros.
//!
//! Every function here is an implementation detail of [`log!`](crate::log)
//! and [`logf!`](crate::logf). Write failures on the sink are deliberately
//! ignored: a debug helper must never affect host-program correctness.

use std::error::Error;
use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use crate::caller::CallSite;
use crate::paths;
use crate::sink;
use crate::style::Style;

#[doc(hidden)]
pub fn __log_values(style: Style, site: &CallSite, values: &[&dyn fmt::Display]) {
    if style.is_no_op() || values.is_empty() {
        return;
    }
    sink::with_writer(|writer| {
        let _ = write_line(writer, style, site, |w| {
            for (index, value) in values.iter().enumerate() {
                if index > 0 {
                    write!(w, " ")?;
                }
                write!(w, "{value}")?;
            }
            Ok(())
        });
    });
}

#[doc(hidden)]
pub fn __log_format(style: Style, site: &CallSite, args: fmt::Arguments<'_>) {
    if style.is_no_op() {
        return;
    }
    sink::with_writer(|writer| {
        let _ = write_line(writer, style, site, |w| w.write_fmt(args));
    });
}

#[doc(hidden)]
pub fn __log_failure<E>(
    style: Style,
    site: &CallSite,
    failure: Option<E>,
    trailing: &[&dyn fmt::Display],
) -> Option<E>
where
    E: Error,
{
    if style.is_no_op() {
        return None;
    }
    let failure = failure?;
    sink::with_writer(|writer| {
        let _ = write_line(writer, style, site, |w| {
            write!(w, "{failure}")?;
            for value in trailing {
                write!(w, " {value}")?;
            }
            Ok(())
        });
    });
    Some(failure)
}

#[doc(hidden)]
pub fn __suppressed<E>(style: Style, failure: &Option<E>) -> bool {
    style.is_no_op() || failure.is_none()
}

fn write_line<F>(w: &mut dyn Write, style: Style, site: &CallSite, payload: F) -> io::Result<()>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    write_prefix(w, style, site)?;
    payload(w)?;
    writeln!(w)
}

fn write_prefix(w: &mut dyn Write, style: Style, site: &CallSite) -> io::Result<()> {
    match style {
        Style::FileLine => {
            let shortened = paths::shorten(Path::new(site.file()));
            write!(w, "{}:{}: ", shortened.display(), site.line())
        }
        Style::Func => write!(w, "{}() ", site.function()),
        Style::NoOp | Style::Plain => Ok(()),
    }
}
