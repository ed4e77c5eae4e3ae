#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! src/lib.rs
//!
//! # Overview
//!
//! `stylog` is a stylized debug printer. Every log call names a [`Style`]
//! that decides whether the line is emitted at all and which call-site
//! prefix it carries: nothing (`Plain`), the caller's `file:line:`
//! (`FileLine`), or the caller's qualified function path (`Func`). The
//! `NoOp` style suppresses output entirely, so a style variable doubles as a
//! per-subsystem verbosity switch that costs one branch when disabled.
//!
//! # Design
//!
//! The crate exposes two macros. [`log!`] writes a space-separated sequence
//! of [`Display`](std::fmt::Display) values; [`logf!`] renders a format
//! template. Both accept an `err =` tagged first argument — an explicitly
//! `Option`-typed failure indicator — which is printed ahead of the payload
//! and handed back to the caller so a logging call can double as an inline
//! error return. Call sites are captured at expansion time by
//! [`callsite!`]; output goes to one process-wide sink that
//! [`set_writer`] swaps atomically (standard output until then).
//!
//! # Invariants
//!
//! - A `NoOp` style, an empty payload, or a `None` failure writes nothing
//!   and returns `None` from the failure forms.
//! - An emitted line is written as one prefix + payload + `\n` sequence
//!   against a single load of the sink; swapping the sink never tears a
//!   line, and the last sink set wins.
//! - The memoized working directory and root-source paths are computed once
//!   per process and never refreshed.
//!
//! # Errors
//!
//! None. The only error-shaped thing this crate touches is the caller's own
//! failure value, returned unchanged. Path-resolution problems degrade to
//! fallback formatting and sink write failures are ignored: a debug helper
//! must never crash or fail the host program.
//!
//! # Examples
//!
//! Redirect the sink and log through the three emitting styles:
//!
//! ```
//! use std::io::Write;
//! use std::sync::{Arc, Mutex};
//!
//! use stylog::{Style, log, logf};
//!
//! #[derive(Clone, Default)]
//! struct Capture(Arc<Mutex<Vec<u8>>>);
//!
//! impl Write for Capture {
//!     fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
//!         self.0.lock().unwrap().extend_from_slice(buf);
//!         Ok(buf.len())
//!     }
//!     fn flush(&mut self) -> std::io::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let capture = Capture::default();
//! stylog::set_writer(capture.clone());
//!
//! log!(Style::Plain, "hello", "world");
//! logf!(Style::Plain, "{} items", 3);
//! log!(Style::NoOp, "suppressed");
//!
//! let output = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
//! assert_eq!(output, "hello world\n3 items\n");
//! ```
//!
//! Chain a failure through a logging call:
//!
//! ```
//! use std::io;
//!
//! use stylog::{Style, log};
//!
//! const ERR: Style = Style::Plain;
//!
//! fn refresh() -> io::Result<()> {
//!     match load() {
//!         Ok(()) => Ok(()),
//!         // logs "cache offline" and returns the same error
//!         Err(e) => match log!(ERR, err = Some(e)) {
//!             Some(e) => Err(e),
//!             None => Ok(()),
//!         },
//!     }
//! }
//!
//! fn load() -> io::Result<()> {
//!     Err(io::Error::other("cache offline"))
//! }
//!
//! assert!(refresh().is_err());
//! ```

mod caller;
mod macros;
mod paths;
mod render;
mod sink;
mod style;

#[cfg(feature = "tracing")]
pub mod tracing_bridge;

pub use caller::CallSite;
pub use sink::set_writer;
pub use style::Style;

#[doc(hidden)]
pub use caller::__name_of;
#[doc(hidden)]
pub use render::{__log_failure, __log_format, __log_values, __suppressed};
