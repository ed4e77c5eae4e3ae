//! src/sink.rs
//! The process-wide output sink behind every log call.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Shared handle to the installed writer.
type SharedWriter = Arc<Mutex<dyn Write + Send>>;

/// Slot holding the installed writer; `None` means standard output.
static WRITER: RwLock<Option<SharedWriter>> = RwLock::new(None);

/// Replaces the process-wide output sink for all subsequent log calls.
///
/// The intended lifecycle is to install a sink once at startup. Later calls
/// are permitted and replace the sink atomically — the last writer set wins,
/// and a log call racing with a swap uses whichever sink its load observed.
/// Calls already in flight keep writing to the sink they loaded. If no sink
/// is ever installed, output goes to standard output.
///
/// # Examples
///
/// ```
/// use std::io::Write;
/// use std::sync::{Arc, Mutex};
///
/// #[derive(Clone, Default)]
/// struct Capture(Arc<Mutex<Vec<u8>>>);
///
/// impl Write for Capture {
///     fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
///         self.0.lock().unwrap().extend_from_slice(buf);
///         Ok(buf.len())
///     }
///     fn flush(&mut self) -> std::io::Result<()> {
///         Ok(())
///     }
/// }
///
/// let capture = Capture::default();
/// stylog::set_writer(capture.clone());
/// stylog::log!(stylog::Style::Plain, "redirected");
/// assert_eq!(capture.0.lock().unwrap().as_slice(), b"redirected\n");
/// ```
pub fn set_writer<W>(writer: W)
where
    W: Write + Send + 'static,
{
    let shared: SharedWriter = Arc::new(Mutex::new(writer));
    let mut slot = WRITER.write().unwrap_or_else(PoisonError::into_inner);
    *slot = Some(shared);
}

/// Runs `emit` against the currently installed sink, or locked stdout.
///
/// The shared handle is cloned under the read lock so a concurrent
/// [`set_writer`] never invalidates a write in progress.
pub(crate) fn with_writer<F>(emit: F)
where
    F: FnOnce(&mut dyn Write),
{
    let current = {
        let slot = WRITER.read().unwrap_or_else(PoisonError::into_inner);
        slot.clone()
    };
    match current {
        Some(shared) => {
            let mut writer = shared.lock().unwrap_or_else(PoisonError::into_inner);
            emit(&mut *writer);
        }
        None => emit(&mut io::stdout().lock()),
    }
}
