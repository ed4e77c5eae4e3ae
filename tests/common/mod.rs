//! Shared capture sink for the integration suites.
//!
//! The printer's writer is process-wide, so every test that inspects output
//! first takes the [`exclusive`] guard and then installs a fresh [`Capture`].

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Serializes tests that touch the process-wide writer.
pub fn exclusive() -> MutexGuard<'static, ()> {
    static GUARD: Mutex<()> = Mutex::new(());
    GUARD.lock().unwrap_or_else(PoisonError::into_inner)
}

/// In-memory sink capturing everything the printer writes.
#[derive(Clone, Default)]
pub struct Capture(pub Arc<Mutex<Vec<u8>>>);

impl Capture {
    /// Installs a fresh capture as the process-wide writer and returns it.
    pub fn install() -> Self {
        let capture = Self::default();
        stylog::set_writer(capture.clone());
        capture
    }

    /// Returns everything captured so far.
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().expect("capture lock").clone();
        String::from_utf8(bytes).expect("captured output is UTF-8")
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("capture lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
