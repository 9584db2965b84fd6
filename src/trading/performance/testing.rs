//! Fixtures shared by the unit tests of this module.

use polars::prelude::*;
use std::io;
use std::sync::{Arc, Mutex};

/// Two symbols over two dates, plus a dividend row for `A`.
pub fn observations() -> DataFrame {
    df!(
        "Symbol" => &["A", "A", "B", "B", "A"],
        "Date" => &[1i64, 2, 1, 2, 3],
        "Close" => &[100.0, 150.0, 0.0, 5.0, 9999.0],
        "Dividends" => &[0.0, 0.0, 0.0, 0.0, 1.0]
    )
    .unwrap()
}

#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a subscriber that records formatted events, and returns them.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, buffer.contents())
}
