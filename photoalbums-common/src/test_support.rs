//! Log capture for unit tests
//!
//! Installs a JSON `fmt` subscriber for the duration of a closure and hands
//! back every event it recorded.

use std::io;
use std::sync::{Arc, Mutex};

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        BufferWriter(Arc::clone(&self.0))
    }
}

impl io::Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "lock poisoned"))?;
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// One captured log event
#[derive(Debug, Clone)]
pub struct LogLine {
    pub level: String,
    pub message: String,
}

/// Run `f` with a capturing subscriber as the thread's default dispatcher
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, Vec<LogLine>) {
    let sink = SharedBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .json()
        .with_max_level(Level::TRACE)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);

    let bytes = sink.0.lock().expect("lock output").clone();
    let text = String::from_utf8(bytes).expect("utf8 log output");
    let lines = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            let parsed: serde_json::Value = serde_json::from_str(l).expect("json log line");
            LogLine {
                level: parsed["level"].as_str().unwrap_or_default().to_string(),
                message: parsed["fields"]["message"]
                    .as_str()
                    .unwrap_or_default()
                    .to_string(),
            }
        })
        .collect();

    (result, lines)
}

/// Captured lines at the given level ("INFO", "WARN", ...)
pub fn at_level<'a>(lines: &'a [LogLine], level: &str) -> Vec<&'a LogLine> {
    lines.iter().filter(|l| l.level == level).collect()
}
