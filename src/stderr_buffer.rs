use std::io;
use std::sync::{Mutex, MutexGuard};

static BUFFER: Mutex<Option<Vec<String>>> = Mutex::new(None);

fn lock() -> MutexGuard<'static, Option<Vec<String>>> {
    BUFFER.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Activate buffering. While active, log lines are stored instead of being
/// printed over the TUI.
pub fn activate() {
    *lock() = Some(Vec::new());
}

/// Deactivate buffering and return all collected messages.
pub fn drain() -> Vec<String> {
    lock().take().unwrap_or_default()
}

/// Write a message. If buffering is active the message is stored;
/// otherwise it is printed to stderr immediately.
pub fn warn(msg: String) {
    let mut guard = lock();
    if let Some(buf) = guard.as_mut() {
        buf.push(msg);
    } else {
        drop(guard);
        eprintln!("{}", msg);
    }
}

/// `io::Write` sink handed to the tracing subscriber, one per event.
/// The formatted event is forwarded to [`warn`] when the writer is dropped.
#[derive(Default)]
pub struct BufferedWriter {
    bytes: Vec<u8>,
}

/// Writer factory for `tracing_subscriber::fmt().with_writer(..)`
pub fn writer() -> BufferedWriter {
    BufferedWriter::default()
}

impl io::Write for BufferedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for BufferedWriter {
    fn drop(&mut self) {
        if self.bytes.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.bytes);
        warn(text.trim_end_matches('\n').to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // One test touches the global buffer so runs don't interleave
    #[test]
    fn test_buffering_cycle() {
        activate();
        warn("first".to_string());
        {
            let mut w = writer();
            w.write_all(b"second\n").unwrap();
        }
        {
            // Empty writers produce nothing
            let _w = writer();
        }
        let drained = drain();
        assert_eq!(drained, vec!["first".to_string(), "second".to_string()]);

        // Inactive again: nothing is retained
        assert!(drain().is_empty());
    }
}
