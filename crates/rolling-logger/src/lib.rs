//! Rolling Logger
//!
//! `tracing` subscriber setup for browser frontends: events are formatted
//! by `tracing_subscriber::fmt`, forwarded to the browser console (stderr
//! off wasm), and the most recent lines are kept in a circular buffer.

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{Level, Metadata};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::{self, time::ChronoLocal, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::Registry;

const TIME_FORMAT: &str = "%H:%M:%S%.3f";

/// Bounded buffer of formatted log lines, cheap to clone
#[derive(Clone)]
pub struct LogRing {
    capacity: usize,
    lines: Arc<Mutex<VecDeque<String>>>,
}

impl LogRing {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
        }
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<String>> {
        match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub fn push(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        let mut lines = self.lock();
        while lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        self.lock().iter().cloned().collect()
    }

    /// Buffered lines joined by newlines
    pub fn dump(&self) -> String {
        self.recent().join("\n")
    }
}

/// `MakeWriter` handing out one `LineWriter` per event
#[derive(Clone)]
pub struct RollingWriter {
    ring: LogRing,
    echo: bool,
}

impl RollingWriter {
    pub fn new(ring: LogRing) -> Self {
        Self { ring, echo: true }
    }

    /// Only fill the ring, without console output
    pub fn quiet(ring: LogRing) -> Self {
        Self { ring, echo: false }
    }
}

/// Collects one formatted event and emits it when dropped
pub struct LineWriter {
    ring: LogRing,
    level: Level,
    echo: bool,
    buf: Vec<u8>,
}

impl io::Write for LineWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for LineWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf).trim_end().to_string();
        if line.is_empty() {
            return;
        }
        if self.echo {
            emit(self.level, &line);
        }
        self.ring.push(line);
    }
}

impl<'a> MakeWriter<'a> for RollingWriter {
    type Writer = LineWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.line_writer(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        self.line_writer(*meta.level())
    }
}

impl RollingWriter {
    fn line_writer(&self, level: Level) -> LineWriter {
        LineWriter {
            ring: self.ring.clone(),
            level,
            echo: self.echo,
            buf: Vec::new(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    match level {
        Level::ERROR => web_sys::console::error_1(&line.into()),
        Level::WARN => web_sys::console::warn_1(&line.into()),
        Level::INFO => web_sys::console::info_1(&line.into()),
        _ => web_sys::console::debug_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Subscriber writing through `writer` at `level` and above
pub fn subscriber(
    level: LevelFilter,
    writer: RollingWriter,
) -> impl tracing::Subscriber + Send + Sync + 'static {
    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_timer(ChronoLocal::new(TIME_FORMAT.to_string()))
        .with_writer(writer);
    Registry::default().with(fmt_layer).with(level)
}

/// Install the rolling subscriber globally and hand back its ring
pub fn init(level: LevelFilter, capacity: usize) -> Result<LogRing, TryInitError> {
    let ring = LogRing::new(capacity);
    subscriber(level, RollingWriter::new(ring.clone())).try_init()?;
    Ok(ring)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_ring(level: LevelFilter, capacity: usize, f: impl FnOnce()) -> LogRing {
        let ring = LogRing::new(capacity);
        let subscriber = subscriber(level, RollingWriter::quiet(ring.clone()));
        tracing::subscriber::with_default(subscriber, f);
        ring
    }

    #[test]
    fn test_keeps_most_recent_lines() {
        let ring = with_ring(LevelFilter::DEBUG, 3, || {
            for n in 1..=5 {
                tracing::info!("line {}", n);
            }
        });

        let recent = ring.recent();
        assert_eq!(recent.len(), 3);
        assert!(recent[0].ends_with("line 3"));
        assert!(recent[2].ends_with("line 5"));
    }

    #[test]
    fn test_filters_by_level() {
        let ring = with_ring(LevelFilter::INFO, 10, || {
            tracing::debug!("hidden");
            tracing::warn!("shown");
        });

        let recent = ring.recent();
        assert_eq!(recent.len(), 1);
        assert!(recent[0].contains("WARN"));
        assert!(recent[0].ends_with("shown"));
    }

    #[test]
    fn test_zero_capacity_buffers_nothing() {
        let ring = with_ring(LevelFilter::TRACE, 0, || {
            tracing::error!("dropped");
        });
        assert!(ring.recent().is_empty());
    }

    #[test]
    fn test_dump_joins_lines() {
        let ring = LogRing::new(4);
        ring.push("first".to_string());
        ring.push("second".to_string());
        assert_eq!(ring.dump(), "first\nsecond");
    }
}
