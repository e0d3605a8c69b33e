//! Rolling Logger
//!
//! A `tracing` layer that keeps the last N formatted lines in a circular
//! buffer and mirrors every line to a sink (the browser console in wasm).
//! The buffer can be dumped when something goes wrong on a user's device.

use std::collections::VecDeque;
use std::fmt::Write as _;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 200;

/// Where formatted lines go besides the buffer
pub trait Sink: Send + Sync + 'static {
    fn write(&self, level: &Level, line: &str);
}

/// Browser devtools console
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn write(&self, level: &Level, line: &str) {
        let value = wasm_bindgen::JsValue::from_str(line);
        match *level {
            Level::ERROR => web_sys::console::error_1(&value),
            Level::WARN => web_sys::console::warn_1(&value),
            Level::INFO => web_sys::console::info_1(&value),
            _ => web_sys::console::log_1(&value),
        }
    }
}

/// Bounded line store; the oldest line is evicted first
#[derive(Debug)]
pub struct RollingBuffer {
    lines: Mutex<VecDeque<String>>,
    capacity: usize,
}

impl RollingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { lines: Mutex::new(VecDeque::with_capacity(capacity)), capacity }
    }

    pub fn push(&self, line: String) {
        let Ok(mut lines) = self.lines.lock() else { return };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Copy of the buffered lines, oldest first
    pub fn snapshot(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.iter().cloned().collect()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|l| l.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Collects `message` plus `key=value` pairs of one event
#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

/// Format an event as `HH:MM:SS.mmm [LEVEL] target: message k=v`
fn format_line(event: &Event<'_>) -> String {
    let meta = event.metadata();
    let mut visitor = LineVisitor::default();
    event.record(&mut visitor);
    format!(
        "{} [{}] {}: {}{}",
        chrono::Utc::now().format("%H:%M:%S%.3f"),
        meta.level(),
        meta.target(),
        visitor.message,
        visitor.fields
    )
}

pub struct RollingLayer<K: Sink> {
    buffer: Arc<RollingBuffer>,
    sink: K,
}

impl<K: Sink> RollingLayer<K> {
    pub fn new(capacity: usize, sink: K) -> Self {
        Self { buffer: Arc::new(RollingBuffer::new(capacity)), sink }
    }

    pub fn buffer(&self) -> Arc<RollingBuffer> {
        self.buffer.clone()
    }
}

impl<S: Subscriber, K: Sink> Layer<S> for RollingLayer<K> {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let line = format_line(event);
        self.sink.write(event.metadata().level(), &line);
        self.buffer.push(line);
    }
}

static GLOBAL_BUFFER: OnceLock<Arc<RollingBuffer>> = OnceLock::new();

/// Install the console-backed layer as the global subscriber.
/// Later calls return the already-installed buffer.
pub fn init(capacity: usize) -> Arc<RollingBuffer> {
    GLOBAL_BUFFER
        .get_or_init(|| {
            let layer = RollingLayer::new(capacity, ConsoleSink);
            let buffer = layer.buffer();
            let subscriber = tracing_subscriber::registry().with(layer);
            if tracing::subscriber::set_global_default(subscriber).is_err() {
                web_sys::console::warn_1(&"[rolling-logger] a global subscriber was already set".into());
            }
            buffer
        })
        .clone()
}

/// Lines captured since `init`, oldest first
pub fn recent_lines() -> Vec<String> {
    GLOBAL_BUFFER.get().map(|b| b.snapshot()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct VecSink(Arc<Mutex<Vec<(Level, String)>>>);

    impl Sink for VecSink {
        fn write(&self, level: &Level, line: &str) {
            self.0.lock().unwrap().push((*level, line.to_string()));
        }
    }

    #[test]
    fn test_buffer_evicts_oldest() {
        let buffer = RollingBuffer::new(3);
        for i in 0..5 {
            buffer.push(format!("line {}", i));
        }
        assert_eq!(buffer.snapshot(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let buffer = RollingBuffer::new(0);
        buffer.push("a".into());
        buffer.push("b".into());
        assert_eq!(buffer.snapshot(), vec!["b"]);
    }

    #[test]
    fn test_layer_formats_and_forwards() {
        let sink = VecSink::default();
        let layer = RollingLayer::new(10, sink.clone());
        let buffer = layer.buffer();
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(row = 3, name = "foto.pdf", "image rejected");
            tracing::info!("submitting report");
        });

        let lines = buffer.snapshot();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("[WARN]"));
        assert!(lines[0].contains("image rejected row=3 name=foto.pdf"));
        assert!(lines[1].ends_with("submitting report"));

        let forwarded = sink.0.lock().unwrap();
        assert_eq!(forwarded[0].0, Level::WARN);
        assert_eq!(forwarded[1].1, lines[1]);
    }
}
