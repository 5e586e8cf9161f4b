//! Log record formatting and the logger that owns it
//!
//! The formatter renders one record (severity, structured fields, message)
//! into a single human-readable line. The logger is an explicitly
//! constructed instance handed to whoever needs it; there is no global
//! logging state.

use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};
use std::sync::Mutex;

use colored::Colorize;

/// Log severity, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// A field value that controls its own textual rendering in log output.
/// Takes precedence over the default key=value form.
pub trait Represent: Send + Sync {
    fn represent(&self) -> String;
}

enum FieldValue {
    Text(String),
    Custom(Box<dyn Represent>),
}

/// A single log record: severity, structured fields, and a message
pub struct Entry {
    level: Level,
    fields: HashMap<String, FieldValue>,
    message: String,
}

impl Entry {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            fields: HashMap::new(),
            message: message.into(),
        }
    }

    /// Attach a field rendered as key=value
    pub fn field(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.fields
            .insert(key.into(), FieldValue::Text(value.to_string()));
        self
    }

    /// Attach a field whose value renders itself
    pub fn field_with(mut self, key: impl Into<String>, value: impl Represent + 'static) -> Self {
        self.fields
            .insert(key.into(), FieldValue::Custom(Box::new(value)));
        self
    }
}

/// Formats a log entry into one human-readable line
#[derive(Debug, Default)]
pub struct Formatter;

impl Formatter {
    /// Always produces a line, even for empty input; never performs I/O.
    pub fn format(&self, entry: &Entry) -> String {
        let mut line = String::new();
        line.push_str(&write_level(entry.level));
        line.push_str(&write_fields(&entry.fields));
        line.push_str(&entry.message);
        line.push('\n');
        line
    }
}

fn write_level(level: Level) -> String {
    match level {
        Level::Debug => format!("[{}] ", "DEBUG".bright_black()),
        Level::Warn => format!("[{}] ", "WARN".yellow()),
        Level::Error => format!("[{}] ", "ERROR".red()),
        Level::Trace | Level::Info => String::new(),
    }
}

fn write_fields(fields: &HashMap<String, FieldValue>) -> String {
    // Iteration order over the map is unspecified; field order may vary
    // between otherwise identical records.
    let mut parts: Vec<String> = fields
        .iter()
        .map(|(key, value)| match value {
            FieldValue::Text(text) => format!("{}={}", key, text),
            FieldValue::Custom(value) => value.represent(),
        })
        .collect();

    if !parts.is_empty() {
        // Trailing separator keeps the message visually distinct from the fields.
        parts.push(String::new());
    }

    parts.join(" ")
}

/// An explicitly constructed logger owning its formatter and sink
pub struct Logger {
    formatter: Formatter,
    min_level: Level,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl Logger {
    /// Logger writing to stderr; debug mode lowers the threshold to Debug
    pub fn new(debug: bool) -> Self {
        Self::with_sink(debug, Box::new(io::stderr()))
    }

    pub fn with_sink(debug: bool, sink: Box<dyn Write + Send>) -> Self {
        Self {
            formatter: Formatter,
            min_level: if debug { Level::Debug } else { Level::Info },
            sink: Mutex::new(sink),
        }
    }

    pub fn log(&self, entry: Entry) {
        if entry.level < self.min_level {
            return;
        }

        let line = self.formatter.format(&entry);
        if let Ok(mut sink) = self.sink.lock() {
            let _ = sink.write_all(line.as_bytes());
            let _ = sink.flush();
        }
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.log(Entry::new(Level::Debug, message));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.log(Entry::new(Level::Info, message));
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.log(Entry::new(Level::Warn, message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.log(Entry::new(Level::Error, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedSink(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedSink {
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

    impl SharedSink {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_error_entry_without_fields() {
        let line = Formatter.format(&Entry::new(Level::Error, "hello"));
        assert_eq!(line, format!("[{}] hello\n", "ERROR".red()));
    }

    #[test]
    fn test_warn_and_debug_prefixes() {
        let warn = Formatter.format(&Entry::new(Level::Warn, "careful"));
        assert_eq!(warn, format!("[{}] careful\n", "WARN".yellow()));

        let debug = Formatter.format(&Entry::new(Level::Debug, "details"));
        assert_eq!(debug, format!("[{}] details\n", "DEBUG".bright_black()));
    }

    #[test]
    fn test_info_entry_has_no_prefix() {
        let line = Formatter.format(&Entry::new(Level::Info, "hello"));
        assert_eq!(line, "hello\n");
    }

    #[test]
    fn test_fields_are_joined_with_trailing_separator() {
        let entry = Entry::new(Level::Info, "done").field("a", 1).field("b", 2);
        let line = Formatter.format(&entry);

        // Field order is unspecified; only membership and the separator
        // before the message are guaranteed.
        assert!(line.contains("a=1"), "line was: {:?}", line);
        assert!(line.contains("b=2"), "line was: {:?}", line);
        assert!(line.ends_with(" done\n"), "line was: {:?}", line);
    }

    #[test]
    fn test_represented_value_renders_verbatim() {
        struct Elapsed(u64);

        impl Represent for Elapsed {
            fn represent(&self) -> String {
                format!("took {}ms", self.0)
            }
        }

        let entry = Entry::new(Level::Info, "finished").field_with("elapsed", Elapsed(5));
        let line = Formatter.format(&entry);

        assert!(line.contains("took 5ms"), "line was: {:?}", line);
        assert!(!line.contains("elapsed="), "line was: {:?}", line);
    }

    #[test]
    fn test_logger_writes_formatted_line() {
        let sink = SharedSink::default();
        let logger = Logger::with_sink(false, Box::new(sink.clone()));

        logger.info("ready");

        assert_eq!(sink.contents(), "ready\n");
    }

    #[test]
    fn test_logger_drops_debug_entries_below_threshold() {
        let sink = SharedSink::default();
        let logger = Logger::with_sink(false, Box::new(sink.clone()));

        logger.debug("hidden");
        assert_eq!(sink.contents(), "");

        let debug_sink = SharedSink::default();
        let debug_logger = Logger::with_sink(true, Box::new(debug_sink.clone()));

        debug_logger.debug("visible");
        assert!(debug_sink.contents().contains("visible"));
    }
}
