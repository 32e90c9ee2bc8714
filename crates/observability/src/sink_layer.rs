//! Layer that hands each event to a [LogSink] as a single line:
//! `LEVEL target: message key=value ...`.

use std::fmt::{self, Write};

use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};

use crate::config::LogSink;

/// Lines longer than this are cut and suffixed with the original length.
const MAX_LINE_CHARS: usize = 4_000;

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
            write!(self.fields, " {}={}", field.name(), value).ok();
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            write!(self.message, "{value:?}").ok();
        } else {
            write!(self.fields, " {}={:?}", field.name(), value).ok();
        }
    }
}

pub(crate) fn sink_layer(sink: LogSink) -> SinkLayer {
    SinkLayer { sink }
}

#[derive(Clone)]
pub struct SinkLayer {
    sink: LogSink,
}

impl<S> Layer<S> for SinkLayer
where
    S: tracing::Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let mut line = format!("{:<5} {}:", meta.level(), meta.target());
        if !visitor.message.is_empty() {
            line.push(' ');
            line.push_str(&visitor.message);
        }
        line.push_str(&visitor.fields);

        let total = line.chars().count();
        if total > MAX_LINE_CHARS {
            line = line.chars().take(MAX_LINE_CHARS).collect();
            write!(line, "… ({total} chars)").ok();
        }
        (self.sink)(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::layer::SubscriberExt;

    fn capture() -> (LogSink, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let out = Arc::clone(&lines);
        let sink: LogSink = Arc::new(move |line| out.lock().unwrap().push(line));
        (sink, lines)
    }

    #[test]
    fn formats_level_target_message_fields() {
        let (sink, lines) = capture();
        let subscriber = tracing_subscriber::registry().with(sink_layer(sink));
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target: "tipcalc", tip = 15.0, field = "bill", "tip recomputed");
        });
        let lines = lines.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], "INFO  tipcalc: tip recomputed tip=15.0 field=bill");
    }

    #[test]
    fn long_lines_truncated() {
        let (sink, lines) = capture();
        let subscriber = tracing_subscriber::registry().with(sink_layer(sink));
        let long = "x".repeat(MAX_LINE_CHARS * 2);
        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(target: "t", "{}", long);
        });
        let lines = lines.lock().unwrap();
        assert!(lines[0].chars().count() < MAX_LINE_CHARS + 32);
        assert!(lines[0].ends_with("chars)"));
    }
}
