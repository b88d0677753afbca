#![forbid(unsafe_code)]

//! Structured events emitted by the event loop.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing_subscriber::layer::SubscriberExt;
use weft_runtime::{EventLoop, InlineBackend, QueueBackend};

#[derive(Debug, Clone)]
struct CapturedEvent {
    message: String,
    fields: HashMap<String, String>,
}

struct EventCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

struct FieldVisitor(HashMap<String, String>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for EventCapture {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(HashMap::new());
        event.record(&mut visitor);
        let message = visitor.0.remove("message").unwrap_or_default();
        self.events.lock().unwrap().push(CapturedEvent {
            message,
            fields: visitor.0,
        });
    }
}

fn capture<F: FnOnce()>(f: F) -> Vec<CapturedEvent> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(EventCapture {
        events: Arc::clone(&events),
    });
    tracing::subscriber::with_default(subscriber, f);
    let captured = events.lock().unwrap().clone();
    captured
}

#[test]
fn start_is_logged_with_backend() {
    let events = capture(|| {
        EventLoop::new(QueueBackend::new()).run(|| Ok(())).unwrap();
    });
    let start = events
        .iter()
        .find(|e| e.message == "event loop started")
        .expect("start event");
    assert_eq!(start.fields.get("backend").map(String::as_str), Some("queue"));

    let idle = events
        .iter()
        .find(|e| e.message == "no roots open after init")
        .expect("idle event");
    assert_eq!(idle.fields.get("lock_count").map(String::as_str), Some("0"));
}

#[test]
fn lock_count_changes_are_traced() {
    let events = capture(|| {
        let el = EventLoop::new(InlineBackend::new());
        el.run(|| {
            el.add_lock_count(2);
            el.add_lock_count(-2);
            Ok(())
        })
        .unwrap();
    });
    let changes: Vec<_> = events
        .iter()
        .filter(|e| e.message == "lock count changed")
        .map(|e| {
            (
                e.fields.get("delta").cloned().unwrap_or_default(),
                e.fields.get("lock_count").cloned().unwrap_or_default(),
            )
        })
        .collect();
    assert_eq!(
        changes,
        [
            ("2".to_string(), "3".to_string()),
            ("-2".to_string(), "1".to_string())
        ]
    );
}
