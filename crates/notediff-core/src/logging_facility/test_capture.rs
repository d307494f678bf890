//! In-memory event capture for logging assertions
//!
//! Installs a global subscriber layer that records every event with its
//! fields. Tests in one binary share the capture, so assertions should
//! filter by a unique op name or by the [`RequestId`] of the review under
//! test.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::core_types::schema::{FIELD_COMPONENT, FIELD_EVENT, FIELD_OP, FIELD_REQUEST_ID};
use crate::core_types::RequestId;

/// One recorded event. Field values are kept in their logged text form.
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub component: Option<String>,
    pub op: Option<String>,
    pub event: Option<String>,
    pub request_id: Option<String>,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    fn is(&self, op: &str, event: &str) -> bool {
        self.op.as_deref() == Some(op) && self.event.as_deref() == Some(event)
    }
}

#[derive(Default)]
struct FieldVisitor(HashMap<String, String>);

impl FieldVisitor {
    fn put(&mut self, field: &Field, value: String) {
        self.0.insert(field.name().to_string(), value);
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.put(field, format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, value.to_string());
    }
}

type EventLog = Arc<Mutex<Vec<CapturedEvent>>>;

/// Layer that appends every event to a shared log
pub struct TestCaptureLayer {
    events: EventLog,
}

impl TestCaptureLayer {
    pub fn new() -> (Self, TestCapture) {
        let events = EventLog::default();
        (
            Self {
                events: Arc::clone(&events),
            },
            TestCapture { events },
        )
    }
}

impl<S> Layer<S> for TestCaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        let fields = visitor.0;

        let captured = CapturedEvent {
            level: *event.metadata().level(),
            component: fields.get(FIELD_COMPONENT).cloned(),
            op: fields.get(FIELD_OP).cloned(),
            event: fields.get(FIELD_EVENT).cloned(),
            request_id: fields.get(FIELD_REQUEST_ID).cloned(),
            fields,
        };

        if let Ok(mut events) = self.events.lock() {
            events.push(captured);
        }
    }
}

/// Read handle on the captured events
#[derive(Clone)]
pub struct TestCapture {
    events: EventLog,
}

impl TestCapture {
    /// Snapshot of everything captured so far
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Events logged under one operation name, in emission order
    pub fn events_for(&self, op: &str) -> Vec<CapturedEvent> {
        self.filtered(|e| e.op.as_deref() == Some(op))
    }

    /// Events tagged with one review's request id, in emission order
    pub fn events_for_request(&self, request_id: RequestId) -> Vec<CapturedEvent> {
        let wanted = request_id.to_string();
        self.filtered(|e| e.request_id.as_deref() == Some(wanted.as_str()))
    }

    /// # Panics
    ///
    /// Panics if no event with this op and event name was captured
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let events = self.events();
        assert!(
            events.iter().any(|e| e.is(op, event)),
            "Expected event op={} event={} not found in {} captured events",
            op,
            event,
            events.len()
        );
    }

    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.filtered(predicate).len()
    }

    fn filtered<F>(&self, predicate: F) -> Vec<CapturedEvent>
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().into_iter().filter(|e| predicate(e)).collect()
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer as the global subscriber (first call only)
/// and return the shared handle.
///
/// # Example
///
/// ```
/// use notediff_core::logging_facility::test_capture::init_test_capture;
/// use notediff_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_example_op");
/// capture.assert_event_exists("doc_example_op", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let (layer, capture) = TestCaptureLayer::new();
            tracing_subscriber::registry().with(layer).init();
            capture
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(op: &str, request_id: Option<String>) -> CapturedEvent {
        CapturedEvent {
            level: Level::INFO,
            component: None,
            op: Some(op.to_string()),
            event: Some("start".to_string()),
            request_id,
            fields: HashMap::from([("block_count".to_string(), "2".to_string())]),
        }
    }

    #[test]
    fn test_filters_by_op_and_request() {
        let (_layer, capture) = TestCaptureLayer::new();
        let id = RequestId::new();
        if let Ok(mut events) = capture.events.lock() {
            events.push(event("apply", Some(id.to_string())));
            events.push(event("apply", None));
            events.push(event("other", None));
        }

        assert_eq!(capture.events_for("apply").len(), 2);
        assert_eq!(capture.events_for_request(id).len(), 1);
        assert_eq!(capture.count_events(|e| e.field("block_count") == Some("2")), 3);
        capture.assert_event_exists("other", "start");
    }
}
