//! In-memory capture of roster log events
//!
//! Installs a `tracing` layer that decodes every event into a
//! `CapturedEvent`, with the roster's canonical fields (see
//! `roster_core_types::schema`) pulled out into typed slots. The session
//! `request_id` is taken from the enclosing span, so events logged by
//! `apply()` inside a console session carry it too.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use roster_core_types::schema::{
    FIELD_COMPONENT, FIELD_DURATION_MS, FIELD_EMPLOYEE_ID, FIELD_ERR_CODE, FIELD_ERR_KIND,
    FIELD_EVENT, FIELD_OP, FIELD_REMOVED, FIELD_REQUEST_ID, FIELD_ROSTER_LEN,
};
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// One decoded roster log event
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub component: Option<String>,
    pub op: Option<String>,
    pub event: Option<String>,
    pub employee_id: Option<i64>,
    pub roster_len: Option<u64>,
    pub removed: Option<u64>,
    pub duration_ms: Option<u64>,
    pub err_kind: Option<String>,
    pub err_code: Option<String>,
    /// Inherited from the innermost span that recorded one
    pub request_id: Option<String>,
    /// Any field without a typed slot, rendered as text
    pub other: HashMap<String, String>,
}

impl CapturedEvent {
    fn new(level: Level) -> Self {
        Self {
            level,
            component: None,
            op: None,
            event: None,
            employee_id: None,
            roster_len: None,
            removed: None,
            duration_ms: None,
            err_kind: None,
            err_code: None,
            request_id: None,
            other: HashMap::new(),
        }
    }

    fn set_text(&mut self, name: &str, value: String) {
        match name {
            FIELD_COMPONENT => self.component = Some(value),
            FIELD_OP => self.op = Some(value),
            FIELD_EVENT => self.event = Some(value),
            FIELD_ERR_KIND => self.err_kind = Some(value),
            FIELD_ERR_CODE => self.err_code = Some(value),
            FIELD_REQUEST_ID => self.request_id = Some(value),
            _ => {
                self.other.insert(name.to_string(), value);
            }
        }
    }

    // Integer literals arrive as i64, lengths and durations as u64.
    fn set_int(&mut self, name: &str, value: i128) {
        match name {
            FIELD_EMPLOYEE_ID => self.employee_id = i64::try_from(value).ok(),
            FIELD_ROSTER_LEN => self.roster_len = u64::try_from(value).ok(),
            FIELD_REMOVED => self.removed = u64::try_from(value).ok(),
            FIELD_DURATION_MS => self.duration_ms = u64::try_from(value).ok(),
            _ => self.set_text(name, value.to_string()),
        }
    }
}

impl Visit for CapturedEvent {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.set_text(field.name(), format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field.name(), value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.set_int(field.name(), i128::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.set_int(field.name(), i128::from(value));
    }
}

/// Span extension holding the `request_id` a span was opened with
struct SpanRequestId(String);

/// Layer that decodes every event into the shared buffer
pub struct TestCaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCaptureLayer {
    pub fn new() -> (Self, TestCapture) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let layer = Self {
            events: events.clone(),
        };
        (layer, TestCapture { events })
    }
}

impl<S> Layer<S> for TestCaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let mut fields = CapturedEvent::new(*attrs.metadata().level());
        attrs.record(&mut fields);

        if let (Some(request_id), Some(span)) = (fields.request_id, ctx.span(id)) {
            span.extensions_mut().insert(SpanRequestId(request_id));
        }
    }

    fn on_event(&self, event: &tracing::Event<'_>, ctx: Context<'_, S>) {
        let mut captured = CapturedEvent::new(*event.metadata().level());
        event.record(&mut captured);

        if captured.request_id.is_none() {
            captured.request_id = ctx.event_scope(event).and_then(|scope| {
                scope.into_iter().find_map(|span| {
                    let extensions = span.extensions();
                    let request_id = extensions.get::<SpanRequestId>().map(|r| r.0.clone());
                    request_id
                })
            });
        }

        self.events
            .lock()
            .map(|mut events| events.push(captured))
            .ok();
    }
}

/// Handle for reading captured events in tests
#[derive(Clone)]
pub struct TestCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    /// Snapshot of every event captured so far
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Events of one operation, optionally narrowed to one employee id
    ///
    /// The buffer is shared by every test in the binary, so narrowing by a
    /// unique employee id keeps parallel tests apart.
    pub fn events_for(&self, op: &str, employee_id: Option<i64>) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.op.as_deref() == Some(op))
            .filter(|e| employee_id.is_none() || e.employee_id == employee_id)
            .collect()
    }

    /// Assert that an event exists with the given operation and event type
    ///
    /// # Panics
    ///
    /// Panics if the event is not found
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let events = self.events();
        let found = events
            .iter()
            .any(|e| e.op.as_deref() == Some(op) && e.event.as_deref() == Some(event));
        assert!(
            found,
            "Expected event op={} event={} not found in {} captured events",
            op,
            event,
            events.len()
        );
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer as the global subscriber (once) and return a
/// handle to the shared buffer
///
/// # Example
///
/// ```
/// use roster_core::logging_facility::test_capture::init_test_capture;
/// use roster_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_capture_op", employee_id = 3);
///
/// let events = capture.events_for("doc_capture_op", Some(3));
/// assert_eq!(events[0].event.as_deref(), Some("start"));
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

    #[test]
    fn test_typed_slots_follow_schema_names() {
        let mut event = CapturedEvent::new(Level::INFO);
        event.set_int(FIELD_EMPLOYEE_ID, -4);
        event.set_int(FIELD_ROSTER_LEN, 2);
        event.set_int(FIELD_REMOVED, 1);
        event.set_text(FIELD_ERR_CODE, "ERR_NOT_FOUND".to_string());

        assert_eq!(event.employee_id, Some(-4));
        assert_eq!(event.roster_len, Some(2));
        assert_eq!(event.removed, Some(1));
        assert_eq!(event.err_code.as_deref(), Some("ERR_NOT_FOUND"));
        assert!(event.other.is_empty());
    }

    #[test]
    fn test_negative_count_is_dropped() {
        let mut event = CapturedEvent::new(Level::INFO);
        event.set_int(FIELD_ROSTER_LEN, -1);
        assert_eq!(event.roster_len, None);
    }

    #[test]
    fn test_unknown_fields_kept_as_text() {
        let mut event = CapturedEvent::new(Level::DEBUG);
        event.set_int("choice", 9);
        event.set_text("message", "menu choice out of range".to_string());

        assert_eq!(event.other.get("choice").map(String::as_str), Some("9"));
        assert_eq!(event.other.len(), 2);
    }
}
