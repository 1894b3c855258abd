//! Shared test utilities used across arbor crates.

pub mod tracing {
    //! In-memory capture of spans and events for asserting instrumentation.
    //!
    //! Tests wrap the code under observation in [`capture`], which installs a
    //! scoped subscriber for the duration of the closure and hands back what
    //! was recorded alongside the closure's own result.
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex, PoisonError};

    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::registry::LookupSpan;

    /// A span that was closed while capture was active.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CapturedSpan {
        /// Span name from the callsite metadata.
        pub name: String,
        /// Fields recorded at creation or later via `Span::record`.
        pub fields: HashMap<String, String>,
    }

    impl CapturedSpan {
        /// Returns the recorded value for `field`, if any.
        #[must_use]
        pub fn field(&self, field: &str) -> Option<&str> {
            self.fields.get(field).map(String::as_str)
        }
    }

    /// An event emitted while capture was active.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CapturedEvent {
        /// Level of the event.
        pub level: Level,
        /// Target of the event, usually the emitting module path.
        pub target: String,
        /// Structured fields, including `message`.
        pub fields: HashMap<String, String>,
    }

    impl CapturedEvent {
        /// Returns the recorded value for `field`, if any.
        #[must_use]
        pub fn field(&self, field: &str) -> Option<&str> {
            self.fields.get(field).map(String::as_str)
        }

        /// Returns the formatted event message.
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            self.field("message")
        }
    }

    /// Everything recorded by a [`CaptureLayer`].
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct Captured {
        /// Closed spans in completion order.
        pub spans: Vec<CapturedSpan>,
        /// Events in emission order.
        pub events: Vec<CapturedEvent>,
    }

    impl Captured {
        /// Finds the first closed span called `name`.
        #[must_use]
        pub fn span(&self, name: &str) -> Option<&CapturedSpan> {
            self.spans.iter().find(|span| span.name == name)
        }

        /// Iterates over events whose message equals `message`.
        pub fn events_with_message<'a>(
            &'a self,
            message: &'a str,
        ) -> impl Iterator<Item = &'a CapturedEvent> + 'a {
            self.events
                .iter()
                .filter(move |event| event.message() == Some(message))
        }
    }

    /// Layer that stores spans and events in shared memory.
    ///
    /// Clones share the same storage, so a clone can be handed to a
    /// subscriber while the original is kept for assertions.
    #[derive(Clone, Default)]
    pub struct CaptureLayer {
        captured: Arc<Mutex<Captured>>,
    }

    impl CaptureLayer {
        /// Returns a snapshot of everything recorded so far.
        ///
        /// # Examples
        /// ```
        /// use arbor_test_support::tracing::CaptureLayer;
        ///
        /// let layer = CaptureLayer::default();
        /// assert!(layer.snapshot().spans.is_empty());
        /// ```
        #[must_use]
        pub fn snapshot(&self) -> Captured {
            self.captured
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        fn with_captured(&self, update: impl FnOnce(&mut Captured)) {
            let mut guard = self
                .captured
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            update(&mut guard);
        }
    }

    /// Runs `operation` under a scoped subscriber and returns its result
    /// together with the spans and events it produced.
    ///
    /// # Examples
    /// ```
    /// use arbor_test_support::tracing::capture;
    ///
    /// let (value, captured) = capture(|| {
    ///     let _span = tracing::info_span!("demo", answer = 42).entered();
    ///     tracing::info!("inside");
    ///     7
    /// });
    /// assert_eq!(value, 7);
    /// assert_eq!(captured.span("demo").and_then(|s| s.field("answer")), Some("42"));
    /// assert_eq!(captured.events_with_message("inside").count(), 1);
    /// ```
    pub fn capture<R>(operation: impl FnOnce() -> R) -> (R, Captured) {
        let layer = CaptureLayer::default();
        let subscriber = tracing_subscriber::registry().with(layer.clone());
        let result = tracing::subscriber::with_default(subscriber, operation);
        (result, layer.snapshot())
    }

    struct PendingSpan {
        name: String,
        fields: HashMap<String, String>,
    }

    impl<S> Layer<S> for CaptureLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut pending = PendingSpan {
                name: attrs.metadata().name().to_owned(),
                fields: HashMap::new(),
            };
            attrs.record(&mut FieldWriter(&mut pending.fields));
            span.extensions_mut().insert(pending);
        }

        fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            if let Some(pending) = span.extensions_mut().get_mut::<PendingSpan>() {
                values.record(&mut FieldWriter(&mut pending.fields));
            }
        }

        fn on_close(&self, id: Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            let Some(pending) = span.extensions_mut().remove::<PendingSpan>() else {
                return;
            };
            self.with_captured(|captured| {
                captured.spans.push(CapturedSpan {
                    name: pending.name,
                    fields: pending.fields,
                });
            });
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            event.record(&mut FieldWriter(&mut fields));
            let metadata = event.metadata();
            self.with_captured(|captured| {
                captured.events.push(CapturedEvent {
                    level: *metadata.level(),
                    target: metadata.target().to_owned(),
                    fields,
                });
            });
        }
    }

    struct FieldWriter<'a>(&'a mut HashMap<String, String>);

    impl Visit for FieldWriter<'_> {
        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.insert(field.name().to_owned(), value.to_owned());
        }

        fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
            self.0.insert(field.name().to_owned(), value.to_string());
        }

        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.insert(field.name().to_owned(), format!("{value:?}"));
        }
    }
}

pub mod ci;
