/*!
 * Structured Tracing
 * Request-correlated tracing for ACL mutations using the tracing crate
 *
 * Features:
 * - Automatic trace ID generation for request correlation
 * - JSON-formatted logs for structured parsing
 * - Span hierarchies for batched operations
 * - Slow-mutation detection embedded in span close events
 */

use std::time::Instant;
use tracing::{debug, span, warn, Level, Span};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};
use uuid::Uuid;

/// Initialize structured tracing with enhanced features
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - ACL_TRACE_JSON: Enable JSON output (default: false)
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Check if JSON output is requested
    let use_json = std::env::var("ACL_TRACE_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        // JSON output for production/parsing
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_line_number(true)
                    .with_file(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::FULL),
            )
            .init();
        tracing::info!("Structured tracing initialized with JSON output and full span events");
    } else {
        // Human-readable output for development
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_line_number(true)
                    .with_file(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .init();
        tracing::info!("Structured tracing initialized with context propagation");
    }
}

/// Generate a unique trace ID for request correlation
pub fn generate_trace_id() -> String {
    Uuid::new_v4().to_string()
}

/// Span covering one mutation batch against one entry
pub struct MutationSpan {
    _span: tracing::Span,
    start: Instant,
    trace_id: String,
}

impl MutationSpan {
    pub fn new(resource: &str, principal: &str, batch_size: usize) -> Self {
        let trace_id = generate_trace_id();

        // Create a tracing span with structured fields for the batch
        let span = span!(
            Level::DEBUG,
            "mutation",
            trace_id = %trace_id,
            resource = resource,
            principal = principal,
            batch_size = batch_size,
            duration_us = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
            result = tracing::field::Empty,
            error = tracing::field::Empty,
            granted_after = tracing::field::Empty,
            denied_after = tracing::field::Empty,
        );

        let _entered = span.enter();
        debug!(
            resource = resource,
            principal = principal,
            batch_size = batch_size,
            "mutation started"
        );
        drop(_entered);

        Self {
            _span: span,
            start: Instant::now(),
            trace_id,
        }
    }

    /// Get the trace ID for this mutation
    pub fn trace_id(&self) -> &str {
        &self.trace_id
    }

    /// Record the mutation result
    pub fn record_result(&self, success: bool) {
        self._span
            .record("result", if success { "success" } else { "error" });
    }

    /// Record an error
    pub fn record_error(&self, error: &str) {
        self._span.record("error", error);
        self._span.record("result", "error");
    }

    /// Record the resulting set sizes
    pub fn record_sets(&self, granted: usize, denied: usize) {
        self._span.record("granted_after", granted);
        self._span.record("denied_after", denied);
    }

    /// Record a field with any Debug-compatible type
    pub fn record_debug<V: std::fmt::Debug>(&self, key: &str, value: V) {
        self._span.record(key, format!("{:?}", value).as_str());
    }

    /// Enter the span context
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self._span.enter()
    }
}

impl Drop for MutationSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        let _entered = self._span.enter();

        if duration.as_millis() > 10 {
            // A batch holds its entry lock for the whole merge; taking this
            // long means contention worth surfacing
            self._span.record("duration_ms", duration.as_millis());
            warn!(
                trace_id = %self.trace_id,
                duration_ms = duration.as_millis(),
                slow = true,
                "slow mutation detected"
            );
        } else {
            self._span.record("duration_us", duration.as_micros());
            debug!(
                trace_id = %self.trace_id,
                duration_us = duration.as_micros(),
                "mutation completed"
            );
        }
    }
}

/// Span for coarser operations (reads, resource clears, catalog builds)
pub struct OperationSpan {
    _span: tracing::Span,
    start: Instant,
    trace_id: String,
}

impl OperationSpan {
    pub fn new(operation: &str) -> Self {
        let trace_id = generate_trace_id();

        let span = span!(
            Level::DEBUG,
            "operation",
            trace_id = %trace_id,
            operation = operation,
            duration_us = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
            result = tracing::field::Empty,
            items_processed = tracing::field::Empty,
            error = tracing::field::Empty,
        );

        let _entered = span.enter();
        debug!(
            operation = operation,
            trace_id = %trace_id,
            "operation started"
        );
        drop(_entered);

        Self {
            _span: span,
            start: Instant::now(),
            trace_id,
        }
    }

    /// Get the trace ID for this operation
    pub fn trace_id(&self) -> &str {
        &self.trace_id
    }

    /// Record structured fields during operation execution
    pub fn record(&self, key: &str, value: &str) {
        self._span.record(key, value);
    }

    /// Record a field with any Debug-compatible type
    pub fn record_debug<V: std::fmt::Debug>(&self, key: &str, value: V) {
        self._span.record(key, format!("{:?}", value).as_str());
    }

    /// Record the operation result
    pub fn record_result(&self, success: bool) {
        self._span
            .record("result", if success { "success" } else { "error" });
    }

    /// Record an error
    pub fn record_error(&self, error: &str) {
        self._span.record("error", error);
        self._span.record("result", "error");
    }

    /// Record items processed count
    pub fn record_items_processed(&self, count: usize) {
        self._span.record("items_processed", count);
    }

    /// Enter the span context
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self._span.enter()
    }
}

impl Drop for OperationSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        let _entered = self._span.enter();

        if duration.as_millis() > 100 {
            self._span.record("duration_ms", duration.as_millis());
            warn!(
                trace_id = %self.trace_id,
                duration_ms = duration.as_millis(),
                slow = true,
                "slow operation detected"
            );
        } else {
            self._span.record("duration_us", duration.as_micros());
            debug!(
                trace_id = %self.trace_id,
                duration_us = duration.as_micros(),
                "operation completed"
            );
        }
    }
}

/// Helper to create a mutation span with automatic context propagation
#[inline]
pub fn span_mutation(resource: &str, principal: &str, batch_size: usize) -> MutationSpan {
    MutationSpan::new(resource, principal, batch_size)
}

/// Helper to create an operation span with automatic context propagation
#[inline]
pub fn span_operation(name: &str) -> OperationSpan {
    OperationSpan::new(name)
}

/// Get the current span for manual tracing
pub fn current_span() -> Span {
    Span::current()
}
