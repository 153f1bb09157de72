/*!
 * Monitoring
 * Structured tracing for mutation and read operations
 */

mod tracer;

pub use tracer::{
    current_span, generate_trace_id, init_tracing, span_mutation, span_operation, MutationSpan,
    OperationSpan,
};
