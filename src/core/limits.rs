/*!
 * Engine Limits and Constants
 *
 * Centralized location for all engine-wide limits and thresholds.
 * All values include rationale comments explaining WHY they exist.
 * Security-critical constants are marked with [SECURITY].
 */

// =============================================================================
// AUDIT
// =============================================================================

/// Maximum audit events stored globally (10,000 events)
/// [SECURITY] Prevents the mutation log from consuming excessive memory
pub const MAX_AUDIT_EVENTS: usize = 10_000;

/// Maximum audit events per principal (100 events)
/// [SECURITY] Per-principal limit for fine-grained tracking
pub const MAX_AUDIT_EVENTS_PER_PRINCIPAL: usize = 100;

// =============================================================================
// WIRE
// =============================================================================

/// Maximum mutations accepted in one wire batch (1,024)
/// [SECURITY] A form post carries at most a few dozen privilege fields;
/// anything near this bound is malformed or hostile input
pub const MAX_BATCH_MUTATIONS: usize = 1_024;
