/*!
 * ACL Audit Trail
 * Records mutation batches and removals for after-the-fact review
 */

use super::types::Ace;
use crate::core::types::{AceKey, PrincipalId};
use ahash::RandomState;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, TimestampSeconds};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::SystemTime;

/// Maximum events to keep in memory
use crate::core::limits::{MAX_AUDIT_EVENTS, MAX_AUDIT_EVENTS_PER_PRINCIPAL};
use crate::core::{ShardManager, WorkloadProfile};

/// Audit event severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditSeverity {
    Info,
    Warning,
    Critical,
}

/// What happened to the audited entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuditAction {
    /// A mutation batch committed
    BatchApplied {
        mutations: usize,
        granted_after: usize,
        denied_after: usize,
    },
    /// A mutation batch was refused without effect
    BatchRejected { reason: String },
    /// The entry was removed (explicitly or by emptying out)
    AceRemoved,
}

/// ACL audit event
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AuditEvent {
    pub key: AceKey,
    pub action: AuditAction,
    pub severity: AuditSeverity,
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub logged_at: SystemTime,
}

impl AuditEvent {
    fn new(key: AceKey, action: AuditAction, severity: AuditSeverity) -> Self {
        Self {
            key,
            action,
            severity,
            logged_at: SystemTime::now(),
        }
    }

    /// A committed batch
    pub fn applied(key: AceKey, mutations: usize, result: &Ace) -> Self {
        Self::new(
            key,
            AuditAction::BatchApplied {
                mutations,
                granted_after: result.granted.len(),
                denied_after: result.denied.len(),
            },
            AuditSeverity::Info,
        )
    }

    /// A refused batch
    pub fn rejected(key: AceKey, reason: impl Into<String>) -> Self {
        Self::new(
            key,
            AuditAction::BatchRejected {
                reason: reason.into(),
            },
            AuditSeverity::Warning,
        )
    }

    /// An entry removal
    pub fn removed(key: AceKey) -> Self {
        Self::new(key, AuditAction::AceRemoved, AuditSeverity::Info)
    }

    pub fn with_severity(mut self, severity: AuditSeverity) -> Self {
        self.severity = severity;
        self
    }

    /// Number of committed mutations this event represents
    fn mutations(&self) -> u64 {
        match &self.action {
            AuditAction::BatchApplied { mutations, .. } => *mutations as u64,
            _ => 0,
        }
    }
}

/// Audit log for ACL mutations
pub struct AuditLog {
    /// Global event log (ring buffer)
    events: parking_lot::RwLock<VecDeque<AuditEvent>>,
    /// Per-principal event logs
    principal_events: Arc<DashMap<PrincipalId, VecDeque<AuditEvent>, RandomState>>,
    /// Committed-mutation counters for monitoring
    mutation_counts: Arc<DashMap<PrincipalId, u64, RandomState>>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self {
            events: parking_lot::RwLock::new(VecDeque::with_capacity(MAX_AUDIT_EVENTS)),
            // CPU-topology-aware shard counts for optimal concurrent performance
            principal_events: Arc::new(DashMap::with_capacity_and_hasher_and_shard_amount(
                0,
                RandomState::new(),
                ShardManager::shards(WorkloadProfile::LowContention), // per-principal tracking: light access
            )),
            mutation_counts: Arc::new(DashMap::with_capacity_and_hasher_and_shard_amount(
                0,
                RandomState::new(),
                ShardManager::shards(WorkloadProfile::LowContention), // counters: light access
            )),
        }
    }

    /// Log a mutation outcome
    pub fn log(&self, event: AuditEvent) {
        let principal = event.key.principal.clone();
        let mutations = event.mutations();

        // Add to global log
        {
            let mut events = self.events.write();
            if events.len() >= MAX_AUDIT_EVENTS {
                events.pop_front();
            }
            events.push_back(event.clone());
        }

        // Add to principal-specific log
        self.principal_events
            .entry(principal.clone())
            .or_insert_with(|| VecDeque::with_capacity(MAX_AUDIT_EVENTS_PER_PRINCIPAL))
            .push_back(event);

        // Trim principal log if needed
        if let Some(mut entry) = self.principal_events.get_mut(&principal) {
            if entry.len() > MAX_AUDIT_EVENTS_PER_PRINCIPAL {
                entry.pop_front();
            }
        }

        // Track committed mutations
        if mutations > 0 {
            self.mutation_counts
                .entry(principal)
                .and_modify(|count| *count += mutations)
                .or_insert(mutations);
        }
    }

    /// Get recent events
    pub fn recent(&self, limit: usize) -> Vec<AuditEvent> {
        let events = self.events.read();
        events.iter().rev().take(limit).cloned().collect()
    }

    /// Get events for a specific principal
    pub fn for_principal(&self, principal: &str, limit: usize) -> Vec<AuditEvent> {
        if let Some(entry) = self.principal_events.get(principal) {
            entry.iter().rev().take(limit).cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Get committed-mutation count for a principal
    pub fn mutation_count(&self, principal: &str) -> u64 {
        self.mutation_counts.get(principal).map(|e| *e).unwrap_or(0)
    }

    /// Get all principals with committed mutations
    pub fn principals_with_mutations(&self) -> Vec<(PrincipalId, u64)> {
        self.mutation_counts
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect()
    }

    /// Clear logs for a principal
    pub fn clear_principal(&self, principal: &str) {
        self.principal_events.remove(principal);
        self.mutation_counts.remove(principal);
    }

    /// Clear all logs
    pub fn clear_all(&self) {
        self.events.write().clear();
        self.principal_events.clear();
        self.mutation_counts.clear();
    }

    /// Get statistics
    pub fn stats(&self) -> AuditStats {
        let total_events = self.events.read().len();
        let total_mutations: u64 = self.mutation_counts.iter().map(|e| *e.value()).sum();
        let principals_tracked = self.principal_events.len();

        AuditStats {
            total_events,
            total_mutations,
            principals_tracked,
        }
    }
}

impl Default for AuditLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Audit statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditStats {
    pub total_events: usize,
    pub total_mutations: u64,
    pub principals_tracked: usize,
}
