/*!
 * ACL Manager
 * Central store for access control entries with batch mutation semantics
 */

use super::audit::{AuditEvent, AuditLog, AuditSeverity, AuditStats};
use super::merge;
use super::traits::{AceReader, AceWriter, AclSystem};
use super::types::{Ace, AceAction, AceMutation, AclStats};
use crate::core::errors::{AclError, AclResult};
use crate::core::types::{AceKey, PrincipalId};
use crate::core::{ShardManager, WorkloadProfile};
use crate::vocabulary::{PrivilegeSet, Vocabulary};
use ahash::RandomState;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use log::{debug, error, info, warn};
use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Central ACL manager
///
/// Entries live in a sharded map keyed by (resource, principal). A batch
/// mutates exactly one entry; the map's entry guard serializes concurrent
/// batches on the same key while leaving other keys untouched.
#[derive(Clone)]
pub struct AclManager {
    /// Vocabulary for privilege name resolution
    vocabulary: Arc<Vocabulary>,
    /// ACE records keyed by (resource, principal)
    entries: Arc<DashMap<AceKey, Ace, RandomState>>,
    /// Audit trail
    audit: Arc<AuditLog>,
    /// Mutations committed since startup
    mutations_applied: Arc<AtomicU64>,
    /// Batches refused since startup
    batches_rejected: Arc<AtomicU64>,
}

impl AclManager {
    /// Create a new manager over the given vocabulary
    pub fn new(vocabulary: Vocabulary) -> Self {
        info!(
            "ACL manager initialized ({} privileges in vocabulary)",
            vocabulary.len()
        );
        Self {
            vocabulary: Arc::new(vocabulary),
            // CPU-topology-aware shard counts for optimal concurrent performance
            entries: Arc::new(DashMap::with_capacity_and_hasher_and_shard_amount(
                0,
                RandomState::new(),
                ShardManager::shards(WorkloadProfile::MediumContention), // ACE table: moderate write contention
            )),
            audit: Arc::new(AuditLog::new()),
            mutations_applied: Arc::new(AtomicU64::new(0)),
            batches_rejected: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Manager preloaded with the standard JCR vocabulary
    pub fn jcr() -> Self {
        Self::new(Vocabulary::jcr())
    }

    /// Get the vocabulary
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Get the audit log
    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }

    /// Get audit statistics
    pub fn audit_stats(&self) -> AuditStats {
        self.audit.stats()
    }

    /// Number of stored entries
    pub fn ace_count(&self) -> usize {
        self.entries.len()
    }

    /// Get store statistics
    pub fn stats(&self) -> AclStats {
        let resources = self
            .entries
            .iter()
            .map(|entry| entry.key().resource.clone())
            .collect::<HashSet<_>>()
            .len();

        AclStats {
            total_aces: self.entries.len(),
            resources,
            mutations_applied: self.mutations_applied.load(Ordering::Relaxed),
            batches_rejected: self.batches_rejected.load(Ordering::Relaxed),
        }
    }

    /// Resolve every batch entry before anything is locked, so an unknown
    /// privilege aborts with zero state change.
    fn resolve_batch<'a>(
        &'a self,
        key: &AceKey,
        batch: &'a [AceMutation],
    ) -> AclResult<Vec<(&'a PrivilegeSet, AceAction)>> {
        let mut resolved = Vec::with_capacity(batch.len());
        for mutation in batch {
            match self.vocabulary.resolve(&mutation.privilege) {
                Ok(leaves) => resolved.push((leaves, mutation.action)),
                Err(err) => {
                    warn!("Rejecting batch for {}: {}", key, err);
                    self.batches_rejected.fetch_add(1, Ordering::Relaxed);
                    self.audit
                        .log(AuditEvent::rejected(key.clone(), err.to_string()));
                    return Err(err.into());
                }
            }
        }
        Ok(resolved)
    }

    /// Refuse to commit a record that grants and denies the same privilege.
    /// The merge keeps the sets disjoint by construction, so tripping this
    /// means corrupted state rather than a bad request.
    fn check_invariant(&self, key: &AceKey, ace: &Ace) -> AclResult<()> {
        if ace.is_consistent() {
            return Ok(());
        }

        let overlap: Vec<&str> = ace
            .granted
            .intersection(&ace.denied)
            .map(|p| p.name())
            .collect();
        let detail = format!("granted and denied overlap: {}", overlap.join(", "));
        error!("Invariant violation on {}: {}", key, detail);

        self.batches_rejected.fetch_add(1, Ordering::Relaxed);
        self.audit.log(
            AuditEvent::rejected(key.clone(), detail.clone())
                .with_severity(AuditSeverity::Critical),
        );
        Err(AclError::InvariantViolation {
            key: key.to_string(),
            detail,
        })
    }
}

impl AceReader for AclManager {
    fn get_ace(&self, resource: &str, principal: &str) -> Ace {
        let key = AceKey::new(resource, principal);
        self.entries
            .get(&key)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    fn has_ace(&self, resource: &str, principal: &str) -> bool {
        self.entries.contains_key(&AceKey::new(resource, principal))
    }

    fn resource_acl(&self, resource: &str) -> BTreeMap<PrincipalId, Ace> {
        self.entries
            .iter()
            .filter(|entry| entry.key().resource == resource)
            .map(|entry| (entry.key().principal.clone(), entry.value().clone()))
            .collect()
    }
}

impl AceWriter for AclManager {
    fn apply(&self, resource: &str, principal: &str, batch: &[AceMutation]) -> AclResult<Ace> {
        let key = AceKey::new(resource, principal);

        // An empty batch is a read
        if batch.is_empty() {
            return Ok(self.get_ace(resource, principal));
        }

        let resolved = self.resolve_batch(&key, batch)?;

        // The entry guard serializes same-key batches
        let updated = match self.entries.entry(key.clone()) {
            Entry::Occupied(mut occupied) => {
                let mut scratch = occupied.get().clone();
                merge::apply_batch(&mut scratch, resolved.iter().map(|&(l, a)| (l, a)));
                self.check_invariant(&key, &scratch)?;

                if scratch.is_empty() {
                    occupied.remove();
                    debug!("ACE {} emptied out and was removed", key);
                } else {
                    occupied.insert(scratch.clone());
                }
                scratch
            }
            Entry::Vacant(vacant) => {
                let mut scratch = Ace::new();
                merge::apply_batch(&mut scratch, resolved.iter().map(|&(l, a)| (l, a)));
                self.check_invariant(&key, &scratch)?;

                if !scratch.is_empty() {
                    vacant.insert(scratch.clone());
                }
                scratch
            }
        };

        self.mutations_applied
            .fetch_add(batch.len() as u64, Ordering::Relaxed);
        self.audit
            .log(AuditEvent::applied(key.clone(), batch.len(), &updated));
        debug!(
            "Applied {} mutation(s) to {} ({} granted, {} denied)",
            batch.len(),
            key,
            updated.granted.len(),
            updated.denied.len()
        );

        Ok(updated)
    }

    fn remove_ace(&self, resource: &str, principal: &str) -> bool {
        let key = AceKey::new(resource, principal);
        let removed = self.entries.remove(&key).is_some();
        if removed {
            debug!("Removed ACE {}", key);
            self.audit.log(AuditEvent::removed(key));
        }
        removed
    }

    fn clear_resource(&self, resource: &str) -> usize {
        // Snapshot matching keys first so every removal is audited
        let keys: Vec<AceKey> = self
            .entries
            .iter()
            .filter(|entry| entry.key().resource == resource)
            .map(|entry| entry.key().clone())
            .collect();

        let mut removed = 0;
        for key in keys {
            if self.entries.remove(&key).is_some() {
                self.audit.log(AuditEvent::removed(key));
                removed += 1;
            }
        }

        if removed > 0 {
            info!("Cleared {} ACE(s) for resource {}", removed, resource);
        }
        removed
    }
}

impl AclSystem for AclManager {}
