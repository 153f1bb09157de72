/*!
 * ACL Traits
 * Interfaces for reading and mutating access control entries
 */

use super::types::{Ace, AceMutation};
use crate::core::errors::AclResult;
use crate::core::types::PrincipalId;
use std::collections::BTreeMap;

/// Read-side interface over stored entries
pub trait AceReader: Send + Sync {
    /// Get the entry for a (resource, principal) pair, empty when absent
    fn get_ace(&self, resource: &str, principal: &str) -> Ace;

    /// Check whether an entry is stored for the pair
    fn has_ace(&self, resource: &str, principal: &str) -> bool {
        !self.get_ace(resource, principal).is_empty()
    }

    /// All entries for a resource, keyed by principal in sorted order
    fn resource_acl(&self, resource: &str) -> BTreeMap<PrincipalId, Ace>;
}

/// Write-side interface for mutating entries
pub trait AceWriter: Send + Sync {
    /// Apply a mutation batch to one entry, all or nothing
    fn apply(&self, resource: &str, principal: &str, batch: &[AceMutation]) -> AclResult<Ace>;

    /// Drop the entry for a pair, reporting whether one existed
    fn remove_ace(&self, resource: &str, principal: &str) -> bool;

    /// Drop every entry for a resource, returning how many were removed
    fn clear_resource(&self, resource: &str) -> usize;
}

/// Combined interface
#[allow(dead_code)]
pub trait AclSystem: AceReader + AceWriter + Clone + Send + Sync {}
