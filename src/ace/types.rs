/*!
 * ACE Types
 * Core types for access control entry state and mutation
 */

use crate::vocabulary::PrivilegeSet;
use serde::{Deserialize, Serialize};

/// Action requested for one privilege in a mutation batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AceAction {
    /// Add to the granted set, withdrawing any overlapping denial
    Granted,
    /// Add to the denied set, withdrawing any overlapping grant
    Denied,
    /// Clear from both sets
    None,
}

impl AceAction {
    /// Parse the wire value. Case-sensitive: only the exact lowercase
    /// literals `granted`, `denied`, `none` are accepted.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "granted" => Some(AceAction::Granted),
            "denied" => Some(AceAction::Denied),
            "none" => Some(AceAction::None),
            _ => Option::None,
        }
    }

    /// Wire form of this action
    pub fn as_wire(&self) -> &'static str {
        match self {
            AceAction::Granted => "granted",
            AceAction::Denied => "denied",
            AceAction::None => "none",
        }
    }
}

impl std::fmt::Display for AceAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// One requested change: a privilege-or-aggregate name and an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AceMutation {
    /// Privilege or aggregate name, resolved against the vocabulary
    pub privilege: String,
    /// What to do with its leaf expansion
    pub action: AceAction,
}

impl AceMutation {
    /// Create a new mutation
    pub fn new(privilege: impl Into<String>, action: AceAction) -> Self {
        Self {
            privilege: privilege.into(),
            action,
        }
    }

    /// Grant request
    pub fn grant(privilege: impl Into<String>) -> Self {
        Self::new(privilege, AceAction::Granted)
    }

    /// Deny request
    pub fn deny(privilege: impl Into<String>) -> Self {
        Self::new(privilege, AceAction::Denied)
    }

    /// Clear request (the wire's `none`)
    pub fn clear(privilege: impl Into<String>) -> Self {
        Self::new(privilege, AceAction::None)
    }
}

/// The granted/denied privilege record for one principal on one resource
///
/// Invariant: `granted` and `denied` are disjoint at all times. An absent
/// record and an empty one are observationally identical; the store never
/// keeps empty records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Ace {
    pub granted: PrivilegeSet,
    pub denied: PrivilegeSet,
}

impl Ace {
    /// Empty record (no explicit grants or denies)
    pub fn new() -> Self {
        Self::default()
    }

    /// True when both sets are empty
    pub fn is_empty(&self) -> bool {
        self.granted.is_empty() && self.denied.is_empty()
    }

    /// True while the disjointness invariant holds
    pub fn is_consistent(&self) -> bool {
        self.granted.is_disjoint(&self.denied)
    }

    /// Check an explicit grant for a privilege name
    pub fn is_granted(&self, name: &str) -> bool {
        self.granted.iter().any(|p| p.name() == name)
    }

    /// Check an explicit denial for a privilege name
    pub fn is_denied(&self, name: &str) -> bool {
        self.denied.iter().any(|p| p.name() == name)
    }
}

/// Store statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AclStats {
    /// ACE records currently stored
    pub total_aces: usize,
    /// Distinct resources with at least one ACE
    pub resources: usize,
    /// Mutations committed since startup
    pub mutations_applied: u64,
    /// Batches rejected without effect since startup
    pub batches_rejected: u64,
}
