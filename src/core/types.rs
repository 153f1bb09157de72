/*!
 * Core Types
 * Common types used across the engine
 */

use serde::{Deserialize, Serialize};

/// Resource identifier (node path in the backing content store)
pub type ResourceId = String;

/// Principal identifier (user or group name)
pub type PrincipalId = String;

/// Key addressing one access control entry: one principal on one resource
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AceKey {
    pub resource: ResourceId,
    pub principal: PrincipalId,
}

impl AceKey {
    /// Create a new ACE key
    pub fn new(resource: impl Into<ResourceId>, principal: impl Into<PrincipalId>) -> Self {
        Self {
            resource: resource.into(),
            principal: principal.into(),
        }
    }
}

impl std::fmt::Display for AceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.principal, self.resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_equality() {
        let a = AceKey::new("/content/site", "everyone");
        let b = AceKey::new("/content/site".to_string(), "everyone".to_string());
        assert_eq!(a, b);

        let c = AceKey::new("/content/site", "alice");
        assert_ne!(a, c);
    }

    #[test]
    fn test_key_display() {
        let key = AceKey::new("/content/site", "everyone");
        assert_eq!(key.to_string(), "everyone@/content/site");
    }
}
