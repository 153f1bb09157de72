/*!
 * Privilege Types
 * Named capabilities with identity by full name
 */

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// Set of privileges
pub type PrivilegeSet = HashSet<Privilege>;

/// An opaque named capability (e.g. `jcr:read`)
///
/// Identity is the full name including any namespace prefix. Instances are
/// interned by the vocabulary and cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Privilege {
    name: Arc<str>,
}

impl Privilege {
    /// Create a privilege from its full name
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: Arc::from(name.as_ref()),
        }
    }

    /// Full canonical name, including the namespace prefix
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Namespace prefix, if the name carries one (`jcr:read` -> `jcr`)
    pub fn namespace(&self) -> Option<&str> {
        self.name.split_once(':').map(|(ns, _)| ns)
    }

    /// Local name with any namespace prefix stripped (`jcr:read` -> `read`)
    pub fn local_name(&self) -> &str {
        self.name
            .split_once(':')
            .map(|(_, local)| local)
            .unwrap_or(&self.name)
    }

    /// Wire-output display form: namespace stripped, first letter upper-cased
    /// (`jcr:read` -> `Read`, `jcr:modifyProperties` -> `ModifyProperties`)
    pub fn display_name(&self) -> String {
        let local = self.local_name();
        let mut chars = local.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl std::fmt::Display for Privilege {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Privilege {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
