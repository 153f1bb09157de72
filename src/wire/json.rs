/*!
 * ACL Read Payload
 * Per-principal granted/denied listing in wire display form
 */

use crate::ace::{Ace, AceReader};
use crate::core::types::PrincipalId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One principal's entry in the read payload
///
/// Privileges are listed by display name (`jcr:read` appears as `Read`),
/// sorted so repeated reads serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AceJson {
    pub granted: Vec<String>,
    pub denied: Vec<String>,
}

impl AceJson {
    /// Project a stored record into display form
    pub fn from_ace(ace: &Ace) -> Self {
        let mut granted: Vec<String> = ace.granted.iter().map(|p| p.display_name()).collect();
        let mut denied: Vec<String> = ace.denied.iter().map(|p| p.display_name()).collect();
        granted.sort();
        denied.sort();
        Self { granted, denied }
    }

    /// True when the record carries no explicit grants or denies
    pub fn is_empty(&self) -> bool {
        self.granted.is_empty() && self.denied.is_empty()
    }
}

/// Read-endpoint payload for one resource, keyed by principal
///
/// Serializes transparently as a JSON object mapping principal to entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AclJson {
    pub principals: BTreeMap<PrincipalId, AceJson>,
}

impl AclJson {
    /// Snapshot a resource's ACL through any reader
    pub fn from_reader<R: AceReader + ?Sized>(reader: &R, resource: &str) -> Self {
        let principals = reader
            .resource_acl(resource)
            .into_iter()
            .map(|(principal, ace)| (principal, AceJson::from_ace(&ace)))
            .collect();
        Self { principals }
    }

    /// Entry for one principal, if present
    pub fn get(&self, principal: &str) -> Option<&AceJson> {
        self.principals.get(principal)
    }

    /// True when the resource has no entries
    pub fn is_empty(&self) -> bool {
        self.principals.is_empty()
    }
}
