/*!
 * Mutation Request Fields
 * Parses the privilege@<name> field encoding into an ordered mutation batch
 */

use crate::ace::{AceAction, AceMutation};
use crate::core::errors::{WireError, WireResult};
use crate::core::limits::MAX_BATCH_MUTATIONS;
use crate::core::types::PrincipalId;
use serde::{Deserialize, Serialize};

/// Field-name prefix marking a privilege mutation
pub const PRIVILEGE_PREFIX: &str = "privilege@";

/// Parsed mutation request: one principal, one ordered batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ModifyAceParams {
    pub principal: PrincipalId,
    pub batch: Vec<AceMutation>,
}

impl ModifyAceParams {
    /// Parse request fields in submission order.
    ///
    /// Fields that do not start with `privilege@` belong to outer layers and
    /// are skipped. Submission order is preserved: it is the order the merge
    /// applies, and it matters when an aggregate and one of its leaves appear
    /// in the same request.
    pub fn parse<'a, I>(principal: impl Into<PrincipalId>, fields: I) -> WireResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut batch = Vec::new();
        for (name, value) in fields {
            let privilege = match name.strip_prefix(PRIVILEGE_PREFIX) {
                Some(rest) => rest,
                None => continue,
            };
            if privilege.is_empty() {
                return Err(WireError::MalformedField(name.to_string()));
            }

            // Action values are matched case-sensitively
            let action = AceAction::from_wire(value).ok_or_else(|| WireError::InvalidAction {
                privilege: privilege.to_string(),
                value: value.to_string(),
            })?;
            batch.push(AceMutation::new(privilege, action));
        }

        if batch.len() > MAX_BATCH_MUTATIONS {
            return Err(WireError::BatchTooLarge {
                got: batch.len(),
                max: MAX_BATCH_MUTATIONS,
            });
        }

        Ok(Self {
            principal: principal.into(),
            batch,
        })
    }

    /// True when the request carried no privilege fields
    pub fn is_empty(&self) -> bool {
        self.batch.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ace::AceAction;

    #[test]
    fn test_parse_preserves_submission_order() {
        let params = ModifyAceParams::parse(
            "everyone",
            [
                ("privilege@jcr:read", "granted"),
                ("privilege@jcr:write", "denied"),
                ("privilege@jcr:read", "none"),
            ],
        )
        .unwrap();

        assert_eq!(params.principal, "everyone");
        assert_eq!(params.batch.len(), 3);
        assert_eq!(params.batch[0].privilege, "jcr:read");
        assert_eq!(params.batch[0].action, AceAction::Granted);
        assert_eq!(params.batch[2].privilege, "jcr:read");
        assert_eq!(params.batch[2].action, AceAction::None);
    }

    #[test]
    fn test_unrelated_fields_are_skipped() {
        let params = ModifyAceParams::parse(
            "everyone",
            [
                ("principalId", "everyone"),
                ("privilege@jcr:read", "granted"),
                ("_charset_", "utf-8"),
            ],
        )
        .unwrap();

        assert_eq!(params.batch.len(), 1);
    }

    #[test]
    fn test_action_value_is_case_sensitive() {
        let result = ModifyAceParams::parse("everyone", [("privilege@jcr:read", "Granted")]);
        assert!(matches!(
            result,
            Err(WireError::InvalidAction { privilege, value })
                if privilege == "jcr:read" && value == "Granted"
        ));
    }

    #[test]
    fn test_unknown_action_value_rejected() {
        let result = ModifyAceParams::parse("everyone", [("privilege@jcr:read", "revoked")]);
        assert!(matches!(result, Err(WireError::InvalidAction { .. })));
    }

    #[test]
    fn test_empty_privilege_name_rejected() {
        let result = ModifyAceParams::parse("everyone", [("privilege@", "granted")]);
        assert!(matches!(
            result,
            Err(WireError::MalformedField(field)) if field == "privilege@"
        ));
    }

    #[test]
    fn test_no_privilege_fields_is_empty_batch() {
        let params = ModifyAceParams::parse("everyone", [("principalId", "everyone")]).unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn test_oversized_batch_rejected() {
        let fields: Vec<(String, String)> = (0..=MAX_BATCH_MUTATIONS)
            .map(|i| (format!("privilege@jcr:p{}", i), "granted".to_string()))
            .collect();
        let refs: Vec<(&str, &str)> = fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();

        let result = ModifyAceParams::parse("everyone", refs);
        assert!(matches!(
            result,
            Err(WireError::BatchTooLarge { got, max })
                if got == MAX_BATCH_MUTATIONS + 1 && max == MAX_BATCH_MUTATIONS
        ));
    }
}
