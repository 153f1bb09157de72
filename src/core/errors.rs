/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Vocabulary operation result
///
/// # Must Use
/// Resolution failures must be handled so a bad name never half-applies a batch
#[must_use = "vocabulary operations can fail and must be handled"]
pub type VocabularyResult<T> = Result<T, VocabularyError>;

/// ACL operation result
///
/// # Must Use
/// Mutation failures must be handled to preserve all-or-nothing batch semantics
#[must_use = "acl operations can fail and must be handled"]
pub type AclResult<T> = Result<T, AclError>;

/// Wire parsing result
///
/// # Must Use
/// Parse failures must reject the request before the engine is invoked
#[must_use = "wire parsing can fail and must be handled"]
pub type WireResult<T> = Result<T, WireError>;

/// Privilege vocabulary errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Diagnostic)]
#[serde(rename_all = "snake_case", tag = "error", content = "details")]
pub enum VocabularyError {
    #[error("Unknown privilege: {0}")]
    #[diagnostic(
        code(vocabulary::unknown_privilege),
        help("The privilege name is not registered in the vocabulary. Check spelling and namespace prefix.")
    )]
    UnknownPrivilege(String),

    #[error("Privilege declared more than once: {0}")]
    #[diagnostic(
        code(vocabulary::duplicate_name),
        help("Each privilege name may be registered exactly once.")
    )]
    DuplicateName(String),

    #[error("Aggregate {aggregate} references undeclared privilege {member}")]
    #[diagnostic(
        code(vocabulary::unknown_member),
        help("Declare every member before the aggregate that references it.")
    )]
    UnknownMember { aggregate: String, member: String },

    #[error("Aggregate has no members: {0}")]
    #[diagnostic(
        code(vocabulary::empty_aggregate),
        help("An aggregate must expand to at least one privilege.")
    )]
    EmptyAggregate(String),

    #[error("Aggregate cycle through {0}")]
    #[diagnostic(
        code(vocabulary::cycle_detected),
        help("Aggregate expansion must terminate. Remove the circular membership.")
    )]
    CycleDetected(String),
}

/// ACL store and merge engine errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Diagnostic)]
#[serde(rename_all = "snake_case", tag = "error", content = "details")]
pub enum AclError {
    #[error("Vocabulary error: {0}")]
    #[diagnostic(transparent)]
    Vocabulary(#[from] VocabularyError),

    #[error("Invariant violation on {key}: {detail}")]
    #[diagnostic(
        code(acl::invariant_violation),
        help("granted and denied overlapped, which indicates corrupted state. Do not retry.")
    )]
    InvariantViolation { key: String, detail: String },
}

/// Wire-level request parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Diagnostic)]
#[serde(rename_all = "snake_case", tag = "error", content = "details")]
pub enum WireError {
    #[error("Invalid action {value:?} for privilege {privilege}")]
    #[diagnostic(
        code(wire::invalid_action),
        help("Action values are exactly \"granted\", \"denied\", or \"none\".")
    )]
    InvalidAction { privilege: String, value: String },

    #[error("Malformed privilege field: {0}")]
    #[diagnostic(
        code(wire::malformed_field),
        help("Privilege fields take the form privilege@<name> with a non-empty name.")
    )]
    MalformedField(String),

    #[error("Batch of {got} mutations exceeds limit of {max}")]
    #[diagnostic(
        code(wire::batch_too_large),
        help("Split the request into smaller batches.")
    )]
    BatchTooLarge { got: usize, max: usize },
}

/// Unified engine error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum EngineError {
    #[error("ACL error: {0}")]
    #[diagnostic(transparent)]
    Acl(#[from] AclError),

    #[error("Wire error: {0}")]
    #[diagnostic(transparent)]
    Wire(#[from] WireError),
}

impl From<VocabularyError> for EngineError {
    fn from(err: VocabularyError) -> Self {
        EngineError::Acl(AclError::Vocabulary(err))
    }
}

/// Result type for engine operations
///
/// # Must Use
/// Engine operations can fail and must be handled
#[must_use = "engine operations can fail and must be handled"]
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_error_serialization() {
        let error = VocabularyError::UnknownPrivilege("jcr:fly".to_string());
        let json = serde_json::to_string(&error).unwrap();
        let deserialized: VocabularyError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, deserialized);
    }

    #[test]
    fn test_acl_error_from_vocabulary() {
        let error: AclError = VocabularyError::UnknownPrivilege("jcr:fly".to_string()).into();
        assert!(matches!(error, AclError::Vocabulary(_)));
    }

    #[test]
    fn test_engine_error_from_vocabulary() {
        let error: EngineError = VocabularyError::UnknownPrivilege("jcr:fly".to_string()).into();
        assert!(matches!(
            error,
            EngineError::Acl(AclError::Vocabulary(VocabularyError::UnknownPrivilege(_)))
        ));
    }

    #[test]
    fn test_wire_error_display() {
        let error = WireError::InvalidAction {
            privilege: "jcr:read".to_string(),
            value: "maybe".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid action \"maybe\" for privilege jcr:read"
        );
    }
}
