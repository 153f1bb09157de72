/*!
 * ACL Engine Library
 * Access control entry storage, merge semantics, and wire encoding
 */

pub mod ace;
pub mod core;
pub mod monitoring;
pub mod vocabulary;
pub mod wire;

// Re-exports
pub use ace::{
    Ace, AceAction, AceMutation, AceReader, AceWriter, AclManager, AclStats, AclSystem, AuditLog,
};
pub use crate::core::errors::{
    AclError, AclResult, EngineError, EngineResult, VocabularyError, VocabularyResult, WireError,
    WireResult,
};
pub use crate::core::types::{AceKey, PrincipalId, ResourceId};
pub use monitoring::init_tracing;
pub use vocabulary::{Privilege, PrivilegeSet, Vocabulary, VocabularyBuilder};
pub use wire::{modify_ace, read_acl, AceJson, AclJson, ModifyAceParams};
