/*!
 * Access Control Entries
 * Granted/denied privilege records with order-dependent batch mutation
 *
 * Each (resource, principal) pair owns at most one record. Batches are
 * resolved against the vocabulary up front, applied as a sequential fold,
 * and committed atomically per entry. Records that empty out are dropped,
 * so an absent entry and an empty one are indistinguishable to readers.
 */

pub mod audit;
pub mod manager;
pub mod merge;
pub mod traits;
pub mod types;

pub use audit::{AuditAction, AuditEvent, AuditLog, AuditSeverity, AuditStats};
pub use manager::AclManager;
pub use traits::{AceReader, AceWriter, AclSystem};
pub use types::{Ace, AceAction, AceMutation, AclStats};
