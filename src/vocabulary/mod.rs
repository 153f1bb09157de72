/*!
 * Privilege Vocabulary Module
 * Fixed catalog of named privileges and aggregate privileges with expansion rules
 *
 * The vocabulary is built once at startup and read-only afterwards. Aggregate
 * membership forms a small directed graph; the builder rejects cycles and
 * flattens every name to its full leaf expansion, so `resolve` is a lookup.
 *
 * ## Usage
 * ```ignore
 * use acl_engine::vocabulary::Vocabulary;
 *
 * let vocab = Vocabulary::jcr();
 * let leaves = vocab.resolve("jcr:write")?;
 * assert!(leaves.iter().any(|p| p.name() == "jcr:addChildNodes"));
 * ```
 */

pub mod jcr;
pub mod registry;
pub mod types;

// Re-export commonly used items
pub use registry::{Vocabulary, VocabularyBuilder};
pub use types::{Privilege, PrivilegeSet};
