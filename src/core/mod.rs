/*!
 * Core Module
 * Fundamental engine types, error taxonomy, and shared infrastructure
 */

pub mod errors;
pub mod limits;
pub mod shard_manager;
pub mod types;

// Re-export for convenience
pub use errors::*;
pub use shard_manager::{ShardManager, WorkloadProfile};
pub use types::*;
