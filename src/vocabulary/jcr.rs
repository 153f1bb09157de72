/*!
 * Standard JCR Privilege Catalog
 * The JCR 2.0 privilege names the content repository registers at startup
 */

use super::registry::Vocabulary;

/// Read node content
pub const READ: &str = "jcr:read";
/// Create and change properties
pub const MODIFY_PROPERTIES: &str = "jcr:modifyProperties";
/// Create child nodes
pub const ADD_CHILD_NODES: &str = "jcr:addChildNodes";
/// Remove the node itself
pub const REMOVE_NODE: &str = "jcr:removeNode";
/// Remove child nodes
pub const REMOVE_CHILD_NODES: &str = "jcr:removeChildNodes";
/// Read the node's access control
pub const READ_ACCESS_CONTROL: &str = "jcr:readAccessControl";
/// Change the node's access control
pub const MODIFY_ACCESS_CONTROL: &str = "jcr:modifyAccessControl";
/// Lock and unlock the node
pub const LOCK_MANAGEMENT: &str = "jcr:lockManagement";
/// Version operations
pub const VERSION_MANAGEMENT: &str = "jcr:versionManagement";
/// Change node types
pub const NODE_TYPE_MANAGEMENT: &str = "jcr:nodeTypeManagement";
/// Retention policy operations
pub const RETENTION_MANAGEMENT: &str = "jcr:retentionManagement";
/// Lifecycle operations
pub const LIFECYCLE_MANAGEMENT: &str = "jcr:lifecycleManagement";

/// Aggregate: all write-type privileges
pub const WRITE: &str = "jcr:write";
/// Aggregate: every privilege in the catalog
pub const ALL: &str = "jcr:all";

/// Build the standard JCR catalog
///
/// `jcr:write` expands to the four content-write leaves; `jcr:all` expands to
/// everything, `jcr:write` included, so its leaf set is the full twelve.
pub fn catalog() -> Vocabulary {
    Vocabulary::builder()
        .leaf(READ)
        .leaf(MODIFY_PROPERTIES)
        .leaf(ADD_CHILD_NODES)
        .leaf(REMOVE_NODE)
        .leaf(REMOVE_CHILD_NODES)
        .leaf(READ_ACCESS_CONTROL)
        .leaf(MODIFY_ACCESS_CONTROL)
        .leaf(LOCK_MANAGEMENT)
        .leaf(VERSION_MANAGEMENT)
        .leaf(NODE_TYPE_MANAGEMENT)
        .leaf(RETENTION_MANAGEMENT)
        .leaf(LIFECYCLE_MANAGEMENT)
        .aggregate(
            WRITE,
            [
                MODIFY_PROPERTIES,
                ADD_CHILD_NODES,
                REMOVE_NODE,
                REMOVE_CHILD_NODES,
            ],
        )
        .aggregate(
            ALL,
            [
                READ,
                WRITE,
                READ_ACCESS_CONTROL,
                MODIFY_ACCESS_CONTROL,
                LOCK_MANAGEMENT,
                VERSION_MANAGEMENT,
                NODE_TYPE_MANAGEMENT,
                RETENTION_MANAGEMENT,
                LIFECYCLE_MANAGEMENT,
            ],
        )
        .build()
        .expect("standard JCR catalog is valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::Privilege;

    #[test]
    fn test_catalog_builds() {
        let vocab = catalog();
        assert_eq!(vocab.len(), 14);
        assert!(vocab.is_aggregate(WRITE));
        assert!(vocab.is_aggregate(ALL));
        assert!(!vocab.is_aggregate(READ));
    }

    #[test]
    fn test_write_expansion() {
        let vocab = catalog();
        let write = vocab.resolve(WRITE).unwrap();
        assert_eq!(write.len(), 4);
        for name in [
            MODIFY_PROPERTIES,
            ADD_CHILD_NODES,
            REMOVE_NODE,
            REMOVE_CHILD_NODES,
        ] {
            assert!(write.contains(&Privilege::new(name)), "missing {}", name);
        }
    }

    #[test]
    fn test_all_expands_to_every_leaf() {
        let vocab = catalog();
        let all = vocab.resolve(ALL).unwrap();
        // 12 leaves; the two aggregates flatten away
        assert_eq!(all.len(), 12);
        assert!(all.contains(&Privilege::new(READ)));
        assert!(all.contains(&Privilege::new(REMOVE_CHILD_NODES)));
        assert!(!all.contains(&Privilege::new(WRITE)));
        assert!(!all.contains(&Privilege::new(ALL)));
    }

    #[test]
    fn test_read_display_name() {
        let vocab = catalog();
        let read = vocab.privilege(READ).unwrap();
        assert_eq!(read.display_name(), "Read");
    }
}
