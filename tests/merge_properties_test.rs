/*!
 * Merge Property Tests
 * Property-based verification of the mutation merge invariants
 */

use acl_engine::vocabulary::jcr;
use acl_engine::{AceAction, AceMutation, AceReader, AceWriter, AclManager};
use proptest::collection::vec;
use proptest::prelude::*;

/// Every name the catalog registers, aggregates included
const CATALOG_NAMES: &[&str] = &[
    jcr::READ,
    jcr::MODIFY_PROPERTIES,
    jcr::ADD_CHILD_NODES,
    jcr::REMOVE_NODE,
    jcr::REMOVE_CHILD_NODES,
    jcr::READ_ACCESS_CONTROL,
    jcr::MODIFY_ACCESS_CONTROL,
    jcr::LOCK_MANAGEMENT,
    jcr::VERSION_MANAGEMENT,
    jcr::NODE_TYPE_MANAGEMENT,
    jcr::RETENTION_MANAGEMENT,
    jcr::LIFECYCLE_MANAGEMENT,
    jcr::WRITE,
    jcr::ALL,
];

/// Strategy for picking a registered privilege-or-aggregate name
fn privilege_name_strategy() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(CATALOG_NAMES)
}

/// Strategy for picking any action
fn action_strategy() -> impl Strategy<Value = AceAction> {
    prop_oneof![
        Just(AceAction::Granted),
        Just(AceAction::Denied),
        Just(AceAction::None),
    ]
}

/// Strategy for a single mutation
fn mutation_strategy() -> impl Strategy<Value = AceMutation> {
    (privilege_name_strategy(), action_strategy())
        .prop_map(|(name, action)| AceMutation::new(name, action))
}

/// Strategy for a mutation that can only narrow the granted set
fn restrictive_mutation_strategy() -> impl Strategy<Value = AceMutation> {
    (
        privilege_name_strategy(),
        prop_oneof![Just(AceAction::Denied), Just(AceAction::None)],
    )
        .prop_map(|(name, action)| AceMutation::new(name, action))
}

/// Strategy for an ordered batch
fn batch_strategy() -> impl Strategy<Value = Vec<AceMutation>> {
    vec(mutation_strategy(), 0..8)
}

/// Strategy for a sequence of batches applied one after another
fn history_strategy() -> impl Strategy<Value = Vec<Vec<AceMutation>>> {
    vec(batch_strategy(), 0..6)
}

proptest! {
    /// granted and denied stay disjoint after any mutation history, and
    /// only leaf privileges are ever stored
    #[test]
    fn test_sets_stay_disjoint_and_leaf_only(history in history_strategy()) {
        let manager = AclManager::jcr();

        for batch in &history {
            manager.apply("/content", "everyone", batch).unwrap();
            let ace = manager.get_ace("/content", "everyone");
            prop_assert!(ace.is_consistent());
            for privilege in ace.granted.iter().chain(ace.denied.iter()) {
                prop_assert!(!manager.vocabulary().is_aggregate(privilege.name()));
            }
        }
    }

    /// A batch of only DENY/NONE actions never widens the granted set
    #[test]
    fn test_deny_and_none_never_widen_grants(
        setup in history_strategy(),
        restriction in vec(restrictive_mutation_strategy(), 1..8),
    ) {
        let manager = AclManager::jcr();
        for batch in &setup {
            manager.apply("/content", "everyone", batch).unwrap();
        }
        let before = manager.get_ace("/content", "everyone");

        manager.apply("/content", "everyone", &restriction).unwrap();
        let after = manager.get_ace("/content", "everyone");

        prop_assert!(after.granted.is_subset(&before.granted));
    }

    /// Applying the same NONE twice is the same as applying it once
    #[test]
    fn test_none_is_idempotent(
        setup in history_strategy(),
        name in privilege_name_strategy(),
    ) {
        let manager = AclManager::jcr();
        for batch in &setup {
            manager.apply("/content", "everyone", batch).unwrap();
        }

        manager.apply("/content", "everyone", &[AceMutation::clear(name)]).unwrap();
        let once = manager.get_ace("/content", "everyone");

        manager.apply("/content", "everyone", &[AceMutation::clear(name)]).unwrap();
        let twice = manager.get_ace("/content", "everyone");

        prop_assert_eq!(once, twice);
    }

    /// After granting X, every leaf of X is granted and none is denied
    #[test]
    fn test_grant_round_trip(
        setup in history_strategy(),
        name in privilege_name_strategy(),
    ) {
        let manager = AclManager::jcr();
        for batch in &setup {
            manager.apply("/content", "everyone", batch).unwrap();
        }

        manager.apply("/content", "everyone", &[AceMutation::grant(name)]).unwrap();
        let ace = manager.get_ace("/content", "everyone");

        let leaves = manager.vocabulary().resolve(name).unwrap().clone();
        for leaf in &leaves {
            prop_assert!(ace.granted.contains(leaf));
            prop_assert!(!ace.denied.contains(leaf));
        }
    }

    /// One batched call equals the same mutations applied one call each
    #[test]
    fn test_batch_equals_sequential_folds(batch in batch_strategy()) {
        let batched = AclManager::jcr();
        let sequential = AclManager::jcr();

        batched.apply("/content", "everyone", &batch).unwrap();
        for mutation in &batch {
            sequential
                .apply("/content", "everyone", std::slice::from_ref(mutation))
                .unwrap();
        }

        prop_assert_eq!(
            batched.get_ace("/content", "everyone"),
            sequential.get_ace("/content", "everyone")
        );
    }

    /// An unknown name anywhere in the batch leaves the entry untouched,
    /// even when every earlier mutation in the batch was valid
    #[test]
    fn test_unknown_name_aborts_without_effect(
        setup in history_strategy(),
        valid_prefix in batch_strategy(),
    ) {
        let manager = AclManager::jcr();
        for batch in &setup {
            manager.apply("/content", "everyone", batch).unwrap();
        }
        let before = manager.resource_acl("/content");

        let mut poisoned = valid_prefix;
        poisoned.push(AceMutation::grant("jcr:levitate"));
        prop_assert!(manager.apply("/content", "everyone", &poisoned).is_err());

        prop_assert_eq!(before, manager.resource_acl("/content"));
    }

    /// Clearing the universal aggregate always empties the entry out
    #[test]
    fn test_clearing_all_empties_the_entry(history in history_strategy()) {
        let manager = AclManager::jcr();
        for batch in &history {
            manager.apply("/content", "everyone", batch).unwrap();
        }

        manager
            .apply("/content", "everyone", &[AceMutation::clear(jcr::ALL)])
            .unwrap();

        prop_assert!(!manager.has_ace("/content", "everyone"));
        prop_assert!(manager.get_ace("/content", "everyone").is_empty());
    }
}
