/*!
 * Vocabulary Registry
 * Catalog construction, validation, and memoized aggregate expansion
 */

use super::types::{Privilege, PrivilegeSet};
use crate::core::errors::{VocabularyError, VocabularyResult};
use log::info;
use std::collections::{HashMap, HashSet};

/// Fixed catalog of privileges and aggregate expansion rules
///
/// Built once via [`VocabularyBuilder`] and read-only afterwards. Every
/// registered name has a precomputed full leaf expansion, so `resolve`
/// never walks the aggregate graph at request time.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Canonical privilege instances by full name
    privileges: HashMap<String, Privilege>,
    /// Precomputed leaf expansion for every registered name
    expansions: HashMap<String, PrivilegeSet>,
    /// Names declared as aggregates
    aggregates: HashSet<String>,
}

impl Vocabulary {
    /// Start building a custom vocabulary
    pub fn builder() -> VocabularyBuilder {
        VocabularyBuilder::new()
    }

    /// Build the standard JCR catalog
    pub fn jcr() -> Self {
        super::jcr::catalog()
    }

    /// Resolve a privilege-or-aggregate name to its full leaf-privilege set
    ///
    /// A leaf resolves to the singleton set containing itself; an aggregate
    /// resolves to the union of its members' expansions.
    pub fn resolve(&self, name: &str) -> VocabularyResult<&PrivilegeSet> {
        self.expansions
            .get(name)
            .ok_or_else(|| VocabularyError::UnknownPrivilege(name.to_string()))
    }

    /// Get the canonical instance for a registered name
    pub fn privilege(&self, name: &str) -> VocabularyResult<&Privilege> {
        self.privileges
            .get(name)
            .ok_or_else(|| VocabularyError::UnknownPrivilege(name.to_string()))
    }

    /// Check whether a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.privileges.contains_key(name)
    }

    /// Check whether a registered name is an aggregate
    pub fn is_aggregate(&self, name: &str) -> bool {
        self.aggregates.contains(name)
    }

    /// Iterate over all registered names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.privileges.keys().map(String::as_str)
    }

    /// Number of registered privileges, aggregates included
    pub fn len(&self) -> usize {
        self.privileges.len()
    }

    /// True if no privileges are registered
    pub fn is_empty(&self) -> bool {
        self.privileges.is_empty()
    }
}

/// One privilege declaration held by the builder
#[derive(Debug, Clone)]
struct Declaration {
    name: String,
    /// `None` for a leaf, member names for an aggregate
    members: Option<Vec<String>>,
}

/// Builder validating and flattening a privilege catalog
///
/// Validation happens in `build`: duplicate names, members that were never
/// declared, empty aggregates, and membership cycles are all rejected there,
/// so a constructed [`Vocabulary`] can never fail to expand.
#[derive(Debug, Default)]
pub struct VocabularyBuilder {
    declarations: Vec<Declaration>,
}

impl VocabularyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a leaf privilege
    #[must_use]
    pub fn leaf(mut self, name: impl Into<String>) -> Self {
        self.declarations.push(Declaration {
            name: name.into(),
            members: None,
        });
        self
    }

    /// Declare an aggregate privilege expanding to the given members
    ///
    /// Members may themselves be aggregates; declaration order does not
    /// matter as long as every member is declared by `build` time.
    #[must_use]
    pub fn aggregate<I, S>(mut self, name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.declarations.push(Declaration {
            name: name.into(),
            members: Some(members.into_iter().map(Into::into).collect()),
        });
        self
    }

    /// Validate the declarations and construct the vocabulary
    pub fn build(self) -> VocabularyResult<Vocabulary> {
        let mut privileges: HashMap<String, Privilege> = HashMap::new();
        let mut member_lists: HashMap<String, Vec<String>> = HashMap::new();
        let mut aggregates: HashSet<String> = HashSet::new();

        for decl in &self.declarations {
            if privileges.contains_key(&decl.name) {
                return Err(VocabularyError::DuplicateName(decl.name.clone()));
            }
            privileges.insert(decl.name.clone(), Privilege::new(&decl.name));

            if let Some(members) = &decl.members {
                if members.is_empty() {
                    return Err(VocabularyError::EmptyAggregate(decl.name.clone()));
                }
                aggregates.insert(decl.name.clone());
                member_lists.insert(decl.name.clone(), members.clone());
            }
        }

        for (aggregate, members) in &member_lists {
            for member in members {
                if !privileges.contains_key(member) {
                    return Err(VocabularyError::UnknownMember {
                        aggregate: aggregate.clone(),
                        member: member.clone(),
                    });
                }
            }
        }

        // Flatten every name to its leaf set, detecting cycles on the way
        let mut expansions: HashMap<String, PrivilegeSet> = HashMap::new();
        let mut visiting: HashSet<String> = HashSet::new();
        for name in privileges.keys() {
            Self::expand(name, &member_lists, &privileges, &mut expansions, &mut visiting)?;
        }

        let vocabulary = Vocabulary {
            privileges,
            expansions,
            aggregates,
        };
        info!(
            "Privilege vocabulary initialized: {} privileges ({} aggregates)",
            vocabulary.len(),
            vocabulary.aggregates.len()
        );
        Ok(vocabulary)
    }

    /// Depth-first expansion memoized into `done`; `visiting` holds the
    /// DFS stack for cycle detection
    fn expand(
        name: &str,
        member_lists: &HashMap<String, Vec<String>>,
        privileges: &HashMap<String, Privilege>,
        done: &mut HashMap<String, PrivilegeSet>,
        visiting: &mut HashSet<String>,
    ) -> VocabularyResult<()> {
        if done.contains_key(name) {
            return Ok(());
        }
        if !visiting.insert(name.to_string()) {
            return Err(VocabularyError::CycleDetected(name.to_string()));
        }

        let expansion = match member_lists.get(name) {
            None => {
                // Leaf: the singleton set containing itself
                let mut set = PrivilegeSet::new();
                set.insert(privileges[name].clone());
                set
            }
            Some(members) => {
                let mut set = PrivilegeSet::new();
                for member in members {
                    Self::expand(member, member_lists, privileges, done, visiting)?;
                    set.extend(done[member].iter().cloned());
                }
                set
            }
        };

        visiting.remove(name);
        done.insert(name.to_string(), expansion);
        Ok(())
    }
}
