/*!
 * ACE Merge
 * Pure set algebra for applying resolved mutation batches to a record
 */

use super::types::{Ace, AceAction};
use crate::vocabulary::PrivilegeSet;

/// Apply one resolved mutation to a record in place.
///
/// `leaves` is the already-expanded leaf set of the requested privilege.
/// The two explicit actions withdraw the opposite marking for every leaf
/// they touch, so a record never grants and denies the same privilege.
pub fn apply_one(ace: &mut Ace, leaves: &PrivilegeSet, action: AceAction) {
    match action {
        AceAction::Granted => {
            for leaf in leaves {
                ace.denied.remove(leaf);
            }
            ace.granted.extend(leaves.iter().cloned());
        }
        AceAction::Denied => {
            for leaf in leaves {
                ace.granted.remove(leaf);
            }
            ace.denied.extend(leaves.iter().cloned());
        }
        AceAction::None => {
            for leaf in leaves {
                ace.granted.remove(leaf);
                ace.denied.remove(leaf);
            }
        }
    }
}

/// Apply a resolved batch sequentially.
///
/// Later entries override earlier ones wherever their leaf sets overlap,
/// so batch order is significant.
pub fn apply_batch<'a, I>(ace: &mut Ace, batch: I)
where
    I: IntoIterator<Item = (&'a PrivilegeSet, AceAction)>,
{
    for (leaves, action) in batch {
        apply_one(ace, leaves, action);
    }
}
