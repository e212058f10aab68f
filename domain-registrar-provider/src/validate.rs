//! Plan-time checks on a pending configuration revision.

use crate::error::{OwnerContactConflict, RegistrarError, Result};
use crate::expand::ContactRole;
use crate::state::{StateMap, StateValue};

/// Read access to a pending configuration change, as computed by the host.
pub trait ResourceDiff {
    /// Whether `key` differs between the prior and the proposed configuration.
    fn has_change(&self, key: &str) -> bool;

    /// Proposed value of `key`.
    fn get(&self, key: &str) -> Option<&StateValue>;
}

/// A prior/proposed pair of flat configurations.
///
/// On creation `old` is empty, so every configured key counts as changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigRevision {
    pub old: StateMap,
    pub new: StateMap,
}

impl ConfigRevision {
    pub fn new(old: StateMap, new: StateMap) -> Self {
        Self { old, new }
    }

    /// A revision for a resource that does not exist yet.
    pub fn creating(new: StateMap) -> Self {
        Self {
            old: StateMap::new(),
            new,
        }
    }
}

impl ResourceDiff for ConfigRevision {
    fn has_change(&self, key: &str) -> bool {
        self.old.get(key) != self.new.get(key)
    }

    fn get(&self, key: &str) -> Option<&StateValue> {
        self.new.get(key)
    }
}

/// Requires exactly one of `owner_contact_id` and `owner_contact` among the changed keys.
///
/// A key only counts when it changed and its new value is non-empty.
///
/// # Errors
///
/// [`RegistrarError::Configuration`] with [`OwnerContactConflict::Missing`] when neither
/// qualifies, or [`OwnerContactConflict::Both`] when both do.
pub fn validate_owner_contact(diff: &impl ResourceDiff) -> Result<()> {
    let id_key = ContactRole::Owner.id_key();
    let contact_key = ContactRole::Owner.contact_key();

    let has_id = diff.has_change(id_key)
        && diff
            .get(id_key)
            .and_then(StateValue::as_str)
            .is_some_and(|id| !id.is_empty());
    let has_contact = diff.has_change(contact_key)
        && diff
            .get(contact_key)
            .and_then(StateValue::as_map)
            .is_some_and(|contact| !contact.is_empty());

    match (has_id, has_contact) {
        (true, false) | (false, true) => Ok(()),
        (false, false) => Err(RegistrarError::Configuration(
            OwnerContactConflict::Missing,
        )),
        (true, true) => Err(RegistrarError::Configuration(OwnerContactConflict::Both)),
    }
}
