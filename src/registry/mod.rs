// Worldon - Mastodon-compatible data-model bindings
// Copyright (C) 2026 Worldon Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Interning registry for entity instances
//!
//! An explicit keyed cache owned by whichever layer performs ingestion: a
//! model instance with the same natural key is reused rather than recreated.
//! Instances live as long as the registry does; there is no eviction.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use tracing::trace;

use crate::models::Entity;

/// Keyed cache mapping natural key to the canonical instance.
pub struct Registry<T: Entity> {
    entries: HashMap<T::Key, Arc<T>>,
}

impl<T: Entity> Registry<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Intern an instance, reusing the stored one when the natural key is
    /// already registered.
    pub fn intern(&mut self, entity: T) -> Arc<T> {
        match self.entries.entry(entity.natural_key()) {
            Entry::Occupied(existing) => Arc::clone(existing.get()),
            Entry::Vacant(slot) => {
                trace!(entity = T::SLUG, "interning new instance");
                Arc::clone(slot.insert(Arc::new(entity)))
            }
        }
    }

    /// Look an instance up by natural key.
    pub fn get(&self, key: &T::Key) -> Option<Arc<T>> {
        self.entries.get(key).map(Arc::clone)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Entity> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Account;
    use serde_json::json;

    fn account(acct: &str, display_name: &str) -> Account {
        Account::from_json(&json!({
            "acct": acct,
            "display_name": display_name,
            "avatar": "https://example.com/system/accounts/avatars/1/2/3.png",
            "url": format!("https://example.com/@{acct}")
        }))
        .unwrap()
    }

    #[test]
    fn same_natural_key_yields_the_same_instance() {
        let mut registry = Registry::new();
        let first = registry.intern(account("alice@example.com", "Alice"));
        let second = registry.intern(account("alice@example.com", "Alice again"));

        assert!(Arc::ptr_eq(&first, &second));
        // The first registration wins; the duplicate is dropped.
        assert_eq!(second.display_name.as_deref(), Some("Alice"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn distinct_keys_stay_distinct() {
        let mut registry = Registry::new();
        let alice = registry.intern(account("alice@example.com", "Alice"));
        let bob = registry.intern(account("bob@example.com", "Bob"));

        assert!(!Arc::ptr_eq(&alice, &bob));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn lookup_by_natural_key() {
        let mut registry = Registry::new();
        registry.intern(account("alice@example.com", "Alice"));

        let found = registry.get(&"alice@example.com".to_owned()).unwrap();
        assert_eq!(found.acct, "alice@example.com");
        assert!(registry.get(&"carol@example.com".to_owned()).is_none());
    }
}
