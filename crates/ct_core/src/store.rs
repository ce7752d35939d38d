use std::collections::HashMap;

use crate::hash::EmailIndexHasher;
use crate::model::Contact;

// `index` is last-write-wins on email, so same-email contacts all stay in
// `sequence` while only the latest is indexed.
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    sequence: Vec<Contact>,
    index: HashMap<String, Contact, EmailIndexHasher>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_contacts(contacts: impl IntoIterator<Item = Contact>) -> Self {
        let mut store = Self::new();
        for contact in contacts {
            store.append(contact);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn index_len(&self) -> usize {
        self.index.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.sequence.iter()
    }

    pub fn append(&mut self, contact: Contact) {
        self.index.insert(contact.email.clone(), contact.clone());
        self.sequence.push(contact);
    }

    // Drops index[email] with the match, even if it pointed at another same-email record.
    pub fn delete(&mut self, name: &str, email: &str) -> bool {
        let Some(position) = self
            .sequence
            .iter()
            .position(|contact| contact.matches(name, email))
        else {
            return false;
        };
        self.sequence.remove(position);
        self.index.remove(email);
        true
    }

    pub fn lookup_by_email(&self, email: &str) -> Option<&Contact> {
        self.index.get(email)
    }

    // Walks the index, so order follows the hash table. `query` must be lowercase.
    pub fn search_substring(&self, query: &str) -> Vec<Contact> {
        self.index
            .values()
            .filter(|contact| {
                contact.name.to_lowercase().contains(query)
                    || contact.email.to_lowercase().contains(query)
            })
            .cloned()
            .collect()
    }

    pub fn to_ordered_list(&self) -> Vec<Contact> {
        self.sequence.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn abc() -> ContactStore {
        ContactStore::from_contacts([
            Contact::new("Ann", "ann@e.com"),
            Contact::new("Bob", "bob@e.com"),
            Contact::new("Cid", "cid@e.com"),
        ])
    }

    fn names(contacts: &[Contact]) -> Vec<&str> {
        contacts.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn t_store_001_append_keeps_insertion_order() {
        let store = abc();
        assert_eq!(names(&store.to_ordered_list()), vec!["Ann", "Bob", "Cid"]);
        assert_eq!(store.len(), 3);
        assert_eq!(store.index_len(), 3);
        assert_eq!(store.iter().next().map(|c| c.name.as_str()), Some("Ann"));
        assert!(!store.is_empty());
    }

    #[test]
    fn t_store_002_delete_first_structural_match_only() {
        let mut store = abc();
        assert!(store.delete("Bob", "bob@e.com"));
        assert_eq!(names(&store.to_ordered_list()), vec!["Ann", "Cid"]);
        assert!(store.lookup_by_email("bob@e.com").is_none());
        assert!(!store.delete("Bob", "bob@e.com"));
    }

    #[test]
    fn t_store_003_delete_requires_both_fields_to_match() {
        let mut store = abc();
        assert!(!store.delete("Bob", "ann@e.com"));
        assert!(!store.delete("bob", "bob@e.com"));
        assert_eq!(store.len(), 3);
        assert!(store.lookup_by_email("ann@e.com").is_some());
        assert!(!ContactStore::new().delete("Ann", "ann@e.com"));
    }

    #[test]
    fn t_store_004_lookup_is_exact_and_case_sensitive() {
        let store = abc();
        assert_eq!(
            store.lookup_by_email("cid@e.com"),
            Some(&Contact::new("Cid", "cid@e.com"))
        );
        assert!(store.lookup_by_email("CID@e.com").is_none());
        assert!(store.lookup_by_email("cid").is_none());
    }

    #[test]
    fn t_store_005_duplicate_email_diverges_index_and_sequence() {
        let mut store = ContactStore::new();
        store.append(Contact::new("First", "dup@e.com"));
        store.append(Contact::new("Second", "dup@e.com"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.index_len(), 1);
        assert_eq!(
            store.lookup_by_email("dup@e.com").map(|c| c.name.as_str()),
            Some("Second")
        );

        // Deleting the first record drops the index entry that belonged to the second.
        assert!(store.delete("First", "dup@e.com"));
        assert_eq!(names(&store.to_ordered_list()), vec!["Second"]);
        assert!(store.lookup_by_email("dup@e.com").is_none());
    }

    #[test]
    fn t_store_006_search_substring_lowercases_fields() {
        let mut store = abc();
        store.append(Contact::new("Bobby TABLES", "x@E.com"));

        let mut hits = names(&store.search_substring("bob"))
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();
        hits.sort();
        assert_eq!(hits, vec!["Bob", "Bobby TABLES"]);

        assert_eq!(store.search_substring("x@e.com").len(), 1);
        assert!(store.search_substring("BOB").is_empty());
        assert_eq!(store.search_substring("").len(), 4);
    }

    #[test]
    fn t_store_007_search_walks_index_not_sequence() {
        let mut store = ContactStore::new();
        store.append(Contact::new("Old", "same@e.com"));
        store.append(Contact::new("New", "same@e.com"));
        let hits = store.search_substring("same");
        assert_eq!(hits, vec![Contact::new("New", "same@e.com")]);
    }

    proptest! {
        #[test]
        fn t_store_101_list_follows_append_order(
            pairs in prop::collection::vec(("[a-z]{1,6}", "[a-z]{1,4}@e\\.com"), 0..24)
        ) {
            let contacts = pairs
                .iter()
                .map(|(n, e)| Contact::new(n.clone(), e.clone()))
                .collect::<Vec<_>>();
            let store = ContactStore::from_contacts(contacts.clone());
            prop_assert_eq!(store.to_ordered_list(), contacts);
        }

        #[test]
        fn t_store_102_lookup_returns_latest_append(
            pairs in prop::collection::vec(("[a-z]{1,6}", "[a-c]@e\\.com"), 1..24)
        ) {
            let contacts = pairs
                .iter()
                .map(|(n, e)| Contact::new(n.clone(), e.clone()))
                .collect::<Vec<_>>();
            let store = ContactStore::from_contacts(contacts.clone());
            for email in ["a@e.com", "b@e.com", "c@e.com"] {
                let latest = contacts.iter().rev().find(|c| c.email == email);
                prop_assert_eq!(store.lookup_by_email(email), latest);
            }
        }

        #[test]
        fn t_store_103_delete_removes_at_most_one(
            pairs in prop::collection::vec(("[ab]", "[ab]@e\\.com"), 0..16)
        ) {
            let contacts = pairs
                .iter()
                .map(|(n, e)| Contact::new(n.clone(), e.clone()))
                .collect::<Vec<_>>();
            let mut store = ContactStore::from_contacts(contacts.clone());
            let before = store.len();
            let removed = store.delete("a", "a@e.com");
            prop_assert_eq!(removed, contacts.iter().any(|c| c.matches("a", "a@e.com")));
            prop_assert_eq!(store.len(), before - usize::from(removed));
        }
    }
}
