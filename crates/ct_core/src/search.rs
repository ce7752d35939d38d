use crate::model::Contact;
use crate::store::ContactStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    ExactEmail(Contact),
    Substring(Vec<Contact>),
}

impl SearchOutcome {
    pub fn into_contacts(self) -> Vec<Contact> {
        match self {
            SearchOutcome::ExactEmail(contact) => vec![contact],
            SearchOutcome::Substring(contacts) => contacts,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, SearchOutcome::ExactEmail(_))
    }
}

pub fn search_contacts(store: &ContactStore, query: &str) -> SearchOutcome {
    if let Some(contact) = store.lookup_by_email(query) {
        return SearchOutcome::ExactEmail(contact.clone());
    }
    SearchOutcome::Substring(store.search_substring(query))
}
