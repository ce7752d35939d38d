use tracing::debug;

use crate::model::Contact;
use crate::search::{search_contacts, SearchOutcome};
use crate::stack::OperationStack;
use crate::store::ContactStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    Add,
    Delete,
}

// Undo and redo move a record between stacks unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OperationRecord {
    Add(Contact),
    Delete(Contact),
}

impl OperationRecord {
    pub fn kind(&self) -> OperationKind {
        match self {
            OperationRecord::Add(_) => OperationKind::Add,
            OperationRecord::Delete(_) => OperationKind::Delete,
        }
    }

    pub fn contact(&self) -> &Contact {
        match self {
            OperationRecord::Add(contact) | OperationRecord::Delete(contact) => contact,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Ignored,
    NotFound,
    Removed,
}

impl DeleteOutcome {
    pub fn recorded(self) -> bool {
        !matches!(self, DeleteOutcome::Ignored)
    }

    pub fn removed(self) -> bool {
        matches!(self, DeleteOutcome::Removed)
    }
}

#[derive(Debug, Clone, Default)]
pub struct HistoryController {
    store: ContactStore,
    undo_stack: OperationStack<OperationRecord>,
    redo_stack: OperationStack<OperationRecord>,
}

impl HistoryController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: ContactStore) -> Self {
        Self {
            store,
            undo_stack: OperationStack::new(),
            redo_stack: OperationStack::new(),
        }
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn list(&self) -> Vec<Contact> {
        self.store.to_ordered_list()
    }

    pub fn lookup_by_email(&self, email: &str) -> Option<&Contact> {
        self.store.lookup_by_email(email)
    }

    pub fn search(&self, query: &str) -> SearchOutcome {
        search_contacts(&self.store, query)
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn peek_undo(&self) -> Option<&OperationRecord> {
        self.undo_stack.peek()
    }

    pub fn peek_redo(&self) -> Option<&OperationRecord> {
        self.redo_stack.peek()
    }

    pub fn undo_history(&self) -> impl Iterator<Item = &OperationRecord> {
        self.undo_stack.iter()
    }

    pub fn redo_history(&self) -> impl Iterator<Item = &OperationRecord> {
        self.redo_stack.iter()
    }

    pub fn add(&mut self, name: &str, email: &str) -> bool {
        let contact = match Contact::validated(name, email) {
            Ok(contact) => contact,
            Err(err) => {
                debug!(%err, "add dropped");
                return false;
            }
        };
        debug!(name = %contact.name, email = %contact.email, "add");
        self.store.append(contact.clone());
        self.undo_stack.push(OperationRecord::Add(contact));
        self.redo_stack.clear();
        true
    }

    // The undo record goes in before the store is touched, so a delete that
    // matches nothing is still recorded.
    pub fn delete(&mut self, name: &str, email: &str) -> DeleteOutcome {
        let contact = match Contact::validated(name, email) {
            Ok(contact) => contact,
            Err(err) => {
                debug!(%err, "delete dropped");
                return DeleteOutcome::Ignored;
            }
        };
        self.undo_stack.push(OperationRecord::Delete(contact));
        let removed = self.store.delete(name, email);
        self.redo_stack.clear();
        debug!(name, email, removed, "delete");
        if removed {
            DeleteOutcome::Removed
        } else {
            DeleteOutcome::NotFound
        }
    }

    pub fn undo(&mut self) -> bool {
        let Some(op) = self.undo_stack.pop() else {
            return false;
        };
        apply_op(&mut self.store, &op, false);
        debug!(kind = ?op.kind(), email = %op.contact().email, "undo");
        self.redo_stack.push(op);
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(op) = self.redo_stack.pop() else {
            return false;
        };
        apply_op(&mut self.store, &op, true);
        debug!(kind = ?op.kind(), email = %op.contact().email, "redo");
        self.undo_stack.push(op);
        true
    }
}

fn apply_op(store: &mut ContactStore, op: &OperationRecord, forward: bool) {
    match (op, forward) {
        (OperationRecord::Add(contact), true) | (OperationRecord::Delete(contact), false) => {
            store.append(contact.clone());
        }
        (OperationRecord::Add(contact), false) | (OperationRecord::Delete(contact), true) => {
            store.delete(&contact.name, &contact.email);
        }
    }
}
