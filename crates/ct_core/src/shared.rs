use std::sync::Arc;

use parking_lot::Mutex;

use crate::history::{DeleteOutcome, HistoryController};
use crate::model::Contact;
use crate::search::SearchOutcome;
use crate::store::ContactStore;

// Store and both stacks sit behind one lock; every method takes it exactly once.
#[derive(Clone, Debug, Default)]
pub struct SharedContactBook {
    inner: Arc<Mutex<HistoryController>>,
}

impl SharedContactBook {
    pub fn new(controller: HistoryController) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    pub fn with_store(store: ContactStore) -> Self {
        Self::new(HistoryController::with_store(store))
    }

    pub fn list(&self) -> Vec<Contact> {
        self.inner.lock().list()
    }

    pub fn add(&self, name: &str, email: &str) -> bool {
        self.inner.lock().add(name, email)
    }

    pub fn delete(&self, name: &str, email: &str) -> DeleteOutcome {
        self.inner.lock().delete(name, email)
    }

    pub fn search(&self, query: &str) -> SearchOutcome {
        self.inner.lock().search(query)
    }

    pub fn lookup_by_email(&self, email: &str) -> Option<Contact> {
        self.inner.lock().lookup_by_email(email).cloned()
    }

    pub fn undo(&self) -> bool {
        self.inner.lock().undo()
    }

    pub fn redo(&self) -> bool {
        self.inner.lock().redo()
    }

    pub fn undo_depth(&self) -> usize {
        self.inner.lock().undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.inner.lock().redo_depth()
    }

    pub fn read<R>(&self, f: impl FnOnce(&HistoryController) -> R) -> R {
        f(&self.inner.lock())
    }
}
