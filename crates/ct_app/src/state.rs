use std::path::PathBuf;

use ct_core::hash::{simple_hash, DEFAULT_TABLE_SIZE};
use ct_core::history::{DeleteOutcome, OperationRecord};
use ct_core::model::Contact;
use ct_core::seed::sample_store;
use ct_core::shared::SharedContactBook;
use ct_core::store::ContactStore;

use crate::config::AppConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Contacts,
    History,
}

impl Tab {
    pub fn all() -> [(Tab, &'static str); 2] {
        [(Tab::Contacts, "Contacts"), (Tab::History, "History")]
    }
}

pub struct AppState {
    pub book: SharedContactBook,
    pub config: AppConfig,
    pub config_path: Option<PathBuf>,

    pub edit_name: String,
    pub edit_email: String,
    pub edit_title: String,
    pub status: String,
    pub active_tab: Tab,

    query: String,
    search_performed: bool,
    visible_cache: Vec<Contact>,
    visible_cache_dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let store = if config.seed_samples {
            sample_store()
        } else {
            ContactStore::new()
        };
        Self::with_book(SharedContactBook::with_store(store), config)
    }

    pub fn with_book(book: SharedContactBook, config: AppConfig) -> Self {
        let edit_title = config.title.clone();
        Self {
            book,
            config,
            config_path: None,
            edit_name: String::new(),
            edit_email: String::new(),
            edit_title,
            status: String::new(),
            active_tab: Tab::Contacts,
            query: String::new(),
            search_performed: false,
            visible_cache: Vec::new(),
            visible_cache_dirty: true,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn search_performed(&self) -> bool {
        self.search_performed
    }

    pub fn set_query(&mut self, query: &str) {
        self.query.clear();
        self.query.push_str(query);
        self.search_performed = false;
        self.invalidate_visible_cache();
    }

    pub fn run_search(&mut self) {
        self.search_performed = true;
        self.invalidate_visible_cache();
    }

    pub fn clear_search(&mut self) {
        self.query.clear();
        self.search_performed = false;
        self.invalidate_visible_cache();
    }

    pub fn all_contacts(&self) -> Vec<Contact> {
        self.book.list()
    }

    // Idle empty query lists everything; an explicit search with no query lists nothing.
    pub fn visible_contacts(&mut self) -> &[Contact] {
        self.ensure_visible_cache();
        &self.visible_cache
    }

    pub fn add_from_editor(&mut self) -> bool {
        let added = self.book.add(&self.edit_name, &self.edit_email);
        if added {
            self.status = format!("Added {} <{}>", self.edit_name, self.edit_email);
            self.edit_name.clear();
            self.edit_email.clear();
            self.invalidate_visible_cache();
        }
        added
    }

    pub fn delete(&mut self, name: &str, email: &str) -> DeleteOutcome {
        let outcome = self.book.delete(name, email);
        match outcome {
            DeleteOutcome::Removed => self.status = format!("Deleted {name} <{email}>"),
            DeleteOutcome::NotFound => self.status = format!("No contact {name} <{email}>"),
            DeleteOutcome::Ignored => return outcome,
        }
        self.invalidate_visible_cache();
        outcome
    }

    pub fn undo(&mut self) {
        if self.book.undo() {
            self.status = "Undo".to_string();
            self.invalidate_visible_cache();
        }
    }

    pub fn redo(&mut self) {
        if self.book.redo() {
            self.status = "Redo".to_string();
            self.invalidate_visible_cache();
        }
    }

    pub fn undo_depth(&self) -> usize {
        self.book.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.book.redo_depth()
    }

    // undo stack then redo stack, each top first
    pub fn history_lines(&self) -> (Vec<String>, Vec<String>) {
        self.book.read(|history| {
            (
                history.undo_history().map(describe_record).collect(),
                history.redo_history().map(describe_record).collect(),
            )
        })
    }

    fn invalidate_visible_cache(&mut self) {
        self.visible_cache_dirty = true;
    }

    fn ensure_visible_cache(&mut self) {
        if !self.visible_cache_dirty {
            return;
        }
        // The request layer lowercases before dispatch, exact path included.
        let query = self.query.to_lowercase();
        self.visible_cache = if !query.is_empty() {
            self.book.search(&query).into_contacts()
        } else if self.search_performed {
            Vec::new()
        } else {
            self.book.list()
        };
        self.visible_cache_dirty = false;
    }
}

pub fn describe_record(record: &OperationRecord) -> String {
    let contact = record.contact();
    format!(
        "{:?} {} <{}> #{}",
        record.kind(),
        contact.name,
        contact.email,
        simple_hash(&contact.email, DEFAULT_TABLE_SIZE)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_state() -> AppState {
        AppState::with_config(AppConfig {
            seed_samples: false,
            ..AppConfig::default()
        })
    }

    #[test]
    fn t_state_001_seeded_by_default() {
        let mut state = AppState::new();
        assert_eq!(state.visible_contacts().len(), 10);
        assert_eq!(state.undo_depth(), 0);
    }

    #[test]
    fn t_state_002_add_from_editor_clears_fields_on_success() {
        let mut state = empty_state();
        state.edit_name = "Ann".to_string();
        state.edit_email = String::new();
        assert!(!state.add_from_editor());
        assert_eq!(state.edit_name, "Ann");

        state.edit_email = "ann@e.com".to_string();
        assert!(state.add_from_editor());
        assert!(state.edit_name.is_empty());
        assert!(state.edit_email.is_empty());
        assert_eq!(state.visible_contacts(), &[Contact::new("Ann", "ann@e.com")]);
    }

    #[test]
    fn t_state_003_query_is_lowercased_before_search() {
        let mut state = AppState::new();
        state.set_query("JOHN");
        let mut hits = state
            .visible_contacts()
            .iter()
            .map(|c| c.name.clone())
            .collect::<Vec<_>>();
        hits.sort();
        assert_eq!(hits, vec!["John Smith", "Sarah Johnson"]);
    }

    #[test]
    fn t_state_004_explicit_empty_search_shows_nothing() {
        let mut state = AppState::new();
        state.run_search();
        assert!(state.visible_contacts().is_empty());
        state.clear_search();
        assert_eq!(state.visible_contacts().len(), 10);
    }

    #[test]
    fn t_state_005_history_lines_top_first() {
        let mut state = empty_state();
        state.book.add("A", "a@e.com");
        state.delete("A", "a@e.com");
        state.undo();
        let bucket = simple_hash("a@e.com", DEFAULT_TABLE_SIZE);
        let (undo, redo) = state.history_lines();
        assert_eq!(undo, vec![format!("Add A <a@e.com> #{bucket}")]);
        assert_eq!(redo, vec![format!("Delete A <a@e.com> #{bucket}")]);
    }

    #[test]
    fn t_state_006_failed_delete_reports_status() {
        let mut state = empty_state();
        assert_eq!(state.delete("Ghost", "ghost@e.com"), DeleteOutcome::NotFound);
        assert_eq!(state.status, "No contact Ghost <ghost@e.com>");
        assert_eq!(state.undo_depth(), 1);
    }

    #[test]
    fn t_state_007_delete_status_follows_single_outcome() {
        let mut state = empty_state();
        state.book.add("A", "a@e.com");
        state.status = "idle".to_string();

        assert_eq!(state.delete("", "a@e.com"), DeleteOutcome::Ignored);
        assert_eq!(state.status, "idle");
        assert_eq!(state.undo_depth(), 1);

        assert_eq!(state.delete("A", "a@e.com"), DeleteOutcome::Removed);
        assert_eq!(state.status, "Deleted A <a@e.com>");
        assert!(state.visible_contacts().is_empty());
    }
}
