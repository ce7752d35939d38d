use ct_core::shared::SharedContactBook;

use crate::actions::{dispatch, AppAction};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::state::{AppState, Tab};

pub struct AppDriver {
    state: AppState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppSnapshot {
    pub total_contacts: usize,
    pub visible_contacts: usize,
    pub undo_depth: usize,
    pub redo_depth: usize,
    pub query: String,
    pub search_performed: bool,
    pub active_tab: Tab,
    pub status: String,
}

impl Default for AppDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl AppDriver {
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
        }
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            state: AppState::with_config(config),
        }
    }

    pub fn with_book(book: SharedContactBook) -> Self {
        Self {
            state: AppState::with_book(book, AppConfig::default()),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn dispatch(&mut self, action: AppAction) -> Result<(), AppError> {
        dispatch(&mut self.state, action)
    }

    pub fn snapshot(&mut self) -> AppSnapshot {
        let visible_contacts = self.state.visible_contacts().len();
        AppSnapshot {
            total_contacts: self.state.all_contacts().len(),
            visible_contacts,
            undo_depth: self.state.undo_depth(),
            redo_depth: self.state.redo_depth(),
            query: self.state.query().to_string(),
            search_performed: self.state.search_performed(),
            active_tab: self.state.active_tab,
            status: self.state.status.clone(),
        }
    }
}
