use tracing::{debug, info};

use crate::config::save_config_to;
use crate::error::AppError;
use crate::state::{AppState, Tab};

pub enum AppAction {
    SetQuery(String),
    Search,
    ClearSearch,
    SetEditName(String),
    SetEditEmail(String),
    SetEditTitle(String),
    AddContact,
    DeleteContact { name: String, email: String },
    Undo,
    Redo,
    SetActiveTab(Tab),
    SetTitle(String),
}

pub fn dispatch(state: &mut AppState, action: AppAction) -> Result<(), AppError> {
    match action {
        AppAction::SetQuery(query) => {
            state.set_query(&query);
        }
        AppAction::Search => {
            state.run_search();
        }
        AppAction::ClearSearch => {
            state.clear_search();
        }
        AppAction::SetEditName(value) => {
            state.edit_name = value;
        }
        AppAction::SetEditEmail(value) => {
            state.edit_email = value;
        }
        AppAction::SetEditTitle(value) => {
            state.edit_title = value;
        }
        AppAction::AddContact => {
            if !state.add_from_editor() {
                debug!("add ignored: name and email are both required");
            }
        }
        AppAction::DeleteContact { name, email } => {
            state.delete(&name, &email);
        }
        AppAction::Undo => {
            state.undo();
        }
        AppAction::Redo => {
            state.redo();
        }
        AppAction::SetActiveTab(tab) => {
            state.active_tab = tab;
        }
        AppAction::SetTitle(title) => {
            state.config.title = title.clone();
            state.edit_title = title;
            if let Some(path) = state.config_path.clone() {
                save_config_to(&state.config, &path)?;
                info!(path = %path.display(), "config saved");
                state.status = "Title saved".to_string();
            }
        }
    }
    Ok(())
}
