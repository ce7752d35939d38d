use ct_core::model::Contact;
use ct_core::shared::SharedContactBook;

use crate::error::AppError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptCommand {
    Add { name: String, email: String },
    Delete { name: String, email: String },
    Undo,
    Redo,
    Search(String),
    List,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptReport {
    pub label: String,
    pub contacts: Vec<Contact>,
}

pub fn parse_script(text: &str) -> Result<Vec<ScriptCommand>, AppError> {
    let mut commands = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        commands.push(parse_line(line).map_err(|message| AppError::Script {
            line: idx + 1,
            message,
        })?);
    }
    Ok(commands)
}

fn parse_line(line: &str) -> Result<ScriptCommand, String> {
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();
    match verb {
        "add" => {
            let (name, email) = split_pair(rest)?;
            Ok(ScriptCommand::Add { name, email })
        }
        "delete" => {
            let (name, email) = split_pair(rest)?;
            Ok(ScriptCommand::Delete { name, email })
        }
        "undo" => Ok(ScriptCommand::Undo),
        "redo" => Ok(ScriptCommand::Redo),
        "search" => Ok(ScriptCommand::Search(rest.to_string())),
        "list" => Ok(ScriptCommand::List),
        other => Err(format!("unknown command: {other}")),
    }
}

fn split_pair(rest: &str) -> Result<(String, String), String> {
    let Some((name, email)) = rest.split_once('|') else {
        return Err(format!("expected <name>|<email>, got: {rest}"));
    };
    Ok((name.trim().to_string(), email.trim().to_string()))
}

pub fn run_script(book: &SharedContactBook, commands: &[ScriptCommand]) -> Vec<ScriptReport> {
    let mut reports = Vec::new();
    for command in commands {
        match command {
            ScriptCommand::Add { name, email } => {
                book.add(name, email);
            }
            ScriptCommand::Delete { name, email } => {
                book.delete(name, email);
            }
            ScriptCommand::Undo => {
                book.undo();
            }
            ScriptCommand::Redo => {
                book.redo();
            }
            ScriptCommand::Search(query) => {
                let contacts = book.search(&query.to_lowercase()).into_contacts();
                reports.push(ScriptReport {
                    label: format!("search {query}"),
                    contacts,
                });
            }
            ScriptCommand::List => {
                reports.push(ScriptReport {
                    label: "list".to_string(),
                    contacts: book.list(),
                });
            }
        }
    }
    reports
}
