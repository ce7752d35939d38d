use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use ct_app::error::AppError;
use ct_app::logging;
use ct_app::script::{parse_script, run_script, ScriptReport};
use ct_core::seed::sample_store;
use ct_core::shared::SharedContactBook;
use ct_core::store::ContactStore;

/// Replays add/delete/undo/redo/search/list lines against a contact book.
#[derive(Debug, Parser)]
#[command(name = "ct_batch")]
struct BatchOptions {
    /// Script file; stdin when omitted.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Start from an empty book instead of the sample contacts.
    #[arg(long)]
    no_seed: bool,

    /// Print each report as a JSON array.
    #[arg(long)]
    json: bool,
}

fn main() {
    logging::init();
    let opts = BatchOptions::parse();
    if let Err(err) = run(opts) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(opts: BatchOptions) -> Result<(), AppError> {
    let text = match &opts.script {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let commands = parse_script(&text)?;

    let store = if opts.no_seed {
        ContactStore::new()
    } else {
        sample_store()
    };
    let book = SharedContactBook::with_store(store);
    for report in run_script(&book, &commands) {
        print_report(&report, opts.json)?;
    }
    Ok(())
}

fn print_report(report: &ScriptReport, json: bool) -> Result<(), AppError> {
    if json {
        let body = serde_json::to_string(&report.contacts).map_err(std::io::Error::from)?;
        println!("{body}");
        return Ok(());
    }
    println!("# {} ({})", report.label, report.contacts.len());
    for contact in &report.contacts {
        println!("{} <{}>", contact.name, contact.email);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_batch_001_parse_args() {
        let opts = BatchOptions::try_parse_from(["ct_batch", "--script", "ops.txt", "--json"])
            .expect("parse");
        assert_eq!(opts.script, Some(PathBuf::from("ops.txt")));
        assert!(opts.json);
        assert!(!opts.no_seed);
    }

    #[test]
    fn t_batch_002_rejects_unknown_flag() {
        assert!(BatchOptions::try_parse_from(["ct_batch", "--load", "x"]).is_err());
    }
}
