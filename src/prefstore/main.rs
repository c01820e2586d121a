use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use prefstore::api::PrefStore;
use prefstore::store::fs::FileStore;
use serde_json::Value;

mod args;
use args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let dir = match cli.dir {
        Some(dir) => dir,
        None => match ProjectDirs::from("com", "prefstore", "prefstore") {
            Some(proj_dirs) => proj_dirs.data_dir().to_path_buf(),
            None => {
                eprintln!("{}", "Could not determine a data directory".red());
                std::process::exit(1);
            }
        },
    };

    let store = PrefStore::new(FileStore::new(dir));

    match cli.command {
        Commands::Get { path } => match store.get(&path) {
            Some(value) => println!("{}", value),
            None => {
                eprintln!("{} {}", "No such setting:".yellow(), path);
                std::process::exit(1);
            }
        },
        Commands::Page { path } => {
            let page = store.page(&path);
            match serde_json::to_string_pretty(&page) {
                Ok(rendered) => println!("{}", rendered),
                Err(e) => {
                    eprintln!("{} {}", "Render error:".red(), e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Set { path, value } => {
            let parsed = parse_value(&value);
            let outcome = store.set(&path, parsed);
            if outcome.persisted {
                println!("{} {}", path.green(), "updated".green());
            } else {
                let detail = outcome.storage_error.unwrap_or_default();
                eprintln!("{} {}", "Save failed:".red(), detail);
                std::process::exit(1);
            }
        }
        Commands::Reset { path } => {
            let outcome = store.reset(&path);
            if outcome.persisted {
                println!("{} {}", path.green(), "reset to defaults".green());
            } else {
                let detail = outcome.storage_error.unwrap_or_default();
                eprintln!("{} {}", "Save failed:".red(), detail);
                std::process::exit(1);
            }
        }
    }
}

/// `set` values arrive as shell words; take JSON when it parses, otherwise
/// treat the word as a bare string so `set comms.webcamQuality HD` works.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
