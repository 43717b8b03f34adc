//! # Chriki, l'assistant dzayri f'terminal
//!
//! A bilingual (Darija/French/Arabic) chat assistant for Algeria. Replies
//! come from a generative-language API, flow through a formatting pipeline
//! (cleanup, paragraph breaks, emphasis, emojis, chunking) and are revealed
//! progressively in the TUI. Common paperwork questions are answered from a
//! local guide store without touching the API.

mod cli;
mod core;
mod tui;

use std::io::Read;
use std::sync::Arc;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use crate::cli::{AdminAction, Args, Commands, HistoryAction, KeyAction};
use crate::core::admin;
use crate::core::chat::{self, ChatRequest};
use crate::core::config::{self, Config};
use crate::core::history::History;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging (warn level by default; RUST_LOG or -v/-q override)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .try_init()
        .ok();

    // Subcommands work without an API key
    if let Some(command) = &args.command {
        return run_command(command);
    }

    // Load configuration (print user-friendly message; exit uses Display not Debug)
    let config = config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let config = apply_model_override(config, &args);

    // Handle single prompt mode
    if let Some(prompt) = &args.prompt {
        let prompt = if prompt == "-" {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf.trim().to_string()
        } else {
            prompt.clone()
        };
        return run_prompt(&config, &prompt, &args).await;
    }

    // Default behavior: open the TUI (interactive chat).
    // Spawns a blocking thread to avoid runtime contention.
    let config = Arc::new(config);
    let join_result = tokio::task::spawn_blocking(move || tui::run(config)).await;

    // Surface the actual panic message when the TUI thread dies
    match join_result {
        Ok(io_result) => io_result?,
        Err(join_err) => {
            if let Ok(panic) = join_err.try_into_panic() {
                let msg = if let Some(s) = panic.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic.downcast_ref::<String>() {
                    s.clone()
                } else {
                    format!("{:?}", panic)
                };
                eprintln!("TUI panic: {}", msg);
            }
            return Err(Box::new(std::io::Error::other("TUI thread panicked")));
        }
    }

    Ok(())
}

fn apply_model_override(mut config: Config, args: &Args) -> Config {
    if let Some(model) = &args.model {
        config.model_id = model.clone();
    }
    config
}

/// One-shot prompt: answer paperwork questions locally, everything else via
/// the API; API failures degrade to the fixed fallback reply.
async fn run_prompt(
    config: &Config,
    prompt: &str,
    args: &Args,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = args.format_options();

    let formatted = match local_admin_answer(prompt) {
        Some(formatted) => formatted,
        None => {
            match chat::chat(ChatRequest {
                config,
                message: prompt,
                history: &[],
                options,
                cancel_token: None,
            })
            .await
            {
                Ok(reply) => reply.formatted,
                Err(e) => {
                    log::warn!("Chat request failed: {}", e);
                    chat::fallback_reply().formatted
                }
            }
        }
    };

    for (i, chunk) in formatted.chunks.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", chunk);
    }
    if !formatted.suggestions.is_empty() {
        println!();
        for suggestion in &formatted.suggestions {
            println!("  • {}", suggestion);
        }
    }
    Ok(())
}

fn local_admin_answer(prompt: &str) -> Option<core::format::FormattedMessage> {
    let store = admin::Store::open_default()?;
    if let Err(e) = store.initialize() {
        log::warn!("Could not seed the admin store: {}", e);
    }
    let documents = store.documents();
    if !admin::is_admin_query(prompt, &documents) {
        return None;
    }
    admin::find_best_match(prompt, &documents).map(admin::answer)
}

fn run_command(command: &Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Key { action } => match action {
            KeyAction::Set { key } => {
                core::api_key::store_api_key(key)?;
                println!("API key stored.");
            }
            KeyAction::Show => match core::api_key::load_api_key() {
                Some(key) => println!("Stored key: {}", core::api_key::masked(&key)),
                None => println!("No stored key. Run `chriki key set <KEY>`."),
            },
        },
        Commands::Config => {
            let key_status = if std::env::var("GEMINI_API_KEY").is_ok() {
                "from environment".to_string()
            } else if core::api_key::load_api_key().is_some() {
                "stored".to_string()
            } else {
                "missing".to_string()
            };
            println!(
                "Model:       {}",
                std::env::var("CHRIKI_MODEL").unwrap_or_else(|_| config::DEFAULT_MODEL.to_string())
            );
            println!("API key:     {}", key_status);
            if let Some(path) = core::api_key::credentials_path() {
                println!("Key file:    {}", path.display());
            }
            if let Some(dir) = core::paths::data_dir() {
                println!("Data dir:    {}", dir.display());
            }
        }
        Commands::Admin { action } => run_admin_command(action)?,
        Commands::History { action } => run_history_command(action)?,
        Commands::Completions { shell } => {
            let mut cmd = Args::command();
            cli::generate(*shell, &mut cmd, "chriki", &mut std::io::stdout());
        }
    }
    Ok(())
}

fn run_admin_command(action: &AdminAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = admin::Store::open_default().ok_or("No data directory available")?;
    store.initialize()?;
    match action {
        AdminAction::List { category } => {
            let docs = match category {
                Some(cat) => store.documents_by_category(cat),
                None => store.documents(),
            };
            for doc in docs {
                println!("{:<20} {} ({})", doc.id, doc.title, doc.category);
            }
        }
        AdminAction::Show { id } => match store.document_by_id(id) {
            Some(doc) => println!("{}", admin::card_chunks(&doc).join("\n\n")),
            None => println!("No guide with id '{}'.", id),
        },
        AdminAction::Search { query } => {
            let hits = store.search(query);
            if hits.is_empty() {
                println!("Nothing found for '{}'.", query);
            }
            for doc in hits {
                println!("{:<20} {}", doc.id, doc.title);
            }
        }
        AdminAction::Add { file } => {
            let data = std::fs::read_to_string(file)?;
            let doc: admin::AdminDocument = serde_json::from_str(&data)?;
            let id = doc.id.clone();
            store.save_document(doc)?;
            println!("Saved guide '{}'.", id);
        }
        AdminAction::Delete { id } => {
            if store.delete_document(id)? {
                println!("Deleted guide '{}'.", id);
            } else {
                println!("No guide with id '{}'.", id);
            }
        }
        AdminAction::Export => {
            println!("{}", serde_json::to_string_pretty(&store.export())?);
        }
        AdminAction::Import { file } => {
            let data = std::fs::read_to_string(file)?;
            let value: serde_json::Value = serde_json::from_str(&data)?;
            store.import(&value)?;
            println!("Store imported.");
        }
        AdminAction::Reset => {
            store.reset()?;
            println!("Built-in guides restored.");
        }
    }
    Ok(())
}

fn run_history_command(action: &HistoryAction) -> Result<(), Box<dyn std::error::Error>> {
    let history = History::open_default().ok_or("No data directory available")?;
    match action {
        HistoryAction::List => {
            for meta in history.list()? {
                println!("{:<38} {}", meta.id, meta.title);
            }
        }
        HistoryAction::Show { id } => match history.load(id) {
            Some(turns) => {
                for turn in turns {
                    let who = if turn.role == "user" { "›" } else { "◆" };
                    println!("{} {}", who, turn.content);
                    println!();
                }
            }
            None => println!("No conversation with id '{}'.", id),
        },
        HistoryAction::Delete { id } => {
            history.delete(id)?;
            println!("Deleted conversation '{}'.", id);
        }
    }
    Ok(())
}
