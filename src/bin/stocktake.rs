//! stocktake CLI
//!
//! Runs one inventory command, or the interactive menu when no subcommand
//! is given.

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stocktake::command::{Command, Outcome};
use stocktake::present::render_table;
use stocktake::shell::Shell;
use stocktake::{Config, Engine, ItemUpdate, StockError};
use tracing_subscriber::{fmt, EnvFilter};

/// stocktake
#[derive(Parser, Debug)]
#[command(name = "stocktake")]
#[command(about = "Single-user inventory tracker")]
#[command(version)]
struct Args {
    /// Inventory file
    #[arg(short, long, env = "STOCKTAKE_FILE", default_value = "inventory.json")]
    file: PathBuf,

    /// Do not save after changes
    #[arg(long)]
    no_save: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a new item
    Add {
        /// Unique item id
        id: String,

        /// Item name
        name: String,

        /// Quantity in stock (non-negative integer)
        quantity: String,

        /// Unit price
        price: String,
    },

    /// Remove an item
    Remove {
        /// The id to remove
        id: String,
    },

    /// Update fields of an item; omitted fields are kept
    Update {
        /// The id to update
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        quantity: Option<String>,

        #[arg(long)]
        price: Option<String>,
    },

    /// Show all items
    List,

    /// Find items by id or name (case-insensitive)
    Search {
        /// Text to look for
        query: String,
    },

    /// Interactive menu
    Shell,
}

impl Commands {
    fn into_command(self) -> Option<Command> {
        let command = match self {
            Commands::Add {
                id,
                name,
                quantity,
                price,
            } => Command::Add {
                id: id.trim().to_string(),
                name: name.trim().to_string(),
                quantity: quantity.trim().to_string(),
                price: price.trim().to_string(),
            },
            Commands::Remove { id } => Command::Remove {
                id: id.trim().to_string(),
            },
            Commands::Update {
                id,
                name,
                quantity,
                price,
            } => Command::Update {
                id: id.trim().to_string(),
                changes: ItemUpdate {
                    name: name.map(|s| s.trim().to_string()),
                    quantity: quantity.map(|s| s.trim().to_string()),
                    price: price.map(|s| s.trim().to_string()),
                },
            },
            Commands::List => Command::List,
            Commands::Search { query } => Command::Search {
                query: query.trim().to_string(),
            },
            Commands::Shell => return None,
        };
        Some(command)
    }
}

fn main() {
    // Logs go to stderr; stdout carries tables
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("stocktake v{}", stocktake::VERSION);

    let config = Config::builder()
        .inventory_path(&args.file)
        .autosave(!args.no_save)
        .build();

    let mut engine = match Engine::open(config) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Failed to open inventory {}: {}", args.file.display(), e);
            std::process::exit(1);
        }
    };

    let command = args.command.and_then(Commands::into_command);
    let result = match command {
        Some(command) => run_command(&mut engine, command),
        None => {
            let mut shell = Shell::new(&mut engine, io::stdin().lock(), io::stdout().lock());
            shell.run()
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_command(engine: &mut Engine, command: Command) -> Result<(), StockError> {
    match engine.execute(command)? {
        Outcome::Added(item) => println!("Item {} added.", item.id()),
        Outcome::Removed(item) => println!("Item {} removed.", item.id()),
        Outcome::Updated(report) => {
            for warning in &report.warnings {
                eprintln!("Warning: {}", warning);
            }
            println!("Item updated.");
        }
        Outcome::Items(items) if items.is_empty() => println!("No items."),
        Outcome::Items(items) => print!("{}", render_table(&items)),
    }
    Ok(())
}
