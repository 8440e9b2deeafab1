mod config;
mod contact;
mod dataset;
mod directory;
mod search;
mod store;
mod ui;
mod validate;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use config::Config;
use contact::Contact;
use directory::Directory;
use store::ContactStore;

#[derive(Parser, Debug)]
#[command(name = "contactdir", about = "Browse and edit a contact directory")]
struct Cli {
    /// Configuration file (defaults to <config dir>/contactdir/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed contacts as a JSON array, replacing the bundled set
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every contact, one per line
    List,
    /// Print contacts whose name or mobile contains the term
    Query(QueryArgs),
}

#[derive(Args, Debug)]
struct QueryArgs {
    /// Search term (case-insensitive substring of name or mobile)
    query: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;

    let data_path = cli.data.as_deref().or(config.dataset.as_deref());
    let seed = dataset::load(data_path)?;
    for (id, errors) in dataset::invalid_records(&seed) {
        let messages: Vec<String> = errors
            .iter()
            .map(|(field, message)| format!("{}: {}", field.key(), message))
            .collect();
        eprintln!("warning: seed contact {} is invalid: {}", id, messages.join("; "));
    }

    let mut directory = Directory::new(ContactStore::new(seed, config.id_allocation));

    if let Some(command) = cli.command {
        match command {
            Command::List => print_rows(directory.contacts().iter()),
            Command::Query(args) => handle_query(&mut directory, args),
        }
        return Ok(());
    }

    run_ui(&config, directory)
}

fn run_ui(config: &Config, directory: Directory) -> Result<()> {
    if let Some(path) = &config.config_path {
        println!("Loaded configuration from {}", path.display());
    }
    let mut app = ui::app::App::new(config, directory);
    app.run()
}

fn handle_query(directory: &mut Directory, args: QueryArgs) {
    directory.set_query(args.query.as_str());
    let results = directory.visible();

    // Header line first, then one tab-separated row per match
    if results.is_empty() {
        println!("No matches for \"{}\"", args.query);
    } else {
        println!(
            "Found {} contact(s) matching \"{}\"",
            results.len(),
            args.query
        );
    }

    print_rows(results.into_iter());
}

fn print_rows<'a>(contacts: impl Iterator<Item = &'a Contact>) {
    for c in contacts {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            c.id, c.name, c.mobile, c.email, c.address
        );
    }
}
