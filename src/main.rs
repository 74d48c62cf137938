use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use menuplan::cli::{Kind, check_file, hash};
use menuplan_shared::ObjectId;

/// menuplan - recipe and menu planning models
#[derive(Parser)]
#[command(name = "menuplan")]
#[command(about = "Validate and serialize recipes, menus and users", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON entity and print its document
    Check {
        #[arg(value_enum)]
        kind: Kind,

        /// JSON file holding the entity
        file: PathBuf,
    },
    /// Check a password's strength and print its Argon2id hash
    HashPassword { password: String },
    /// Print a fresh object identifier
    ObjectId,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = menuplan::config::Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    menuplan::observability::init_observability(
        "menuplan",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Check { kind, file } => {
            let doc = check_file(kind, &file)?;
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        Commands::HashPassword { password } => {
            println!("{}", hash(&password, &config.password)?);
        }
        Commands::ObjectId => println!("{}", ObjectId::new().to_hex()),
    }

    Ok(())
}
