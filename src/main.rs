use clap::{Parser, Subcommand};
use colored::*;

mod config;
mod init;
mod search;

use config::Config;
use init::init_config;
use search::{
    interactive_search, list_modules, list_notebooks, lookup_symbol, search_symbols, show_info,
};

// ============================================================================
// CLI Definition
// ============================================================================

#[derive(Parser)]
#[command(name = "drsa-index")]
#[command(about = "Symbol index and doc cross-referencing for the DRSA library", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up the notebook, module, and links for an exported symbol
    Lookup {
        /// Exported symbol name (e.g. survival_rate)
        symbol: String,
    },
    /// Search exported symbols by substring or pattern
    Search {
        /// Substring to match against symbol names
        query: String,

        /// Treat the query as a regular expression
        #[arg(long)]
        regex: bool,
    },
    /// List the generated module files in export order
    Modules,
    /// List source notebooks, or the exports of one notebook
    Notebooks {
        /// Notebook to show (e.g. 00_functions.ipynb)
        name: Option<String>,
    },
    /// Show project URLs and index statistics
    Info,
    /// Interactive lookup shell
    Shell,
    /// Initialize a new drsa-index.toml configuration file
    Init {
        /// Overwrite existing drsa-index.toml if present
        #[arg(long)]
        force: bool,
    },
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() {
    let cli = Cli::parse();

    let config = Config::load();

    let result = match cli.command {
        Commands::Lookup { symbol } => lookup_symbol(&config, &symbol, cli.verbose),
        Commands::Search { query, regex } => search_symbols(&config, &query, regex),
        Commands::Modules => list_modules(),
        Commands::Notebooks { name } => list_notebooks(&config, name.as_deref(), cli.verbose),
        Commands::Info => show_info(&config),
        Commands::Shell => interactive_search(&config),
        Commands::Init { force } => init_config(force),
    };

    if let Err(e) = result {
        eprintln!("\n{} {}", "❌".red(), e.red());
        std::process::exit(1);
    }
}
