use colored::*;
use std::{fs, path::PathBuf};

pub fn init_config(force: bool) -> Result<(), String> {
    let config_path = PathBuf::from("drsa-index.toml");

    if config_path.exists() && !force {
        return Err("drsa-index.toml already exists. Use --force to overwrite.".to_string());
    }

    let template = r#"# drsa-index Configuration File

# Documentation base URL used when printing doc links.
# Defaults to the URL recorded in the exported metadata; override it to
# point at a fork or a locally served copy of the docs.
# doc_url = "http://localhost:8000/drsa/"

# Source repository URL used when printing source links.
# git_url = "https://github.com/collinprather/drsa/tree/master/"

# Maximum number of results shown by search and suggestions
max_results = 10
"#;

    fs::write(&config_path, template)
        .map_err(|e| format!("Failed to create drsa-index.toml: {}", e))?;

    println!("{} Created drsa-index.toml", "✅".green());
    println!("\n{}", "Configuration file created with defaults:".cyan());
    println!("  {} doc_url = (from exported metadata)", "•".blue());
    println!("  {} git_url = (from exported metadata)", "•".blue());
    println!("  {} max_results = 10", "•".blue());
    println!(
        "\n{}",
        "Edit drsa-index.toml to customize lookup output.".cyan()
    );

    Ok(())
}
