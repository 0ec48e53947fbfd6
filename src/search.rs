//! Lookup and search surfaces over the embedded symbol index

use crate::config::Config;
use colored::*;
use drsa_index::index::{SymbolIndex, get_index};
use regex::Regex;
use std::io::{self, Write};

/// Look up a symbol by name and display its cross-references
pub fn lookup_symbol(config: &Config, name: &str, verbose: bool) -> Result<(), String> {
    let index = get_index();

    match index.source_of(name) {
        Some(source) => {
            display_symbol_info(config, index, name, source, verbose);
            Ok(())
        }
        None => {
            // If not found, try searching for partial matches
            let results = index.search(name);
            if !results.is_empty() {
                println!(
                    "{} No exact match found. Did you mean one of these?\n",
                    "ℹ️".blue()
                );
                for (symbol, source) in results.iter().take(config.max_results) {
                    println!(
                        "  {} {} {}",
                        "•".cyan(),
                        symbol.green(),
                        format!("({})", source).dimmed()
                    );
                }
                if results.len() > config.max_results {
                    println!("\n  ... and {} more", results.len() - config.max_results);
                }
                return Ok(());
            }

            // Otherwise fall back to fuzzy suggestions
            let suggestions = get_symbol_suggestions(name);
            if suggestions.is_empty() {
                Err(format!("Symbol '{}' not found in the index", name))
            } else {
                println!(
                    "{} Symbol '{}' not found. Similar symbols:\n",
                    "ℹ️".blue(),
                    name
                );
                for symbol in suggestions.iter().take(config.max_results) {
                    println!("  {} {}", "•".cyan(), symbol.green());
                }
                Ok(())
            }
        }
    }
}

/// Search exported symbols by substring or regular expression
pub fn search_symbols(config: &Config, query: &str, use_regex: bool) -> Result<(), String> {
    let index = get_index();

    let results: Vec<(&str, &str)> = if use_regex {
        let re = Regex::new(query).map_err(|e| format!("Invalid pattern '{}': {}", query, e))?;
        index
            .symbols()
            .into_iter()
            .filter(|(symbol, _)| re.is_match(symbol))
            .collect()
    } else {
        index.search(query)
    };

    if results.is_empty() {
        println!("{} No results found for '{}'", "ℹ️".blue(), query);
        return Ok(());
    }

    println!("\n{} Found {} result(s):\n", "🔍".cyan(), results.len());
    for (symbol, source) in results.iter().take(config.max_results) {
        println!("  {} {}", "•".cyan(), symbol.green());
        println!("    defined in {}", source.dimmed());
    }
    if results.len() > config.max_results {
        println!("\n  ... and {} more", results.len() - config.max_results);
    }

    Ok(())
}

/// Print the generated module files in export order
pub fn list_modules() -> Result<(), String> {
    let index = get_index();

    println!("{} Generated modules (export order):\n", "📚".cyan());
    for (idx, module) in index.modules().iter().enumerate() {
        println!("  {}. {}", idx + 1, module.green());
    }

    Ok(())
}

/// List source notebooks, or the exports of a single notebook
pub fn list_notebooks(config: &Config, name: Option<&str>, verbose: bool) -> Result<(), String> {
    let index = get_index();

    match name {
        Some(source) => {
            if index.symbols_in(source).is_none() {
                return Err(format!("Notebook '{}' not found in the index", source));
            }
            display_notebook(config, index, source, verbose);
            Ok(())
        }
        None => {
            println!("{} Source notebooks:\n", "📚".cyan());
            for source in index.sources() {
                let count = index.symbols_in(source).map(|s| s.len()).unwrap_or(0);
                println!(
                    "  {} {} ({} symbol(s))",
                    "•".cyan(),
                    source.green(),
                    count.to_string().dimmed()
                );
            }
            Ok(())
        }
    }
}

/// Show project URLs and index statistics
pub fn show_info(config: &Config) -> Result<(), String> {
    let index = get_index();

    println!("{} DRSA symbol index:\n", "📚".cyan());
    println!(
        "  {} {}",
        "Docs:".bold(),
        config.doc_base(index).blue().underline()
    );
    println!(
        "  {} {}",
        "Repository:".bold(),
        config.git_base(index).blue().underline()
    );
    println!();
    println!(
        "  {} {} exported symbol(s)",
        "•".cyan(),
        index.len().to_string().bold()
    );
    println!(
        "  {} {} source notebook(s)",
        "•".cyan(),
        index.by_source.len().to_string().bold()
    );
    println!(
        "  {} {} generated module(s)",
        "•".cyan(),
        index.modules().len().to_string().bold()
    );

    Ok(())
}

/// Interactive search mode
pub fn interactive_search(config: &Config) -> Result<(), String> {
    println!("{}", "╔═══════════════════════════════════════════╗".cyan());
    println!("{}", "║   DRSA Symbol Index Search                ║".cyan());
    println!("{}", "╚═══════════════════════════════════════════╝".cyan());
    println!();
    print_shell_help();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{} ", "drsa>".blue().bold());
        stdout.flush().unwrap();

        let mut input = String::new();
        let bytes = stdin.read_line(&mut input).map_err(|e| e.to_string())?;
        if bytes == 0 {
            break;
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let parts: Vec<&str> = input.split_whitespace().collect();

        match parts[0] {
            "quit" | "exit" | "q" => {
                println!("Goodbye! 👋");
                break;
            }
            "sym" => {
                if parts.len() < 2 {
                    println!("{} Usage: sym <name>", "⚠️".yellow());
                    continue;
                }
                let _ = lookup_symbol(config, parts[1], true);
            }
            "search" => {
                if parts.len() < 2 {
                    println!("{} Usage: search <query>", "⚠️".yellow());
                    continue;
                }
                let query = parts[1..].join(" ");
                let _ = search_symbols(config, &query, false);
            }
            "mod" => {
                let _ = list_modules();
            }
            "nb" => {
                if let Err(e) = list_notebooks(config, parts.get(1).copied(), false) {
                    println!("{} {}", "❌".red(), e);
                }
            }
            "info" => {
                let _ = show_info(config);
            }
            "help" | "?" => print_shell_help(),
            _ => {
                // Default to symbol lookup
                let _ = lookup_symbol(config, input, false);
            }
        }
        println!();
    }

    Ok(())
}

fn print_shell_help() {
    println!("Commands:");
    println!("  {} <name>     - Look up an exported symbol", "sym".green());
    println!("  {} <query> - Search all symbols", "search".green());
    println!("  {}            - List generated modules", "mod".green());
    println!("  {} [name]      - List notebooks or one notebook", "nb".green());
    println!("  {}           - Show URLs and statistics", "info".green());
    println!("  {}           - Exit", "quit".green());
    println!();
}

/// Display cross-reference details for a symbol
fn display_symbol_info(
    config: &Config,
    index: &SymbolIndex,
    symbol: &str,
    source: &str,
    verbose: bool,
) {
    println!();
    println!("{}", "╔═══════════════════════════════════════════╗".cyan());
    println!("║ {} Symbol: {}", "📦".cyan(), symbol.green().bold());
    println!("{}", "╚═══════════════════════════════════════════╝".cyan());
    println!();

    println!("{} {}", "Notebook:".bold(), source.yellow());
    if let Some(module) = index.module_for(source) {
        println!("{}   {}", "Module:".bold(), module.yellow());
    }
    if let Some(link) = index.doc_link_from(config.doc_base(index), symbol) {
        println!("{}     {}", "Docs:".bold(), link.blue().underline());
    }
    if let Some(link) = index.source_link_from(config.git_base(index), symbol) {
        println!("{}   {}", "Source:".bold(), link.blue().underline());
    }

    if verbose {
        if let Some(siblings) = index.symbols_in(source) {
            let others: Vec<&String> =
                siblings.iter().filter(|s| s.as_str() != symbol).collect();
            if !others.is_empty() {
                println!(
                    "\n{} {} other symbol(s) in {}:",
                    "Also:".bold(),
                    others.len(),
                    source
                );
                for other in others {
                    println!("  {} {}", "•".cyan(), other.green());
                }
            }
        }
    }
    println!();
}

/// Display a notebook and its exports
fn display_notebook(config: &Config, index: &SymbolIndex, source: &str, verbose: bool) {
    println!();
    println!("{}", "╔═══════════════════════════════════════════╗".cyan());
    println!("║ {} Notebook: {}", "📓".cyan(), source.green().bold());
    println!("{}", "╚═══════════════════════════════════════════╝".cyan());
    println!();

    if let Some(module) = index.module_for(source) {
        println!("{} {}", "Module:".bold(), module.yellow());
        println!();
    }

    let symbols = index.symbols_in(source).unwrap_or(&[]);
    println!("{} {} symbol(s)", "Exports:".bold(), symbols.len());
    println!();

    for symbol in symbols {
        println!("  {} {}", "▸".cyan(), symbol.yellow().bold());
        if verbose {
            if let Some(link) = index.doc_link_from(config.doc_base(index), symbol) {
                println!("    {}", link.dimmed());
            }
        }
    }
    println!();
}

/// Get suggestions for a symbol name (case-insensitive, then fuzzy)
pub fn get_symbol_suggestions(name: &str) -> Vec<String> {
    let index = get_index();
    let name_lower = name.to_lowercase();

    // Symbols that match case-insensitively
    let mut suggestions: Vec<String> = index
        .symbols()
        .into_iter()
        .filter(|(symbol, _)| symbol.to_lowercase() == name_lower && *symbol != name)
        .map(|(symbol, _)| symbol.to_string())
        .collect();

    // If no exact case-insensitive match, find similar symbols using fuzzy matching
    if suggestions.is_empty() {
        let mut scored: Vec<(usize, &str)> = index
            .symbols()
            .into_iter()
            .map(|(symbol, _)| {
                let distance = edit_distance(&name_lower, &symbol.to_lowercase());
                (distance, symbol)
            })
            .filter(|(dist, _)| *dist <= 2) // Only suggest if edit distance <= 2
            .collect();

        // Sort by distance (closest first)
        scored.sort_by_key(|(dist, _)| *dist);

        suggestions = scored
            .into_iter()
            .map(|(_, symbol)| symbol.to_string())
            .take(5)
            .collect();
    }

    suggestions
}

/// Calculate simple edit distance between two strings (Levenshtein distance)
fn edit_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();
    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];

    for i in 0..=len1 {
        matrix[i][0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    for i in 1..=len1 {
        for j in 1..=len2 {
            let cost = if s1_chars[i - 1] == s2_chars[j - 1] {
                0
            } else {
                1
            };
            matrix[i][j] = std::cmp::min(
                std::cmp::min(matrix[i - 1][j] + 1, matrix[i][j - 1] + 1),
                matrix[i - 1][j - 1] + cost,
            );
        }
    }

    matrix[len1][len2]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("survival_rate", "survival_rate"), 0);
        assert_eq!(edit_distance("survival_rat", "survival_rate"), 1);
        assert_eq!(edit_distance("event_rate", "event_time"), 3);
        assert_eq!(edit_distance("", "abc"), 3);
    }

    #[test]
    fn test_case_insensitive_suggestion() {
        let suggestions = get_symbol_suggestions("drsa");
        assert_eq!(suggestions, ["DRSA"]);
    }

    #[test]
    fn test_fuzzy_suggestion() {
        let suggestions = get_symbol_suggestions("survival_rat");
        assert!(suggestions.contains(&"survival_rate".to_string()));
    }

    #[test]
    fn test_no_suggestion_for_distant_input() {
        let suggestions = get_symbol_suggestions("completely_unrelated_name");
        assert!(suggestions.is_empty());
    }
}
