//! Example demonstrating the embedded symbol index API
//!
//! Shows how to use the embedded, compressed index metadata for symbol
//! lookups and documentation cross-referencing.
//!
//! Run with: cargo run --example index_demo

use drsa_index::{custom_doc_links, get_index};

fn main() {
    println!("=== Embedded Symbol Index Demo ===\n");

    // Get the global index (this will trigger decompression and indexing on first access)
    let index = get_index();

    // Example 1: Look up where a symbol is defined
    println!("1️⃣  Looking up 'survival_rate':");
    if let Some(source) = index.source_of("survival_rate") {
        println!("   ✓ Defined in: {}", source);
        if let Some(module) = index.module_for(source) {
            println!("   ✓ Exported to: {}", module);
        }
    }
    println!();

    // Example 2: Resolve documentation and source links
    println!("2️⃣  Cross-references for 'DRSA':");
    if let Some(link) = index.doc_link("DRSA") {
        println!("   ✓ Docs:   {}", link);
    }
    if let Some(link) = index.source_link("DRSA") {
        println!("   ✓ Source: {}", link);
    }
    println!();

    // Example 3: The custom cross-reference hook is intentionally inert
    println!("3️⃣  Custom cross-reference hook:");
    match custom_doc_links("survival_rate") {
        Some(link) => println!("   ✓ Custom link: {}", link),
        None => println!("   ✓ No custom link registered (default scheme applies)"),
    }
    println!();

    // Example 4: Search for symbols by partial name
    println!("4️⃣  Searching for symbols containing 'rate':");
    let matches = index.search("rate");
    println!("   ✓ Found {} matches", matches.len());
    for (symbol, source) in matches.iter().take(5) {
        println!("      • {} ({})", symbol, source);
    }
    if matches.len() > 5 {
        println!("      ... and {} more", matches.len() - 5);
    }
    println!();

    // Example 5: List the exports of a notebook
    println!("5️⃣  Exports of '00_functions.ipynb':");
    if let Some(symbols) = index.symbols_in("00_functions.ipynb") {
        println!("   ✓ {} symbol(s)", symbols.len());
        for symbol in symbols.iter().take(5) {
            println!("      • {}", symbol);
        }
        if symbols.len() > 5 {
            println!("      ... and {} more", symbols.len() - 5);
        }
    }
    println!();

    // Example 6: Statistics
    println!("6️⃣  Index statistics:");
    println!("   ✓ Symbols indexed: {}", index.len());
    println!("   ✓ Source notebooks: {}", index.by_source.len());
    println!("   ✓ Generated modules: {:?}", index.modules());
    println!("   ✓ Docs URL: {}", index.doc_url());
    println!("   ✓ Repository: {}", index.git_url());

    println!("\n=== Demo Complete ===");
}
