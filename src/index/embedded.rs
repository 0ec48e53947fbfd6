use super::types::{NotebookIndex, SymbolIndex};
use flate2::read::GzDecoder;
use lazy_static::lazy_static;
use std::io::Read;

// Embed the compressed index metadata at compile time
static COMPRESSED_INDEX: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/index.json.gz"));

lazy_static! {
    /// Global symbol index, initialized on first access
    pub static ref INDEX: SymbolIndex = load_index();
}

/// Decompress the embedded metadata and build the index
fn load_index() -> SymbolIndex {
    let mut decoder = GzDecoder::new(COMPRESSED_INDEX);
    let mut json_str = String::new();
    decoder
        .read_to_string(&mut json_str)
        .expect("Failed to decompress embedded index metadata");

    let raw: NotebookIndex =
        serde_json::from_str(&json_str).expect("Failed to parse embedded index metadata");

    SymbolIndex::build(raw)
}

/// Get a reference to the global symbol index
pub fn get_index() -> &'static SymbolIndex {
    &INDEX
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::custom_doc_links;

    #[test]
    fn test_index_load() {
        let index = get_index();
        assert!(!index.is_empty(), "Index should contain symbols");
        assert!(
            !index.by_source.is_empty(),
            "Source grouping should not be empty"
        );
    }

    #[test]
    fn test_exact_symbol_set() {
        let index = get_index();

        let mut symbols: Vec<&str> = index.symbols().into_iter().map(|(s, _)| s).collect();
        symbols.sort();

        assert_eq!(
            symbols,
            [
                "DRSA",
                "assert_correct_input_shape",
                "assert_correct_output_shape",
                "event_rate",
                "event_rate_loss",
                "event_time",
                "event_time_loss",
                "log_event_rate",
                "log_event_time",
                "log_survival_rate",
                "survival_rate",
            ]
        );

        // Every symbol maps to one of the two exported notebooks
        for (symbol, source) in index.symbols() {
            assert!(
                source == "00_functions.ipynb" || source == "01_model.ipynb",
                "{} maps to unexpected source {}",
                symbol,
                source
            );
        }

        assert_eq!(index.source_of("survival_rate"), Some("00_functions.ipynb"));
        assert_eq!(index.source_of("DRSA"), Some("01_model.ipynb"));
    }

    #[test]
    fn test_module_list() {
        let index = get_index();
        assert_eq!(index.modules(), ["functions.py", "model.py"]);
    }

    #[test]
    fn test_urls_well_formed() {
        let index = get_index();

        assert!(!index.doc_url().is_empty());
        assert!(!index.git_url().is_empty());
        assert!(index.doc_url().starts_with("https://"));
        assert!(index.git_url().starts_with("https://"));
        // Both bases end in a slash so links concatenate cleanly
        assert!(index.doc_url().ends_with('/'));
        assert!(index.git_url().ends_with('/'));
    }

    #[test]
    fn test_repeated_reads_are_stable() {
        let first = get_index();
        let second = get_index();

        assert!(std::ptr::eq(first, second));
        assert_eq!(first.doc_url(), second.doc_url());
        assert_eq!(first.git_url(), second.git_url());
        assert_eq!(first.symbols(), second.symbols());
    }

    #[test]
    fn test_consumer_lookup_flow() {
        let index = get_index();

        // Custom cross-references are absent, which is the expected answer,
        // not a failure
        assert_eq!(custom_doc_links("survival_rate"), None);

        // The default scheme takes over
        assert_eq!(
            index.doc_link("survival_rate").as_deref(),
            Some("https://collinprather.github.io/drsa/drsa/functions#survival_rate")
        );
        assert_eq!(
            index.source_link("DRSA").as_deref(),
            Some("https://github.com/collinprather/drsa/tree/master/drsa/model.py")
        );
    }
}
