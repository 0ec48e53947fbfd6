use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Raw index metadata as exported by the notebook tooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotebookIndex {
    /// Map from exported symbol name to the notebook that defines it
    pub index: HashMap<String, String>,
    /// Generated module files, in export order
    pub modules: Vec<String>,
    /// Documentation base URL
    pub doc_url: String,
    /// Source repository URL
    pub git_url: String,
}

/// Hook for project-specific documentation cross-references.
///
/// Consulted by [`SymbolIndex::doc_link`] before the default page scheme.
/// No custom resolutions are registered, so every call returns `None`;
/// callers treat the absent value as "use the default link", not as an error.
pub fn custom_doc_links(_name: &str) -> Option<String> {
    None
}

/// Documentation page name for a source notebook.
///
/// Drops the ordering prefix and the extension: `00_functions.ipynb`
/// becomes `functions`. Notebooks without an ordering prefix keep their
/// bare stem.
pub fn doc_page(source: &str) -> &str {
    let stem = source.strip_suffix(".ipynb").unwrap_or(source);
    match stem.split_once('_') {
        Some((prefix, rest)) if !prefix.is_empty() && !rest.is_empty() => {
            if prefix.chars().all(|c| c.is_ascii_digit()) {
                rest
            } else {
                stem
            }
        }
        _ => stem,
    }
}

/// Index for fast lookups
#[derive(Debug)]
pub struct SymbolIndex {
    /// Symbols grouped by defining notebook, sorted within each group
    pub by_source: BTreeMap<String, Vec<String>>,
    /// The raw exported metadata
    pub raw: NotebookIndex,
}

impl SymbolIndex {
    /// Build the derived lookups from the raw metadata
    pub fn build(raw: NotebookIndex) -> Self {
        let mut by_source: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for (symbol, source) in &raw.index {
            by_source
                .entry(source.clone())
                .or_default()
                .push(symbol.clone());
        }

        for symbols in by_source.values_mut() {
            symbols.sort();
        }

        SymbolIndex { by_source, raw }
    }

    /// Notebook that defines an exported symbol
    pub fn source_of(&self, name: &str) -> Option<&str> {
        self.raw.index.get(name).map(String::as_str)
    }

    /// Symbols defined in a given notebook, sorted by name
    pub fn symbols_in(&self, source: &str) -> Option<&[String]> {
        self.by_source.get(source).map(Vec::as_slice)
    }

    /// Source notebooks, in lexical order
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.by_source.keys().map(String::as_str)
    }

    /// All indexed symbols with their sources, sorted by symbol name
    pub fn symbols(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .raw
            .index
            .iter()
            .map(|(symbol, source)| (symbol.as_str(), source.as_str()))
            .collect();
        entries.sort();
        entries
    }

    /// Generated module files, in export order
    pub fn modules(&self) -> &[String] {
        &self.raw.modules
    }

    pub fn doc_url(&self) -> &str {
        &self.raw.doc_url
    }

    pub fn git_url(&self) -> &str {
        &self.raw.git_url
    }

    /// Number of indexed symbols
    pub fn len(&self) -> usize {
        self.raw.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.index.is_empty()
    }

    /// Generated module corresponding to a source notebook
    ///
    /// `00_functions.ipynb` maps to `functions.py`, provided that module
    /// was actually exported.
    pub fn module_for(&self, source: &str) -> Option<&str> {
        let page = doc_page(source);
        self.raw
            .modules
            .iter()
            .map(String::as_str)
            .find(|module| module.strip_suffix(".py") == Some(page))
    }

    /// Documentation page URL for an exported symbol
    pub fn doc_link(&self, name: &str) -> Option<String> {
        self.doc_link_from(&self.raw.doc_url, name)
    }

    /// Documentation page URL for a symbol, against an explicit base URL
    ///
    /// Custom cross-references win over the default scheme when present.
    pub fn doc_link_from(&self, base: &str, name: &str) -> Option<String> {
        if let Some(link) = custom_doc_links(name) {
            return Some(link);
        }
        let source = self.source_of(name)?;
        Some(format!("{}{}#{}", base, doc_page(source), name))
    }

    /// Repository URL of the generated module defining a symbol
    pub fn source_link(&self, name: &str) -> Option<String> {
        self.source_link_from(&self.raw.git_url, name)
    }

    /// Repository URL of a symbol's module, against an explicit base URL
    pub fn source_link_from(&self, base: &str, name: &str) -> Option<String> {
        let source = self.source_of(name)?;
        let module = self.module_for(source)?;
        Some(format!("{}drsa/{}", base, module))
    }

    /// Search for symbols by partial name match
    pub fn search(&self, query: &str) -> Vec<(&str, &str)> {
        let query_lower = query.to_lowercase();
        self.symbols()
            .into_iter()
            .filter(|(symbol, _)| symbol.to_lowercase().contains(&query_lower))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SymbolIndex {
        let mut index = HashMap::new();
        index.insert(
            "survival_rate".to_string(),
            "00_functions.ipynb".to_string(),
        );
        index.insert(
            "event_rate_loss".to_string(),
            "00_functions.ipynb".to_string(),
        );
        index.insert("DRSA".to_string(), "01_model.ipynb".to_string());

        SymbolIndex::build(NotebookIndex {
            index,
            modules: vec!["functions.py".to_string(), "model.py".to_string()],
            doc_url: "https://example.org/drsa/".to_string(),
            git_url: "https://example.org/repo/".to_string(),
        })
    }

    #[test]
    fn test_custom_doc_links_always_none() {
        assert_eq!(custom_doc_links("survival_rate"), None);
        assert_eq!(custom_doc_links(""), None);
        assert_eq!(custom_doc_links("no_such_symbol"), None);
        assert_eq!(custom_doc_links("λ-calculus"), None);
        // Repeated calls agree
        assert_eq!(custom_doc_links("DRSA"), custom_doc_links("DRSA"));
    }

    #[test]
    fn test_doc_page() {
        assert_eq!(doc_page("00_functions.ipynb"), "functions");
        assert_eq!(doc_page("01_model.ipynb"), "model");
        assert_eq!(doc_page("index.ipynb"), "index");
        assert_eq!(doc_page("my_notebook.ipynb"), "my_notebook");
    }

    #[test]
    fn test_source_lookup() {
        let index = sample();
        assert_eq!(index.source_of("survival_rate"), Some("00_functions.ipynb"));
        assert_eq!(index.source_of("DRSA"), Some("01_model.ipynb"));
        assert_eq!(index.source_of("missing"), None);
    }

    #[test]
    fn test_symbols_grouped_by_source() {
        let index = sample();

        let functions = index.symbols_in("00_functions.ipynb").unwrap();
        assert_eq!(functions, ["event_rate_loss", "survival_rate"]);

        let model = index.symbols_in("01_model.ipynb").unwrap();
        assert_eq!(model, ["DRSA"]);

        assert!(index.symbols_in("02_other.ipynb").is_none());

        // Every indexed symbol lands in exactly one group
        let grouped: usize = index.by_source.values().map(Vec::len).sum();
        assert_eq!(grouped, index.len());
    }

    #[test]
    fn test_module_for() {
        let index = sample();
        assert_eq!(index.module_for("00_functions.ipynb"), Some("functions.py"));
        assert_eq!(index.module_for("01_model.ipynb"), Some("model.py"));
        assert_eq!(index.module_for("02_other.ipynb"), None);
    }

    #[test]
    fn test_doc_link_default_scheme() {
        let index = sample();
        assert_eq!(
            index.doc_link("survival_rate").as_deref(),
            Some("https://example.org/drsa/functions#survival_rate")
        );
        assert_eq!(
            index.doc_link("DRSA").as_deref(),
            Some("https://example.org/drsa/model#DRSA")
        );
        assert_eq!(index.doc_link("missing"), None);
    }

    #[test]
    fn test_doc_link_with_override_base() {
        let index = sample();
        assert_eq!(
            index
                .doc_link_from("http://localhost:8000/", "survival_rate")
                .as_deref(),
            Some("http://localhost:8000/functions#survival_rate")
        );
    }

    #[test]
    fn test_source_link() {
        let index = sample();
        assert_eq!(
            index.source_link("event_rate_loss").as_deref(),
            Some("https://example.org/repo/drsa/functions.py")
        );
        assert_eq!(index.source_link("missing"), None);
    }

    #[test]
    fn test_search() {
        let index = sample();

        let rates = index.search("rate");
        assert_eq!(rates.len(), 2);
        assert_eq!(rates[0].0, "event_rate_loss");
        assert_eq!(rates[1].0, "survival_rate");

        // Case-insensitive
        assert_eq!(index.search("drsa").len(), 1);
        assert!(index.search("xyzzy").is_empty());
    }
}
