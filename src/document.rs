use dashmap::DashMap;
use tower_lsp::lsp_types::Url;

/// Full text of every document the client has opened, keyed by URI.
///
/// Writes replace the whole entry while holding the shard lock, so readers see
/// either the previous text or the new one.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: DashMap<Url, String>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, uri: Url, text: String) {
        self.documents.insert(uri, text);
    }

    /// Current text, or an empty string for a URI that was never opened.
    pub fn get(&self, uri: &Url) -> String {
        self.documents
            .get(uri)
            .map(|text| text.value().clone())
            .unwrap_or_default()
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.documents.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri(name: &str) -> Url {
        Url::parse(&format!("file:///views/{name}")).unwrap()
    }

    #[test]
    fn unknown_uri_is_empty() {
        let store = DocumentStore::new();
        assert_eq!(store.get(&uri("missing.blade.php")), "");
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn insert_replaces_whole_text() {
        let store = DocumentStore::new();
        let key = uri("a.blade.php");
        store.insert(key.clone(), "first version".to_string());
        store.insert(key.clone(), "second".to_string());
        assert_eq!(store.get(&key), "second");
        assert_eq!(store.len(), 1);
    }
}
