//! Request handling over the document store.
//!
//! `Analysis` is the single entry point the server talks to. Every method is
//! total: unknown URIs read as empty text and out-of-range positions degrade
//! to a default answer.

mod code_actions;
mod completion;
mod diagnostics;
mod navigation;

pub use completion::CompletionContext;

use tower_lsp::lsp_types::{
    CodeActionOrCommand, CompletionItem, Diagnostic, Hover, Location, Position, Url,
};

use crate::document::DocumentStore;

#[derive(Debug, Default)]
pub struct Analysis {
    documents: DocumentStore,
}

impl Analysis {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn documents(&self) -> &DocumentStore {
        &self.documents
    }

    /// Stores a newly opened document and returns its diagnostics.
    pub fn open(&self, uri: Url, text: String) -> Vec<Diagnostic> {
        let diagnostics = diagnostics::for_text(&text);
        self.documents.insert(uri, text);
        diagnostics
    }

    /// Replaces a document's text and returns its diagnostics.
    pub fn update(&self, uri: Url, text: String) -> Vec<Diagnostic> {
        self.open(uri, text)
    }

    pub fn get(&self, uri: &Url) -> String {
        self.documents.get(uri)
    }

    pub fn diagnostics(&self, uri: &Url) -> Vec<Diagnostic> {
        diagnostics::for_text(&self.documents.get(uri))
    }

    pub fn hover(&self, uri: &Url, position: Position) -> Hover {
        navigation::hover(uri, &self.documents.get(uri), position)
    }

    pub fn definition(&self, uri: &Url, position: Position) -> Location {
        navigation::definition(uri, position)
    }

    pub fn code_actions(&self, uri: &Url) -> Vec<CodeActionOrCommand> {
        code_actions::for_text(uri, &self.documents.get(uri))
    }

    pub fn completion(&self, uri: &Url, position: Position) -> Vec<CompletionItem> {
        completion::items(&self.documents.get(uri), position)
    }
}
