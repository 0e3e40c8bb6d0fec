use tower_lsp::lsp_types::{
    CompletionItem, CompletionItemKind, Documentation, InsertTextFormat, Position,
};

use crate::catalog::{COMMON_VARIABLES, DIRECTIVES, DirectiveDescriptor};
use crate::facts;
use crate::span::byte_offset;

const VARIABLE_TRIGGER: &str = "{{ $";
const DIRECTIVE_TRIGGER: char = '@';

/// What the text before the cursor asks for. Variable context wins over
/// directive context when a line contains both triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionContext {
    Variable,
    Directive,
    Default,
}

impl CompletionContext {
    pub fn classify(text: &str, position: Position) -> Self {
        let Some(line) = text.split('\n').nth(position.line as usize) else {
            return CompletionContext::Default;
        };
        let Some(end) = byte_offset(line, position.character) else {
            return CompletionContext::Default;
        };
        let prefix = &line[..end];

        if prefix.contains(VARIABLE_TRIGGER) {
            CompletionContext::Variable
        } else if prefix.contains(DIRECTIVE_TRIGGER) {
            CompletionContext::Directive
        } else {
            CompletionContext::Default
        }
    }
}

pub(super) fn items(text: &str, position: Position) -> Vec<CompletionItem> {
    match CompletionContext::classify(text, position) {
        CompletionContext::Variable => variable_items(text),
        CompletionContext::Directive | CompletionContext::Default => directive_items(),
    }
}

/// Variables found in the document followed by the common Laravel ones. The
/// two groups are not deduplicated against each other.
fn variable_items(text: &str) -> Vec<CompletionItem> {
    let declared = facts::extract_variables(text)
        .into_iter()
        .map(|name| {
            let documentation = format!("Variable: ${name}");
            variable_item(name, "Blade variable", documentation)
        });

    let common = COMMON_VARIABLES.iter().map(|name| {
        variable_item(
            name.to_string(),
            "Common Laravel variable",
            format!("Common Laravel variable: ${name}"),
        )
    });

    declared.chain(common).collect()
}

fn variable_item(name: String, detail: &str, documentation: String) -> CompletionItem {
    CompletionItem {
        label: name.clone(),
        kind: Some(CompletionItemKind::VARIABLE),
        detail: Some(detail.to_string()),
        documentation: Some(Documentation::String(documentation)),
        insert_text: Some(name),
        insert_text_format: Some(InsertTextFormat::PLAIN_TEXT),
        ..Default::default()
    }
}

fn directive_items() -> Vec<CompletionItem> {
    DIRECTIVES.iter().map(directive_item).collect()
}

fn directive_item(directive: &DirectiveDescriptor) -> CompletionItem {
    CompletionItem {
        label: directive.label.to_string(),
        detail: Some(directive.detail.to_string()),
        documentation: Some(Documentation::String(directive.documentation.to_string())),
        ..Default::default()
    }
}
