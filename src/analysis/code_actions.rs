use std::collections::HashMap;

use tower_lsp::lsp_types::{
    CodeAction, CodeActionKind, CodeActionOrCommand, TextEdit, Url, WorkspaceEdit,
};

use crate::catalog::{CENSORED_EDITOR, DISFAVORED_EDITOR, FAVORED_EDITOR};
use crate::facts;
use crate::span::TextSpan;

/// Two alternative fixes for every disfavored-editor finding: swap in the
/// favored editor, or censor the name.
pub(super) fn for_text(uri: &Url, text: &str) -> Vec<CodeActionOrCommand> {
    let mut actions = Vec::new();
    for finding in facts::occurrences(text, DISFAVORED_EDITOR) {
        actions.push(replace_action(
            uri,
            finding.span,
            format!("Replace {CENSORED_EDITOR} with a superior editor"),
            FAVORED_EDITOR,
        ));
        actions.push(replace_action(
            uri,
            finding.span,
            format!("Censor to {CENSORED_EDITOR}"),
            CENSORED_EDITOR,
        ));
    }
    actions
}

fn replace_action(uri: &Url, span: TextSpan, title: String, new_text: &str) -> CodeActionOrCommand {
    let mut changes = HashMap::new();
    changes.insert(
        uri.clone(),
        vec![TextEdit {
            range: span.to_range(),
            new_text: new_text.to_string(),
        }],
    );

    CodeActionOrCommand::CodeAction(CodeAction {
        title,
        kind: Some(CodeActionKind::QUICKFIX),
        diagnostics: None,
        edit: Some(WorkspaceEdit {
            changes: Some(changes),
            document_changes: None,
            change_annotations: None,
        }),
        command: None,
        is_preferred: None,
        disabled: None,
        data: None,
    })
}
