use tower_lsp::lsp_types::Diagnostic;

use crate::facts::{self, Finding};

pub(super) fn for_text(text: &str) -> Vec<Diagnostic> {
    facts::flagged_terms(text).iter().map(to_diagnostic).collect()
}

fn to_diagnostic(finding: &Finding) -> Diagnostic {
    Diagnostic {
        range: finding.span.to_range(),
        severity: Some(finding.term.severity),
        code: None,
        code_description: None,
        source: Some(finding.term.source.to_string()),
        message: finding.term.message.to_string(),
        related_information: None,
        tags: None,
        data: None,
    }
}
