//! Pattern-based fact extraction over raw template text.
//!
//! Nothing here parses Blade. Flagged terms are found with a literal
//! substring search per line; variables are scraped from three regex rules
//! applied to the whole document.

use std::collections::BTreeSet;

use memchr::memmem;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::{FLAGGED_TERMS, FlaggedTerm};
use crate::span::{TextSpan, utf16_col, utf16_len};

// Word and space classes are ASCII-only: `{{ $café }}` declares `caf`, and a
// non-breaking space does not separate tokens.
static INTERPOLATION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{[\t\n\f\r ]*\$([0-9A-Za-z_]+)").unwrap());

static FOREACH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"@foreach[\t\n\f\r ]*\([\t\n\f\r ]*\$([0-9A-Za-z_]+)[\t\n\f\r ]+as[\t\n\f\r ]+\$([0-9A-Za-z_]+)[\t\n\f\r ]*\)",
    )
    .unwrap()
});

static IF_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@if[\t\n\f\r ]*\([\t\n\f\r ]*\$([0-9A-Za-z_]+)").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Finding {
    pub term: &'static FlaggedTerm,
    pub span: TextSpan,
}

/// Scans every line for every flagged term.
///
/// Only the first occurrence of a term on a line is reported. Findings come
/// out ordered by line, then by catalog order.
pub fn flagged_terms(text: &str) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (row, line) in text.split('\n').enumerate() {
        for term in FLAGGED_TERMS {
            if let Some(idx) = memmem::find(line.as_bytes(), term.term.as_bytes()) {
                let start = utf16_col(line, idx);
                findings.push(Finding {
                    term,
                    span: TextSpan::new(row as u32, start, start + utf16_len(term.term)),
                });
            }
        }
    }
    findings
}

/// Findings for one specific term.
pub fn occurrences<'a>(text: &'a str, term: &'a str) -> impl Iterator<Item = Finding> + 'a {
    flagged_terms(text)
        .into_iter()
        .filter(move |finding| finding.term.term == term)
}

/// Variable names declared through interpolation, `@foreach` or `@if`.
///
/// The result is deduplicated. It happens to be sorted, but callers should
/// treat it as a set.
pub fn extract_variables(text: &str) -> Vec<String> {
    let mut variables = BTreeSet::new();

    for caps in INTERPOLATION_REGEX.captures_iter(text) {
        variables.insert(caps[1].to_string());
    }

    for caps in FOREACH_REGEX.captures_iter(text) {
        variables.insert(caps[1].to_string());
        variables.insert(caps[2].to_string());
    }

    for caps in IF_REGEX.captures_iter(text) {
        variables.insert(caps[1].to_string());
    }

    variables.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DISFAVORED_EDITOR, FAVORED_EDITOR};

    #[test]
    fn finds_first_occurrence_per_line() {
        let findings = flagged_terms("I use VS Code and VS Code again");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].term.term, DISFAVORED_EDITOR);
        assert_eq!(findings[0].span, TextSpan::new(0, 6, 13));
    }

    #[test]
    fn distinct_terms_on_one_line() {
        let findings = flagged_terms("Neovim beats VS Code");
        assert_eq!(findings.len(), 2);
        // Catalog order, not column order.
        assert_eq!(findings[0].term.term, DISFAVORED_EDITOR);
        assert_eq!(findings[0].span, TextSpan::new(0, 13, 20));
        assert_eq!(findings[1].term.term, FAVORED_EDITOR);
        assert_eq!(findings[1].span, TextSpan::new(0, 0, 6));
    }

    #[test]
    fn search_is_case_sensitive() {
        assert!(flagged_terms("vs code\nneovim").is_empty());
    }

    #[test]
    fn rows_are_zero_indexed() {
        let findings = flagged_terms("first\n\n  Neovim");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].span, TextSpan::new(2, 2, 8));
    }

    #[test]
    fn columns_count_utf16_units() {
        let findings = flagged_terms("é Neovim");
        assert_eq!(findings[0].span, TextSpan::new(0, 2, 8));
    }

    #[test]
    fn occurrences_filter_by_term() {
        let text = "VS Code\nNeovim\nVS Code";
        let lines: Vec<u32> = occurrences(text, DISFAVORED_EDITOR)
            .map(|f| f.span.line)
            .collect();
        assert_eq!(lines, vec![0, 2]);
    }

    #[test]
    fn extracts_every_rule() {
        let vars = extract_variables("{{ $foo }} @foreach($items as $item) @if($bar) {{ $baz }}");
        assert_eq!(vars, vec!["bar", "baz", "foo", "item", "items"]);
    }

    #[test]
    fn interpolation_whitespace_is_optional() {
        assert_eq!(extract_variables("{{$a}}{{   $b}}"), vec!["a", "b"]);
    }

    #[test]
    fn foreach_needs_both_bindings() {
        assert!(extract_variables("@foreach($items)").is_empty());
        assert_eq!(
            extract_variables("@foreach ( $posts  as  $post )"),
            vec!["post", "posts"]
        );
    }

    #[test]
    fn duplicates_collapse() {
        assert_eq!(
            extract_variables("{{ $x }} {{ $x }} @if($x)"),
            vec!["x"]
        );
    }

    #[test]
    fn identifiers_stop_at_non_ascii() {
        assert_eq!(extract_variables("{{ $café }}"), vec!["caf"]);
        assert_eq!(extract_variables("@foreach($élèves as $x)"), Vec::<String>::new());
    }

    #[test]
    fn non_ascii_whitespace_is_not_a_separator() {
        assert!(extract_variables("{{\u{a0}$x }}").is_empty());
        assert!(extract_variables("@if(\u{2003}$x)").is_empty());
        assert_eq!(extract_variables("{{\t$x }}"), vec!["x"]);
    }

    #[test]
    fn empty_text_has_no_facts() {
        assert!(flagged_terms("").is_empty());
        assert!(extract_variables("").is_empty());
    }
}
