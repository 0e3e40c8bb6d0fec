use blade_lsp::Analysis;
use blade_lsp::catalog::{COMMON_VARIABLES, DIRECTIVES};
use blade_lsp::facts::extract_variables;
use tower_lsp::lsp_types::{CompletionItemKind, Position, Url};

fn uri() -> Url {
    Url::parse("file:///resources/views/posts/index.blade.php").unwrap()
}

fn labels(items: &[tower_lsp::lsp_types::CompletionItem]) -> Vec<&str> {
    items.iter().map(|item| item.label.as_str()).collect()
}

#[test]
fn variable_extraction_covers_all_rules() {
    let mut vars = extract_variables("{{ $foo }} @foreach($items as $item) @if($bar) {{ $baz }}");
    vars.sort();
    assert_eq!(vars, vec!["bar", "baz", "foo", "item", "items"]);
}

#[test]
fn variable_context_lists_declared_then_common() {
    let analysis = Analysis::new();
    let text = "@foreach($posts as $post)\n  {{ $";
    analysis.open(uri(), text.to_string());

    let items = analysis.completion(&uri(), Position::new(1, 6));
    assert_eq!(items.len(), extract_variables(text).len() + COMMON_VARIABLES.len());
    assert_eq!(items.len(), 2 + 7);
    assert!(
        items
            .iter()
            .all(|item| item.kind == Some(CompletionItemKind::VARIABLE))
    );
    assert_eq!(&labels(&items)[2..], COMMON_VARIABLES);
}

#[test]
fn overlapping_names_are_not_deduplicated() {
    let analysis = Analysis::new();
    analysis.open(uri(), "{{ $user->name }} {{ $".to_string());

    let items = analysis.completion(&uri(), Position::new(0, 22));
    assert_eq!(items.len(), 1 + COMMON_VARIABLES.len());
    assert_eq!(labels(&items).iter().filter(|l| **l == "user").count(), 2);
    assert_eq!(items[0].detail.as_deref(), Some("Blade variable"));
    assert_eq!(items[1].detail.as_deref(), Some("Common Laravel variable"));
}

#[test]
fn directive_context_returns_whole_catalog() {
    let analysis = Analysis::new();
    analysis.open(uri(), "<div>\n  @for".to_string());

    let items = analysis.completion(&uri(), Position::new(1, 6));
    assert_eq!(items.len(), DIRECTIVES.len());
    insta::assert_snapshot!(
        labels(&items).join(" "),
        @"@if @foreach @for @while @extends @section @yield @include @csrf @method @auth @guest @can @error @empty @isset @switch @php @json @component"
    );
}

#[test]
fn variable_context_wins_on_mixed_line() {
    let analysis = Analysis::new();
    analysis.open(uri(), "@if($show) {{ $".to_string());

    let items = analysis.completion(&uri(), Position::new(0, 15));
    assert_eq!(labels(&items)[0], "show");
    assert_eq!(items.len(), 1 + COMMON_VARIABLES.len());
}

#[test]
fn out_of_range_positions_fall_back_to_directives() {
    let analysis = Analysis::new();
    analysis.open(uri(), "{{ $a }}".to_string());

    let past_line_end = analysis.completion(&uri(), Position::new(0, 40));
    let past_last_line = analysis.completion(&uri(), Position::new(3, 0));
    let plain = analysis.completion(&uri(), Position::new(0, 0));

    assert_eq!(past_line_end, plain);
    assert_eq!(past_last_line, plain);
    assert_eq!(labels(&plain).len(), DIRECTIVES.len());
}

#[test]
fn unknown_document_completes_directives() {
    let analysis = Analysis::new();
    let items = analysis.completion(&uri(), Position::new(0, 0));
    assert_eq!(items.len(), DIRECTIVES.len());
}
