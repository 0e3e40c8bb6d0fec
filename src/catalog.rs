//! Static knowledge base: flagged terms, Blade directives and the variables
//! every Laravel view can reach.

use tower_lsp::lsp_types::DiagnosticSeverity;

pub const DISFAVORED_EDITOR: &str = "VS Code";
pub const FAVORED_EDITOR: &str = "Neovim";
pub const CENSORED_EDITOR: &str = "VS C*de";

const COMMON_SENSE: &str = "Common Sense";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlaggedTerm {
    pub term: &'static str,
    pub severity: DiagnosticSeverity,
    pub source: &'static str,
    pub message: &'static str,
}

pub static FLAGGED_TERMS: &[FlaggedTerm] = &[
    FlaggedTerm {
        term: DISFAVORED_EDITOR,
        severity: DiagnosticSeverity::ERROR,
        source: COMMON_SENSE,
        message: "Please make sure we use good language in this video",
    },
    FlaggedTerm {
        term: FAVORED_EDITOR,
        severity: DiagnosticSeverity::INFORMATION,
        source: COMMON_SENSE,
        message: "Great choice :)",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectiveDescriptor {
    pub label: &'static str,
    pub detail: &'static str,
    pub documentation: &'static str,
}

const fn directive(
    label: &'static str,
    detail: &'static str,
    documentation: &'static str,
) -> DirectiveDescriptor {
    DirectiveDescriptor {
        label,
        detail,
        documentation,
    }
}

pub static DIRECTIVES: &[DirectiveDescriptor] = &[
    directive(
        "@if",
        "Blade conditional directive",
        "Conditional statement: @if($condition) ... @endif",
    ),
    directive(
        "@foreach",
        "Blade loop directive",
        "Loop through arrays: @foreach($items as $item) ... @endforeach",
    ),
    directive(
        "@for",
        "Blade for loop directive",
        "For loop: @for($i = 0; $i < 10; $i++) ... @endfor",
    ),
    directive(
        "@while",
        "Blade while loop directive",
        "While loop: @while($condition) ... @endwhile",
    ),
    directive(
        "@extends",
        "Blade template inheritance",
        "Extend a parent template: @extends('layouts.app')",
    ),
    directive(
        "@section",
        "Blade template section",
        "Define a section: @section('content') ... @endsection",
    ),
    directive(
        "@yield",
        "Blade template yield",
        "Output a section: @yield('content')",
    ),
    directive(
        "@include",
        "Blade template include",
        "Include another template: @include('partials.header')",
    ),
    directive(
        "@csrf",
        "Laravel CSRF token",
        "Generate CSRF token field for forms",
    ),
    directive(
        "@method",
        "Laravel HTTP method spoofing",
        "Spoof HTTP methods: @method('PUT')",
    ),
    directive(
        "@auth",
        "Laravel authentication check",
        "Check if user is authenticated: @auth ... @endauth",
    ),
    directive(
        "@guest",
        "Laravel guest check",
        "Check if user is guest: @guest ... @endguest",
    ),
    directive(
        "@can",
        "Laravel authorization check",
        "Check user permissions: @can('update', $post) ... @endcan",
    ),
    directive(
        "@error",
        "Laravel validation error",
        "Display validation errors: @error('field') ... @enderror",
    ),
    directive(
        "@empty",
        "Blade empty check",
        "Check if variable is empty: @empty($variable) ... @endempty",
    ),
    directive(
        "@isset",
        "Blade isset check",
        "Check if variable is set: @isset($variable) ... @endisset",
    ),
    directive(
        "@switch",
        "Blade switch statement",
        "Switch statement: @switch($variable) @case(1) ... @endswitch",
    ),
    directive("@php", "Blade PHP block", "Raw PHP code: @php ... @endphp"),
    directive("@json", "Blade JSON output", "Output JSON: @json($array)"),
    directive(
        "@component",
        "Blade component",
        "Use a component: @component('alert') ... @endcomponent",
    ),
];

/// Variables Laravel shares with every view.
pub static COMMON_VARIABLES: &[&str] =
    &["user", "errors", "request", "session", "config", "app", "auth"];
