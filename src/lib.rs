pub mod analysis;
pub mod catalog;
pub mod config;
pub mod document;
pub mod facts;
pub mod span;

pub use analysis::{Analysis, CompletionContext};
pub use span::TextSpan;
