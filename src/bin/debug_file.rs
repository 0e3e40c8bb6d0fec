use anyhow::Context;
use blade_lsp::Analysis;
use clap::Parser;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tower_lsp::lsp_types::{Diagnostic, Url};

#[derive(Parser)]
#[command(name = "debug_file")]
#[command(about = "Print the diagnostics and variables found in a Blade template", long_about = None)]
struct Cli {
    /// Template to analyse
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

#[derive(Serialize)]
struct Report {
    uri: Url,
    diagnostics: Vec<Diagnostic>,
    variables: Vec<String>,
}

fn report(file: &Path) -> anyhow::Result<Report> {
    let path = fs::canonicalize(file)
        .with_context(|| format!("Could not resolve {}", file.display()))?;
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Could not read {}", path.display()))?;
    let uri = Url::from_file_path(&path)
        .map_err(|_| anyhow::anyhow!("{} is not an absolute path", path.display()))?;

    let analysis = Analysis::new();
    let diagnostics = analysis.open(uri.clone(), text);
    let variables = blade_lsp::facts::extract_variables(&analysis.get(&uri));

    Ok(Report {
        uri,
        diagnostics,
        variables,
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let report = report(&cli.file)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
