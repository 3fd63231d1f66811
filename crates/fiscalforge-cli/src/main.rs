use std::io::{self, Write};

use clap::Parser;
use fiscalforge_generate::{
    DocumentGenerator, GenerateOption, GenerationError, TemplateKind, with_blocked_placeholders,
    with_cnpj, with_cpf,
};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "fiscalforge", version, about = "Generates fake Brazilian fiscal documents")]
struct Cli {
    /// Document type to generate (CFe, NFe, NFCe, NFeDevolucao).
    #[arg(long = "type", value_name = "TYPE", default_value = "NFCe")]
    template: String,
    /// CPF used verbatim for every personal tax ID placeholder.
    #[arg(long)]
    cpf: Option<String>,
    /// CNPJ used verbatim for every company tax ID placeholder.
    #[arg(long)]
    cnpj: Option<String>,
    /// Comma-separated placeholders whose elements are removed, e.g.
    /// "retirada,entrega".
    #[arg(long = "block-tags", value_name = "TAGS")]
    block_tags: Option<String>,
    /// Seed for reproducible output; omit for a random document.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let kind: TemplateKind = cli.template.parse()?;
    let mut generator = match cli.seed {
        Some(seed) => DocumentGenerator::with_seed(kind, seed),
        None => DocumentGenerator::new(kind),
    };

    let mut options: Vec<GenerateOption> = Vec::new();
    if let Some(cpf) = cli.cpf {
        options.push(with_cpf(cpf));
    }
    if let Some(cnpj) = cli.cnpj {
        options.push(with_cnpj(cnpj));
    }
    if let Some(tags) = cli.block_tags {
        let tags: Vec<String> = tags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();
        if !tags.is_empty() {
            options.push(with_blocked_placeholders(tags));
        }
    }

    let document = generator.generate(options)?;
    info!(template = %kind, bytes = document.len(), "document generated");

    let mut stdout = io::stdout().lock();
    stdout.write_all(&document)?;
    stdout.write_all(b"\n")?;
    Ok(())
}
