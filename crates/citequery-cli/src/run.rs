//! Query command

use anyhow::Result;
use citequery_core::config::{api_key_from_env, base_url_from_env};
use citequery_core::providers::validate_pdf_paths;
use citequery_core::{
    answer_with_citations, Config, HttpEmbedder, HttpSynthesizer, LLMServiceConfig, OpenAIClient,
    PDFProvider, QueryRequest,
};
use std::sync::Arc;

use crate::app::Cli;
use crate::output::{format_outcome, FormatOptions};
use crate::progress::stderr_reporter;

pub async fn run(cli: Cli) -> Result<()> {
    // Nothing is read or sent without a credential
    let api_key = api_key_from_env()?;

    let options = cli.query_options();
    options.validate()?;
    let pdfs = validate_pdf_paths(&cli.pdf)?;

    let file_config = Config::load()?;
    let service = LLMServiceConfig::from_sources(
        &cli.service_overrides(),
        &file_config,
        base_url_from_env(),
        api_key,
    )?;
    tracing::debug!(
        "Using {} (chat: {}, embeddings: {})",
        service.url,
        service.model,
        service.embedding_model
    );

    let client = Arc::new(OpenAIClient::new(service)?);
    let embedder = HttpEmbedder::new(client.clone());
    let synthesizer =
        HttpSynthesizer::new(client).with_max_context_chars(options.max_context_chars);
    let loader = PDFProvider::new();

    let request = QueryRequest {
        pdfs,
        query: cli.query.clone(),
        options,
    };
    let progress = if cli.quiet {
        None
    } else {
        Some(stderr_reporter())
    };

    let outcome =
        answer_with_citations(&request, &loader, &embedder, &synthesizer, progress).await?;

    let format_opts = FormatOptions {
        max_sources: cli.max_sources,
    };
    print!("{}", format_outcome(&outcome, cli.format, &format_opts)?);
    Ok(())
}
