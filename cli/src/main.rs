//! CLI entrypoint for arcana
//!
//! This is the main binary that wires together all layers using
//! dependency injection. It owns the model catalogue cache and the
//! cancellation token that stops both the cache sweeper and any
//! in-flight request.

use anyhow::{Context, Result, bail};
use arcana_application::{
    InterpretInput, InterpretUseCase, ProviderCatalogSource, ResolveModelsUseCase, TtlCache,
};
use arcana_domain::{Clarification, CompositeModelId, ModelCatalog, PromptComposer, PromptContext};
use arcana_infrastructure::{
    ConfigIssue, ConfigLoader, EnvCredentials, FileConfig, GoogleProviderAdapter,
    JsonFileCatalogSource, OpenAiProviderAdapter, ProviderAdapter, RoutingGateway, Severity,
    StaticCatalogSource,
};
use arcana_presentation::{
    Cli, Command, ConsoleFormatter, OutputFormat, ProgressReporter, ReadArgs,
};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; RUST_LOG wins when set
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        bail!("No command given. Run `arcana --help` for usage.");
    };

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };
    report_config_issues(&config.validate())?;
    let behavior = config.to_behavior_config();

    info!("Starting arcana");

    // Prompt rendering needs no providers
    if let Command::Prompt { spread, cards } = &command {
        let prompt = PromptComposer::new(behavior.locale).compose(spread.as_deref(), *cards);
        match cli.output {
            OutputFormat::Text => println!("{}", ConsoleFormatter::format_prompt(&prompt)),
            OutputFormat::Json => println!("{}", prompt.template),
        }
        return Ok(ExitCode::SUCCESS);
    }

    // === Dependency Injection ===
    let shutdown = CancellationToken::new();
    spawn_interrupt_handler(shutdown.clone());

    let cache: TtlCache<ModelCatalog> = TtlCache::new(config.cache.ttl(), config.cache.max_size);
    let sweeper = cache.spawn_sweeper(config.cache.sweep_interval(), shutdown.clone());

    let credentials = Arc::new(EnvCredentials::from_config(&config.credentials));
    let resolver = ResolveModelsUseCase::new(catalog_source(&config), credentials.clone(), cache)
        .with_ttl(behavior.catalog_ttl);

    let exit = match command {
        Command::Models => {
            let catalog = resolver.execute().await;
            match cli.output {
                OutputFormat::Text => println!("{}", ConsoleFormatter::format_catalog(&catalog)),
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_catalog_json(&catalog)),
            }
            ExitCode::SUCCESS
        }
        Command::Read(args) => {
            let gateway = Arc::new(build_gateway(&config, &credentials));
            let use_case = InterpretUseCase::new(resolver, gateway, behavior)
                .with_cancellation(shutdown.clone());
            run_read(&use_case, args, cli.output, cli.quiet).await?
        }
        Command::Prompt { .. } => ExitCode::SUCCESS,
    };

    shutdown.cancel();
    if let Err(e) = sweeper.await {
        warn!("Cache sweeper ended abnormally: {}", e);
    }

    Ok(exit)
}

async fn run_read(
    use_case: &InterpretUseCase,
    args: ReadArgs,
    format: OutputFormat,
    quiet: bool,
) -> Result<ExitCode> {
    let mut context = PromptContext::new(args.question, args.cards);
    if let Some(spread) = args.spread {
        context = context.with_spread(spread);
    }
    for raw in &args.clarifications {
        let clarification: Clarification = raw
            .parse()
            .with_context(|| format!("Invalid --clarify value '{}'", raw))?;
        context = context.with_clarification(clarification);
    }
    if let Some(extra) = args.extra {
        context = context.with_extra(extra);
    }
    if let Some(profile) = args.profile {
        context = context.with_profile(profile);
    }

    let mut input = InterpretInput::new(context).as_guest(args.guest);
    if let Some(model) = &args.model {
        let id: CompositeModelId = model
            .parse()
            .with_context(|| format!("Invalid --model value '{}'", model))?;
        input = input.with_model(id);
    }

    // Execute with or without progress reporting
    let output = if quiet || format == OutputFormat::Json {
        use_case.execute(input).await
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await
    };

    match format {
        OutputFormat::Text => println!("{}", ConsoleFormatter::format_interpretation(&output)),
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_interpretation_json(&output)),
    }

    Ok(if output.interpretation.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Log every issue; refuse to continue when any is an error.
fn report_config_issues(issues: &[ConfigIssue]) -> Result<()> {
    for issue in issues {
        match issue.severity {
            Severity::Error => error!("{}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }
    if issues.iter().any(ConfigIssue::is_error) {
        bail!("Configuration is invalid ({} issue(s))", issues.len());
    }
    Ok(())
}

fn catalog_source(config: &FileConfig) -> Arc<dyn ProviderCatalogSource> {
    match &config.catalog_file {
        Some(path) => {
            info!(path = %path.display(), "Using provider catalogue file");
            Arc::new(JsonFileCatalogSource::new(path))
        }
        None => Arc::new(StaticCatalogSource::from_config(config)),
    }
}

/// Register an adapter for every vendor whose API key is present.
fn build_gateway(config: &FileConfig, credentials: &EnvCredentials) -> RoutingGateway {
    let mut adapters: Vec<Arc<dyn ProviderAdapter>> = Vec::new();

    if let Some(google) = GoogleProviderAdapter::try_new(credentials, &config.gateway.google_base_url)
    {
        adapters.push(Arc::new(google));
    }
    if let Some(openai) = OpenAiProviderAdapter::try_new(credentials, &config.gateway.openai_base_url)
    {
        adapters.push(Arc::new(openai));
    }

    let gateway = RoutingGateway::new(adapters);
    if gateway.is_empty() {
        warn!("No provider API key found; readings will fail until one is set");
    } else {
        info!(providers = ?gateway.provider_ids(), "Inference gateway ready");
    }
    gateway
}

fn spawn_interrupt_handler(token: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling");
            token.cancel();
        }
    });
}
