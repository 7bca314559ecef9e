use clap::Parser;

use feedmerge::cli::{Cli, Commands};
use feedmerge::config::Config;
use feedmerge::errors::MergeResult;
use feedmerge::output::FeedWriter;
use feedmerge::services::GenerateService;
use feedmerge::sources::SourceRegistry;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> MergeResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize source registry
    let registry = SourceRegistry::load(config.sources_path.as_deref())?;

    match cli.command.unwrap_or(Commands::Generate {
        dry_run: false,
        output: None,
    }) {
        Commands::Generate { dry_run, output } => cmd_generate(&config, registry, dry_run, output),
        Commands::Sources => cmd_sources(registry),
    }
}

fn cmd_generate(
    config: &Config,
    registry: SourceRegistry,
    dry_run: bool,
    output: Option<String>,
) -> MergeResult<()> {
    println!("Starting feed generation...\n");

    let service = GenerateService::new(config, registry);
    let document = service.generate();

    let output_path = output.unwrap_or_else(|| config.output_path.clone());

    println!();

    if dry_run {
        println!(
            "[DRY RUN] Would write {} items to {}",
            document.items.len(),
            output_path
        );
        return Ok(());
    }

    // Any failure past the per-source loop is fatal
    let writer = FeedWriter::new(&output_path);
    writer.write(&document)?;

    println!("Feed updated successfully!");
    println!("Total items: {}", document.items.len());
    println!("Saved to: {}", output_path);

    Ok(())
}

fn cmd_sources(registry: SourceRegistry) -> MergeResult<()> {
    if registry.is_empty() {
        println!("No sources configured.");
        return Ok(());
    }

    println!("Configured sources:\n");
    for source in registry.iter() {
        println!("  {} [{}]", source.name, source.kind);
        println!("    URL: {}", source.url);
        println!();
    }

    Ok(())
}
