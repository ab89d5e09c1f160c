use anyhow::Context;
use campaign_gen::core::export;
use campaign_gen::utils::{logger, validation::Validate};
use campaign_gen::{CampaignGenerator, Exporter, LocalStorage, RequestSource, TomlConfig};
use clap::Parser;

#[derive(Parser)]
#[command(name = "toml-campaign")]
#[command(about = "Generate a campaign from a TOML campaign file")]
struct Args {
    /// Path to TOML campaign file
    #[arg(short, long, default_value = "campaign.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override output format from config (text, config, json, csv)
    #[arg(long)]
    format: Option<String>,

    /// Dry run - show the configuration summary without generating
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("📁 Loading campaign from: {}", args.config);

    let config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("failed to load campaign file '{}'", args.config))?;

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // --format wins over [output] format
    let format = match &args.format {
        Some(name) => name.parse()?,
        None => config.output_format()?,
    };

    let generator = CampaignGenerator::with_settings(config.estimator_settings());
    if args.dry_run || args.verbose {
        display_config_summary(&config, &generator, &args);
    }

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing generated");
        return Ok(());
    }

    let request = config.campaign_request()?;

    let result = match generator.generate(&request) {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(
                "❌ Campaign generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    match config.output_path() {
        Some(dir) => {
            let path = Exporter::new(LocalStorage::new(dir.to_string()))
                .export(&result, format)
                .context("failed to write campaign export")?;
            println!("✅ Campaign generated");
            println!("📁 Output saved to: {}", path);
        }
        None => print!("{}", export::render(&result, format)?),
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, generator: &CampaignGenerator, args: &Args) {
    let settings = generator.settings();
    println!("📋 Campaign Summary:");
    println!("  Campaign: {}", config.campaign.name);
    println!(
        "  Industry: {} / {}",
        config.campaign.industry, config.campaign.product
    );
    println!("  Region: {}", config.campaign.region);
    println!("  Daily budget: {}€", config.campaign.daily_budget);
    println!(
        "  Projection: {} days at base CPC {:.2}€",
        settings.projection_days, settings.base_cpc
    );
    println!("  Output: {}", config.output_path().unwrap_or("stdout"));

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}
