use campaign_gen::core::export::{self, thousands};
use campaign_gen::core::history::{default_window, summarize, synthetic_history};
use campaign_gen::domain::catalog::{self, TemplateEntry, TEMPLATE_LIBRARY};
use campaign_gen::utils::error::ErrorSeverity;
use campaign_gen::utils::{logger, validation::Validate};
use campaign_gen::config::{Command, GenerateArgs};
use campaign_gen::{
    AgeRange, CampaignError, CampaignGenerator, CliConfig, Exporter, LocalStorage, Objective,
    RequestSource, Tone,
};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    let outcome = match &config.command {
        Command::Generate(args) => run_generate(args),
        Command::Catalog => {
            print_catalog();
            Ok(())
        }
        Command::Templates { name } => print_templates(name.as_deref()),
        Command::History { days } => {
            print_history(*days);
            Ok(())
        }
    };

    if let Err(e) = outcome {
        tracing::error!(
            "❌ Campaign generation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        // exit code follows severity
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run_generate(args: &GenerateArgs) -> Result<(), CampaignError> {
    args.validate()?;
    let format = args.export_format()?;
    let request = args.campaign_request()?;

    let result = CampaignGenerator::new().generate(&request)?;

    match &args.output {
        Some(dir) => {
            let exporter = Exporter::new(LocalStorage::new(dir.clone()));
            let path = exporter.export(&result, format)?;
            println!("✅ Campaign generated");
            println!("📁 Output saved to: {}", path);
        }
        None => print!("{}", export::render(&result, format)?),
    }

    Ok(())
}

fn print_catalog() {
    println!("🏢 Industries");
    for industry in catalog::industries() {
        let products = catalog::products_for(industry).unwrap_or_default();
        println!("  {}: {}", industry, products.join(", "));
    }
    println!();
    println!("🌍 Regions");
    for region in catalog::regions() {
        let countries = catalog::countries_for(region).unwrap_or_default();
        println!("  {}: {}", region, countries.join(", "));
    }
    println!();
    println!("🎨 Tones: {}", Tone::ALL.map(|t| t.label()).join(", "));
    println!("👥 Age ranges: {}", AgeRange::ALL.map(|a| a.label()).join(", "));
    println!("🎯 Objectives: {}", Objective::ALL.map(|o| o.label()).join(", "));
}

fn print_templates(name: Option<&str>) -> Result<(), CampaignError> {
    let entries: Vec<&TemplateEntry> = match name {
        Some(name) => vec![catalog::find_template(name).ok_or_else(|| {
            CampaignError::validation("name", format!("no template named '{}'", name))
        })?],
        None => TEMPLATE_LIBRARY.iter().collect(),
    };

    println!("📚 Template library");
    for template in entries {
        println!();
        println!("  {} [{}]", template.name, template.performance);
        println!("  {}", template.description);
        println!("  Industry: {}", template.industry);
    }
    Ok(())
}

fn print_history(days: usize) {
    let (start, end) = default_window();
    let rows = synthetic_history(start, end);
    let summary = summarize(&rows);

    println!("📊 Performance history {} → {}", start, end);
    println!("  Total impressions: {}", thousands(summary.impressions));
    println!("  Total clicks: {}", thousands(summary.clicks));
    println!("  Conversions: {}", summary.conversions);
    println!("  Total cost: {:.0}€", summary.cost);
    println!();
    println!("  date        impressions  clicks  conversions  cost");
    for row in rows.iter().take(days) {
        println!(
            "  {}  {:>11}  {:>6}  {:>11}  {:>6.2}",
            row.date, row.impressions, row.clicks, row.conversions, row.cost
        );
    }
}
