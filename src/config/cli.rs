use crate::core::export::ExportFormat;
use crate::domain::model::{AgeRange, CampaignRequest, Objective, Tone};
use crate::domain::ports::RequestSource;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "campaign-gen")]
#[command(about = "Generate mock ad-campaign configurations and performance estimates")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Generate keywords, ad copy, targeting and estimates for one campaign
    Generate(GenerateArgs),
    /// List industries with their products and regions with their countries
    Catalog,
    /// List the showcase template library, or show one entry by name
    Templates {
        #[arg(long)]
        name: Option<String>,
    },
    /// Print the synthetic performance history and its totals
    History {
        /// Number of daily rows to print
        #[arg(long, default_value = "7")]
        days: usize,
    },
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub industry: String,

    #[arg(long)]
    pub product: String,

    #[arg(long, default_value = "Europe")]
    pub region: String,

    #[arg(long, default_value = "Lead generation")]
    pub objective: String,

    #[arg(long, default_value = "50")]
    pub daily_budget: f64,

    #[arg(long, default_value = "25-35")]
    pub age_range: String,

    #[arg(long, default_value = "Professional")]
    pub tone: String,

    #[arg(long, default_value = "text", help = "text, config, json or csv")]
    pub format: String,

    #[arg(long, help = "Write the result into this directory instead of stdout")]
    pub output: Option<String>,
}

impl GenerateArgs {
    pub fn export_format(&self) -> Result<ExportFormat> {
        self.format.parse()
    }
}

impl RequestSource for GenerateArgs {
    fn campaign_request(&self) -> Result<CampaignRequest> {
        Ok(CampaignRequest {
            name: self.name.clone(),
            industry: self.industry.clone(),
            product: self.product.clone(),
            region: self.region.clone(),
            objective: self.objective.parse::<Objective>()?,
            daily_budget: self.daily_budget,
            age_range: self.age_range.parse::<AgeRange>()?,
            tone: Tone::parse_or_default(&self.tone),
        })
    }
}

impl Validate for GenerateArgs {
    fn validate(&self) -> Result<()> {
        self.export_format()?;
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate_command() {
        let cli = CliConfig::try_parse_from([
            "campaign-gen",
            "generate",
            "--name",
            "Summer",
            "--industry",
            "Tourism",
            "--product",
            "Hospitality",
            "--tone",
            "Urgence",
            "--daily-budget",
            "120",
            "--verbose",
        ])
        .unwrap();

        assert!(cli.verbose);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        let request = args.campaign_request().unwrap();
        assert_eq!(request.tone, Tone::Urgency);
        assert_eq!(request.daily_budget, 120.0);
        assert_eq!(request.region, "Europe");
        assert_eq!(request.age_range, AgeRange::From25To35);
        assert_eq!(request.objective, Objective::LeadGeneration);
    }

    #[test]
    fn test_bad_age_range_is_rejected() {
        let cli = CliConfig::try_parse_from([
            "campaign-gen",
            "generate",
            "--name",
            "n",
            "--industry",
            "i",
            "--product",
            "p",
            "--age-range",
            "12-16",
        ])
        .unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert!(args.campaign_request().is_err());
    }

    #[test]
    fn test_unknown_format_fails_validation() {
        let cli = CliConfig::try_parse_from([
            "campaign-gen",
            "generate",
            "--name",
            "n",
            "--industry",
            "i",
            "--product",
            "p",
            "--format",
            "yaml",
        ])
        .unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_templates_lookup_by_name() {
        let cli = CliConfig::try_parse_from([
            "campaign-gen",
            "templates",
            "--name",
            "Professional Training - B2B",
        ])
        .unwrap();
        let Command::Templates { name } = cli.command else {
            panic!("expected templates");
        };
        assert_eq!(name.as_deref(), Some("Professional Training - B2B"));
    }

    #[test]
    fn test_history_default_days() {
        let cli = CliConfig::try_parse_from(["campaign-gen", "history"]).unwrap();
        assert!(matches!(cli.command, Command::History { days: 7 }));
    }
}
