//! Command definitions and execution for the `moonsplit` binary.

use crate::config::MoonSplitConfig;
use crate::input::load_request;
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use moonsplit_calculator::roster::{DEMO_COMMON_AREA_M2, DEMO_TOTAL_RENT};
use moonsplit_calculator::{
    CachedDistributionEngine, DistributionEngine, DistributionResult, ExpenseList, Exporter,
    RoundingMode, SummaryProjector, TenantRoster, ValidationIssue, ValidationReport,
    demo_request,
};
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Split a shared flat's rent and expenses between its tenants
#[derive(Parser, Debug)]
#[command(name = "moonsplit")]
#[command(about = "MoOn Split rent distribution calculator")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (defaults to MOONSPLIT_CONFIG_PATH or moonsplit.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Compute the distribution for one or more request files (JSON or TOML)
    Split {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        #[arg(long, value_enum, default_value_t = RoundingArg::PerValue)]
        rounding: RoundingArg,

        /// Write the output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check a request file without printing the distribution
    Validate {
        file: PathBuf,

        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },

    /// Run the built-in demo household
    Demo {
        /// Number of demo tenants
        #[arg(short, long, default_value_t = 3)]
        tenants: usize,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        #[arg(long, value_enum, default_value_t = RoundingArg::PerValue)]
        rounding: RoundingArg,
    },

    /// Print the effective configuration as TOML
    Config,
}

impl Command {
    pub fn output_path(&self) -> Option<&PathBuf> {
        match self {
            Command::Split { output, .. } => output.as_ref(),
            _ => None,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    Csv,
    /// Fixed-width table
    Table,
    /// Full-precision result
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundingArg {
    /// Round each value on its own
    PerValue,
    /// Give leftover cents to the tenant with the largest area
    LargestShare,
}

impl From<RoundingArg> for RoundingMode {
    fn from(value: RoundingArg) -> Self {
        match value {
            RoundingArg::PerValue => RoundingMode::PerValue,
            RoundingArg::LargestShare => RoundingMode::LargestShareAbsorbs,
        }
    }
}

/// Rendered command output and whether the command succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

/// Runs commands against one engine so repeated requests share the cache.
pub struct Runner {
    config: MoonSplitConfig,
    engine: CachedDistributionEngine,
}

impl Runner {
    pub fn new(config: MoonSplitConfig) -> Result<Self> {
        let policy = config.policy.to_policy()?;
        let engine =
            CachedDistributionEngine::new(DistributionEngine::with_policy(policy), config.cache.capacity);
        Ok(Self { config, engine })
    }

    pub fn engine(&self) -> &CachedDistributionEngine {
        &self.engine
    }

    pub fn execute(&mut self, command: &Command) -> Result<CommandOutput> {
        let output = match command {
            Command::Split { files, format, rounding, .. } => {
                let mut sections = Vec::with_capacity(files.len());
                let mut success = true;
                for file in files {
                    let request = load_request(file)?;
                    let result = self.engine.compute(&request);
                    if !result.validation.is_valid {
                        warn!(file = %file.display(), errors = result.validation.errors.len(), "Request is invalid");
                        success = false;
                    }
                    sections.push(self.render(&result, request.common_area_m2, *format, *rounding)?);
                }
                CommandOutput { text: sections.join("\n"), success }
            }
            Command::Validate { file, strict } => {
                let request = load_request(file)?;
                let result = self.engine.compute(&request);
                let report = &result.validation;
                let success = report.is_valid && (!strict || report.warnings.is_empty());
                CommandOutput { text: describe_report(report, result.tenants.len()), success }
            }
            Command::Demo { tenants, format, rounding } => {
                let expenses = ExpenseList::new(demo_request().expenses);
                let request = TenantRoster::with_demo_tenants(*tenants).to_request(
                    DEMO_TOTAL_RENT,
                    DEMO_COMMON_AREA_M2,
                    &expenses,
                );
                let result = self.engine.compute(&request);
                CommandOutput {
                    text: self.render(&result, request.common_area_m2, *format, *rounding)?,
                    success: result.validation.is_valid,
                }
            }
            Command::Config => CommandOutput { text: self.config.to_toml_string()?, success: true },
        };

        let stats = self.engine.stats();
        debug!(hits = stats.hits, misses = stats.misses, size = stats.size, "Engine cache");
        info!(success = output.success, "Command finished");
        Ok(output)
    }

    /// Renders a result. Invalid results list their issues in every format
    /// except JSON, which always carries the full result.
    pub fn render(
        &self,
        result: &DistributionResult,
        common_area_m2: f64,
        format: OutputFormat,
        rounding: RoundingArg,
    ) -> Result<String> {
        let exporter = Exporter::new(self.config.currency.clone(), rounding.into());
        let text = match format {
            OutputFormat::Json => serde_json::to_string_pretty(result)?,
            _ if !result.validation.is_valid => {
                describe_report(&result.validation, result.tenants.len())
            }
            OutputFormat::Text => {
                SummaryProjector::new(self.config.currency.clone()).project(result, common_area_m2)
            }
            OutputFormat::Csv => exporter.csv(result, common_area_m2)?,
            OutputFormat::Table => exporter.table(result, common_area_m2)?,
        };
        Ok(text)
    }
}

fn describe_issue(out: &mut String, label: &str, issue: &ValidationIssue) {
    let _ = writeln!(out, "{label}[{}]: {}", issue.id, issue.message);
}

/// One line per issue, followed by a verdict line.
pub fn describe_report(report: &ValidationReport, tenants: usize) -> String {
    let mut out = String::new();
    for issue in &report.errors {
        describe_issue(&mut out, "error", issue);
    }
    for issue in &report.warnings {
        describe_issue(&mut out, "warning", issue);
    }
    if report.is_valid {
        let _ = write!(out, "valid: {tenants} tenants, {} warning(s)", report.warnings.len());
    } else {
        let _ = write!(out, "invalid: {} error(s), {} warning(s)", report.errors.len(), report.warnings.len());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_arg_maps_to_mode() {
        assert_eq!(RoundingMode::from(RoundingArg::PerValue), RoundingMode::PerValue);
        assert_eq!(RoundingMode::from(RoundingArg::LargestShare), RoundingMode::LargestShareAbsorbs);
    }

    #[test]
    fn test_describe_valid_report() {
        let report = ValidationReport::from_issues(Vec::new());
        assert_eq!(describe_report(&report, 3), "valid: 3 tenants, 0 warning(s)");
    }
}
