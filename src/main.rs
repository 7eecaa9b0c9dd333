use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, error};

use roster::config::RosterConfig;
use roster::dataset::sample_employees;
use roster::logging::init_logging;
use roster::pipeline::ExecutionMode;
use roster::report::RosterReport;

/// Query the built-in employee roster
#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Averages, maxima and salary totals over an employee roster", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the summary report (default command)
    Report {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Reduce in parallel
        #[arg(long)]
        parallel: bool,

        /// Override the configured base salary rate
        #[arg(long)]
        base_rate: Option<f64>,
    },
    /// List the employees of the roster
    List {
        /// Print the roster as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    };

    init_logging(cli.verbose, &config.log_level);
    debug!("Using configuration: {:?}", config);

    let result = match cli.command {
        Some(Commands::Report {
            json,
            parallel,
            base_rate,
        }) => run_report(config, json, parallel, base_rate),
        Some(Commands::List { json }) => run_list(json),
        None => run_report(config, false, false, None),
    };

    if let Err(e) = result {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<RosterConfig> {
    match path {
        Some(path) => RosterConfig::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(RosterConfig::default()),
    }
}

fn run_report(
    mut config: RosterConfig,
    json: bool,
    parallel: bool,
    base_rate: Option<f64>,
) -> anyhow::Result<()> {
    if parallel {
        config.execution = ExecutionMode::Parallel;
    }
    if let Some(base_rate) = base_rate {
        config.salary = config.salary.with_base_rate(base_rate);
        config.validate()?;
    }

    let employees = sample_employees();
    let report = RosterReport::compute(&employees, &config).context("Failed to compute report")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}

fn run_list(json: bool) -> anyhow::Result<()> {
    let employees = sample_employees();

    if json {
        println!("{}", serde_json::to_string_pretty(&employees)?);
        return Ok(());
    }

    for employee in &employees {
        let current = employee
            .current_position()
            .map(|entry| format!("{} at {}", entry.position(), entry.employer()))
            .unwrap_or_else(|| "no positions".to_string());
        println!(
            "  {} ({}) - {}",
            employee.person().full_name(),
            employee.person().age(),
            current
        );
    }
    Ok(())
}
