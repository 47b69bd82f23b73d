//! CLI Adapter.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use crate::app::api::{self, ReportOptions};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "workflow-manager")]
#[command(version)]
#[command(about = "Twitter Data Analysis Workflow Manager", long_about = None)]
#[command(after_help = "Examples:\n    workflow-manager --status\n    workflow-manager --help")]
struct Cli {
    /// Show status of all datasets and analysis files
    #[arg(long)]
    status: bool,
    /// Show detailed workflow instructions
    #[arg(long)]
    instructions: bool,
    /// Print the status report as JSON instead of text
    #[arg(long, requires = "status")]
    json: bool,
    /// Directory that relative dataset paths resolve against
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,
    /// Dataset registry (TOML) to use instead of the built-in one
    #[arg(long, value_name = "FILE")]
    registry: Option<PathBuf>,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    if let Err(e) = dispatch(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<(), AppError> {
    let options = ReportOptions { root: cli.root, registry: cli.registry };

    if cli.status {
        run_status(&options, cli.json)
    } else if cli.instructions {
        run_instructions(&options)
    } else {
        Cli::command().print_help()?;
        Ok(())
    }
}

fn run_status(options: &ReportOptions, json: bool) -> Result<(), AppError> {
    if json {
        let report = api::status(options)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let (report, instructions) = api::status_with_instructions(options)?;
    print!("{}", api::render_report(&report));

    let unreadable = report.unreadable_count();
    if unreadable > 0 {
        eprintln!("⚠️  {} artifact(s) could not be checked", unreadable);
    }

    print_instructions(&instructions);
    Ok(())
}

fn run_instructions(options: &ReportOptions) -> Result<(), AppError> {
    print_instructions(&api::instructions(options)?);
    Ok(())
}

fn print_instructions(text: &str) {
    println!();
    println!("{}", text);
}
