//! Main entry point for datadiff CLI

use clap::Parser;
use datadiff::cli::{Cli, OutputFormat};
use datadiff::data::load_csv;
use datadiff::output::{JsonFormatter, PrettyPrinter};
use datadiff::report::build_report;
use datadiff::{DatadiffError, Result};

fn main() {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // Parse command line arguments
    let cli = Cli::parse();

    // Set up verbose logging if requested
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let format = OutputFormat::parse(&cli.format).map_err(DatadiffError::invalid_input)?;

    let table0 = load_csv(&cli.input0)?;
    let table1 = load_csv(&cli.input1)?;

    let report = build_report(
        &table0,
        &table1,
        &cli.name0,
        &cli.name1,
        cli.key.as_deref(),
    )?;

    match format {
        OutputFormat::Pretty => PrettyPrinter::print_report(&report),
        OutputFormat::Json => println!("{}", JsonFormatter::format_report(&report)?),
    }

    Ok(())
}
