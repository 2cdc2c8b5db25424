use clap::Parser;
use station_consolidator::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(()) => {
            // Success - the summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Station Consolidator - ISD/GHCND Catalog Merger");
    println!("===============================================");
    println!();
    println!("Consolidate weather station catalogs from the Integrated Surface Database");
    println!("and the Global Historical Climatology Network into one deduplicated list.");
    println!();
    println!("USAGE:");
    println!("    station-consolidator <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    consolidate    Consolidate source catalogs into one station list");
    println!("    report         Summarize an already-consolidated catalog");
    println!("    help           Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Consolidate an ISD catalog on its own:");
    println!("    station-consolidator consolidate isd.json");
    println!();
    println!("    # Consolidate both catalogs and choose the output path:");
    println!("    station-consolidator consolidate isd.json ghcnd.json -o stations.json");
    println!();
    println!("    # Summarize the result:");
    println!("    station-consolidator report stations.json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    station-consolidator <COMMAND> --help");
}
