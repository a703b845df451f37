//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::fs;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::info;

use chatlens::analysis::{ChatReport, StopWords};
use chatlens::cli::{Cli, Command, ExportArgs, ReportArgs};
use chatlens::config::ParserConfig;
use chatlens::core::apply_filters;
use chatlens::format::write_to_format;
use chatlens::logging::init_logging;
use chatlens::parser::ExportParser;
use chatlens::{ChatlensError, MessageRecord};

fn main() {
    let cli = Cli::parse();

    let result = init_logging(cli.log_level.as_deref(), cli.no_color).and_then(|()| {
        match &cli.command {
            Command::Export(args) => run_export(args),
            Command::Report(args) => run_report(args),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn read_export(path: &str, config: ParserConfig) -> Result<Vec<MessageRecord>, ChatlensError> {
    let raw = fs::read(path)?;
    info!(path, bytes = raw.len(), "read export");
    ExportParser::with_config(config).parse_bytes(&raw)
}

fn run_export(args: &ExportArgs) -> Result<(), ChatlensError> {
    let total_start = Instant::now();
    let output_path = args.output_path();
    let filter_config = args.filter_config()?;

    println!("chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("──────────────────────────────────");
    println!("Input:   {}", args.input.input);
    println!("Output:  {}", output_path);
    println!("Format:  {}", args.format);
    if let Some(ref after) = args.after {
        println!("After:   {}", after);
    }
    if let Some(ref before) = args.before {
        println!("Before:  {}", before);
    }
    if let Some(ref user) = args.user {
        println!("User:    {}", user);
    }
    println!();

    println!("Parsing export...");
    let parse_start = Instant::now();
    let records = read_export(&args.input.input, args.input.parser_config(args.keep_system))?;
    let parsed_count = records.len();
    println!(
        "   Found {} messages ({:.2}s)",
        parsed_count,
        parse_start.elapsed().as_secs_f64()
    );

    let records: Vec<MessageRecord> = if filter_config.is_active() {
        println!("Filtering records...");
        let selected: Vec<MessageRecord> = apply_filters(&records, &filter_config)
            .into_iter()
            .cloned()
            .collect();
        println!("   {} records after filtering", selected.len());
        selected
    } else {
        records
    };

    println!("Writing {}...", args.format);
    let write_start = Instant::now();
    write_to_format(&records, &output_path, args.format, &args.output_config())?;
    println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    println!();
    println!("Done! Output saved to {}", output_path);
    println!();
    println!("Summary:");
    println!("   Parsed:    {} messages", parsed_count);
    if filter_config.is_active() {
        println!("   Selected:  {} records", records.len());
    }
    println!("   Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}

fn run_report(args: &ReportArgs) -> Result<(), ChatlensError> {
    let records = read_export(&args.input.input, args.input.parser_config(false))?;

    let stop_words = args
        .stopwords
        .as_deref()
        .map(StopWords::load)
        .transpose()?
        .unwrap_or_default();
    info!(stop_words = stop_words.len(), "loaded stop words");

    let report = ChatReport::build(&records, &args.user, &stop_words, &args.analysis_config());
    let json = serde_json::to_string_pretty(&report)?;

    match args.output {
        Some(ref path) => {
            fs::write(path, json)?;
            println!(
                "Report for {} ({} messages) saved to {}",
                report.selection, report.stats.messages, path
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}
