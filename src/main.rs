use clap::{Parser, Subcommand};
use std::error::Error;
use std::io::Read;
use std::path::PathBuf;

use web_evidence::collector::{collect, export_csv, raw_items_from_json};
use web_evidence::config;
use web_evidence::report::{ReportSummary, outcomes_from_json, persist, render};

/// Web Evidence - browser automation evidence tooling
#[derive(Parser, Debug)]
#[command(
    name = "web-evidence",
    about = "Turn scraped listing records into CSV and scenario outcomes into HTML evidence reports",
    after_help = "ENVIRONMENT VARIABLES:\n\
        WEB_EVIDENCE_REPORT_DIR        Directory for generated reports\n\
        WEB_EVIDENCE_SCREENSHOT_DIR    Directory where the runner stores screenshots\n\
        WEB_EVIDENCE_REPORT_TITLE      Title shown in the report header\n\
        WEB_EVIDENCE_REPORT_SUBTITLE   Subtitle shown in the report header"
)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Export scraped item records as a CSV table
    Export {
        /// JSON file with an array of raw item records (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Destination CSV file (overwritten if it exists)
        #[arg(short, long, default_value = "products.csv")]
        output: PathBuf,
    },

    /// Render scenario outcomes into a self-contained HTML report
    Report {
        /// JSON file with an array of test outcomes (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Directory for the generated report (created if absent)
        #[arg(short, long, env = "WEB_EVIDENCE_REPORT_DIR", default_value = "reports")]
        dir: PathBuf,

        /// Output the run summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    match args.command {
        Some(Commands::Export { input, output }) => {
            let raw = raw_items_from_json(&read_input(input.as_deref())?)?;

            let items = collect(&raw);
            export_csv(&items, &output)?;

            println!("Exported {} rows: {}", items.len(), output.display());
        }

        Some(Commands::Report { input, dir, json }) => {
            let mut outcomes = outcomes_from_json(&read_input(input.as_deref())?)?;

            // Runners sometimes record bare filenames; retry those under the
            // configured screenshot directory before giving up on the image.
            let screenshot_dir = PathBuf::from(config::screenshot_dir());
            for outcome in &mut outcomes {
                if let Some(path) = &outcome.screenshot_path {
                    if path.is_relative() && !path.exists() {
                        let candidate = screenshot_dir.join(path);
                        if candidate.exists() {
                            outcome.screenshot_path = Some(candidate);
                        }
                    }
                }
            }

            let html = render(&outcomes);
            let path = persist(&html, &dir)?;
            let summary = ReportSummary::of(&outcomes);

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "summary": summary,
                        "report": path,
                    }))?
                );
            } else {
                println!("=== TEST RUN SUMMARY ===");
                println!("Total: {}", summary.total);
                println!("Passed: {}", summary.passed);
                println!("Failed: {}", summary.failed);
                println!("Report: {}", path.display());
            }
        }

        None => {
            println!("Web Evidence - browser automation evidence tooling");
            println!();
            println!("Usage: web-evidence <COMMAND>");
            println!();
            println!("Commands:");
            println!("  export  Export scraped item records as a CSV table");
            println!("  report  Render scenario outcomes into an HTML report");
            println!();
            println!("Run with --help for more information.");
        }
    }

    Ok(())
}

/// Read the record payload from a file, or stdin when no path was given
fn read_input(path: Option<&std::path::Path>) -> Result<String, Box<dyn Error>> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
