//! labeltrack - bookmark export to label track converter

use std::process::ExitCode;

use clap::Parser;

use labeltrack::{ARCHIVE_NAME, Report, convert_file};

#[derive(Parser)]
#[command(name = "labeltrack")]
#[command(version, about = "Convert bookmark XML exports into label track archives", long_about = None)]
#[command(after_help = "EXAMPLES:
    labeltrack bookmarks.xml                  Write converted-bookmarks.zip
    labeltrack bookmarks.xml out.zip          Choose the archive name
    labeltrack --json bookmarks.xml           Print the run report as JSON")]
struct Cli {
    /// Input bookmark XML file
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output archive (defaults to converted-bookmarks.zip)
    #[arg(value_name = "OUTPUT")]
    output: Option<String>,

    /// Show read progress on stderr
    #[arg(short, long)]
    progress: bool,

    /// Print the run report as JSON
    #[arg(long)]
    json: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = cli.output.as_deref().unwrap_or(ARCHIVE_NAME);

    match run(&cli, output) {
        Ok(report) => {
            if cli.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("error: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            } else if !cli.quiet {
                println!("{} label track(s) written to {output}", report.entries);
            }

            if !cli.quiet && !cli.json
                && let Some(warning) = report.diagnostics.summary()
            {
                eprintln!("warning: {warning}");
            }

            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, output: &str) -> labeltrack::Result<Report> {
    if cli.progress {
        let mut last = None;
        let mut observer = |percent: u8| {
            if last != Some(percent) {
                eprintln!("reading: {percent}%");
                last = Some(percent);
            }
        };
        convert_file(&cli.input, output, Some(&mut observer))
    } else {
        convert_file(&cli.input, output, None)
    }
}
