use std::io::Write;
use std::path::PathBuf;

use abbrev_check::{
    CheckConfig, CheckError, DEFAULT_JOURNALS_DIR, DEFAULT_SUMMARY_FILE, check_journals, output,
};
use anyhow::{Context, Result};
use clap::Parser;

use crate::logging;

/// Check journal abbreviation CSV files and write a quality summary.
#[derive(Parser, Debug)]
#[command(name = "check-quality", version, about, long_about = None)]
struct Cli {
    /// Directory containing the journal `*.csv` files
    #[arg(short = 'd', long, default_value = DEFAULT_JOURNALS_DIR)]
    journals_dir: PathBuf,

    /// Where to write the text summary (overwritten on every run)
    #[arg(short = 'o', long, default_value = DEFAULT_SUMMARY_FILE)]
    summary_file: PathBuf,

    /// Fail on files larger than this many bytes (no limit by default)
    #[arg(long)]
    max_file_size: Option<u64>,

    /// Also print the full report as JSON to stdout
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Run the command and return the process exit code.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = CheckConfig::new(&cli.journals_dir);
    config.max_file_size = cli.max_file_size;

    let report = match check_journals(&config) {
        Ok(report) => report,
        Err(CheckError::DirectoryNotFound { path }) => {
            tracing::error!(path = %path.display(), "Journals folder not found");
            println!("Journals folder not found. Please make sure the path is correct.");
            return Ok(1);
        }
        Err(e) => return Err(e.into()),
    };

    output::write_summary_file(&report, &cli.summary_file)?;
    tracing::info!(path = %cli.summary_file.display(), "Summary written");

    if cli.json {
        let mut stdout = std::io::stdout().lock();
        output::write_json(&report, &mut stdout)?;
        stdout.flush().context("flush stdout")?;
    }

    for scan_err in &report.scan_errors {
        eprintln!("{}", scan_err.format_human_readable());
    }
    if !report.ok() {
        return Ok(1);
    }
    println!("Quality check completed with no errors.");
    Ok(0)
}
