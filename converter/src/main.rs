//! csv-extend CLI - convert panel definition CSV files
//!
//! ```bash
//! csv-extend -a convert                     # convert ./csv (or $CSV_EXTEND_DIR)
//! csv-extend -a convert -p exports          # convert another directory
//! csv-extend -a convert --report run.json   # also write a JSON batch report
//! ```

use clap::{CommandFactory, Parser};
use csv_extend::action::{Action, ActionOptions};
use csv_extend::config::{load_env, resolve_dir};
use csv_extend::logs::log_error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "csv-extend", version)]
#[command(about = "Convert panel definition CSV files to the extended layout", long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "ACTION", help = Action::help())]
    action: Option<String>,

    /// folder path
    #[arg(short, long, value_name = "DIR")]
    path: Option<PathBuf>,

    /// Write a JSON report of the batch to this file
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,
}

/// The requested action, or `None` when it is missing or unknown.
fn select_action(cli: &Cli) -> Option<Action> {
    cli.action.as_deref()?.parse().ok()
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    load_env();

    let cli = Cli::parse();

    let Some(action) = select_action(&cli) else {
        eprintln!("Error: action argument with correct value required!");
        let _ = Cli::command().print_help();
        return;
    };

    let options = ActionOptions {
        dir: resolve_dir(cli.path.as_deref()),
        report: cli.report,
    };

    if let Err(e) = action.run(&options).await {
        log_error(e.to_string());
        std::process::exit(1);
    }
}
