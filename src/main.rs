use std::io;
use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;

use recast::config::Config;
use recast::Options;

/// recast — infer the shape of a delimited text file and re-emit it as
/// CSV, JSON, or a Markdown table, with an analysis summary and preview.
#[derive(Parser)]
#[command(name = "recast", version, about)]
struct Cli {
    /// Delimited text file to analyze and convert.
    input: Option<PathBuf>,

    /// Field delimiter. Skips auto-detection.
    #[arg(short = 'd', long)]
    delimiter: Option<char>,

    /// Output file path. Defaults to structured/<name>_structured.<format>.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Leading lines to skip before conversion (comments, preamble).
    #[arg(short = 's', long, default_value_t = 0)]
    skip: usize,

    /// Output format: csv, json, or md. Validated after analysis prints.
    #[arg(short = 'f', long, default_value = "csv")]
    format: String,

    /// Machine-readable JSON report instead of the text summary.
    #[arg(long)]
    json: bool,

    /// Print shell completions for the given shell.
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() {
    let cli = Cli::parse();

    // Shell completions
    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "recast", &mut io::stdout());
        return;
    }

    let Some(input) = cli.input else {
        eprintln!("usage: recast <file> [-d DELIM] [-s N] [-f csv|json|md] [-o PATH]");
        process::exit(3);
    };

    let config = Config::default();
    let opts = Options {
        input,
        output: cli.output,
        delimiter: cli.delimiter,
        skip: cli.skip,
        format: cli.format,
    };

    if cli.json {
        // JSON mode: report as a serde_json object, no preview. The report
        // still prints before conversion so partial work stays visible.
        let analysis = match recast::analyze(&opts, &config) {
            Ok(a) => a,
            Err(e) => {
                eprintln!("{e}");
                process::exit(e.exit_code());
            }
        };
        if let Some(warning) = &analysis.warning {
            eprintln!("warning: {warning}");
        }
        println!(
            "{}",
            serde_json::to_string_pretty(&analysis.report)
                .expect("report is always serializable")
        );
        if let Err(e) = recast::convert(analysis) {
            eprintln!("{e}");
            process::exit(e.exit_code());
        }
        return;
    }

    let mut out = io::stdout();
    if let Err(e) = recast::run(&opts, &config, &mut out) {
        eprintln!("{e}");
        process::exit(e.exit_code());
    }
}
