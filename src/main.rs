//! lastfm-titlecase CLI - normalizes title lists, one title per line.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use lastfm_titlecase::{Config, normalize_all};
use similar::TextDiff;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Normalizes song, album and artist titles into Title Case or Sentence case.
#[derive(Parser, Debug)]
#[command(name = "lastfm-titlecase")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file(s) with one title per line. Use - for stdin.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Write normalized titles back to the input file(s).
    #[arg(short, long)]
    write: bool,

    /// Check if titles are already normalized (exit 1 if not).
    #[arg(short, long)]
    check: bool,

    /// Show a unified diff instead of the normalized titles.
    #[arg(long)]
    diff: bool,

    /// Read input from stdin.
    #[arg(long)]
    stdin: bool,

    /// Configuration file (default: discover .lastfm-titlecase.toml).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Title-case everything, including Cyrillic text.
    #[arg(long)]
    no_sentence_case: bool,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(args: &Args) -> Result<Config, String> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path).map_err(|e| e.to_string())?,
        None => {
            let cwd = std::env::current_dir()
                .map_err(|e| format!("cannot determine current directory: {}", e))?;
            match Config::discover(&cwd).map_err(|e| e.to_string())? {
                Some((path, config)) => {
                    debug!(path = %path.display(), "using configuration");
                    config
                }
                None => Config::default(),
            }
        }
    };
    if args.no_sentence_case {
        config.sentence_case = false;
    }
    Ok(config)
}

/// Normalize every line of `input`, keeping blank lines and the trailing
/// newline.
fn normalize_lines(input: &str, config: &Config) -> String {
    let lines: Vec<&str> = input.lines().collect();
    let mut output = normalize_all(&lines, config).join("\n");
    if input.ends_with('\n') {
        output.push('\n');
    }
    output
}

fn print_diff(name: &str, input: &str, output: &str) {
    let diff = TextDiff::from_lines(input, output);
    print!(
        "{}",
        diff.unified_diff()
            .header(&format!("{} (original)", name), &format!("{} (normalized)", name))
    );
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let read_stdin = args.stdin
        || args.files.is_empty()
        || (args.files.len() == 1 && args.files[0].as_os_str() == "-");

    if read_stdin {
        let mut input = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut input) {
            eprintln!("Error reading stdin: {}", e);
            return ExitCode::FAILURE;
        }

        let output = normalize_lines(&input, &config);
        if args.check {
            if input != output {
                eprintln!("<stdin>: not normalized");
                return ExitCode::FAILURE;
            }
        } else if args.diff {
            print_diff("<stdin>", &input, &output);
        } else {
            print!("{}", output);
        }
        ExitCode::SUCCESS
    } else {
        let mut all_normalized = true;

        for file in &args.files {
            let input = match fs::read_to_string(file) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Error reading {}: {}", file.display(), e);
                    return ExitCode::FAILURE;
                }
            };

            let output = normalize_lines(&input, &config);
            if args.check {
                if input != output {
                    eprintln!("{}: not normalized", file.display());
                    all_normalized = false;
                }
            } else if args.diff {
                print_diff(&file.display().to_string(), &input, &output);
            } else if args.write {
                if input != output
                    && let Err(e) = fs::write(file, &output)
                {
                    eprintln!("Error writing {}: {}", file.display(), e);
                    return ExitCode::FAILURE;
                }
            } else {
                print!("{}", output);
            }
        }

        if args.check && !all_normalized {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }
}
