//! Plover CLI
//!
//! Command-line driver for the Plover multi-pattern matcher.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use plover_automaton::{Automaton, AutomatonConfig, DuplicatePolicy, MatchReport, PatternId};
use serde::Serialize;
use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Patterns used when none are given on the command line
const DEFAULT_PATTERNS: [&str; 4] = ["at", "art", "oars", "soar"];

#[derive(Parser)]
#[command(name = "plover")]
#[command(about = "Plover - single-pass multi-pattern string matching", long_about = None)]
#[command(version)]
struct Cli {
    /// Log level
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: String,

    /// Automaton configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan texts and report every pattern occurrence
    Scan {
        #[command(flatten)]
        patterns: PatternArgs,

        /// Text to scan (default: every line of stdin)
        #[arg(short, long)]
        text: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Use the restart-at-every-position matcher
        #[arg(long)]
        naive: bool,

        /// Print the trie before the results
        #[arg(long)]
        show_tree: bool,
    },

    /// Print the trie of the automaton
    Tree {
        #[command(flatten)]
        patterns: PatternArgs,
    },

    /// Print structural statistics as JSON
    Stats {
        #[command(flatten)]
        patterns: PatternArgs,
    },
}

#[derive(Args)]
struct PatternArgs {
    /// Pattern to search for (repeatable)
    #[arg(short, long = "pattern")]
    patterns: Vec<String>,

    /// File with one pattern per line
    #[arg(short = 'f', long)]
    patterns_file: Option<PathBuf>,

    /// How to treat repeated patterns (overrides the config file)
    #[arg(long, value_enum)]
    duplicates: Option<DuplicateArg>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum DuplicateArg {
    KeepFirst,
    KeepLast,
    Reject,
}

impl From<DuplicateArg> for DuplicatePolicy {
    fn from(arg: DuplicateArg) -> Self {
        match arg {
            DuplicateArg::KeepFirst => DuplicatePolicy::KeepFirst,
            DuplicateArg::KeepLast => DuplicatePolicy::KeepLast,
            DuplicateArg::Reject => DuplicatePolicy::Reject,
        }
    }
}

/// One scanned text in JSON output
#[derive(Serialize)]
struct ScanOutput<'a> {
    text: &'a str,
    matches: &'a MatchReport,
    occurrences: Vec<OccurrenceOutput<'a>>,
}

#[derive(Serialize)]
struct OccurrenceOutput<'a> {
    pattern_id: PatternId,
    pattern: &'a str,
    start: usize,
    end: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level)?;

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Scan {
            patterns,
            text,
            format,
            naive,
            show_tree,
        } => {
            let automaton = build_automaton(&patterns, config)?;
            if show_tree {
                print!("{automaton}");
            }
            match text {
                Some(text) => print_scan(&automaton, &text, format, naive)?,
                None => {
                    for line in io::stdin().lock().lines() {
                        let line = line.context("Failed to read text from stdin")?;
                        print_scan(&automaton, &line, format, naive)?;
                    }
                }
            }
        }
        Commands::Tree { patterns } => {
            let automaton = build_automaton(&patterns, config)?;
            print!("{automaton}");
        }
        Commands::Stats { patterns } => {
            let automaton = build_automaton(&patterns, config)?;
            println!("{}", serde_json::to_string_pretty(&automaton.stats())?);
        }
    }

    Ok(())
}

fn setup_logging(level: &str) -> Result<()> {
    let level = level.parse::<Level>().unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<AutomatonConfig> {
    let Some(path) = path else {
        return Ok(AutomatonConfig::default());
    };

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: AutomatonConfig = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid config file {}", path.display()))?;

    debug!(path = %path.display(), ?config, "Loaded configuration");
    Ok(config)
}

fn load_patterns(args: &PatternArgs) -> Result<Vec<String>> {
    let mut patterns = args.patterns.clone();

    if let Some(path) = &args.patterns_file {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read patterns file {}", path.display()))?;
        patterns.extend(
            contents
                .lines()
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
    }

    if patterns.is_empty() {
        info!("No patterns given, using the default word list");
        patterns = DEFAULT_PATTERNS.iter().map(|s| s.to_string()).collect();
    }

    Ok(patterns)
}

fn build_automaton(args: &PatternArgs, mut config: AutomatonConfig) -> Result<Automaton> {
    if let Some(duplicates) = args.duplicates {
        config.duplicate_policy = duplicates.into();
    }

    let patterns = load_patterns(args)?;
    let automaton =
        Automaton::with_config(patterns, config).context("Failed to build automaton")?;

    info!(
        patterns = automaton.pattern_count(),
        states = automaton.state_count(),
        "Automaton ready"
    );

    Ok(automaton)
}

fn print_scan(automaton: &Automaton, text: &str, format: OutputFormat, naive: bool) -> Result<()> {
    let report = if naive {
        automaton.scan_naive(text)
    } else {
        automaton.scan(text)
    };

    match format {
        OutputFormat::Text => println!("{report}"),
        OutputFormat::Json => {
            let occurrences = automaton
                .occurrences(&report)
                .into_iter()
                .map(|occurrence| OccurrenceOutput {
                    pattern_id: occurrence.pattern,
                    pattern: automaton.pattern(occurrence.pattern).unwrap_or_default(),
                    start: occurrence.start,
                    end: occurrence.end,
                })
                .collect();

            let output = ScanOutput {
                text,
                matches: &report,
                occurrences,
            };
            println!("{}", serde_json::to_string(&output)?);
        }
    }

    Ok(())
}
