// SPDX-License-Identifier: PMPL-1.0-or-later
//! a11y-guide CLI - contrast checker and static HTML accessibility linter

use a11y_guide::analyzers::{self, all_rules, Rule};
use a11y_guide::config::{self, Config};
use a11y_guide::contrast::{Color, ContrastResult};
use a11y_guide::report::{generate_contrast_report, generate_report, generate_scan_report, OutputFormat};
use a11y_guide::scanner;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// WCAG contrast checker and static HTML accessibility linter
#[derive(Parser)]
#[command(name = "a11y-guide")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the WCAG contrast ratio between two colors
    Contrast {
        /// Foreground color (#rrggbb)
        foreground: String,

        /// Background color (#rrggbb)
        background: String,

        /// Output format
        #[arg(long, default_value = "text")]
        format: ContrastFormatArg,
    },

    /// Lint an HTML fragment from a file or stdin
    Check {
        /// HTML file to lint ("-" or omitted reads stdin)
        file: Option<PathBuf>,

        /// Output format (defaults to [output].format from the config)
        #[arg(long)]
        format: Option<FormatArg>,

        /// Configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Lint every HTML file under a directory
    Scan {
        /// Directory to scan
        dir: PathBuf,

        /// Output format (defaults to [output].format from the config)
        #[arg(long)]
        format: Option<FormatArg>,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// List the linter rules in evaluation order
    Rules,
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
    /// SARIF for IDE/CI
    Sarif,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Sarif => OutputFormat::Sarif,
        }
    }
}

/// Contrast output has no SARIF form
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ContrastFormatArg {
    Text,
    Json,
}

impl From<ContrastFormatArg> for OutputFormat {
    fn from(arg: ContrastFormatArg) -> Self {
        match arg {
            ContrastFormatArg::Text => OutputFormat::Text,
            ContrastFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("a11y_guide=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("a11y_guide=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Contrast { foreground, background, format } => {
            init_logging(false);
            let (fg, bg) = match (Color::from_hex(&foreground), Color::from_hex(&background)) {
                (Ok(fg), Ok(bg)) => (fg, bg),
                (Err(e), _) | (_, Err(e)) => {
                    eprintln!("error: {}", e);
                    std::process::exit(2);
                }
            };
            let result = ContrastResult::from_colors(fg, bg);
            print!("{}", generate_contrast_report(fg, bg, &result, format.into()));
        }

        Commands::Check { file, format, config, verbose } => {
            init_logging(verbose);
            let cfg = load_config(config.as_deref())?;
            let format = format.map(OutputFormat::from).unwrap_or(cfg.output.format);

            let analysis = match file {
                Some(path) if path.as_os_str() != "-" => scanner::scan_file(&path, &cfg.linter)?,
                _ => {
                    let mut html = String::new();
                    std::io::stdin().read_to_string(&mut html)?;
                    analyzers::analyze_with(&html, &cfg.linter)
                }
            };

            println!("{}", generate_report(&analysis, format));

            if analysis.has_errors() {
                std::process::exit(1);
            }
        }

        Commands::Scan { dir, format, output, config, verbose } => {
            init_logging(verbose);
            let cfg = load_config(config.as_deref())?;
            let format = format.map(OutputFormat::from).unwrap_or(cfg.output.format);

            let result = scanner::scan_directory(&dir, &cfg)?;
            write_output(&generate_scan_report(&result, format), output.as_deref())?;

            if result.has_errors() {
                std::process::exit(1);
            }
        }

        Commands::Rules => {
            for rule in all_rules() {
                let ids: Vec<String> = rule.ids().iter().map(|id| id.to_string()).collect();
                println!("{:<36} {}", ids.join(", "), rule.description());
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(config::default_config_path);
    Ok(config::load_config(&path)?)
}

/// Write output to file or stdout
fn write_output(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content)?;
            eprintln!("Report written to {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
