//! CLI entry point for ghostty-keybind-lint
//!
//! Provides command-line interface for checking keybind directives,
//! reformatting triggers, and listing known actions.

use clap::{Parser, Subcommand};
use colored::*;
use ghostty_keybind_lint::config::{load_keybinds, KeybindLine, DEFAULT_CONFIG_PATH};
use ghostty_keybind_lint::core::{
    actions::definitions, get_diagnostics, parse_keybind, DiagnosticEntry, DuplicateDetector,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ghostty-keybind-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check keybind directives for errors and duplicate triggers
    Check {
        /// Path to Ghostty config file, used when no directives are given
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Print diagnostics as JSON
        #[arg(long)]
        json: bool,

        /// Directives to check instead of the config file
        directives: Vec<String>,
    },

    /// Print directives with their triggers in normalised form
    Format {
        #[arg(required = true)]
        directives: Vec<String>,
    },

    /// List every action and the argument it takes
    Actions,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Check { config, json, directives } => check(&config, json, directives)?,
        Commands::Format { directives } => format_directives(&directives),
        Commands::Actions => list_actions(),
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Check directives from the command line or the config file
fn check(config_path: &Path, json: bool, directives: Vec<String>) -> anyhow::Result<()> {
    let lines: Vec<KeybindLine> = if directives.is_empty() {
        if !json {
            println!("{} Reading keybinds: {}", "→".cyan(), config_path.display());
        }
        load_keybinds(config_path)?
    } else {
        directives
            .into_iter()
            .enumerate()
            .map(|(i, directive)| KeybindLine { line: i + 1, directive })
            .collect()
    };

    let entries = get_diagnostics(&lines.iter().map(|l| l.directive.as_str()).collect::<Vec<_>>());

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print_report(&lines, &entries);
    }

    if entries.iter().any(DiagnosticEntry::has_problems) {
        std::process::exit(1);
    }

    Ok(())
}

fn print_report(lines: &[KeybindLine], entries: &[DiagnosticEntry]) {
    println!("{} Checked {} keybinds\n", "✓".green(), lines.len());

    let invalid: Vec<_> = lines
        .iter()
        .zip(entries)
        .filter(|(_, entry)| !entry.errors.is_empty())
        .collect();

    for (line, entry) in &invalid {
        println!("{} {}", format!("line {}:", line.line).yellow().bold(), line.directive.cyan());
        for error in &entry.errors {
            println!("  {} {}", "✗".red(), error);
        }
    }

    let duplicates = DuplicateDetector::from_entries(entries).find_duplicates();

    for (i, duplicate) in duplicates.iter().enumerate() {
        println!(
            "{} {}",
            format!("Duplicate {}", i + 1).yellow().bold(),
            duplicate.canonical.cyan()
        );
        for (idx, &index) in duplicate.indices.iter().enumerate() {
            println!(
                "  {} line {} → {}",
                format!("{}.", idx + 1).dimmed(),
                lines[index].line,
                lines[index].directive
            );
        }
    }

    if invalid.is_empty() && duplicates.is_empty() {
        println!("{} {}", "✓".green().bold(), "No problems detected!".bold());
    } else {
        println!(
            "\n{} {} invalid, {} duplicated trigger{}",
            "⚠".yellow(),
            invalid.len(),
            duplicates.len(),
            if duplicates.len() == 1 { "" } else { "s" }
        );
    }
}

/// Re-print each directive with its trigger normalised
fn format_directives(directives: &[String]) {
    let mut failed = false;

    for directive in directives {
        let parsed = parse_keybind(directive);

        match (&parsed.trigger, &parsed.action) {
            (Some(trigger), Some(action)) => match &parsed.args {
                Some(args) => println!("{}={}:{}", trigger, action, args),
                None => println!("{}={}", trigger, action),
            },
            _ => failed = true,
        }

        for error in parsed.messages() {
            eprintln!("{} {}: {}", "✗".red(), directive, error);
        }
    }

    if failed {
        std::process::exit(1);
    }
}

fn list_actions() {
    for def in definitions() {
        let mut line = format!("{} {}", def.name.green(), format!("({})", def.kind).dimmed());
        if !def.options.is_empty() {
            line.push_str(&format!(" [{}]", def.options.join(", ")));
        }
        if def.allow_empty {
            line.push_str(&format!(" {}", "optional".dimmed()));
        }
        println!("{}", line);
    }
}
