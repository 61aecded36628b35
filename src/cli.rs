//! Command-line front end for the `pwd-checker` binary.
//!
//! Reads passwords (interactively or from a file), evaluates them and
//! prints the results. The password itself is never written to output.

use std::io::{BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use rpassword::read_password;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::config::{CheckerConfig, ConfigError};
use crate::evaluator::evaluate_password_strength;
use crate::scorer::StrengthScorer;
use crate::types::{PasswordReport, StrengthCategory};

const RULE: &str = "============================================================";
const SUBRULE: &str = "----------------------------------------";

#[derive(Parser, Debug)]
#[command(name = "pwd-checker")]
#[command(author, version, about = "Check password strength and get improvement advice")]
#[command(long_about = "
pwd-checker validates passwords against five composition rules and rates
their strength as Weak, Medium or Strong. Passwords are never stored,
logged or echoed back.

EXAMPLES:
    pwd-checker                       # Interactive mode
    pwd-checker --json                # Interactive mode, JSON reports
    pwd-checker --file candidates.txt # One password per line
")]
pub struct Cli {
    /// Evaluate every line of this file instead of prompting
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Output reports as JSON (one object per line)
    #[arg(long)]
    pub json: bool,

    /// Minimum password length (overrides PWD_MIN_LENGTH)
    #[arg(short = 'm', long)]
    pub min_length: Option<usize>,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Password file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Resolves configuration and runs the selected mode against stdin/stdout.
pub fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = CheckerConfig::from_env()?;
    if let Some(min_length) = cli.min_length {
        config = config.with_min_length(min_length)?;
    }
    let scorer = config.build_scorer();

    tracing::debug!(min_length = config.min_length, "checker configured");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.file {
        Some(path) => run_batch(&scorer, &path, cli.json, &mut out),
        None => {
            let stdin = std::io::stdin();
            let options = SessionOptions {
                json: cli.json,
                hide_input: stdin.is_terminal(),
            };
            run_interactive(&scorer, stdin.lock(), &mut out, options)
        }
    }
}

/// How an interactive session reads passwords and where it talks.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Reports are JSON lines on the output; prompts and messages go to stderr.
    pub json: bool,
    /// Read passwords from the terminal with echo disabled.
    pub hide_input: bool,
}

/// Evaluates each non-empty line of `path`.
pub fn run_batch<W: Write>(
    scorer: &StrengthScorer,
    path: &Path,
    json: bool,
    out: &mut W,
) -> Result<(), CliError> {
    tracing::info!("Evaluating passwords from {}", path.display());
    let content = match std::fs::read_to_string(path) {
        Ok(content) => SecretString::new(content.into()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::error!("Password file not found: {}", path.display());
            return Err(CliError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    for (idx, line) in content.expose_secret().lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        let report = evaluate_password_strength(scorer, &SecretString::new(line.into()));
        if json {
            writeln!(out, "{}", serde_json::to_string(&report)?)?;
        } else {
            let details = &report.details;
            writeln!(
                out,
                "line {}: {} ({}) valid={} recommendations={}",
                idx + 1,
                details.category,
                percent(details.overall_score),
                details.is_valid,
                report.recommendations.len()
            )?;
        }
    }

    Ok(())
}

/// Prompt loop: read a password, print its report, ask whether to continue.
///
/// In JSON mode only report objects are written to `out`, one per line;
/// prompts and messages go to stderr.
pub fn run_interactive<R: BufRead, W: Write>(
    scorer: &StrengthScorer,
    mut input: R,
    out: &mut W,
    options: SessionOptions,
) -> Result<(), CliError> {
    if options.json {
        let stderr = std::io::stderr();
        session_loop(scorer, &mut input, &mut stderr.lock(), Some(out), options.hide_input)
    } else {
        write_welcome(scorer, out)?;
        session_loop(scorer, &mut input, out, None::<&mut std::io::Sink>, options.hide_input)
    }
}

/// Prompts and text reports go to `chatter`; with `json_out` set, reports
/// are written there as JSON lines instead.
fn session_loop<R: BufRead, C: Write, J: Write>(
    scorer: &StrengthScorer,
    input: &mut R,
    chatter: &mut C,
    mut json_out: Option<&mut J>,
    hide_input: bool,
) -> Result<(), CliError> {
    loop {
        let Some(password) = prompt_password(input, chatter, hide_input)? else {
            break;
        };
        if password.expose_secret().eq_ignore_ascii_case("exit") {
            break;
        }

        if password.expose_secret().is_empty() {
            writeln!(chatter, "\n❌ Error: Empty password provided.")?;
        } else {
            let report = evaluate_password_strength(scorer, &password);
            drop(password);
            match json_out.as_mut() {
                Some(out) => {
                    writeln!(out, "{}", serde_json::to_string(&report)?)?;
                    out.flush()?;
                }
                None => write_report(&report, scorer.validator().min_length(), chatter)?,
            }
        }

        if !ask_continue(input, chatter)? {
            break;
        }
    }
    Ok(())
}

/// Prompts for one password. `None` on end of input.
///
/// With `hide_input` the password is read from the terminal without echo;
/// otherwise one line is taken from `input`.
fn prompt_password<R: BufRead, C: Write>(
    input: &mut R,
    chatter: &mut C,
    hide_input: bool,
) -> Result<Option<SecretString>, CliError> {
    writeln!(chatter, "\nEnter a password to check (or type 'exit' to quit):")?;
    write!(chatter, "Password: ")?;
    chatter.flush()?;

    if hide_input {
        return match read_password() {
            Ok(password) => Ok(Some(SecretString::new(password.into()))),
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e.into()),
        };
    }
    read_secret_line(input)
}

/// Reads one line into a secret, stripping the line ending. `None` on EOF.
fn read_secret_line<R: BufRead>(input: &mut R) -> Result<Option<SecretString>, CliError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(Some(SecretString::new(line.into())))
}

fn ask_continue<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<bool, CliError> {
    loop {
        writeln!(out, "\n{RULE}")?;
        write!(out, "Check another password? (y/n): ")?;
        out.flush()?;

        let mut choice = String::new();
        if input.read_line(&mut choice)? == 0 {
            return Ok(false);
        }
        match choice.trim().to_lowercase().as_str() {
            "y" | "yes" => {
                writeln!(out, "\n{RULE}")?;
                return Ok(true);
            }
            "n" | "no" | "exit" | "quit" => {
                writeln!(out, "\nThank you for using Password Strength Checker!")?;
                return Ok(false);
            }
            _ => writeln!(out, "Invalid choice. Please enter 'y' or 'n'.")?,
        }
    }
}

fn write_welcome<W: Write>(scorer: &StrengthScorer, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "    PASSWORD STRENGTH CHECKER")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "\nThis tool helps you evaluate the strength of your passwords.")?;
    writeln!(out, "Your password will not be stored or transmitted anywhere.")?;
    writeln!(out, "\nValidation Requirements:")?;
    writeln!(out, "• Minimum {} characters", scorer.validator().min_length())?;
    writeln!(out, "• At least 1 uppercase letter")?;
    writeln!(out, "• At least 1 lowercase letter")?;
    writeln!(out, "• At least 1 digit")?;
    writeln!(out, "• At least 1 special character")?;
    writeln!(out, "\n{RULE}")
}

fn percent(score: f64) -> String {
    format!("{:.0}%", score * 100.0)
}

fn mark(passed: bool) -> &'static str {
    if passed { "✓" } else { "✗" }
}

fn indicator(category: StrengthCategory) -> &'static str {
    match category {
        StrengthCategory::Weak => "🔴",
        StrengthCategory::Medium => "🟡",
        StrengthCategory::Strong => "🟢",
    }
}

/// Writes the human-readable report: information, validation, strength.
pub fn write_report<W: Write>(
    report: &PasswordReport,
    min_length: usize,
    out: &mut W,
) -> std::io::Result<()> {
    let breakdown = &report.breakdown;
    writeln!(out, "\n{SUBRULE}")?;
    writeln!(out, "PASSWORD INFORMATION")?;
    writeln!(out, "{SUBRULE}")?;
    writeln!(out, "Length: {} characters", breakdown.length)?;
    writeln!(out, "Character Breakdown:")?;
    writeln!(out, "  • Uppercase: {}", breakdown.uppercase)?;
    writeln!(out, "  • Lowercase: {}", breakdown.lowercase)?;
    writeln!(out, "  • Digits: {}", breakdown.digits)?;
    writeln!(out, "  • Special: {}", breakdown.special)?;
    writeln!(out, "  • Other: {}", breakdown.other)?;

    let summary = &report.summary;
    writeln!(out, "\n{SUBRULE}")?;
    writeln!(out, "VALIDATION RESULTS")?;
    writeln!(out, "{SUBRULE}")?;
    writeln!(out, "Length ({min_length}+ chars): {}", mark(summary.length))?;
    writeln!(out, "Uppercase letter: {}", mark(summary.uppercase))?;
    writeln!(out, "Lowercase letter: {}", mark(summary.lowercase))?;
    writeln!(out, "Digit: {}", mark(summary.digit))?;
    writeln!(out, "Special character: {}", mark(summary.special_char))?;

    let details = &report.details;
    if details.validation_errors.is_empty() {
        writeln!(out, "\n✅ All validation requirements met!")?;
    } else {
        writeln!(out, "\n❌ Validation Errors:")?;
        for error in &details.validation_errors {
            writeln!(out, "  • {error}")?;
        }
    }

    writeln!(out, "\n{SUBRULE}")?;
    writeln!(out, "STRENGTH ANALYSIS")?;
    writeln!(out, "{SUBRULE}")?;
    writeln!(
        out,
        "Strength Rating: {} {} ({})",
        indicator(details.category),
        details.category,
        percent(details.overall_score)
    )?;
    writeln!(out, "\nDetailed Scores:")?;
    writeln!(out, "  • Length Score: {}", percent(details.length_score))?;
    writeln!(out, "  • Variety Score: {}", percent(details.variety_score))?;
    writeln!(out, "  • Complexity Score: {}", percent(details.complexity_score))?;

    if report.recommendations.is_empty() {
        writeln!(out, "\n🎉 Excellent password! No improvements needed.")?;
    } else {
        writeln!(out, "\n💡 Recommendations:")?;
        for rec in &report.recommendations {
            writeln!(out, "  • {rec}")?;
        }
    }
    Ok(())
}
