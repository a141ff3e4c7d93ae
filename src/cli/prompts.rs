//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use super::quiet;
use crate::terminal::format_number;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn usage_hint() {
    eprintln!("Try 'profpass --help' for more information.");
}

/// Ask before generating a list too large to be useful - returns true to go ahead.
/// Non-interactive and quiet runs go ahead.
pub fn large_run_prompt(estimate: u128) -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!(
        "{YELLOW}Up to {} candidates may be generated. Continue? [y/N]: {RESET}",
        format_number(estimate)
    );
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input == "y" || input == "yes" {
            return true;
        }
    }

    eprintln!("Aborted.");
    false
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied(count: usize, truncated: bool) {
    if quiet::enabled() {
        return;
    }
    println!("*** -COPIED {} CANDIDATE(S) TO CLIPBOARD- ***", format_number(count as u128));
    if truncated {
        warn("Clipboard output was truncated; use -o for the full list.");
    }
}

/// Print clipboard error - NOT suppressed (errors are always shown)
pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}

/// Prompt user when clipboard is unavailable. Returns true to fallback to terminal, false to abort.
/// In quiet/non-interactive mode, silently falls back to terminal.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

/// Print wordlist output summary - suppressed in quiet mode
pub fn candidates_written(count: u64, path: &str) {
    if !quiet::enabled() {
        println!("{} candidate(s) \u{2192} {path}", format_number(count as u128));
    }
}

pub fn settings_saved(path: &str) {
    if !quiet::enabled() {
        println!("Settings saved \u{2192} {path}");
    }
}
