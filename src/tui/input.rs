//! Line input for the profile questionnaire.

use std::io::{self, BufRead};

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};

use crate::cli::quiet;
use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Read one line, pre-filled with `initial`.
///
/// Returns `None` when the operator presses Esc or Ctrl+Q, or when input
/// hits end of file. Falls back to a plain buffered read when stdin is not a
/// terminal, so answers can be piped in.
pub fn get_editable_input(prompt: &str, initial: &str) -> Option<String> {
    if !quiet::is_interactive() {
        return read_plain(prompt);
    }

    let mut input: Vec<char> = initial.chars().collect();
    let mut cursor = input.len();
    let mut drawn = input.len();
    let mut cancelled = false;

    let mut guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return read_plain(prompt),
    };

    print!("{}: {}", prompt, initial);
    flush();

    loop {
        let key = match read() {
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => key,
            Ok(_) => continue,
            Err(_) => break,
        };
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                // process::exit skips destructors
                reset_terminal();
                println!();
                std::process::exit(130);
            }
            KeyCode::Char('q') if ctrl => {
                cancelled = true;
                break;
            }
            KeyCode::Char('u') if ctrl => {
                input.clear();
                cursor = 0;
            }
            KeyCode::Esc => {
                cancelled = true;
                break;
            }
            KeyCode::Enter => break,
            KeyCode::Backspace if cursor > 0 => {
                cursor -= 1;
                input.remove(cursor);
            }
            KeyCode::Delete if cursor < input.len() => {
                input.remove(cursor);
            }
            KeyCode::Left if cursor > 0 => cursor -= 1,
            KeyCode::Right if cursor < input.len() => cursor += 1,
            KeyCode::Home => cursor = 0,
            KeyCode::End => cursor = input.len(),
            KeyCode::Char(c) if !ctrl => {
                input.insert(cursor, c);
                cursor += 1;
            }
            _ => {}
        }

        let line: String = input.iter().collect();
        print!("\r{}: {}", prompt, " ".repeat(drawn + 1));
        print!("\r{}: {}", prompt, line);
        print!("\x1b[{}G", prompt.chars().count() + 3 + cursor);
        flush();
        drawn = drawn.max(input.len());
    }

    guard.release();
    println!();

    if cancelled {
        None
    } else {
        Some(input.into_iter().collect())
    }
}

fn read_plain(prompt: &str) -> Option<String> {
    print!("{}: ", prompt);
    flush();
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}
