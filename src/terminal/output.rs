//! Terminal output utilities.
//!
//! Box drawing, progress bar, number formatting, ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[38;5;9m";
pub const DIM: &str = "\x1b[2m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m");
    flush();
}

/// Hide or show the cursor.
pub fn cursor_visible(visible: bool) {
    print!("{}", if visible { "\x1b[?25h" } else { "\x1b[?25l" });
    flush();
}

// ============================================================================
// Styled Output Helpers
// ============================================================================

/// Print error message in red.
pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

// ============================================================================
// Number Formatting
// ============================================================================

pub fn format_number(num: u128) -> String {
    let s = num.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let padding = inner_width - display_len;
        println!("│ {}{} │", content, " ".repeat(padding));
    } else {
        println!("│ {} │", content);
    }
}

/// Print centered box content line: │          content          │
pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let total_padding = inner_width - display_len;
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        println!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        );
    } else {
        println!("│ {} │", content);
    }
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print a help option with flag and description, auto-wrapping if needed.
pub fn box_opt(flag: &str, desc: &str) {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 27;
    let desc_col = inner_width - flag_col;

    let flag_padded = if flag.len() < flag_col {
        format!("{}{}", flag, " ".repeat(flag_col - flag.len()))
    } else {
        flag[..flag_col].to_string()
    };

    let lines = wrap(desc, desc_col);

    match lines.first() {
        Some(first) => {
            let padding = desc_col.saturating_sub(first.len());
            println!("│ {}{}{} │", flag_padded, first, " ".repeat(padding));
        }
        None => println!("│ {}{} │", flag_padded, " ".repeat(desc_col)),
    }

    let indent = " ".repeat(flag_col);
    for line in lines.iter().skip(1) {
        let padding = desc_col.saturating_sub(line.len());
        println!("│ {}{}{} │", indent, line, " ".repeat(padding));
    }
}

/// Greedy word wrap.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }
    lines
}

/// Calculate display width accounting for ANSI escape codes.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

/// Print centered text within box width.
pub fn print_centered(text: &str) {
    let len = text.chars().count();
    let padding = BOX_WIDTH.saturating_sub(len) / 2;
    print!(
        "{}{}{}\r\n",
        " ".repeat(padding),
        text,
        " ".repeat(BOX_WIDTH.saturating_sub(padding + len))
    );
    flush();
}

// ============================================================================
// Progress Bar
// ============================================================================

/// Render a progress bar inside a box with centered text (3 lines).
pub fn progress_bar_box(percent: f32, stats: &str) {
    let inner_width = BOX_WIDTH - 2;
    let filled = if percent >= 100.0 {
        inner_width
    } else {
        ((percent / 100.0) * inner_width as f32) as usize
    };

    let text_chars: Vec<char> = stats.chars().collect();
    let padding = inner_width.saturating_sub(text_chars.len()) / 2;

    let mut content: Vec<char> = vec![' '; inner_width];
    for (i, ch) in text_chars.iter().enumerate() {
        if padding + i < inner_width {
            content[padding + i] = *ch;
        }
    }

    // Top border
    if filled > 0 {
        print!("\r▗{}", "▄".repeat(filled));
    } else {
        print!("\r┌");
    }
    if filled < inner_width {
        print!("{}┐\r\n", "─".repeat(inner_width - filled));
    } else {
        print!("▖\r\n");
    }

    // Middle
    if filled > 0 {
        let filled_str: String = content[..filled].iter().collect();
        print!("\r▐\x1b[7m{}\x1b[0m", filled_str);
    } else {
        print!("\r│");
    }
    if filled < inner_width {
        let unfilled_str: String = content[filled..].iter().collect();
        print!("{}│\r\n", unfilled_str);
    } else {
        print!("▌\r\n");
    }

    // Bottom border
    if filled > 0 {
        print!("\r▝{}", "▀".repeat(filled));
    } else {
        print!("\r└");
    }
    if filled < inner_width {
        print!("{}┘\r\n", "─".repeat(inner_width - filled));
    } else {
        print!("▘\r\n");
    }

    flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1,000");
        assert_eq!(format_number(12_345_678), "12,345,678");
    }

    #[test]
    fn width_ignores_ansi() {
        assert_eq!(console_width(&format!("{RED}abc{RESET}")), 3);
    }

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
        assert!(wrap("", 10).is_empty());
    }
}
