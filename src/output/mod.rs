//! Candidate sinks: terminal, file, clipboard.

mod progress;

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use zeroize::Zeroize;

use crate::cli::quiet;
use crate::tui::{get_editable_input, print_file_exists};

pub use progress::with_progress;

/// Write one candidate per line, scrubbing each line buffer after use.
///
/// Returns how many candidates were written. A closed pipe ends the stream
/// quietly.
pub fn write_lines<W: Write>(
    candidates: impl Iterator<Item = String>,
    out: W,
) -> io::Result<u64> {
    let mut out = BufWriter::new(out);
    let mut written = 0;

    for mut candidate in candidates {
        candidate.push('\n');
        let result = out.write_all(candidate.as_bytes());
        candidate.zeroize();
        match result {
            Ok(()) => written += 1,
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => return Ok(written),
            Err(e) => return Err(e),
        }
    }

    match out.flush() {
        Err(e) if e.kind() != io::ErrorKind::BrokenPipe => Err(e),
        _ => Ok(written),
    }
}

pub fn to_terminal(candidates: impl Iterator<Item = String>) -> io::Result<u64> {
    let stdout = io::stdout();
    write_lines(candidates, stdout.lock())
}

/// Join up to `limit` candidates for the clipboard.
/// The flag reports whether the stream had more.
pub fn to_buffer(mut candidates: impl Iterator<Item = String>, limit: usize) -> (String, bool) {
    let mut buffer = String::new();
    for mut candidate in candidates.by_ref().take(limit) {
        buffer.push_str(&candidate);
        buffer.push('\n');
        candidate.zeroize();
    }
    let truncated = candidates.next().is_some();
    (buffer, truncated)
}

/// Open the output file, asking whether to append or overwrite when it
/// already exists. Non-interactive runs append.
pub fn open_output(path: &str) -> io::Result<Option<File>> {
    let target = Path::new(path);
    if let Some(parent) = target.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    if !target.exists() || quiet::skip_prompt() {
        return OpenOptions::new().create(true).append(true).open(path).map(Some);
    }

    print_file_exists(path);
    loop {
        let Some(answer) = get_editable_input("Enter your choice", "") else {
            return Ok(None);
        };
        match answer.trim().to_lowercase().as_str() {
            "o" => {
                return OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(path)
                    .map(Some);
            }
            "a" => return OpenOptions::new().append(true).open(path).map(Some),
            _ => {
                print!(
                    "\x1b[2A\x1b[2K\x1b[31mInvalid choice. Please enter 'a' or 'o'.\x1b[0m\n\x1b[2K"
                );
                let _ = io::stdout().flush();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> impl Iterator<Item = String> {
        items.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn lines_are_newline_terminated() {
        let mut out = Vec::new();
        let written = write_lines(words(&["alice1", "1alice"]), &mut out).unwrap();
        assert_eq!(written, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "alice1\n1alice\n");
    }

    #[test]
    fn buffer_reports_truncation() {
        let (buffer, truncated) = to_buffer(words(&["a", "b", "c"]), 2);
        assert_eq!(buffer, "a\nb\n");
        assert!(truncated);

        let (buffer, truncated) = to_buffer(words(&["a"]), 2);
        assert_eq!(buffer, "a\n");
        assert!(!truncated);
    }

    #[test]
    fn new_file_is_created_with_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/list.txt");
        let file = open_output(path.to_str().unwrap()).unwrap().unwrap();
        assert_eq!(write_lines(words(&["x"]), file).unwrap(), 1);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "x\n");
    }
}
