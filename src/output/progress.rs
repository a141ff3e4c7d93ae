//! File output with a progress box.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use zeroize::Zeroize;

use crate::terminal::{
    RawModeGuard, box_bottom, box_line, box_top, cursor_visible, flush, format_number,
    print_centered, progress_bar_box, reset_terminal,
};

/// Candidates between progress redraws and interrupt checks.
const REDRAW_EVERY: u64 = 4096;

fn draw_header(total: u128, path: &str) {
    box_top("Wordlist");
    box_line(&format!("Up to {} candidates", format_number(total)));
    box_line(&format!("Output: {}", canonical(path)));
    box_bottom();
    println!();
    print_centered("[Esc/Ctrl+C] to interrupt");
    println!();
}

fn canonical(path: &str) -> String {
    std::fs::canonicalize(path)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| path.to_string())
}

/// Listen for Esc or Ctrl+C until told to stop.
fn spawn_listener(tx: mpsc::Sender<()>, close_rx: mpsc::Receiver<()>) {
    thread::spawn(move || {
        let timeout = Duration::from_millis(10);
        loop {
            if let Ok(()) | Err(TryRecvError::Disconnected) = close_rx.try_recv() {
                break;
            }
            if !event::poll(timeout).unwrap_or(false) {
                continue;
            }
            if let Ok(Event::Key(key)) = event::read() {
                let is_ctrl_c =
                    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
                if is_ctrl_c || key.code == KeyCode::Esc {
                    let _ = tx.send(());
                    break;
                }
            }
        }
    });
}

/// Stream candidates into `file`, drawing progress against `total`
/// (the estimate, or the cap when that is smaller).
pub fn with_progress(
    candidates: impl Iterator<Item = String>,
    total: u128,
    file: File,
    path: &str,
) -> io::Result<u64> {
    reset_terminal();
    draw_header(total, path);

    let (tx, rx) = mpsc::channel();
    let (close_tx, close_rx) = mpsc::channel();
    let mut raw_guard = RawModeGuard::new().ok();
    spawn_listener(tx, close_rx);

    cursor_visible(false);
    print!("\r\n\r\n\r\n");
    flush();

    let start_time = Instant::now();
    let mut out = BufWriter::new(file);
    let mut written: u64 = 0;
    let mut interrupted = false;
    let mut result = Ok(());

    for mut candidate in candidates {
        candidate.push('\n');
        let write = out.write_all(candidate.as_bytes());
        candidate.zeroize();
        if let Err(e) = write {
            result = Err(e);
            break;
        }
        written += 1;

        if written.is_multiple_of(REDRAW_EVERY) {
            if !matches!(rx.try_recv(), Err(TryRecvError::Empty)) {
                interrupted = true;
                break;
            }
            draw_progress(written, total, start_time);
        }
    }

    let flushed = out.flush();
    let _ = close_tx.send(());
    if let Some(guard) = raw_guard.as_mut() {
        guard.release();
    }
    if !interrupted && result.is_ok() {
        draw_progress(written, written.max(1) as u128, start_time);
    }
    cursor_visible(true);
    reset_terminal();
    result?;
    flushed?;

    println!();
    box_top(if interrupted { "Interrupted" } else { "Complete" });
    box_line(&format!(
        "{} candidate(s) written in {}ms",
        format_number(written as u128),
        start_time.elapsed().as_millis()
    ));
    box_line(&format!("Output: {}", canonical(path)));
    box_bottom();
    println!();

    Ok(written)
}

fn draw_progress(written: u64, total: u128, start_time: Instant) {
    let total = total.max(written as u128).max(1);
    let pct = (written as f64 / total as f64 * 100.0) as f32;
    let rate = written as f64 / start_time.elapsed().as_secs_f64().max(0.001);
    let stats = format!(
        "{} of {} • {:.1}% • {}/s",
        format_number(written as u128),
        format_number(total),
        pct,
        format_number(rate as u128)
    );
    print!("\x1b[3A");
    progress_bar_box(pct, &stats);
}
