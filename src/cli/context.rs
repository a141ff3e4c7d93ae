//! CLI context - bundles settings, flags, and clipboard state.

use std::path::PathBuf;
use std::time::Instant;

use copypasta::{ClipboardContext, ClipboardProvider};
use profpass::settings::file;
use profpass::{Config, Generator, Settings, Target};
use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::logging;
use crate::output;
use crate::tui::{collect_target, print_banner, print_estimate, print_help};

/// Most candidates put on the clipboard.
const CLIPBOARD_LIMIT: usize = 100_000;
/// File runs at least this large get the progress box.
const PROGRESS_THRESHOLD: u128 = 500_000;
/// Terminal runs larger than this ask first.
const LARGE_RUN: u128 = 1_000_000_000;

/// Why a run ended before (or instead of) completing normally.
#[derive(Debug, PartialEq, Eq)]
pub enum Stop {
    /// Early exit - not an error, just done.
    Done,
    /// Exit with this status.
    Fail(i32),
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub config_path: PathBuf,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;
        quiet::set(flags.quiet);
        logging::init(flags.quiet);

        let config_path = flags
            .config
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(file::default_path);
        let mut settings = Settings::load_from_file(&config_path);
        flags.apply(&mut settings);

        Ok(Self {
            settings,
            config_path,
            clipboard: None,
            flags,
        })
    }

    /// Run CLI. Returns `Err(Stop::Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Stop> {
        self.handle_info_flags()?;
        let config = self.validate()?;
        self.handle_save_config(&config)?;
        let target = self.load_target()?;

        let generator = Generator::new(&target, &config);
        let estimate = generator.estimate();
        tracing::debug!(estimate = %estimate, "estimated candidates");
        self.handle_estimate(estimate, &config)?;

        self.handle_clipboard()?;
        self.generate_output(&generator, estimate)
    }

    fn handle_info_flags(&self) -> Result<(), Stop> {
        if self.flags.help {
            print_help();
            return Err(Stop::Done);
        }
        if self.flags.version {
            println!("profpass {}", env!("CARGO_PKG_VERSION"));
            return Err(Stop::Done);
        }
        Ok(())
    }

    fn validate(&self) -> Result<Config, Stop> {
        self.settings.clone().validate().map_err(|e| {
            prompts::error(&format!("Invalid settings: {e}"));
            Stop::Fail(1)
        })
    }

    fn handle_save_config(&self, config: &Config) -> Result<(), Stop> {
        if !self.flags.save_config {
            return Ok(());
        }
        let path = self.config_path.display().to_string();
        match config.save_to_file(&self.config_path) {
            Ok(()) => {
                prompts::settings_saved(&path);
                Err(Stop::Done)
            }
            Err(e) => {
                prompts::error(&format!("Failed to save settings to {path}: {e}"));
                Err(Stop::Fail(1))
            }
        }
    }

    fn load_target(&self) -> Result<Target, Stop> {
        if let Some(ref path) = self.flags.profile {
            return Target::from_json_file(path).map_err(|e| {
                prompts::error(&e.to_string());
                Stop::Fail(1)
            });
        }

        if !quiet::enabled() {
            print_banner();
        }
        collect_target().map_err(|_| {
            prompts::warn("Profile entry cancelled.");
            Stop::Done
        })
    }

    fn handle_estimate(&self, estimate: u128, config: &Config) -> Result<(), Stop> {
        if !self.flags.estimate {
            return Ok(());
        }
        if quiet::enabled() {
            println!("{estimate}");
        } else {
            print_estimate(estimate, config);
        }
        Err(Stop::Done)
    }

    fn handle_clipboard(&mut self) -> Result<(), Stop> {
        if !self.flags.clipboard {
            return Ok(());
        }
        match ClipboardContext::new() {
            Ok(c) => {
                self.clipboard = Some(c);
                Ok(())
            }
            Err(e) => {
                tracing::debug!(error = %e, "clipboard unavailable");
                if prompts::clipboard_fallback_prompt() {
                    Ok(())
                } else {
                    Err(Stop::Done)
                }
            }
        }
    }

    /// Generate candidates and hand them to the chosen sink.
    pub fn generate_output(&mut self, generator: &Generator<'_>, estimate: u128) -> Result<(), Stop> {
        let start = Instant::now();
        let total = match generator.config.cap() {
            Some(cap) => estimate.min(cap as u128),
            None => estimate,
        };

        if let Some(ctx) = self.clipboard.as_mut() {
            let (mut buffer, truncated) = output::to_buffer(generator.candidates(), CLIPBOARD_LIMIT);
            let count = buffer.lines().count();
            match ctx.set_contents(buffer.clone()) {
                Ok(()) => {
                    if let Ok(mut retrieved) = ctx.get_contents() {
                        retrieved.zeroize();
                    }
                    prompts::clipboard_copied(count, truncated);
                }
                Err(e) => prompts::clipboard_error(&e.to_string()),
            }
            buffer.zeroize();
            return Ok(());
        }

        let written = if let Some(path) = self.flags.output_path() {
            let file = match output::open_output(&path) {
                Ok(Some(file)) => file,
                Ok(None) => return Err(Stop::Done),
                Err(e) => {
                    prompts::error(&format!("Failed to open {path}: {e}"));
                    return Err(Stop::Fail(1));
                }
            };
            let result = if !quiet::enabled() && quiet::stdout_is_terminal() && total >= PROGRESS_THRESHOLD {
                output::with_progress(generator.candidates(), total, file, &path)
            } else {
                output::write_lines(generator.candidates(), file).inspect(|&count| {
                    prompts::candidates_written(count, &path);
                })
            };
            result.map_err(|e| {
                prompts::error(&format!("Failed to write {path}: {e}"));
                Stop::Fail(1)
            })?
        } else {
            if quiet::stdout_is_terminal() && total > LARGE_RUN && !prompts::large_run_prompt(total) {
                return Err(Stop::Done);
            }
            output::to_terminal(generator.candidates()).map_err(|e| {
                prompts::error(&format!("Failed to write output: {e}"));
                Stop::Fail(1)
            })?
        };

        tracing::info!(
            written,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "generation finished"
        );
        Ok(())
    }
}
