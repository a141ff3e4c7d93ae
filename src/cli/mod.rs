mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::{Context, Stop};
pub use flags::CliFlags;
pub use parse::parse;

/// Parse arguments and run to completion, exiting with a status on failure.
pub fn run(args: Vec<String>) {
    let mut context = match Context::new(args) {
        Ok(context) => context,
        Err(e) => {
            prompts::error(&e);
            prompts::usage_hint();
            std::process::exit(2);
        }
    };

    match context.run() {
        Ok(()) | Err(Stop::Done) => {}
        Err(Stop::Fail(code)) => std::process::exit(code),
    }
}
