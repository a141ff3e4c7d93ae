use std::env;

mod cli;
mod exits;
mod logging;
mod output;
mod terminal;
mod tui;

fn main() {
    exits::reset_terminal();
    exits::install_handlers();
    exits::harden();

    let args: Vec<String> = env::args().collect();
    cli::run(args);
}
