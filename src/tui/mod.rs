//! Interactive generation screen.

mod screen;
mod text;

pub use text::print_help;

/// Run TUI interactive mode.
pub fn run() {
    screen::run();
}
