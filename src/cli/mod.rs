mod context;
mod flags;
mod parse;
pub mod prompts;

pub use flags::CliFlags;
pub use parse::parse;

use context::Context;

/// Run CLI mode.
pub fn run(args: Vec<String>) {
    match Context::new(args) {
        Ok(mut ctx) => {
            let _ = ctx.run();
        }
        Err(msg) => {
            prompts::error(&msg);
            prompts::error("Try 'mixpass --help'");
            std::process::exit(2);
        }
    }
}
