//! CLI context - bundles settings, flags, and clipboard state.

use std::io::Write;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{CliFlags, parse, prompts};
use crate::pass;
use crate::random::OsSource;
use crate::settings::Settings;
use crate::tui::print_help;

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for CLI mode.
pub struct Context {
    settings: Settings,
    clipboard: Option<ClipboardContext>,
    flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = parse(&args).map_err(|e| e.to_string())?;

        let settings = if flags.saved && !flags.default {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Ok(Self {
            settings,
            clipboard: None,
            flags,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        prompts::set_quiet(self.flags.quiet);
        self.apply_flags();
        self.generate_output()
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("mixpass {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.settings.pass_length = len;
        }
        if let Some(num) = self.flags.number {
            self.settings.number_of_passwords = num;
        }

        if self.flags.no_upper {
            self.settings.use_uppercase = false;
        }
        if self.flags.no_lower {
            self.settings.use_lowercase = false;
        }
        if self.flags.no_digits {
            self.settings.use_digits = false;
        }
        if self.flags.no_symbols {
            self.settings.use_symbols = false;
        }

        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(c) => {
                    self.clipboard = Some(c);
                    self.settings.to_clipboard = true;
                }
                Err(_) => {
                    if prompts::clipboard_fallback_prompt() {
                        self.settings.to_clipboard = false;
                    } else {
                        std::process::exit(0);
                    }
                }
            }
        }

        self.settings.normalize();
    }

    /// Generate passwords and handle output.
    fn generate_output(&mut self) -> Result<(), Done> {
        if self.settings.selected_classes().is_empty() {
            prompts::error("No character classes selected (drop one of the --no-* flags)");
            return Err(Done);
        }

        let request = self.settings.request();
        let mut rng = OsSource::new();
        let count = self.settings.number_of_passwords.max(1);

        if self.settings.to_clipboard {
            let mut batch = String::new();
            for _ in 0..count {
                if let Some(mut password) = pass::build(&request, &mut rng) {
                    batch.push_str(&password);
                    batch.push('\n');
                    password.zeroize();
                }
            }
            if let Some(ctx) = self.clipboard.as_mut() {
                match ctx.set_contents(batch.clone()) {
                    Ok(_) => {
                        if let Ok(mut retrieved) = ctx.get_contents() {
                            retrieved.zeroize();
                        }
                        prompts::clipboard_copied();
                    }
                    Err(e) => prompts::clipboard_error(&e.to_string()),
                }
            }
            batch.zeroize();
        } else {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for _ in 0..count {
                if let Some(mut password) = pass::build(&request, &mut rng) {
                    let _ = writeln!(out, "{}", password);
                    password.zeroize();
                }
            }
        }

        Ok(())
    }
}
