use std::time::{Duration, Instant};

use copypasta::{ClipboardContext, ClipboardProvider};
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use zeroize::Zeroize;

use crate::pass::{self, CharClass, Strength, strength};
use crate::random::OsSource;
use crate::settings::{MAX_LENGTH, MIN_LENGTH, Settings};
use crate::terminal::{RawModeGuard, clear, print_error, reset_terminal};

use super::text;

/// How long transient status messages stay on screen.
const MESSAGE_WINDOW: Duration = Duration::from_secs(2);

/// Transient status line shown under the screen.
struct Flash {
    text: &'static str,
    since: Instant,
}

impl Flash {
    fn new(text: &'static str) -> Self {
        Self {
            text,
            since: Instant::now(),
        }
    }

    fn expired(&self) -> bool {
        self.since.elapsed() >= MESSAGE_WINDOW
    }

    fn remaining(&self) -> Duration {
        MESSAGE_WINDOW.saturating_sub(self.since.elapsed())
    }
}

pub fn run() {
    reset_terminal();

    let mut settings = match Settings::load_from_file() {
        Ok(s) => s,
        Err(e) => {
            print_error(&format!("Error loading settings: {}", e));
            Settings::default()
        }
    };
    settings.normalize();

    let mut rng = OsSource::new();
    let mut clipboard = ClipboardContext::new().ok();
    let mut current: Option<(String, Strength)> = None;
    let mut flash: Option<Flash> = None;

    loop {
        if flash.as_ref().is_some_and(Flash::expired) {
            flash = None;
        }

        clear();
        text::draw_screen(&settings, current.as_ref(), flash.as_ref().map(|f| f.text));

        let key = next_key(flash.as_ref().map(Flash::remaining));
        let Some((code, modifiers)) = key else {
            continue;
        };

        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => break,
            KeyCode::Char('q') | KeyCode::Esc => break,
            KeyCode::Enter | KeyCode::Char('g') => {
                let request = settings.request();
                if request.classes.is_empty() {
                    flash = Some(Flash::new("Select at least one character class"));
                } else if let Some(password) = pass::build(&request, &mut rng) {
                    let rating = strength::rate(&request.classes, request.effective_length());
                    if let Some((mut old, _)) = current.take() {
                        old.zeroize();
                    }
                    current = Some((password, rating));
                }
            }
            KeyCode::Char('c') => {
                if let Some((password, _)) = current.as_ref() {
                    let copied = copy_to_clipboard(&mut clipboard, password);
                    flash = Some(Flash::new(if copied { "Copied" } else { "Failed" }));
                }
            }
            KeyCode::Char('s') => {
                flash = Some(match settings.save_to_file() {
                    Ok(_) => Flash::new("Settings saved"),
                    Err(_) => Flash::new("Save failed"),
                });
            }
            KeyCode::Char('h') => {
                clear();
                text::print_help();
                next_key(None);
            }
            KeyCode::Left | KeyCode::Down | KeyCode::Char('-') => {
                if settings.pass_length > MIN_LENGTH {
                    settings.pass_length -= 1;
                    settings.normalize();
                }
            }
            KeyCode::Right | KeyCode::Up | KeyCode::Char('+') => {
                if settings.pass_length < MAX_LENGTH {
                    settings.pass_length += 1;
                }
            }
            KeyCode::Char('1') => settings.toggle(CharClass::Upper),
            KeyCode::Char('2') => settings.toggle(CharClass::Lower),
            KeyCode::Char('3') => settings.toggle(CharClass::Digit),
            KeyCode::Char('4') => settings.toggle(CharClass::Symbol),
            _ => {}
        }
    }

    if let Some((mut password, _)) = current.take() {
        password.zeroize();
    }
    clear();
    reset_terminal();
}

/// Read one key press, in raw mode for the duration of the read.
/// With a timeout, returns None once it elapses with no key.
fn next_key(timeout: Option<Duration>) -> Option<(KeyCode, KeyModifiers)> {
    let _guard = RawModeGuard::new().ok();
    let deadline = timeout.map(|t| Instant::now() + t);

    loop {
        if let Some(deadline) = deadline {
            let left = deadline.saturating_duration_since(Instant::now());
            if left.is_zero() || !event::poll(left).unwrap_or(false) {
                return None;
            }
        }
        match event::read() {
            Ok(Event::Key(key)) => return Some((key.code, key.modifiers)),
            Ok(_) => {}
            Err(_) => return None,
        }
    }
}

fn copy_to_clipboard(clipboard: &mut Option<ClipboardContext>, password: &str) -> bool {
    let Some(ctx) = clipboard.as_mut() else {
        return false;
    };
    match ctx.set_contents(password.to_string()) {
        Ok(_) => {
            if let Ok(mut retrieved) = ctx.get_contents() {
                retrieved.zeroize();
            }
            true
        }
        Err(_) => false,
    }
}
