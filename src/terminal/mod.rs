//! Terminal helpers: box drawing, colors, raw mode.

mod output;

pub use output::*;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// RAII guard: raw mode on while held, off when dropped.
pub struct RawModeGuard(());

impl RawModeGuard {
    pub fn new() -> std::io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self(()))
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}
