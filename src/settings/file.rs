//! Settings file persistence.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use super::Settings;

pub fn save(settings: &Settings) -> std::io::Result<()> {
    let path = get_path();
    if let Some(parent) = Path::new(&path).parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)?;

    file.write_all(format_line(settings).as_bytes())?;
    Ok(())
}

pub fn load(settings: &mut Settings) -> std::io::Result<()> {
    let path = get_path();
    if !Path::new(&path).exists() {
        return save(settings);
    }

    let file = OpenOptions::new().read(true).open(&path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if !apply_line(line.trim(), settings) {
        // Unreadable or stale format: rewrite with current values.
        save(settings)?;
    }
    Ok(())
}

fn format_line(settings: &Settings) -> String {
    format!(
        "{},{},{},{},{},{},{}\n",
        settings.pass_length,
        settings.number_of_passwords,
        settings.use_uppercase,
        settings.use_lowercase,
        settings.use_digits,
        settings.use_symbols,
        settings.to_clipboard
    )
}

fn apply_line(line: &str, settings: &mut Settings) -> bool {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() != 7 {
        return false;
    }

    settings.pass_length = parts[0].parse().unwrap_or(settings.pass_length);
    settings.number_of_passwords = parts[1].parse().unwrap_or(settings.number_of_passwords);
    settings.use_uppercase = parts[2].parse().unwrap_or(settings.use_uppercase);
    settings.use_lowercase = parts[3].parse().unwrap_or(settings.use_lowercase);
    settings.use_digits = parts[4].parse().unwrap_or(settings.use_digits);
    settings.use_symbols = parts[5].parse().unwrap_or(settings.use_symbols);
    settings.to_clipboard = parts[6].parse().unwrap_or(settings.to_clipboard);
    settings.normalize();
    true
}

#[inline]
fn get_path() -> String {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    format!("{}/.config/mixpass/settings", home)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_round_trips() {
        let saved = Settings {
            pass_length: 14,
            number_of_passwords: 3,
            use_symbols: false,
            ..Default::default()
        };

        let mut loaded = Settings::default();
        assert!(apply_line(format_line(&saved).trim(), &mut loaded));
        assert_eq!(loaded.pass_length, 14);
        assert_eq!(loaded.number_of_passwords, 3);
        assert!(!loaded.use_symbols);
    }

    #[test]
    fn wrong_field_count_is_rejected() {
        let mut settings = Settings::default();
        assert!(!apply_line("10,1,true", &mut settings));
        assert!(!apply_line("", &mut settings));
    }

    #[test]
    fn bad_fields_keep_current_values() {
        let mut settings = Settings::default();
        assert!(apply_line("xx,1,true,true,true,true,false", &mut settings));
        assert_eq!(settings.pass_length, super::super::DEFAULT_LENGTH);
    }
}
