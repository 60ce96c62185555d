use crate::pass::{CharClass, Strength, charset};
use crate::settings::{MAX_LENGTH, MIN_LENGTH, Settings};
use crate::terminal::{
    GREEN, RED, RESET, YELLOW, box_bottom, box_line, box_line_center, box_opt, box_top,
    calculate_entropy, flush, print_rule,
};

fn checkbox(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

fn strength_color(strength: Strength) -> &'static str {
    match strength {
        Strength::Strong => GREEN,
        Strength::Medium => YELLOW,
        Strength::Weak => RED,
    }
}

/// Draw the single generation screen.
pub fn draw_screen(settings: &Settings, current: Option<&(String, Strength)>, flash: Option<&str>) {
    box_top("Mixpass");
    box_line("");

    match current {
        Some((password, strength)) => {
            box_line(&format!("  Password: {}", password));
            let color = strength_color(*strength);
            box_line(&format!(
                "  Strength: {}███ {}{}",
                color,
                strength.label(),
                RESET
            ));
        }
        None => {
            box_line("  Password: (press Enter to generate)");
            box_line("  Strength: ───");
        }
    }

    box_line("");
    print_rule();
    box_line("");
    box_line(&format!(
        "  Length: {:>2}   [{}-{}, Left/Right to adjust]",
        settings.pass_length, MIN_LENGTH, MAX_LENGTH
    ));
    box_line("");
    let toggles = [
        settings.use_uppercase,
        settings.use_lowercase,
        settings.use_digits,
        settings.use_symbols,
    ];
    for (i, (class, on)) in CharClass::ALL.iter().zip(toggles).enumerate() {
        box_line(&format!("  {}) {} {}", i + 1, checkbox(on), class.label()));
    }
    box_line("");

    let classes = settings.selected_classes();
    let pool = charset::pool_size(&classes);
    box_line(&format!(
        "  Entropy: {:.1} bits over {} characters",
        calculate_entropy(settings.pass_length, pool),
        pool
    ));
    box_line("");
    print_rule();
    box_line_center("Enter) generate  c) copy  s) save  h) help  q) quit");
    box_bottom();

    match flash {
        Some(text) => println!("  {}", text),
        None => println!(),
    }
    flush();
}

pub fn print_help() {
    box_top("Mixpass");
    box_line_center("Password generator with class coverage");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. A single screen to");
    box_line("     pick length and character classes and generate.");
    box_line("  2) Client: Pass flags directly (e.g., -l 16 -n 5) to generate");
    box_line("     passwords without the screen.");
    box_line("");
    box_line("USAGE:");
    box_line("  mixpass [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters per password, 1-20 (default: 10)");
    box_opt("  -n, --number <N>", "How many to generate (default: 1)");
    box_opt("      --no-upper", "Exclude uppercase letters");
    box_opt("      --no-lower", "Exclude lowercase letters");
    box_opt("      --no-digits", "Exclude digits");
    box_opt("      --no-symbols", "Exclude symbols");
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress all output except passwords");
    box_line("");
    box_line(" Settings:");
    box_opt("  -s, --saved", "Use saved settings from config file");
    box_opt("  -d, --default", "Use default settings");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  mixpass                  Interactive screen");
    box_line("  mixpass -l 16            One password, 16 characters");
    box_line("  mixpass -l 12 -n 3       Three passwords, 12 characters each");
    box_line("  mixpass --no-symbols -b  Alphanumeric password to clipboard");
    box_line("");
    box_bottom();
    println!();
}
