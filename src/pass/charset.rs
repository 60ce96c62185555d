//! Character classes and their fixed alphabets.

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"~`!@#$%^&*()_-+={}[]|:;\"<,>.?/";

/// A named alphabet category used to constrain password composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Symbol,
}

impl CharClass {
    /// All classes, in the order the UI lists them.
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    /// The fixed, ordered alphabet for this class. All ASCII.
    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Upper => "Uppercase (A-Z)",
            CharClass::Lower => "Lowercase (a-z)",
            CharClass::Digit => "Digits (0-9)",
            CharClass::Symbol => "Symbols (~`!@#$%...)",
        }
    }

}

/// Combined pool size across the given classes (for the entropy readout).
pub fn pool_size(classes: &[CharClass]) -> usize {
    classes.iter().map(|c| c.alphabet().len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_sizes() {
        assert_eq!(CharClass::Upper.alphabet().len(), 26);
        assert_eq!(CharClass::Lower.alphabet().len(), 26);
        assert_eq!(CharClass::Digit.alphabet().len(), 10);
        assert_eq!(CharClass::Symbol.alphabet().len(), 30);
    }

    #[test]
    fn alphabets_are_disjoint() {
        for (i, a) in CharClass::ALL.iter().enumerate() {
            for b in &CharClass::ALL[i + 1..] {
                assert!(
                    a.alphabet().iter().all(|c| !b.alphabet().contains(c)),
                    "{:?} and {:?} overlap",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn pool_size_sums_selected_alphabets() {
        assert_eq!(pool_size(&[]), 0);
        assert_eq!(pool_size(&[CharClass::Digit]), 10);
        assert_eq!(pool_size(&CharClass::ALL), 92);
    }
}
