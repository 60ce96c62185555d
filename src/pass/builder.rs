//! Password generation.

use super::charset::CharClass;
use crate::random::RandomSource;

/// A single generation action: the desired length plus the classes
/// picked for it, in the order the UI lists them.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: Vec<CharClass>,
}

impl GenerationRequest {
    pub fn new(length: usize, classes: Vec<CharClass>) -> Self {
        Self { length, classes }
    }

    /// Length never below the number of selected classes, so every
    /// class can contribute at least one character.
    pub fn effective_length(&self) -> usize {
        self.length.max(self.classes.len())
    }
}

/// Generate a password containing at least one character from every
/// selected class.
///
/// Returns `None` when no classes are selected. Callers check before
/// invoking; this is the last line of defense.
pub fn build(request: &GenerationRequest, rng: &mut dyn RandomSource) -> Option<String> {
    if request.classes.is_empty() {
        return None;
    }

    let length = request.effective_length();
    let mut bytes = Vec::with_capacity(length);

    // One character from each selected class, in selection order.
    for class in &request.classes {
        bytes.push(random_byte(class.alphabet(), rng));
    }

    // Remaining slots: a random class first, then a random character
    // from that class's alphabet.
    for _ in request.classes.len()..length {
        let class = request.classes[rng.int_in(0, request.classes.len())];
        bytes.push(random_byte(class.alphabet(), rng));
    }

    shuffle(&mut bytes, rng);

    // Safety: alphabets are all ASCII
    Some(unsafe { String::from_utf8_unchecked(bytes) })
}

#[inline]
fn random_byte(alphabet: &[u8], rng: &mut dyn RandomSource) -> u8 {
    alphabet[rng.int_in(0, alphabet.len())]
}

/// Fisher-Yates: walk down from the top, swapping each slot with a
/// random slot at or below it.
fn shuffle(bytes: &mut [u8], rng: &mut dyn RandomSource) {
    for i in (1..bytes.len()).rev() {
        let j = rng.int_in(0, i + 1);
        bytes.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::OsSource;

    /// Deterministic source for repeatable tests.
    struct StepSource(u64);

    impl RandomSource for StepSource {
        fn int_in(&mut self, min: usize, max: usize) -> usize {
            self.0 = self
                .0
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            min + (self.0 >> 33) as usize % (max - min)
        }
    }

    fn request(length: usize, classes: &[CharClass]) -> GenerationRequest {
        GenerationRequest::new(length, classes.to_vec())
    }

    #[test]
    fn fills_requested_length() {
        let mut rng = StepSource(1);
        let req = request(12, &[CharClass::Upper, CharClass::Digit]);
        let password = build(&req, &mut rng).unwrap();
        assert_eq!(password.len(), 12);
    }

    #[test]
    fn covers_every_selected_class() {
        let mut rng = StepSource(7);
        let classes = [CharClass::Upper, CharClass::Digit, CharClass::Symbol];
        let password = build(&request(20, &classes), &mut rng).unwrap();
        for class in classes {
            assert!(
                password.bytes().any(|b| class.alphabet().contains(&b)),
                "missing {:?} in {:?}",
                class,
                password
            );
        }
    }

    #[test]
    fn no_foreign_characters() {
        let mut rng = StepSource(3);
        let classes = [CharClass::Lower, CharClass::Digit];
        let password = build(&request(32, &classes), &mut rng).unwrap();
        for byte in password.bytes() {
            assert!(classes.iter().any(|c| c.alphabet().contains(&byte)));
        }
    }

    #[test]
    fn raises_length_to_class_count() {
        // All four classes at length 3: one character from each.
        let mut rng = StepSource(11);
        let password = build(&request(3, &CharClass::ALL), &mut rng).unwrap();
        assert_eq!(password.len(), 4);
        for class in CharClass::ALL {
            let count = password
                .bytes()
                .filter(|b| class.alphabet().contains(b))
                .count();
            assert_eq!(count, 1, "expected exactly one {:?} character", class);
        }
    }

    #[test]
    fn single_class_single_character() {
        let mut rng = StepSource(5);
        let password = build(&request(1, &[CharClass::Upper]), &mut rng).unwrap();
        assert_eq!(password.len(), 1);
        assert!(password.bytes().all(|b| b.is_ascii_uppercase()));
    }

    #[test]
    fn empty_selection_yields_nothing() {
        let mut rng = StepSource(1);
        assert!(build(&request(10, &[]), &mut rng).is_none());
    }

    #[test]
    fn shuffle_preserves_multiset() {
        let mut rng = StepSource(42);
        let mut bytes = b"AAbc019~!?xyzXYZ".to_vec();
        let mut expected = bytes.clone();
        shuffle(&mut bytes, &mut rng);
        let mut got = bytes.clone();
        got.sort_unstable();
        expected.sort_unstable();
        assert_eq!(got, expected);
    }

    #[test]
    fn fresh_randomness_per_call() {
        let mut rng = OsSource::new();
        let req = request(20, &CharClass::ALL);
        let first = build(&req, &mut rng).unwrap();
        let second = build(&req, &mut rng).unwrap();
        // 92^20 outcomes; a collision here means the source is broken.
        assert_ne!(first, second);
    }
}
