use rand::Rng;
use rand::RngCore;

/// Draws `len` random decimal digits.
pub fn random_digits(rng: &mut dyn RngCore, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.random_range(0..=9)).collect()
}

/// Concatenates a digit slice into a string.
pub fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + *d)).collect()
}

/// Parses a string into decimal digits, failing on any other character.
pub fn parse_digits(value: &str) -> Option<Vec<u8>> {
    value
        .chars()
        .map(|c| c.to_digit(10).map(|d| d as u8))
        .collect()
}

/// Removes everything but decimal digits. Used to undo cosmetic masks.
pub fn strip_separators(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn random_digits_are_decimal() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let digits = random_digits(&mut rng, 32);
        assert_eq!(digits.len(), 32);
        assert!(digits.iter().all(|d| *d <= 9));
    }

    #[test]
    fn parse_rejects_non_digits() {
        assert_eq!(parse_digits("0123"), Some(vec![0, 1, 2, 3]));
        assert_eq!(parse_digits("12a4"), None);
    }

    #[test]
    fn strip_keeps_digit_content() {
        assert_eq!(strip_separators("12.345.678/0001-95"), "12345678000195");
    }
}
