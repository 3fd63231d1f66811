use rand::RngCore;

use crate::digits::{digits_to_string, parse_digits, random_digits};

const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Generates a valid random CNPJ as 14 unmasked digits.
pub fn generate(rng: &mut dyn RngCore) -> String {
    let mut digits = random_digits(rng, 12);
    let d1 = check_digit(&digits);
    digits.push(d1);
    let d2 = check_digit(&digits);
    digits.push(d2);
    digits_to_string(&digits)
}

/// Generates a valid random CNPJ formatted as `XX.XXX.XXX/XXXX-XX`.
pub fn generate_masked(rng: &mut dyn RngCore) -> String {
    mask(&generate(rng))
}

/// Computes the next CNPJ check digit. The weight table is picked from the
/// input length: 12 digits use the first-digit weights, 13 the second.
/// A remainder below 2 clamps to 0.
pub fn check_digit(digits: &[u8]) -> u8 {
    let weights: &[u32] = if digits.len() <= 12 {
        &FIRST_WEIGHTS
    } else {
        &SECOND_WEIGHTS
    };
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(d, w)| u32::from(*d) * w)
        .sum();
    let remainder = sum % 11;
    if remainder < 2 { 0 } else { (11 - remainder) as u8 }
}

/// Inserts the standard separators. Inputs that are not 14 digits are
/// returned unchanged.
pub fn mask(cnpj: &str) -> String {
    let Some(digits) = parse_digits(cnpj) else {
        return cnpj.to_string();
    };
    if digits.len() != 14 {
        return cnpj.to_string();
    }
    format!(
        "{}.{}.{}/{}-{}",
        digits_to_string(&digits[..2]),
        digits_to_string(&digits[2..5]),
        digits_to_string(&digits[5..8]),
        digits_to_string(&digits[8..12]),
        digits_to_string(&digits[12..]),
    )
}

/// Checks 14-digit content and both check digits.
pub fn is_valid(cnpj: &str) -> bool {
    let Some(digits) = parse_digits(cnpj) else {
        return false;
    };
    if digits.len() != 14 {
        return false;
    }
    check_digit(&digits[..12]) == digits[12] && check_digit(&digits[..13]) == digits[13]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digits::strip_separators;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn generated_cnpj_has_valid_check_digits() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..200 {
            let cnpj = generate(&mut rng);
            assert_eq!(cnpj.len(), 14);
            assert!(is_valid(&cnpj), "invalid cnpj generated: {cnpj}");
        }
    }

    #[test]
    fn mask_is_invertible() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let cnpj = generate(&mut rng);
        let masked = mask(&cnpj);
        assert_eq!(masked.len(), 18);
        assert_eq!(strip_separators(&masked), cnpj);
    }

    #[test]
    fn known_cnpj_validates() {
        // 11.222.333/0001-81 is the classic textbook example.
        assert!(is_valid("11222333000181"));
        assert!(!is_valid("11222333000180"));
    }

    #[test]
    fn wrong_length_is_invalid() {
        assert!(!is_valid("1122233300018"));
        assert!(!is_valid(""));
    }
}
