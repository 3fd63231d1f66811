use rand::RngCore;

use crate::digits::{digits_to_string, parse_digits, random_digits};

/// Generates a valid random CPF as 11 unmasked digits.
pub fn generate(rng: &mut dyn RngCore) -> String {
    let mut digits = random_digits(rng, 9);
    let d1 = check_digit(&digits, 10);
    digits.push(d1);
    let d2 = check_digit(&digits, 11);
    digits.push(d2);
    digits_to_string(&digits)
}

/// Generates a valid random CPF formatted as `XXX.XXX.XXX-XX`.
pub fn generate_masked(rng: &mut dyn RngCore) -> String {
    mask(&generate(rng))
}

/// Computes a CPF check digit over `digits` with descending weights
/// starting at `weight_start` (10 for the first digit, 11 for the second).
/// A remainder below 2 clamps to 0.
pub fn check_digit(digits: &[u8], weight_start: u32) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| u32::from(*d) * (weight_start - i as u32))
        .sum();
    let remainder = sum % 11;
    if remainder < 2 { 0 } else { (11 - remainder) as u8 }
}

/// Inserts the standard separators. Inputs that are not 11 digits are
/// returned unchanged.
pub fn mask(cpf: &str) -> String {
    let Some(digits) = parse_digits(cpf) else {
        return cpf.to_string();
    };
    if digits.len() != 11 {
        return cpf.to_string();
    }
    format!(
        "{}.{}.{}-{}",
        digits_to_string(&digits[..3]),
        digits_to_string(&digits[3..6]),
        digits_to_string(&digits[6..9]),
        digits_to_string(&digits[9..]),
    )
}

/// Checks 11-digit content and both check digits.
pub fn is_valid(cpf: &str) -> bool {
    let Some(digits) = parse_digits(cpf) else {
        return false;
    };
    if digits.len() != 11 {
        return false;
    }
    check_digit(&digits[..9], 10) == digits[9] && check_digit(&digits[..10], 11) == digits[10]
}
