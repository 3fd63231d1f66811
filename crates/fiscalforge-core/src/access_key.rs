use rand::Rng;
use rand::RngCore;
use tracing::warn;

use crate::cnpj;
use crate::digits::{parse_digits, strip_separators};

/// IBGE codes for the 27 federative units, the only values allowed in the
/// first two digits of an access key.
pub const UF_CODES: [&str; 27] = [
    "11", "12", "13", "14", "15", "16", "17", "21", "22", "23", "24", "25", "26", "27", "28", "29",
    "31", "32", "33", "35", "41", "42", "43", "50", "51", "52", "53",
];

/// Model code for NF-e documents, fixed inside the access key.
const MODEL: &str = "55";

/// Options for access-key generation.
#[derive(Debug, Clone, Default)]
pub struct AccessKeyOptions {
    /// Issuer CNPJ embedded in positions 7..21. Mask separators are
    /// stripped; anything that is not 14 digits afterwards is discarded in
    /// favor of a fresh CNPJ so the key always comes out well formed.
    pub cnpj: Option<String>,
}

/// Generates a valid 44-digit access key.
pub fn generate(rng: &mut dyn RngCore, options: &AccessKeyOptions) -> String {
    let cnpj = resolve_cnpj(rng, options.cnpj.as_deref());

    let uf = UF_CODES[rng.random_range(0..UF_CODES.len())];
    // Emission year/month are drawn from the RNG, not the clock, so a seeded
    // caller gets the same key on every run.
    let year_month = format!(
        "{:02}{:02}",
        rng.random_range(20..=29),
        rng.random_range(1..=12)
    );
    let series = format!("{:03}", rng.random_range(0..1000));
    let number = format!("{:09}", rng.random_range(0..1_000_000_000u32));
    let emission_type = rng.random_range(1..=7).to_string();
    let numeric_code = format!("{:08}", rng.random_range(0..100_000_000u32));

    let mut key = format!("{uf}{year_month}{cnpj}{MODEL}{series}{number}{emission_type}{numeric_code}");
    let dv = check_digit(&key);
    key.push(char::from(b'0' + dv));
    key
}

/// Generates a valid access key formatted in groups of four digits.
pub fn generate_masked(rng: &mut dyn RngCore, options: &AccessKeyOptions) -> String {
    mask(&generate(rng, options))
}

fn resolve_cnpj(rng: &mut dyn RngCore, provided: Option<&str>) -> String {
    if let Some(raw) = provided {
        let stripped = strip_separators(raw);
        if stripped.len() == 14 {
            return stripped;
        }
        warn!(cnpj = %raw, "discarding malformed CNPJ for access key");
    }
    cnpj::generate(rng)
}

/// Computes the verification digit over the first 43 digits: right-to-left
/// weighted sum with weights cycling 2..=9, remainder 0 or 1 clamps to 0.
/// Non-digit characters count as 0, matching the lenient source behavior.
pub fn check_digit(key: &str) -> u8 {
    let mut sum: u64 = 0;
    let mut weight = 2u64;
    for c in key.chars().rev() {
        let digit = c.to_digit(10).unwrap_or(0) as u64;
        sum += digit * weight;
        weight = if weight == 9 { 2 } else { weight + 1 };
    }
    let remainder = sum % 11;
    if remainder < 2 { 0 } else { (11 - remainder) as u8 }
}

/// Groups the 44 digits in blocks of four separated by spaces. Inputs that
/// are not 44 characters long are returned unchanged.
pub fn mask(key: &str) -> String {
    if key.chars().count() != 44 {
        return key.to_string();
    }
    let chars: Vec<char> = key.chars().collect();
    chars
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Checks 44-digit content, a known UF code and the verification digit.
pub fn is_valid(key: &str) -> bool {
    let Some(digits) = parse_digits(key) else {
        return false;
    };
    if digits.len() != 44 {
        return false;
    }
    if !UF_CODES.contains(&&key[..2]) {
        return false;
    }
    check_digit(&key[..43]) == digits[43]
}
