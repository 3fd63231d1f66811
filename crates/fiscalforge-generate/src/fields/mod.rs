//! Placeholder value catalog.
//!
//! Every placeholder key a bundled template may carry is registered here
//! with a generator function. Keys are grouped by document section: tax
//! identifiers, header fields, parties and addresses, line items, totals,
//! transport, payment and the authorization protocol.

mod header;
mod ident;
mod item;
mod party;
mod payment;
mod protocol;
mod totals;
mod transport;

use std::collections::HashMap;

use fiscalforge_core::digits::{digits_to_string, random_digits};
use rand::Rng;
use rand::RngCore;
use rand::seq::IndexedRandom;
use tracing::debug;

use crate::options::GenerationConfig;

/// Inputs available to a field generator: the call configuration and the
/// values already produced for earlier keys in dependency order.
pub struct FieldContext<'a> {
    pub config: &'a GenerationConfig,
    pub resolved: &'a HashMap<String, String>,
}

/// A generator for one placeholder key.
pub type FieldFn = fn(&FieldContext<'_>, &mut dyn RngCore) -> String;

/// Dispatch table from placeholder key to generator.
pub struct FieldRegistry {
    fields: HashMap<&'static str, FieldFn>,
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldRegistry {
    /// Builds the full catalog of bundled placeholder keys.
    pub fn new() -> Self {
        let mut registry = Self {
            fields: HashMap::new(),
        };
        ident::register(&mut registry);
        header::register(&mut registry);
        party::register(&mut registry);
        item::register(&mut registry);
        totals::register(&mut registry);
        transport::register(&mut registry);
        payment::register(&mut registry);
        protocol::register(&mut registry);
        registry
    }

    pub fn register(&mut self, key: &'static str, field: FieldFn) {
        self.fields.insert(key, field);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Every key the registry can generate, sorted. Callers that want to
    /// reject unknown template keys up front can diff against this list.
    pub fn known_keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.fields.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Generates the value for `key`. Unknown keys resolve to an empty
    /// string so a stray token never aborts the whole document.
    pub fn dispatch(&self, key: &str, ctx: &FieldContext<'_>, rng: &mut dyn RngCore) -> String {
        match self.fields.get(key) {
            Some(field) => field(ctx, rng),
            None => {
                debug!(key, "no generator registered for placeholder");
                String::new()
            }
        }
    }
}

pub(crate) fn number(rng: &mut dyn RngCore, min: i64, max: i64) -> String {
    rng.random_range(min..=max).to_string()
}

pub(crate) fn decimal(rng: &mut dyn RngCore, min: f64, max: f64, precision: usize) -> String {
    let value = rng.random_range(min..max);
    format!("{value:.precision$}")
}

/// A zero-padded numeric code of fixed width.
pub(crate) fn digit_code(rng: &mut dyn RngCore, len: usize) -> String {
    digits_to_string(&random_digits(rng, len))
}

pub(crate) fn pick(rng: &mut dyn RngCore, choices: &[&str]) -> String {
    choices.choose(rng).copied().unwrap_or_default().to_string()
}

/// A plausible emission date, drawn from the RNG rather than the clock so
/// seeded generators give byte-identical output on every run. Days stop at
/// 28 to stay valid in every month.
pub(crate) fn date_iso(rng: &mut dyn RngCore) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        rng.random_range(2023..=2025),
        rng.random_range(1..=12),
        rng.random_range(1..=28)
    )
}

pub(crate) fn datetime_rfc3339(rng: &mut dyn RngCore) -> String {
    format!(
        "{}T{:02}:{:02}:{:02}-03:00",
        date_iso(rng),
        rng.random_range(0..24),
        rng.random_range(0..60),
        rng.random_range(0..60)
    )
}

pub(crate) fn alnum(rng: &mut dyn RngCore, len: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    (0..len)
        .map(|_| {
            let index = rng.random_range(0..CHARSET.len());
            CHARSET[index] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn context<'a>(
        config: &'a GenerationConfig,
        resolved: &'a HashMap<String, String>,
    ) -> FieldContext<'a> {
        FieldContext { config, resolved }
    }

    #[test]
    fn unknown_key_resolves_to_empty_string() {
        let registry = FieldRegistry::new();
        let config = GenerationConfig::default();
        let resolved = HashMap::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let value = registry.dispatch("noSuchKey", &context(&config, &resolved), &mut rng);
        assert_eq!(value, "");
        assert!(!registry.contains("noSuchKey"));
    }

    #[test]
    fn every_known_key_produces_a_nonpanicking_value() {
        let registry = FieldRegistry::new();
        let config = GenerationConfig::default();
        let mut resolved = HashMap::new();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for key in registry.known_keys() {
            let value = registry.dispatch(key, &context(&config, &resolved), &mut rng);
            resolved.insert(key.to_string(), value);
        }
    }

    #[test]
    fn catalog_covers_the_core_document_keys() {
        let registry = FieldRegistry::new();
        for key in [
            "accessKey",
            "CPF",
            "emitCNPJ",
            "destCNPJ",
            "cUF",
            "natOp",
            "detProdXProd",
            "totalICMSTotvNF",
            "transpModFrete",
            "tPag",
            "nProt",
        ] {
            assert!(registry.contains(key), "missing generator for {key}");
        }
    }

    #[test]
    fn digit_code_is_fixed_width() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..20 {
            let code = digit_code(&mut rng, 7);
            assert_eq!(code.len(), 7);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn decimal_respects_precision() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let value = decimal(&mut rng, 0.0, 100.0, 4);
        let (_, fraction) = value.split_once('.').unwrap();
        assert_eq!(fraction.len(), 4);
    }
}
