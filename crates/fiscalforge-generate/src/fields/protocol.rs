//! Signature and authorization protocol placeholders. The values only have
//! to look plausible; nothing verifies the signature of a mock document.

use fiscalforge_core::access_key::{self, AccessKeyOptions};
use rand::RngCore;

use super::{FieldContext, FieldRegistry, alnum, datetime_rfc3339, digit_code, number, pick};

pub(super) fn register(registry: &mut FieldRegistry) {
    registry.register("DigestValue", |_, rng| base64ish(rng, 27));
    registry.register("digVal", |_, rng| base64ish(rng, 27));
    registry.register("SignatureValue", |_, rng| alnum(rng, 64));
    registry.register("X509Certificate", |_, rng| alnum(rng, 96));
    registry.register("tpAmbProt", |_, rng| pick(rng, &["1", "2"]));
    registry.register("verAplic", |_, rng| {
        format!("SP_NFE_PL_009_V{}", number(rng, 1, 9))
    });
    registry.register("chNFe", referenced_key);
    registry.register("dhRecbto", |_, rng| datetime_rfc3339(rng));
    registry.register("nProt", |_, rng| digit_code(rng, 15));
    registry.register("cStat", |_, _| "100".to_string());
    registry.register("xMotivo", |_, _| "Autorizado o uso da NF-e".to_string());
    registry.register("infAdicInfAdFisco", |_, _| {
        "Documento fiscal de demonstracao, sem valor fiscal".to_string()
    });
}

// Referenced documents get their own key, unrelated to this document's.
fn referenced_key(_: &FieldContext<'_>, rng: &mut dyn RngCore) -> String {
    access_key::generate(rng, &AccessKeyOptions::default())
}

fn base64ish(rng: &mut dyn RngCore, len: usize) -> String {
    let mut value = alnum(rng, len);
    value.push('=');
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::GenerationConfig;
    use std::collections::HashMap;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn dispatch(key: &str, seed: u64) -> String {
        let registry = FieldRegistry::new();
        let config = GenerationConfig::default();
        let resolved = HashMap::new();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        registry.dispatch(
            key,
            &FieldContext {
                config: &config,
                resolved: &resolved,
            },
            &mut rng,
        )
    }

    #[test]
    fn referenced_document_key_is_valid() {
        for seed in 0..10 {
            let key = dispatch("chNFe", seed);
            assert!(access_key::is_valid(&key), "invalid chNFe: {key}");
        }
    }

    #[test]
    fn protocol_number_is_fifteen_digits() {
        let value = dispatch("nProt", 1);
        assert_eq!(value.len(), 15);
        assert!(value.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn authorized_status_uses_the_standard_code() {
        assert_eq!(dispatch("cStat", 1), "100");
        assert_eq!(dispatch("xMotivo", 1), "Autorizado o uso da NF-e");
    }

    #[test]
    fn digest_looks_base64_padded() {
        let value = dispatch("DigestValue", 2);
        assert_eq!(value.len(), 28);
        assert!(value.ends_with('='));
    }
}
