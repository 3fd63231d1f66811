//! Document header placeholders: identification codes, dates and the
//! emission flags of the `ide` section.

use fake::Fake;
use fake::faker::lorem::en::Word;
use fiscalforge_core::UF_CODES;
use rand::RngCore;

use super::{FieldContext, FieldRegistry, date_iso, datetime_rfc3339, number, pick};

pub(super) fn register(registry: &mut FieldRegistry) {
    registry.register("cUF", |_, rng| pick(rng, &UF_CODES));
    registry.register("cNF", |_, rng| number(rng, 10_000_000, 99_999_999));
    registry.register("natOp", nat_op);
    registry.register("serie", |_, rng| number(rng, 1, 999));
    registry.register("nNF", |_, rng| number(rng, 1, 999_999_999));
    registry.register("dhEmi", |_, rng| datetime_rfc3339(rng));
    registry.register("dEmi", |_, rng| date_iso(rng));
    registry.register("dSaiEnt", |_, rng| date_iso(rng));
    registry.register("tpNF", |_, rng| pick(rng, &["0", "1"]));
    registry.register("idDest", |_, rng| pick(rng, &["1", "2", "3"]));
    registry.register("cMunFG", |_, rng| number(rng, 1_000_000, 9_999_999));
    registry.register("tpImp", |_, rng| pick(rng, &["0", "1", "2", "3", "4"]));
    registry.register("tpEmis", |_, rng| number(rng, 1, 9));
    registry.register("cDV", |_, rng| number(rng, 0, 9));
    registry.register("tpAmb", |_, rng| pick(rng, &["1", "2"]));
    registry.register("finNFe", |_, rng| pick(rng, &["1", "2", "3", "4"]));
    registry.register("indFinal", |_, rng| pick(rng, &["0", "1"]));
    registry.register("indPres", |_, rng| pick(rng, &["0", "1", "2", "3", "4", "9"]));
    registry.register("indIntermed", |_, rng| pick(rng, &["0", "1"]));
    registry.register("indPag", |_, rng| pick(rng, &["0", "1"]));
    registry.register("procEmi", |_, rng| number(rng, 0, 3));
    registry.register("verProc", |_, rng| {
        Word().fake_with_rng::<String, _>(rng)
    });
}

fn nat_op(_: &FieldContext<'_>, rng: &mut dyn RngCore) -> String {
    pick(
        rng,
        &[
            "Venda a vista",
            "Venda a prazo",
            "Devolucao de venda",
            "Compra para revenda",
        ],
    )
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
    fn uf_code_is_a_known_ibge_code() {
        for seed in 0..20 {
            let value = dispatch("cUF", seed);
            assert!(UF_CODES.contains(&value.as_str()));
        }
    }

    #[test]
    fn numeric_code_stays_eight_digits() {
        for seed in 0..20 {
            let value = dispatch("cNF", seed);
            assert_eq!(value.len(), 8);
            assert!(value.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn emission_datetime_carries_an_utc_offset() {
        let value = dispatch("dhEmi", 1);
        assert!(value.len() >= 25, "unexpected format: {value}");
        assert_eq!(&value[10..11], "T");
    }

    #[test]
    fn environment_flag_is_production_or_homologation() {
        for seed in 0..20 {
            let value = dispatch("tpAmb", seed);
            assert!(value == "1" || value == "2");
        }
    }
}
