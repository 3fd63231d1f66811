//! Issuer, recipient, pickup and delivery party placeholders, including
//! their address blocks.

use fake::Fake;
use fake::faker::address::pt_br::{CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::company::pt_br::{CompanyName, CompanySuffix};
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Word;
use rand::RngCore;

use super::{FieldContext, FieldRegistry, digit_code, number, pick};

pub(super) fn register(registry: &mut FieldRegistry) {
    registry.register("emitXNome", company_name);
    registry.register("destXNome", company_name);
    registry.register("transpTransportaXNome", company_name);
    registry.register("emitXFant", trade_name);
    registry.register("emitIE", exempt_state_registration);
    registry.register("destIE", exempt_state_registration);
    registry.register("IE", |_, rng| digit_code(rng, 9));
    registry.register("CRT", |_, rng| number(rng, 1, 3));
    registry.register("indIEDest", |_, rng| pick(rng, &["1", "2", "9"]));
    registry.register("email", |_, rng| SafeEmail().fake_with_rng::<String, _>(rng));

    // The bare address keys and their Dest twins share the same shapes.
    for key in ["xLgr", "xLgrDest", "enderEmitXLgr", "enderDestXLgr", "retiradaXLgr", "entregaXLgr"] {
        registry.register(key, street);
    }
    for key in ["nro", "nroDest", "enderEmitNro", "enderDestNro", "retiradaNro", "entregaNro"] {
        registry.register(key, street_number);
    }
    for key in ["xCpl", "xCplDest", "enderEmitXCpl", "enderDestXCpl", "retiradaXCpl", "entregaXCpl"] {
        registry.register(key, complement);
    }
    for key in [
        "xBairro",
        "xBairroDest",
        "enderEmitXBairro",
        "enderDestXBairro",
        "retiradaXBairro",
        "entregaXBairro",
    ] {
        registry.register(key, neighborhood);
    }
    for key in ["cMun", "cMunDest", "enderEmitCMun", "enderDestCMun", "retiradaCMun", "entregaCMun"] {
        registry.register(key, municipality_code);
    }
    for key in ["xMun", "xMunDest", "enderEmitXMun", "enderDestXMun", "retiradaXMun", "entregaXMun"] {
        registry.register(key, city);
    }
    for key in ["UF", "UFDest", "enderEmitUF", "enderDestUF", "retiradaUF", "entregaUF"] {
        registry.register(key, state);
    }
    for key in ["CEP", "CEPDest", "enderEmitCEP", "enderDestCEP"] {
        registry.register(key, postal_code);
    }
    for key in ["cPais", "cPaisDest", "enderEmitCPais", "enderDestCPais"] {
        registry.register(key, |_, _| "1058".to_string());
    }
    for key in ["xPais", "xPaisDest", "enderEmitXPais", "enderDestXPais"] {
        registry.register(key, |_, _| "BRASIL".to_string());
    }
    for key in ["fone", "foneDest", "enderEmitFone", "enderDestFone"] {
        registry.register(key, phone);
    }
}

fn company_name(_: &FieldContext<'_>, rng: &mut dyn RngCore) -> String {
    CompanyName().fake_with_rng::<String, _>(rng)
}

fn trade_name(_: &FieldContext<'_>, rng: &mut dyn RngCore) -> String {
    CompanySuffix().fake_with_rng::<String, _>(rng)
}

fn exempt_state_registration(_: &FieldContext<'_>, rng: &mut dyn RngCore) -> String {
    pick(rng, &["ISENTO", "ISENTA"])
}

fn street(_: &FieldContext<'_>, rng: &mut dyn RngCore) -> String {
    StreetName().fake_with_rng::<String, _>(rng)
}

fn street_number(_: &FieldContext<'_>, rng: &mut dyn RngCore) -> String {
    number(rng, 1, 9999)
}

fn complement(_: &FieldContext<'_>, rng: &mut dyn RngCore) -> String {
    Word().fake_with_rng::<String, _>(rng)
}

fn neighborhood(_: &FieldContext<'_>, rng: &mut dyn RngCore) -> String {
    CityName().fake_with_rng::<String, _>(rng)
}

fn municipality_code(_: &FieldContext<'_>, rng: &mut dyn RngCore) -> String {
    number(rng, 1_000_000, 9_999_999)
}

fn city(_: &FieldContext<'_>, rng: &mut dyn RngCore) -> String {
    CityName().fake_with_rng::<String, _>(rng)
}

fn state(_: &FieldContext<'_>, rng: &mut dyn RngCore) -> String {
    StateAbbr().fake_with_rng::<String, _>(rng)
}

fn postal_code(_: &FieldContext<'_>, rng: &mut dyn RngCore) -> String {
    ZipCode().fake_with_rng::<String, _>(rng)
}

fn phone(_: &FieldContext<'_>, rng: &mut dyn RngCore) -> String {
    format!(
        "({}) 9{}-{}",
        number(rng, 11, 99),
        digit_code(rng, 4),
        digit_code(rng, 4)
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
    fn country_fields_are_fixed_to_brazil() {
        assert_eq!(dispatch("cPais", 1), "1058");
        assert_eq!(dispatch("xPais", 1), "BRASIL");
        assert_eq!(dispatch("enderDestCPais", 2), "1058");
    }

    #[test]
    fn phone_has_an_area_code_and_nine_digits() {
        for seed in 0..10 {
            let value = dispatch("fone", seed);
            assert!(value.starts_with('('), "unexpected phone: {value}");
            assert_eq!(value.len(), "(11) 91234-5678".len());
        }
    }

    #[test]
    fn state_registration_exemptions_use_the_fixed_wording() {
        for seed in 0..10 {
            let value = dispatch("emitIE", seed);
            assert!(value == "ISENTO" || value == "ISENTA");
        }
    }

    #[test]
    fn municipality_code_is_seven_digits() {
        for seed in 0..10 {
            let value = dispatch("cMunFG", seed);
            assert_eq!(value.len(), 7);
        }
    }
}
