//! Line item placeholders: product data, commercial quantities and the
//! per-item tax groups (ICMS, PIS, COFINS).

use fake::Fake;
use fake::faker::lorem::en::{Sentence, Words};
use rand::Rng;
use rand::RngCore;

use super::{FieldContext, FieldRegistry, decimal, digit_code, number, pick};

const EAN_PREFIXES: [&str; 11] = [
    "789", "790", "791", "792", "793", "794", "795", "796", "797", "798", "799",
];

const UNITS: [&str; 10] = ["UN", "PC", "KG", "LT", "CX", "MT", "M2", "M3", "SC", "PCT"];

pub(super) fn register(registry: &mut FieldRegistry) {
    registry.register("nItem", |_, rng| number(rng, 1, 999));
    registry.register("cProd", product_code);
    registry.register("cEAN", |_, rng| pick(rng, &EAN_PREFIXES));
    registry.register("cEANTrib", |_, rng| pick(rng, &EAN_PREFIXES));
    registry.register("xProd", product_name);
    registry.register("NCM", |_, rng| digit_code(rng, 8));
    registry.register("CFOP", |_, rng| number(rng, 5101, 5999));
    registry.register("uCom", |_, rng| pick(rng, &UNITS));
    registry.register("uTrib", |_, rng| pick(rng, &UNITS));
    registry.register("qCom", |_, rng| decimal(rng, 0.1, 100.0, 4));
    registry.register("qTrib", |_, rng| decimal(rng, 0.1, 100.0, 4));
    registry.register("vUnCom", |_, rng| decimal(rng, 0.01, 1000.0, 10));
    registry.register("vUnTrib", |_, rng| decimal(rng, 0.01, 1000.0, 4));
    registry.register("vProd", |_, rng| decimal(rng, 0.01, 10_000.0, 2));
    registry.register("vDesc", |_, rng| decimal(rng, 0.0, 1000.0, 2));
    registry.register("indTot", |_, rng| pick(rng, &["0", "1"]));
    registry.register("vTotTrib", |_, rng| decimal(rng, 0.0, 1000.0, 2));
    registry.register("infAdProd", |_, rng| {
        Sentence(5..12).fake_with_rng::<String, _>(rng)
    });

    registry.register("orig", |_, rng| number(rng, 0, 9));
    registry.register("CSOSN", |_, _| "102".to_string());
    registry.register("CST_PIS", |_, _| "49".to_string());
    registry.register("vBC_PIS", |_, rng| decimal(rng, 0.0, 10_000.0, 2));
    registry.register("pPIS", |_, rng| decimal(rng, 0.0, 100.0, 4));
    registry.register("vPIS", |_, rng| decimal(rng, 0.0, 10_000.0, 2));
    registry.register("CST_COFINS", |_, _| "49".to_string());
    registry.register("vBC_COFINS", |_, rng| decimal(rng, 0.0, 10_000.0, 2));
    registry.register("pCOFINS", |_, rng| decimal(rng, 0.0, 100.0, 4));
    registry.register("vCOFINS", |_, rng| decimal(rng, 0.0, 10_000.0, 2));

    registry.register("detNItem", |_, rng| number(rng, 1, 100));
    registry.register("detProdCProd", |_, rng| digit_code(rng, 5));
    registry.register("detProdCEAN", optional_ean);
    registry.register("detProdCEANTrib", optional_ean);
    registry.register("detProdXProd", product_name);
    registry.register("detProdCFOP", |_, rng| number(rng, 5101, 5999));
    registry.register("detProdUCom", |_, rng| pick(rng, &UNITS));
    registry.register("detProdUTrib", |_, rng| pick(rng, &UNITS));
    registry.register("detProdQCom", |_, rng| decimal(rng, 0.0001, 1_000_000.0, 4));
    registry.register("detProdQTrib", |_, rng| decimal(rng, 0.0001, 1_000_000.0, 4));
    registry.register("detProdVUnCom", |_, rng| decimal(rng, 0.01, 1000.0, 2));
    registry.register("detProdVUnTrib", |_, rng| decimal(rng, 0.01, 1000.0, 4));
    registry.register("detProdVProd", |_, rng| decimal(rng, 0.01, 10_000_000.0, 2));

    registry.register("impostoICMS00orig", |_, rng| number(rng, 0, 3));
    registry.register("impostoICMS00CST", |_, _| "00".to_string());
    registry.register("impostoICMS00modBC", |_, rng| number(rng, 0, 3));
    registry.register("impostoICMS00vBC", |_, rng| decimal(rng, 0.0, 10_000_000.0, 2));
    registry.register("impostoICMS00pICMS", |_, rng| decimal(rng, 0.0, 100.0, 2));
    registry.register("impostoICMS00vICMS", |_, rng| decimal(rng, 0.0, 1_800_000.0, 2));
    registry.register("impostoPISAliqCST", |_, _| "01".to_string());
    registry.register("impostoPISAliqvBC", |_, rng| decimal(rng, 0.0, 10_000_000.0, 2));
    registry.register("impostoPISAliqpPIS", |_, rng| decimal(rng, 0.0, 100.0, 2));
    registry.register("impostoPISAliqvPIS", |_, rng| decimal(rng, 0.0, 130_000.0, 2));
    registry.register("impostoCOFINSAliqCST", |_, _| "01".to_string());
    registry.register("impostoCOFINSAliqvBC", |_, rng| decimal(rng, 0.0, 10_000_000.0, 2));
    registry.register("impostoCOFINSAliqpCOFINS", |_, rng| decimal(rng, 0.0, 100.0, 2));
    registry.register("impostoCOFINSAliqvCOFINS", |_, rng| decimal(rng, 0.0, 400_000.0, 2));
}

fn product_code(_: &FieldContext<'_>, rng: &mut dyn RngCore) -> String {
    format!(
        "{}.{}.{}",
        digit_code(rng, 2),
        digit_code(rng, 2),
        digit_code(rng, 9)
    )
}

fn product_name(_: &FieldContext<'_>, rng: &mut dyn RngCore) -> String {
    Words(2..4).fake_with_rng::<Vec<String>, _>(rng).join(" ")
}

// Retail EANs are optional; an empty element is valid.
fn optional_ean(_: &FieldContext<'_>, rng: &mut dyn RngCore) -> String {
    if rng.random_bool(0.5) {
        pick(rng, &EAN_PREFIXES)
    } else {
        String::new()
    }
}
