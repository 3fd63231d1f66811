//! Document total placeholders, both the free-standing `v*` totals and the
//! `totalICMSTot*` group used by the NFe layout.

use super::{FieldRegistry, decimal};

pub(super) fn register(registry: &mut FieldRegistry) {
    for key in [
        "vBC_total",
        "vICMS_total",
        "vICMSDeson",
        "vFCP",
        "vBCST",
        "vST",
        "vFCPST",
        "vFCPSTRet",
        "vProd_total",
        "vFrete",
        "vSeg",
        "vDesc_total",
        "vII",
        "vIPI",
        "vIPIDevol",
        "vPIS_total",
        "vCOFINS_total",
        "vOutro",
        "vNF",
        "vTotTrib_total",
    ] {
        registry.register(key, |_, rng| decimal(rng, 0.0, 10_000.0, 2));
    }

    registry.register("totalICMSTotvBC", |_, rng| decimal(rng, 0.0, 10_000_000.0, 2));
    registry.register("totalICMSTotvICMS", |_, rng| decimal(rng, 0.0, 1_800_000.0, 2));
    registry.register("totalICMSTotvBCST", |_, _| "0".to_string());
    registry.register("totalICMSTotvST", |_, _| "0".to_string());
    registry.register("totalICMSTotvProd", |_, rng| decimal(rng, 0.0, 10_000_000.0, 2));
    registry.register("totalICMSTotvFrete", |_, _| "0".to_string());
    registry.register("totalICMSTotvSeg", |_, _| "0".to_string());
    registry.register("totalICMSTotvDesc", |_, _| "0".to_string());
    registry.register("totalICMSTotvII", |_, _| "0".to_string());
    registry.register("totalICMSTotvIPI", |_, _| "0".to_string());
    registry.register("totalICMSTotvPIS", |_, rng| decimal(rng, 0.0, 130_000.0, 2));
    registry.register("totalICMSTotvCOFINS", |_, rng| decimal(rng, 0.0, 400_000.0, 2));
    registry.register("totalICMSTotvOutro", |_, _| "0".to_string());
    registry.register("totalICMSTotvNF", |_, rng| decimal(rng, 0.0, 10_000_000.0, 2));
}
