//! Payment placeholders of the `pag` section and the NFCe QR code.

use rand::RngCore;

use super::{FieldContext, FieldRegistry, decimal, digit_code, pick};

pub(super) fn register(registry: &mut FieldRegistry) {
    registry.register("tPag", |_, rng| {
        pick(rng, &["01", "02", "03", "04", "05", "15", "17", "99"])
    });
    registry.register("vPag", |_, rng| decimal(rng, 0.0, 10_000.0, 2));
    registry.register("tpIntegra", |_, rng| pick(rng, &["1", "2"]));
    registry.register("tBand", |_, rng| {
        pick(rng, &["01", "02", "03", "04", "05", "06", "99"])
    });
    registry.register("cAut", |_, rng| digit_code(rng, 6));
    registry.register("qrCode", qr_code);
    registry.register("urlChave", |_, _| {
        "www.nfce.fazenda.rj.gov.br/consulta".to_string()
    });
}

fn qr_code(_: &FieldContext<'_>, rng: &mut dyn RngCore) -> String {
    format!(
        "https://www.fazenda.rj.gov.br/nfce/qrcode?p={}|2|1|1|{}",
        digit_code(rng, 44),
        digit_code(rng, 32)
    )
}
