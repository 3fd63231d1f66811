//! Tax identifier placeholders: CPF, the CNPJ family and the access key.

use fiscalforge_core::access_key::{self, AccessKeyOptions};
use fiscalforge_core::{cnpj, cpf};
use rand::RngCore;
use tracing::warn;

use super::{FieldContext, FieldRegistry};

/// Every placeholder that carries a company tax ID. All of them honor the
/// CNPJ override so a caller-supplied document shows up consistently.
pub(super) const CNPJ_KEYS: [&str; 7] = [
    "emitCNPJ",
    "CNPJ",
    "destCNPJ",
    "transpTransportaCNPJ",
    "cardCNPJ",
    "retiradaCNPJ",
    "entregaCNPJ",
];

pub(super) fn register(registry: &mut FieldRegistry) {
    registry.register("CPF", cpf_value);
    for key in CNPJ_KEYS {
        registry.register(key, cnpj_value);
    }
    registry.register("accessKey", access_key_value);
}

fn cpf_value(ctx: &FieldContext<'_>, rng: &mut dyn RngCore) -> String {
    match ctx.config.cpf_override() {
        Some(value) => value.to_string(),
        None => cpf::generate(rng),
    }
}

fn cnpj_value(ctx: &FieldContext<'_>, rng: &mut dyn RngCore) -> String {
    match ctx.config.cnpj_override() {
        Some(value) => value.to_string(),
        None => cnpj::generate(rng),
    }
}

/// The access key embeds the issuer CNPJ, which the dependency graph
/// guarantees was generated first. A missing issuer still produces a well
/// formed key from a fresh CNPJ.
fn access_key_value(ctx: &FieldContext<'_>, rng: &mut dyn RngCore) -> String {
    let issuer = match ctx.resolved.get("emitCNPJ") {
        Some(value) if !value.is_empty() => Some(value.clone()),
        _ => {
            warn!("issuer CNPJ was not resolved before the access key");
            None
        }
    };
    access_key::generate(rng, &AccessKeyOptions { cnpj: issuer })
}
