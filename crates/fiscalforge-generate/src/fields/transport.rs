//! Transport placeholders: carrier, vehicles and volumes.

use fake::Fake;
use fake::faker::address::pt_br::{CityName, StateAbbr, StreetName};
use rand::Rng;
use rand::RngCore;

use super::{FieldContext, FieldRegistry, decimal, digit_code, number, pick};

pub(super) fn register(registry: &mut FieldRegistry) {
    registry.register("modFrete", |_, rng| pick(rng, &["0", "1", "2", "3", "4", "9"]));
    registry.register("transpModFrete", |_, rng| pick(rng, &["0", "1", "2", "3", "4", "9"]));

    registry.register("transpTransportaIE", |_, rng| pick(rng, &["ISENTO", "ISENTA"]));
    registry.register("transpTransportaXEnder", carrier_address);
    registry.register("transpTransportaXMun", |_, rng| {
        CityName().fake_with_rng::<String, _>(rng)
    });
    registry.register("transpTransportaUF", state);

    registry.register("transpVeicTranspPlaca", plate);
    registry.register("transpVeicTranspUF", state);
    registry.register("transpVeicTranspRNTC", |_, rng| {
        number(rng, 100_000_000, 999_999_999)
    });
    registry.register("transpReboquePlaca", plate);
    registry.register("transpReboqueUF", state);
    registry.register("transpReboqueRNTC", |_, rng| {
        number(rng, 100_000_000, 999_999_999)
    });

    registry.register("transpVolQVol", |_, rng| number(rng, 1, 10_000));
    registry.register("transpVolEsp", |_, rng| {
        pick(rng, &["CAIXA", "PALLET", "FARDO", "TAMBOR"])
    });
    registry.register("transpVolMarca", |_, rng| {
        pick(rng, &["LINDOYA", "GENERICA", "PROPRIA"])
    });
    registry.register("transpVolNVol", |_, rng| number(rng, 1, 999));
    registry.register("transpVolPesoL", |_, rng| decimal(rng, 0.1, 10_000.0, 3));
    registry.register("transpVolPesoB", |_, rng| decimal(rng, 0.1, 12_000.0, 3));
    registry.register("transpVolLacresNLacre", |_, rng| {
        format!("XYZ{}", digit_code(rng, 8))
    });
}

fn state(_: &FieldContext<'_>, rng: &mut dyn RngCore) -> String {
    StateAbbr().fake_with_rng::<String, _>(rng)
}

fn carrier_address(ctx: &FieldContext<'_>, rng: &mut dyn RngCore) -> String {
    let street = StreetName().fake_with_rng::<String, _>(rng);
    let city = CityName().fake_with_rng::<String, _>(rng);
    format!("{street} {} - {city} - {}", number(rng, 1, 9999), state(ctx, rng))
}

/// Mercosul pattern: three letters, a digit, a letter, two digits.
fn plate(_: &FieldContext<'_>, rng: &mut dyn RngCore) -> String {
    let mut plate = String::with_capacity(7);
    for _ in 0..3 {
        plate.push(letter(rng));
    }
    plate.push(char::from(b'0' + rng.random_range(0..10u8)));
    plate.push(letter(rng));
    for _ in 0..2 {
        plate.push(char::from(b'0' + rng.random_range(0..10u8)));
    }
    plate
}

fn letter(rng: &mut dyn RngCore) -> char {
    char::from(b'A' + rng.random_range(0..26u8))
}
