//! Test-only fixtures shared by unit and behaviour tests across the workspace.
//!
//! The addresses mirror the Moscow points used by the dispatch scenarios.
//! Distances between them, in metres, are roughly:
//!
//! | | Сущёвский Вал 55 | Ямская 10 | ПВ Курьерика | Башиловская 22 |
//! |---|---|---|---|---|
//! | Сущёвский Вал 55 | 0 | 384 | 691 | 2637 |
//! | Ямская 10 | 384 | 0 | 312 | 2582 |
//! | ПВ Курьерика | 691 | 312 | 0 | 2502 |

use geo::Coord;

use crate::{Address, AddressBook, MemoryAddressBook, PendingOrder, PickupPoint};

/// Key of the pickup point used by the scenarios.
pub const PICKUP_POINT: &str = "ПВ Курьерика";
/// Delivery address a few hundred metres north-east of the pickup point.
pub const SUSHCHEVSKY_VAL_55: &str = "Сущёвский Вал 55";
/// Delivery address between the pickup point and Сущёвский Вал.
pub const YAMSKAYA_10: &str = "Ямская 10";
/// Delivery address about 2.5 km west of the others.
pub const BASHILOVSKAYA_22: &str = "Башиловская 22";
/// Delivery address near Башиловская, far from the pickup point.
pub const KHUTORSKAYA_38: &str = "Хуторская 38Ас23";

/// Address book holding the scenario addresses.
#[must_use]
pub fn moscow_address_book() -> MemoryAddressBook {
    MemoryAddressBook::from_iter([
        (
            PICKUP_POINT,
            Address::new(55.789020, 37.607210, "Москва, ул. 1-я Ямского Поля, 1, ПВ Курьерика"),
        ),
        (
            SUSHCHEVSKY_VAL_55,
            Address::new(55.793728, 37.614428, "Москва, Сущёвский Вал, 55"),
        ),
        (
            YAMSKAYA_10,
            Address::new(55.790880, 37.610950, "Москва, ул. 2-я Ямская, 10"),
        ),
        (
            BASHILOVSKAYA_22,
            Address::new(55.802619, 37.575316, "Москва, Башиловская ул., 22"),
        ),
        (
            KHUTORSKAYA_38,
            Address::new(55.807236, 37.586212, "Москва, 2-я Хуторская ул., 38Ас23"),
        ),
    ])
}

/// The scenario pickup point.
#[must_use]
pub fn pickup_point() -> PickupPoint {
    let book = moscow_address_book();
    book.resolve(PICKUP_POINT)
        .map(PickupPoint::from_address)
        .unwrap_or_else(|_| PickupPoint::new(Coord { x: 37.607210, y: 55.789020 }, PICKUP_POINT))
}

/// A pending order to a scenario address with the given readiness.
///
/// Unknown keys produce an order at the origin so the calculator reports the
/// missing address.
#[must_use]
pub fn order_to(key: &str, duration_minutes: u32) -> PendingOrder {
    let book = moscow_address_book();
    book.resolve(key).map_or_else(
        |_| PendingOrder::new(key, Coord { x: 0.0, y: 0.0 }, duration_minutes),
        |address| PendingOrder::at_address(key, address, duration_minutes),
    )
}

/// A pending order at explicit coordinates, labelled with a scenario key.
#[must_use]
pub fn order_at(key: &str, lat: f64, lon: f64, duration_minutes: u32) -> PendingOrder {
    PendingOrder::new(key, Coord { x: lon, y: lat }, duration_minutes)
}
