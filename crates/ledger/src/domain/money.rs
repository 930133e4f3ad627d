use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

const CENTS_SCALE: u32 = 2;

pub fn cents_to_price(cents: i64) -> Decimal {
    Decimal::new(cents, CENTS_SCALE)
}

/// Exact conversion only: `None` for sub-cent precision or out of range values.
pub fn price_to_cents(price: Decimal) -> Option<i64> {
    if price.normalize().scale() > CENTS_SCALE {
        return None;
    }
    price.checked_mul(Decimal::ONE_HUNDRED)?.to_i64()
}

/// Share of the gross the band keeps once the venue's 25% commission is taken.
pub fn band_share() -> Decimal {
    Decimal::new(75, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[test]
    fn converts_whole_and_fractional_prices() {
        assert_eq!(price_to_cents(dec("5")), Some(500));
        assert_eq!(price_to_cents(dec("12.5")), Some(1250));
        assert_eq!(price_to_cents(dec("0.01")), Some(1));
        assert_eq!(price_to_cents(dec("19.990")), Some(1999));
    }

    #[test]
    fn refuses_sub_cent_prices() {
        assert_eq!(price_to_cents(dec("0.005")), None);
        assert_eq!(price_to_cents(dec("9.999")), None);
    }

    #[test]
    fn cents_round_trip_keeps_two_places() {
        assert_eq!(cents_to_price(1999).to_string(), "19.99");
        assert_eq!(cents_to_price(500), dec("5"));
    }
}
