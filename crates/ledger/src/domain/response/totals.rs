use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::errors::ServiceError;
use std::{cmp::Ordering, collections::HashMap};

use crate::domain::{money::band_share, response::sale::SaleResponse};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTotals {
    pub gross: Decimal,
    pub net: Decimal,
    pub band: Option<String>,
    pub sales: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandTotals {
    /// `None` collects sales whose catalog entry has been deleted.
    pub band: Option<String>,
    pub gross: Decimal,
    pub net: Decimal,
    pub sales: usize,
}

fn overflow() -> ServiceError {
    ServiceError::Internal("sales total does not fit in a decimal".into())
}

fn net_of(gross: Decimal) -> Result<Decimal, ServiceError> {
    gross
        .checked_mul(band_share())
        .map(|net| net.normalize())
        .ok_or_else(overflow)
}

impl BandTotals {
    /// Groups by band, named bands alphabetically and the unnamed group last.
    pub fn group(sales: &[SaleResponse]) -> Result<Vec<BandTotals>, ServiceError> {
        let mut groups: HashMap<Option<&str>, (Decimal, usize)> = HashMap::new();

        for sale in sales {
            let line = sale.line_total().ok_or_else(overflow)?;
            let entry = groups
                .entry(sale.band.as_deref())
                .or_insert((Decimal::ZERO, 0));
            entry.0 = entry.0.checked_add(line).ok_or_else(overflow)?;
            entry.1 += 1;
        }

        let mut totals = groups
            .into_iter()
            .map(|(band, (gross, count))| {
                Ok(BandTotals {
                    band: band.map(str::to_owned),
                    gross: gross.normalize(),
                    net: net_of(gross)?,
                    sales: count,
                })
            })
            .collect::<Result<Vec<_>, ServiceError>>()?;

        totals.sort_by(|a, b| match (&a.band, &b.band) {
            (Some(x), Some(y)) => x.cmp(y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });

        Ok(totals)
    }
}

impl DailyTotals {
    /// Fails with `MixedBands` rather than guess which band is owed the payout.
    pub fn from_sales(sales: &[SaleResponse]) -> Result<DailyTotals, ServiceError> {
        let groups = BandTotals::group(sales)?;

        let bands: Vec<String> = groups.iter().filter_map(|g| g.band.clone()).collect();
        if bands.len() > 1 {
            return Err(ServiceError::MixedBands(bands));
        }

        let gross = groups
            .iter()
            .try_fold(Decimal::ZERO, |acc, g| acc.checked_add(g.gross))
            .ok_or_else(overflow)?;

        Ok(DailyTotals {
            gross: gross.normalize(),
            net: net_of(gross)?,
            band: bands.into_iter().next(),
            sales: sales.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::errors::ErrorKind;
    use std::str::FromStr;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    fn sale(id: i64, band: Option<&str>, price: &str, quantity: i64) -> SaleResponse {
        SaleResponse {
            id,
            stock_item_name: "Hoodie".into(),
            band: band.map(str::to_owned),
            quantity,
            unit_price: dec(price),
            sold_at: NaiveDate::from_ymd_opt(2026, 10, 17)
                .unwrap()
                .and_hms_opt(20, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn no_sales_means_zero_and_no_band() {
        let totals = DailyTotals::from_sales(&[]).unwrap();
        assert_eq!(totals.gross, Decimal::ZERO);
        assert_eq!(totals.net, Decimal::ZERO);
        assert_eq!(totals.band, None);
        assert_eq!(totals.sales, 0);
    }

    #[test]
    fn takes_quarter_commission_from_gross() {
        let sales = [
            sale(1, Some("The Beths"), "5.00", 3),
            sale(2, Some("The Beths"), "10.00", 1),
        ];
        let totals = DailyTotals::from_sales(&sales).unwrap();

        assert_eq!(totals.gross, dec("25"));
        assert_eq!(totals.net, dec("18.75"));
        assert_eq!(totals.band.as_deref(), Some("The Beths"));
        assert_eq!(totals.net / totals.gross, dec("0.75"));
    }

    #[test]
    fn ratio_is_exact_for_odd_cents() {
        let totals = DailyTotals::from_sales(&[sale(1, Some("Wet Leg"), "0.01", 3)]).unwrap();
        assert_eq!(totals.gross, dec("0.03"));
        assert_eq!(totals.net, dec("0.0225"));
        assert_eq!(totals.net / totals.gross, dec("0.75"));
    }

    #[test]
    fn mixed_band_day_is_refused() {
        let sales = [
            sale(1, Some("Wet Leg"), "20.00", 1),
            sale(2, Some("The Beths"), "5.00", 2),
        ];
        let err = DailyTotals::from_sales(&sales).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MixedBands);

        match err {
            ServiceError::MixedBands(bands) => {
                assert_eq!(bands, vec!["The Beths".to_string(), "Wet Leg".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn dangling_sales_count_without_naming_a_band() {
        let sales = [
            sale(1, Some("Wet Leg"), "20.00", 1),
            sale(2, None, "4.00", 1),
        ];
        let totals = DailyTotals::from_sales(&sales).unwrap();

        assert_eq!(totals.gross, dec("24"));
        assert_eq!(totals.band.as_deref(), Some("Wet Leg"));
        assert_eq!(totals.sales, 2);
    }

    #[test]
    fn per_band_groups_add_up_to_the_day() {
        let sales = [
            sale(1, Some("Wet Leg"), "20.00", 2),
            sale(2, None, "4.00", 1),
            sale(3, Some("The Beths"), "5.00", 3),
            sale(4, Some("Wet Leg"), "12.50", 1),
        ];
        let groups = BandTotals::group(&sales).unwrap();

        let bands: Vec<Option<&str>> = groups.iter().map(|g| g.band.as_deref()).collect();
        assert_eq!(bands, vec![Some("The Beths"), Some("Wet Leg"), None]);

        assert_eq!(groups[0].gross, dec("15"));
        assert_eq!(groups[1].gross, dec("52.50"));
        assert_eq!(groups[1].net, dec("39.375"));
        assert_eq!(groups[1].sales, 2);
        assert_eq!(groups[2].gross, dec("4"));

        let sum: Decimal = groups.iter().map(|g| g.gross).sum();
        assert_eq!(sum, dec("71.50"));
    }
}
