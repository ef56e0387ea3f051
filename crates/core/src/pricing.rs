//! Order pricing: service fee, tax, and total.
//!
//! Amounts are [`Decimal`] values with a 2-digit scale. The fee and tax are
//! each rounded to 2 places before the final sum is rounded again, so totals
//! reproduce the reference checkout arithmetic digit for digit.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Service fee rate applied to the subtotal (10%).
pub const SERVICE_FEE_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Tax rate applied to the subtotal (7%).
pub const TAX_RATE: Decimal = Decimal::from_parts(7, 0, 0, false, 2);

/// The full price breakdown for a purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceBreakdown {
    pub subtotal: Decimal,
    pub service_fee: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Round to 2 decimal places, half away from zero.
fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Service fee for a subtotal: `round2(subtotal * 0.10)`.
pub fn service_fee(subtotal: Decimal) -> Decimal {
    round2(subtotal * SERVICE_FEE_RATE)
}

/// Tax for a subtotal: `round2(subtotal * 0.07)`.
pub fn tax(subtotal: Decimal) -> Decimal {
    round2(subtotal * TAX_RATE)
}

/// Compute the complete breakdown for a subtotal.
///
/// Fee and tax are rounded independently, then the total is rounded once
/// more over the sum.
pub fn order_total(subtotal: Decimal) -> PriceBreakdown {
    let service_fee = service_fee(subtotal);
    let tax = tax(subtotal);
    let total = round2(subtotal + service_fee + tax);
    PriceBreakdown {
        subtotal,
        service_fee,
        tax,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().expect("valid decimal literal")
    }

    #[test]
    fn test_reference_example() {
        // 100.00 -> fee 10.00, tax 7.00, total 117.00
        let breakdown = order_total(dec("100.00"));
        assert_eq!(breakdown.service_fee, dec("10.00"));
        assert_eq!(breakdown.tax, dec("7.00"));
        assert_eq!(breakdown.total, dec("117.00"));
    }

    #[test]
    fn test_rounds_half_up() {
        // fee = 0.025 -> 0.03, tax = 0.0175 -> 0.02
        let breakdown = order_total(dec("0.25"));
        assert_eq!(breakdown.service_fee, dec("0.03"));
        assert_eq!(breakdown.tax, dec("0.02"));
        assert_eq!(breakdown.total, dec("0.30"));
    }

    #[test]
    fn test_fee_and_tax_round_before_summing() {
        // 33.33: fee = 3.333 -> 3.33, tax = 2.3331 -> 2.33.
        // Total is the sum of the already-rounded parts, not a single
        // rounding of 33.33 * 1.17.
        let breakdown = order_total(dec("33.33"));
        assert_eq!(breakdown.service_fee, dec("3.33"));
        assert_eq!(breakdown.tax, dec("2.33"));
        assert_eq!(breakdown.total, dec("38.99"));
    }

    #[test]
    fn test_zero_subtotal() {
        let breakdown = order_total(dec("0.00"));
        assert_eq!(breakdown.service_fee, dec("0.00"));
        assert_eq!(breakdown.tax, dec("0.00"));
        assert_eq!(breakdown.total, dec("0.00"));
    }

    #[test]
    fn test_total_matches_recomputation() {
        for subtotal in ["12.50", "19.99", "250.00", "7.77"] {
            let subtotal = dec(subtotal);
            let breakdown = order_total(subtotal);
            assert_eq!(
                breakdown.total,
                breakdown.subtotal + breakdown.service_fee + breakdown.tax,
                "total must equal the sum of its rounded parts for {subtotal}"
            );
        }
    }
}
