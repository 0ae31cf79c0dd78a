use crate::domain::model::ShippingDiscount;
use crate::utils::error::ShippingCalcError;

impl ShippingDiscount {
    pub fn validate(&self) -> Result<(), ShippingCalcError> {
        match *self {
            ShippingDiscount::Percent(percent) if !(0.0..=100.0).contains(&percent) => {
                Err(ShippingCalcError::validation(format!(
                    "percent discount must be between 0 and 100, got {}",
                    percent
                )))
            }
            _ => Ok(()),
        }
    }
}

/// Applies a product's shipping discount to an already resolved fee.
///
/// Percent rounds half up to whole pesos and is clamped to 0..=100; a fixed
/// amount never takes the fee below ₱0.
pub fn apply_discount(fee: u32, discount: Option<&ShippingDiscount>) -> u32 {
    match discount {
        None => fee,
        Some(ShippingDiscount::Fixed(amount)) => fee.saturating_sub(*amount),
        Some(ShippingDiscount::Percent(percent)) => {
            let percent = if percent.is_finite() {
                percent.clamp(0.0, 100.0)
            } else {
                0.0
            };
            let off = (f64::from(fee) * percent / 100.0).round() as u32;
            fee.saturating_sub(off)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_discount_keeps_fee() {
        assert_eq!(apply_discount(455, None), 455);
    }

    #[test]
    fn test_fixed_discount_saturates() {
        assert_eq!(apply_discount(120, Some(&ShippingDiscount::Fixed(20))), 100);
        assert_eq!(apply_discount(70, Some(&ShippingDiscount::Fixed(100))), 0);
    }

    #[test]
    fn test_percent_discount_rounds_to_whole_pesos() {
        assert_eq!(apply_discount(455, Some(&ShippingDiscount::Percent(50.0))), 227);
        assert_eq!(apply_discount(160, Some(&ShippingDiscount::Percent(100.0))), 0);
        assert_eq!(apply_discount(160, Some(&ShippingDiscount::Percent(150.0))), 0);
    }

    #[test]
    fn test_percent_discount_validation() {
        assert!(ShippingDiscount::Percent(25.0).validate().is_ok());
        assert!(ShippingDiscount::Percent(-1.0).validate().is_err());
        assert!(ShippingDiscount::Percent(101.0).validate().is_err());
        assert!(ShippingDiscount::Fixed(500).validate().is_ok());
    }
}
