pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::{ShipmentLineItem, ShippingDiscount, WeightInput};
#[cfg(feature = "cli")]
use crate::utils::error::{AppError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    Percent,
    Fixed,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "shipping-calc")]
#[command(about = "Estimate a J&T Mindoro shipping fee for one parcel or cart line")]
pub struct CliConfig {
    /// Actual weight of one unit in kilograms
    #[arg(long)]
    pub weight_kg: f64,

    /// Parcel length in centimetres (give all three dimensions or none)
    #[arg(long)]
    pub length_cm: Option<f64>,

    /// Parcel width in centimetres
    #[arg(long)]
    pub width_cm: Option<f64>,

    /// Parcel height in centimetres
    #[arg(long)]
    pub height_cm: Option<f64>,

    #[arg(long, default_value = "1")]
    pub quantity: u32,

    /// Discount applied after the fee is resolved
    #[arg(long, value_enum, requires = "discount_value")]
    pub discount_type: Option<DiscountKind>,

    #[arg(long, requires = "discount_type")]
    pub discount_value: Option<f64>,

    #[arg(long, help = "Print the quote as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn weight_input(&self) -> WeightInput {
        WeightInput {
            actual_kg: self.weight_kg,
            length_cm: self.length_cm,
            width_cm: self.width_cm,
            height_cm: self.height_cm,
        }
    }

    pub fn line_item(&self) -> ShipmentLineItem {
        ShipmentLineItem::new(self.weight_input(), self.quantity)
    }

    pub fn discount(&self) -> Result<Option<ShippingDiscount>> {
        let Some(kind) = self.discount_type else {
            return Ok(None);
        };
        let value = *validation::validate_required_field("discount_value", &self.discount_value)?;

        let discount = match kind {
            DiscountKind::Percent => ShippingDiscount::Percent(value),
            DiscountKind::Fixed => {
                if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
                    return Err(AppError::InvalidConfigValueError {
                        field: "discount_value".to_string(),
                        value: value.to_string(),
                        reason: "Fixed discount must be a whole, non-negative peso amount"
                            .to_string(),
                    });
                }
                ShippingDiscount::Fixed(value as u32)
            }
        };
        discount.validate()?;
        Ok(Some(discount))
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        // 重量與尺寸的驗證留給運費引擎，這裡只檢查參數本身
        validation::validate_positive_number("quantity", self.quantity, 1)?;
        self.discount()?;
        Ok(())
    }
}
