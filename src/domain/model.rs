use crate::utils::error::{ErrorCode, ShippingCalcError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Carrier method tag carried on every resolution.
pub const METHOD_JNT_MINDORO: &str = "JNT_MINDORO";

/// A parcel's physical weight with optional dimensions (all three or none).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightInput {
    pub actual_kg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
}

impl WeightInput {
    pub fn new(actual_kg: f64) -> Self {
        Self {
            actual_kg,
            ..Self::default()
        }
    }

    pub fn with_dimensions(actual_kg: f64, length_cm: f64, width_cm: f64, height_cm: f64) -> Self {
        Self {
            actual_kg,
            length_cm: Some(length_cm),
            width_cm: Some(width_cm),
            height_cm: Some(height_cm),
        }
    }
}

/// One cart/order line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentLineItem {
    #[serde(flatten)]
    pub weight: WeightInput,
    pub quantity: u32,
}

impl ShipmentLineItem {
    pub fn new(weight: WeightInput, quantity: u32) -> Self {
        Self { weight, quantity }
    }
}

/// Output of the weight resolver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedWeight {
    pub actual_kg: f64,
    pub volumetric_kg: f64,
    pub bill_kg: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BagSpec {
    #[serde(rename = "SMALL_LE_3KG")]
    SmallLe3Kg,
    #[serde(rename = "MEDIUM_LE_5KG")]
    MediumLe5Kg,
    #[serde(rename = "BIG_LE_8KG")]
    BigLe8Kg,
}

impl BagSpec {
    pub fn as_str(&self) -> &'static str {
        match self {
            BagSpec::SmallLe3Kg => "SMALL_LE_3KG",
            BagSpec::MediumLe5Kg => "MEDIUM_LE_5KG",
            BagSpec::BigLe8Kg => "BIG_LE_8KG",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BagTier {
    pub key: BagSpec,
    pub max_kg: u32,
    pub fee: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeeTier {
    Bag,
    RateTable,
}

impl FeeTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeeTier::Bag => "BAG",
            FeeTier::RateTable => "RATE_TABLE",
        }
    }
}

/// Output of the fee resolver before the weights are attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedFee {
    pub fee: u32,
    pub tier: FeeTier,
    pub bag_spec: Option<BagSpec>,
}

/// Final quote for a parcel or a whole shipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeResolution {
    pub fee: u32,
    pub bill_kg: u32,
    pub tier: FeeTier,
    pub bag_spec: Option<BagSpec>,
    pub volumetric_kg: f64,
    pub actual_kg: f64,
    pub method: String,
}

impl FeeResolution {
    pub fn new(weight: ResolvedWeight, fee: ResolvedFee) -> Self {
        Self {
            fee: fee.fee,
            bill_kg: weight.bill_kg,
            tier: fee.tier,
            bag_spec: fee.bag_spec,
            volumetric_kg: weight.volumetric_kg,
            actual_kg: weight.actual_kg,
            method: METHOD_JNT_MINDORO.to_string(),
        }
    }
}

/// Post-resolution discount attached to a product's shipping profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShippingDiscount {
    /// Percentage off the resolved fee, 0..=100.
    Percent(f64),
    /// Fixed peso amount off the resolved fee.
    Fixed(u32),
}

/// Shipping fields of a product record, as supplied by the catalog backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingProfile {
    pub weight_kg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<ShippingDiscount>,
}

impl ShippingProfile {
    pub fn to_weight_input(&self) -> WeightInput {
        WeightInput {
            actual_kg: self.weight_kg,
            length_cm: self.length_cm,
            width_cm: self.width_cm,
            height_cm: self.height_cm,
        }
    }

    pub fn to_line_item(&self, quantity: u32) -> ShipmentLineItem {
        ShipmentLineItem::new(self.to_weight_input(), quantity)
    }
}

/// One row of a batch input file; rows sharing an `order_id` ship together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub order_id: String,
    #[serde(default)]
    pub sku: Option<String>,
    pub weight_kg: f64,
    #[serde(default)]
    pub length_cm: Option<f64>,
    #[serde(default)]
    pub width_cm: Option<f64>,
    #[serde(default)]
    pub height_cm: Option<f64>,
    pub quantity: u32,
}

impl OrderLine {
    pub fn to_line_item(&self) -> ShipmentLineItem {
        ShipmentLineItem::new(
            WeightInput {
                actual_kg: self.weight_kg,
                length_cm: self.length_cm,
                width_cm: self.width_cm,
                height_cm: self.height_cm,
            },
            self.quantity,
        )
    }
}

/// Quote outcome for one order. Exactly one of `quote` / `error_code` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderQuote {
    pub order_id: String,
    pub line_count: usize,
    pub quote: Option<FeeResolution>,
    pub display: Option<String>,
    pub error_code: Option<ErrorCode>,
    pub error_message: Option<String>,
}

impl OrderQuote {
    pub fn quoted(order_id: String, line_count: usize, quote: FeeResolution, display: String) -> Self {
        Self {
            order_id,
            line_count,
            quote: Some(quote),
            display: Some(display),
            error_code: None,
            error_message: None,
        }
    }

    pub fn rejected(order_id: String, line_count: usize, error: &ShippingCalcError) -> Self {
        Self {
            order_id,
            line_count,
            quote: None,
            display: None,
            error_code: Some(error.code()),
            error_message: Some(error.message().to_string()),
        }
    }

    pub fn is_quoted(&self) -> bool {
        self.quote.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteBatch {
    pub generated_at: DateTime<Utc>,
    pub quotes: Vec<OrderQuote>,
}

impl QuoteBatch {
    pub fn quoted_count(&self) -> usize {
        self.quotes.iter().filter(|q| q.is_quoted()).count()
    }

    pub fn rejected_count(&self) -> usize {
        self.quotes.len() - self.quoted_count()
    }
}
