//! J&T Mindoro shipping-fee engine.
//!
//! Pure, synchronous quoting for light parcels (flat bag tiers up to 8 kg) and
//! heavier parcels (per-kilogram rate table from 9 to 50 kg), with dimensional
//! weight support. Above 50 kg the carrier requires a manual quote.
//!
//! ```
//! use shipping_calc::{calc_shipping_fee, format_fee, WeightInput};
//!
//! let quote = calc_shipping_fee(&WeightInput::with_dimensions(2.0, 50.0, 40.0, 30.0)).unwrap();
//! assert_eq!(quote.bill_kg, 12);
//! assert_eq!(format_fee(quote.fee, quote.bill_kg), "₱635 (12 kg)");
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::BatchConfig};

pub use app::pipelines::batch_pipeline::BatchQuotePipeline;
pub use crate::core::{
    discount::apply_discount,
    engine::QuoteEngine,
    fee::{resolve_fee, select_bag_tier},
    format::format_fee,
    shipment::{calc_shipment_from_items, calc_shipping_fee},
    weight::resolve_weight,
};
pub use domain::model::{
    BagSpec, BagTier, FeeResolution, FeeTier, ResolvedFee, ResolvedWeight, ShipmentLineItem,
    ShippingDiscount, ShippingProfile, WeightInput,
};
pub use utils::error::{AppError, ErrorCode, Result, ShippingCalcError};
