use crate::domain::model::{BagSpec, BagTier, FeeTier, ResolvedFee};
use crate::utils::error::ShippingCalcError;

/// Heaviest billable weight priced by a flat bag.
pub const MAX_BAG_KG: u32 = 8;
/// Lightest billable weight in the per-kilogram table.
pub const RATE_TABLE_MIN_KG: u32 = 9;
/// Above this the carrier only prices by manual quote.
pub const MAX_AUTOMATED_KG: u32 = 50;

/// Flat bag pricing, ordered by `max_kg`.
pub static BAG_TIERS: [BagTier; 3] = [
    BagTier {
        key: BagSpec::SmallLe3Kg,
        max_kg: 3,
        fee: 70,
    },
    BagTier {
        key: BagSpec::MediumLe5Kg,
        max_kg: 5,
        fee: 120,
    },
    BagTier {
        key: BagSpec::BigLe8Kg,
        max_kg: 8,
        fee: 160,
    },
];

/// Fee in PHP for 9..=50 kg; index 0 is 9 kg.
pub const RATE_TABLE: [u32; 42] = [
    455, 515, 575, 635, 695, 755, 815, 875, 935, 995, // 9-18 kg
    1055, 1115, 1175, 1235, 1295, 1355, 1415, 1475, 1535, 1595, // 19-28 kg
    1655, 1715, 1775, 1835, 1895, 1955, 2015, 2075, 2135, 2195, // 29-38 kg
    2255, 2315, 2375, 2435, 2495, 2555, 2615, 2675, 2735, 2795, // 39-48 kg
    2855, 2915, // 49-50 kg
];

/// Smallest bag that holds `bill_kg`, or `None` once the parcel outgrows the bags.
pub fn select_bag_tier(bill_kg: u32) -> Option<&'static BagTier> {
    BAG_TIERS.iter().find(|tier| bill_kg <= tier.max_kg)
}

/// Table fee for a billable weight in 9..=50 kg.
pub fn rate_table_fee(bill_kg: u32) -> Option<u32> {
    if !(RATE_TABLE_MIN_KG..=MAX_AUTOMATED_KG).contains(&bill_kg) {
        return None;
    }
    RATE_TABLE.get((bill_kg - RATE_TABLE_MIN_KG) as usize).copied()
}

/// Prices a billable weight: bag tier up to 8 kg, rate table up to 50 kg.
pub fn resolve_fee(bill_kg: u32) -> Result<ResolvedFee, ShippingCalcError> {
    if bill_kg == 0 {
        return Err(ShippingCalcError::validation(
            "billable weight must be at least 1 kg",
        ));
    }

    if bill_kg > MAX_AUTOMATED_KG {
        return Err(ShippingCalcError::manual_quote(format!(
            "billable weight {} kg exceeds the {} kg limit; a manual quote is required",
            bill_kg, MAX_AUTOMATED_KG
        )));
    }

    let resolved = match select_bag_tier(bill_kg) {
        Some(tier) => ResolvedFee {
            fee: tier.fee,
            tier: FeeTier::Bag,
            bag_spec: Some(tier.key),
        },
        None => {
            let fee = rate_table_fee(bill_kg).ok_or_else(|| {
                ShippingCalcError::manual_quote(format!("no rate table entry for {} kg", bill_kg))
            })?;
            ResolvedFee {
                fee,
                tier: FeeTier::RateTable,
                bag_spec: None,
            }
        }
    };

    tracing::debug!(
        bill_kg,
        fee = resolved.fee,
        tier = resolved.tier.as_str(),
        "resolved shipping fee"
    );

    Ok(resolved)
}
