use crate::core::fee::resolve_fee;
use crate::core::weight::{billable_kg, resolve_weight};
use crate::domain::model::{FeeResolution, ResolvedWeight, ShipmentLineItem, WeightInput};
use crate::utils::error::ShippingCalcError;

/// Quotes a single parcel.
pub fn calc_shipping_fee(input: &WeightInput) -> Result<FeeResolution, ShippingCalcError> {
    let weight = resolve_weight(input)?;
    let fee = resolve_fee(weight.bill_kg)?;
    Ok(FeeResolution::new(weight, fee))
}

/// Quotes a whole shipment as one parcel.
///
/// Actual weight is summed per line as `actual_kg * quantity`. Volumetric
/// weight is summed per line from that line's own dimensions (zero when it has
/// none) and is not multiplied by quantity. Any invalid line fails the whole
/// shipment with the first error found.
pub fn calc_shipment_from_items(
    items: &[ShipmentLineItem],
) -> Result<FeeResolution, ShippingCalcError> {
    if items.is_empty() {
        return Err(ShippingCalcError::validation(
            "shipment must contain at least one item",
        ));
    }

    let mut actual_total = 0.0;
    let mut volumetric_total = 0.0;

    for (index, item) in items.iter().enumerate() {
        if item.quantity == 0 {
            return Err(ShippingCalcError::validation(format!(
                "item {} quantity must be at least 1",
                index + 1
            )));
        }

        let weight = resolve_weight(&item.weight)?;
        actual_total += weight.actual_kg * f64::from(item.quantity);
        volumetric_total += weight.volumetric_kg;
    }

    let weight = ResolvedWeight {
        actual_kg: actual_total,
        volumetric_kg: volumetric_total,
        bill_kg: billable_kg(actual_total, volumetric_total),
    };

    tracing::debug!(
        items = items.len(),
        actual_kg = weight.actual_kg,
        volumetric_kg = weight.volumetric_kg,
        bill_kg = weight.bill_kg,
        "aggregated shipment weight"
    );

    let fee = resolve_fee(weight.bill_kg)?;
    Ok(FeeResolution::new(weight, fee))
}
