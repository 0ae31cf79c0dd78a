use crate::domain::model::{ResolvedWeight, WeightInput};
use crate::utils::error::ShippingCalcError;

/// Carrier divisor for dimensional weight: cm³ per billable kg.
pub const VOLUMETRIC_DIVISOR: f64 = 5000.0;

// 只吸收加總產生的幾個 ULP 誤差 (例如 0.2 + 2.2 + 0.6)，其餘一律無條件進位
const NOISE_ULPS: f64 = 4.0;

/// Rounds the heavier of actual and volumetric weight up to whole kilograms.
pub fn billable_kg(actual_kg: f64, volumetric_kg: f64) -> u32 {
    let heavier = actual_kg.max(volumetric_kg);
    let nearest = heavier.round();
    if nearest >= 1.0 && (heavier - nearest).abs() <= NOISE_ULPS * f64::EPSILON * heavier {
        return nearest as u32;
    }
    heavier.ceil() as u32
}

fn validate_actual_kg(actual_kg: f64) -> Result<(), ShippingCalcError> {
    if !actual_kg.is_finite() || actual_kg <= 0.0 {
        return Err(ShippingCalcError::validation(format!(
            "actual weight must be a finite number greater than 0 kg, got {}",
            actual_kg
        )));
    }
    Ok(())
}

/// Dimensional weight of a parcel, or 0 when it carries no dimensions.
///
/// Fails when only some of the three dimensions are given or a side is not a
/// positive finite number.
pub fn volumetric_kg(input: &WeightInput) -> Result<f64, ShippingCalcError> {
    match (input.length_cm, input.width_cm, input.height_cm) {
        (None, None, None) => Ok(0.0),
        (Some(length), Some(width), Some(height)) => {
            for (name, side) in [("length", length), ("width", width), ("height", height)] {
                if !side.is_finite() || side <= 0.0 {
                    return Err(ShippingCalcError::validation(format!(
                        "{} must be a finite number greater than 0 cm, got {}",
                        name, side
                    )));
                }
            }
            Ok(length * width * height / VOLUMETRIC_DIVISOR)
        }
        _ => Err(ShippingCalcError::validation(
            "dimensions must include length, width and height together, or none of them",
        )),
    }
}

/// Validates a parcel and computes its volumetric and billable weight.
pub fn resolve_weight(input: &WeightInput) -> Result<ResolvedWeight, ShippingCalcError> {
    validate_actual_kg(input.actual_kg)?;
    let volumetric = volumetric_kg(input)?;
    let bill_kg = billable_kg(input.actual_kg, volumetric);

    tracing::debug!(
        actual_kg = input.actual_kg,
        volumetric_kg = volumetric,
        bill_kg,
        "resolved parcel weight"
    );

    Ok(ResolvedWeight {
        actual_kg: input.actual_kg,
        volumetric_kg: volumetric,
        bill_kg,
    })
}
