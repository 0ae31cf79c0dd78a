use proptest::prelude::*;
use shipping_calc::{
    calc_shipment_from_items, calc_shipping_fee, format_fee, resolve_fee, BagSpec, ErrorCode,
    FeeTier, ShipmentLineItem, WeightInput,
};

fn item(kg: f64, quantity: u32) -> ShipmentLineItem {
    ShipmentLineItem::new(WeightInput::new(kg), quantity)
}

#[test]
fn test_tier_boundaries() {
    let expected = [
        (1.0, 70, FeeTier::Bag, Some(BagSpec::SmallLe3Kg)),
        (2.0, 70, FeeTier::Bag, Some(BagSpec::SmallLe3Kg)),
        (3.0, 70, FeeTier::Bag, Some(BagSpec::SmallLe3Kg)),
        (4.0, 120, FeeTier::Bag, Some(BagSpec::MediumLe5Kg)),
        (5.0, 120, FeeTier::Bag, Some(BagSpec::MediumLe5Kg)),
        (6.0, 160, FeeTier::Bag, Some(BagSpec::BigLe8Kg)),
        (7.0, 160, FeeTier::Bag, Some(BagSpec::BigLe8Kg)),
        (8.0, 160, FeeTier::Bag, Some(BagSpec::BigLe8Kg)),
        (9.0, 455, FeeTier::RateTable, None),
        (10.0, 515, FeeTier::RateTable, None),
        (11.0, 575, FeeTier::RateTable, None),
        (25.0, 1415, FeeTier::RateTable, None),
        (50.0, 2915, FeeTier::RateTable, None),
    ];

    for (kg, fee, tier, bag_spec) in expected {
        let quote = calc_shipping_fee(&WeightInput::new(kg)).unwrap();
        assert_eq!(quote.fee, fee, "{} kg", kg);
        assert_eq!(quote.tier, tier, "{} kg", kg);
        assert_eq!(quote.bag_spec, bag_spec, "{} kg", kg);
        assert_eq!(quote.method, "JNT_MINDORO");
    }
}

#[test]
fn test_above_fifty_kg_requires_manual_quote() {
    let err = calc_shipping_fee(&WeightInput::new(51.0)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ManualQuoteRequired);

    let err = calc_shipping_fee(&WeightInput::new(50.2)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ManualQuoteRequired);
}

#[test]
fn test_weight_just_over_a_boundary_rounds_up() {
    let quote = calc_shipping_fee(&WeightInput::new(8.000001)).unwrap();
    assert_eq!(quote.bill_kg, 9);
    assert_eq!(quote.tier, FeeTier::RateTable);
    assert_eq!(quote.fee, 455);

    let quote = calc_shipping_fee(&WeightInput::new(3.0000004)).unwrap();
    assert_eq!(quote.bill_kg, 4);
    assert_eq!(quote.fee, 120);

    for kg in [50.000001, 50.0000004] {
        let err = calc_shipping_fee(&WeightInput::new(kg)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ManualQuoteRequired, "{} kg", kg);
    }
}

#[test]
fn test_validation_errors() {
    let err = calc_shipping_fee(&WeightInput::new(0.0)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationError);

    let length_and_width_only = WeightInput {
        actual_kg: 1.0,
        length_cm: Some(20.0),
        width_cm: Some(10.0),
        height_cm: None,
    };
    let err = calc_shipping_fee(&length_and_width_only).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationError);
}

#[test]
fn test_volumetric_weight_drives_the_fee() {
    let quote = calc_shipping_fee(&WeightInput::with_dimensions(1.0, 50.0, 40.0, 30.0)).unwrap();
    assert_eq!(quote.volumetric_kg, 12.0);
    assert_eq!(quote.actual_kg, 1.0);
    assert_eq!(quote.bill_kg, 12);
    assert_eq!(quote.tier, FeeTier::RateTable);
    assert_eq!(quote.fee, 635);
}

#[test]
fn test_aggregation_multiplies_quantity() {
    let quote = calc_shipment_from_items(&[item(2.0, 2), item(1.0, 1)]).unwrap();
    assert_eq!(quote.actual_kg, 5.0);
    assert_eq!(quote.fee, 120);
    assert_eq!(quote.tier, FeeTier::Bag);
    assert_eq!(quote.bag_spec, Some(BagSpec::MediumLe5Kg));

    let quote = calc_shipment_from_items(&[item(5.0, 1), item(4.0, 1)]).unwrap();
    assert_eq!(quote.bill_kg, 9);
    assert_eq!(quote.fee, 455);
    assert_eq!(quote.tier, FeeTier::RateTable);
}

#[test]
fn test_aggregation_mixes_dimensioned_and_plain_items() {
    let quote = calc_shipment_from_items(&[
        ShipmentLineItem::new(WeightInput::with_dimensions(0.5, 50.0, 40.0, 30.0), 1),
        item(0.5, 1),
    ])
    .unwrap();

    assert_eq!(quote.volumetric_kg, 12.0);
    assert_eq!(quote.actual_kg, 1.0);
    assert_eq!(quote.bill_kg, 12);
    assert_eq!(quote.tier, FeeTier::RateTable);
    assert_eq!(quote.fee, 635);
}

#[test]
fn test_aggregation_fails_atomically() {
    let err = calc_shipment_from_items(&[item(1.0, 1), item(-2.0, 1)]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationError);

    let err = calc_shipment_from_items(&[]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationError);
}

#[test]
fn test_format_fee() {
    assert_eq!(format_fee(515, 10), "₱515 (10 kg)");
    let formatted = format_fee(2915, 50);
    assert!(formatted.contains("2,915"));
    assert_eq!(formatted, "₱2,915 (50 kg)");
}

proptest! {
    #[test]
    fn prop_fee_is_monotonic(k1 in 1u32..=50, k2 in 1u32..=50) {
        let (low, high) = if k1 <= k2 { (k1, k2) } else { (k2, k1) };
        let low_fee = resolve_fee(low).unwrap().fee;
        let high_fee = resolve_fee(high).unwrap().fee;
        prop_assert!(low_fee <= high_fee);
    }

    #[test]
    fn prop_light_parcels_bill_one_kg(actual_kg in 0.001f64..=1.0) {
        let quote = calc_shipping_fee(&WeightInput::new(actual_kg)).unwrap();
        prop_assert_eq!(quote.bill_kg, 1);
        prop_assert_eq!(quote.fee, 70);
    }

    #[test]
    fn prop_bill_kg_covers_actual_weight(actual_kg in 0.001f64..=50.0) {
        let quote = calc_shipping_fee(&WeightInput::new(actual_kg)).unwrap();
        prop_assert!(quote.bill_kg >= 1);
        prop_assert!(f64::from(quote.bill_kg) >= actual_kg);
        prop_assert!(f64::from(quote.bill_kg) < actual_kg + 1.0);
    }

    #[test]
    fn prop_volumetric_weight_dominates_when_heavier(
        actual_kg in 0.1f64..=1.0,
        length in 20.0f64..=60.0,
        width in 20.0f64..=60.0,
        height in 20.0f64..=60.0,
    ) {
        let input = WeightInput::with_dimensions(actual_kg, length, width, height);
        let volumetric = length * width * height / 5000.0;
        prop_assume!(volumetric > actual_kg && volumetric <= 50.0);

        let quote = calc_shipping_fee(&input).unwrap();
        let from_volumetric = calc_shipping_fee(&WeightInput::new(volumetric)).unwrap();
        prop_assert_eq!(quote.bill_kg, from_volumetric.bill_kg);
        prop_assert_eq!(quote.fee, from_volumetric.fee);
    }

    #[test]
    fn prop_quotes_are_deterministic(actual_kg in 0.001f64..=60.0) {
        let input = WeightInput::new(actual_kg);
        prop_assert_eq!(calc_shipping_fee(&input), calc_shipping_fee(&input));
    }
}
