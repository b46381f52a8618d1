// Properties that must hold for any batch of crop records, checked over a
// spread of realistic and edge-case inputs.

use analytics::{round_money, LossAnalyzer};
use approx::assert_relative_eq;
use core_types::CropRecord;

fn sample_batch() -> Vec<CropRecord> {
    let rows = [
        ("Wheat", 100.0, 15.0, 20.0, 2.0, 5.0),
        ("Rice", 1250.5, 18.75, 26.4, 1.85, 7.5),
        ("Onion", 0.0, 12.0, 30.0, 4.0, 20.0),
        ("Tomato", 333.333, 9.99, 14.01, 0.37, 33.3),
        ("Mango", 75.0, 60.0, 55.0, 3.0, 0.0),
        ("Cotton", 2000.0, 58.2, 61.9, 2.25, 1.25),
        ("Chilli", 40.4, 80.0, 140.0, 6.5, 100.0),
        ("Garlic", 12.5, 0.0, 0.0, 0.0, 0.0),
    ];

    rows.into_iter()
        .map(|(crop, qty, farm, market, transport, storage)| {
            CropRecord::new(crop, qty, farm, market, transport, storage).unwrap()
        })
        .collect()
}

#[test]
fn batch_matches_reference_figures() {
    // (farm_gate_total, market_net_total, loss) per crop, in input order.
    let expected = [
        (1500.0, 1700.0, 200.0),
        (23446.88, 28223.78, 4776.91),
        (0.0, 0.0, 0.0),
        (3330.0, 2991.55, 0.0),
        (4500.0, 3900.0, 0.0),
        (116400.0, 117752.5, 1352.5),
        (3232.0, -262.6, 0.0),
        (0.0, 0.0, 0.0),
    ];

    let summary = LossAnalyzer::new().analyze_all(&sample_batch());

    for (row, (farm_gate, market_net, loss)) in summary.rows.iter().zip(expected) {
        assert_eq!(row.farm_gate_total, farm_gate, "{} farm gate", row.crop);
        assert_eq!(row.market_net_total, market_net, "{} market net", row.crop);
        assert_eq!(row.loss, loss, "{} loss", row.crop);
    }
    assert_eq!(summary.total_loss, 6329.41);
}

#[test]
fn every_row_loss_is_non_negative() {
    let analyzer = LossAnalyzer::new();
    for record in sample_batch() {
        let row = analyzer.analyze_record(&record);
        assert!(row.loss >= 0.0, "{} produced {}", row.crop, row.loss);
        assert!(!row.loss.is_sign_negative(), "{} produced -0", row.crop);
    }
}

#[test]
fn total_is_rounded_sum_of_individual_losses() {
    let analyzer = LossAnalyzer::new();
    let records = sample_batch();

    let expected = round_money(records.iter().map(|r| analyzer.analyze_record(r).loss).sum());
    let summary = analyzer.analyze_all(&records);

    assert_eq!(summary.total_loss, expected);
}

#[test]
fn half_cent_ties_follow_the_stored_value() {
    let records = vec![
        CropRecord::new("Maize", 3.0, 0.0, 4.115, 0.0, 0.0).unwrap(),
        CropRecord::new("Tea", 1.0, 0.0, 2.675, 0.0, 0.0).unwrap(),
        CropRecord::new("Tomato", 10.125, 1.0, 2.0, 0.0, 0.0).unwrap(),
    ];

    let summary = LossAnalyzer::new().analyze_all(&records);
    let losses: Vec<f64> = summary.rows.iter().map(|r| r.loss).collect();

    assert_eq!(losses, [12.35, 2.67, 10.12]);
    assert_eq!(summary.total_loss, 25.14);
}

#[test]
fn huge_amounts_are_totalled_without_overflow_panics() {
    let records = vec![
        CropRecord::new("Wheat", 1e15, 1.0, 1e15, 0.0, 0.0).unwrap(),
        CropRecord::new("Wheat", 100.0, 15.0, 20.0, 2.0, 5.0).unwrap(),
    ];

    let summary = LossAnalyzer::new().analyze_all(&records);

    assert_eq!(summary.rows[0].market_net_total, 1e30);
    assert_eq!(summary.rows[0].farm_gate_total, 1e15);
    assert_relative_eq!(summary.total_loss, 1e30 - 1e15 + 200.0, max_relative = 1e-15);
}

#[test]
fn rows_follow_input_order() {
    let records = sample_batch();
    let summary = LossAnalyzer::new().analyze_all(&records);

    assert_eq!(summary.rows.len(), records.len());
    for (row, record) in summary.rows.iter().zip(&records) {
        assert_eq!(row.crop, record.crop);
        assert_eq!(row.quantity_kg, record.quantity_kg);
    }
}

#[test]
fn analysis_is_deterministic() {
    let analyzer = LossAnalyzer::new();
    let records = sample_batch();
    assert_eq!(analyzer.analyze_all(&records), analyzer.analyze_all(&records));
}

#[test]
fn reported_amounts_are_already_rounded() {
    let summary = LossAnalyzer::new().analyze_all(&sample_batch());
    for row in &summary.rows {
        assert_eq!(round_money(row.farm_gate_total), row.farm_gate_total);
        assert_eq!(round_money(row.market_net_total), row.market_net_total);
        assert_eq!(round_money(row.loss), row.loss);
    }
    assert_eq!(round_money(summary.total_loss), summary.total_loss);
}

#[test]
fn full_storage_loss_leaves_only_transport_cost() {
    // Chilli: storage loss of 100% wipes out market value, so the market net is
    // the negative transport bill and the farm-gate sale shows no loss.
    let chilli = &sample_batch()[6];
    let row = LossAnalyzer::new().analyze_record(chilli);

    assert_eq!(row.market_net_total, -262.6);
    assert_eq!(row.farm_gate_total, 3232.0);
    assert_eq!(row.loss, 0.0);
}

#[test]
fn summary_serializes_as_plain_numbers() {
    let summary = LossAnalyzer::new().analyze_all(&sample_batch()[..1]);
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["total_loss"], serde_json::json!(200.0));
    assert_eq!(json["rows"][0]["crop"], "Wheat");
    assert_eq!(json["rows"][0]["market_net_total"], serde_json::json!(1700.0));
    assert_eq!(json["rows"][0]["farm_gate_total"], serde_json::json!(1500.0));
}
