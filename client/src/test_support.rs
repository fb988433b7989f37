//! Shared fixtures for unit tests.

use std::collections::BTreeMap;

use crate::net::types::{
    AssemblyCost, BomLine, CostAnalysis, CountCheck, DesignResult, Dsm, OverheadCost, PlacementCheck,
    Requirements, RowCost, RowValue, TradespaceRow, ValidBricksCheck, ValueAnalysis,
};

pub fn sample_design() -> DesignResult {
    let ok = |count| PlacementCheck {
        value: true,
        count,
        alignment: Some(vec![true; count as usize]),
        positioning: Some(vec![true; count as usize]),
    };
    let mut bom = BTreeMap::new();
    bom.insert(
        "3001".to_owned(),
        BomLine { name: "Brick 2 x 4".to_owned(), cost: 0.125, quantity: 4 },
    );
    DesignResult {
        design_id: "d-1".to_owned(),
        name: "Model A".to_owned(),
        designer: "brave otter".to_owned(),
        timestamp: "2021-09-01T14:05:00".to_owned(),
        thumbnail: "iVBORw0KGgo=".to_owned(),
        mass: 12.375,
        volume: 101.25,
        length: 88.0,
        wheelbase: 48.0,
        width: 40.0,
        track: 32.5,
        height: 30.0,
        number_seats: 2,
        cargo_volume: 5.5,
        dsm: Dsm {
            order: vec![1, 0],
            labels: vec!["Seat".to_owned(), "Steering Wheel".to_owned()],
            matrix: vec![vec![false, true], vec![true, false]],
        },
        requirements: Requirements {
            is_only_valid_bricks: ValidBricksCheck { value: true, invalid_bricks: Vec::new() },
            is_fully_connected: CountCheck { value: true, count: 1 },
            is_one_steering_wheel: CountCheck { value: true, count: 1 },
            is_min_one_seat_aligned: ok(1),
            is_min_four_wheels_aligned_on_bottom: ok(4),
            is_min_two_headlights_aligned_on_front: ok(2),
            is_min_two_taillights_aligned_on_back: ok(2),
            is_one_license_plate_aligned_on_back: ok(1),
            is_valid: true,
        },
        cost: CostAnalysis {
            materials: 0.5,
            bom,
            assembly: AssemblyCost { components: 2.0, integration: 3.0, total: 5.0 },
            overhead: OverheadCost {
                engineering: 1.0,
                marketing: 1.25,
                administration: 0.75,
                facilities: 1.0,
                total: 4.0,
            },
            total: 9.5,
        },
        value: ValueAnalysis {
            passenger: 80.0,
            cargo: 60.0,
            handling: 30.0,
            acceleration: 10.0,
            safety: 50.0,
            coolness: 75.0,
            total: 55.0,
            price: 20.0,
        },
        is_valid: true,
        total_cost: 9.5,
        total_revenue: 20.0,
        total_profit: 10.5,
        total_roi: 1.105,
    }
}

pub fn sample_row(id: &str, is_valid: bool, cost: f64, price: f64) -> TradespaceRow {
    TradespaceRow {
        design_id: id.to_owned(),
        thumbnail: format!("thumb-{id}"),
        timestamp: "2021-09-01T14:05:00".to_owned(),
        designer: "brave otter".to_owned(),
        name: format!("Model {id}"),
        is_valid,
        total_cost: cost,
        total_revenue: price,
        total_profit: price - cost,
        total_roi: (price - cost) / cost,
        cost: RowCost { total: cost },
        value: RowValue { price },
    }
}
