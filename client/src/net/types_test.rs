use super::*;

// =============================================================
// Helpers
// =============================================================

fn design_json() -> serde_json::Value {
    serde_json::json!({
        "designId": "abc123",
        "name": "Model A",
        "designer": "brave otter",
        "timestamp": "2021-09-01T14:05:00",
        "thumbnail": "iVBORw0KGgo=",
        "mass": 12.345,
        "volume": 101.25,
        "length": 88.0,
        "wheelbase": 48.0,
        "width": 40.0,
        "track": 32.0,
        "height": 30.0,
        "numberSeats": 1,
        "cargoVolume": 5.5,
        "dsm": {
            "version": "1.0.0",
            "order": [1, 0],
            "labels": ["Seat", "Wheel"],
            "matrix": [[false, true], [true, false]]
        },
        "requirements": {
            "version": "1.0.0",
            "isOnlyValidBricks": { "value": false, "invalidBricks": ["3001", "3002"] },
            "isFullyConnected": { "value": true, "count": 1 },
            "isOneSteeringWheel": { "value": true, "count": 1 },
            "isMinOneSeatAligned": { "value": true, "count": 1, "alignment": [true] },
            "isMinFourWheelsAlignedOnBottom": {
                "value": false, "count": 4,
                "alignment": [true, true, false, true],
                "positioning": [true, true, true, true]
            },
            "isMinTwoHeadlightsAlignedOnFront": { "value": true, "count": 2 },
            "isMinTwoTaillightsAlignedOnBack": { "value": true, "count": 2 },
            "isOneLicensePlateAlignedOnBack": { "value": true, "count": 1 },
            "isValid": false
        },
        "cost": {
            "version": "1.0.0",
            "materials": 1.5,
            "bom": { "3001": { "name": "Brick 2 x 4", "cost": 0.125, "quantity": 4 } },
            "assembly": { "components": 2.0, "integration": 3.0, "total": 5.0 },
            "overhead": {
                "engineering": 1.0, "marketing": 1.0,
                "administration": 1.0, "facilities": 1.0, "total": 4.0
            },
            "total": 10.5
        },
        "value": {
            "version": "1.0.0",
            "passenger": 80.0, "cargo": 60.0, "handling": 30.0,
            "acceleration": 10.0, "safety": 50.0, "coolness": 75.0,
            "total": 55.0, "price": 20.0
        },
        "isValid": false,
        "totalCost": 10.5,
        "totalRevenue": 20.0,
        "totalProfit": 9.5,
        "totalRoi": 0.904
    })
}

// =============================================================
// DesignResult
// =============================================================

#[test]
fn design_result_reads_camel_case_fields() {
    let design: DesignResult = serde_json::from_value(design_json()).unwrap();
    assert_eq!(design.design_id, "abc123");
    assert_eq!(design.number_seats, 1);
    assert_eq!(design.cargo_volume, 5.5);
    assert!(!design.is_valid);
    assert_eq!(design.total_roi, 0.904);
}

#[test]
fn design_result_reads_nested_requirements() {
    let design: DesignResult = serde_json::from_value(design_json()).unwrap();
    let req = &design.requirements;
    assert_eq!(req.is_only_valid_bricks.invalid_bricks, vec!["3001", "3002"]);
    assert_eq!(
        req.is_min_four_wheels_aligned_on_bottom.alignment,
        Some(vec![true, true, false, true])
    );
    assert_eq!(req.is_min_two_headlights_aligned_on_front.alignment, None);
    assert_eq!(req.is_min_two_headlights_aligned_on_front.positioning, None);
}

#[test]
fn design_result_ignores_version_fields() {
    let design: DesignResult = serde_json::from_value(design_json()).unwrap();
    assert_eq!(design.dsm.order, vec![1, 0]);
    assert_eq!(design.cost.bom["3001"].quantity, 4);
    assert_eq!(design.value.price, 20.0);
}

#[test]
fn bom_line_total_multiplies_unit_cost_by_quantity() {
    let line = BomLine { name: "Brick".to_owned(), cost: 0.125, quantity: 4 };
    assert_eq!(line.line_total(), 0.5);
}

// =============================================================
// TradespaceRow / DesignPage
// =============================================================

#[test]
fn tradespace_row_projects_full_design() {
    let row: TradespaceRow = serde_json::from_value(design_json()).unwrap();
    assert_eq!(row.design_id, "abc123");
    assert_eq!(row.cost.total, 10.5);
    assert_eq!(row.value.price, 20.0);
    assert_eq!(row.total_profit, 9.5);
}

#[test]
fn design_page_reads_paging_metadata() {
    let page: DesignPage = serde_json::from_value(serde_json::json!({
        "draw": 3,
        "recordsTotal": 40,
        "recordsFiltered": 12,
        "designs": [design_json()]
    }))
    .unwrap();
    assert_eq!(page.draw, 3);
    assert_eq!(page.records_total, 40);
    assert_eq!(page.records_filtered, 12);
    assert_eq!(page.designs.len(), 1);
}

// =============================================================
// UserInfo
// =============================================================

#[test]
fn user_info_reads_snake_case_flags() {
    let user: UserInfo = serde_json::from_value(serde_json::json!({
        "id": "u-1",
        "email": "a@b.com",
        "name": "brave otter",
        "is_active": true,
        "is_superuser": true,
        "is_verified": false
    }))
    .unwrap();
    assert!(user.is_superuser);
    assert_eq!(user.display_name(), "brave otter");
}

#[test]
fn user_info_display_name_falls_back_to_email() {
    let user: UserInfo = serde_json::from_value(serde_json::json!({
        "id": "u-1",
        "email": "a@b.com"
    }))
    .unwrap();
    assert!(!user.is_superuser);
    assert_eq!(user.display_name(), "a@b.com");
}
