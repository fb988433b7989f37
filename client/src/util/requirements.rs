//! Requirement-check messages for the design detail view.
//!
//! Counted checks (seats, wheels, lights, plate) have a minimum count. Only
//! once a design reaches that minimum do the per-instance alignment and
//! positioning failures get listed.

#[cfg(test)]
#[path = "requirements_test.rs"]
mod requirements_test;

use crate::net::types::{PlacementCheck, Requirements};

const BRICK_CATALOG_URL: &str = "https://www.bricklink.com/v2/catalog/catalogitem.page?P=";

/// Every requirement shown on the design tab, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequirementKind {
    ValidBricks,
    FullyConnected,
    OneSteeringWheel,
    Seat,
    Wheels,
    Headlights,
    Taillights,
    LicensePlate,
}

impl RequirementKind {
    pub const ALL: [RequirementKind; 8] = [
        RequirementKind::ValidBricks,
        RequirementKind::FullyConnected,
        RequirementKind::OneSteeringWheel,
        RequirementKind::Seat,
        RequirementKind::Wheels,
        RequirementKind::Headlights,
        RequirementKind::Taillights,
        RequirementKind::LicensePlate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RequirementKind::ValidBricks => "Only valid bricks",
            RequirementKind::FullyConnected => "Fully connected",
            RequirementKind::OneSteeringWheel => "One steering wheel",
            RequirementKind::Seat => "At least one seat aligned",
            RequirementKind::Wheels => "At least four wheels aligned on bottom",
            RequirementKind::Headlights => "At least two headlights aligned on front",
            RequirementKind::Taillights => "At least two taillights aligned on back",
            RequirementKind::LicensePlate => "One license plate aligned on back",
        }
    }

    /// Minimum instance count before placement failures are reported.
    /// `None` for checks without a placement concept.
    pub fn min_count(self) -> Option<u32> {
        match self {
            RequirementKind::ValidBricks
            | RequirementKind::FullyConnected
            | RequirementKind::OneSteeringWheel => None,
            RequirementKind::Seat | RequirementKind::LicensePlate => Some(1),
            RequirementKind::Headlights | RequirementKind::Taillights => Some(2),
            RequirementKind::Wheels => Some(4),
        }
    }
}

/// Message body for one requirement check.
#[derive(Clone, Debug, PartialEq)]
pub enum RequirementMessage {
    Valid,
    Text(String),
    /// Catalog ids of disallowed bricks, rendered as links.
    InvalidBricks(Vec<String>),
}

impl RequirementMessage {
    /// Plain-text rendering (links collapse to their ids).
    pub fn plain_text(&self) -> String {
        match self {
            RequirementMessage::Valid => "Valid".to_owned(),
            RequirementMessage::Text(text) => text.clone(),
            RequirementMessage::InvalidBricks(ids) => format!("Invalid bricks: {}.", ids.join(", ")),
        }
    }
}

/// A single evaluated row in the requirements list.
#[derive(Clone, Debug, PartialEq)]
pub struct RequirementCheck {
    pub kind: RequirementKind,
    pub is_valid: bool,
    pub message: RequirementMessage,
}

/// Catalog page for a brick id.
pub fn brick_catalog_url(id: &str) -> String {
    format!("{BRICK_CATALOG_URL}{id}")
}

/// Build the full requirements list for a design.
pub fn requirement_checks(req: &Requirements) -> Vec<RequirementCheck> {
    RequirementKind::ALL
        .iter()
        .map(|&kind| {
            let (is_valid, message) = match kind {
                RequirementKind::ValidBricks => {
                    let check = &req.is_only_valid_bricks;
                    let message = if check.value {
                        RequirementMessage::Valid
                    } else {
                        RequirementMessage::InvalidBricks(check.invalid_bricks.clone())
                    };
                    (check.value, message)
                }
                RequirementKind::FullyConnected => {
                    let check = &req.is_fully_connected;
                    (check.value, count_message(check.value, format!("{} components detected.", check.count)))
                }
                RequirementKind::OneSteeringWheel => {
                    let check = &req.is_one_steering_wheel;
                    (check.value, count_message(check.value, format!("{} detected.", check.count)))
                }
                RequirementKind::Seat => placement_entry(&req.is_min_one_seat_aligned, kind),
                RequirementKind::Wheels => placement_entry(&req.is_min_four_wheels_aligned_on_bottom, kind),
                RequirementKind::Headlights => placement_entry(&req.is_min_two_headlights_aligned_on_front, kind),
                RequirementKind::Taillights => placement_entry(&req.is_min_two_taillights_aligned_on_back, kind),
                RequirementKind::LicensePlate => placement_entry(&req.is_one_license_plate_aligned_on_back, kind),
            };
            RequirementCheck { kind, is_valid, message }
        })
        .collect()
}

fn count_message(valid: bool, text: String) -> RequirementMessage {
    if valid { RequirementMessage::Valid } else { RequirementMessage::Text(text) }
}

fn placement_entry(check: &PlacementCheck, kind: RequirementKind) -> (bool, RequirementMessage) {
    let min_count = kind.min_count().unwrap_or(0);
    (check.value, placement_message(check, min_count))
}

/// Describe a counted placement check.
///
/// Invalid checks report the detected count, then list failing 1-based
/// instances for alignment and positioning, but only when `count` has
/// reached `min_count`.
pub fn placement_message(check: &PlacementCheck, min_count: u32) -> RequirementMessage {
    if check.value {
        return RequirementMessage::Valid;
    }
    let mut text = format!("{} detected.", check.count);
    if check.count >= min_count {
        if let Some(clause) = failure_clause(check.alignment.as_deref(), "aligned") {
            text.push_str(&clause);
        }
        if let Some(clause) = failure_clause(check.positioning.as_deref(), "positioned") {
            text.push_str(&clause);
        }
    }
    RequirementMessage::Text(text)
}

fn failure_clause(flags: Option<&[bool]>, kind: &str) -> Option<String> {
    let failed: Vec<String> = flags?
        .iter()
        .enumerate()
        .filter(|(_, ok)| !**ok)
        .map(|(i, _)| format!(" #{}", i + 1))
        .collect();
    if failed.is_empty() {
        return None;
    }
    Some(format!("{} not {kind} correctly.", failed.join(",")))
}
