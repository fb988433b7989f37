//! Wire DTOs for the analysis server's JSON responses.
//!
//! DESIGN
//! ======
//! Design payloads use camelCase keys while user payloads keep snake_case, so
//! the serde attributes differ per type. Everything here is read-only once
//! deserialized; components borrow these values for a single render pass.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The logged-in user as returned by `GET /users/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Login email address.
    pub email: String,
    /// Generated display name, if assigned.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    /// Superusers may delete designs from the tradespace.
    #[serde(default)]
    pub is_superuser: bool,
}

impl UserInfo {
    /// Name shown in the navigation bar, falling back to the email.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// A fully evaluated design as returned by `GET /designs/{id}` and the
/// upload endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignResult {
    pub design_id: String,
    pub name: String,
    pub designer: String,
    /// ISO-8601 submission time; offset-less values are UTC.
    pub timestamp: String,
    /// Base64-encoded PNG thumbnail.
    pub thumbnail: String,
    /// Grams.
    pub mass: f64,
    /// Millilitres.
    pub volume: f64,
    /// Millimetres.
    pub length: f64,
    pub wheelbase: f64,
    pub width: f64,
    pub track: f64,
    pub height: f64,
    pub number_seats: u32,
    /// Millilitres.
    pub cargo_volume: f64,
    pub dsm: Dsm,
    pub requirements: Requirements,
    pub cost: CostAnalysis,
    pub value: ValueAnalysis,
    pub is_valid: bool,
    pub total_cost: f64,
    pub total_revenue: f64,
    pub total_profit: f64,
    pub total_roi: f64,
}

/// Design structure matrix: component adjacency plus display order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dsm {
    /// Permutation of label indices giving the row/column display order.
    pub order: Vec<usize>,
    /// One label per component index.
    pub labels: Vec<String>,
    /// Square adjacency matrix; `matrix[a][b]` means `a` connects to `b`.
    pub matrix: Vec<Vec<bool>>,
}

/// Outcome of every named requirement check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirements {
    pub is_only_valid_bricks: ValidBricksCheck,
    pub is_fully_connected: CountCheck,
    pub is_one_steering_wheel: CountCheck,
    pub is_min_one_seat_aligned: PlacementCheck,
    pub is_min_four_wheels_aligned_on_bottom: PlacementCheck,
    pub is_min_two_headlights_aligned_on_front: PlacementCheck,
    pub is_min_two_taillights_aligned_on_back: PlacementCheck,
    pub is_one_license_plate_aligned_on_back: PlacementCheck,
    #[serde(default)]
    pub is_valid: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidBricksCheck {
    pub value: bool,
    /// Catalog ids of bricks outside the allowed palette.
    #[serde(default)]
    pub invalid_bricks: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountCheck {
    pub value: bool,
    pub count: u32,
}

/// A counted check with optional per-instance alignment/positioning flags.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacementCheck {
    pub value: bool,
    pub count: u32,
    #[serde(default)]
    pub alignment: Option<Vec<bool>>,
    #[serde(default)]
    pub positioning: Option<Vec<bool>>,
}

/// Cost breakdown in dollars.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostAnalysis {
    pub materials: f64,
    /// Bill of materials keyed by part id.
    pub bom: BTreeMap<String, BomLine>,
    pub assembly: AssemblyCost,
    pub overhead: OverheadCost,
    pub total: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BomLine {
    pub name: String,
    /// Unit cost.
    pub cost: f64,
    pub quantity: u32,
}

impl BomLine {
    pub fn line_total(&self) -> f64 {
        self.cost * f64::from(self.quantity)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssemblyCost {
    pub components: f64,
    pub integration: f64,
    pub total: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverheadCost {
    pub engineering: f64,
    pub marketing: f64,
    pub administration: f64,
    pub facilities: f64,
    pub total: f64,
}

/// Market scores (0-100) plus the estimated price in dollars.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueAnalysis {
    pub passenger: f64,
    pub cargo: f64,
    pub handling: f64,
    pub acceleration: f64,
    pub safety: f64,
    pub coolness: f64,
    pub total: f64,
    pub price: f64,
}

/// Listing projection of a design, one per tradespace table row.
///
/// The listing endpoint returns whole designs; only the fields the table and
/// chart read are kept.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradespaceRow {
    pub design_id: String,
    pub thumbnail: String,
    pub timestamp: String,
    pub designer: String,
    pub name: String,
    pub is_valid: bool,
    pub total_cost: f64,
    pub total_revenue: f64,
    pub total_profit: f64,
    pub total_roi: f64,
    pub cost: RowCost,
    pub value: RowValue,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RowCost {
    pub total: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RowValue {
    pub price: f64,
}

/// One page of the tradespace listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignPage {
    /// Echo of the request's draw counter.
    pub draw: u64,
    pub records_total: u64,
    pub records_filtered: u64,
    pub designs: Vec<TradespaceRow>,
}
