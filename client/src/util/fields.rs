//! Typed display bindings for the design detail view.
//!
//! Each enum lists one group of on-screen fields. A variant knows its label,
//! which value it reads from a [`DesignResult`], and how that value is
//! formatted, so the detail component iterates `ALL` instead of addressing
//! fields by string id.

#[cfg(test)]
#[path = "fields_test.rs"]
mod fields_test;

use crate::net::types::DesignResult;
use crate::util::format::{self, TieredText};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhysicalField {
    Mass,
    Volume,
    Length,
    Wheelbase,
    Width,
    Track,
    Height,
    NumberSeats,
    CargoVolume,
}

impl PhysicalField {
    pub const ALL: [PhysicalField; 9] = [
        PhysicalField::Mass,
        PhysicalField::Volume,
        PhysicalField::Length,
        PhysicalField::Wheelbase,
        PhysicalField::Width,
        PhysicalField::Track,
        PhysicalField::Height,
        PhysicalField::NumberSeats,
        PhysicalField::CargoVolume,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PhysicalField::Mass => "Mass",
            PhysicalField::Volume => "Volume",
            PhysicalField::Length => "Length",
            PhysicalField::Wheelbase => "Wheelbase",
            PhysicalField::Width => "Width",
            PhysicalField::Track => "Track",
            PhysicalField::Height => "Height",
            PhysicalField::NumberSeats => "Number of seats",
            PhysicalField::CargoVolume => "Cargo volume",
        }
    }

    pub fn render(self, design: &DesignResult) -> String {
        match self {
            PhysicalField::Mass => format::measure(design.mass, 2, "g"),
            PhysicalField::Volume => format::measure(design.volume, 1, "mL"),
            PhysicalField::Length => format::measure(design.length, 1, "mm"),
            PhysicalField::Wheelbase => format::measure(design.wheelbase, 1, "mm"),
            PhysicalField::Width => format::measure(design.width, 1, "mm"),
            PhysicalField::Track => format::measure(design.track, 1, "mm"),
            PhysicalField::Height => format::measure(design.height, 1, "mm"),
            PhysicalField::NumberSeats => design.number_seats.to_string(),
            PhysicalField::CargoVolume => format::measure(design.cargo_volume, 1, "mL"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CostField {
    Materials,
    Assembly,
    AssemblyComponents,
    AssemblyIntegration,
    Overhead,
    OverheadMarketing,
    OverheadEngineering,
    OverheadFacilities,
    OverheadAdministration,
    Total,
}

impl CostField {
    pub const ALL: [CostField; 10] = [
        CostField::Materials,
        CostField::Assembly,
        CostField::AssemblyComponents,
        CostField::AssemblyIntegration,
        CostField::Overhead,
        CostField::OverheadMarketing,
        CostField::OverheadEngineering,
        CostField::OverheadFacilities,
        CostField::OverheadAdministration,
        CostField::Total,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CostField::Materials => "Materials",
            CostField::Assembly => "Assembly",
            CostField::AssemblyComponents => "Components",
            CostField::AssemblyIntegration => "Integration",
            CostField::Overhead => "Overhead",
            CostField::OverheadMarketing => "Marketing",
            CostField::OverheadEngineering => "Engineering",
            CostField::OverheadFacilities => "Facilities",
            CostField::OverheadAdministration => "Administration",
            CostField::Total => "Total",
        }
    }

    /// Sub-costs are indented under their parent line.
    pub fn is_detail(self) -> bool {
        matches!(
            self,
            CostField::AssemblyComponents
                | CostField::AssemblyIntegration
                | CostField::OverheadMarketing
                | CostField::OverheadEngineering
                | CostField::OverheadFacilities
                | CostField::OverheadAdministration
        )
    }

    pub fn amount(self, design: &DesignResult) -> f64 {
        let cost = &design.cost;
        match self {
            CostField::Materials => cost.materials,
            CostField::Assembly => cost.assembly.total,
            CostField::AssemblyComponents => cost.assembly.components,
            CostField::AssemblyIntegration => cost.assembly.integration,
            CostField::Overhead => cost.overhead.total,
            CostField::OverheadMarketing => cost.overhead.marketing,
            CostField::OverheadEngineering => cost.overhead.engineering,
            CostField::OverheadFacilities => cost.overhead.facilities,
            CostField::OverheadAdministration => cost.overhead.administration,
            CostField::Total => cost.total,
        }
    }

    pub fn render(self, design: &DesignResult) -> String {
        format::money(self.amount(design))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreField {
    Passenger,
    Cargo,
    Handling,
    Acceleration,
    Safety,
    Coolness,
    Total,
}

impl ScoreField {
    pub const ALL: [ScoreField; 7] = [
        ScoreField::Passenger,
        ScoreField::Cargo,
        ScoreField::Handling,
        ScoreField::Acceleration,
        ScoreField::Safety,
        ScoreField::Coolness,
        ScoreField::Total,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ScoreField::Passenger => "Passenger",
            ScoreField::Cargo => "Cargo",
            ScoreField::Handling => "Handling",
            ScoreField::Acceleration => "Acceleration",
            ScoreField::Safety => "Safety",
            ScoreField::Coolness => "Coolness",
            ScoreField::Total => "Total",
        }
    }

    pub fn value(self, design: &DesignResult) -> f64 {
        let value = &design.value;
        match self {
            ScoreField::Passenger => value.passenger,
            ScoreField::Cargo => value.cargo,
            ScoreField::Handling => value.handling,
            ScoreField::Acceleration => value.acceleration,
            ScoreField::Safety => value.safety,
            ScoreField::Coolness => value.coolness,
            ScoreField::Total => value.total,
        }
    }

    pub fn render(self, design: &DesignResult) -> TieredText {
        format::score(self.value(design))
    }
}

/// `data:` URL for a base64 PNG thumbnail.
pub fn thumbnail_src(base64_png: &str) -> String {
    format!("data:image/png;base64,{base64_png}")
}

/// Caption under the detail thumbnail.
pub fn caption(design: &DesignResult) -> String {
    format!("{}: {}", design.designer, design.name)
}
