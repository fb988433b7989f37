//! Design structure matrix layout.
//!
//! Turns the server's `(order, labels, matrix)` triple into header and row
//! cells in display order, so the component only has to emit markup.

#[cfg(test)]
#[path = "dsm_test.rs"]
mod dsm_test;

use crate::net::types::Dsm;

const NBSP: char = '\u{a0}';

/// Display state of one matrix cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DsmCell {
    /// A component against itself.
    Diagonal,
    /// Connected pair.
    Strong,
    /// Unconnected pair.
    Weak,
}

impl DsmCell {
    pub fn text(self) -> &'static str {
        match self {
            DsmCell::Diagonal | DsmCell::Strong => "1",
            DsmCell::Weak => "0",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            DsmCell::Diagonal => "dsm-cell dsm-cell--self bg-secondary text-secondary",
            DsmCell::Strong => "dsm-cell dsm-cell--strong bg-dark text-dark",
            DsmCell::Weak => "dsm-cell dsm-cell--weak text-white",
        }
    }
}

/// Column header: 1-based position plus the full label for the tooltip.
#[derive(Clone, Debug, PartialEq)]
pub struct DsmHeader {
    pub position: usize,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DsmRow {
    pub position: usize,
    pub label: String,
    pub cells: Vec<DsmCell>,
}

impl DsmRow {
    /// Row heading, e.g. `"1: Steering Wheel"`, with every space non-breaking
    /// so a long label never wraps.
    pub fn heading(&self) -> String {
        format!("{}: {}", self.position, self.label).replace(' ', &NBSP.to_string())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DsmLayout {
    pub headers: Vec<DsmHeader>,
    pub rows: Vec<DsmRow>,
}

/// Check the matrix is square over the labels and `order` is a permutation.
pub fn is_well_formed(dsm: &Dsm) -> bool {
    let n = dsm.labels.len();
    if dsm.matrix.len() != n || dsm.matrix.iter().any(|row| row.len() != n) {
        return false;
    }
    if dsm.order.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &idx in &dsm.order {
        match seen.get_mut(idx) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

/// Lay out the matrix in `dsm.order`. Out-of-range lookups read as
/// unconnected and missing labels as empty.
pub fn layout(dsm: &Dsm) -> DsmLayout {
    let label = |idx: usize| dsm.labels.get(idx).cloned().unwrap_or_default();
    let connected = |from: usize, to: usize| {
        dsm.matrix
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .unwrap_or(false)
    };

    let headers = dsm
        .order
        .iter()
        .enumerate()
        .map(|(i, &idx)| DsmHeader { position: i + 1, label: label(idx) })
        .collect();

    let rows = dsm
        .order
        .iter()
        .enumerate()
        .map(|(i, &from)| {
            let cells = dsm
                .order
                .iter()
                .map(|&to| {
                    if from == to {
                        DsmCell::Diagonal
                    } else if connected(from, to) {
                        DsmCell::Strong
                    } else {
                        DsmCell::Weak
                    }
                })
                .collect();
            DsmRow { position: i + 1, label: label(from), cells }
        })
        .collect();

    DsmLayout { headers, rows }
}
