use serde::{Deserialize, Serialize};

/// The loss breakdown for a single `CropRecord`.
///
/// Totals are rounded to cents; `quantity_kg` is carried through unrounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRow {
    pub crop: String,
    pub quantity_kg: f64,
    /// What the producer actually received.
    pub farm_gate_total: f64,
    /// What the producer would have netted selling at market.
    pub market_net_total: f64,
    /// Shortfall of farm-gate revenue against the market net. Never negative.
    pub loss: f64,
}

/// Per-record rows in input order plus the aggregate loss.
///
/// This struct is the final output of the `LossAnalyzer` and is what the CLI and
/// the HTTP API hand to their presentation layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub rows: Vec<AnalysisRow>,
    pub total_loss: f64,
}

impl AnalysisSummary {
    /// Creates an empty summary with a zero total.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            total_loss: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for AnalysisSummary {
    fn default() -> Self {
        Self::new()
    }
}
