use crate::money::round_money;
use crate::report::{AnalysisRow, AnalysisSummary};
use core_types::CropRecord;

/// A stateless calculator comparing farm-gate revenue with the net a producer
/// could have realized at market.
#[derive(Debug, Default, Clone, Copy)]
pub struct LossAnalyzer {}

impl LossAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the loss breakdown for one record.
    ///
    /// The market net is market revenue less transport cost and the storage loss
    /// (a percentage of market revenue). The loss is the market net minus farm-gate
    /// revenue, rounded to cents and clamped at zero: a producer who did better at
    /// the farm gate shows no loss rather than a gain.
    ///
    /// Amounts too large for `f64` overflow to infinity instead of panicking. A loss
    /// that comes out as NaN is clamped to zero like any other non-positive loss.
    pub fn analyze_record(&self, record: &CropRecord) -> AnalysisRow {
        let qty = record.quantity_kg;

        let market_value = record.market_price_per_kg * qty;
        let transport_cost_value = record.transport_cost_per_kg * qty;
        let storage_loss_value = (record.storage_loss_percent / 100.0) * market_value;

        let net_if_sold_at_market = market_value - transport_cost_value - storage_loss_value;
        let actual_revenue = record.farm_gate_price_per_kg * qty;

        let loss_raw = round_money(net_if_sold_at_market - actual_revenue);
        let loss = if loss_raw > 0.0 { loss_raw } else { 0.0 };

        tracing::trace!(
            crop = %record.crop,
            net_if_sold_at_market,
            actual_revenue,
            loss,
            "Analyzed crop record."
        );

        AnalysisRow {
            crop: record.crop.clone(),
            quantity_kg: qty,
            farm_gate_total: round_money(actual_revenue),
            market_net_total: round_money(net_if_sold_at_market),
            loss,
        }
    }

    /// The main entry point: analyzes every record in order and totals the losses.
    ///
    /// An empty slice yields an empty summary with a zero total.
    pub fn analyze_all(&self, records: &[CropRecord]) -> AnalysisSummary {
        let rows: Vec<AnalysisRow> = records.iter().map(|r| self.analyze_record(r)).collect();
        // `Sum for f64` starts from -0.0; the total of no rows must be a plain zero.
        let total_loss = round_money(rows.iter().fold(0.0, |acc, r| acc + r.loss));

        tracing::debug!(records = rows.len(), total_loss, "Loss analysis complete.");

        AnalysisSummary { rows, total_loss }
    }
}
