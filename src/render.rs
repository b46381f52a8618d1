use analytics::AnalysisSummary;
use comfy_table::{Cell, CellAlignment, Table};

fn money(amount: f64) -> Cell {
    Cell::new(format!("{amount:.2}")).set_alignment(CellAlignment::Right)
}

/// Renders the per-crop breakdown followed by the total loss line.
pub fn render_table(summary: &AnalysisSummary) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        "Crop",
        "Quantity (kg)",
        "Farm-gate total",
        "Market net total",
        "Loss",
    ]);

    for row in &summary.rows {
        table.add_row(vec![
            Cell::new(&row.crop),
            Cell::new(row.quantity_kg).set_alignment(CellAlignment::Right),
            money(row.farm_gate_total),
            money(row.market_net_total),
            money(row.loss),
        ]);
    }

    format!("{table}\nTotal estimated loss: {:.2}", summary.total_loss)
}
