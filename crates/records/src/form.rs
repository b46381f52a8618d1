use crate::amount::parse_amount;
use crate::error::RecordError;
use crate::{
    RecordSource, CROP, FARM_GATE_PRICE_PER_KG, MARKET_PRICE_PER_KG, QUANTITY_KG,
    STORAGE_LOSS_PERCENT, TRANSPORT_COST_PER_KG,
};
use core_types::CropRecord;
use serde::Deserialize;

/// Manually entered rows, submitted as parallel arrays (`crop[]`, `quantity_kg[]`, ...).
///
/// The crop array decides how many rows there are. Index `i` of every other array
/// belongs to crop `i`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FormRows {
    #[serde(rename = "crop[]", default)]
    pub crop: Vec<String>,
    #[serde(rename = "quantity_kg[]", default)]
    pub quantity_kg: Vec<String>,
    #[serde(rename = "farm_gate_price_per_kg[]", default)]
    pub farm_gate_price_per_kg: Vec<String>,
    #[serde(rename = "market_price_per_kg[]", default)]
    pub market_price_per_kg: Vec<String>,
    #[serde(rename = "transport_cost_per_kg[]", default)]
    pub transport_cost_per_kg: Vec<String>,
    #[serde(rename = "storage_loss_percent[]", default)]
    pub storage_loss_percent: Vec<String>,
}

impl FormRows {
    /// Collects decoded form pairs in submission order.
    ///
    /// Keys may carry the `[]` array suffix or not (`crop[]` and `crop` both land in
    /// the crop array). Unknown keys are ignored.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut rows = Self::default();

        for (key, value) in fields {
            let key = key.as_ref();
            let name = key.strip_suffix("[]").unwrap_or(key);
            let column = match name {
                CROP => &mut rows.crop,
                QUANTITY_KG => &mut rows.quantity_kg,
                FARM_GATE_PRICE_PER_KG => &mut rows.farm_gate_price_per_kg,
                MARKET_PRICE_PER_KG => &mut rows.market_price_per_kg,
                TRANSPORT_COST_PER_KG => &mut rows.transport_cost_per_kg,
                STORAGE_LOSS_PERCENT => &mut rows.storage_loss_percent,
                _ => {
                    tracing::trace!(key, "Ignoring unknown form field.");
                    continue;
                }
            };
            column.push(value.into());
        }

        rows
    }

    /// Converts the submitted arrays into records.
    ///
    /// Rows with a blank crop are dropped and crop names are trimmed. A blank or
    /// absent amount counts as zero. Any other amount that fails to parse rejects
    /// the whole submission.
    pub fn into_records(&self) -> Result<Vec<CropRecord>, RecordError> {
        let mut records = Vec::with_capacity(self.crop.len());

        for (i, crop) in self.crop.iter().enumerate() {
            let crop = crop.trim();
            if crop.is_empty() {
                continue;
            }

            let row = i + 1;
            records.push(CropRecord::new(
                crop,
                amount_or_zero(&self.quantity_kg, i, row, QUANTITY_KG)?,
                amount_or_zero(&self.farm_gate_price_per_kg, i, row, FARM_GATE_PRICE_PER_KG)?,
                amount_or_zero(&self.market_price_per_kg, i, row, MARKET_PRICE_PER_KG)?,
                amount_or_zero(&self.transport_cost_per_kg, i, row, TRANSPORT_COST_PER_KG)?,
                amount_or_zero(&self.storage_loss_percent, i, row, STORAGE_LOSS_PERCENT)?,
            )?);
        }

        tracing::debug!(submitted = self.crop.len(), accepted = records.len(), "Parsed form rows.");
        Ok(records)
    }
}

impl RecordSource for FormRows {
    fn load(&self) -> Result<Vec<CropRecord>, RecordError> {
        self.into_records()
    }
}

fn amount_or_zero(
    values: &[String],
    index: usize,
    row: usize,
    field: &'static str,
) -> Result<f64, RecordError> {
    match values.get(index).map(|v| v.trim()) {
        None | Some("") => Ok(0.0),
        Some(text) => parse_amount(text).ok_or_else(|| RecordError::InvalidNumber {
            row,
            field,
            value: text.to_string(),
        }),
    }
}
