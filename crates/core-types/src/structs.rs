use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// One crop's price and quantity data, as supplied by a record source.
///
/// Records carry no identity beyond their position in the input sequence and
/// are analyzed independently of one another. Fields are public: `new` checks the
/// crop name, but a record built field by field skips that check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropRecord {
    pub crop: String,
    pub quantity_kg: f64,
    /// Price per kg actually received by the producer.
    pub farm_gate_price_per_kg: f64,
    /// Price per kg obtainable at the destination market.
    pub market_price_per_kg: f64,
    pub transport_cost_per_kg: f64,
    /// Share of market value lost to spoilage, 0-100. Not range checked.
    pub storage_loss_percent: f64,
}

impl CropRecord {
    /// Builds a record, rejecting a blank crop name.
    ///
    /// Numeric fields are taken as-is: zero and negative values pass through.
    pub fn new(
        crop: impl Into<String>,
        quantity_kg: f64,
        farm_gate_price_per_kg: f64,
        market_price_per_kg: f64,
        transport_cost_per_kg: f64,
        storage_loss_percent: f64,
    ) -> Result<Self, CoreError> {
        let crop = crop.into();
        if crop.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "crop".to_string(),
                "name must not be blank".to_string(),
            ));
        }

        Ok(Self {
            crop,
            quantity_kg,
            farm_gate_price_per_kg,
            market_price_per_kg,
            transport_cost_per_kg,
            storage_loss_percent,
        })
    }
}
