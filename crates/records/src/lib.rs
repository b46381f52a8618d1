//! # Crop Record Sources
//!
//! Turns raw input into typed `CropRecord`s for the analyzer. All input sanitizing
//! lives here so that the analyzer stays a total function over typed records:
//!
//! - `CsvSource`: a header-mapped, comma-delimited file. Every numeric field must parse.
//! - `FormRows`: parallel arrays from a submitted form. Blank numbers default to zero.
//!
//! Both skip rows whose crop name is blank.

pub mod amount;
pub mod csv_source;
pub mod error;
pub mod form;

pub use amount::parse_amount;
pub use csv_source::{load_csv, parse_csv, CsvSource};
pub use error::RecordError;
pub use form::FormRows;

use core_types::CropRecord;

/// Column and form field names, in record order.
pub const CROP: &str = "crop";
pub const QUANTITY_KG: &str = "quantity_kg";
pub const FARM_GATE_PRICE_PER_KG: &str = "farm_gate_price_per_kg";
pub const MARKET_PRICE_PER_KG: &str = "market_price_per_kg";
pub const TRANSPORT_COST_PER_KG: &str = "transport_cost_per_kg";
pub const STORAGE_LOSS_PERCENT: &str = "storage_loss_percent";

/// Anything that can produce a batch of crop records.
pub trait RecordSource {
    fn load(&self) -> Result<Vec<CropRecord>, RecordError>;
}
