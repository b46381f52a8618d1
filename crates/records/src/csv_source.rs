use crate::amount::parse_amount;
use crate::error::RecordError;
use crate::{
    RecordSource, FARM_GATE_PRICE_PER_KG, MARKET_PRICE_PER_KG, QUANTITY_KG, STORAGE_LOSS_PERCENT,
    TRANSPORT_COST_PER_KG,
};
use core_types::CropRecord;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// One CSV row before its amounts are parsed. Columns are matched by header name.
#[derive(Debug, Deserialize)]
struct RawRow {
    crop: String,
    quantity_kg: String,
    farm_gate_price_per_kg: String,
    market_price_per_kg: String,
    transport_cost_per_kg: String,
    storage_loss_percent: String,
}

/// A crop price CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for CsvSource {
    fn load(&self) -> Result<Vec<CropRecord>, RecordError> {
        load_csv(&self.path)
    }
}

/// Opens and parses a crop price CSV file.
pub fn load_csv(path: &Path) -> Result<Vec<CropRecord>, RecordError> {
    let file = File::open(path).map_err(|source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_csv(file)?;
    tracing::info!(path = %path.display(), records = records.len(), "Loaded crop records from CSV.");
    Ok(records)
}

/// Parses comma-delimited crop rows with a required header row.
///
/// Extra columns are ignored. A missing column or an unparseable amount fails the
/// whole file; rows with a blank crop name are skipped.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<CropRecord>, RecordError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let mut records = Vec::new();

    for result in reader.records() {
        let string_record = result?;
        let line = string_record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or_default();
        let raw: RawRow = string_record.deserialize(Some(&headers))?;

        if raw.crop.is_empty() {
            tracing::warn!(line, "Skipping CSV row with a blank crop name.");
            continue;
        }

        let amount = |field: &'static str, value: &str| -> Result<f64, RecordError> {
            parse_amount(value).ok_or_else(|| RecordError::InvalidNumber {
                row: line,
                field,
                value: value.to_string(),
            })
        };

        records.push(CropRecord::new(
            raw.crop.as_str(),
            amount(QUANTITY_KG, &raw.quantity_kg)?,
            amount(FARM_GATE_PRICE_PER_KG, &raw.farm_gate_price_per_kg)?,
            amount(MARKET_PRICE_PER_KG, &raw.market_price_per_kg)?,
            amount(TRANSPORT_COST_PER_KG, &raw.transport_cost_per_kg)?,
            amount(STORAGE_LOSS_PERCENT, &raw.storage_loss_percent)?,
        )?);
    }

    Ok(records)
}
