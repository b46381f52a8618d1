//! # Farm-Gate Loss Analytics
//!
//! This crate computes how much a producer gives up by selling at the farm gate
//! instead of taking the crop to market.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of files, forms
//!   or HTTP. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `LossAnalyzer` takes a slice of `CropRecord`s and
//!   produces an `AnalysisSummary`. It never fails over typed input and holds no state,
//!   so any number of callers may share it.
//!
//! ## Public API
//!
//! - `LossAnalyzer`: the calculator.
//! - `AnalysisRow` / `AnalysisSummary`: the per-record breakdown and the aggregate.
//! - `round_money`: the two-decimal, half-to-even rounding used for every reported amount.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod money;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::LossAnalyzer;
pub use money::{round_money, MONEY_DECIMAL_PLACES};
pub use report::{AnalysisRow, AnalysisSummary};
