//! Common types shared by the weather data export crates.

pub mod bbox;
pub mod crs;
pub mod error;
pub mod generation;

pub use bbox::BoundingBox;
pub use crs::{CrsCode, Datum};
pub use error::{ExportError, ExportResult};
pub use generation::{GenerationRecord, GenerationStatus};
