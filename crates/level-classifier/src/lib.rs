//! Vertical level classification and parameter identifier parsing.
//!
//! Decides which vertical levels, generations and forecast variants a query
//! may stream: level type codes of both storage encodings are translated to
//! one [`LevelCategory`], data sources are classified by inspecting their
//! levels, and compound parameter identifiers are split into typed fields.
//! Everything here is stateless.

pub mod classifier;
pub mod config;
pub mod forecast;
pub mod generation;
pub mod level;
pub mod param_name;
pub mod source;

pub use classifier::{HeightOrDepthProbe, LevelClassifier, SecondLevelProbe, SourceLevels};
pub use config::ClassifierConfig;
pub use forecast::is_ensemble_forecast;
pub use generation::{
    is_valid_generation, is_valid_generation_at, is_valid_generation_with, DELETION_GUARD_SECS,
};
pub use level::{
    is_ambiguous_height_or_depth, is_supported_grid_level_type, LevelCategory, LevelEncoding,
};
pub use param_name::{NumericParsing, ParameterName, ParameterNameParser};
pub use source::{Level, LevelSource, MemoryLevelSource};
