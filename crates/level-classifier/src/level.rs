//! Vertical level categories and their numeric encodings.
//!
//! Two data-access paths describe the same physical level concepts with
//! different numeric codes: the legacy sequential-access (querydata) path and
//! the grid-storage path. Both are translated into one [`LevelCategory`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Level type codes of the legacy sequential-access encoding.
pub mod legacy_codes {
    /// Any level type, used for plain surface data
    pub const ANY: i32 = 0;
    /// Ground surface
    pub const GROUND: i32 = 1;
    /// Isobaric (pressure) level
    pub const PRESSURE: i32 = 100;
    /// Mean sea level
    pub const MEAN_SEA: i32 = 102;
    /// Altitude above mean sea level
    pub const ALTITUDE: i32 = 103;
    /// Height or depth; the sign of the level value decides which
    pub const HEIGHT_OR_DEPTH: i32 = 105;
    /// Model hybrid level
    pub const HYBRID: i32 = 109;
    /// Depth below surface
    pub const DEPTH: i32 = 160;
}

/// Level type codes of the grid-storage encoding.
pub mod grid_codes {
    /// Ground or water surface
    pub const GROUND: i32 = 1;
    /// Isobaric (pressure) level
    pub const PRESSURE: i32 = 2;
    /// Model hybrid level
    pub const HYBRID: i32 = 3;
    /// Altitude above mean sea level
    pub const ALTITUDE: i32 = 4;
    /// Nominal top of the atmosphere
    pub const NOMINAL_TOP: i32 = 5;
    /// Height above ground
    pub const HEIGHT: i32 = 6;
    /// Mean sea level
    pub const MEAN_SEA: i32 = 7;
    /// Entire atmosphere as a single layer
    pub const ENTIRE_ATMOSPHERE: i32 = 8;
    /// Depth below land surface
    pub const DEPTH_BELOW_LAND: i32 = 9;
    /// Depth below sea surface
    pub const DEPTH: i32 = 10;
    /// Surface (of an unspecified kind)
    pub const SURFACE: i32 = 11;
    /// Most unstable parcel departure level
    pub const MOST_UNSTABLE_PARCEL: i32 = 12;
}

/// Which numeric encoding a level type code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelEncoding {
    /// Sequential-access numeric encoding
    Legacy,
    /// Grid-storage numeric encoding
    GridStorage,
}

/// Semantic category of a vertical level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelCategory {
    Ground,
    Surface,
    Pressure,
    Hybrid,
    Height,
    Depth,
    EntireAtmosphere,
    NominalTop,
    MeanSea,
    MostUnstableParcel,
    Unknown,
}

impl LevelCategory {
    /// Translate a legacy code.
    ///
    /// The ambiguous height-or-depth code is Depth for a negative level
    /// value and Height otherwise, including when no value is known.
    pub fn from_legacy(code: i32, level_value: Option<f64>) -> Self {
        use legacy_codes::*;

        match code {
            ANY => Self::Surface,
            GROUND => Self::Ground,
            PRESSURE => Self::Pressure,
            MEAN_SEA => Self::MeanSea,
            ALTITUDE => Self::Height,
            HEIGHT_OR_DEPTH => match level_value {
                Some(value) if value < 0.0 => Self::Depth,
                _ => Self::Height,
            },
            HYBRID => Self::Hybrid,
            DEPTH => Self::Depth,
            _ => Self::Unknown,
        }
    }

    /// Translate a grid-storage code.
    pub fn from_grid(code: i32) -> Self {
        use grid_codes::*;

        match code {
            GROUND => Self::Ground,
            PRESSURE => Self::Pressure,
            HYBRID => Self::Hybrid,
            ALTITUDE | HEIGHT => Self::Height,
            NOMINAL_TOP => Self::NominalTop,
            MEAN_SEA => Self::MeanSea,
            ENTIRE_ATMOSPHERE => Self::EntireAtmosphere,
            DEPTH_BELOW_LAND | DEPTH => Self::Depth,
            SURFACE => Self::Surface,
            MOST_UNSTABLE_PARCEL => Self::MostUnstableParcel,
            _ => Self::Unknown,
        }
    }

    /// Translate a code of either encoding.
    pub fn from_code(encoding: LevelEncoding, code: i32, level_value: Option<f64>) -> Self {
        match encoding {
            LevelEncoding::Legacy => Self::from_legacy(code, level_value),
            LevelEncoding::GridStorage => Self::from_grid(code),
        }
    }

    /// Canonical code of this category in an encoding, if it has one.
    pub fn to_code(self, encoding: LevelEncoding) -> Option<i32> {
        match encoding {
            LevelEncoding::Legacy => match self {
                Self::Surface => Some(legacy_codes::ANY),
                Self::Ground => Some(legacy_codes::GROUND),
                Self::Pressure => Some(legacy_codes::PRESSURE),
                Self::MeanSea => Some(legacy_codes::MEAN_SEA),
                Self::Height => Some(legacy_codes::HEIGHT_OR_DEPTH),
                Self::Hybrid => Some(legacy_codes::HYBRID),
                Self::Depth => Some(legacy_codes::DEPTH),
                Self::EntireAtmosphere
                | Self::NominalTop
                | Self::MostUnstableParcel
                | Self::Unknown => None,
            },
            LevelEncoding::GridStorage => match self {
                Self::Ground => Some(grid_codes::GROUND),
                Self::Surface => Some(grid_codes::SURFACE),
                Self::Pressure => Some(grid_codes::PRESSURE),
                Self::Hybrid => Some(grid_codes::HYBRID),
                Self::Height => Some(grid_codes::HEIGHT),
                Self::Depth => Some(grid_codes::DEPTH),
                Self::EntireAtmosphere => Some(grid_codes::ENTIRE_ATMOSPHERE),
                Self::NominalTop => Some(grid_codes::NOMINAL_TOP),
                Self::MeanSea => Some(grid_codes::MEAN_SEA),
                Self::MostUnstableParcel => Some(grid_codes::MOST_UNSTABLE_PARCEL),
                Self::Unknown => None,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Ground => "ground",
            Self::Surface => "surface",
            Self::Pressure => "pressure",
            Self::Hybrid => "hybrid",
            Self::Height => "height",
            Self::Depth => "depth",
            Self::EntireAtmosphere => "entire atmosphere",
            Self::NominalTop => "nominal top",
            Self::MeanSea => "mean sea",
            Self::MostUnstableParcel => "most unstable parcel",
            Self::Unknown => "unknown",
        }
    }

    /// Ground and surface data have a single level.
    pub fn is_surface(self) -> bool {
        matches!(self, Self::Ground | Self::Surface)
    }

    pub fn is_known(self) -> bool {
        self != Self::Unknown
    }
}

impl fmt::Display for LevelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a code needs an inspected level value to tell height from depth.
pub fn is_ambiguous_height_or_depth(encoding: LevelEncoding, code: i32) -> bool {
    encoding == LevelEncoding::Legacy && code == legacy_codes::HEIGHT_OR_DEPTH
}

/// Whether a grid-storage level type may be streamed into an output encoding.
///
/// The compact (GRIB-style) encoding additionally accepts mean sea, entire
/// atmosphere, nominal top and most unstable parcel levels.
pub fn is_supported_grid_level_type(compact_output: bool, code: i32) -> bool {
    match LevelCategory::from_grid(code) {
        LevelCategory::Ground
        | LevelCategory::Surface
        | LevelCategory::Pressure
        | LevelCategory::Hybrid
        | LevelCategory::Height
        | LevelCategory::Depth => true,
        LevelCategory::MeanSea
        | LevelCategory::EntireAtmosphere
        | LevelCategory::NominalTop
        | LevelCategory::MostUnstableParcel => compact_output,
        LevelCategory::Unknown => false,
    }
}
