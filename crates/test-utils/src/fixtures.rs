//! Common test fixtures for export core tests.
//!
//! This module provides pre-defined test data that represents common
//! scenarios in forecast data export.

/// Area strings: projection definition plus corner list.
pub mod areas {
    /// Scandinavia in polar stereographic, the classic model output area
    pub const SCANDINAVIA_STERE: &str = "stere,10,90,60:6,51.3,49,70.2";

    /// Northern Europe as a plain lat/lon box
    pub const EUROPE_LATLON: &str = "latlon:-15,35,45,72";

    /// Continental United States in Lambert Conformal
    pub const CONUS_LCC: &str = "lcc,-97.5,38.5,38.5:-120,23,-65,50";

    /// Unknown projection name
    pub const UNKNOWN_PROJECTION: &str = "bogus,1,2,3:6,51.3,49,70.2";

    /// Polar stereographic centered on the equator, which is not supported
    pub const OBLIQUE_STERE: &str = "stere,10,0,60:6,51.3,49,70.2";

    /// Infinite corner longitude
    pub const INFINITE_CORNER: &str = "stere,10,90,60:inf,51.3,49,70.2";

    /// Central longitude far outside any longitude range
    pub const HUGE_CENTRAL_LONGITUDE: &str = "merc,1e300:0,0,10,10";
}

/// Compound parameter identifiers.
pub mod params {
    /// name:producer:geometry:level type:level:forecast type:forecast number
    pub const TEMPERATURE_FULL: &str = "T-K:ECG:1001:2:850:3:12";

    /// Name and producer only
    pub const TEMPERATURE_SHORT: &str = "T-K:ECG";

    /// Non-numeric geometry and level fields
    pub const MALFORMED_NUMBERS: &str = "T-K:ECG:abc:2:85x0:3:1";
}

/// Generation record builders.
pub mod generations {
    use chrono::{TimeZone, Utc};
    use export_common::{GenerationRecord, GenerationStatus};

    /// A generation with the given status and deletion time.
    pub fn generation(status: GenerationStatus, deletion_time: i64) -> GenerationRecord {
        GenerationRecord::new(
            1,
            10,
            "ECG:20240115T000000",
            Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
            status,
        )
        .with_deletion_time(deletion_time)
    }

    /// A ready generation with no deletion scheduled.
    pub fn ready() -> GenerationRecord {
        generation(GenerationStatus::Ready, GenerationRecord::NO_DELETION)
    }

    /// A ready generation scheduled for deletion `secs_from_now` after `now`.
    pub fn ready_deleting_in(now: i64, secs_from_now: i64) -> GenerationRecord {
        generation(GenerationStatus::Ready, now + secs_from_now)
    }
}
