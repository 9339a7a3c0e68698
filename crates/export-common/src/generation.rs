//! Dataset generation records.
//!
//! A generation is one production run of a forecast or analysis dataset.
//! Records are owned by the content catalog; the export core only reads them.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Readiness of a generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    Disabled,
    Ready,
    Running,
}

impl GenerationStatus {
    /// Catalog status codes: 0 = disabled, 1 = ready, 2 = running.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Disabled),
            1 => Some(Self::Ready),
            2 => Some(Self::Running),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Self::Disabled => 0,
            Self::Ready => 1,
            Self::Running => 2,
        }
    }
}

/// A dataset production run as registered in the content catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    pub generation_id: u32,
    pub producer_id: u32,
    /// Generation name, e.g. "ECG:20240115T000000"
    pub name: String,
    pub analysis_time: DateTime<Utc>,
    pub status: GenerationStatus,
    /// Scheduled deletion as Unix seconds; 0 means no deletion is scheduled.
    #[serde(default)]
    pub deletion_time: i64,
}

impl GenerationRecord {
    /// Sentinel for "no deletion scheduled".
    pub const NO_DELETION: i64 = 0;

    pub fn new(
        generation_id: u32,
        producer_id: u32,
        name: impl Into<String>,
        analysis_time: DateTime<Utc>,
        status: GenerationStatus,
    ) -> Self {
        Self {
            generation_id,
            producer_id,
            name: name.into(),
            analysis_time,
            status,
            deletion_time: Self::NO_DELETION,
        }
    }

    /// Set the scheduled deletion time (Unix seconds).
    pub fn with_deletion_time(mut self, deletion_time: i64) -> Self {
        self.deletion_time = deletion_time;
        self
    }

    pub fn is_ready(&self) -> bool {
        self.status == GenerationStatus::Ready
    }

    pub fn has_scheduled_deletion(&self) -> bool {
        self.deletion_time != Self::NO_DELETION
    }

    /// Scheduled deletion as a timestamp, or None if none is scheduled.
    pub fn deletion_datetime(&self) -> Option<DateTime<Utc>> {
        if !self.has_scheduled_deletion() {
            return None;
        }
        Utc.timestamp_opt(self.deletion_time, 0).single()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_status_codes() {
        for status in [
            GenerationStatus::Disabled,
            GenerationStatus::Ready,
            GenerationStatus::Running,
        ] {
            assert_eq!(GenerationStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(GenerationStatus::from_code(7), None);
    }

    #[test]
    fn test_deletion_datetime() {
        let record = GenerationRecord::new(1, 2, "ECG:20240115T000000", analysis(), GenerationStatus::Ready);
        assert!(!record.has_scheduled_deletion());
        assert_eq!(record.deletion_datetime(), None);

        let record = record.with_deletion_time(1_705_320_000);
        assert_eq!(
            record.deletion_datetime().unwrap().timestamp(),
            1_705_320_000
        );
    }

    #[test]
    fn test_deserialize_record() {
        let json = r#"{
            "generation_id": 42,
            "producer_id": 7,
            "name": "ECG:20240115T000000",
            "analysis_time": "2024-01-15T00:00:00Z",
            "status": "ready"
        }"#;

        let record: GenerationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.generation_id, 42);
        assert!(record.is_ready());
        assert_eq!(record.deletion_time, GenerationRecord::NO_DELETION);
        assert_eq!(record.analysis_time, analysis());
    }
}
