//! Readiness checks for dataset generations.

use chrono::Utc;
use export_common::GenerationRecord;

use crate::config::ClassifierConfig;

/// Seconds a scheduled deletion must still be away for a generation to be
/// read from.
pub const DELETION_GUARD_SECS: i64 = 5;

/// Whether a generation can be read from right now.
pub fn is_valid_generation(record: &GenerationRecord) -> bool {
    is_valid_generation_at(record, Utc::now().timestamp(), DELETION_GUARD_SECS)
}

/// Like [`is_valid_generation`], with the deletion guard taken from
/// configuration.
pub fn is_valid_generation_with(config: &ClassifierConfig, record: &GenerationRecord) -> bool {
    is_valid_generation_at(record, Utc::now().timestamp(), config.deletion_guard_secs)
}

/// Whether a generation can be read from at `now` (unix seconds).
///
/// The generation must be ready, and any scheduled deletion must be at least
/// `guard_secs` beyond `now` so reads in flight are not cut short.
pub fn is_valid_generation_at(record: &GenerationRecord, now: i64, guard_secs: i64) -> bool {
    if !record.is_ready() {
        return false;
    }
    if !record.has_scheduled_deletion() {
        return true;
    }
    record.deletion_time.saturating_sub(now) >= guard_secs
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use export_common::GenerationStatus;

    const NOW: i64 = 1_705_300_000;

    fn record(status: GenerationStatus, deletion_time: i64) -> GenerationRecord {
        GenerationRecord::new(
            7,
            1,
            "PAL:20240115T060000",
            Utc.with_ymd_and_hms(2024, 1, 15, 6, 0, 0).unwrap(),
            status,
        )
        .with_deletion_time(deletion_time)
    }

    #[test]
    fn test_ready_without_deletion() {
        let r = record(GenerationStatus::Ready, GenerationRecord::NO_DELETION);
        assert!(is_valid_generation_at(&r, NOW, DELETION_GUARD_SECS));
        assert!(is_valid_generation(&r));
    }

    #[test]
    fn test_not_ready_is_never_valid() {
        for status in [GenerationStatus::Disabled, GenerationStatus::Running] {
            for deletion in [GenerationRecord::NO_DELETION, NOW + 3600] {
                assert!(!is_valid_generation_at(&record(status, deletion), NOW, 5));
            }
        }
    }

    #[test]
    fn test_configured_guard() {
        let deleting_soon = record(GenerationStatus::Ready, Utc::now().timestamp() + 60);

        let default = ClassifierConfig::default();
        assert!(is_valid_generation_with(&default, &deleting_soon));

        let cautious = ClassifierConfig {
            deletion_guard_secs: 600,
            ..Default::default()
        };
        assert!(!is_valid_generation_with(&cautious, &deleting_soon));
        assert!(is_valid_generation_with(
            &cautious,
            &record(GenerationStatus::Ready, GenerationRecord::NO_DELETION)
        ));
    }

    #[test]
    fn test_deletion_guard() {
        let ready = |deletion| record(GenerationStatus::Ready, deletion);

        assert!(is_valid_generation_at(&ready(NOW + 60), NOW, 5));
        assert!(is_valid_generation_at(&ready(NOW + 5), NOW, 5));
        assert!(!is_valid_generation_at(&ready(NOW + 4), NOW, 5));
        assert!(!is_valid_generation_at(&ready(NOW), NOW, 5));
        assert!(!is_valid_generation_at(&ready(NOW - 100), NOW, 5));
    }
}
