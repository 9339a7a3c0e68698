//! Classification of the vertical levels of a data source.

use export_common::{ExportError, ExportResult};
use serde::Serialize;
use tracing::{debug, warn};

use crate::level::{is_ambiguous_height_or_depth, LevelCategory};
use crate::source::LevelSource;

/// Picks the level value whose sign separates height from depth.
///
/// Producers differ in how they mark depth levels, so the heuristic can be
/// swapped per data source. Called with the cursor on the first level.
pub trait HeightOrDepthProbe {
    fn probe<S: LevelSource + ?Sized>(&self, source: &mut S) -> f64;
}

/// Inspects the second level, or the first when there is only one.
///
/// The first level of a height-or-depth source is often 0, which carries no
/// sign.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecondLevelProbe;

impl HeightOrDepthProbe for SecondLevelProbe {
    fn probe<S: LevelSource + ?Sized>(&self, source: &mut S) -> f64 {
        if !source.next_level() {
            source.first_level();
        }
        source.level_value()
    }
}

/// Result of classifying a data source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SourceLevels {
    pub category: LevelCategory,
    /// Whether the inspected level value is non-negative.
    pub positive_levels: bool,
}

impl SourceLevels {
    /// Direction of increasing level values, as used in output metadata.
    pub fn positive_attribute(&self) -> &'static str {
        let downward = matches!(
            self.category,
            LevelCategory::Depth | LevelCategory::Pressure
        );
        if downward == self.positive_levels {
            "down"
        } else {
            "up"
        }
    }
}

/// Classifies data sources by inspecting their levels.
#[derive(Debug, Clone, Default)]
pub struct LevelClassifier<P = SecondLevelProbe> {
    probe: P,
}

impl LevelClassifier<SecondLevelProbe> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: HeightOrDepthProbe> LevelClassifier<P> {
    pub fn with_probe(probe: P) -> Self {
        Self { probe }
    }

    /// Determine the level category of a source.
    ///
    /// An ambiguous height-or-depth type is resolved by the probe. Fails for
    /// a source without levels, with a level type no encoding knows, or whose
    /// inspected level value is not finite. The cursor is left on the first
    /// level.
    pub fn classify<S: LevelSource + ?Sized>(&self, source: &mut S) -> ExportResult<SourceLevels> {
        const OP: &str = "classify_levels";

        if !source.first_level() {
            return Err(ExportError::configuration(OP, "", "source has no levels"));
        }

        let encoding = source.encoding();
        let code = source.level_type();
        let value = if is_ambiguous_height_or_depth(encoding, code) {
            let value = self.probe.probe(source);
            source.first_level();
            value
        } else {
            source.level_value()
        };

        let category = LevelCategory::from_code(encoding, code, Some(value));
        if !category.is_known() {
            warn!(code, ?encoding, "Unknown level type in source");
            return Err(ExportError::configuration(
                OP,
                code.to_string(),
                "unknown level type",
            ));
        }

        if !value.is_finite() {
            warn!(code, value, "Level value without a sign");
            return Err(ExportError::configuration(
                OP,
                value.to_string(),
                "level value is not a finite number",
            ));
        }

        let levels = SourceLevels {
            category,
            positive_levels: value >= 0.0,
        };
        debug!(code, %category, positive_levels = levels.positive_levels, "Classified levels");
        Ok(levels)
    }

    /// Whether level magnitudes grow from the first level to the second.
    ///
    /// Sources with a single level, or surface data, count as ascending.
    pub fn levels_ascending<S: LevelSource + ?Sized>(&self, source: &mut S) -> bool {
        if !source.first_level() {
            return true;
        }

        let category = LevelCategory::from_code(source.encoding(), source.level_type(), None);
        if category.is_surface() {
            return true;
        }

        let first = source.level_value().abs();
        let ascending = if source.next_level() {
            first < source.level_value().abs()
        } else {
            true
        };
        source.first_level();
        ascending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{grid_codes, legacy_codes, LevelEncoding};
    use crate::source::{Level, MemoryLevelSource};

    fn legacy(code: i32, values: &[f64]) -> MemoryLevelSource {
        MemoryLevelSource::uniform(LevelEncoding::Legacy, code, values)
    }

    #[test]
    fn test_depth_from_second_level() {
        let mut source = legacy(legacy_codes::HEIGHT_OR_DEPTH, &[0.0, -50.0, -100.0]);
        let levels = LevelClassifier::new().classify(&mut source).unwrap();

        assert_eq!(levels.category, LevelCategory::Depth);
        assert!(!levels.positive_levels);
        assert_eq!(levels.positive_attribute(), "up");
        assert_eq!(source.level_value(), 0.0);
    }

    #[test]
    fn test_height_from_second_level() {
        let mut source = legacy(legacy_codes::HEIGHT_OR_DEPTH, &[0.0, 2.0, 10.0]);
        let levels = LevelClassifier::new().classify(&mut source).unwrap();

        assert_eq!(levels.category, LevelCategory::Height);
        assert!(levels.positive_levels);
        assert_eq!(levels.positive_attribute(), "up");
    }

    #[test]
    fn test_single_ambiguous_level_uses_first() {
        let mut source = legacy(legacy_codes::HEIGHT_OR_DEPTH, &[-5.0]);
        let levels = LevelClassifier::new().classify(&mut source).unwrap();
        assert_eq!(levels.category, LevelCategory::Depth);
    }

    #[test]
    fn test_unambiguous_types() {
        let classifier = LevelClassifier::new();

        let mut pressure = legacy(legacy_codes::PRESSURE, &[1000.0, 850.0]);
        let levels = classifier.classify(&mut pressure).unwrap();
        assert_eq!(levels.category, LevelCategory::Pressure);
        assert_eq!(levels.positive_attribute(), "down");

        let mut depth = MemoryLevelSource::uniform(
            LevelEncoding::GridStorage,
            grid_codes::DEPTH,
            &[5.0, 10.0],
        );
        let levels = classifier.classify(&mut depth).unwrap();
        assert_eq!(levels.category, LevelCategory::Depth);
        assert!(levels.positive_levels);
        assert_eq!(levels.positive_attribute(), "down");
    }

    #[test]
    fn test_classify_errors() {
        let classifier = LevelClassifier::new();

        let mut empty = MemoryLevelSource::new(LevelEncoding::Legacy, Vec::new());
        assert!(classifier.classify(&mut empty).unwrap_err().is_configuration());

        let mut unknown = legacy(42, &[1.0]);
        let err = classifier.classify(&mut unknown).unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(err.value(), "42");
    }

    #[test]
    fn test_non_finite_level_value_is_error() {
        let classifier = LevelClassifier::new();

        let mut source = legacy(legacy_codes::HEIGHT_OR_DEPTH, &[0.0, f64::NAN]);
        let err = classifier.classify(&mut source).unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(err.value(), "NaN");

        let mut source = legacy(legacy_codes::PRESSURE, &[f64::INFINITY]);
        assert!(classifier.classify(&mut source).is_err());
    }

    #[test]
    fn test_custom_probe() {
        struct FirstLevelProbe;

        impl HeightOrDepthProbe for FirstLevelProbe {
            fn probe<S: LevelSource + ?Sized>(&self, source: &mut S) -> f64 {
                source.level_value()
            }
        }

        let mut source = legacy(legacy_codes::HEIGHT_OR_DEPTH, &[0.0, -50.0]);
        let levels = LevelClassifier::with_probe(FirstLevelProbe)
            .classify(&mut source)
            .unwrap();
        assert_eq!(levels.category, LevelCategory::Height);
    }

    #[test]
    fn test_levels_ascending() {
        let classifier = LevelClassifier::new();

        assert!(classifier.levels_ascending(&mut legacy(legacy_codes::HEIGHT_OR_DEPTH, &[2.0, 10.0])));
        assert!(classifier.levels_ascending(&mut legacy(legacy_codes::HEIGHT_OR_DEPTH, &[0.0, -50.0])));
        assert!(!classifier.levels_ascending(&mut legacy(legacy_codes::PRESSURE, &[1000.0, 850.0])));
        assert!(classifier.levels_ascending(&mut legacy(legacy_codes::PRESSURE, &[850.0])));

        let mut surface = MemoryLevelSource::new(
            LevelEncoding::Legacy,
            vec![Level::new(legacy_codes::GROUND, 10.0), Level::new(legacy_codes::GROUND, 0.0)],
        );
        assert!(classifier.levels_ascending(&mut surface));
    }
}
